use anyhow::Result;

use crate::error::ErrorKind;
use crate::vm::frame::{Flow, Frame};

const BODY_END: u8 = b'^';

// (%) c( name body ^ -- ) Record `body` as user instruction `name`, callable with `$name`
pub(crate) fn declare_instruction(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let missing_end = || frame.fail(ErrorKind::MissingTerminator, "Expected '^' on function definition, got EOF");

    let Some(name) = frame.operand() else {
        return Err(missing_end());
    };
    let body_start = frame.pc + 2;
    let Some(len) = frame.program[body_start..].iter().position(|b| *b == BODY_END) else {
        return Err(missing_end());
    };
    let body_end = body_start + len;

    tracing::debug!(
        target: "east::vm::user",
        name = %(name as char),
        len,
        "declare user instruction"
    );
    frame.ctx.declare(name, &frame.program[body_start..body_end]);
    Ok(Flow::Goto(body_end + 1))
}

// ($) c( user_defined -- user_defined ) Run user instruction named by the next byte
pub(crate) fn call_instruction(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let Some(name) = frame.operand() else {
        return Err(frame.fail(
            ErrorKind::UnexpectedEnd,
            "Tried to call EOF as an user defined instruction",
        ));
    };
    match frame.ctx.user_instruction(name) {
        Some(body) => frame.exec_nested(&body)?,
        None => {
            tracing::debug!(target: "east::vm::user", name = %(name as char), "call to undeclared user instruction");
        }
    }
    Ok(Flow::Goto(frame.pc + 2))
}
