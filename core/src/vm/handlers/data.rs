use anyhow::Result;

use crate::error::ErrorKind;
use crate::op::BinOp;
use crate::val::{Val, write_char, write_number};
use crate::vm::escape::escape;
use crate::vm::frame::{Flow, Frame};

// (any other byte) e->d( char -- item ) Push the byte itself
pub(crate) fn push_literal(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let byte = frame.current();
    frame.data().push_byte(byte)?;
    Ok(Flow::Next)
}

// (\) e->d( char -- escaped ) Push the following byte through the escape table
pub(crate) fn push_escaped(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let Some(byte) = frame.operand() else {
        return Err(frame.fail(ErrorKind::UnexpectedEnd, "Expected a character to escape, got EOF"));
    };
    frame.data().push_byte(escape(byte))?;
    Ok(Flow::Goto(frame.pc + 2))
}

// (#) e( skip -> ) Ignore everything up to the next newline
pub(crate) fn comment(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let rest = &frame.program[frame.pc..];
    let target = match rest.iter().position(|b| *b == b'\n') {
        Some(offset) => frame.pc + offset + 1,
        None => frame.program.len(),
    };
    Ok(Flow::Goto(target))
}

// (,) d( top -- ) Drop the top item
pub(crate) fn pop_item(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(1)?;
    frame.data().pop()?;
    Ok(Flow::Next)
}

// (&) d( top -- top top ) Duplicate the top item
pub(crate) fn dup_item(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(1)?;
    frame.data().duplicate_top()?;
    Ok(Flow::Next)
}

// (;) d( top -- ) Pop and print the top item as a byte
pub(crate) fn print_char(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(1)?;
    let val = frame.data().pop()?;
    write_char(&mut *frame.out, val)?;
    Ok(Flow::Next)
}

// (:) d( top -- ) Pop and print the top item as a number
pub(crate) fn print_number(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(1)?;
    let val = frame.data().pop()?;
    write_number(&mut *frame.out, val)?;
    Ok(Flow::Next)
}

fn arith(frame: &mut Frame<'_, '_>, op: BinOp) -> Result<Flow> {
    frame.require(2)?;
    let data = frame.data();
    let a = data.pop()?;
    let b = data.pop()?;
    data.push(op.eval_vals(&b, &a))?;
    Ok(Flow::Next)
}

// (+) d( b a -- b+a )
pub(crate) fn add(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    arith(frame, BinOp::Add)
}

// (-) d( b a -- b-a )
pub(crate) fn sub(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    arith(frame, BinOp::Sub)
}

// (*) d( b a -- b*a )
pub(crate) fn mul(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    arith(frame, BinOp::Mul)
}

// (/) d( b a -- b/a ) A zero divisor is replaced by 1
pub(crate) fn div(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    arith(frame, BinOp::Div)
}

// (!) d( everything -- reversed )
pub(crate) fn reverse_data(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.data().reverse_all();
    Ok(Flow::Next)
}

// (@) d( bottom ... -- ... bottom ) Rotate once: 'a' 'b' 'c' -> 'b' 'c' 'a'
pub(crate) fn rotate_data(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.data().rotate();
    Ok(Flow::Next)
}

// (=) d( 0 code... -- 0 code... ) Run everything above the nearest zero as a program.
// Nothing is popped; the child frame sees the code on the stack.
pub(crate) fn exec_data(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(1)?;
    let items = frame.ctx.data.as_slice();
    let start = items.iter().rposition(Val::is_zero).map_or(0, |idx| idx + 1);
    let code: Vec<u8> = items[start..].iter().map(Val::to_byte).collect();
    frame.exec_nested(&code)?;
    Ok(Flow::Next)
}
