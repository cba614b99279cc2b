use anyhow::Result;

use crate::error::ErrorKind;
use crate::vm::frame::{Flow, Frame};

const NO_WAYPOINT: &str = "No waypoint to return to";

// ([) c( -- waypoint ) Open a loop that `]` repeats while input remains
pub(crate) fn set_input_waypoint(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.input_wp.push(frame.pc);
    Ok(Flow::Next)
}

// (]) c,i( waypoint -- ) Jump back to the last `[` unless the cursor reached the end
pub(crate) fn use_input_waypoint(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    if frame.cursor < frame.input.len() {
        let Some(target) = frame.input_wp.pop() else {
            return Err(frame.fail(ErrorKind::MissingWaypoint, NO_WAYPOINT));
        };
        tracing::trace!(target: "east::vm::waypoint", from = frame.pc, to = target, cursor = frame.cursor, "input loop");
        return Ok(Flow::Goto(target));
    }
    // Loop finished; its waypoint must not leak into an enclosing loop.
    frame.input_wp.pop();
    Ok(Flow::Next)
}

// ({) c( -- waypoint ) Open a loop that `}` repeats while the top item is non-zero
pub(crate) fn set_data_waypoint(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.data_wp.push(frame.pc);
    Ok(Flow::Next)
}

// (}) c,d( waypoint top -- top ) Jump back to the last `{` while the top item is non-zero
pub(crate) fn use_data_waypoint(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let keep_going = frame.ctx.data.peek().is_some_and(|top| !top.is_zero());
    if keep_going {
        let Some(target) = frame.data_wp.pop() else {
            return Err(frame.fail(ErrorKind::MissingWaypoint, NO_WAYPOINT));
        };
        tracing::trace!(target: "east::vm::waypoint", from = frame.pc, to = target, "data loop");
        return Ok(Flow::Goto(target));
    }
    frame.data_wp.pop();
    Ok(Flow::Next)
}

// (?) d,c( b a -- b ) Pop `a`; skip the next byte when it equals the new top
pub(crate) fn skip_if_equal(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.require(2)?;
    let a = frame.data().pop()?;
    let equal = frame.ctx.data.peek() == Some(a);
    if !equal {
        return Ok(Flow::Next);
    }
    if frame.pc + 1 >= frame.program.len() {
        return Err(frame.fail(ErrorKind::NoInstructionToSkip, "No instruction to skip to"));
    }
    Ok(Flow::Goto(frame.pc + 2))
}
