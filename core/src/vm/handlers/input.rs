use anyhow::Result;

use crate::vm::frame::{Flow, Frame};

// (>) i( -- ) Advance the input cursor, stopping at the end position
pub(crate) fn next_char(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    if frame.cursor < frame.input.len() {
        frame.cursor += 1;
    }
    Ok(Flow::Next)
}

// (<) i( -- ) Step the input cursor back, stopping at the start
pub(crate) fn prev_char(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    frame.cursor = frame.cursor.saturating_sub(1);
    Ok(Flow::Next)
}

// (.) i->d( in -- item ) Push the input byte under the cursor; 0 at the end position
pub(crate) fn push_input(frame: &mut Frame<'_, '_>) -> Result<Flow> {
    let byte = frame.input.get(frame.cursor).copied().unwrap_or(0);
    frame.data().push_byte(byte)?;
    Ok(Flow::Next)
}
