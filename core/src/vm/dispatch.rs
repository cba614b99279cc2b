use anyhow::Result;
use once_cell::sync::Lazy;

use super::frame::{Flow, Frame};
use super::handlers;

pub(crate) type Handler = fn(&mut Frame<'_, '_>) -> Result<Flow>;

const TABLE_SIZE: usize = 128;

/// Opcode table. Every byte pushes itself unless overridden here.
static DISPATCH: Lazy<[Handler; TABLE_SIZE]> = Lazy::new(build_table);

fn build_table() -> [Handler; TABLE_SIZE] {
    let mut table: [Handler; TABLE_SIZE] = [handlers::push_literal as Handler; TABLE_SIZE];

    // Uses the executed string
    table[b'\\' as usize] = handlers::push_escaped;
    table[b'#' as usize] = handlers::comment;
    // Uses the input string
    table[b'<' as usize] = handlers::prev_char;
    table[b'>' as usize] = handlers::next_char;
    table[b'.' as usize] = handlers::push_input;
    // Uses the top of the data
    table[b',' as usize] = handlers::pop_item;
    table[b'&' as usize] = handlers::dup_item;
    table[b';' as usize] = handlers::print_char;
    table[b':' as usize] = handlers::print_number;
    // Uses the two topmost items
    table[b'+' as usize] = handlers::add;
    table[b'-' as usize] = handlers::sub;
    table[b'*' as usize] = handlers::mul;
    table[b'/' as usize] = handlers::div;
    table[b'?' as usize] = handlers::skip_if_equal;
    // Uses the entire data
    table[b'!' as usize] = handlers::reverse_data;
    table[b'@' as usize] = handlers::rotate_data;
    table[b'=' as usize] = handlers::exec_data;
    // Waypoints
    table[b'[' as usize] = handlers::set_input_waypoint;
    table[b']' as usize] = handlers::use_input_waypoint;
    table[b'{' as usize] = handlers::set_data_waypoint;
    table[b'}' as usize] = handlers::use_data_waypoint;
    // User instructions
    table[b'%' as usize] = handlers::declare_instruction;
    table[b'$' as usize] = handlers::call_instruction;

    table
}

#[inline]
pub(crate) fn handler_for(byte: u8) -> Handler {
    match DISPATCH.get(byte as usize) {
        Some(handler) => *handler,
        None => handlers::push_literal,
    }
}

