//! Execution engine
//!
//! A program runs in a [`Frame`](frame::Frame) that walks the program text one
//! byte at a time and dispatches each byte through a flat handler table.
//! Frames for `=` and `$` nest on top of the same [`VmContext`], so the value
//! stack and the user-instruction table are shared while control flow stays
//! isolated.

mod context;
mod dispatch;
mod escape;
mod frame;
mod handlers;
#[allow(clippy::module_inception)]
mod vm;
mod waypoint;

pub use context::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, VmConfig, VmContext};
pub use escape::{ESCAPED, escape};
pub use vm::Vm;
pub use waypoint::WaypointStack;

#[cfg(test)]
mod vm_test;
