//! Opcode handlers, grouped by what they operate on.
//!
//! Each handler runs with the frame's `pc` on its own opcode and reports where
//! execution continues through [`Flow`](super::frame::Flow).

mod control;
mod data;
mod input;
mod user;

pub(crate) use control::*;
pub(crate) use data::*;
pub(crate) use input::*;
pub(crate) use user::*;
