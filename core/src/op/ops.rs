use std::fmt::Display;

use crate::val::{Mode, Val};

/// Binary arithmetic on two values of the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(BinOp::Add),
            b'-' => Some(BinOp::Sub),
            b'*' => Some(BinOp::Mul),
            b'/' => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Compute `l op r`, where `r` was the top of the stack.
    ///
    /// Both operands come from one stack and so share a mode; the result is
    /// computed in the mode of `l`. Byte arithmetic wraps. Dividing by zero
    /// divides by one instead.
    pub fn eval_vals(&self, l: &Val, r: &Val) -> Val {
        debug_assert_eq!(l.mode(), r.mode(), "operands of {self} must share a mode");
        match l.mode() {
            Mode::Byte => Val::Byte(self.eval_byte(l.to_byte() as i8, r.to_byte() as i8)),
            Mode::Float => Val::Float(self.eval_float(l.as_f64() as f32, r.as_f64() as f32)),
            Mode::Double => Val::Double(self.eval_double(l.as_f64(), r.as_f64())),
        }
    }

    fn eval_byte(&self, l: i8, r: i8) -> i8 {
        match self {
            BinOp::Add => l.wrapping_add(r),
            BinOp::Sub => l.wrapping_sub(r),
            BinOp::Mul => l.wrapping_mul(r),
            BinOp::Div => l.wrapping_div(if r != 0 { r } else { 1 }),
        }
    }

    fn eval_float(&self, l: f32, r: f32) -> f32 {
        match self {
            BinOp::Add => l + r,
            BinOp::Sub => l - r,
            BinOp::Mul => l * r,
            BinOp::Div => l / if r != 0.0 { r } else { 1.0 },
        }
    }

    fn eval_double(&self, l: f64, r: f64) -> f64 {
        match self {
            BinOp::Add => l + r,
            BinOp::Sub => l - r,
            BinOp::Mul => l * r,
            BinOp::Div => l / if r != 0.0 { r } else { 1.0 },
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
        }
    }
}
