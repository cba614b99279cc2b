//! Stack values.
//!
//! A run picks one [`Mode`] up front and every value on its stack is of that
//! mode. [`Val`] keeps the tag anyway so handlers can match on it without
//! consulting the stack.

use std::fmt;

mod display;
mod stack;

pub use display::{format_number, write_char, write_number};
pub use stack::ValueStack;

/// Numeric representation used by a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Narrow signed byte; arithmetic wraps.
    #[default]
    Byte,
    Float,
    Double,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Byte => "byte",
            Mode::Float => "float",
            Mode::Double => "double",
        }
    }

    /// Zero of this mode; also the sentinel `=` searches for.
    pub fn zero(self) -> Val {
        match self {
            Mode::Byte => Val::Byte(0),
            Mode::Float => Val::Float(0.0),
            Mode::Double => Val::Double(0.0),
        }
    }

    /// Cast a raw program/input byte into this mode.
    ///
    /// Bytes are reinterpreted as signed first, so 0xFF is -1 in every mode.
    pub fn from_byte(self, byte: u8) -> Val {
        let signed = byte as i8;
        match self {
            Mode::Byte => Val::Byte(signed),
            Mode::Float => Val::Float(signed as f32),
            Mode::Double => Val::Double(signed as f64),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Byte(i8),
    Float(f32),
    Double(f64),
}

impl Val {
    pub fn mode(&self) -> Mode {
        match self {
            Val::Byte(_) => Mode::Byte,
            Val::Float(_) => Mode::Float,
            Val::Double(_) => Mode::Double,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Val::Byte(b) => *b == 0,
            Val::Float(f) => *f == 0.0,
            Val::Double(d) => *d == 0.0,
        }
    }

    /// Narrow to a single byte, as when printing with `;` or turning stack
    /// contents back into program text. Floats truncate toward zero and keep
    /// the low eight bits.
    pub fn to_byte(&self) -> u8 {
        match self {
            Val::Byte(b) => *b as u8,
            Val::Float(f) => (*f as i64) as u8,
            Val::Double(d) => (*d as i64) as u8,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Val::Byte(b) => *b as f64,
            Val::Float(f) => *f as f64,
            Val::Double(d) => *d,
        }
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(*self))
    }
}
