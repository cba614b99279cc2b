use std::fmt;

use crate::error::EastError;

use super::{Mode, Val};

const INITIAL_CAPACITY: usize = 10;

/// Homogeneous value stack. The mode is fixed for the stack's lifetime.
#[derive(Debug, Clone)]
pub struct ValueStack {
    mode: Mode,
    items: Vec<Val>,
}

impl ValueStack {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Bottom-to-top view of the stack.
    pub fn as_slice(&self) -> &[Val] {
        &self.items
    }

    pub fn peek(&self) -> Option<Val> {
        self.items.last().copied()
    }

    /// Push a value of the stack's mode, doubling the buffer when full.
    pub fn push(&mut self, val: Val) -> Result<(), EastError> {
        debug_assert_eq!(val.mode(), self.mode, "value mode must match stack mode");
        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(INITIAL_CAPACITY);
            self.items
                .try_reserve_exact(grow_by)
                .map_err(|_| EastError::out_of_memory())?;
        }
        self.items.push(val);
        Ok(())
    }

    /// Cast a raw byte into the stack's mode and push it.
    pub fn push_byte(&mut self, byte: u8) -> Result<(), EastError> {
        self.push(self.mode.from_byte(byte))
    }

    pub fn pop(&mut self) -> Result<Val, EastError> {
        self.items.pop().ok_or_else(EastError::stack_underflow)
    }

    pub fn duplicate_top(&mut self) -> Result<(), EastError> {
        let top = self.pop()?;
        self.push(top)?;
        self.push(top)
    }

    /// Reverse the whole stack: `[a, b, c]` becomes `[c, b, a]`.
    pub fn reverse_all(&mut self) {
        self.items.reverse();
    }

    /// Move the bottom value to the top: `[a, b, c]` becomes `[b, c, a]`.
    pub fn rotate(&mut self) {
        if !self.items.is_empty() {
            self.items.rotate_left(1);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<Val> {
        self.items
    }
}

impl fmt::Display for ValueStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, val) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "]")
    }
}
