use std::io::Write;

use anyhow::Result;

use crate::error::{EastError, ErrorKind, Location};
use crate::val::ValueStack;

use super::context::VmContext;
use super::dispatch::handler_for;
use super::waypoint::WaypointStack;

/// Where the loop goes after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Continue with the next byte.
    Next,
    /// Continue at exactly this index.
    Goto(usize),
}

/// Bytes the loop steps over without dispatching.
#[inline]
fn is_noop(byte: u8) -> bool {
    byte == b'\n' || byte == b'_'
}

/// One logical thread of interpretation over a program text.
///
/// The program counter, input cursor and waypoint stacks belong to the frame;
/// the value stack and user instructions live in the shared context.
pub(crate) struct Frame<'a, 'w> {
    pub(crate) program: &'a [u8],
    pub(crate) input: &'a [u8],
    pub(crate) pc: usize,
    pub(crate) cursor: usize,
    pub(crate) input_wp: WaypointStack,
    pub(crate) data_wp: WaypointStack,
    pub(crate) ctx: &'a mut VmContext,
    pub(crate) out: &'a mut (dyn Write + 'w),
}

impl<'a, 'w> Frame<'a, 'w> {
    pub(crate) fn new(
        program: &'a [u8],
        input: &'a [u8],
        ctx: &'a mut VmContext,
        out: &'a mut (dyn Write + 'w),
    ) -> Self {
        Self {
            program,
            input,
            pc: 0,
            cursor: 0,
            input_wp: WaypointStack::new(),
            data_wp: WaypointStack::new(),
            ctx,
            out,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        let len = self.program.len();
        while self.pc < len {
            let byte = self.program[self.pc];
            if is_noop(byte) {
                self.pc += 1;
                continue;
            }
            if let Err(err) = self.ctx.count_step() {
                return Err(err.at(self.location()).into());
            }
            match handler_for(byte)(self) {
                Ok(Flow::Next) => self.pc += 1,
                Ok(Flow::Goto(target)) => self.pc = target,
                Err(err) => return Err(self.locate(err)),
            }
        }
        Ok(())
    }

    /// Run `code` to completion in a child frame sharing this frame's context.
    pub(crate) fn exec_nested(&mut self, code: &[u8]) -> Result<()> {
        self.ctx.enter_nested()?;
        tracing::debug!(
            target: "east::vm::nested",
            depth = self.ctx.depth(),
            parent_pc = self.pc,
            len = code.len(),
            "enter nested execution"
        );
        let result = Frame::new(code, self.input, &mut *self.ctx, &mut *self.out).run();
        self.ctx.leave_nested();
        result
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.program[self.pc]
    }

    /// The byte after the current instruction, if any.
    #[inline]
    pub(crate) fn operand(&self) -> Option<u8> {
        self.program.get(self.pc + 1).copied()
    }

    #[inline]
    pub(crate) fn data(&mut self) -> &mut ValueStack {
        &mut self.ctx.data
    }

    pub(crate) fn location(&self) -> Location {
        Location::new(self.pc, self.current())
    }

    /// Build an error located at the current instruction.
    pub(crate) fn fail(&self, kind: ErrorKind, message: &str) -> anyhow::Error {
        EastError::with_location(kind, message, self.location()).into()
    }

    /// Fail with `EmptyData` unless the stack holds at least `n` values.
    pub(crate) fn require(&self, n: usize) -> Result<()> {
        if self.ctx.data.len() < n {
            return Err(self.fail(ErrorKind::EmptyData, "Data empty"));
        }
        Ok(())
    }

    fn locate(&self, err: anyhow::Error) -> anyhow::Error {
        match err.downcast::<EastError>() {
            Ok(east) => east.at(self.location()).into(),
            Err(other) => other,
        }
    }
}
