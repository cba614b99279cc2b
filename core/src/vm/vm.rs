use std::io::Write;
use std::sync::Arc;

use anyhow::Result;

use crate::val::{Mode, ValueStack};

use super::context::{VmConfig, VmContext};
use super::frame::Frame;

/// Top-level interpreter. Holds the value stack and the user-instruction
/// table across calls to [`Vm::exec`].
pub struct Vm {
    ctx: VmContext,
}

impl Vm {
    pub fn new(config: VmConfig) -> Self {
        Self {
            ctx: VmContext::new(config),
        }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self::new(VmConfig::new(mode))
    }

    /// Run `program` over `input`, writing `;` and `:` output to `out`.
    ///
    /// The value stack is left as the program leaves it, including when the
    /// run fails part way.
    pub fn exec(&mut self, program: &[u8], input: &[u8], out: &mut dyn Write) -> Result<()> {
        tracing::debug!(
            target: "east::vm::exec",
            mode = %self.ctx.mode(),
            program_len = program.len(),
            input_len = input.len(),
            "exec"
        );
        self.ctx.begin_run();
        let result = Frame::new(program, input, &mut self.ctx, out).run();
        tracing::debug!(
            target: "east::vm::exec",
            steps = self.ctx.steps(),
            stack_len = self.ctx.data().len(),
            ok = result.is_ok(),
            "exec finished"
        );
        result
    }

    pub fn config(&self) -> &VmConfig {
        self.ctx.config()
    }

    pub fn mode(&self) -> Mode {
        self.ctx.mode()
    }

    pub fn context(&self) -> &VmContext {
        &self.ctx
    }

    pub fn stack(&self) -> &ValueStack {
        self.ctx.data()
    }

    pub fn stack_mut(&mut self) -> &mut ValueStack {
        &mut self.ctx.data
    }

    pub fn into_stack(self) -> ValueStack {
        self.ctx.data
    }

    pub fn user_instruction(&self, name: u8) -> Option<Arc<[u8]>> {
        self.ctx.user_instruction(name)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}
