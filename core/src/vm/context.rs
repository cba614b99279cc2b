use std::sync::Arc;

use crate::error::EastError;
use crate::util::fast_map::{FastHashMap, fast_hash_map_new};
use crate::val::{Mode, ValueStack};

/// Nesting depth allowed for `=` and `$` before the run is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Highest nesting depth a config may ask for. Every level is a native call
/// frame, so deeper limits would overflow the thread stack before tripping.
pub const MAX_DEPTH_CEILING: usize = 4096;

/// Settings fixed for the lifetime of a [`Vm`](super::Vm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmConfig {
    pub mode: Mode,
    pub max_depth: usize,
    /// `None` runs until the program ends, however long that takes.
    pub max_steps: Option<u64>,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Byte,
            max_depth: DEFAULT_MAX_DEPTH,
            max_steps: None,
        }
    }
}

impl VmConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Values above [`MAX_DEPTH_CEILING`] are clamped to it.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }
}

/// State shared by every frame of a run: the value stack, the
/// user-instruction table and the resource counters.
#[derive(Debug, Clone)]
pub struct VmContext {
    config: VmConfig,
    pub(crate) data: ValueStack,
    user_instrs: FastHashMap<u8, Arc<[u8]>>,
    depth: usize,
    steps: u64,
}

impl VmContext {
    pub fn new(config: VmConfig) -> Self {
        Self {
            data: ValueStack::new(config.mode),
            config,
            user_instrs: fast_hash_map_new(),
            depth: 0,
            steps: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    #[inline]
    pub fn data(&self) -> &ValueStack {
        &self.data
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Counters are per top-level run; a previous run may have aborted mid-way.
    pub(crate) fn begin_run(&mut self) {
        self.depth = 0;
        self.steps = 0;
    }

    pub(crate) fn enter_nested(&mut self) -> Result<(), EastError> {
        // `max_depth` is a public field, so the ceiling is applied here too
        let limit = self.config.max_depth.min(MAX_DEPTH_CEILING);
        if self.depth >= limit {
            return Err(EastError::recursion_limit(limit));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn count_step(&mut self) -> Result<(), EastError> {
        self.steps += 1;
        match self.config.max_steps {
            Some(limit) if self.steps > limit => Err(EastError::step_limit(limit)),
            _ => Ok(()),
        }
    }

    /// Record (or replace) the body of user instruction `name`.
    pub(crate) fn declare(&mut self, name: u8, body: &[u8]) {
        self.user_instrs.insert(name, Arc::from(body));
    }

    pub fn user_instruction(&self, name: u8) -> Option<Arc<[u8]>> {
        self.user_instrs.get(&name).cloned()
    }

    pub fn user_instruction_count(&self) -> usize {
        self.user_instrs.len()
    }
}
