use std::fmt;

/// What went wrong while interpreting a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An instruction needed more values than the stack holds.
    EmptyData,
    /// Raw pop on an empty value stack.
    StackUnderflow,
    OutOfMemory,
    /// `\` or `$` was the last byte of the program.
    UnexpectedEnd,
    /// `?` wanted to skip past the end of the program.
    NoInstructionToSkip,
    /// `%` never found its closing `^`.
    MissingTerminator,
    /// `]` or `}` wanted to jump back but no waypoint was set.
    MissingWaypoint,
    RecursionLimit,
    StepLimit,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::EmptyData => "EmptyData",
            ErrorKind::StackUnderflow => "StackUnderflow",
            ErrorKind::OutOfMemory => "OutOfMemory",
            ErrorKind::UnexpectedEnd => "UnexpectedEnd",
            ErrorKind::NoInstructionToSkip => "NoInstructionToSkip",
            ErrorKind::MissingTerminator => "MissingTerminator",
            ErrorKind::MissingWaypoint => "MissingWaypoint",
            ErrorKind::RecursionLimit => "RecursionLimit",
            ErrorKind::StepLimit => "StepLimit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Offending instruction: its index in the program text and the byte found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub pc: usize,
    pub byte: u8,
}

impl Location {
    pub fn new(pc: usize, byte: u8) -> Self {
        Self { pc, byte }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positions are reported 1-based.
        write!(f, "Character {} ('{}')", self.pc + 1, self.byte as char)
    }
}

/// Interpreter error. Every variant is fatal for the running program.
#[derive(Debug, Clone, PartialEq)]
pub struct EastError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl EastError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(kind: ErrorKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn empty_data() -> Self {
        Self::new(ErrorKind::EmptyData, "Data empty")
    }

    pub fn stack_underflow() -> Self {
        Self::new(ErrorKind::StackUnderflow, "Data empty")
    }

    pub fn out_of_memory() -> Self {
        Self::new(ErrorKind::OutOfMemory, "Out of memory")
    }

    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(
            ErrorKind::RecursionLimit,
            format!("Maximum nesting depth ({}) exceeded", limit),
        )
    }

    pub fn step_limit(limit: u64) -> Self {
        Self::new(ErrorKind::StepLimit, format!("Step limit ({}) exceeded", limit))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Attach a location unless an inner frame already did.
    pub fn at(mut self, location: Location) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }
}

impl fmt::Display for EastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{}: {}", location, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for EastError {}

/// Pull the interpreter error kind out of an `anyhow` chain, if there is one.
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<EastError>().map(EastError::kind)
}
