pub mod error;
pub mod op;
pub mod util;
pub mod val;

// Dispatch loop, waypoints and nested execution
pub mod vm;

pub use error::{EastError, ErrorKind, Location, error_kind};
pub use op::BinOp;
pub use val::{Mode, Val, ValueStack};
pub use vm::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, Vm, VmConfig, VmContext, escape};
