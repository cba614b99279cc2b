mod ops;

pub use ops::BinOp;
