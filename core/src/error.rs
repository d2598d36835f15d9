use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the machine's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("access of {len} byte(s) at {address:#06X} is outside memory")]
    OutOfRange { address: usize, len: usize },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with an empty call stack")]
    StackUnderflow,

    #[error("illegal opcode {opcode:#06X}")]
    IllegalOpcode { opcode: u16 },
}

/// A fatal error raised while executing the instruction at `pc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fault at {pc:#05X} executing {opcode:#06X}: {source}")]
pub struct Fault {
    pub pc: u16,
    pub opcode: u16,
    pub source: Error,
}
