use crate::constants::{MAX_ROM_SIZE, STACK_DEPTH};

/// A fatal condition hit while executing an instruction. The machine state
/// is left as it was right before the faulting access, the host decides
/// whether to stop or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// An access past the 4096 bytes of ram, either a fetch with the program
    /// counter near the end of memory or an I register pointing too close to it
    #[error("memory access out of bounds at address {address:#06x}")]
    MemoryOutOfBounds { address: u16 },

    /// A 2NNN call nested deeper than [`STACK_DEPTH`] levels
    #[error("stack overflow, more than {} nested subroutine calls", STACK_DEPTH)]
    StackOverflow,

    /// A 00EE return with no saved address on the stack
    #[error("stack underflow, return without a matching subroutine call")]
    StackUnderflow,
}

/// Why a rom was rejected at load time. The machine is left un-started,
/// loading a valid rom afterwards still works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("rom is {size} byte(s), too small to hold a single instruction")]
    TooSmall { size: usize },

    #[error("rom is too large ({size} bytes), max size is {} bytes", MAX_ROM_SIZE)]
    TooLarge { size: usize },
}
