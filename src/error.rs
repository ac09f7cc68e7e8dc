use std::io;

use thiserror::Error;

/// # Fault
/// A fault raised while executing guest bytecode.
///
/// All four variants are detected synchronously at the point of
/// violation and surfaced from `Chip8::step`. The core never resolves
/// one by truncating, wrapping, or aborting; the host decides whether
/// to halt, reset, or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A read or write targeted an address outside 0x000..=0xFFF.
    #[error("memory access out of bounds at {0:#06X}")]
    OutOfBoundsMemory(u16),
    /// A subroutine call was made with all 16 stack slots in use.
    #[error("call stack overflow")]
    StackOverflow,
    /// A return was executed with no call in flight.
    #[error("call stack underflow")]
    StackUnderflow,
    /// The fetched word matches nothing in the canonical opcode table.
    #[error("invalid opcode {0:#06X}")]
    InvalidOpcode(u16),
}

/// An error raised while loading a ROM, before any execution happens.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
    /// The ROM doesn't fit between the load offset and the end of memory.
    #[error("ROM of {size} bytes exceeds the {capacity} bytes of program memory")]
    TooLarge { size: usize, capacity: usize },
}
