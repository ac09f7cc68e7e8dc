use crate::constants::{NUM_REGISTERS, PROGRAM_START};

/// Index of VF, the carry/borrow/collision flag register.
pub const FLAG: usize = 0xF;

/// # Registers
/// The register file:
/// - (v) 16 general purpose 8-bit registers V0..VF, where VF doubles
///   as the flag register after arithmetic, shifts, and sprite draws
/// - (i) the 16-bit address register
/// - (pc) the 16-bit program counter, starting at the program load offset
///
/// The delay/sound timers live in [`crate::timers::Timers`] and the
/// stack pointer lives with the stack it indexes.
pub struct Registers {
    pub v: [u8; NUM_REGISTERS],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; NUM_REGISTERS],
            i: 0,
            pc: PROGRAM_START,
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pc_starts_at_program_start() {
        let registers = Registers::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.v, [0; NUM_REGISTERS]);
        assert_eq!(registers.i, 0);
    }
}
