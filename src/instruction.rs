use crate::error::Fault;
use crate::opcode::Opcode;

/// # Instruction
/// A fully decoded instruction, tagged by what it does rather than how
/// it was encoded.
///
/// Decoding up front (instead of picking fields out of the raw word at
/// execution time) means an unrecognized encoding is rejected exactly
/// once, in [`decode`], and the executor can match exhaustively with no
/// fallthrough arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` - turn every pixel off
    Clear,
    /// `00EE` - return from a subroutine
    Return,
    /// `1nnn` - jump to addr
    Jump { addr: u16 },
    /// `2nnn` - call the subroutine at addr
    Call { addr: u16 },
    /// `3xkk` - skip the next instruction if Vx == kk
    SkipEqImm { x: u8, byte: u8 },
    /// `4xkk` - skip the next instruction if Vx != kk
    SkipNeImm { x: u8, byte: u8 },
    /// `5xy0` - skip the next instruction if Vx == Vy
    SkipEqReg { x: u8, y: u8 },
    /// `6xkk` - Vx = kk
    LoadImm { x: u8, byte: u8 },
    /// `7xkk` - Vx += kk, wrapping, VF untouched
    AddImm { x: u8, byte: u8 },
    /// `8xy0` - Vx = Vy
    Move { x: u8, y: u8 },
    /// `8xy1` - Vx |= Vy
    Or { x: u8, y: u8 },
    /// `8xy2` - Vx &= Vy
    And { x: u8, y: u8 },
    /// `8xy3` - Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// `8xy4` - Vx += Vy, VF = carry
    Add { x: u8, y: u8 },
    /// `8xy5` - Vx -= Vy, VF = NOT borrow
    Sub { x: u8, y: u8 },
    /// `8xy6` - Vx >>= 1, VF = the bit shifted out
    ShiftRight { x: u8 },
    /// `8xy7` - Vx = Vy - Vx, VF = NOT borrow
    SubNegate { x: u8, y: u8 },
    /// `8xyE` - Vx <<= 1, VF = the bit shifted out
    ShiftLeft { x: u8 },
    /// `9xy0` - skip the next instruction if Vx != Vy
    SkipNeReg { x: u8, y: u8 },
    /// `Annn` - I = addr
    LoadIndex { addr: u16 },
    /// `Bnnn` - jump to addr + V0
    JumpOffset { addr: u16 },
    /// `Cxkk` - Vx = random byte AND kk
    Random { x: u8, mask: u8 },
    /// `Dxyn` - draw the n-row sprite at I to (Vx, Vy), VF = collision
    Draw { x: u8, y: u8, rows: u8 },
    /// `Ex9E` - skip the next instruction if key Vx is held
    SkipKeyPressed { x: u8 },
    /// `ExA1` - skip the next instruction if key Vx is not held
    SkipKeyReleased { x: u8 },
    /// `Fx07` - Vx = DT
    LoadDelay { x: u8 },
    /// `Fx0A` - suspend until a key is pressed, then Vx = that key
    WaitKey { x: u8 },
    /// `Fx15` - DT = Vx
    StoreDelay { x: u8 },
    /// `Fx18` - ST = Vx
    StoreSound { x: u8 },
    /// `Fx1E` - I += Vx
    AddIndex { x: u8 },
    /// `Fx29` - I = address of the builtin glyph for digit Vx
    LoadGlyph { x: u8 },
    /// `Fx33` - memory[I..I+3] = the decimal digits of Vx
    StoreBcd { x: u8 },
    /// `Fx55` - memory[I..=I+x] = V0..=Vx
    StoreRegisters { x: u8 },
    /// `Fx65` - V0..=Vx = memory[I..=I+x]
    LoadRegisters { x: u8 },
}

/// Decode a raw instruction word.
///
/// Any encoding outside the canonical opcode table (including the
/// historical `0nnn` machine-routine call) fails with
/// [`Fault::InvalidOpcode`] carrying the offending word.
pub fn decode(word: u16) -> Result<Instruction, Fault> {
    use Instruction::*;

    let op = Opcode(word);
    let instruction = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Clear,
        (0x0, 0x0, 0xE, 0xE) => Return,
        (0x1, ..) => Jump { addr: op.addr() },
        (0x2, ..) => Call { addr: op.addr() },
        (0x3, ..) => SkipEqImm {
            x: op.x(),
            byte: op.kk(),
        },
        (0x4, ..) => SkipNeImm {
            x: op.x(),
            byte: op.kk(),
        },
        (0x5, .., 0x0) => SkipEqReg { x: op.x(), y: op.y() },
        (0x6, ..) => LoadImm {
            x: op.x(),
            byte: op.kk(),
        },
        (0x7, ..) => AddImm {
            x: op.x(),
            byte: op.kk(),
        },
        (0x8, .., 0x0) => Move { x: op.x(), y: op.y() },
        (0x8, .., 0x1) => Or { x: op.x(), y: op.y() },
        (0x8, .., 0x2) => And { x: op.x(), y: op.y() },
        (0x8, .., 0x3) => Xor { x: op.x(), y: op.y() },
        (0x8, .., 0x4) => Add { x: op.x(), y: op.y() },
        (0x8, .., 0x5) => Sub { x: op.x(), y: op.y() },
        (0x8, .., 0x6) => ShiftRight { x: op.x() },
        (0x8, .., 0x7) => SubNegate { x: op.x(), y: op.y() },
        (0x8, .., 0xE) => ShiftLeft { x: op.x() },
        (0x9, .., 0x0) => SkipNeReg { x: op.x(), y: op.y() },
        (0xA, ..) => LoadIndex { addr: op.addr() },
        (0xB, ..) => JumpOffset { addr: op.addr() },
        (0xC, ..) => Random {
            x: op.x(),
            mask: op.kk(),
        },
        (0xD, ..) => Draw {
            x: op.x(),
            y: op.y(),
            rows: op.n(),
        },
        (0xE, _, 0x9, 0xE) => SkipKeyPressed { x: op.x() },
        (0xE, _, 0xA, 0x1) => SkipKeyReleased { x: op.x() },
        (0xF, _, 0x0, 0x7) => LoadDelay { x: op.x() },
        (0xF, _, 0x0, 0xA) => WaitKey { x: op.x() },
        (0xF, _, 0x1, 0x5) => StoreDelay { x: op.x() },
        (0xF, _, 0x1, 0x8) => StoreSound { x: op.x() },
        (0xF, _, 0x1, 0xE) => AddIndex { x: op.x() },
        (0xF, _, 0x2, 0x9) => LoadGlyph { x: op.x() },
        (0xF, _, 0x3, 0x3) => StoreBcd { x: op.x() },
        (0xF, _, 0x5, 0x5) => StoreRegisters { x: op.x() },
        (0xF, _, 0x6, 0x5) => LoadRegisters { x: op.x() },
        _ => return Err(Fault::InvalidOpcode(word)),
    };
    Ok(instruction)
}
