/// # Opcode
/// A raw 16-bit instruction word, formed from two consecutive memory
/// bytes with the first byte in the high position.
///
/// Behavior is cased on some combination of its nibbles:
/// - `(n, _, _, _)` broad family; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a family (the 0x8 ALU ops)
/// - `(_, _, n, n)` more specific behavior within a family (0xE/0xF)
///
/// Nibbles not used for dispatch carry operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte compared with or assigned to Vx
/// - `(_, n, _, _)` the register Vx or the range V0..=Vx
/// - `(_, _, n, _)` the register Vy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// The component nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        ((self.0 >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// The second nibble: `[_x__]`.
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// The third nibble: `[__y_]`.
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// The fourth nibble: `[___n]`.
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// The least significant byte: `[__kk]`.
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Everything but the most significant nibble: `[_nnn]`.
    pub fn addr(self) -> u16 {
        self.0 & 0x0FFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles() {
        assert_eq!(Opcode(0xABCD).nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_x() {
        assert_eq!(Opcode(0xABCD).x(), 0xB);
    }

    #[test]
    fn test_y() {
        assert_eq!(Opcode(0xABCD).y(), 0xC);
    }

    #[test]
    fn test_n() {
        assert_eq!(Opcode(0xABCD).n(), 0xD);
    }

    #[test]
    fn test_kk() {
        assert_eq!(Opcode(0xABCD).kk(), 0xCD);
    }

    #[test]
    fn test_addr() {
        assert_eq!(Opcode(0xABCD).addr(), 0xBCD);
    }
}
