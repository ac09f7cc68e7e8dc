/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where loaded programs begin and where the program counter starts.
pub const PROGRAM_START: u16 = 0x200;

/// Where the builtin font sprite sheet begins.
pub const FONT_START: u16 = 0x000;

/// Bytes per font glyph; each byte is one row of pixels, MSB first.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Horizontal display resolution in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical display resolution in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum call stack depth in return addresses.
pub const STACK_DEPTH: usize = 16;

/// Number of general purpose registers (V0..VF).
pub const NUM_REGISTERS: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const NUM_KEYS: usize = 16;

/// Suggested instruction rate for hosts in Hz.
///
/// The core itself has no clock; hosts that want authentic pacing
/// should call `step` roughly this often.
pub const CLOCK_SPEED: u32 = 540;

/// Rate at which hosts must call `tick_timers`, in Hz.
pub const TIMER_SPEED: u32 = 60;

/// The builtin hexadecimal font: 16 glyphs of 5 rows each.
///
/// Every glyph is 4 pixels wide, packed into the high nibble of its
/// row byte. Copied into memory at `FONT_START` on power on so that
/// programs can draw the digits 0..F without shipping their own font.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
