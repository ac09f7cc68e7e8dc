pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, TIMER_SPEED};
pub use display::FrameBuffer;
pub use error::{Fault, LoadError};

mod chip8;
pub mod constants;
mod display;
mod error;
mod instruction;
mod keyboard;
mod memory;
mod opcode;
mod registers;
mod stack;
mod timers;
