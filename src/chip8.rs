use std::io::Read;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::display::{Display, FrameBuffer};
use crate::error::{Fault, LoadError};
use crate::instruction::{decode, Instruction};
use crate::keyboard::Keyboard;
use crate::memory::Memory;
use crate::registers::{Registers, FLAG};
use crate::stack::CallStack;
use crate::timers::Timers;

/// # Chip8
/// A Chip-8 virtual machine.
///
/// Owns the memory, register file, call stack, display, keyboard, and
/// timers exclusively; there is no sharing between instances and no
/// internal locking because a machine is stepped by a single owner.
///
/// Supplies interfaces for:
/// - loading ROMs and resetting to power-on state
/// - forwarding host key transitions
/// - advancing the CPU one instruction at a time
/// - advancing the timers at the host's fixed rate
/// - inspecting the frame buffer and timers for rendering and audio
pub struct Chip8 {
    memory: Memory,
    registers: Registers,
    stack: CallStack,
    display: Display,
    keyboard: Keyboard,
    timers: Timers,
    rng: StdRng,
    /// Destination register of a pending Fx0A, if one is in flight.
    waiting_for_key: Option<u8>,
    redraw: bool,
    rom: Vec<u8>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose Cxkk sequence is reproducible, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: CallStack::new(),
            display: Display::new(),
            keyboard: Keyboard::new(),
            timers: Timers::new(),
            rng,
            waiting_for_key: None,
            redraw: false,
            rom: Vec::new(),
        }
    }

    /// Load a ROM from a reader.
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load_bytes(&bytes)
    }

    /// Copy a program verbatim into memory at the load offset.
    ///
    /// The bytes are retained so that `reset` can restore them.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        if bytes.len() > capacity {
            return Err(LoadError::TooLarge {
                size: bytes.len(),
                capacity,
            });
        }
        // infallible after the capacity check above
        let _ = self.memory.load(PROGRAM_START, bytes);
        self.rom = bytes.to_vec();
        Ok(())
    }

    /// Restore power-on state and re-load the retained ROM.
    pub fn reset(&mut self) {
        self.memory = Memory::new();
        self.registers = Registers::new();
        self.stack = CallStack::new();
        self.display = Display::new();
        self.keyboard = Keyboard::new();
        self.timers = Timers::new();
        self.waiting_for_key = None;
        self.redraw = false;
        // the ROM fit when it was loaded, so this cannot fault
        let _ = self.memory.load(PROGRAM_START, &self.rom);
    }

    /// Record a key transition reported by the host.
    ///
    /// A press also completes a pending wait-for-key: the key lands in
    /// the destination register and stepping resumes.
    ///
    /// # Arguments
    /// * `key` the key index in 0x0..=0xF
    /// * `pressed` whether the key went down or up
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keyboard.set_key(key, pressed);
        if pressed {
            if let Some(x) = self.waiting_for_key.take() {
                self.registers.v[x as usize] = key;
            }
        }
    }

    /// Count both timers down one step.
    ///
    /// Hosts call this at a fixed 60 Hz, independently of how often
    /// they call `step`.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Fetch, decode, and execute exactly one instruction.
    ///
    /// A no-op while a wait-for-key is pending. Faults propagate to the
    /// host, which decides whether to halt, reset, or report; the
    /// machine itself is left as the faulting instruction found it
    /// (aside from the program counter, which has already advanced past
    /// the fetch).
    pub fn step(&mut self) -> Result<(), Fault> {
        if self.waiting_for_key.is_some() {
            return Ok(());
        }
        let word = self.fetch()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X} sp{:02X}",
            word,
            self.registers.v,
            self.registers.i,
            self.registers.pc,
            self.stack.depth(),
        );
        let instruction = decode(word)?;
        // Advance past the fetched word before executing so jumps and
        // calls are free to overwrite the program counter.
        self.registers.pc = self.registers.pc.wrapping_add(2);
        self.execute(instruction)
    }

    /// The frame buffer, if it changed since the last call.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.redraw {
            self.redraw = false;
            Some(*self.display.pixels())
        } else {
            None
        }
    }

    /// Read-only view of the pixel grid.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.display.pixels()
    }

    /// Current delay timer value.
    pub fn delay_timer(&self) -> u8 {
        self.timers.delay
    }

    /// Current sound timer value.
    pub fn sound_timer(&self) -> u8 {
        self.timers.sound
    }

    /// Whether the host should be playing a tone right now.
    pub fn sound_active(&self) -> bool {
        self.timers.sound > 0
    }

    /// Combine the two bytes at the program counter into an opcode word,
    /// first byte high.
    fn fetch(&self) -> Result<u16, Fault> {
        let pc = self.registers.pc;
        let high = self.memory.read(pc)?;
        let low = self.memory.read(pc.wrapping_add(1))?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Skip the instruction the program counter currently points at.
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.registers.pc = self.registers.pc.wrapping_add(2);
        }
    }

    fn execute(&mut self, instruction: Instruction) -> Result<(), Fault> {
        use Instruction::*;

        let v = &mut self.registers.v;
        match instruction {
            Clear => {
                self.display.clear();
                self.redraw = true;
            }
            Return => self.registers.pc = self.stack.pop()?,
            Jump { addr } => self.registers.pc = addr,
            Call { addr } => {
                self.stack.push(self.registers.pc)?;
                self.registers.pc = addr;
            }
            SkipEqImm { x, byte } => self.skip_if(self.registers.v[x as usize] == byte),
            SkipNeImm { x, byte } => self.skip_if(self.registers.v[x as usize] != byte),
            SkipEqReg { x, y } => {
                self.skip_if(self.registers.v[x as usize] == self.registers.v[y as usize])
            }
            LoadImm { x, byte } => v[x as usize] = byte,
            AddImm { x, byte } => v[x as usize] = v[x as usize].wrapping_add(byte),
            Move { x, y } => v[x as usize] = v[y as usize],
            Or { x, y } => v[x as usize] |= v[y as usize],
            And { x, y } => v[x as usize] &= v[y as usize],
            Xor { x, y } => v[x as usize] ^= v[y as usize],
            // For the flagged ALU ops VF is written last, so when x is
            // 0xF the flag wins over the arithmetic result.
            Add { x, y } => {
                let (result, carry) = v[x as usize].overflowing_add(v[y as usize]);
                v[x as usize] = result;
                v[FLAG] = carry as u8;
            }
            Sub { x, y } => {
                let (result, borrow) = v[x as usize].overflowing_sub(v[y as usize]);
                v[x as usize] = result;
                v[FLAG] = !borrow as u8;
            }
            ShiftRight { x } => {
                let shifted_out = v[x as usize] & 0x1;
                v[x as usize] >>= 1;
                v[FLAG] = shifted_out;
            }
            SubNegate { x, y } => {
                let (result, borrow) = v[y as usize].overflowing_sub(v[x as usize]);
                v[x as usize] = result;
                v[FLAG] = !borrow as u8;
            }
            ShiftLeft { x } => {
                let shifted_out = v[x as usize] >> 7;
                v[x as usize] <<= 1;
                v[FLAG] = shifted_out;
            }
            SkipNeReg { x, y } => {
                self.skip_if(self.registers.v[x as usize] != self.registers.v[y as usize])
            }
            LoadIndex { addr } => self.registers.i = addr,
            JumpOffset { addr } => {
                self.registers.pc = addr.wrapping_add(u16::from(self.registers.v[0x0]))
            }
            Random { x, mask } => v[x as usize] = self.rng.gen::<u8>() & mask,
            Draw { x, y, rows } => {
                let mut sprite = [0u8; 15];
                for row in 0..rows as usize {
                    sprite[row] = self.memory.read(self.registers.i.wrapping_add(row as u16))?;
                }
                let collision = self.display.draw_sprite(
                    self.registers.v[x as usize],
                    self.registers.v[y as usize],
                    &sprite[..rows as usize],
                );
                self.registers.v[FLAG] = collision as u8;
                self.redraw = true;
            }
            SkipKeyPressed { x } => {
                let key = self.registers.v[x as usize] & 0xF;
                self.skip_if(self.keyboard.is_pressed(key));
            }
            SkipKeyReleased { x } => {
                let key = self.registers.v[x as usize] & 0xF;
                self.skip_if(!self.keyboard.is_pressed(key));
            }
            LoadDelay { x } => v[x as usize] = self.timers.delay,
            WaitKey { x } => self.waiting_for_key = Some(x),
            StoreDelay { x } => self.timers.delay = v[x as usize],
            StoreSound { x } => self.timers.sound = v[x as usize],
            AddIndex { x } => {
                self.registers.i = self.registers.i.wrapping_add(u16::from(v[x as usize]))
            }
            LoadGlyph { x } => self.registers.i = Memory::glyph_addr(v[x as usize]),
            StoreBcd { x } => {
                let value = self.registers.v[x as usize];
                let i = self.registers.i;
                self.memory.write(i, value / 100)?;
                self.memory.write(i.wrapping_add(1), value / 10 % 10)?;
                self.memory.write(i.wrapping_add(2), value % 10)?;
            }
            StoreRegisters { x } => {
                for register in 0..=x as u16 {
                    self.memory.write(
                        self.registers.i.wrapping_add(register),
                        self.registers.v[register as usize],
                    )?;
                }
            }
            LoadRegisters { x } => {
                for register in 0..=x as u16 {
                    self.registers.v[register as usize] = self
                        .memory
                        .read(self.registers.i.wrapping_add(register))?;
                }
            }
        };
        Ok(())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
