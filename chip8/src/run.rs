use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{error, info};
use sdl2::event::Event;

use ocho::{Chip8, CLOCK_SPEED, TIMER_SPEED};

use crate::audio::Beeper;
use crate::keymap::keymap;
use crate::screen::Screen;

/// Instructions executed per 60 Hz frame to approximate CLOCK_SPEED.
const STEPS_PER_FRAME: u32 = CLOCK_SPEED / TIMER_SPEED;

pub fn run(rom: PathBuf) {
    let mut chip8: Chip8 = Chip8::new();

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut screen: Screen = Screen::new(&sdl);
    let beeper: Beeper = Beeper::new(&sdl);
    let mut events = sdl.event_pump().unwrap();

    // Load ROM
    let file = File::open(rom).expect("unable to open file");
    let mut reader = BufReader::new(file);
    match chip8.load_rom(&mut reader) {
        Ok(()) => info!("successfully loaded ROM"),
        Err(e) => panic!("unable to load ROM: {}", e),
    };

    // The core has no clock of its own; pace it one frame at a time
    let frame_time: Duration = Duration::from_nanos(1_000_000_000 / u64::from(TIMER_SPEED));
    let mut last_frame: Instant = Instant::now();

    // Set when the core faults; the machine stays frozen for inspection
    let mut halted: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, true);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, false);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        if !halted {
            for _ in 0..STEPS_PER_FRAME {
                if let Err(fault) = chip8.step() {
                    error!("machine halted: {}", fault);
                    halted = true;
                    break;
                }
            }
            chip8.tick_timers();
        }

        // If the frame buffer changed, render it
        if let Some(frame) = chip8.take_frame() {
            screen.render(&frame);
        }
        beeper.set_playing(chip8.sound_active());

        // Handle timing
        let elapsed = last_frame.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }
}
