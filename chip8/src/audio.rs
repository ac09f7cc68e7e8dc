use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Tone frequency in Hz; the original VIP buzzer sat around here.
const TONE_HZ: f32 = 220.0;
const SAMPLE_RATE: i32 = 44_100;

/// # Beeper
/// The Chip-8's single fixed tone, gated on the sound timer.
///
/// The device starts paused; the host loop resumes it while the
/// machine reports sound as active and pauses it again when the timer
/// runs out.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

struct SquareWave {
    phase: f32,
    phase_step: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_step) % 1.0;
        }
    }
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let audio_subsystem = sdl.audio().unwrap();
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| SquareWave {
                phase: 0.0,
                phase_step: TONE_HZ / spec.freq as f32,
                volume: 0.15,
            })
            .unwrap();

        Beeper { device }
    }

    /// Start or stop the tone.
    pub fn set_playing(&self, playing: bool) {
        if playing {
            self.device.resume();
        } else {
            self.device.pause();
        }
    }
}
