/// # Timers
/// The delay and sound countdown timers.
///
/// Both decrement independently on every `tick` and floor at 0. The
/// host drives `tick` at a fixed 60 Hz regardless of how fast it runs
/// instructions; timer cadence is decoupled from instruction cadence.
/// While `sound` is nonzero the host should be playing a tone.
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers { delay: 0, sound: 0 }
    }

    /// Count both timers down one step, never below zero.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_both_timers() {
        let mut timers = Timers::new();
        timers.delay = 5;
        timers.sound = 2;
        for _ in 0..3 {
            timers.tick();
        }
        assert_eq!(timers.delay, 2);
        assert_eq!(timers.sound, 0);
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut timers = Timers::new();
        timers.tick();
        assert_eq!(timers.delay, 0);
        assert_eq!(timers.sound, 0);
    }
}
