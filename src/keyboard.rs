use crate::constants::NUM_KEYS;

/// # Keyboard
/// Pressed state of the 16-key hexadecimal keypad.
///
/// Indices must be in 0..16. The only callers are the host's scancode
/// translation (a fixed, exhaustive map) and the executor (which masks
/// register values to a nibble), so an out-of-range index is a
/// programming error and panics rather than faulting.
pub struct Keyboard {
    keys: [bool; NUM_KEYS],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard {
            keys: [false; NUM_KEYS],
        }
    }

    /// Record a key transition reported by the host.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keys[key as usize] = pressed;
    }

    /// Whether `key` is currently held.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[key as usize]
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_start_released() {
        let keyboard = Keyboard::new();
        for key in 0..NUM_KEYS as u8 {
            assert!(!keyboard.is_pressed(key));
        }
    }

    #[test]
    fn test_set_and_release_key() {
        let mut keyboard = Keyboard::new();
        keyboard.set_key(0xE, true);
        assert!(keyboard.is_pressed(0xE));
        assert!(!keyboard.is_pressed(0xD));
        keyboard.set_key(0xE, false);
        assert!(!keyboard.is_pressed(0xE));
    }
}
