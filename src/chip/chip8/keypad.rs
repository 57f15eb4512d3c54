use crate::chip::chip8::constants::CHIP8_KEY_COUNT;

/// The 16-key input pad. The host's input collaborator is the only writer;
/// the interpreter only ever reads the key states.
pub struct Keypad {
    keys: [bool; CHIP8_KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; CHIP8_KEY_COUNT],
        }
    }

    /// Sets the state of one key. The key can actually be addressed by
    /// half a byte; a whole byte is used for convenience and asserted to
    /// be in range.
    pub fn set(&mut self, key: u8, down: bool) {
        assert!(key & 0x0F == key);
        self.keys[key as usize] = down;
    }

    /// Releases all keys.
    pub fn release_all(&mut self) {
        self.keys = [false; CHIP8_KEY_COUNT];
    }

    /// Whether the key identified by the low nibble of `key` is down.
    pub fn is_down(&self, key: u8) -> bool {
        self.keys[(key & 0x0F) as usize]
    }

    /// The lowest-indexed key that is currently down, if any.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|down| *down).map(|key| key as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read() {
        let mut keypad = Keypad::new();
        keypad.set(0xA, true);
        assert!(keypad.is_down(0xA));
        keypad.set(0xA, false);
        assert!(!keypad.is_down(0xA));
    }

    #[test]
    fn test_first_pressed_picks_lowest_index() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.first_pressed(), None);
        keypad.set(0xC, true);
        keypad.set(0x3, true);
        assert_eq!(keypad.first_pressed(), Some(0x3));
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.set(0x0, true);
        keypad.set(0xF, true);
        keypad.release_all();
        assert_eq!(keypad.first_pressed(), None);
    }
}
