use crate::config::KeyQuery;
use crate::constants::KEY_COUNT;
use crate::host::KeyEvent;

/// # Keypad
/// Latches the pressed state of the 16 hex keys as a bitmask, bit `n` for key `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypad {
    pressed: u16,
    query: KeyQuery,
}

impl Keypad {
    pub fn new(query: KeyQuery) -> Self {
        Keypad { pressed: 0, query }
    }

    pub fn reset(&mut self) {
        self.pressed = 0;
    }

    /// Folds a batch of host key events into the latch.
    /// Events for keys outside the keypad are ignored.
    pub fn apply(&mut self, events: &[KeyEvent]) {
        for event in events {
            match *event {
                KeyEvent::Press(key) if (key as usize) < KEY_COUNT => self.pressed |= 1 << key,
                KeyEvent::Release(key) if (key as usize) < KEY_COUNT => {
                    self.pressed &= !(1 << key)
                }
                _ => continue,
            }
        }
    }

    /// Whether `key` is pressed, consuming the latch according to the query policy.
    /// Only the low nibble of `key` is significant.
    pub fn is_pressed(&mut self, key: u8) -> bool {
        let pressed = self.peek(key);
        if pressed && self.query == KeyQuery::ConsumeAll {
            self.pressed = 0;
        }
        pressed
    }

    /// Whether `key` is pressed, without side effects.
    pub fn peek(&self, key: u8) -> bool {
        self.pressed & (1 << (key & 0xF)) != 0
    }

    pub fn mask(&self) -> u16 {
        self.pressed
    }
}
