use std::time::Duration;

use log::debug;

use crate::constants::TIMER_PERIOD;

/// # Timers
/// The delay and sound timers count down towards zero at 60Hz.
///
/// The machine calls `tick` once per cycle with the current clock reading;
/// both timers are decremented at most once per call and only when a full
/// `TIMER_PERIOD` has passed since the last decrement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
    last_decrement: Duration,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A reading earlier than the last decrement comes from a different
    /// clock; the period restarts from it.
    pub fn tick(&mut self, now: Duration) {
        if now < self.last_decrement {
            self.last_decrement = now;
            return;
        }
        if now - self.last_decrement < TIMER_PERIOD {
            return;
        }
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
        self.last_decrement = now;
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_delay(&mut self, value: u8) {
        debug!("delay timer = {}", value);
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        debug!("sound timer = {}", value);
        self.sound = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_ticks_within_a_period_do_nothing() {
        let mut timers = Timers::new();
        timers.set_delay(10);
        timers.set_sound(3);
        for n in 0..16 {
            timers.tick(MS * n);
        }
        assert_eq!(timers.delay(), 10);
        assert_eq!(timers.sound(), 3);
    }

    #[test]
    fn test_decrements_once_per_period() {
        let mut timers = Timers::new();
        timers.set_delay(10);
        timers.tick(MS * 17);
        assert_eq!(timers.delay(), 9);
        // the period restarts from the last decrement
        timers.tick(MS * 30);
        assert_eq!(timers.delay(), 9);
        timers.tick(MS * 34);
        assert_eq!(timers.delay(), 8);
    }

    #[test]
    fn test_one_decrement_after_a_long_gap() {
        let mut timers = Timers::new();
        timers.set_delay(10);
        timers.tick(Duration::from_secs(1));
        assert_eq!(timers.delay(), 9);
    }

    #[test]
    fn test_never_goes_below_zero() {
        let mut timers = Timers::new();
        timers.set_sound(1);
        for n in 1..5 {
            timers.tick(TIMER_PERIOD * n);
        }
        assert_eq!(timers.delay(), 0);
        assert_eq!(timers.sound(), 0);
    }

    #[test]
    fn test_earlier_reading_restarts_the_period() {
        let mut timers = Timers::new();
        timers.set_delay(10);
        timers.tick(Duration::from_secs(10));
        assert_eq!(timers.delay(), 9);

        timers.tick(Duration::from_secs(0));
        assert_eq!(timers.delay(), 9);
        timers.tick(MS * 17);
        assert_eq!(timers.delay(), 8);
    }

    #[test]
    fn test_reset() {
        let mut timers = Timers::new();
        timers.set_delay(5);
        timers.set_sound(5);
        timers.reset();
        assert_eq!(timers, Timers::new());
    }
}
