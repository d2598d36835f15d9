//! The capabilities a host supplies to run a machine: somewhere to show frames,
//! a source of key events and a clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::screen::FrameBuffer;

/// Returned by an `Input` when the user asks to stop the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

/// Paints frames. Called after every change to the screen.
pub trait Display {
    fn present(&mut self, frame: &FrameBuffer, scale: u32);
}

/// Reports key events.
pub trait Input {
    /// Drains the key events that arrived since the last poll.
    fn poll(&mut self) -> Result<Vec<KeyEvent>, Quit>;

    /// Blocks until a key is released and returns it.
    fn block_until_keyup(&mut self) -> Result<u8, Quit>;
}

/// A monotonic clock; readings are time elapsed since some fixed start.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Bundles the capabilities the machine runs against.
pub struct Host<D, I, C> {
    pub display: D,
    pub input: I,
    pub clock: C,
}

impl<D: Display, I: Input, C: Clock> Host<D, I, C> {
    pub fn new(display: D, input: I, clock: C) -> Self {
        Host {
            display,
            input,
            clock,
        }
    }
}

/// Wall-clock time since construction.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A clock that only moves when told to. Useful for tests and for stepping
/// a machine deterministically.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// A display that discards every frame.
pub struct NullDisplay;

impl Display for NullDisplay {
    fn present(&mut self, _frame: &FrameBuffer, _scale: u32) {}
}
