#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use emu8_core::{Clock, Display, FrameBuffer, Input, KeyEvent, ManualClock, Quit};

/// Keeps a copy of every frame it is handed.
#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<(FrameBuffer, u32)>,
}

impl Display for RecordingDisplay {
    fn present(&mut self, frame: &FrameBuffer, scale: u32) {
        self.frames.push((*frame, scale));
    }
}

pub fn lit(frame: &FrameBuffer) -> usize {
    frame.iter().flat_map(|row| row.iter()).filter(|&&p| p).count()
}

/// Replays scripted key events one poll at a time and quits after `polls_left` polls.
pub struct ScriptedInput<'a> {
    pub events: VecDeque<Vec<KeyEvent>>,
    pub keyups: VecDeque<u8>,
    pub polls_left: usize,
    /// Moved forward by `wait` whenever a key wait blocks.
    pub clock: Option<&'a ManualClock>,
    pub wait: Duration,
}

impl<'a> ScriptedInput<'a> {
    pub fn quit_after(polls: usize) -> Self {
        ScriptedInput {
            events: VecDeque::new(),
            keyups: VecDeque::new(),
            polls_left: polls,
            clock: None,
            wait: Duration::from_secs(0),
        }
    }
}

impl<'a> Input for ScriptedInput<'a> {
    fn poll(&mut self) -> Result<Vec<KeyEvent>, Quit> {
        if self.polls_left == 0 {
            return Err(Quit);
        }
        self.polls_left -= 1;
        Ok(self.events.pop_front().unwrap_or_default())
    }

    fn block_until_keyup(&mut self) -> Result<u8, Quit> {
        if let Some(clock) = self.clock {
            clock.advance(self.wait);
        }
        self.keyups.pop_front().ok_or(Quit)
    }
}

/// Moves forward by a fixed amount every time it is read.
pub struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        SteppingClock {
            now: Cell::new(Duration::from_secs(0)),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        self.now.set(self.now.get() + self.step);
        self.now.get()
    }
}
