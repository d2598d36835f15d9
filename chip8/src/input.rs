use log::warn;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use emu8_core::{Input, KeyEvent, Quit};

use crate::keymap::{keymap, QUIT_KEY};

/// Key events read from the SDL2 event queue.
pub struct SdlInput {
    events: EventPump,
}

impl SdlInput {
    pub fn new(events: EventPump) -> Self {
        SdlInput { events }
    }
}

impl Input for SdlInput {
    fn poll(&mut self) -> Result<Vec<KeyEvent>, Quit> {
        let mut keys = Vec::new();
        for event in self.events.poll_iter() {
            if let Some(key) = translate(event)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn block_until_keyup(&mut self) -> Result<u8, Quit> {
        loop {
            if let Some(KeyEvent::Release(key)) = translate(self.events.wait_event())? {
                return Ok(key);
            }
        }
    }
}

/// Converts an SDL2 event to a keypad event, if it is one.
fn translate(event: Event) -> Result<Option<KeyEvent>, Quit> {
    let event = match event {
        Event::Quit { .. } => return Err(Quit),
        Event::KeyUp {
            keycode: Some(key), ..
        } if key == QUIT_KEY => return Err(Quit),
        Event::KeyDown {
            keycode: Some(key),
            repeat: false,
            ..
        } => mapped(key).map(KeyEvent::Press),
        Event::KeyUp {
            keycode: Some(key), ..
        } => mapped(key).map(KeyEvent::Release),
        _ => None,
    };
    Ok(event)
}

fn mapped(key: Keycode) -> Option<u8> {
    let hex = keymap(key);
    if hex.is_none() && key != QUIT_KEY {
        warn!("ignoring unmapped key {}", key.name());
    }
    hex
}
