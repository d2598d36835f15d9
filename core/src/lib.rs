//! An interpreter for the CHIP-8 virtual machine.
//!
//! A `Machine` owns memory, registers, the screen, the timers and the keypad.
//! Hosts drive it through `Machine::run` or `Machine::step`, supplying a
//! `Display` to paint frames, an `Input` for key events and a `Clock`.

pub use config::{Config, KeyQuery};
pub use error::{Error, Fault, Result};
pub use host::{Clock, Display, Host, Input, KeyEvent, ManualClock, NullDisplay, Quit, SystemClock};
pub use instruction::{decode, Instruction};
pub use machine::{Exit, Machine, Step};
pub use screen::FrameBuffer;

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod instruction;
pub mod keypad;
mod machine;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod screen;
pub mod timer;
