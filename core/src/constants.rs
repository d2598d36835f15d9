use std::time::Duration;

/// Bytes of addressable memory (12-bit address space).
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are conventionally loaded and entered.
pub const PROGRAM_START: u16 = 0x200;

/// The highest address an instruction can be fetched from.
/// Running past it is a natural halt.
pub const LAST_INSTRUCTION: u16 = (MEMORY_SIZE - 2) as u16;

/// Instructions are two bytes wide.
pub const INSTRUCTION_SIZE: u16 = 2;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default pixel multiplier handed to the display sink.
pub const DEFAULT_SCALE: u32 = 10;

/// Maximum depth of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

/// Both timers count down at 60Hz.
pub const TIMER_PERIOD: Duration = Duration::from_micros(16_666);

/// Number of keys on the hex keypad.
pub const KEY_COUNT: usize = 16;

/// Where the glyph table is installed, inside the interpreter-reserved area.
pub const GLYPH_BASE: u16 = 0x050;

/// Each glyph is 5 rows of 8 pixels.
pub const GLYPH_SIZE: u16 = 5;

/// # Glyphs
/// A 4x5 sprite for each hexadecimal digit, one byte per row.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const GLYPHS: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
