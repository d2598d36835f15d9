use log::debug;

use crate::constants::{INSTRUCTION_SIZE, STACK_DEPTH};
use crate::error::{Error, Result};

/// Index of the flag register.
pub const VF: usize = 0xF;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register, only ever holding 12 bits
/// - (pc) the program counter, set by the caller before running
/// - (stack, sp) up to `STACK_DEPTH` return addresses; `sp` is the number in use
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    stack: [u16; STACK_DEPTH],
    sp: usize,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: 0,
            stack: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Writes the carry/borrow/collision flag.
    pub fn set_flag(&mut self, set: bool) {
        self.v[VF] = u8::from(set);
    }

    /// Moves PC over the next instruction when `condition` holds.
    pub fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc += INSTRUCTION_SIZE;
        }
    }

    pub fn sp(&self) -> usize {
        self.sp
    }

    /// The return addresses currently on the stack, oldest first.
    pub fn stack(&self) -> &[u16] {
        &self.stack[..self.sp]
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.sp == STACK_DEPTH {
            return Err(Error::StackOverflow);
        }
        self.stack[self.sp] = addr;
        self.sp += 1;
        debug!("push {:#05X} (depth {})", addr, self.sp);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow);
        }
        self.sp -= 1;
        let addr = self.stack[self.sp];
        debug!("pop {:#05X} (depth {})", addr, self.sp);
        Ok(addr)
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
