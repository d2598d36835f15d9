use rand::Rng;

use crate::constants::{GLYPH_BASE, GLYPH_SIZE};
use crate::error::Result;
use crate::host::{Input, Quit};
use crate::instruction::Instruction;
use crate::machine::{Machine, Step};

/// The largest value `I` can hold.
const ADDRESS_MASK: u16 = 0x0FFF;

impl Machine {
    /// Applies a decoded instruction. PC already points past it.
    ///
    /// Instructions that set VF write it last, so VF as a destination
    /// register always ends up holding the flag.
    pub(crate) fn execute<I: Input>(
        &mut self,
        instruction: Instruction,
        input: &mut I,
    ) -> Result<Step> {
        use Instruction::*;

        let regs = &mut self.registers;
        match instruction {
            Cls => self.screen.clear(),
            Ret => regs.pc = regs.pop()?,
            Jump { addr } => regs.pc = addr,
            Call { addr } => {
                regs.push(regs.pc)?;
                regs.pc = addr;
            }
            SkipEqImm { x, nn } => regs.skip_if(regs.v[x] == nn),
            SkipNeImm { x, nn } => regs.skip_if(regs.v[x] != nn),
            SkipEqReg { x, y } => regs.skip_if(regs.v[x] == regs.v[y]),
            LoadImm { x, nn } => regs.v[x] = nn,
            AddImm { x, nn } => regs.v[x] = regs.v[x].wrapping_add(nn),
            Move { x, y } => regs.v[x] = regs.v[y],
            Or { x, y } => regs.v[x] |= regs.v[y],
            And { x, y } => regs.v[x] &= regs.v[y],
            Xor { x, y } => regs.v[x] ^= regs.v[y],
            AddReg { x, y } => {
                let (sum, carry) = regs.v[x].overflowing_add(regs.v[y]);
                regs.v[x] = sum;
                regs.set_flag(carry);
            }
            Sub { x, y } => {
                let (difference, borrow) = regs.v[x].overflowing_sub(regs.v[y]);
                regs.v[x] = difference;
                regs.set_flag(!borrow);
            }
            ShiftRight { x } => {
                let lsb = regs.v[x] & 0x1;
                regs.v[x] >>= 1;
                regs.set_flag(lsb == 1);
            }
            SubN { x, y } => {
                let (difference, borrow) = regs.v[y].overflowing_sub(regs.v[x]);
                regs.v[x] = difference;
                regs.set_flag(!borrow);
            }
            ShiftLeft { x } => {
                let msb = regs.v[x] >> 7;
                regs.v[x] <<= 1;
                regs.set_flag(msb == 1);
            }
            SkipNeReg { x, y } => regs.skip_if(regs.v[x] != regs.v[y]),
            LoadI { addr } => regs.i = addr,
            JumpV0 { addr } => regs.pc = addr + u16::from(regs.v[0x0]),
            Random { x, nn } => regs.v[x] = self.rng.gen::<u8>() & nn,
            Draw { x, y, n } => {
                let sprite = self.memory.slice(regs.i as usize, n as usize)?;
                let collided = self.screen.draw(regs.v[x], regs.v[y], sprite);
                regs.set_flag(collided);
            }
            SkipKey { x } => {
                let pressed = self.keypad.is_pressed(regs.v[x]);
                regs.skip_if(pressed)
            }
            SkipNoKey { x } => {
                let pressed = self.keypad.is_pressed(regs.v[x]);
                regs.skip_if(!pressed)
            }
            LoadDelay { x } => regs.v[x] = self.timers.delay(),
            WaitKey { x } => match input.block_until_keyup() {
                Ok(key) => regs.v[x] = key,
                Err(Quit) => return Ok(Step::Quit),
            },
            SetDelay { x } => self.timers.set_delay(regs.v[x]),
            SetSound { x } => self.timers.set_sound(regs.v[x]),
            AddI { x } => {
                let sum = regs.i + u16::from(regs.v[x]);
                regs.i = sum & ADDRESS_MASK;
                regs.set_flag(sum > ADDRESS_MASK);
            }
            LoadGlyph { x } => regs.i = GLYPH_BASE + u16::from(regs.v[x]) * GLYPH_SIZE,
            Bcd { x } => {
                let value = regs.v[x];
                let digits = [value / 100, value / 10 % 10, value % 10];
                self.memory
                    .slice_mut(regs.i as usize, digits.len())?
                    .copy_from_slice(&digits);
            }
            Store { x } => self
                .memory
                .slice_mut(regs.i as usize, x + 1)?
                .copy_from_slice(&regs.v[..=x]),
            Read { x } => {
                let bytes = self.memory.slice(regs.i as usize, x + 1)?;
                regs.v[..=x].copy_from_slice(bytes);
            }
        }
        Ok(Step::Continue)
    }
}
