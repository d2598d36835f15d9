use std::fmt;

use crate::error::{Error, Result};
use crate::opcode::Opcode;

/// A decoded instruction. `x` and `y` index the V registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// clear the screen
    Cls,
    /// PC = STACK.pop()
    Ret,
    /// PC = addr
    Jump { addr: u16 },
    /// STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// if Vx == nn then skip
    SkipEqImm { x: usize, nn: u8 },
    /// if Vx != nn then skip
    SkipNeImm { x: usize, nn: u8 },
    /// if Vx == Vy then skip
    SkipEqReg { x: usize, y: usize },
    /// Vx = nn
    LoadImm { x: usize, nn: u8 },
    /// Vx += nn; no flag
    AddImm { x: usize, nn: u8 },
    /// Vx = Vy
    Move { x: usize, y: usize },
    /// Vx |= Vy
    Or { x: usize, y: usize },
    /// Vx &= Vy
    And { x: usize, y: usize },
    /// Vx ^= Vy
    Xor { x: usize, y: usize },
    /// Vx += Vy; VF = carry
    AddReg { x: usize, y: usize },
    /// Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// Vx >>= 1; VF = lsb
    ShiftRight { x: usize },
    /// Vx = Vy - Vx; VF = !borrow
    SubN { x: usize, y: usize },
    /// Vx <<= 1; VF = msb
    ShiftLeft { x: usize },
    /// if Vx != Vy then skip
    SkipNeReg { x: usize, y: usize },
    /// I = addr
    LoadI { addr: u16 },
    /// PC = V0 + addr
    JumpV0 { addr: u16 },
    /// Vx = random & nn
    Random { x: usize, nn: u8 },
    /// draw_sprite(x=Vx y=Vy height=n) from memory at I; VF = collision
    Draw { x: usize, y: usize, n: u8 },
    /// if key Vx is pressed then skip
    SkipKey { x: usize },
    /// if key Vx is not pressed then skip
    SkipNoKey { x: usize },
    /// Vx = DT
    LoadDelay { x: usize },
    /// Vx = next released key, blocking
    WaitKey { x: usize },
    /// DT = Vx
    SetDelay { x: usize },
    /// ST = Vx
    SetSound { x: usize },
    /// I += Vx; VF = I overflowed 12 bits
    AddI { x: usize },
    /// I = address of the glyph for Vx
    LoadGlyph { x: usize },
    /// mem[I..I+3] = bcd(Vx)
    Bcd { x: usize },
    /// mem[I..=I+x] = V0..=Vx
    Store { x: usize },
    /// V0..=Vx = mem[I..=I+x]
    Read { x: usize },
}

/// Selects the Instruction for a given opcode.
pub fn decode(op: u16) -> Result<Instruction> {
    use Instruction::*;

    let (x, y, nn, addr) = (op.x(), op.y(), op.nn(), op.nnn());
    let instruction = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Cls,
        (0x0, 0x0, 0xE, 0xE) => Ret,
        (0x1, ..) => Jump { addr },
        (0x2, ..) => Call { addr },
        (0x3, ..) => SkipEqImm { x, nn },
        (0x4, ..) => SkipNeImm { x, nn },
        (0x5, .., 0x0) => SkipEqReg { x, y },
        (0x6, ..) => LoadImm { x, nn },
        (0x7, ..) => AddImm { x, nn },
        (0x8, .., 0x0) => Move { x, y },
        (0x8, .., 0x1) => Or { x, y },
        (0x8, .., 0x2) => And { x, y },
        (0x8, .., 0x3) => Xor { x, y },
        (0x8, .., 0x4) => AddReg { x, y },
        (0x8, .., 0x5) => Sub { x, y },
        (0x8, .., 0x6) => ShiftRight { x },
        (0x8, .., 0x7) => SubN { x, y },
        (0x8, .., 0xE) => ShiftLeft { x },
        (0x9, .., 0x0) => SkipNeReg { x, y },
        (0xA, ..) => LoadI { addr },
        (0xB, ..) => JumpV0 { addr },
        (0xC, ..) => Random { x, nn },
        (0xD, .., n) => Draw { x, y, n },
        (0xE, _, 0x9, 0xE) => SkipKey { x },
        (0xE, _, 0xA, 0x1) => SkipNoKey { x },
        (0xF, _, 0x0, 0x7) => LoadDelay { x },
        (0xF, _, 0x0, 0xA) => WaitKey { x },
        (0xF, _, 0x1, 0x5) => SetDelay { x },
        (0xF, _, 0x1, 0x8) => SetSound { x },
        (0xF, _, 0x1, 0xE) => AddI { x },
        (0xF, _, 0x2, 0x9) => LoadGlyph { x },
        (0xF, _, 0x3, 0x3) => Bcd { x },
        (0xF, _, 0x5, 0x5) => Store { x },
        (0xF, _, 0x6, 0x5) => Read { x },
        _ => return Err(Error::IllegalOpcode { opcode: op }),
    };
    Ok(instruction)
}

/// Assembler-style mnemonics.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jump { addr } => write!(f, "JP {:#05X}", addr),
            Call { addr } => write!(f, "CALL {:#05X}", addr),
            SkipEqImm { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            SkipNeImm { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadImm { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            AddImm { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI { addr } => write!(f, "LD I, {:#05X}", addr),
            JumpV0 { addr } => write!(f, "JP V0, {:#05X}", addr),
            Random { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipKey { x } => write!(f, "SKP V{:X}", x),
            SkipNoKey { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
