use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{INSTRUCTION_SIZE, LAST_INSTRUCTION};
use crate::error::{self, Error, Fault};
use crate::host::{Clock, Display, Host, Input, Quit};
use crate::instruction::decode;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::screen::Screen;
use crate::timer::Timers;

/// What a single cycle left the machine doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The program counter ran past the last instruction in memory.
    Halted,
    /// The host asked to stop.
    Quit,
}

/// Why a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Halted,
    Quit,
}

/// # Machine
/// The whole interpreter: memory, registers, screen, timers and keypad.
///
/// Supplies interfaces for:
/// - loading program images and resetting
/// - running from an entry point, or stepping one cycle at a time
/// - inspecting state for frontends and debugging
///
/// Everything outside the interpreter (painting frames, reading keys, telling
/// the time) is reached through the `Host` passed to `step` and `run`.
pub struct Machine {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    pub(crate) screen: Screen,
    pub(crate) timers: Timers,
    pub(crate) keypad: Keypad,
    pub(crate) rng: StdRng,
    config: Config,
}

impl Machine {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Machine {
            memory: Memory::new(),
            registers: Registers::new(),
            screen: Screen::new(),
            timers: Timers::new(),
            keypad: Keypad::new(config.key_query),
            rng,
            config,
        }
    }

    /// Zeroes memory, registers, timers and keys, clears the screen and
    /// reinstalls the glyph table.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.registers.reset();
        self.timers.reset();
        self.keypad.reset();
        self.screen.clear();
        debug!("machine reset");
    }

    /// Copies a program image into memory at `offset`.
    pub fn load(&mut self, offset: u16, image: &[u8]) -> error::Result<()> {
        self.memory.load(offset, image)
    }

    /// Runs from `entry` until the host quits, the program counter runs off
    /// the end of memory, or an instruction faults.
    pub fn run<D, I, C>(&mut self, entry: u16, host: &mut Host<D, I, C>) -> Result<Exit, Fault>
    where
        D: Display,
        I: Input,
        C: Clock,
    {
        self.registers.pc = entry;
        info!("running from {:#05X}", entry);
        loop {
            match self.step(host)? {
                Step::Continue => continue,
                Step::Halted => {
                    info!("halted at {:#05X}", self.registers.pc);
                    return Ok(Exit::Halted);
                }
                Step::Quit => {
                    info!("quit at {:#05X}", self.registers.pc);
                    return Ok(Exit::Quit);
                }
            }
        }
    }

    /// Executes one cycle from the current program counter:
    /// - ages the timers and folds in pending key events
    /// - fetches and decodes the instruction at PC, then moves PC past it
    /// - executes it and presents the screen if it changed
    pub fn step<D, I, C>(&mut self, host: &mut Host<D, I, C>) -> Result<Step, Fault>
    where
        D: Display,
        I: Input,
        C: Clock,
    {
        let pc = self.registers.pc;
        if pc > LAST_INSTRUCTION {
            return Ok(Step::Halted);
        }

        self.timers.tick(host.clock.now());
        match host.input.poll() {
            Ok(events) => self.keypad.apply(&events),
            Err(Quit) => return Ok(Step::Quit),
        }

        let fault = |opcode: u16| move |source: Error| Fault { pc, opcode, source };
        let opcode = self.memory.read_word(pc).map_err(fault(0))?;
        let instruction = decode(opcode).map_err(fault(opcode))?;
        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:03X}",
            pc,
            opcode,
            instruction.to_string(),
            self.registers.v,
            self.registers.i
        );

        self.registers.pc = pc + INSTRUCTION_SIZE;
        let step = self
            .execute(instruction, &mut host.input)
            .map_err(fault(opcode))?;

        if let Some(frame) = self.screen.take_frame() {
            host.display.present(frame, self.config.scale);
        }
        Ok(step)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pc(&self) -> u16 {
        self.registers.pc
    }

    pub fn i(&self) -> u16 {
        self.registers.i
    }

    /// Number of return addresses on the call stack.
    pub fn sp(&self) -> usize {
        self.registers.sp()
    }

    /// The value of register V`reg`.
    pub fn v(&self, reg: usize) -> u8 {
        self.registers.v[reg & 0xF]
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether a tone should be sounding. No tone is produced by the machine.
    pub fn sound_active(&self) -> bool {
        self.timers.sound() > 0
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
