use std::error::Error;
use std::fs;

use log::{info, warn};

use display::Display;
use emu8_core::{Config, Host, KeyQuery, Machine, SystemClock};

use crate::input::SdlInput;
use crate::Args;

/// A single jump to its own address, run when no program image is given.
pub fn idle_loop(offset: u16) -> [u8; 2] {
    (0x1000 | (offset & 0x0FFF)).to_be_bytes()
}

pub fn config(args: &Args) -> Config {
    let mut config = Config::default().with_scale(args.scale);
    if args.per_key {
        config = config.with_key_query(KeyQuery::PerKey);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let image = match &args.rom {
        Some(path) => {
            let image = fs::read(path)?;
            info!("read {} bytes from {}", image.len(), path.display());
            image
        }
        None => {
            warn!("no program given, running an idle loop");
            idle_loop(args.offset).to_vec()
        }
    };

    // Load before opening a window so bad images fail fast
    let mut machine = Machine::new(config(&args));
    machine.load(args.offset, &image)?;

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let display = Display::new(&sdl, args.scale)?;
    let input = SdlInput::new(sdl.event_pump()?);
    let mut host = Host::new(display, input, SystemClock::new());

    let exit = machine.run(args.entry.unwrap_or(args.offset), &mut host)?;
    info!("exited with {:?}", exit);
    Ok(())
}
