use std::error::Error;
use std::io::Write;
use std::num::ParseIntError;
use std::path::PathBuf;

use clap::Parser;

use emu8_core::constants::{DEFAULT_SCALE, PROGRAM_START};

mod input;
mod keymap;
mod run;

/// Runs a Chip-8 program in an SDL2 window.
#[derive(Parser, Debug)]
pub struct Args {
    /// Program image to load; an idle loop runs without one
    rom: Option<PathBuf>,

    /// Size multiplier for each pixel
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Address the image is loaded at, in hex
    #[arg(short, long, value_parser = parse_hex, default_value = "200")]
    offset: u16,

    /// Address execution starts from, in hex; defaults to the load offset
    #[arg(short, long, value_parser = parse_hex)]
    entry: Option<u16>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Key queries leave other held keys latched
    #[arg(long)]
    per_key: bool,
}

fn parse_hex(s: &str) -> Result<u16, ParseIntError> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    run::run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("200"), Ok(0x200));
        assert_eq!(parse_hex("0x2A0"), Ok(0x2A0));
        assert_eq!(parse_hex("0XFFE"), Ok(0xFFE));
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["chip8"]);
        assert_eq!(args.rom, None);
        assert_eq!(args.scale, DEFAULT_SCALE);
        assert_eq!(args.offset, PROGRAM_START);
        assert_eq!(args.entry, None);
        assert!(!args.per_key);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "chip8", "pong.ch8", "--scale", "4", "--offset", "0x300", "--entry", "302",
            "--seed", "7", "--per-key",
        ]);
        assert_eq!(args.rom, Some(PathBuf::from("pong.ch8")));
        assert_eq!(args.scale, 4);
        assert_eq!(args.offset, 0x300);
        assert_eq!(args.entry, Some(0x302));
        assert_eq!(args.seed, Some(7));
        assert!(args.per_key);
    }
}
