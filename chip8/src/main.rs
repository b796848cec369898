use std::path::PathBuf;

use clap::Parser;

use chip8vm::constants::CYCLES_PER_FRAME;
use chip8vm::{Quirks, ShiftSource, SubnFlag};

mod keymap;
mod run;

/// Run a CHIP-8 ROM.
///
/// Keys 1234/QWER/ASDF/ZXCV map onto the hex keypad. Hold Space to fast-forward and
/// Escape to rewind.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(short, long, default_value_t = CYCLES_PER_FRAME)]
    cycles_per_frame: u32,

    /// Size multiplier for each pixel
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// 8xy6/8xyE shift Vx in place instead of reading Vy
    #[arg(long)]
    shift_vx: bool,

    /// 8xy7 computes VF after Vx has been overwritten
    #[arg(long)]
    subn_after_write: bool,

    /// Fx1E leaves VF alone instead of reporting overflow past 0xFFF
    #[arg(long)]
    no_index_overflow_flag: bool,
}

impl Args {
    fn quirks(&self) -> Quirks {
        Quirks {
            shift_source: if self.shift_vx {
                ShiftSource::Vx
            } else {
                ShiftSource::Vy
            },
            subn_flag: if self.subn_after_write {
                SubnFlag::AfterWrite
            } else {
                SubnFlag::PreSubtraction
            },
            index_overflow_flag: !self.no_index_overflow_flag,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    run::run(run::Config {
        rom: args.rom.clone(),
        quirks: args.quirks(),
        cycles_per_frame: args.cycles_per_frame,
        scale: args.scale,
    })
}
