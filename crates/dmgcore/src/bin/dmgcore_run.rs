use std::path::PathBuf;

use anyhow::{bail, Context};
use dmgcore::{GameBoy, SessionConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        bail!("Usage: dmgcore_run <rom_path> [steps] [--trace]");
    };

    let mut steps: Option<u64> = None;
    let mut trace = false;
    for arg in args {
        if arg == "--trace" {
            trace = true;
        } else {
            steps = Some(
                arg.parse()
                    .with_context(|| format!("invalid step count '{arg}'"))?,
            );
        }
    }

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let config = SessionConfig::builder().trace_instructions(trace).build();
    let mut gb = GameBoy::new(config);
    gb.load_rom(&rom)
        .with_context(|| format!("failed to load '{}'", rom_path.display()))?;

    match steps {
        Some(steps) => {
            let cycles = gb.run_for(steps)?;
            println!(
                "Ran {steps} steps ({cycles} cycles). {} LY={} mode={:?}",
                gb.regs,
                gb.ppu.scanline(),
                gb.ppu.mode()
            );
        }
        None => loop {
            gb.step()?;
        },
    }

    Ok(())
}
