//! Processing core of the original Game Boy: register file, memory bus,
//! interrupt controller, opcode table, CPU step engine and PPU timing.
//!
//! ```no_run
//! use dmgcore::{GameBoy, SessionConfig};
//!
//! # fn main() -> dmgcore::Result<()> {
//! let rom = std::fs::read("game.gb").expect("rom");
//! let mut gb = GameBoy::new(SessionConfig::default());
//! gb.load_rom(&rom)?;
//! loop {
//!     gb.step()?;
//! }
//! # }
//! ```

pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use config::SessionConfig;
pub use cpu::{Cpu, Effect, Flag, Instruction, RegisterId, Registers, INSTRUCTIONS};
pub use error::{EmuError, Result};
pub use machine::{
    Endian, GameBoy, InterruptController, InterruptHooks, InterruptSource, Interrupts, MemoryBus,
    Model, Ppu, PpuMode, PpuTiming,
};
