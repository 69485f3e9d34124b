use crate::config::SessionConfig;
use crate::cpu::{Cpu, Registers};
use crate::error::{EmuError, Result};

use super::{InterruptController, InterruptHooks, MemoryBus, NoHooks, Ppu};

/// Offset of the cartridge-type byte in the ROM header.
const CARTRIDGE_TYPE_OFFSET: usize = 0x0147;

/// One emulation session.
///
/// Owns every piece of machine state; components receive what they need by
/// reference on each step.
pub struct GameBoy<H = NoHooks> {
    pub regs: Registers,
    pub bus: MemoryBus,
    pub cpu: Cpu,
    pub interrupts: InterruptController<H>,
    pub ppu: Ppu,
    config: SessionConfig,
    cycles: u64,
}

impl Default for GameBoy<NoHooks> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameBoy<NoHooks> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_hooks(config, NoHooks)
    }
}

impl<H: InterruptHooks> GameBoy<H> {
    /// Build a session whose interrupt sources call into `hooks`.
    pub fn with_hooks(config: SessionConfig, hooks: H) -> Self {
        Self {
            regs: Registers::new(),
            bus: MemoryBus::new(config.model),
            cpu: Cpu::new(config.trace_instructions),
            interrupts: InterruptController::new(hooks),
            ppu: Ppu::new(config.ppu_timing),
            config,
            cycles: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// T-cycles consumed since the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Power-on state for every component. A loaded cartridge stays mapped.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.bus.reset();
        self.cpu.reset();
        self.interrupts.reset();
        self.ppu.reset();
        self.cycles = 0;
    }

    /// Reset, then load `rom` using its header's cartridge-type byte as the
    /// bank mode.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let cart_type = *rom.get(CARTRIDGE_TYPE_OFFSET).ok_or(EmuError::EmptyRom)?;
        self.load_cartridge(rom, cart_type)
    }

    /// Reset, then load `rom` with an explicit bank mode.
    pub fn load_cartridge(&mut self, rom: &[u8], cart_type: u8) -> Result<()> {
        self.bus.load_cartridge(rom, cart_type)?;
        self.reset();
        Ok(())
    }

    /// One CPU step (which also services interrupts) followed by one PPU
    /// step. Returns the CPU cycles consumed.
    pub fn step(&mut self) -> Result<u32> {
        let cycles = self
            .cpu
            .step(&mut self.regs, &mut self.bus, &mut self.interrupts)?;
        self.ppu.step(&mut self.bus);
        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Run up to `steps` steps, stopping at the first error.
    pub fn run_for(&mut self, steps: u64) -> Result<u64> {
        let start = self.cycles;
        for _ in 0..steps {
            self.step()?;
        }
        Ok(self.cycles - start)
    }
}
