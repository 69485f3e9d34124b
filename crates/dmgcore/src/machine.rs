mod bus;
mod cartridge;
mod gameboy;
mod interrupts;
mod ppu;

pub use bus::{Endian, MemoryBus, MemoryRegion};
pub use cartridge::{Capabilities, Cartridge};
pub use gameboy::GameBoy;
pub use interrupts::{InterruptController, InterruptHooks, InterruptSource, Interrupts, NoHooks};
pub use ppu::{Ppu, PpuMode, PpuTiming};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Model {
    #[default]
    Dmg,
    /// Super Game Boy. Differs from DMG only in the NR52 power-on value.
    Sgb,
    Cgb,
}

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

pub const ROM_BANK_0: usize = 0x0000;
pub const ROM_BANK_SIZE: usize = 0x4000;
pub const SWITCH_ROM_BANK: usize = 0x4000;
pub const VIDEO_RAM: usize = 0x8000;
pub const VIDEO_RAM_SIZE: usize = 0x2000;
pub const SWITCH_RAM_BANK: usize = 0xA000;
pub const SWITCH_RAM_BANK_SIZE: usize = 0x2000;
pub const WORK_RAM: usize = 0xC000;
pub const WORK_RAM_SIZE: usize = 0x2000;
/// Echo of internal RAM. Only the first 0x1E00 bytes of work RAM are
/// mirrored here.
pub const ECHO_RAM: usize = 0xE000;
pub const ECHO_SIZE: usize = 0x1E00;
pub const OAM: usize = 0xFE00;
pub const OAM_SIZE: usize = 0xA0;
pub const UNUSABLE: usize = 0xFEA0;
pub const UNUSABLE_SIZE: usize = 0x60;
pub const IO_PORTS: usize = 0xFF00;
pub const IO_PORTS_SIZE: usize = 0x4C;
pub const UNUSABLE_IO: usize = 0xFF4C;
pub const UNUSABLE_IO_SIZE: usize = 0x34;
pub const HIGH_RAM: usize = 0xFF80;
pub const HIGH_RAM_SIZE: usize = 0x7F;

// I/O registers touched by the core.
pub const REG_P1: u16 = 0xFF00;
pub const REG_IF: u16 = 0xFF0F;
pub const REG_NR52: u16 = 0xFF26;
pub const REG_STAT: u16 = 0xFF41;
pub const REG_LY: u16 = 0xFF44;
pub const REG_IE: u16 = 0xFFFF;

#[cfg(test)]
mod tests;
