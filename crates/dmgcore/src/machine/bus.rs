use std::fmt::Write as _;

use super::{
    cartridge::Cartridge, Model, ECHO_RAM, ECHO_SIZE, HIGH_RAM, IO_PORTS, MEMORY_SIZE, OAM,
    SWITCH_RAM_BANK, SWITCH_ROM_BANK, UNUSABLE, UNUSABLE_IO, VIDEO_RAM, WORK_RAM,
};
use crate::error::{EmuError, Result};

mod init;

/// Byte order for two-byte bus accesses.
///
/// Instruction operands are little-endian; big-endian exists for diagnostic
/// reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Named regions of the memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryRegion {
    RomBank0,
    SwitchRomBank,
    VideoRam,
    SwitchRamBank,
    WorkRam,
    EchoRam,
    Oam,
    Unusable,
    IoPorts,
    UnusableIo,
    HighRam,
    InterruptEnable,
}

impl MemoryRegion {
    pub fn containing(addr: u16) -> Self {
        match addr as usize {
            a if a < SWITCH_ROM_BANK => Self::RomBank0,
            a if a < VIDEO_RAM => Self::SwitchRomBank,
            a if a < SWITCH_RAM_BANK => Self::VideoRam,
            a if a < WORK_RAM => Self::SwitchRamBank,
            a if a < ECHO_RAM => Self::WorkRam,
            a if a < OAM => Self::EchoRam,
            a if a < UNUSABLE => Self::Oam,
            a if a < IO_PORTS => Self::Unusable,
            a if a < UNUSABLE_IO => Self::IoPorts,
            a if a < HIGH_RAM => Self::UnusableIo,
            a if a < MEMORY_SIZE - 1 => Self::HighRam,
            _ => Self::InterruptEnable,
        }
    }

    #[inline]
    pub fn is_rom(self) -> bool {
        matches!(self, Self::RomBank0 | Self::SwitchRomBank)
    }
}

/// The 64 KiB address space as seen by the CPU.
///
/// Storage is flat. Two behaviours sit on top of it: the first 0x1E00 bytes
/// of work RAM and the echo region are kept identical, and writes into the
/// ROM window go to the cartridge instead of memory.
pub struct MemoryBus {
    memory: Box<[u8; MEMORY_SIZE]>,
    cartridge: Option<Cartridge>,
    model: Model,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

impl MemoryBus {
    pub fn new(model: Model) -> Self {
        let mut bus = Self {
            memory: Box::new([0; MEMORY_SIZE]),
            cartridge: None,
            model,
        };
        bus.apply_initial_io_state();
        bus
    }

    /// Zero the whole space, restore the power-on I/O values and map the
    /// loaded cartridge again.
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.apply_initial_io_state();
        if let Some(cart) = &self.cartridge {
            cart.map_into(&mut self.memory[..]);
        }
    }

    #[inline]
    pub fn model(&self) -> Model {
        self.model
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    /// Load a cartridge image using `cart_type` as the bank mode.
    ///
    /// Unknown types are rejected before anything is mapped. The ROM window
    /// is cleared first so a shorter image leaves no stale bytes behind.
    pub fn load_cartridge(&mut self, rom: &[u8], cart_type: u8) -> Result<()> {
        let cart = Cartridge::new(rom, cart_type)?;
        self.memory[..VIDEO_RAM].fill(0);
        cart.map_into(&mut self.memory[..]);
        self.cartridge = Some(cart);
        Ok(())
    }

    #[inline]
    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    /// Fail unless `len` bytes starting at `addr` all lie inside the space.
    pub fn check_range(addr: usize, len: usize) -> Result<()> {
        match addr.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(()),
            _ => Err(EmuError::AddressOutOfRange { addr, len }),
        }
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        if MemoryRegion::containing(addr).is_rom() {
            if let Some(cart) = &mut self.cartridge {
                cart.rom_write(addr, value);
            } else {
                log::trace!("ignored ROM write 0x{value:02X} -> 0x{addr:04X} (no cartridge)");
            }
            return;
        }

        let index = addr as usize;
        self.memory[index] = value;
        if let Some(mirror) = echo_mirror(index) {
            self.memory[mirror] = value;
        }
    }

    pub fn read_short(&self, addr: u16, endian: Endian) -> Result<u16> {
        Self::check_range(addr as usize, 2)?;
        let bytes = [self.read_byte(addr), self.read_byte(addr + 1)];
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    pub fn write_short(&mut self, addr: u16, value: u16, endian: Endian) -> Result<()> {
        Self::check_range(addr as usize, 2)?;
        let [first, second] = match endian {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        self.write_byte(addr, first);
        self.write_byte(addr + 1, second);
        Ok(())
    }

    /// Hex dump of `len` bytes starting at `addr`, sixteen bytes per line.
    pub fn dump(&self, addr: u16, len: usize) -> Result<String> {
        let start = addr as usize;
        Self::check_range(start, len)?;

        let mut out = String::new();
        for (row, chunk) in self.memory[start..start + len].chunks(16).enumerate() {
            let _ = write!(out, "{:04X}:", start + row * 16);
            for byte in chunk {
                let _ = write!(out, " {byte:02X}");
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// The address holding the same byte as `index` on the other side of the
/// echo, if `index` is mirrored at all.
fn echo_mirror(index: usize) -> Option<usize> {
    const DISTANCE: usize = ECHO_RAM - WORK_RAM;
    if (WORK_RAM..WORK_RAM + ECHO_SIZE).contains(&index) {
        Some(index + DISTANCE)
    } else if (ECHO_RAM..ECHO_RAM + ECHO_SIZE).contains(&index) {
        Some(index - DISTANCE)
    } else {
        None
    }
}
