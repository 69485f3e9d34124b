use bitflags::bitflags;

use super::VIDEO_RAM;
use crate::error::{EmuError, Result};

/// Cartridge-type header byte → capability string. Capabilities are joined
/// with `+`.
const CARTRIDGE_TYPES: &[(u8, &str)] = &[
    (0x00, "ROM ONLY"),
    (0x01, "ROM+MBC1"),
    (0x02, "ROM+MBC1+RAM"),
    (0x03, "ROM+MBC1+RAM+BATT"),
    (0x05, "ROM+MBC2"),
    (0x06, "ROM+MBC2+BATTERY"),
    (0x08, "ROM+RAM"),
    (0x09, "ROM+RAM+BATTERY"),
    (0x0B, "ROM+MMM01"),
    (0x0C, "ROM+MMM01+SRAM"),
    (0x0D, "ROM+MMM01+SRAM+BATT"),
    (0x0F, "ROM+MBC3+TIMER+BATT"),
    (0x10, "ROM+MBC3+TIMER+RAM+BATT"),
    (0x11, "ROM+MBC3"),
    (0x12, "ROM+MBC3+RAM"),
    (0x13, "ROM+MBC3+RAM+BATT"),
    (0x19, "ROM+MBC5"),
    (0x1A, "ROM+MBC5+RAM"),
    (0x1B, "ROM+MBC5+RAM+BATT"),
    (0x1C, "ROM+MBC5+RUMBLE"),
    (0x1D, "ROM+MBC5+RUMBLE+SRAM"),
    (0x1E, "ROM+MBC5+RUMBLE+SRAM+BATT"),
    (0x1F, "Pocket Camera"),
    (0xFD, "Bandai+TAMA5"),
    (0xFE, "Hudson+HuC-3"),
    (0xFF, "Hudson+HuC-1"),
];

bitflags! {
    /// Hardware a cartridge declares in its type byte.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Capabilities: u16 {
        const ROM = 1 << 0;
        const MBC1 = 1 << 1;
        const MBC2 = 1 << 2;
        const MBC3 = 1 << 3;
        const MBC5 = 1 << 4;
        const MMM01 = 1 << 5;
        const RAM = 1 << 6;
        const SRAM = 1 << 7;
        const BATTERY = 1 << 8;
        const TIMER = 1 << 9;
        const RUMBLE = 1 << 10;
        const POCKET_CAMERA = 1 << 11;
        const BANDAI_TAMA5 = 1 << 12;
        const HUDSON_HUC1 = 1 << 13;
        const HUDSON_HUC3 = 1 << 14;
    }
}

impl Capabilities {
    fn from_token(token: &str) -> Option<Self> {
        let caps = match token {
            "ROM" | "ROM ONLY" => Self::ROM,
            "MBC1" => Self::MBC1,
            "MBC2" => Self::MBC2,
            "MBC3" => Self::MBC3,
            "MBC5" => Self::MBC5,
            "MMM01" => Self::MMM01,
            "RAM" => Self::RAM,
            "SRAM" => Self::SRAM,
            "BATT" | "BATTERY" => Self::BATTERY,
            "TIMER" => Self::TIMER,
            "RUMBLE" => Self::RUMBLE,
            "Pocket Camera" => Self::POCKET_CAMERA,
            // Vendor prefixes carry no hardware of their own.
            "Bandai" | "Hudson" => Self::empty(),
            "TAMA5" => Self::BANDAI_TAMA5,
            "HuC-1" => Self::HUDSON_HUC1,
            "HuC-3" => Self::HUDSON_HUC3,
            _ => return None,
        };
        Some(caps)
    }

    /// Parse a `+`-joined capability string.
    pub fn parse(description: &str) -> Self {
        description
            .split('+')
            .fold(Self::empty(), |caps, token| match Self::from_token(token) {
                Some(found) => caps | found,
                None => {
                    log::warn!("unrecognised cartridge capability '{token}'");
                    caps
                }
            })
    }
}

/// Look up the capability string for a cartridge-type byte.
pub fn describe(cart_type: u8) -> Result<&'static str> {
    CARTRIDGE_TYPES
        .iter()
        .find(|(code, _)| *code == cart_type)
        .map(|(_, description)| *description)
        .ok_or(EmuError::UnsupportedCartridge(cart_type))
}

/// A loaded cartridge image.
///
/// Only plain ROM mapping is functional: the first 32 KiB are mapped into
/// the fixed and switchable bank windows. Bank controllers are recognised and
/// reported but never switch banks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cartridge {
    rom: Vec<u8>,
    cart_type: u8,
    description: &'static str,
    capabilities: Capabilities,
}

impl Cartridge {
    pub fn new(rom: &[u8], cart_type: u8) -> Result<Self> {
        let description = describe(cart_type)?;
        let capabilities = Capabilities::parse(description);

        log::info!(
            "cartridge: {} bytes, type 0x{cart_type:02X} ({description})",
            rom.len()
        );
        for controller in [
            Capabilities::MBC1,
            Capabilities::MBC2,
            Capabilities::MBC3,
            Capabilities::MBC5,
            Capabilities::MMM01,
        ] {
            if capabilities.contains(controller) {
                log::warn!("bank controller {controller:?} is not emulated; only bank 0/1 are mapped");
            }
        }

        Ok(Self {
            rom: rom.to_vec(),
            cart_type,
            description,
            capabilities,
        })
    }

    #[inline]
    pub fn cart_type(&self) -> u8 {
        self.cart_type
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[inline]
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Number of image bytes visible through the ROM window.
    pub fn mapped_len(&self) -> usize {
        self.rom.len().min(VIDEO_RAM)
    }

    /// Copy the mapped part of the image to the start of `memory`.
    pub(super) fn map_into(&self, memory: &mut [u8]) {
        let len = self.mapped_len().min(memory.len());
        memory[..len].copy_from_slice(&self.rom[..len]);
    }

    /// Writes into the ROM window would select banks on a controller cart.
    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        debug_assert!((addr as usize) < VIDEO_RAM);
        log::trace!("ignored ROM write 0x{value:02X} -> 0x{addr:04X}");
    }

    /// External RAM is only present when the type byte says so.
    pub fn has_external_ram(&self) -> bool {
        self.capabilities
            .intersects(Capabilities::RAM | Capabilities::SRAM | Capabilities::MBC2)
    }
}
