use super::MemoryBus;
use crate::machine::{Model, REG_IE, REG_NR52};

/// Power-on I/O register values left behind by the boot ROM. Registers not
/// listed stay zero.
const INITIAL_IO: &[(u16, u8)] = &[
    (0xFF05, 0x00), // TIMA
    (0xFF06, 0x00), // TMA
    (0xFF07, 0x00), // TAC
    (0xFF10, 0x80), // NR10
    (0xFF11, 0xBF), // NR11
    (0xFF12, 0xF3), // NR12
    (0xFF14, 0xBF), // NR14
    (0xFF16, 0x3F), // NR21
    (0xFF17, 0x00), // NR22
    (0xFF19, 0xBF), // NR24
    (0xFF1A, 0x7F), // NR30
    (0xFF1B, 0xFF), // NR31
    (0xFF1C, 0x9F), // NR32
    (0xFF1E, 0xBF), // NR34
    (0xFF20, 0xFF), // NR41
    (0xFF21, 0x00), // NR42
    (0xFF22, 0x00), // NR43
    (0xFF23, 0xBF), // NR44
    (0xFF24, 0x77), // NR50
    (0xFF25, 0xF3), // NR51
    (0xFF40, 0x91), // LCDC
    (0xFF42, 0x00), // SCY
    (0xFF43, 0x00), // SCX
    (0xFF45, 0x00), // LYC
    (0xFF47, 0xFC), // BGP
    (0xFF48, 0xFF), // OBP0
    (0xFF49, 0xFF), // OBP1
    (0xFF4A, 0x00), // WY
    (0xFF4B, 0x00), // WX
    (REG_IE, 0x00),
];

impl MemoryBus {
    /// Write the power-on I/O values straight into memory, bypassing the
    /// cartridge and echo routing of `write_byte`.
    pub(super) fn apply_initial_io_state(&mut self) {
        for &(addr, value) in INITIAL_IO {
            self.memory[addr as usize] = value;
        }

        // Sound on. Channel 1 reads as off on the SGB.
        self.memory[REG_NR52 as usize] = match self.model {
            Model::Sgb => 0xF0,
            Model::Dmg | Model::Cgb => 0xF1,
        };
    }
}
