use thiserror::Error;

/// Fatal conditions raised by the core.
///
/// None of these are recoverable from the emulated program's point of view:
/// the host loop is expected to stop stepping once one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmuError {
    /// An access of `len` bytes starting at `addr` leaves the 64 KiB space.
    #[error("memory access of {len} byte(s) at 0x{addr:05X} is outside the 64 KiB address space")]
    AddressOutOfRange { addr: usize, len: usize },

    /// The fetched opcode has no implemented handler.
    #[error("unmapped opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnmappedOpcode { opcode: u8, pc: u16 },

    /// A descriptor names an operand its handler cannot use.
    #[error("malformed instruction descriptor '{0}'")]
    MalformedInstruction(&'static str),

    /// A register identifier code outside the known register set.
    #[error("unknown register identifier {0}")]
    UnknownRegister(u8),

    /// The cartridge-type header byte is not in the controller table.
    #[error("unsupported cartridge type 0x{0:02X}")]
    UnsupportedCartridge(u8),

    #[error("ROM image is too short to contain a cartridge header")]
    EmptyRom,
}

pub type Result<T> = std::result::Result<T, EmuError>;
