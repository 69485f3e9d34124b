use std::fmt;

use crate::error::{EmuError, Result};

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

/// Identifier for every CPU-visible register, used by instruction
/// descriptors so handlers can be written once per operation instead of
/// once per register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterId {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    F,
    SP,
    PC,
    AF,
    BC,
    DE,
    HL,
}

impl RegisterId {
    pub const ALL: [RegisterId; 14] = [
        RegisterId::A,
        RegisterId::B,
        RegisterId::C,
        RegisterId::D,
        RegisterId::E,
        RegisterId::H,
        RegisterId::L,
        RegisterId::F,
        RegisterId::SP,
        RegisterId::PC,
        RegisterId::AF,
        RegisterId::BC,
        RegisterId::DE,
        RegisterId::HL,
    ];

    /// `true` for the 16-bit registers (pairs, SP and PC).
    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(
            self,
            RegisterId::SP
                | RegisterId::PC
                | RegisterId::AF
                | RegisterId::BC
                | RegisterId::DE
                | RegisterId::HL
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            RegisterId::A => "A",
            RegisterId::B => "B",
            RegisterId::C => "C",
            RegisterId::D => "D",
            RegisterId::E => "E",
            RegisterId::H => "H",
            RegisterId::L => "L",
            RegisterId::F => "F",
            RegisterId::SP => "SP",
            RegisterId::PC => "PC",
            RegisterId::AF => "AF",
            RegisterId::BC => "BC",
            RegisterId::DE => "DE",
            RegisterId::HL => "HL",
        }
    }
}

/// Numeric identifier codes follow the declaration order of [`RegisterId`].
impl TryFrom<u8> for RegisterId {
    type Error = EmuError;

    fn try_from(code: u8) -> Result<Self> {
        RegisterId::ALL
            .get(code as usize)
            .copied()
            .ok_or(EmuError::UnknownRegister(code))
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The 16-bit pairs are not stored separately: `bc()` packs `b` (high) and
/// `c` (low) on every read and `set_bc` splits the value on every write, so
/// both views always describe the same 16 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    a: u8,
    f: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    pc: u16,
}

macro_rules! byte_register {
    ($($get:ident, $set:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> u8 {
                self.$get
            }

            #[inline]
            pub fn $set(&mut self, value: u8) {
                self.$get = value;
            }
        )*
    };
}

macro_rules! register_pair {
    ($($get:ident, $set:ident, $hi:ident, $lo:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> u16 {
                u16::from_be_bytes([self.$hi, self.$lo])
            }

            #[inline]
            pub fn $set(&mut self, value: u16) {
                let [$hi, $lo] = value.to_be_bytes();
                self.$hi = $hi;
                self.$lo = $lo;
            }
        )*
    };
}

impl Registers {
    pub fn new() -> Self {
        let mut regs = Self::default();
        regs.reset();
        regs
    }

    /// Load the state the DMG boot ROM leaves behind when it jumps to the
    /// cartridge entry point.
    pub fn reset(&mut self) {
        self.a = 0x01;
        self.f = 0xB0; // Z, N, H, C = 1,0,1,1
        self.b = 0x00;
        self.c = 0x13;
        self.d = 0x00;
        self.e = 0xD8;
        self.h = 0x01;
        self.l = 0x4D;
        self.sp = 0xFFFE;
        self.pc = 0x0100;
    }

    byte_register! {
        a, set_a;
        b, set_b;
        c, set_c;
        d, set_d;
        e, set_e;
        h, set_h;
        l, set_l;
    }

    register_pair! {
        bc, set_bc, b, c;
        de, set_de, d, e;
        hl, set_hl, h, l;
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.f
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        // Lower 4 bits of F are always zero.
        self.f = value & 0xF0;
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Advance PC by `count` bytes and return the value it had before.
    #[inline]
    pub fn advance_pc(&mut self, count: u16) -> u16 {
        let old = self.pc;
        self.pc = self.pc.wrapping_add(count);
        old
    }

    /// Move PC back by `count` bytes and return the value it had before.
    #[inline]
    pub fn rewind_pc(&mut self, count: u16) -> u16 {
        let old = self.pc;
        self.pc = self.pc.wrapping_sub(count);
        old
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.f |= 1 << bit;
        } else {
            self.f &= !(1 << bit);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.get_flag(Flag::Z)
    }

    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.set_flag(Flag::Z, value);
    }

    #[inline]
    pub fn subtract(&self) -> bool {
        self.get_flag(Flag::N)
    }

    #[inline]
    pub fn set_subtract(&mut self, value: bool) {
        self.set_flag(Flag::N, value);
    }

    #[inline]
    pub fn half_carry(&self) -> bool {
        self.get_flag(Flag::H)
    }

    #[inline]
    pub fn set_half_carry(&mut self, value: bool) {
        self.set_flag(Flag::H, value);
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.get_flag(Flag::C)
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.set_flag(Flag::C, value);
    }

    /// 8-bit increment with INC flag semantics.
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement with DEC flag semantics.
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// Read any register by identifier. 8-bit registers are zero-extended.
    pub fn get(&self, id: RegisterId) -> u16 {
        match id {
            RegisterId::A => self.a as u16,
            RegisterId::B => self.b as u16,
            RegisterId::C => self.c as u16,
            RegisterId::D => self.d as u16,
            RegisterId::E => self.e as u16,
            RegisterId::H => self.h as u16,
            RegisterId::L => self.l as u16,
            RegisterId::F => self.f as u16,
            RegisterId::SP => self.sp,
            RegisterId::PC => self.pc,
            RegisterId::AF => self.af(),
            RegisterId::BC => self.bc(),
            RegisterId::DE => self.de(),
            RegisterId::HL => self.hl(),
        }
    }

    /// Write any register by identifier. 8-bit registers keep the low byte.
    pub fn set(&mut self, id: RegisterId, value: u16) {
        let byte = value as u8;
        match id {
            RegisterId::A => self.a = byte,
            RegisterId::B => self.b = byte,
            RegisterId::C => self.c = byte,
            RegisterId::D => self.d = byte,
            RegisterId::E => self.e = byte,
            RegisterId::H => self.h = byte,
            RegisterId::L => self.l = byte,
            RegisterId::F => self.set_f(byte),
            RegisterId::SP => self.sp = value,
            RegisterId::PC => self.pc = value,
            RegisterId::AF => self.set_af(value),
            RegisterId::BC => self.set_bc(value),
            RegisterId::DE => self.set_de(value),
            RegisterId::HL => self.set_hl(value),
        }
    }

    /// Increment a register by identifier.
    ///
    /// 8-bit registers go through [`Registers::inc8`] and update Z/N/H;
    /// 16-bit registers wrap without touching the flags.
    ///
    /// `F` is the one exception: its current value is the operand, but only
    /// the resulting flag update is kept, so `inc(F)` returns the new flags
    /// rather than `F + 1`.
    pub fn inc(&mut self, id: RegisterId) -> u16 {
        let value = self.get(id);
        let result = if id.is_wide() {
            value.wrapping_add(1)
        } else {
            self.inc8(value as u8) as u16
        };
        self.store_counted(id, result);
        self.get(id)
    }

    /// Decrement a register by identifier; see [`Registers::inc`].
    pub fn dec(&mut self, id: RegisterId) -> u16 {
        let value = self.get(id);
        let result = if id.is_wide() {
            value.wrapping_sub(1)
        } else {
            self.dec8(value as u8) as u16
        };
        self.store_counted(id, result);
        self.get(id)
    }

    /// Numeric-code variant of [`Registers::get`] for decoders that carry raw
    /// identifier codes.
    pub fn get_by_index(&self, code: u8) -> Result<u16> {
        Ok(self.get(RegisterId::try_from(code)?))
    }

    pub fn set_by_index(&mut self, code: u8, value: u16) -> Result<()> {
        self.set(RegisterId::try_from(code)?, value);
        Ok(())
    }

    pub fn inc_by_index(&mut self, code: u8) -> Result<u16> {
        Ok(self.inc(RegisterId::try_from(code)?))
    }

    pub fn dec_by_index(&mut self, code: u8) -> Result<u16> {
        Ok(self.dec(RegisterId::try_from(code)?))
    }

    fn store_counted(&mut self, id: RegisterId, value: u16) {
        // F holds the flags, so the flag update itself is the result.
        if id != RegisterId::F {
            self.set(id, value);
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC=0x{:04X} SP=0x{:04X} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X}",
            self.pc,
            self.sp,
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
        )
    }
}
