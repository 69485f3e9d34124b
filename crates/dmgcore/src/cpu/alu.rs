use super::regs::{Flag, Registers};

impl Registers {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(crate) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.a();
        let carry_in = u8::from(use_carry && self.carry());

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (half & 0x10) != 0);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    pub(crate) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.a();
        let carry_in = i16::from(use_carry && self.carry());

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
    }

    #[inline]
    pub(crate) fn alu_and(&mut self, value: u8) {
        let result = self.a() & value;
        self.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    #[inline]
    pub(crate) fn alu_or(&mut self, value: u8) {
        let result = self.a() | value;
        self.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(crate) fn alu_xor(&mut self, value: u8) {
        let result = self.a() ^ value;
        self.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(crate) fn alu_cp(&mut self, value: u8) {
        let a = self.a();

        self.clear_flags();
        self.set_flag(Flag::Z, a == value);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (a & 0x0F) < (value & 0x0F));
        self.set_flag(Flag::C, a < value);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(crate) fn alu_daa(&mut self) {
        let mut a = self.a();
        let mut adjust: u8 = if self.carry() { 0x60 } else { 0x00 };
        if self.half_carry() {
            adjust |= 0x06;
        }

        if !self.subtract() {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.set_a(a);
    }

    /// `ADD HL,rr`: Z is unaffected, N is cleared, H and C come from bits 11
    /// and 15.
    #[inline]
    pub(crate) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);

        self.set_hl(hl.wrapping_add(value));
    }

    /// Signed 8-bit offset added to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8). Z and N are cleared; H and C come from the low byte.
    #[inline]
    pub(crate) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Shared rotate/shift core for the CB-prefixed group and the
    /// accumulator rotates. `op` follows the CB encoding (RLC, RRC, RL, RR,
    /// SLA, SRA, SWAP, SRL). Sets Z from the result.
    pub(crate) fn alu_rotate(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.carry();
        let (result, carry_out) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);
        result
    }
}
