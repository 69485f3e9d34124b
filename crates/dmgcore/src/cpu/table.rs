use std::fmt;

use super::exec::{
    alu::{adc, add, add_hl, add_sp, and, ccf, cp, cpl, daa, or, rla, rlca, rra, rrca, sbc, scf, sub, xor},
    cb::prefix_cb,
    control::{call, jp, jp_hl, jr, ret, reti, rst},
    incdec::{dec16, dec8, inc16, inc8},
    ld::{ld16, ld8, ld_a16_sp, ld_hl_sp_r8},
    stack::{pop, push},
    system::{di, ei, halt, nop, stop, unknown},
    Handler,
};
use super::regs::{Registers, RegisterId::{self, *}};

/// Where an instruction reads or writes a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Implied,
    /// The register itself.
    Reg(RegisterId),
    /// The byte at the address held in the register.
    Mem(RegisterId),
    /// `(HL+)`: like `Mem`, then the register is incremented.
    MemInc(RegisterId),
    /// `(HL-)`: like `Mem`, then the register is decremented.
    MemDec(RegisterId),
    Imm8,
    Imm16,
    /// The byte at the 16-bit immediate address.
    MemImm16,
    /// `(0xFF00 + a8)`.
    HighImm8,
    /// `(0xFF00 + r)`.
    HighReg(RegisterId),
    /// Fixed restart address.
    Vector(u8),
}

impl Operand {
    pub fn is_memory(self) -> bool {
        !matches!(
            self,
            Operand::Implied | Operand::Reg(_) | Operand::Imm8 | Operand::Imm16 | Operand::Vector(_)
        )
    }
}

/// Branch condition tested against the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Always,
    NotZero,
    Zero,
    NoCarry,
    Carry,
}

impl Cond {
    #[inline]
    pub fn holds(self, regs: &Registers) -> bool {
        match self {
            Cond::Always => true,
            Cond::NotZero => !regs.zero(),
            Cond::Zero => regs.zero(),
            Cond::NoCarry => !regs.carry(),
            Cond::Carry => regs.carry(),
        }
    }
}

/// One opcode's descriptor.
///
/// `operand_len` bytes follow the opcode. Handlers read them at PC without
/// consuming them; the engine skips over them afterwards unless `jumps` is
/// set, in which case the handler leaves PC where execution continues.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    /// Base cost in T-cycles (the not-taken cost for conditional branches).
    pub cycles: u8,
    pub operand_len: u8,
    pub dst: Operand,
    pub src: Operand,
    pub cond: Cond,
    pub jumps: bool,
    /// False only for the opcode holes.
    pub implemented: bool,
    pub handler: Handler,
}

impl Instruction {
    const fn len(mut self, operand_len: u8) -> Self {
        self.operand_len = operand_len;
        self
    }

    const fn dst(mut self, dst: Operand) -> Self {
        self.dst = dst;
        self
    }

    const fn src(mut self, src: Operand) -> Self {
        self.src = src;
        self
    }

    const fn cond(mut self, cond: Cond) -> Self {
        self.cond = cond;
        self
    }

    const fn jumps(mut self) -> Self {
        self.jumps = true;
        self
    }

    /// Total instruction length including the opcode byte.
    #[inline]
    pub fn size(&self) -> u16 {
        1 + self.operand_len as u16
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("cycles", &self.cycles)
            .field("operand_len", &self.operand_len)
            .field("dst", &self.dst)
            .field("src", &self.src)
            .field("cond", &self.cond)
            .field("jumps", &self.jumps)
            .field("implemented", &self.implemented)
            .finish()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes, {} cycles)", self.mnemonic, self.size(), self.cycles)
    }
}

const fn op(mnemonic: &'static str, cycles: u8, handler: Handler) -> Instruction {
    Instruction {
        mnemonic,
        cycles,
        operand_len: 0,
        dst: Operand::Implied,
        src: Operand::Implied,
        cond: Cond::Always,
        jumps: false,
        implemented: true,
        handler,
    }
}

const fn reg(id: RegisterId) -> Operand {
    Operand::Reg(id)
}

const fn mem(id: RegisterId) -> Operand {
    Operand::Mem(id)
}

const UNKNOWN: Instruction = Instruction {
    mnemonic: "??",
    cycles: 4,
    operand_len: 0,
    dst: Operand::Implied,
    src: Operand::Implied,
    cond: Cond::Always,
    jumps: false,
    implemented: false,
    handler: unknown,
};

/// Primary opcode table, indexed by opcode.
pub static INSTRUCTIONS: [Instruction; 256] = [
    // 0x00
    op("NOP", 4, nop),
    op("LD BC,d16", 12, ld16).len(2).dst(reg(BC)).src(Operand::Imm16),
    op("LD (BC),A", 8, ld8).dst(mem(BC)).src(reg(A)),
    op("INC BC", 8, inc16).dst(reg(BC)),
    op("INC B", 4, inc8).dst(reg(B)),
    op("DEC B", 4, dec8).dst(reg(B)),
    op("LD B,d8", 8, ld8).len(1).dst(reg(B)).src(Operand::Imm8),
    op("RLCA", 4, rlca),
    op("LD (a16),SP", 20, ld_a16_sp).len(2).dst(Operand::MemImm16).src(reg(SP)),
    op("ADD HL,BC", 8, add_hl).dst(reg(HL)).src(reg(BC)),
    op("LD A,(BC)", 8, ld8).dst(reg(A)).src(mem(BC)),
    op("DEC BC", 8, dec16).dst(reg(BC)),
    op("INC C", 4, inc8).dst(reg(C)),
    op("DEC C", 4, dec8).dst(reg(C)),
    op("LD C,d8", 8, ld8).len(1).dst(reg(C)).src(Operand::Imm8),
    op("RRCA", 4, rrca),
    // 0x10
    op("STOP", 4, stop).len(1),
    op("LD DE,d16", 12, ld16).len(2).dst(reg(DE)).src(Operand::Imm16),
    op("LD (DE),A", 8, ld8).dst(mem(DE)).src(reg(A)),
    op("INC DE", 8, inc16).dst(reg(DE)),
    op("INC D", 4, inc8).dst(reg(D)),
    op("DEC D", 4, dec8).dst(reg(D)),
    op("LD D,d8", 8, ld8).len(1).dst(reg(D)).src(Operand::Imm8),
    op("RLA", 4, rla),
    op("JR r8", 12, jr).len(1).jumps(),
    op("ADD HL,DE", 8, add_hl).dst(reg(HL)).src(reg(DE)),
    op("LD A,(DE)", 8, ld8).dst(reg(A)).src(mem(DE)),
    op("DEC DE", 8, dec16).dst(reg(DE)),
    op("INC E", 4, inc8).dst(reg(E)),
    op("DEC E", 4, dec8).dst(reg(E)),
    op("LD E,d8", 8, ld8).len(1).dst(reg(E)).src(Operand::Imm8),
    op("RRA", 4, rra),
    // 0x20
    op("JR NZ,r8", 8, jr).len(1).cond(Cond::NotZero).jumps(),
    op("LD HL,d16", 12, ld16).len(2).dst(reg(HL)).src(Operand::Imm16),
    op("LD (HL+),A", 8, ld8).dst(Operand::MemInc(HL)).src(reg(A)),
    op("INC HL", 8, inc16).dst(reg(HL)),
    op("INC H", 4, inc8).dst(reg(H)),
    op("DEC H", 4, dec8).dst(reg(H)),
    op("LD H,d8", 8, ld8).len(1).dst(reg(H)).src(Operand::Imm8),
    op("DAA", 4, daa),
    op("JR Z,r8", 8, jr).len(1).cond(Cond::Zero).jumps(),
    op("ADD HL,HL", 8, add_hl).dst(reg(HL)).src(reg(HL)),
    op("LD A,(HL+)", 8, ld8).dst(reg(A)).src(Operand::MemInc(HL)),
    op("DEC HL", 8, dec16).dst(reg(HL)),
    op("INC L", 4, inc8).dst(reg(L)),
    op("DEC L", 4, dec8).dst(reg(L)),
    op("LD L,d8", 8, ld8).len(1).dst(reg(L)).src(Operand::Imm8),
    op("CPL", 4, cpl),
    // 0x30
    op("JR NC,r8", 8, jr).len(1).cond(Cond::NoCarry).jumps(),
    op("LD SP,d16", 12, ld16).len(2).dst(reg(SP)).src(Operand::Imm16),
    op("LD (HL-),A", 8, ld8).dst(Operand::MemDec(HL)).src(reg(A)),
    op("INC SP", 8, inc16).dst(reg(SP)),
    op("INC (HL)", 12, inc8).dst(mem(HL)),
    op("DEC (HL)", 12, dec8).dst(mem(HL)),
    op("LD (HL),d8", 12, ld8).len(1).dst(mem(HL)).src(Operand::Imm8),
    op("SCF", 4, scf),
    op("JR C,r8", 8, jr).len(1).cond(Cond::Carry).jumps(),
    op("ADD HL,SP", 8, add_hl).dst(reg(HL)).src(reg(SP)),
    op("LD A,(HL-)", 8, ld8).dst(reg(A)).src(Operand::MemDec(HL)),
    op("DEC SP", 8, dec16).dst(reg(SP)),
    op("INC A", 4, inc8).dst(reg(A)),
    op("DEC A", 4, dec8).dst(reg(A)),
    op("LD A,d8", 8, ld8).len(1).dst(reg(A)).src(Operand::Imm8),
    op("CCF", 4, ccf),
    // 0x40
    op("LD B,B", 4, ld8).dst(reg(B)).src(reg(B)),
    op("LD B,C", 4, ld8).dst(reg(B)).src(reg(C)),
    op("LD B,D", 4, ld8).dst(reg(B)).src(reg(D)),
    op("LD B,E", 4, ld8).dst(reg(B)).src(reg(E)),
    op("LD B,H", 4, ld8).dst(reg(B)).src(reg(H)),
    op("LD B,L", 4, ld8).dst(reg(B)).src(reg(L)),
    op("LD B,(HL)", 8, ld8).dst(reg(B)).src(mem(HL)),
    op("LD B,A", 4, ld8).dst(reg(B)).src(reg(A)),
    op("LD C,B", 4, ld8).dst(reg(C)).src(reg(B)),
    op("LD C,C", 4, ld8).dst(reg(C)).src(reg(C)),
    op("LD C,D", 4, ld8).dst(reg(C)).src(reg(D)),
    op("LD C,E", 4, ld8).dst(reg(C)).src(reg(E)),
    op("LD C,H", 4, ld8).dst(reg(C)).src(reg(H)),
    op("LD C,L", 4, ld8).dst(reg(C)).src(reg(L)),
    op("LD C,(HL)", 8, ld8).dst(reg(C)).src(mem(HL)),
    op("LD C,A", 4, ld8).dst(reg(C)).src(reg(A)),
    // 0x50
    op("LD D,B", 4, ld8).dst(reg(D)).src(reg(B)),
    op("LD D,C", 4, ld8).dst(reg(D)).src(reg(C)),
    op("LD D,D", 4, ld8).dst(reg(D)).src(reg(D)),
    op("LD D,E", 4, ld8).dst(reg(D)).src(reg(E)),
    op("LD D,H", 4, ld8).dst(reg(D)).src(reg(H)),
    op("LD D,L", 4, ld8).dst(reg(D)).src(reg(L)),
    op("LD D,(HL)", 8, ld8).dst(reg(D)).src(mem(HL)),
    op("LD D,A", 4, ld8).dst(reg(D)).src(reg(A)),
    op("LD E,B", 4, ld8).dst(reg(E)).src(reg(B)),
    op("LD E,C", 4, ld8).dst(reg(E)).src(reg(C)),
    op("LD E,D", 4, ld8).dst(reg(E)).src(reg(D)),
    op("LD E,E", 4, ld8).dst(reg(E)).src(reg(E)),
    op("LD E,H", 4, ld8).dst(reg(E)).src(reg(H)),
    op("LD E,L", 4, ld8).dst(reg(E)).src(reg(L)),
    op("LD E,(HL)", 8, ld8).dst(reg(E)).src(mem(HL)),
    op("LD E,A", 4, ld8).dst(reg(E)).src(reg(A)),
    // 0x60
    op("LD H,B", 4, ld8).dst(reg(H)).src(reg(B)),
    op("LD H,C", 4, ld8).dst(reg(H)).src(reg(C)),
    op("LD H,D", 4, ld8).dst(reg(H)).src(reg(D)),
    op("LD H,E", 4, ld8).dst(reg(H)).src(reg(E)),
    op("LD H,H", 4, ld8).dst(reg(H)).src(reg(H)),
    op("LD H,L", 4, ld8).dst(reg(H)).src(reg(L)),
    op("LD H,(HL)", 8, ld8).dst(reg(H)).src(mem(HL)),
    op("LD H,A", 4, ld8).dst(reg(H)).src(reg(A)),
    op("LD L,B", 4, ld8).dst(reg(L)).src(reg(B)),
    op("LD L,C", 4, ld8).dst(reg(L)).src(reg(C)),
    op("LD L,D", 4, ld8).dst(reg(L)).src(reg(D)),
    op("LD L,E", 4, ld8).dst(reg(L)).src(reg(E)),
    op("LD L,H", 4, ld8).dst(reg(L)).src(reg(H)),
    op("LD L,L", 4, ld8).dst(reg(L)).src(reg(L)),
    op("LD L,(HL)", 8, ld8).dst(reg(L)).src(mem(HL)),
    op("LD L,A", 4, ld8).dst(reg(L)).src(reg(A)),
    // 0x70
    op("LD (HL),B", 8, ld8).dst(mem(HL)).src(reg(B)),
    op("LD (HL),C", 8, ld8).dst(mem(HL)).src(reg(C)),
    op("LD (HL),D", 8, ld8).dst(mem(HL)).src(reg(D)),
    op("LD (HL),E", 8, ld8).dst(mem(HL)).src(reg(E)),
    op("LD (HL),H", 8, ld8).dst(mem(HL)).src(reg(H)),
    op("LD (HL),L", 8, ld8).dst(mem(HL)).src(reg(L)),
    op("HALT", 4, halt),
    op("LD (HL),A", 8, ld8).dst(mem(HL)).src(reg(A)),
    op("LD A,B", 4, ld8).dst(reg(A)).src(reg(B)),
    op("LD A,C", 4, ld8).dst(reg(A)).src(reg(C)),
    op("LD A,D", 4, ld8).dst(reg(A)).src(reg(D)),
    op("LD A,E", 4, ld8).dst(reg(A)).src(reg(E)),
    op("LD A,H", 4, ld8).dst(reg(A)).src(reg(H)),
    op("LD A,L", 4, ld8).dst(reg(A)).src(reg(L)),
    op("LD A,(HL)", 8, ld8).dst(reg(A)).src(mem(HL)),
    op("LD A,A", 4, ld8).dst(reg(A)).src(reg(A)),
    // 0x80
    op("ADD A,B", 4, add).dst(reg(A)).src(reg(B)),
    op("ADD A,C", 4, add).dst(reg(A)).src(reg(C)),
    op("ADD A,D", 4, add).dst(reg(A)).src(reg(D)),
    op("ADD A,E", 4, add).dst(reg(A)).src(reg(E)),
    op("ADD A,H", 4, add).dst(reg(A)).src(reg(H)),
    op("ADD A,L", 4, add).dst(reg(A)).src(reg(L)),
    op("ADD A,(HL)", 8, add).dst(reg(A)).src(mem(HL)),
    op("ADD A,A", 4, add).dst(reg(A)).src(reg(A)),
    op("ADC A,B", 4, adc).dst(reg(A)).src(reg(B)),
    op("ADC A,C", 4, adc).dst(reg(A)).src(reg(C)),
    op("ADC A,D", 4, adc).dst(reg(A)).src(reg(D)),
    op("ADC A,E", 4, adc).dst(reg(A)).src(reg(E)),
    op("ADC A,H", 4, adc).dst(reg(A)).src(reg(H)),
    op("ADC A,L", 4, adc).dst(reg(A)).src(reg(L)),
    op("ADC A,(HL)", 8, adc).dst(reg(A)).src(mem(HL)),
    op("ADC A,A", 4, adc).dst(reg(A)).src(reg(A)),
    // 0x90
    op("SUB B", 4, sub).dst(reg(A)).src(reg(B)),
    op("SUB C", 4, sub).dst(reg(A)).src(reg(C)),
    op("SUB D", 4, sub).dst(reg(A)).src(reg(D)),
    op("SUB E", 4, sub).dst(reg(A)).src(reg(E)),
    op("SUB H", 4, sub).dst(reg(A)).src(reg(H)),
    op("SUB L", 4, sub).dst(reg(A)).src(reg(L)),
    op("SUB (HL)", 8, sub).dst(reg(A)).src(mem(HL)),
    op("SUB A", 4, sub).dst(reg(A)).src(reg(A)),
    op("SBC A,B", 4, sbc).dst(reg(A)).src(reg(B)),
    op("SBC A,C", 4, sbc).dst(reg(A)).src(reg(C)),
    op("SBC A,D", 4, sbc).dst(reg(A)).src(reg(D)),
    op("SBC A,E", 4, sbc).dst(reg(A)).src(reg(E)),
    op("SBC A,H", 4, sbc).dst(reg(A)).src(reg(H)),
    op("SBC A,L", 4, sbc).dst(reg(A)).src(reg(L)),
    op("SBC A,(HL)", 8, sbc).dst(reg(A)).src(mem(HL)),
    op("SBC A,A", 4, sbc).dst(reg(A)).src(reg(A)),
    // 0xA0
    op("AND B", 4, and).dst(reg(A)).src(reg(B)),
    op("AND C", 4, and).dst(reg(A)).src(reg(C)),
    op("AND D", 4, and).dst(reg(A)).src(reg(D)),
    op("AND E", 4, and).dst(reg(A)).src(reg(E)),
    op("AND H", 4, and).dst(reg(A)).src(reg(H)),
    op("AND L", 4, and).dst(reg(A)).src(reg(L)),
    op("AND (HL)", 8, and).dst(reg(A)).src(mem(HL)),
    op("AND A", 4, and).dst(reg(A)).src(reg(A)),
    op("XOR B", 4, xor).dst(reg(A)).src(reg(B)),
    op("XOR C", 4, xor).dst(reg(A)).src(reg(C)),
    op("XOR D", 4, xor).dst(reg(A)).src(reg(D)),
    op("XOR E", 4, xor).dst(reg(A)).src(reg(E)),
    op("XOR H", 4, xor).dst(reg(A)).src(reg(H)),
    op("XOR L", 4, xor).dst(reg(A)).src(reg(L)),
    op("XOR (HL)", 8, xor).dst(reg(A)).src(mem(HL)),
    op("XOR A", 4, xor).dst(reg(A)).src(reg(A)),
    // 0xB0
    op("OR B", 4, or).dst(reg(A)).src(reg(B)),
    op("OR C", 4, or).dst(reg(A)).src(reg(C)),
    op("OR D", 4, or).dst(reg(A)).src(reg(D)),
    op("OR E", 4, or).dst(reg(A)).src(reg(E)),
    op("OR H", 4, or).dst(reg(A)).src(reg(H)),
    op("OR L", 4, or).dst(reg(A)).src(reg(L)),
    op("OR (HL)", 8, or).dst(reg(A)).src(mem(HL)),
    op("OR A", 4, or).dst(reg(A)).src(reg(A)),
    op("CP B", 4, cp).dst(reg(A)).src(reg(B)),
    op("CP C", 4, cp).dst(reg(A)).src(reg(C)),
    op("CP D", 4, cp).dst(reg(A)).src(reg(D)),
    op("CP E", 4, cp).dst(reg(A)).src(reg(E)),
    op("CP H", 4, cp).dst(reg(A)).src(reg(H)),
    op("CP L", 4, cp).dst(reg(A)).src(reg(L)),
    op("CP (HL)", 8, cp).dst(reg(A)).src(mem(HL)),
    op("CP A", 4, cp).dst(reg(A)).src(reg(A)),
    // 0xC0
    op("RET NZ", 8, ret).cond(Cond::NotZero).jumps(),
    op("POP BC", 12, pop).dst(reg(BC)),
    op("JP NZ,a16", 12, jp).len(2).cond(Cond::NotZero).jumps(),
    op("JP a16", 16, jp).len(2).jumps(),
    op("CALL NZ,a16", 12, call).len(2).cond(Cond::NotZero).jumps(),
    op("PUSH BC", 16, push).src(reg(BC)),
    op("ADD A,d8", 8, add).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 00H", 16, rst).src(Operand::Vector(0x00)).jumps(),
    op("RET Z", 8, ret).cond(Cond::Zero).jumps(),
    op("RET", 16, ret).jumps(),
    op("JP Z,a16", 12, jp).len(2).cond(Cond::Zero).jumps(),
    op("PREFIX CB", 8, prefix_cb).len(1),
    op("CALL Z,a16", 12, call).len(2).cond(Cond::Zero).jumps(),
    op("CALL a16", 24, call).len(2).jumps(),
    op("ADC A,d8", 8, adc).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 08H", 16, rst).src(Operand::Vector(0x08)).jumps(),
    // 0xD0
    op("RET NC", 8, ret).cond(Cond::NoCarry).jumps(),
    op("POP DE", 12, pop).dst(reg(DE)),
    op("JP NC,a16", 12, jp).len(2).cond(Cond::NoCarry).jumps(),
    UNKNOWN,
    op("CALL NC,a16", 12, call).len(2).cond(Cond::NoCarry).jumps(),
    op("PUSH DE", 16, push).src(reg(DE)),
    op("SUB d8", 8, sub).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 10H", 16, rst).src(Operand::Vector(0x10)).jumps(),
    op("RET C", 8, ret).cond(Cond::Carry).jumps(),
    op("RETI", 16, reti).jumps(),
    op("JP C,a16", 12, jp).len(2).cond(Cond::Carry).jumps(),
    UNKNOWN,
    op("CALL C,a16", 12, call).len(2).cond(Cond::Carry).jumps(),
    UNKNOWN,
    op("SBC A,d8", 8, sbc).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 18H", 16, rst).src(Operand::Vector(0x18)).jumps(),
    // 0xE0
    op("LDH (a8),A", 12, ld8).len(1).dst(Operand::HighImm8).src(reg(A)),
    op("POP HL", 12, pop).dst(reg(HL)),
    op("LD (C),A", 8, ld8).dst(Operand::HighReg(C)).src(reg(A)),
    UNKNOWN,
    UNKNOWN,
    op("PUSH HL", 16, push).src(reg(HL)),
    op("AND d8", 8, and).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 20H", 16, rst).src(Operand::Vector(0x20)).jumps(),
    op("ADD SP,r8", 16, add_sp).len(1).dst(reg(SP)).src(Operand::Imm8),
    op("JP (HL)", 4, jp_hl).src(reg(HL)).jumps(),
    op("LD (a16),A", 16, ld8).len(2).dst(Operand::MemImm16).src(reg(A)),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("XOR d8", 8, xor).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 28H", 16, rst).src(Operand::Vector(0x28)).jumps(),
    // 0xF0
    op("LDH A,(a8)", 12, ld8).len(1).dst(reg(A)).src(Operand::HighImm8),
    op("POP AF", 12, pop).dst(reg(AF)),
    op("LD A,(C)", 8, ld8).dst(reg(A)).src(Operand::HighReg(C)),
    op("DI", 4, di),
    UNKNOWN,
    op("PUSH AF", 16, push).src(reg(AF)),
    op("OR d8", 8, or).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 30H", 16, rst).src(Operand::Vector(0x30)).jumps(),
    op("LD HL,SP+r8", 12, ld_hl_sp_r8).len(1).dst(reg(HL)).src(reg(SP)),
    op("LD SP,HL", 8, ld16).dst(reg(SP)).src(reg(HL)),
    op("LD A,(a16)", 16, ld8).len(2).dst(reg(A)).src(Operand::MemImm16),
    op("EI", 4, ei),
    UNKNOWN,
    UNKNOWN,
    op("CP d8", 8, cp).len(1).dst(reg(A)).src(Operand::Imm8),
    op("RST 38H", 16, rst).src(Operand::Vector(0x38)).jumps(),
];
