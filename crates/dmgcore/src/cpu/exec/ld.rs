use super::{imm16, imm8, read16, read8, wide_reg, write8, Effect};
use crate::cpu::regs::Registers;
use crate::cpu::table::Instruction;
use crate::error::Result;
use crate::machine::{Endian, MemoryBus};

/// 8-bit load, destination first: `LD dst,src`.
pub(crate) fn ld8(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let value = read8(instr, instr.src, regs, bus)?;
    write8(instr, instr.dst, regs, bus, value)?;
    Ok(Effect::Done)
}

/// `LD rr,d16` and `LD SP,HL`.
pub(crate) fn ld16(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let value = read16(instr, instr.src, regs, bus)?;
    regs.set(wide_reg(instr, instr.dst)?, value);
    Ok(Effect::Done)
}

pub(crate) fn ld_a16_sp(
    _instr: &Instruction,
    regs: &mut Registers,
    bus: &mut MemoryBus,
) -> Result<Effect> {
    let addr = imm16(regs, bus)?;
    bus.write_short(addr, regs.sp(), Endian::Little)?;
    Ok(Effect::Done)
}

pub(crate) fn ld_hl_sp_r8(
    _instr: &Instruction,
    regs: &mut Registers,
    bus: &mut MemoryBus,
) -> Result<Effect> {
    let offset = imm8(regs, bus);
    let base = regs.sp();
    let value = regs.alu_add16_signed(base, offset);
    regs.set_hl(value);
    Ok(Effect::Done)
}
