use super::{read8, wide_reg, write8, Effect};
use crate::cpu::regs::Registers;
use crate::cpu::table::{Instruction, Operand};
use crate::error::Result;
use crate::machine::MemoryBus;

/// `INC r` / `INC (HL)`: Z, N, H updated, C untouched.
pub(crate) fn inc8(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    if let Operand::Reg(r) = instr.dst {
        regs.inc(r);
    } else {
        let value = read8(instr, instr.dst, regs, bus)?;
        let result = regs.inc8(value);
        write8(instr, instr.dst, regs, bus, result)?;
    }
    Ok(Effect::Done)
}

pub(crate) fn dec8(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    if let Operand::Reg(r) = instr.dst {
        regs.dec(r);
    } else {
        let value = read8(instr, instr.dst, regs, bus)?;
        let result = regs.dec8(value);
        write8(instr, instr.dst, regs, bus, result)?;
    }
    Ok(Effect::Done)
}

/// 16-bit increments wrap and leave the flags alone.
pub(crate) fn inc16(instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    regs.inc(wide_reg(instr, instr.dst)?);
    Ok(Effect::Done)
}

pub(crate) fn dec16(instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    regs.dec(wide_reg(instr, instr.dst)?);
    Ok(Effect::Done)
}
