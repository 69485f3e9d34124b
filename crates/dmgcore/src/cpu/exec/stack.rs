use super::{read16, wide_reg, Effect};
use crate::cpu::regs::Registers;
use crate::cpu::table::Instruction;
use crate::error::Result;
use crate::machine::{Endian, MemoryBus};

pub(crate) fn push_u16(regs: &mut Registers, bus: &mut MemoryBus, value: u16) -> Result<()> {
    let sp = regs.sp().wrapping_sub(2);
    bus.write_short(sp, value, Endian::Little)?;
    regs.set_sp(sp);
    Ok(())
}

pub(crate) fn pop_u16(regs: &mut Registers, bus: &mut MemoryBus) -> Result<u16> {
    let value = bus.read_short(regs.sp(), Endian::Little)?;
    regs.set_sp(regs.sp().wrapping_add(2));
    Ok(value)
}

pub(crate) fn push(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let value = read16(instr, instr.src, regs, bus)?;
    push_u16(regs, bus, value)?;
    Ok(Effect::Done)
}

/// `POP rr`. `POP AF` drops the low nibble of F.
pub(crate) fn pop(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let target = wide_reg(instr, instr.dst)?;
    let value = pop_u16(regs, bus)?;
    regs.set(target, value);
    Ok(Effect::Done)
}
