use super::stack::{pop_u16, push_u16};
use super::{imm16, imm8, read16, taken, Effect};
use crate::cpu::regs::Registers;
use crate::cpu::table::{Instruction, Operand};
use crate::error::{EmuError, Result};
use crate::machine::MemoryBus;

// PC points at the first operand byte when these run; each handler leaves
// PC wherever execution continues.

/// `JR [cc,]r8`: the displacement is always consumed and is relative to the
/// following instruction.
pub(crate) fn jr(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let offset = imm8(regs, bus) as i8;
    let next = regs.pc().wrapping_add(1);
    if instr.cond.holds(regs) {
        regs.set_pc(next.wrapping_add(offset as u16));
        Ok(taken(instr, 4))
    } else {
        regs.set_pc(next);
        Ok(Effect::Done)
    }
}

pub(crate) fn jp(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let target = imm16(regs, bus)?;
    if instr.cond.holds(regs) {
        regs.set_pc(target);
        Ok(taken(instr, 4))
    } else {
        regs.advance_pc(2);
        Ok(Effect::Done)
    }
}

pub(crate) fn jp_hl(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let target = read16(instr, instr.src, regs, bus)?;
    regs.set_pc(target);
    Ok(Effect::Done)
}

pub(crate) fn call(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let target = imm16(regs, bus)?;
    let ret = regs.pc().wrapping_add(2);
    if instr.cond.holds(regs) {
        push_u16(regs, bus, ret)?;
        regs.set_pc(target);
        Ok(taken(instr, 12))
    } else {
        regs.set_pc(ret);
        Ok(Effect::Done)
    }
}

/// `RET [cc]`. Not taken leaves PC on the next opcode already.
pub(crate) fn ret(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    if instr.cond.holds(regs) {
        let target = pop_u16(regs, bus)?;
        regs.set_pc(target);
        Ok(taken(instr, 12))
    } else {
        Ok(Effect::Done)
    }
}

pub(crate) fn reti(_instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let target = pop_u16(regs, bus)?;
    regs.set_pc(target);
    Ok(Effect::EnableInterruptsNow)
}

pub(crate) fn rst(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let Operand::Vector(vector) = instr.src else {
        return Err(EmuError::MalformedInstruction(instr.mnemonic));
    };
    let ret = regs.pc();
    push_u16(regs, bus, ret)?;
    regs.set_pc(vector as u16);
    Ok(Effect::Done)
}
