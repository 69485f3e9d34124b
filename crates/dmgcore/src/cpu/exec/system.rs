use super::Effect;
use crate::cpu::regs::Registers;
use crate::cpu::table::Instruction;
use crate::error::Result;
use crate::machine::MemoryBus;

pub(crate) fn nop(_instr: &Instruction, _regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    Ok(Effect::Done)
}

/// Placeholder for the opcode holes. The engine refuses to dispatch to
/// descriptors marked unimplemented, so reaching this is a no-op.
pub(crate) fn unknown(
    _instr: &Instruction,
    _regs: &mut Registers,
    _bus: &mut MemoryBus,
) -> Result<Effect> {
    Ok(Effect::Done)
}

pub(crate) fn halt(_instr: &Instruction, _regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    Ok(Effect::Halt)
}

/// STOP carries one padding byte, skipped like any operand.
pub(crate) fn stop(_instr: &Instruction, _regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    Ok(Effect::Stop)
}

pub(crate) fn di(_instr: &Instruction, _regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    Ok(Effect::DisableInterrupts)
}

pub(crate) fn ei(_instr: &Instruction, _regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    Ok(Effect::EnableInterrupts)
}
