use super::{imm8, read16, read8, Effect};
use crate::cpu::regs::{Flag, Registers};
use crate::cpu::table::Instruction;
use crate::error::Result;
use crate::machine::MemoryBus;

macro_rules! alu8 {
    ($($name:ident => |$regs:ident, $value:ident| $body:expr;)*) => {
        $(
            pub(crate) fn $name(
                instr: &Instruction,
                $regs: &mut Registers,
                bus: &mut MemoryBus,
            ) -> Result<Effect> {
                let $value = read8(instr, instr.src, $regs, bus)?;
                $body;
                Ok(Effect::Done)
            }
        )*
    };
}

alu8! {
    add => |regs, value| regs.alu_add(value, false);
    adc => |regs, value| regs.alu_add(value, true);
    sub => |regs, value| regs.alu_sub(value, false);
    sbc => |regs, value| regs.alu_sub(value, true);
    and => |regs, value| regs.alu_and(value);
    xor => |regs, value| regs.alu_xor(value);
    or => |regs, value| regs.alu_or(value);
    cp => |regs, value| regs.alu_cp(value);
}

pub(crate) fn add_hl(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let value = read16(instr, instr.src, regs, bus)?;
    regs.alu_add16_hl(value);
    Ok(Effect::Done)
}

pub(crate) fn add_sp(_instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let offset = imm8(regs, bus);
    let base = regs.sp();
    let sp = regs.alu_add16_signed(base, offset);
    regs.set_sp(sp);
    Ok(Effect::Done)
}

pub(crate) fn daa(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    regs.alu_daa();
    Ok(Effect::Done)
}

pub(crate) fn cpl(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    regs.set_a(!regs.a());
    regs.set_flag(Flag::N, true);
    regs.set_flag(Flag::H, true);
    Ok(Effect::Done)
}

pub(crate) fn scf(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    regs.set_flag(Flag::N, false);
    regs.set_flag(Flag::H, false);
    regs.set_flag(Flag::C, true);
    Ok(Effect::Done)
}

pub(crate) fn ccf(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    let carry = regs.carry();
    regs.set_flag(Flag::N, false);
    regs.set_flag(Flag::H, false);
    regs.set_flag(Flag::C, !carry);
    Ok(Effect::Done)
}

/// Accumulator rotates share the CB rotate core but always clear Z.
fn rotate_a(regs: &mut Registers, op: u8) -> Result<Effect> {
    let a = regs.a();
    let result = regs.alu_rotate(op, a);
    regs.set_a(result);
    regs.set_flag(Flag::Z, false);
    Ok(Effect::Done)
}

pub(crate) fn rlca(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    rotate_a(regs, 0)
}

pub(crate) fn rrca(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    rotate_a(regs, 1)
}

pub(crate) fn rla(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    rotate_a(regs, 2)
}

pub(crate) fn rra(_instr: &Instruction, regs: &mut Registers, _bus: &mut MemoryBus) -> Result<Effect> {
    rotate_a(regs, 3)
}
