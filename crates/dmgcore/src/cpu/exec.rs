pub(super) mod alu;
pub(super) mod cb;
pub(super) mod control;
pub(super) mod incdec;
pub(super) mod ld;
pub(super) mod stack;
pub(super) mod system;

use super::regs::{RegisterId, Registers};
use super::table::{Cond, Instruction, Operand};
use crate::error::{EmuError, Result};
use crate::machine::{Endian, MemoryBus};

/// Signature shared by every instruction handler.
pub type Handler = fn(&Instruction, &mut Registers, &mut MemoryBus) -> Result<Effect>;

/// What a handler asks of the engine beyond its register and memory writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Done,
    /// Taken branch or memory-form CB op: cycles on top of the base cost.
    ExtraCycles(u8),
    DisableInterrupts,
    /// EI: master enable turns on after the next instruction.
    EnableInterrupts,
    /// RETI: master enable turns on immediately.
    EnableInterruptsNow,
    Halt,
    Stop,
}

/// Byte following the opcode.
#[inline]
pub(super) fn imm8(regs: &Registers, bus: &MemoryBus) -> u8 {
    bus.read_byte(regs.pc())
}

/// Little-endian word following the opcode.
#[inline]
pub(super) fn imm16(regs: &Registers, bus: &MemoryBus) -> Result<u16> {
    bus.read_short(regs.pc(), Endian::Little)
}

/// Resolve a memory operand to its address, applying the HL+/HL- side
/// effect.
fn address_of(instr: &Instruction, op: Operand, regs: &mut Registers, bus: &MemoryBus) -> Result<u16> {
    let addr = match op {
        Operand::Mem(r) => regs.get(r),
        Operand::MemInc(r) => {
            let addr = regs.get(r);
            regs.set(r, addr.wrapping_add(1));
            addr
        }
        Operand::MemDec(r) => {
            let addr = regs.get(r);
            regs.set(r, addr.wrapping_sub(1));
            addr
        }
        Operand::MemImm16 => imm16(regs, bus)?,
        Operand::HighImm8 => 0xFF00 | imm8(regs, bus) as u16,
        Operand::HighReg(r) => 0xFF00 | (regs.get(r) & 0x00FF),
        _ => return Err(malformed(instr)),
    };
    Ok(addr)
}

pub(super) fn read8(
    instr: &Instruction,
    op: Operand,
    regs: &mut Registers,
    bus: &MemoryBus,
) -> Result<u8> {
    match op {
        Operand::Reg(r) if !r.is_wide() => Ok(regs.get(r) as u8),
        Operand::Imm8 => Ok(imm8(regs, bus)),
        op if op.is_memory() => Ok(bus.read_byte(address_of(instr, op, regs, bus)?)),
        _ => Err(malformed(instr)),
    }
}

pub(super) fn write8(
    instr: &Instruction,
    op: Operand,
    regs: &mut Registers,
    bus: &mut MemoryBus,
    value: u8,
) -> Result<()> {
    match op {
        Operand::Reg(r) if !r.is_wide() => regs.set(r, value as u16),
        op if op.is_memory() => {
            let addr = address_of(instr, op, regs, bus)?;
            bus.write_byte(addr, value);
        }
        _ => return Err(malformed(instr)),
    }
    Ok(())
}

pub(super) fn read16(
    instr: &Instruction,
    op: Operand,
    regs: &Registers,
    bus: &MemoryBus,
) -> Result<u16> {
    match op {
        Operand::Reg(r) if r.is_wide() => Ok(regs.get(r)),
        Operand::Imm16 => imm16(regs, bus),
        _ => Err(malformed(instr)),
    }
}

/// The wide register an instruction names in `op`.
pub(super) fn wide_reg(instr: &Instruction, op: Operand) -> Result<RegisterId> {
    match op {
        Operand::Reg(r) if r.is_wide() => Ok(r),
        _ => Err(malformed(instr)),
    }
}

/// `Effect` for a conditional branch that was taken.
#[inline]
pub(super) fn taken(instr: &Instruction, extra: u8) -> Effect {
    if instr.cond == Cond::Always {
        Effect::Done
    } else {
        Effect::ExtraCycles(extra)
    }
}

fn malformed(instr: &Instruction) -> EmuError {
    EmuError::MalformedInstruction(instr.mnemonic)
}
