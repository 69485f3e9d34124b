use super::{imm8, read8, write8, Effect};
use crate::cpu::regs::{Flag, RegisterId, Registers};
use crate::cpu::table::{Instruction, Operand};
use crate::error::Result;
use crate::machine::MemoryBus;

/// CB operand encoding: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
const TARGETS: [Operand; 8] = [
    Operand::Reg(RegisterId::B),
    Operand::Reg(RegisterId::C),
    Operand::Reg(RegisterId::D),
    Operand::Reg(RegisterId::E),
    Operand::Reg(RegisterId::H),
    Operand::Reg(RegisterId::L),
    Operand::Mem(RegisterId::HL),
    Operand::Reg(RegisterId::A),
];

/// Mnemonic of a CB-prefixed sub-opcode, for traces.
pub(crate) fn cb_mnemonic(cb: u8) -> String {
    const SHIFTS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
    const NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
    let y = (cb >> 3) & 0x07;
    let target = NAMES[(cb & 0x07) as usize];
    match cb >> 6 {
        0 => format!("{} {target}", SHIFTS[y as usize]),
        1 => format!("BIT {y},{target}"),
        2 => format!("RES {y},{target}"),
        _ => format!("SET {y},{target}"),
    }
}

/// `PREFIX CB`: decode the sub-opcode in the operand byte.
///
/// The descriptor's cost covers the register forms (8 cycles); `(HL)` forms
/// report the difference.
pub(crate) fn prefix_cb(instr: &Instruction, regs: &mut Registers, bus: &mut MemoryBus) -> Result<Effect> {
    let cb = imm8(regs, bus);
    let x = cb >> 6;
    let y = (cb >> 3) & 0x07;
    let target = TARGETS[(cb & 0x07) as usize];
    let value = read8(instr, target, regs, bus)?;

    let result = match x {
        0 => Some(regs.alu_rotate(y, value)),
        1 => {
            // BIT b,r: Z from the bit, N=0, H=1, C preserved.
            regs.set_flag(Flag::Z, value & (1 << y) == 0);
            regs.set_flag(Flag::N, false);
            regs.set_flag(Flag::H, true);
            None
        }
        2 => Some(value & !(1 << y)),
        _ => Some(value | (1 << y)),
    };

    if let Some(result) = result {
        write8(instr, target, regs, bus, result)?;
    }

    Ok(match (target.is_memory(), result.is_some()) {
        (false, _) => Effect::Done,
        (true, false) => Effect::ExtraCycles(4),
        (true, true) => Effect::ExtraCycles(8),
    })
}
