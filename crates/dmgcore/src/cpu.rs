mod alu;
mod exec;
mod regs;
mod table;

pub use exec::{Effect, Handler};
pub use regs::{Flag, RegisterId, Registers};
pub use table::{Cond, Instruction, Operand, INSTRUCTIONS};

use crate::error::{EmuError, Result};
use crate::machine::{InterruptController, InterruptHooks, Interrupts, MemoryBus};

/// Cost of a step spent halted or stopped.
const IDLE_CYCLES: u32 = 4;

/// Game Boy CPU (LR35902) execution engine.
///
/// Holds only control state; registers and memory belong to the session and
/// are passed in on every step.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    halted: bool,
    /// STOP low-power state, left only once the joypad source is pending.
    stopped: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    trace: bool,
    /// Instructions executed since reset.
    executed: u64,
}

impl Cpu {
    pub fn new(trace: bool) -> Self {
        Self {
            trace,
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.trace);
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn executed(&self) -> u64 {
        self.executed
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Execute one instruction (or one idle step while halted/stopped), then
    /// run the interrupt controller. Returns the T-cycles consumed.
    pub fn step<H: InterruptHooks>(
        &mut self,
        regs: &mut Registers,
        bus: &mut MemoryBus,
        interrupts: &mut InterruptController<H>,
    ) -> Result<u32> {
        let cycles = if self.idle(bus, interrupts) {
            IDLE_CYCLES
        } else {
            self.execute(regs, bus, interrupts)?
        };

        interrupts.step(bus);
        Ok(cycles)
    }

    /// True while halted or stopped with nothing to wake the CPU.
    fn idle<H: InterruptHooks>(
        &mut self,
        bus: &MemoryBus,
        interrupts: &InterruptController<H>,
    ) -> bool {
        if self.stopped {
            if interrupts.pending(bus).contains(Interrupts::JOYPAD) {
                log::debug!("leaving STOP on joypad request");
                self.stopped = false;
            } else {
                return true;
            }
        }
        if self.halted {
            if !interrupts.active(bus).is_empty() {
                log::debug!("leaving HALT");
                self.halted = false;
            } else {
                return true;
            }
        }
        false
    }

    fn execute<H: InterruptHooks>(
        &mut self,
        regs: &mut Registers,
        bus: &mut MemoryBus,
        interrupts: &mut InterruptController<H>,
    ) -> Result<u32> {
        let pc = regs.advance_pc(1);
        let opcode = bus.read_byte(pc);
        let instr = &INSTRUCTIONS[opcode as usize];

        if !instr.implemented {
            // Leave PC on the offending opcode for the register dump.
            regs.rewind_pc(1);
            log::error!("CPU locked up: unmapped opcode 0x{opcode:02X}. {regs}");
            return Err(EmuError::UnmappedOpcode { opcode, pc });
        }

        if self.trace {
            if opcode == 0xCB {
                let sub = bus.read_byte(regs.pc());
                log::trace!("0x{pc:04X}: CB {sub:02X} {}", exec::cb::cb_mnemonic(sub));
            } else {
                log::trace!("0x{pc:04X}: {opcode:02X} {}", instr.mnemonic);
            }
        }

        let effect = match (instr.handler)(instr, regs, bus) {
            Ok(effect) => effect,
            Err(err) => {
                log::error!("{} at 0x{pc:04X} failed: {err}. {regs}", instr.mnemonic);
                return Err(err);
            }
        };
        if !instr.jumps {
            regs.advance_pc(instr.operand_len as u16);
        }
        self.executed += 1;

        let extra = self.apply(effect, interrupts);
        // EI takes effect once the following instruction has completed.
        self.apply_ime_delay(interrupts);

        Ok(instr.cycles as u32 + extra)
    }

    /// Apply a handler's side request; returns extra cycles.
    fn apply<H: InterruptHooks>(
        &mut self,
        effect: Effect,
        interrupts: &mut InterruptController<H>,
    ) -> u32 {
        match effect {
            Effect::Done => 0,
            Effect::ExtraCycles(extra) => extra as u32,
            Effect::DisableInterrupts => {
                interrupts.set_master_enable(false);
                self.ime_enable_pending = false;
                self.ime_enable_delay = false;
                0
            }
            Effect::EnableInterrupts => {
                self.ime_enable_pending = true;
                0
            }
            Effect::EnableInterruptsNow => {
                interrupts.set_master_enable(true);
                0
            }
            Effect::Halt => {
                self.halted = true;
                0
            }
            Effect::Stop => {
                self.stopped = true;
                0
            }
        }
    }

    #[inline]
    fn apply_ime_delay<H: InterruptHooks>(&mut self, interrupts: &mut InterruptController<H>) {
        if self.ime_enable_delay {
            interrupts.set_master_enable(true);
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}

#[cfg(test)]
mod tests;
