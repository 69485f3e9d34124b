use super::*;
use crate::machine::{Endian, GameBoy, REG_IE, REG_IF};

/// Session with `program` placed at the 0x0100 entry point of a ROM-only
/// cartridge.
fn machine_with_program(program: &[u8]) -> GameBoy {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    let mut gb = GameBoy::default();
    gb.load_cartridge(&rom, 0x00).unwrap();
    gb
}

#[test]
fn power_on_registers() {
    let regs = Registers::new();
    assert_eq!(regs.af(), 0x01B0);
    assert_eq!(regs.bc(), 0x0013);
    assert_eq!(regs.de(), 0x00D8);
    assert_eq!(regs.hl(), 0x014D);
    assert_eq!(regs.sp(), 0xFFFE);
    assert_eq!(regs.pc(), 0x0100);
}

#[test]
fn register_pairs_alias_their_halves() {
    let mut regs = Registers::new();
    regs.set_bc(0x1234);
    assert_eq!(regs.b(), 0x12);
    assert_eq!(regs.c(), 0x34);

    regs.set_h(0xAB);
    regs.set_l(0xCD);
    assert_eq!(regs.hl(), 0xABCD);

    regs.set(RegisterId::DE, 0xBEEF);
    assert_eq!(regs.get(RegisterId::D), 0xBE);
    assert_eq!(regs.get(RegisterId::E), 0xEF);

    regs.set_af(0x9AB0);
    assert_eq!(regs.a(), 0x9A);
    assert_eq!(regs.f(), 0xB0);
    regs.set_a(0x42);
    regs.set_f(0x50);
    assert_eq!(regs.af(), 0x4250);

    for (pair, hi, lo) in [
        (RegisterId::AF, RegisterId::A, RegisterId::F),
        (RegisterId::BC, RegisterId::B, RegisterId::C),
        (RegisterId::DE, RegisterId::D, RegisterId::E),
        (RegisterId::HL, RegisterId::H, RegisterId::L),
    ] {
        regs.set(pair, 0xC3A0);
        assert_eq!(regs.get(hi), 0xC3, "{pair:?}");
        assert_eq!(regs.get(lo), 0xA0, "{pair:?}");

        regs.set(hi, 0x5E);
        regs.set(lo, 0x70);
        assert_eq!(regs.get(pair), 0x5E70, "{pair:?}");
    }
}

#[test]
fn flag_register_low_nibble_is_always_zero() {
    let mut regs = Registers::new();
    regs.set_f(0xFF);
    assert_eq!(regs.f(), 0xF0);

    regs.set_af(0x12FF);
    assert_eq!(regs.af(), 0x12F0);

    regs.set(RegisterId::F, 0x0F);
    assert_eq!(regs.f(), 0x00);
}

#[test]
fn eight_bit_inc_dec_flags() {
    let mut regs = Registers::new();
    regs.set_carry(true);

    regs.set_b(0x0F);
    assert_eq!(regs.inc(RegisterId::B), 0x10);
    assert!(regs.half_carry());
    assert!(!regs.zero());
    assert!(!regs.subtract());
    assert!(regs.carry(), "INC leaves C alone");

    regs.set_b(0xFF);
    assert_eq!(regs.inc(RegisterId::B), 0x00);
    assert!(regs.zero());
    assert!(regs.half_carry());
    assert!(!regs.subtract());
    assert!(regs.carry());

    regs.set_c(0x10);
    assert_eq!(regs.dec(RegisterId::C), 0x0F);
    assert!(regs.half_carry());
    assert!(regs.subtract());

    regs.set_c(0x01);
    assert_eq!(regs.dec(RegisterId::C), 0x00);
    assert!(regs.zero());
    assert!(!regs.half_carry());
    assert!(regs.carry(), "DEC leaves C alone");

    regs.set_carry(false);
    regs.set_d(0x00);
    assert_eq!(regs.dec(RegisterId::D), 0xFF);
    assert!(!regs.zero());
    assert!(regs.subtract());
    assert!(regs.half_carry());
    assert!(!regs.carry(), "DEC leaves C alone");
}

#[test]
fn inc_dec_on_f_keeps_only_the_flag_update() {
    let mut regs = Registers::new();
    regs.set_f(0xB0); // Z and C set

    // 0xB0 + 1: no half carry, non-zero; C is untouched.
    assert_eq!(regs.inc(RegisterId::F), 0x10);
    assert_eq!(regs.f(), 0x10);

    regs.set_f(0x00);
    // 0x00 - 1 borrows from bit 4.
    assert_eq!(regs.dec(RegisterId::F), 0x60);
}

#[test]
fn wide_inc_dec_wrap_without_flags() {
    let mut regs = Registers::new();
    regs.set_f(0x00);
    regs.set_sp(0xFFFF);
    assert_eq!(regs.inc(RegisterId::SP), 0x0000);
    regs.set_bc(0x0000);
    assert_eq!(regs.dec(RegisterId::BC), 0xFFFF);
    assert_eq!(regs.f(), 0x00);
}

#[test]
fn pc_helpers_return_the_old_value() {
    let mut regs = Registers::new();
    assert_eq!(regs.advance_pc(3), 0x0100);
    assert_eq!(regs.pc(), 0x0103);
    assert_eq!(regs.rewind_pc(2), 0x0103);
    assert_eq!(regs.pc(), 0x0101);
}

#[test]
fn unknown_register_code_is_rejected() {
    let mut regs = Registers::new();
    assert_eq!(RegisterId::try_from(9).unwrap(), RegisterId::PC);
    assert_eq!(regs.get_by_index(14), Err(EmuError::UnknownRegister(14)));
    assert_eq!(regs.set_by_index(0xFF, 1), Err(EmuError::UnknownRegister(0xFF)));
    assert_eq!(regs.inc_by_index(1).unwrap(), 0x01);
}

#[test]
fn xor_a_clears_a_and_sets_only_zero() {
    let mut gb = machine_with_program(&[0xAF]); // XOR A
    gb.regs.set_a(0x5A);
    gb.regs.set_f(0x70);

    let cycles = gb.step().unwrap();
    assert_eq!(cycles, 4);
    assert_eq!(gb.regs.a(), 0x00);
    assert_eq!(gb.regs.f(), 0x80, "F=0x{:02X}", gb.regs.f());
    assert_eq!(gb.regs.pc(), 0x0101);
}

#[test]
fn cp_sets_half_and_full_borrow() {
    let mut gb = machine_with_program(&[0xFE, 0x20, 0xFE, 0x05, 0xFE, 0x13]);
    gb.regs.set_a(0x13);

    // CP 0x20: A < operand, low nibbles 3 >= 0
    gb.step().unwrap();
    assert!(gb.regs.carry());
    assert!(!gb.regs.half_carry());
    assert!(gb.regs.subtract());
    assert!(!gb.regs.zero());

    // CP 0x05: low nibble 3 < 5
    gb.step().unwrap();
    assert!(!gb.regs.carry());
    assert!(gb.regs.half_carry());

    // CP 0x13: equal
    gb.step().unwrap();
    assert!(gb.regs.zero());
    assert!(!gb.regs.carry());
    assert_eq!(gb.regs.a(), 0x13, "CP does not modify A");
    assert_eq!(gb.regs.pc(), 0x0106);
}

#[test]
fn cp_one_against_zero_borrows() {
    let mut gb = machine_with_program(&[0xFE, 0x01]); // CP 0x01
    gb.regs.set_a(0x00);
    gb.regs.set_f(0x00);

    gb.step().unwrap();
    assert_eq!(gb.regs.f(), 0x70, "F=0x{:02X}", gb.regs.f());
    assert_eq!(gb.regs.a(), 0x00);
}

#[test]
fn xor_immediate_zero_results() {
    // XOR 0x00 with A=0, then XOR 0xFF with A=0xFF.
    let mut gb = machine_with_program(&[0xEE, 0x00, 0x3E, 0xFF, 0xEE, 0xFF]);
    gb.regs.set_a(0x00);
    gb.regs.set_f(0x70);

    gb.step().unwrap();
    assert_eq!(gb.regs.a(), 0x00);
    assert_eq!(gb.regs.f(), 0x80);

    gb.step().unwrap(); // LD A,0xFF
    gb.step().unwrap();
    assert_eq!(gb.regs.a(), 0x00);
    assert_eq!(gb.regs.f(), 0x80);
    assert_eq!(gb.regs.pc(), 0x0106);
}

#[test]
fn jr_nz_taken_and_not_taken() {
    let mut gb = machine_with_program(&[0x20, 0x05]); // JR NZ,+5
    gb.regs.set_zero(false);
    let cycles = gb.step().unwrap();
    assert_eq!(gb.regs.pc(), 0x0107);
    assert_eq!(cycles, 12);

    let mut gb = machine_with_program(&[0x20, 0x05]);
    gb.regs.set_zero(true);
    let cycles = gb.step().unwrap();
    assert_eq!(gb.regs.pc(), 0x0102, "displacement is consumed");
    assert_eq!(cycles, 8);
}

#[test]
fn jr_backwards_displacement() {
    let mut gb = machine_with_program(&[0x00, 0x18, 0xFD]); // NOP; JR -3
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.regs.pc(), 0x0100);
}

#[test]
fn unmapped_opcode_is_fatal() {
    let mut gb = machine_with_program(&[0x00, 0xD3]);
    gb.step().unwrap();
    assert_eq!(
        gb.step(),
        Err(EmuError::UnmappedOpcode {
            opcode: 0xD3,
            pc: 0x0101
        })
    );
    assert_eq!(gb.regs.pc(), 0x0101);
}

#[test]
fn loads_through_hl_post_increment() {
    let mut gb = machine_with_program(&[
        0x21, 0x00, 0xC0, // LD HL,0xC000
        0x06, 0x42, // LD B,0x42
        0x70, // LD (HL),B
        0x2A, // LD A,(HL+)
        0x32, // LD (HL-),A
    ]);
    gb.run_for(5).unwrap();

    assert_eq!(gb.bus.read_byte(0xC000), 0x42);
    assert_eq!(gb.bus.read_byte(0xE000), 0x42, "echo follows work RAM");
    assert_eq!(gb.bus.read_byte(0xC001), 0x42);
    assert_eq!(gb.regs.a(), 0x42);
    assert_eq!(gb.regs.hl(), 0xC000);
    assert_eq!(gb.regs.pc(), 0x0108);
}

#[test]
fn ldh_and_ld_c_use_the_high_page() {
    let mut gb = machine_with_program(&[
        0xE0, 0x80, // LDH (0x80),A
        0x0E, 0x81, // LD C,0x81
        0xE2, // LD (C),A
        0xF0, 0x80, // LDH A,(0x80)
    ]);
    gb.regs.set_a(0x99);
    gb.run_for(3).unwrap();
    assert_eq!(gb.bus.read_byte(0xFF80), 0x99);
    assert_eq!(gb.bus.read_byte(0xFF81), 0x99);

    gb.regs.set_a(0);
    gb.step().unwrap();
    assert_eq!(gb.regs.a(), 0x99);
}

#[test]
fn call_and_ret_use_the_stack() {
    let mut program = vec![0u8; 0x20];
    program[..3].copy_from_slice(&[0xCD, 0x10, 0x01]); // CALL 0x0110
    program[0x10] = 0xC9; // RET
    let mut gb = machine_with_program(&program);

    assert_eq!(gb.step().unwrap(), 24);
    assert_eq!(gb.regs.pc(), 0x0110);
    assert_eq!(gb.regs.sp(), 0xFFFC);
    assert_eq!(gb.bus.read_short(0xFFFC, Endian::Little).unwrap(), 0x0103);

    assert_eq!(gb.step().unwrap(), 16);
    assert_eq!(gb.regs.pc(), 0x0103);
    assert_eq!(gb.regs.sp(), 0xFFFE);
}

#[test]
fn conditional_call_not_taken_skips_operands() {
    let mut gb = machine_with_program(&[0xC4, 0x00, 0x20]); // CALL NZ,0x2000
    gb.regs.set_zero(true);
    assert_eq!(gb.step().unwrap(), 12);
    assert_eq!(gb.regs.pc(), 0x0103);
    assert_eq!(gb.regs.sp(), 0xFFFE);
}

#[test]
fn rst_pushes_the_return_address() {
    let mut gb = machine_with_program(&[0xFF]); // RST 38H
    gb.step().unwrap();
    assert_eq!(gb.regs.pc(), 0x0038);
    assert_eq!(gb.bus.read_short(gb.regs.sp(), Endian::Little).unwrap(), 0x0101);
}

#[test]
fn pop_af_masks_the_flag_nibble() {
    let mut gb = machine_with_program(&[
        0x01, 0xFF, 0x12, // LD BC,0x12FF
        0xC5, // PUSH BC
        0xF1, // POP AF
    ]);
    gb.run_for(3).unwrap();
    assert_eq!(gb.regs.af(), 0x12F0);
    assert_eq!(gb.regs.sp(), 0xFFFE);
}

#[test]
fn add_hl_sets_half_and_carry() {
    let mut gb = machine_with_program(&[0x09]); // ADD HL,BC
    gb.regs.set_hl(0x8FFF);
    gb.regs.set_bc(0x8001);
    gb.regs.set_zero(true);
    gb.step().unwrap();
    assert_eq!(gb.regs.hl(), 0x1000);
    assert!(gb.regs.half_carry());
    assert!(gb.regs.carry());
    assert!(gb.regs.zero(), "Z is untouched");
}

#[test]
fn cb_prefixed_ops_and_timing() {
    let mut gb = machine_with_program(&[
        0xCB, 0x37, // SWAP A
        0xCB, 0x7E, // BIT 7,(HL)
        0xCB, 0xC6, // SET 0,(HL)
    ]);
    gb.regs.set_a(0xF1);
    gb.regs.set_hl(0xC000);
    gb.bus.write_byte(0xC000, 0x80);

    assert_eq!(gb.step().unwrap(), 8);
    assert_eq!(gb.regs.a(), 0x1F);

    assert_eq!(gb.step().unwrap(), 12);
    assert!(!gb.regs.zero());
    assert!(gb.regs.half_carry());

    assert_eq!(gb.step().unwrap(), 16);
    assert_eq!(gb.bus.read_byte(0xC000), 0x81);
    assert_eq!(gb.regs.pc(), 0x0106);
}

#[test]
fn inc_hl_indirect_updates_memory() {
    let mut gb = machine_with_program(&[0x34]); // INC (HL)
    gb.regs.set_hl(0xC010);
    gb.bus.write_byte(0xC010, 0xFF);
    assert_eq!(gb.step().unwrap(), 12);
    assert_eq!(gb.bus.read_byte(0xC010), 0x00);
    assert!(gb.regs.zero());
    assert!(gb.regs.half_carry());
}

#[test]
fn ld_a16_sp_at_the_last_address_is_out_of_range() {
    let mut gb = machine_with_program(&[0x08, 0xFF, 0xFF]); // LD (0xFFFF),SP
    assert_eq!(
        gb.step(),
        Err(EmuError::AddressOutOfRange {
            addr: 0xFFFF,
            len: 2
        })
    );
}

#[test]
fn di_then_ei_enables_after_one_instruction() {
    let mut gb = machine_with_program(&[0xF3, 0xFB, 0x00, 0x00]); // DI; EI; NOP; NOP
    gb.bus.write_byte(REG_IE, 0x01);
    gb.bus.write_byte(REG_IF, 0x01);

    gb.step().unwrap(); // DI
    assert!(!gb.interrupts.master_enable());
    assert_eq!(gb.bus.read_byte(REG_IF), 0x01);

    gb.step().unwrap(); // EI
    assert!(!gb.interrupts.master_enable());
    assert_eq!(gb.bus.read_byte(REG_IF), 0x01, "not serviced right after EI");

    gb.step().unwrap(); // NOP
    assert!(gb.interrupts.master_enable());
    assert_eq!(gb.bus.read_byte(REG_IF), 0x00);
}

#[test]
fn reti_enables_immediately() {
    let mut gb = machine_with_program(&[0xF3, 0xD9]); // DI; RETI
    gb.regs.set_sp(0xFFF0);
    gb.bus.write_short(0xFFF0, 0x0200, Endian::Little).unwrap();
    gb.run_for(2).unwrap();
    assert!(gb.interrupts.master_enable());
    assert_eq!(gb.regs.pc(), 0x0200);
}

#[test]
fn halt_idles_until_an_enabled_interrupt_is_pending() {
    let mut gb = machine_with_program(&[0x76, 0x00]); // HALT; NOP
    gb.bus.write_byte(REG_IE, 0x04);

    gb.step().unwrap();
    assert!(gb.cpu.halted());
    assert_eq!(gb.step().unwrap(), 4);
    assert_eq!(gb.regs.pc(), 0x0101);

    gb.bus.write_byte(REG_IF, 0x04);
    gb.step().unwrap();
    assert!(!gb.cpu.halted());
    assert_eq!(gb.regs.pc(), 0x0102);
}

#[test]
fn stop_skips_padding_and_waits_for_joypad() {
    let mut gb = machine_with_program(&[0x10, 0x00, 0x00]); // STOP 0; NOP
    gb.step().unwrap();
    assert!(gb.cpu.stopped());
    assert_eq!(gb.regs.pc(), 0x0102);

    gb.bus.write_byte(REG_IF, 0x01);
    gb.step().unwrap();
    assert!(gb.cpu.stopped(), "only the joypad source wakes STOP");

    gb.bus.write_byte(REG_IF, 0x10);
    gb.step().unwrap();
    assert!(!gb.cpu.stopped());
    assert_eq!(gb.regs.pc(), 0x0103);
}

#[test]
fn instruction_count_and_cycle_total() {
    let mut gb = machine_with_program(&[0x00, 0x00, 0xC3, 0x00, 0x01]); // NOP; NOP; JP 0x0100
    let cycles = gb.run_for(3).unwrap();
    assert_eq!(cycles, 4 + 4 + 16);
    assert_eq!(gb.cpu.executed(), 3);
    assert_eq!(gb.regs.pc(), 0x0100);
}
