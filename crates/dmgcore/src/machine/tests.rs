use super::*;
use crate::config::SessionConfig;
use crate::error::EmuError;

#[test]
fn echo_mirrors_work_ram_both_ways() {
    let mut bus = MemoryBus::default();

    bus.write_byte(0xC123, 0x5A);
    assert_eq!(bus.read_byte(0xE123), 0x5A);

    bus.write_byte(0xE200, 0xA5);
    assert_eq!(bus.read_byte(0xC200), 0xA5);

    bus.write_short(0xC010, 0xBEEF, Endian::Little).unwrap();
    assert_eq!(bus.read_short(0xE010, Endian::Little).unwrap(), 0xBEEF);
}

#[test]
fn echo_stops_at_its_edge() {
    let mut bus = MemoryBus::default();

    // Last mirrored pair.
    bus.write_byte(0xFDFF, 0x11);
    assert_eq!(bus.read_byte(0xDDFF), 0x11);

    // Work RAM past 0xDDFF has no echo; 0xFE00 is OAM.
    bus.write_byte(0xDE00, 0x22);
    assert_eq!(bus.read_byte(0xFE00), 0x00);
    bus.write_byte(0xFE00, 0x33);
    assert_eq!(bus.read_byte(0xDE00), 0x22);

    // A word straddling the edge mirrors only the byte inside it.
    bus.write_short(0xDDFF, 0x4455, Endian::Little).unwrap();
    assert_eq!(bus.read_byte(0xFDFF), 0x55);
    assert_eq!(bus.read_byte(0xFE00), 0x33);
}

#[test]
fn short_accesses_honour_byte_order() {
    let mut bus = MemoryBus::default();
    bus.write_short(0xC000, 0x1234, Endian::Little).unwrap();
    assert_eq!(bus.read_byte(0xC000), 0x34);
    assert_eq!(bus.read_byte(0xC001), 0x12);
    assert_eq!(bus.read_short(0xC000, Endian::Big).unwrap(), 0x3412);

    bus.write_short(0xC002, 0x1234, Endian::Big).unwrap();
    assert_eq!(bus.read_byte(0xC002), 0x12);
}

#[test]
fn accesses_past_the_end_are_rejected() {
    let mut bus = MemoryBus::default();
    let err = EmuError::AddressOutOfRange {
        addr: 0xFFFF,
        len: 2,
    };
    assert_eq!(bus.read_short(0xFFFF, Endian::Little), Err(err.clone()));
    assert_eq!(bus.write_short(0xFFFF, 0, Endian::Little), Err(err));
    assert!(bus.read_short(0xFFFE, Endian::Little).is_ok());

    assert!(MemoryBus::check_range(0xFFFF, 1).is_ok());
    assert_eq!(
        MemoryBus::check_range(0x10000, 1),
        Err(EmuError::AddressOutOfRange {
            addr: 0x10000,
            len: 1
        })
    );
    assert!(MemoryBus::check_range(usize::MAX, 2).is_err());
    assert!(bus.dump(0xFFF8, 16).is_err());
}

#[test]
fn power_on_io_values() {
    let bus = MemoryBus::new(Model::Dmg);
    assert_eq!(bus.read_byte(0xFF40), 0x91);
    assert_eq!(bus.read_byte(0xFF47), 0xFC);
    assert_eq!(bus.read_byte(REG_NR52), 0xF1);
    assert_eq!(bus.read_byte(REG_IE), 0x00);
    assert_eq!(bus.read_byte(REG_LY), 0x00);

    let sgb = MemoryBus::new(Model::Sgb);
    assert_eq!(sgb.read_byte(REG_NR52), 0xF0);
}

#[test]
fn cartridge_is_mapped_and_read_only() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100] = 0x3C;
    rom[0x4000] = 0x77;
    let mut bus = MemoryBus::default();
    bus.load_cartridge(&rom, 0x00).unwrap();

    assert_eq!(bus.read_byte(0x0100), 0x3C);
    assert_eq!(bus.read_byte(0x4000), 0x77);

    bus.write_byte(0x0100, 0xFF);
    bus.write_byte(0x2000, 0x01);
    assert_eq!(bus.read_byte(0x0100), 0x3C);
    assert_eq!(bus.read_byte(0x2000), 0x00);
    assert_eq!(bus.cartridge().map(|c| c.description()), Some("ROM ONLY"));
}

#[test]
fn shorter_cartridge_replaces_the_whole_rom_window() {
    let mut bus = MemoryBus::default();
    bus.load_cartridge(&[0x11; 0x8000], 0x00).unwrap();
    bus.load_cartridge(&[0x22; 0x4000], 0x00).unwrap();

    assert_eq!(bus.read_byte(0x0000), 0x22);
    assert_eq!(bus.read_byte(0x3FFF), 0x22);
    assert_eq!(bus.read_byte(0x4000), 0x00);
    assert_eq!(bus.read_byte(0x7FFF), 0x00);
}

#[test]
fn unsupported_cartridge_leaves_the_bus_alone() {
    let mut bus = MemoryBus::default();
    assert_eq!(
        bus.load_cartridge(&[0xAA; 0x200], 0x42),
        Err(EmuError::UnsupportedCartridge(0x42))
    );
    assert!(bus.cartridge().is_none());
    assert_eq!(bus.read_byte(0x0000), 0x00);
}

#[test]
fn reset_clears_ram_and_remaps_the_cartridge() {
    let mut bus = MemoryBus::default();
    bus.load_cartridge(&[0xC3, 0x50, 0x01], 0x00).unwrap();
    bus.write_byte(0xC000, 0x12);
    bus.write_byte(0xFF40, 0x00);

    bus.reset();
    assert_eq!(bus.read_byte(0xC000), 0x00);
    assert_eq!(bus.read_byte(0xE000), 0x00);
    assert_eq!(bus.read_byte(0xFF40), 0x91);
    assert_eq!(bus.read_byte(0x0000), 0xC3);
}

#[test]
fn dump_formats_sixteen_bytes_per_row() {
    let mut bus = MemoryBus::default();
    for i in 0..18u16 {
        bus.write_byte(0xC000 + i, i as u8);
    }
    let dump = bus.dump(0xC000, 18).unwrap();
    let mut lines = dump.lines();
    assert_eq!(
        lines.next(),
        Some("C000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F")
    );
    assert_eq!(lines.next(), Some("C010: 10 11"));
    assert_eq!(lines.next(), None);
}

#[test]
fn regions_cover_the_map() {
    assert_eq!(MemoryRegion::containing(0x0000), MemoryRegion::RomBank0);
    assert_eq!(MemoryRegion::containing(0x7FFF), MemoryRegion::SwitchRomBank);
    assert_eq!(MemoryRegion::containing(0x9FFF), MemoryRegion::VideoRam);
    assert_eq!(MemoryRegion::containing(0xE000), MemoryRegion::EchoRam);
    assert_eq!(MemoryRegion::containing(0xFDFF), MemoryRegion::EchoRam);
    assert_eq!(MemoryRegion::containing(0xFE9F), MemoryRegion::Oam);
    assert_eq!(MemoryRegion::containing(0xFF4B), MemoryRegion::IoPorts);
    assert_eq!(MemoryRegion::containing(0xFF4C), MemoryRegion::UnusableIo);
    assert_eq!(MemoryRegion::containing(0xFFFE), MemoryRegion::HighRam);
    assert_eq!(MemoryRegion::containing(0xFFFF), MemoryRegion::InterruptEnable);
}

/// Records the order hooks ran in and the IF value each one observed.
#[derive(Default)]
struct Recorder {
    seen: Vec<(InterruptSource, u8)>,
}

impl InterruptHooks for Recorder {
    fn vblank(&mut self, bus: &mut MemoryBus) {
        self.seen.push((InterruptSource::VBlank, bus.read_byte(REG_IF)));
    }

    fn timer(&mut self, bus: &mut MemoryBus) {
        self.seen.push((InterruptSource::Timer, bus.read_byte(REG_IF)));
    }

    fn joypad(&mut self, bus: &mut MemoryBus) {
        self.seen.push((InterruptSource::Joypad, bus.read_byte(REG_IF)));
    }
}

#[test]
fn interrupts_are_serviced_in_priority_order() {
    let mut bus = MemoryBus::default();
    let mut ic = InterruptController::new(Recorder::default());
    bus.write_byte(REG_IE, 0x05);
    bus.write_byte(REG_IF, 0x05);

    let serviced = ic.step(&mut bus);
    assert_eq!(serviced, Interrupts::VBLANK | Interrupts::TIMER);
    assert_eq!(
        ic.hooks().seen,
        vec![(InterruptSource::VBlank, 0x04), (InterruptSource::Timer, 0x00)]
    );
    assert_eq!(bus.read_byte(REG_IF), 0x00);
}

#[test]
fn disabled_sources_stay_pending() {
    let mut bus = MemoryBus::default();
    let mut ic = InterruptController::new(Recorder::default());
    bus.write_byte(REG_IE, 0x10);
    bus.write_byte(REG_IF, 0x13);

    ic.step(&mut bus);
    assert_eq!(ic.hooks().seen, vec![(InterruptSource::Joypad, 0x03)]);
    assert_eq!(bus.read_byte(REG_IF), 0x03);
}

#[test]
fn master_enable_gates_servicing() {
    let mut bus = MemoryBus::default();
    let mut ic = InterruptController::new(Recorder::default());
    ic.set_master_enable(false);
    bus.write_byte(REG_IE, 0x1F);
    ic.request(&mut bus, InterruptSource::Serial);

    assert!(ic.step(&mut bus).is_empty());
    assert!(ic.hooks().seen.is_empty());
    assert_eq!(bus.read_byte(REG_IF), 0x08);
    assert_eq!(ic.active(&bus), Interrupts::SERIAL);
}

#[test]
fn interrupt_vectors() {
    assert_eq!(InterruptSource::VBlank.vector(), 0x0040);
    assert_eq!(InterruptSource::Joypad.vector(), 0x0060);
}

#[test]
fn ppu_runs_the_full_mode_cycle() {
    let mut bus = MemoryBus::default();
    let mut ppu = Ppu::new(PpuTiming::default());

    for _ in 0..143 {
        ppu.step(&mut bus);
    }
    assert_eq!(ppu.mode(), PpuMode::HBlank);
    assert_eq!(bus.read_byte(REG_LY), 143);

    ppu.step(&mut bus);
    assert_eq!(ppu.mode(), PpuMode::VBlank);
    assert_eq!(ppu.scanline(), 144);
    assert_eq!(bus.read_byte(REG_STAT) & 0x03, 1);

    for _ in 0..9 {
        ppu.step(&mut bus);
    }
    assert_eq!(ppu.mode(), PpuMode::VBlank);
    assert_eq!(bus.read_byte(REG_LY), 153);

    ppu.step(&mut bus);
    assert_eq!(ppu.mode(), PpuMode::OamRead);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(bus.read_byte(REG_LY), 0);

    for _ in 0..199 {
        ppu.step(&mut bus);
    }
    assert_eq!(ppu.mode(), PpuMode::OamRead);
    ppu.step(&mut bus);
    assert_eq!(ppu.mode(), PpuMode::OamVramRead);
    assert_eq!(bus.read_byte(REG_STAT) & 0x03, 3);

    for _ in 0..200 {
        ppu.step(&mut bus);
    }
    assert_eq!(ppu.mode(), PpuMode::HBlank);
    assert_eq!(bus.read_byte(REG_LY), 0);

    ppu.step(&mut bus);
    assert_eq!(bus.read_byte(REG_LY), 1);
}

#[test]
fn ppu_timing_is_configurable() {
    let timing = PpuTiming {
        vblank_start: 2,
        last_scanline: 3,
        oam_steps: 1,
        transfer_steps: 1,
    };
    let mut bus = MemoryBus::default();
    let mut ppu = Ppu::new(timing);

    let modes: Vec<PpuMode> = (0..6)
        .map(|_| {
            ppu.step(&mut bus);
            ppu.mode()
        })
        .collect();
    assert_eq!(
        modes,
        vec![
            PpuMode::HBlank,
            PpuMode::VBlank,
            PpuMode::VBlank,
            PpuMode::OamRead,
            PpuMode::OamVramRead,
            PpuMode::HBlank,
        ]
    );
}

#[test]
fn session_steps_cpu_then_ppu() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0147] = 0x00;
    let mut gb = GameBoy::new(SessionConfig::default());
    gb.load_rom(&rom).unwrap();

    // All NOPs.
    assert_eq!(gb.run_for(10).unwrap(), 40);
    assert_eq!(gb.regs.pc(), 0x010A);
    assert_eq!(gb.ppu.scanline(), 10);
    assert_eq!(gb.bus.read_byte(REG_LY), 10);
    assert_eq!(gb.cycles(), 40);

    gb.reset();
    assert_eq!(gb.regs.pc(), 0x0100);
    assert_eq!(gb.ppu.scanline(), 0);
    assert_eq!(gb.cycles(), 0);
    assert!(gb.bus.cartridge().is_some());
}

#[test]
fn load_rom_validates_the_header() {
    let mut gb = GameBoy::default();
    assert_eq!(gb.load_rom(&[0u8; 0x100]), Err(EmuError::EmptyRom));

    let mut rom = vec![0u8; 0x8000];
    rom[0x0147] = 0x20;
    assert_eq!(gb.load_rom(&rom), Err(EmuError::UnsupportedCartridge(0x20)));

    rom[0x0147] = 0x01;
    gb.load_rom(&rom).unwrap();
    assert!(gb
        .bus
        .cartridge()
        .is_some_and(|cart| cart.capabilities().contains(Capabilities::MBC1)));
}

#[test]
fn model_drives_the_power_on_state() {
    let config = SessionConfig::builder().model(Model::Sgb).build();
    let mut gb = GameBoy::new(config);
    assert_eq!(gb.bus.read_byte(REG_NR52), 0xF0);
    gb.reset();
    assert_eq!(gb.bus.read_byte(REG_NR52), 0xF0);
}
