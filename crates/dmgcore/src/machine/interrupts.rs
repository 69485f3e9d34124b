use bitflags::bitflags;

use super::{MemoryBus, REG_IE, REG_IF};

bitflags! {
    /// Interrupt source bits as laid out in IE (0xFFFF) and IF (0xFF0F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Interrupts: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptSource {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptSource {
    /// Service order, highest priority first.
    pub const PRIORITY: [InterruptSource; 5] = [
        InterruptSource::VBlank,
        InterruptSource::LcdStat,
        InterruptSource::Timer,
        InterruptSource::Serial,
        InterruptSource::Joypad,
    ];

    #[inline]
    pub fn mask(self) -> Interrupts {
        match self {
            InterruptSource::VBlank => Interrupts::VBLANK,
            InterruptSource::LcdStat => Interrupts::LCD_STAT,
            InterruptSource::Timer => Interrupts::TIMER,
            InterruptSource::Serial => Interrupts::SERIAL,
            InterruptSource::Joypad => Interrupts::JOYPAD,
        }
    }

    /// Address of the RST-style vector the hardware jumps to for this source.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }
}

/// Behaviour attached to each interrupt source.
///
/// Every hook defaults to doing nothing. The pending bit has already been
/// cleared when a hook runs.
pub trait InterruptHooks {
    fn vblank(&mut self, _bus: &mut MemoryBus) {}
    fn lcd_stat(&mut self, _bus: &mut MemoryBus) {}
    fn timer(&mut self, _bus: &mut MemoryBus) {}
    fn serial(&mut self, _bus: &mut MemoryBus) {}
    fn joypad(&mut self, _bus: &mut MemoryBus) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl InterruptHooks for NoHooks {}

/// Master interrupt enable plus the dispatcher over IE & IF.
#[derive(Debug)]
pub struct InterruptController<H = NoHooks> {
    master_enable: bool,
    hooks: H,
}

impl Default for InterruptController<NoHooks> {
    fn default() -> Self {
        Self::new(NoHooks)
    }
}

impl<H: InterruptHooks> InterruptController<H> {
    pub fn new(hooks: H) -> Self {
        Self {
            master_enable: true,
            hooks,
        }
    }

    pub fn reset(&mut self) {
        self.master_enable = true;
    }

    #[inline]
    pub fn master_enable(&self) -> bool {
        self.master_enable
    }

    #[inline]
    pub fn set_master_enable(&mut self, enabled: bool) {
        self.master_enable = enabled;
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn enabled(&self, bus: &MemoryBus) -> Interrupts {
        Interrupts::from_bits_truncate(bus.read_byte(REG_IE))
    }

    pub fn pending(&self, bus: &MemoryBus) -> Interrupts {
        Interrupts::from_bits_truncate(bus.read_byte(REG_IF))
    }

    /// Sources that are both enabled and pending, regardless of the master
    /// enable flag.
    pub fn active(&self, bus: &MemoryBus) -> Interrupts {
        self.enabled(bus) & self.pending(bus)
    }

    /// Raise `source` in IF.
    pub fn request(&self, bus: &mut MemoryBus, source: InterruptSource) {
        let pending = bus.read_byte(REG_IF) | source.mask().bits();
        bus.write_byte(REG_IF, pending);
    }

    /// Service every active source in priority order and return the set
    /// that was serviced.
    ///
    /// Each bit is cleared from the current IF value before its hook runs,
    /// so the clears accumulate and IF ends up holding only the bits that
    /// were not serviced.
    pub fn step(&mut self, bus: &mut MemoryBus) -> Interrupts {
        if !self.master_enable {
            return Interrupts::empty();
        }

        let active = self.active(bus);
        if active.is_empty() {
            return active;
        }

        for source in InterruptSource::PRIORITY {
            if !active.contains(source.mask()) {
                continue;
            }
            let pending = bus.read_byte(REG_IF) & !source.mask().bits();
            bus.write_byte(REG_IF, pending);
            log::debug!(
                "servicing {source:?} interrupt (IF=0x{pending:02X}, IE=0x{:02X})",
                bus.read_byte(REG_IE)
            );
            self.dispatch(source, bus);
        }
        active
    }

    fn dispatch(&mut self, source: InterruptSource, bus: &mut MemoryBus) {
        match source {
            InterruptSource::VBlank => self.hooks.vblank(bus),
            InterruptSource::LcdStat => self.hooks.lcd_stat(bus),
            InterruptSource::Timer => self.hooks.timer(bus),
            InterruptSource::Serial => self.hooks.serial(bus),
            InterruptSource::Joypad => self.hooks.joypad(bus),
        }
    }
}
