use super::{MemoryBus, REG_LY, REG_STAT};

/// LCD controller mode, numbered as in the low two bits of STAT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PpuMode {
    /// CPU can access VRAM and OAM.
    #[default]
    HBlank = 0,
    /// CPU can access VRAM and OAM.
    VBlank = 1,
    /// OAM is in use.
    OamRead = 2,
    /// OAM and VRAM are in use.
    OamVramRead = 3,
}

/// Step counts driving the mode cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpuTiming {
    /// First V-Blank scanline.
    pub vblank_start: u8,
    /// Last V-Blank scanline; one past it wraps to 0.
    pub last_scanline: u8,
    pub oam_steps: u16,
    pub transfer_steps: u16,
}

impl Default for PpuTiming {
    fn default() -> Self {
        Self {
            vblank_start: 144,
            last_scanline: 153,
            oam_steps: 200,
            transfer_steps: 200,
        }
    }
}

/// Display timing state machine. Produces no pixels; it only tracks the
/// mode and the scanline, and mirrors them into LY and the STAT mode bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ppu {
    timing: PpuTiming,
    mode: PpuMode,
    scanline: u8,
    mode_clock: u16,
}

impl Ppu {
    pub fn new(timing: PpuTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Back to H-Blank on scanline 0.
    pub fn reset(&mut self) {
        self.mode = PpuMode::HBlank;
        self.scanline = 0;
        self.mode_clock = 0;
    }

    #[inline]
    pub fn mode(&self) -> PpuMode {
        self.mode
    }

    #[inline]
    pub fn scanline(&self) -> u8 {
        self.scanline
    }

    #[inline]
    pub fn timing(&self) -> PpuTiming {
        self.timing
    }

    /// Advance the state machine by one CPU step.
    pub fn step(&mut self, bus: &mut MemoryBus) {
        match self.mode {
            PpuMode::HBlank => {
                self.set_scanline(bus, self.scanline.wrapping_add(1));
                if self.in_vblank_range() {
                    self.enter(bus, PpuMode::VBlank);
                }
            }
            PpuMode::VBlank => {
                if self.scanline >= self.timing.last_scanline {
                    self.set_scanline(bus, 0);
                    self.enter(bus, PpuMode::OamRead);
                } else {
                    self.set_scanline(bus, self.scanline + 1);
                }
            }
            PpuMode::OamRead => {
                if self.tick(self.timing.oam_steps) {
                    self.enter(bus, PpuMode::OamVramRead);
                }
            }
            PpuMode::OamVramRead => {
                if self.tick(self.timing.transfer_steps) {
                    self.enter(bus, PpuMode::HBlank);
                }
            }
        }
    }

    fn in_vblank_range(&self) -> bool {
        (self.timing.vblank_start..=self.timing.last_scanline).contains(&self.scanline)
    }

    /// Count one step in the current mode; true once `steps` have elapsed.
    fn tick(&mut self, steps: u16) -> bool {
        self.mode_clock += 1;
        if self.mode_clock >= steps {
            self.mode_clock = 0;
            true
        } else {
            false
        }
    }

    fn set_scanline(&mut self, bus: &mut MemoryBus, line: u8) {
        self.scanline = line;
        bus.write_byte(REG_LY, line);
    }

    fn enter(&mut self, bus: &mut MemoryBus, mode: PpuMode) {
        log::debug!(
            "PPU {:?} -> {:?} at LY={}",
            self.mode,
            mode,
            self.scanline
        );
        self.mode = mode;
        let stat = (bus.read_byte(REG_STAT) & !0x03) | mode as u8;
        bus.write_byte(REG_STAT, stat);
    }
}
