//! Shared phase clocks
//!
//! Free-running counters advanced once per frame. Callers read them when
//! installing an effect so that LEDs started at different times still run
//! in step with each other.

use crate::math8::wrap_phase;

/// Rainbow clock increment per frame, in degrees
pub const RAINBOW_CLOCK_STEP: f32 = 1.2;
/// Gaming clock increment per frame
pub const GAMING_CLOCK_STEP: u8 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseClocks {
    general: u8,
    rainbow: f32,
    gaming: u8,
}

impl PhaseClocks {
    pub const fn new() -> Self {
        Self {
            general: 0,
            rainbow: 0.0,
            gaming: 0,
        }
    }

    /// 8-bit clock for breath and sword phases
    pub const fn general(&self) -> u8 {
        self.general
    }

    /// Degrees in `[0, 360)`
    pub const fn rainbow(&self) -> f32 {
        self.rainbow
    }

    pub const fn gaming(&self) -> u8 {
        self.gaming
    }

    pub fn advance(&mut self) {
        self.general = self.general.wrapping_add(1);
        self.rainbow = wrap_phase(self.rainbow + RAINBOW_CLOCK_STEP, 360.0);
        self.gaming = self.gaming.wrapping_add(GAMING_CLOCK_STEP);
    }
}
