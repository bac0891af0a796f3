//! Fast full-saturation hue sweep

use fastrand::Rng;

use super::{BrightnessLevel, BrightnessTable, Effect};
use crate::{color::Color, math8::scale_brightness};

/// One step brighter than the other table-driven effects
pub const GAMING_BRIGHTNESS: BrightnessTable = [25, 65, 175, 250];

/// Default counter increment per frame
pub const DEFAULT_GAMING_STEP: u8 = 6;

/// Hue sweep driven by an 8-bit counter
///
/// The counter overflows into the next lap, so one lap covers the full
/// color wheel.
#[derive(Debug, Clone)]
pub struct GamingEffect {
    level: BrightnessLevel,
    counter: u8,
    step: u8,
}

impl GamingEffect {
    pub const fn new(phase: u8, step: u8, level: BrightnessLevel) -> Self {
        Self {
            level,
            counter: phase,
            step,
        }
    }

    pub const fn step(&self) -> u8 {
        self.step
    }

    pub fn set_step(&mut self, step: u8) {
        self.step = step;
    }

    pub const fn counter(&self) -> u8 {
        self.counter
    }
}

impl Effect for GamingEffect {
    fn update(&mut self, scale: u8, _rng: &mut Rng) -> Color {
        let val = scale_brightness(self.level.pick(&GAMING_BRIGHTNESS), scale);
        let hue = u16::from(self.counter) * 256;
        self.counter = self.counter.wrapping_add(self.step);

        Color::new(hue, 255, val)
    }

    fn brightness_level(&self) -> Option<BrightnessLevel> {
        Some(self.level)
    }

    fn set_brightness_level(&mut self, level: u8) {
        self.level.update(level);
    }
}
