//! Sword blade glow
//!
//! The hue sweeps across a preset band and folds back at the middle of the
//! counter. Phase shifts between LEDs make the glow run along the blade.

use fastrand::Rng;

use super::{BrightnessLevel, BrightnessTable, Effect};
use crate::{
    color::Color,
    math8::{map8, map8_to_16, scale_brightness},
};

pub const SWORD_BRIGHTNESS: BrightnessTable = [10, 25, 65, 175];
/// Maximum dimming applied in [`SwordMode::Twinkle`]
pub const SWORD_BRIGHTNESS_DECREASE: BrightnessTable = [9, 18, 60, 130];

const HUE_FOLD: u8 = 128;
const SAT_FOLD: u8 = 150;
const SAT_MIN: u8 = 150;
const SAT_MAX: u8 = 255;

/// Blade color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SwordPreset {
    /// Burning red to orange
    Fire = 0,
    /// Sky blue
    Sky = 1,
}

impl SwordPreset {
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Fire),
            1 => Some(Self::Sky),
            _ => None,
        }
    }

    /// Hue band as `(at counter 0, at the fold)`
    const fn hue_band(self) -> (u16, u16) {
        match self {
            Self::Fire => (1450, 10200),
            Self::Sky => (46400, 25500),
        }
    }
}

/// Lighting mode of [`SwordEffect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SwordMode {
    #[default]
    Default = 0,
    /// Brightness dips proportionally to the counter
    Twinkle = 1,
}

impl SwordMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Default),
            1 => Some(Self::Twinkle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SwordEffect {
    preset: SwordPreset,
    mode: SwordMode,
    level: BrightnessLevel,
    counter: u8,
}

impl SwordEffect {
    pub const fn new(phase: u8, preset: SwordPreset, mode: SwordMode, level: BrightnessLevel) -> Self {
        Self {
            preset,
            mode,
            level,
            counter: phase,
        }
    }

    pub const fn preset(&self) -> SwordPreset {
        self.preset
    }

    pub fn set_preset(&mut self, preset: SwordPreset) {
        self.preset = preset;
    }

    pub const fn mode(&self) -> SwordMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SwordMode) {
        self.mode = mode;
    }

    pub const fn counter(&self) -> u8 {
        self.counter
    }

    fn hue(&self, counter: u8) -> u16 {
        let (start, fold) = self.preset.hue_band();
        if counter < HUE_FOLD {
            map8_to_16(counter, 0, HUE_FOLD, start, fold)
        } else {
            map8_to_16(counter, HUE_FOLD, u8::MAX, fold, start)
        }
    }

    fn sat(counter: u8) -> u8 {
        if counter < SAT_FOLD {
            map8(counter, 0, SAT_FOLD, SAT_MAX, SAT_MIN)
        } else {
            map8(counter, SAT_FOLD, u8::MAX, SAT_MIN, SAT_MAX)
        }
    }
}

impl Effect for SwordEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn update(&mut self, scale: u8, _rng: &mut Rng) -> Color {
        let counter = self.counter;

        let mut val = self.level.pick(&SWORD_BRIGHTNESS);
        if self.mode == SwordMode::Twinkle {
            let decrease = self.level.pick(&SWORD_BRIGHTNESS_DECREASE);
            let dip = (u16::from(counter) * u16::from(decrease) / 256) as u8;
            val = val.saturating_sub(dip);
        }
        let val = scale_brightness(val, scale);

        let hue = self.hue(counter);
        let sat = Self::sat(counter);

        self.counter = self.counter.wrapping_add(1);

        Color::with_force(hue, sat, val, false, false, true)
    }

    fn brightness_level(&self) -> Option<BrightnessLevel> {
        Some(self.level)
    }

    fn set_brightness_level(&mut self, level: u8) {
        self.level.update(level);
    }
}
