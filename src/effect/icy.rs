//! Icy sparkle: dim white with random flashes of pale blue and rare yellow

use fastrand::Rng;

use super::{BrightnessLevel, BrightnessTable, Effect, twinkle::TwinkleCooldown};
use crate::{color::Color, math8::scale_brightness};

pub const ICY_BRIGHTNESS: BrightnessTable = [3, 10, 20, 30];
pub const ICY_TWINKLE_BRIGHTNESS: BrightnessTable = [40, 65, 165, 255];

/// Hue band from light cyan to blue
const BLUE_HUES: core::ops::Range<u16> = 25500..45500;
/// Saturation draw for blue flashes, values past 255 clamp to full
const BLUE_SATURATIONS: core::ops::Range<u16> = 210..330;
const YELLOW_HUE: u16 = 7650;
const YELLOW_SAT: u8 = 180;
/// Percentage of flashes taken from the blue band
const BLUE_PERCENT: u8 = 95;

/// Lighting mode of [`IcyEffect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum IcyMode {
    /// Flash only while the trigger fires, then ease back to dim white
    #[default]
    Natural = 0,
    /// Each flash latches its color and brightness until the next one
    Digital = 1,
}

impl IcyMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Natural),
            1 => Some(Self::Digital),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IcyEffect {
    mode: IcyMode,
    level: BrightnessLevel,
    twinkle: TwinkleCooldown,
    last_val: u8,
    last_sat: u8,
    last_hue: u16,
}

/// Random value in `[min, max)`, or `min` for an empty range
fn random_between(rng: &mut Rng, min: u8, max: u8) -> u8 {
    if min < max { rng.u8(min..max) } else { min }
}

impl IcyEffect {
    pub fn new(mode: IcyMode, level: BrightnessLevel, rng: &mut Rng) -> Self {
        Self {
            mode,
            level,
            twinkle: TwinkleCooldown::new(rng),
            last_val: level.pick(&ICY_BRIGHTNESS),
            last_sat: 0,
            last_hue: rng.u16(BLUE_HUES),
        }
    }

    pub const fn mode(&self) -> IcyMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: IcyMode) {
        self.mode = mode;
    }

    /// Hue of the most recent flash
    pub const fn last_hue(&self) -> u16 {
        self.last_hue
    }

    /// Draw the color of a new flash
    #[allow(clippy::cast_possible_truncation)]
    fn flash_color(rng: &mut Rng) -> (u16, u8) {
        if rng.u8(0..100) < BLUE_PERCENT {
            let sat = rng.u16(BLUE_SATURATIONS).min(255) as u8;
            (rng.u16(BLUE_HUES), sat)
        } else {
            (YELLOW_HUE, YELLOW_SAT)
        }
    }
}

impl Effect for IcyEffect {
    fn update(&mut self, scale: u8, rng: &mut Rng) -> Color {
        let base = self.level.pick(&ICY_BRIGHTNESS);
        let twinkle = self.level.pick(&ICY_TWINKLE_BRIGHTNESS);
        let (one_in, flash_min, flash_max) = match self.mode {
            IcyMode::Natural => (200, twinkle, twinkle),
            IcyMode::Digital => (50, base, twinkle),
        };

        let mut val = base;
        let mut hue = self.last_hue;
        let mut sat = 0;
        let mut force = false;

        if self.twinkle.poll(rng, one_in) {
            val = random_between(rng, flash_min, flash_max);
            if self.mode == IcyMode::Digital {
                self.last_val = val;
            }
            (hue, sat) = Self::flash_color(rng);
            self.last_hue = hue;
            self.last_sat = sat;
            force = true;
        }

        if self.mode == IcyMode::Digital {
            val = self.last_val;
            sat = self.last_sat;
            force = true;
        }

        let val = scale_brightness(val, scale);
        Color::with_force(hue, sat, val, false, force, force)
    }

    fn brightness_level(&self) -> Option<BrightnessLevel> {
        Some(self.level)
    }

    fn set_brightness_level(&mut self, level: u8) {
        self.level.update(level);
    }
}
