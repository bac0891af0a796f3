//! Slow rainbow cycling
//!
//! Give neighbouring LEDs different phase shifts to spread the wheel across
//! the badge.

use fastrand::Rng;

use super::{BrightnessLevel, BrightnessTable, Effect, twinkle::TwinkleCooldown};
use crate::{
    color::Color,
    math8::{degrees_to_hue, scale_brightness, wrap_phase},
};

pub const RAINBOW_BRIGHTNESS: BrightnessTable = [10, 25, 65, 175];
pub const RAINBOW_TWINKLE_BRIGHTNESS: BrightnessTable = [40, 65, 155, 255];
pub const RAINBOW_FORCED_BRIGHTNESS: BrightnessTable = [65, 155, 255, 255];

/// Default hue advance per frame, in degrees
pub const DEFAULT_RAINBOW_STEP: f32 = 1.2;

const TWINKLE_ONE_IN: u8 = 250;
const DIGITAL_STEP_DEGREES: f32 = 32.0;

/// Lighting mode of [`RainbowEffect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RainbowMode {
    /// Smooth hue with random twinkles
    NaturalTwinkle = 0,
    /// Hue stepped in 32 degree increments, with random twinkles
    Digital = 1,
    /// Smooth hue, no twinkles
    #[default]
    Natural = 2,
    /// Constant bright flash with the hue held, driven externally (e.g. MIDI)
    ForceTwinkle = 3,
}

impl RainbowMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::NaturalTwinkle,
            1 => Self::Digital,
            2 => Self::Natural,
            3 => Self::ForceTwinkle,
            _ => return None,
        })
    }

    const fn twinkles(self) -> bool {
        matches!(self, Self::NaturalTwinkle | Self::Digital)
    }
}

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    mode: RainbowMode,
    level: BrightnessLevel,
    twinkle: TwinkleCooldown,
    /// Position on the color wheel in degrees, `[0, 360)`
    counter: f32,
    /// Degrees advanced per frame
    step: f32,
}

impl RainbowEffect {
    pub fn new(
        phase: f32,
        step: f32,
        mode: RainbowMode,
        level: BrightnessLevel,
        rng: &mut Rng,
    ) -> Self {
        Self {
            mode,
            level,
            twinkle: TwinkleCooldown::new(rng),
            counter: wrap_phase(phase, 360.0),
            step,
        }
    }

    pub const fn mode(&self) -> RainbowMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RainbowMode) {
        self.mode = mode;
    }

    pub const fn step(&self) -> f32 {
        self.step
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Current wheel position in degrees
    pub const fn counter(&self) -> f32 {
        self.counter
    }

    /// Frames left before a twinkle may fire again
    pub const fn twinkle_cooldown(&self) -> u8 {
        self.twinkle.remaining()
    }

    fn degrees(&self) -> f32 {
        match self.mode {
            RainbowMode::Digital => {
                libm::floorf(self.counter / DIGITAL_STEP_DEGREES) * DIGITAL_STEP_DEGREES
            }
            RainbowMode::NaturalTwinkle | RainbowMode::Natural | RainbowMode::ForceTwinkle => {
                self.counter
            }
        }
    }
}

impl Effect for RainbowEffect {
    fn update(&mut self, scale: u8, rng: &mut Rng) -> Color {
        let mut val = self.level.pick(&RAINBOW_BRIGHTNESS);
        let mut force_val = false;

        if self.mode.twinkles() && self.twinkle.poll(rng, TWINKLE_ONE_IN) {
            val = self.level.pick(&RAINBOW_TWINKLE_BRIGHTNESS);
            force_val = true;
        }
        if self.mode == RainbowMode::ForceTwinkle {
            val = self.level.pick(&RAINBOW_FORCED_BRIGHTNESS);
            force_val = true;
        }
        let val = scale_brightness(val, scale);

        let hue = degrees_to_hue(self.degrees());

        if self.mode != RainbowMode::ForceTwinkle {
            self.counter = wrap_phase(self.counter + self.step, 360.0);
        }

        Color::with_force(hue, 255, val, false, false, force_val)
    }

    fn brightness_level(&self) -> Option<BrightnessLevel> {
        Some(self.level)
    }

    fn set_brightness_level(&mut self, level: u8) {
        self.level.update(level);
    }
}
