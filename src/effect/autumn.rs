//! Autumn leaves: hue swings between red and green and back

use fastrand::Rng;

use super::{BrightnessLevel, BrightnessTable, Effect, twinkle::TwinkleCooldown};
use crate::{
    color::Color,
    math8::{degrees_to_hue, scale_brightness, wrap_phase},
};

pub const AUTUMN_BRIGHTNESS: BrightnessTable = [10, 25, 65, 175];
pub const AUTUMN_TWINKLE_BRIGHTNESS: BrightnessTable = [40, 65, 155, 255];

pub const DEFAULT_AUTUMN_STEP: f32 = 1.0;

const TWINKLE_ONE_IN: u8 = 250;
const HALF_SPAN: f32 = 120.0;

/// Hue oscillating over `[0, 120]` degrees
///
/// The counter runs through `[-120, 120)`; its absolute value is the hue, so
/// each lap sweeps up and back down without a jump.
#[derive(Debug, Clone)]
pub struct AutumnEffect {
    level: BrightnessLevel,
    twinkle: TwinkleCooldown,
    counter: f32,
    step: f32,
}

impl AutumnEffect {
    pub fn new(phase: f32, step: f32, level: BrightnessLevel, rng: &mut Rng) -> Self {
        Self {
            level,
            twinkle: TwinkleCooldown::new(rng),
            counter: fold(phase),
            step,
        }
    }

    pub const fn step(&self) -> f32 {
        self.step
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Current counter in `[-120, 120)`
    pub const fn counter(&self) -> f32 {
        self.counter
    }
}

/// Wrap into `[-120, 120)`
fn fold(value: f32) -> f32 {
    wrap_phase(value + HALF_SPAN, 2.0 * HALF_SPAN) - HALF_SPAN
}

impl Effect for AutumnEffect {
    fn update(&mut self, scale: u8, rng: &mut Rng) -> Color {
        let mut val = self.level.pick(&AUTUMN_BRIGHTNESS);
        let mut force_val = false;
        if self.twinkle.poll(rng, TWINKLE_ONE_IN) {
            val = self.level.pick(&AUTUMN_TWINKLE_BRIGHTNESS);
            force_val = true;
        }
        let val = scale_brightness(val, scale);

        let hue = degrees_to_hue(libm::fabsf(self.counter));
        self.counter = fold(self.counter + self.step);

        Color::with_force(hue, 255, val, false, false, force_val)
    }

    fn brightness_level(&self) -> Option<BrightnessLevel> {
        Some(self.level)
    }

    fn set_brightness_level(&mut self, level: u8) {
        self.level.update(level);
    }
}
