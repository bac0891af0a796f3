//! Slow white breathing

use fastrand::Rng;

use super::Effect;
use crate::{
    color::Color,
    math8::{scale_brightness, triangle8},
};

/// White light fading in and out over 256 frames
#[derive(Debug, Clone, Default)]
pub struct BreathEffect {
    counter: u8,
}

impl BreathEffect {
    pub const fn new(phase: u8) -> Self {
        Self { counter: phase }
    }

    /// Current position in the breathing cycle
    pub const fn counter(&self) -> u8 {
        self.counter
    }

    /// Brightness at a given position, before scaling
    pub const fn wave(counter: u8) -> u8 {
        triangle8(counter)
    }
}

impl Effect for BreathEffect {
    fn update(&mut self, scale: u8, _rng: &mut Rng) -> Color {
        let val = scale_brightness(Self::wave(self.counter), scale);
        self.counter = self.counter.wrapping_add(1);

        Color::with_force(0, 0, val, false, false, true)
    }
}
