//! Static color effect
//!
//! Returns the stored color verbatim with every force flag set, so the
//! filter applies it without easing.

use fastrand::Rng;

use super::Effect;
use crate::color::{Color, Hsv16};

#[derive(Debug, Clone, Default)]
pub struct SimpleEffect {
    raw: Hsv16,
}

impl SimpleEffect {
    pub const fn new(raw: Hsv16) -> Self {
        Self { raw }
    }

    pub const fn color(&self) -> Hsv16 {
        self.raw
    }

    pub fn set_color(&mut self, raw: Hsv16) {
        self.raw = raw;
    }

    pub const fn hue(&self) -> u16 {
        self.raw.hue
    }

    pub fn set_hue(&mut self, hue: u16) {
        self.raw.hue = hue;
    }

    pub const fn sat(&self) -> u8 {
        self.raw.sat
    }

    pub fn set_sat(&mut self, sat: u8) {
        self.raw.sat = sat;
    }

    pub const fn val(&self) -> u8 {
        self.raw.val
    }

    pub fn set_val(&mut self, val: u8) {
        self.raw.val = val;
    }
}

impl Effect for SimpleEffect {
    fn update(&mut self, _scale: u8, _rng: &mut Rng) -> Color {
        Color::forced(self.raw)
    }
}
