//! Color filters
//!
//! A filter turns the raw color an effect asks for into the color actually
//! shown, easing from the LED's last committed color.

mod basic;
mod full;
mod mood;

pub use basic::BasicFilter;
pub use full::FullFilter;
pub use mood::{
    ANGER_HUE, ANGER_PULSE_THRESHOLD, COLD_HUE, DRUNK_HUE, HEAT_HUE, Mood, MoodGauges,
    PULSATION_MAX, morph,
};

use crate::color::{Color, Hsv16};

pub trait Filter {
    /// Filter one LED's color for this frame
    fn filter(&mut self, index: usize, color: Color) -> Hsv16;

    /// Advance per-frame state; called once per tick after all LEDs
    fn tick(&mut self) {}
}

/// Selects which filter the animator runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterProfile {
    /// Raw effect colors, no easing
    PassThrough,
    /// Saturation and brightness easing
    Basic,
    /// Easing plus mood gauges
    #[default]
    Full,
}

/// Filter in use by the animator
#[derive(Debug, Clone)]
pub enum ColorFilter<const N: usize> {
    PassThrough,
    Basic(BasicFilter<N>),
    Full(FullFilter<N>),
}

impl<const N: usize> ColorFilter<N> {
    pub const fn new(profile: FilterProfile) -> Self {
        match profile {
            FilterProfile::PassThrough => Self::PassThrough,
            FilterProfile::Basic => Self::Basic(BasicFilter::new()),
            FilterProfile::Full => Self::Full(FullFilter::new()),
        }
    }

    pub const fn profile(&self) -> FilterProfile {
        match self {
            Self::PassThrough => FilterProfile::PassThrough,
            Self::Basic(_) => FilterProfile::Basic,
            Self::Full(_) => FilterProfile::Full,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Self::PassThrough => {}
            Self::Basic(filter) => filter.set_enabled(enabled),
            Self::Full(filter) => filter.set_enabled(enabled),
        }
    }

    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::PassThrough => false,
            Self::Basic(filter) => filter.is_enabled(),
            Self::Full(filter) => filter.is_enabled(),
        }
    }

    /// Re-arm the reset of the mood-aware filter
    pub fn reset_last_color(&mut self) {
        if let Self::Full(filter) = self {
            filter.reset_last_color();
        }
    }

    /// Toggle a mood; only the mood-aware filter has gauges
    pub fn set_mood(&mut self, mood: Mood, active: bool) {
        if let Self::Full(filter) = self {
            filter.set_mood(mood, active);
        }
    }

    pub const fn gauges(&self) -> Option<&MoodGauges> {
        match self {
            Self::Full(filter) => Some(filter.gauges()),
            Self::PassThrough | Self::Basic(_) => None,
        }
    }

    pub fn last_color(&self, index: usize) -> Option<Hsv16> {
        match self {
            Self::PassThrough => None,
            Self::Basic(filter) => filter.last_color(index),
            Self::Full(filter) => filter.last_color(index),
        }
    }
}

impl<const N: usize> Filter for ColorFilter<N> {
    fn filter(&mut self, index: usize, color: Color) -> Hsv16 {
        match self {
            Self::PassThrough => color.hsv(),
            Self::Basic(filter) => filter.filter(index, color),
            Self::Full(filter) => filter.filter(index, color),
        }
    }

    fn tick(&mut self) {
        match self {
            Self::PassThrough => {}
            Self::Basic(filter) => filter.tick(),
            Self::Full(filter) => filter.tick(),
        }
    }
}
