#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{
    Filter,
    mood::{ANGER_PULSE_THRESHOLD, Mood, MoodGauges},
};
use crate::{
    color::{Color, Hsv16},
    math8::ease_step,
};

// Larger than the basic divisor; the +1 in each step already speeds up
// integer easing.
const SAT_EASING_DIVISOR: u8 = 24;
const VAL_EASING_DIVISOR: u8 = 40;

/// Easing filter with mood gauges layered on top
///
/// Per LED, in order:
/// 1. Hue morphs toward each active mood color unless the effect forced it
/// 2. Saturation eases, then is raised to the strongest gauge
/// 3. Brightness eases, then is raised to the anger gauge and dips with the
///    anger pulsation once anger is saturated
#[derive(Debug, Clone)]
pub struct FullFilter<const N: usize> {
    last: [Hsv16; N],
    gauges: MoodGauges,
    enabled: bool,
    /// Snap to the incoming color on the next frame
    reset: bool,
}

impl<const N: usize> Default for FullFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FullFilter<N> {
    pub const fn new() -> Self {
        Self {
            last: [Hsv16::new(0, 0, 0); N],
            gauges: MoodGauges::new(),
            enabled: true,
            reset: true,
        }
    }

    /// Enable or disable the filter
    ///
    /// A disabled filter passes colors through and freezes the gauges.
    /// Enabling arms a reset so LEDs do not fade in from stale colors.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.reset = true;
        }
        self.enabled = enabled;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Snap every LED to its incoming color on the next frame
    pub fn reset_last_color(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[FullFilter.reset_last_color] reset armed");
        self.reset = true;
    }

    pub const fn is_reset_pending(&self) -> bool {
        self.reset
    }

    pub fn set_mood(&mut self, mood: Mood, active: bool) {
        self.gauges.set_active(mood, active);
    }

    pub const fn gauges(&self) -> &MoodGauges {
        &self.gauges
    }

    pub fn last_color(&self, index: usize) -> Option<Hsv16> {
        self.last.get(index).copied()
    }
}

impl<const N: usize> Filter for FullFilter<N> {
    fn filter(&mut self, index: usize, color: Color) -> Hsv16 {
        let mut out = color.hsv();
        if !self.enabled {
            return out;
        }
        let Some(last) = self.last.get_mut(index) else {
            return out;
        };
        if self.reset {
            *last = color.hsv();
        }

        if color.force_hue {
            last.hue = color.hue;
        } else {
            out.hue = self.gauges.morph_hue(color.hue);
        }

        let start = if color.force_sat { color.sat } else { last.sat };
        let sat = ease_step::<SAT_EASING_DIVISOR>(start, color.sat).max(self.gauges.strongest());
        last.sat = sat;
        out.sat = sat;

        let anger = self.gauges.level(Mood::Anger);
        let start = if color.force_val { color.val } else { last.val };
        let mut val = ease_step::<VAL_EASING_DIVISOR>(start, color.val).max(anger);
        if anger > ANGER_PULSE_THRESHOLD {
            val = val.saturating_sub(self.gauges.pulsation());
        }
        last.val = val;
        out.val = val;

        out
    }

    fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.reset = false;
        self.gauges.advance();
    }
}
