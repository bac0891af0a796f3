use super::Filter;
use crate::{
    color::{Color, Hsv16},
    math8::ease_step,
};

const EASING_DIVISOR: u8 = 10;

/// Eases saturation and brightness toward the effect color
///
/// Hue is passed through; a forced hue is only recorded. Forced channels
/// snap without easing.
#[derive(Debug, Clone)]
pub struct BasicFilter<const N: usize> {
    last: [Hsv16; N],
    enabled: bool,
}

impl<const N: usize> Default for BasicFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BasicFilter<N> {
    pub const fn new() -> Self {
        Self {
            last: [Hsv16::new(0, 0, 0); N],
            enabled: true,
        }
    }

    /// Disabled filter passes colors through unchanged
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last committed color of a LED
    pub fn last_color(&self, index: usize) -> Option<Hsv16> {
        self.last.get(index).copied()
    }
}

impl<const N: usize> Filter for BasicFilter<N> {
    fn filter(&mut self, index: usize, color: Color) -> Hsv16 {
        let mut out = color.hsv();
        if !self.enabled {
            return out;
        }
        let Some(last) = self.last.get_mut(index) else {
            return out;
        };

        if color.force_hue {
            last.hue = color.hue;
        }

        last.sat = if color.force_sat {
            color.sat
        } else {
            ease_step::<EASING_DIVISOR>(last.sat, color.sat)
        };
        out.sat = last.sat;

        last.val = if color.force_val {
            color.val
        } else {
            ease_step::<EASING_DIVISOR>(last.val, color.val)
        };
        out.val = last.val;

        out
    }
}
