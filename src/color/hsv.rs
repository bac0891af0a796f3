//! HSV color types with a full-turn 16-bit hue

/// HSV triple without easing hints
///
/// `hue` covers the whole color wheel in `0..=65535` and wraps silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsv16 {
    pub hue: u16,
    pub sat: u8,
    pub val: u8,
}

impl Hsv16 {
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}

/// Color produced by an effect for a single frame
///
/// The `force_*` flags ask the color filter to skip easing for that channel
/// and snap directly to the given value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub hue: u16,
    pub sat: u8,
    pub val: u8,
    pub force_hue: bool,
    pub force_sat: bool,
    pub force_val: bool,
}

impl Color {
    /// Color that is eased on every channel
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self::with_force(hue, sat, val, false, false, false)
    }

    pub const fn with_force(
        hue: u16,
        sat: u8,
        val: u8,
        force_hue: bool,
        force_sat: bool,
        force_val: bool,
    ) -> Self {
        Self {
            hue,
            sat,
            val,
            force_hue,
            force_sat,
            force_val,
        }
    }

    /// Color that bypasses easing on every channel
    pub const fn forced(raw: Hsv16) -> Self {
        Self::with_force(raw.hue, raw.sat, raw.val, true, true, true)
    }

    /// Drop the easing hints
    pub const fn hsv(self) -> Hsv16 {
        Hsv16 {
            hue: self.hue,
            sat: self.sat,
            val: self.val,
        }
    }
}

impl From<Hsv16> for Color {
    fn from(raw: Hsv16) -> Self {
        Self::forced(raw)
    }
}
