/// Brightness lookup table, one entry per level
pub type BrightnessTable = [u8; 4];

/// Index into a [`BrightnessTable`]
///
/// Always within `0..=MAX`, so table lookups cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Highest accepted level
    pub const MAX: u8 = 3;

    /// Returns `None` for levels above [`Self::MAX`]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Look up this level in a table
    pub const fn pick(self, table: &BrightnessTable) -> u8 {
        table[self.0 as usize]
    }

    /// Replace `self` with `level` if it is in range
    pub(crate) fn update(&mut self, level: u8) {
        if let Some(level) = Self::new(level) {
            *self = level;
        }
    }

    /// Level from a construction parameter, falling back to the default
    pub(crate) fn or_default(level: u8) -> Self {
        Self::new(level).unwrap_or_default()
    }
}

impl Default for BrightnessLevel {
    fn default() -> Self {
        Self(1)
    }
}
