//! Mood gauges
//!
//! Four slow counters that pull every LED toward a mood color and force it
//! vivid. Each gauge ramps up while its mood is active and decays otherwise.

/// Slightly violet red (about 353 degrees)
pub const ANGER_HUE: u16 = 64250;
/// Light blue (about 190 degrees)
pub const COLD_HUE: u16 = 34600;
/// Red
pub const HEAT_HUE: u16 = 0;
/// Slightly violet red (about 353 degrees)
pub const DRUNK_HUE: u16 = 64250;

/// Anger level above which the brightness starts pulsing
pub const ANGER_PULSE_THRESHOLD: u8 = 250;
/// Pulsation wraps to 0 once it exceeds this value
pub const PULSATION_MAX: u8 = 160;
const PULSATION_STEP: u8 = 8;

const ANGER_FAST_RISE: u8 = 6;
const ANGER_FAST_DECAY: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Anger,
    Cold,
    Heat,
    Drunk,
}

impl Mood {
    /// Hue the gauge morphs toward
    pub const fn target_hue(self) -> u16 {
        match self {
            Self::Anger => ANGER_HUE,
            Self::Cold => COLD_HUE,
            Self::Heat => HEAT_HUE,
            Self::Drunk => DRUNK_HUE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Gauge {
    level: u8,
    active: bool,
}

impl Gauge {
    fn advance(&mut self) {
        if self.active {
            self.level = self.level.saturating_add(1);
        } else {
            self.level = self.level.saturating_sub(1);
        }
    }
}

/// Global mood state shared by all LEDs
#[derive(Debug, Clone, Default)]
pub struct MoodGauges {
    anger: Gauge,
    cold: Gauge,
    heat: Gauge,
    drunk: Gauge,
    pulsation: u8,
}

impl MoodGauges {
    pub const fn new() -> Self {
        Self {
            anger: Gauge {
                level: 0,
                active: false,
            },
            cold: Gauge {
                level: 0,
                active: false,
            },
            heat: Gauge {
                level: 0,
                active: false,
            },
            drunk: Gauge {
                level: 0,
                active: false,
            },
            pulsation: 0,
        }
    }

    const fn gauge(&self, mood: Mood) -> &Gauge {
        match mood {
            Mood::Anger => &self.anger,
            Mood::Cold => &self.cold,
            Mood::Heat => &self.heat,
            Mood::Drunk => &self.drunk,
        }
    }

    fn gauge_mut(&mut self, mood: Mood) -> &mut Gauge {
        match mood {
            Mood::Anger => &mut self.anger,
            Mood::Cold => &mut self.cold,
            Mood::Heat => &mut self.heat,
            Mood::Drunk => &mut self.drunk,
        }
    }

    /// Turn a mood on or off; the gauge follows on the next ticks
    pub fn set_active(&mut self, mood: Mood, active: bool) {
        self.gauge_mut(mood).active = active;
    }

    pub const fn is_active(&self, mood: Mood) -> bool {
        self.gauge(mood).active
    }

    pub const fn level(&self, mood: Mood) -> u8 {
        self.gauge(mood).level
    }

    /// Brightness dip applied while anger is saturated
    pub const fn pulsation(&self) -> u8 {
        self.pulsation
    }

    /// Highest of the four gauge levels
    pub fn strongest(&self) -> u8 {
        self.anger
            .level
            .max(self.cold.level)
            .max(self.heat.level)
            .max(self.drunk.level)
    }

    /// Advance every gauge by one frame
    pub fn advance(&mut self) {
        if self.anger.active {
            let level = self.anger.level;
            if level < u8::MAX - ANGER_FAST_RISE + 1 {
                self.anger.level = level + ANGER_FAST_RISE;
            } else {
                self.anger.level = level.saturating_add(1);
            }
            self.pulsation += PULSATION_STEP;
            if self.pulsation > PULSATION_MAX {
                self.pulsation = 0;
            }
        } else {
            self.pulsation = 0;
            let level = self.anger.level;
            if level >= ANGER_FAST_DECAY {
                self.anger.level = level - ANGER_FAST_DECAY;
            } else {
                self.anger.level = level.saturating_sub(1);
            }
        }

        self.cold.advance();
        self.heat.advance();
        self.drunk.advance();
    }

    /// Pull a hue toward every mood color in turn: anger, cold, heat, drunk
    pub fn morph_hue(&self, hue: u16) -> u16 {
        [Mood::Anger, Mood::Cold, Mood::Heat, Mood::Drunk]
            .into_iter()
            .fold(hue, |hue, mood| morph(mood.target_hue(), hue, self.level(mood)))
    }
}

/// Move `value` toward `target` by `gauge / 256` of the hue distance
///
/// Travels the shorter way around the wheel. `gauge = 0` leaves `value`
/// untouched and `gauge = 255` returns `target`. Gaps under 256 use a
/// 1/16 granularity so small distances still move.
pub fn morph(target: u16, value: u16, gauge: u8) -> u16 {
    if gauge == 0 {
        return value;
    }
    if gauge == u8::MAX {
        return target;
    }

    let forward = target.wrapping_sub(value);
    if forward < 0x8000 {
        value.wrapping_add(partial_gap(forward, gauge))
    } else {
        value.wrapping_sub(partial_gap(value.wrapping_sub(target), gauge))
    }
}

/// Part of `gap` covered at `gauge`; `gap` is at most half a turn
fn partial_gap(gap: u16, gauge: u8) -> u16 {
    let gauge = u16::from(gauge);
    if gap >= 256 {
        gap / 256 * gauge
    } else {
        gap / 16 * (gauge / 16)
    }
}
