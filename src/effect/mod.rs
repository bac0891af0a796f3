//! Per-LED animation variants
//!
//! A LED runs one variant at a time, held inline in its [`EffectSlot`].
//! [`EffectConfig`] builds a variant and [`Variant`] recovers the concrete
//! type from a slot.

mod autumn;
mod breath;
mod gaming;
mod icy;
mod level;
mod rainbow;
mod simple;
mod sword;
mod twinkle;

use fastrand::Rng;

pub use autumn::{AUTUMN_BRIGHTNESS, AUTUMN_TWINKLE_BRIGHTNESS, AutumnEffect, DEFAULT_AUTUMN_STEP};
pub use breath::BreathEffect;
pub use gaming::{DEFAULT_GAMING_STEP, GAMING_BRIGHTNESS, GamingEffect};
pub use icy::{ICY_BRIGHTNESS, ICY_TWINKLE_BRIGHTNESS, IcyEffect, IcyMode};
pub use level::{BrightnessLevel, BrightnessTable};
pub use rainbow::{
    DEFAULT_RAINBOW_STEP, RAINBOW_BRIGHTNESS, RAINBOW_FORCED_BRIGHTNESS,
    RAINBOW_TWINKLE_BRIGHTNESS, RainbowEffect, RainbowMode,
};
pub use simple::SimpleEffect;
pub use sword::{SWORD_BRIGHTNESS, SWORD_BRIGHTNESS_DECREASE, SwordEffect, SwordMode, SwordPreset};

use crate::color::{Color, Hsv16};

const EFFECT_NAME_SIMPLE: &str = "simple";
const EFFECT_NAME_BREATH: &str = "breath";
const EFFECT_NAME_GAMING: &str = "gaming";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_AUTUMN: &str = "autumn";
const EFFECT_NAME_ICY: &str = "icy";
const EFFECT_NAME_SWORD: &str = "sword";

const EFFECT_ID_SIMPLE: u8 = 0;
const EFFECT_ID_BREATH: u8 = 1;
const EFFECT_ID_GAMING: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;
const EFFECT_ID_AUTUMN: u8 = 4;
const EFFECT_ID_ICY: u8 = 5;
const EFFECT_ID_SWORD: u8 = 6;

pub trait Effect {
    /// Compute this frame's color and advance internal counters
    ///
    /// `scale` is the slot's brightness scale, applied as `value * scale / 256`.
    fn update(&mut self, scale: u8, rng: &mut Rng) -> Color;

    /// Selected brightness level, for table-driven effects
    fn brightness_level(&self) -> Option<BrightnessLevel> {
        None
    }

    /// Select a brightness level
    ///
    /// Levels above [`BrightnessLevel::MAX`] are ignored.
    fn set_brightness_level(&mut self, _level: u8) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Fixed color
    Simple(SimpleEffect),
    /// White breathing
    Breath(BreathEffect),
    /// Fast hue sweep
    Gaming(GamingEffect),
    /// Slow rainbow cycling
    Rainbow(RainbowEffect),
    /// Red to green swing
    Autumn(AutumnEffect),
    /// Icy sparkle
    Icy(IcyEffect),
    /// Sword blade glow
    Sword(SwordEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Simple = EFFECT_ID_SIMPLE,
    Breath = EFFECT_ID_BREATH,
    Gaming = EFFECT_ID_GAMING,
    Rainbow = EFFECT_ID_RAINBOW,
    Autumn = EFFECT_ID_AUTUMN,
    Icy = EFFECT_ID_ICY,
    Sword = EFFECT_ID_SWORD,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SIMPLE => Self::Simple,
            EFFECT_ID_BREATH => Self::Breath,
            EFFECT_ID_GAMING => Self::Gaming,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_AUTUMN => Self::Autumn,
            EFFECT_ID_ICY => Self::Icy,
            EFFECT_ID_SWORD => Self::Sword,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => EFFECT_NAME_SIMPLE,
            Self::Breath => EFFECT_NAME_BREATH,
            Self::Gaming => EFFECT_NAME_GAMING,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Autumn => EFFECT_NAME_AUTUMN,
            Self::Icy => EFFECT_NAME_ICY,
            Self::Sword => EFFECT_NAME_SWORD,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SIMPLE => Some(Self::Simple),
            EFFECT_NAME_BREATH => Some(Self::Breath),
            EFFECT_NAME_GAMING => Some(Self::Gaming),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_AUTUMN => Some(Self::Autumn),
            EFFECT_NAME_ICY => Some(Self::Icy),
            EFFECT_NAME_SWORD => Some(Self::Sword),
            _ => None,
        }
    }
}

/// Construction parameters for an effect
///
/// Brightness levels out of range fall back to the default level 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectConfig {
    Simple(Hsv16),
    Breath {
        phase: u8,
    },
    Gaming {
        phase: u8,
        step: u8,
        level: u8,
    },
    Rainbow {
        phase: f32,
        step: f32,
        mode: RainbowMode,
        level: u8,
    },
    Autumn {
        phase: f32,
        step: f32,
        level: u8,
    },
    Icy {
        mode: IcyMode,
        level: u8,
    },
    Sword {
        phase: u8,
        preset: SwordPreset,
        mode: SwordMode,
        level: u8,
    },
}

impl EffectConfig {
    pub const fn simple(color: Hsv16) -> Self {
        Self::Simple(color)
    }

    pub const fn breath() -> Self {
        Self::Breath { phase: 0 }
    }

    pub const fn gaming(phase: u8) -> Self {
        Self::Gaming {
            phase,
            step: DEFAULT_GAMING_STEP,
            level: 1,
        }
    }

    pub const fn rainbow(phase: f32) -> Self {
        Self::Rainbow {
            phase,
            step: DEFAULT_RAINBOW_STEP,
            mode: RainbowMode::Natural,
            level: 1,
        }
    }

    pub const fn autumn(phase: f32) -> Self {
        Self::Autumn {
            phase,
            step: DEFAULT_AUTUMN_STEP,
            level: 1,
        }
    }

    pub const fn icy() -> Self {
        Self::Icy {
            mode: IcyMode::Natural,
            level: 1,
        }
    }

    pub const fn sword(phase: u8, preset: SwordPreset) -> Self {
        Self::Sword {
            phase,
            preset,
            mode: SwordMode::Default,
            level: 1,
        }
    }

    pub const fn id(&self) -> EffectId {
        match self {
            Self::Simple(_) => EffectId::Simple,
            Self::Breath { .. } => EffectId::Breath,
            Self::Gaming { .. } => EffectId::Gaming,
            Self::Rainbow { .. } => EffectId::Rainbow,
            Self::Autumn { .. } => EffectId::Autumn,
            Self::Icy { .. } => EffectId::Icy,
            Self::Sword { .. } => EffectId::Sword,
        }
    }

    /// Construct the effect described by this config
    pub fn build(self, rng: &mut Rng) -> EffectSlot {
        match self {
            Self::Simple(color) => EffectSlot::Simple(SimpleEffect::new(color)),
            Self::Breath { phase } => EffectSlot::Breath(BreathEffect::new(phase)),
            Self::Gaming { phase, step, level } => EffectSlot::Gaming(GamingEffect::new(
                phase,
                step,
                BrightnessLevel::or_default(level),
            )),
            Self::Rainbow {
                phase,
                step,
                mode,
                level,
            } => EffectSlot::Rainbow(RainbowEffect::new(
                phase,
                step,
                mode,
                BrightnessLevel::or_default(level),
                rng,
            )),
            Self::Autumn { phase, step, level } => EffectSlot::Autumn(AutumnEffect::new(
                phase,
                step,
                BrightnessLevel::or_default(level),
                rng,
            )),
            Self::Icy { mode, level } => {
                EffectSlot::Icy(IcyEffect::new(mode, BrightnessLevel::or_default(level), rng))
            }
            Self::Sword {
                phase,
                preset,
                mode,
                level,
            } => EffectSlot::Sword(SwordEffect::new(
                phase,
                preset,
                mode,
                BrightnessLevel::or_default(level),
            )),
        }
    }
}

impl EffectSlot {
    /// Compute the next frame of the current effect
    pub fn update(&mut self, scale: u8, rng: &mut Rng) -> Color {
        match self {
            Self::Simple(effect) => effect.update(scale, rng),
            Self::Breath(effect) => effect.update(scale, rng),
            Self::Gaming(effect) => effect.update(scale, rng),
            Self::Rainbow(effect) => effect.update(scale, rng),
            Self::Autumn(effect) => effect.update(scale, rng),
            Self::Icy(effect) => effect.update(scale, rng),
            Self::Sword(effect) => effect.update(scale, rng),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Simple(_) => EffectId::Simple,
            Self::Breath(_) => EffectId::Breath,
            Self::Gaming(_) => EffectId::Gaming,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Autumn(_) => EffectId::Autumn,
            Self::Icy(_) => EffectId::Icy,
            Self::Sword(_) => EffectId::Sword,
        }
    }

    pub fn brightness_level(&self) -> Option<BrightnessLevel> {
        match self {
            Self::Simple(effect) => effect.brightness_level(),
            Self::Breath(effect) => effect.brightness_level(),
            Self::Gaming(effect) => effect.brightness_level(),
            Self::Rainbow(effect) => effect.brightness_level(),
            Self::Autumn(effect) => effect.brightness_level(),
            Self::Icy(effect) => effect.brightness_level(),
            Self::Sword(effect) => effect.brightness_level(),
        }
    }

    pub fn set_brightness_level(&mut self, level: u8) {
        match self {
            Self::Simple(effect) => effect.set_brightness_level(level),
            Self::Breath(effect) => effect.set_brightness_level(level),
            Self::Gaming(effect) => effect.set_brightness_level(level),
            Self::Rainbow(effect) => effect.set_brightness_level(level),
            Self::Autumn(effect) => effect.set_brightness_level(level),
            Self::Icy(effect) => effect.set_brightness_level(level),
            Self::Sword(effect) => effect.set_brightness_level(level),
        }
    }

    /// Borrow the effect as a concrete variant
    ///
    /// Returns `None` if the slot holds a different variant.
    pub fn as_variant<V: Variant>(&self) -> Option<&V> {
        V::from_slot(self)
    }

    pub fn as_variant_mut<V: Variant>(&mut self) -> Option<&mut V> {
        V::from_slot_mut(self)
    }
}

/// Concrete effect type that can be recovered from an [`EffectSlot`]
pub trait Variant: Effect + Sized {
    const ID: EffectId;

    fn from_slot(slot: &EffectSlot) -> Option<&Self>;

    fn from_slot_mut(slot: &mut EffectSlot) -> Option<&mut Self>;
}

macro_rules! impl_variant {
    ($effect:ty, $variant:ident) => {
        impl Variant for $effect {
            const ID: EffectId = EffectId::$variant;

            fn from_slot(slot: &EffectSlot) -> Option<&Self> {
                match slot {
                    EffectSlot::$variant(effect) => Some(effect),
                    _ => None,
                }
            }

            fn from_slot_mut(slot: &mut EffectSlot) -> Option<&mut Self> {
                match slot {
                    EffectSlot::$variant(effect) => Some(effect),
                    _ => None,
                }
            }
        }
    };
}

impl_variant!(SimpleEffect, Simple);
impl_variant!(BreathEffect, Breath);
impl_variant!(GamingEffect, Gaming);
impl_variant!(RainbowEffect, Rainbow);
impl_variant!(AutumnEffect, Autumn);
impl_variant!(IcyEffect, Icy);
impl_variant!(SwordEffect, Sword);
