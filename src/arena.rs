//! Per-LED effect storage
//!
//! Every LED owns one inline slot that holds at most one effect. Slots are
//! sized for the largest variant by construction of [`EffectSlot`], so no
//! effect can outgrow its slot and nothing is allocated on the heap.

use core::mem::size_of;

use crate::effect::{EffectId, EffectSlot, Variant};

/// Bytes reserved per LED for effect state, tag included
pub const SLOT_CAPACITY: usize = size_of::<Option<EffectSlot>>();

/// Default brightness scale of a fresh slot
pub const DEFAULT_BRIGHTNESS_SCALE: u8 = 255;

/// State of a single LED
#[derive(Debug, Clone)]
pub struct Slot {
    effect: Option<EffectSlot>,
    /// Whether the frame driver animates this LED
    enabled: bool,
    /// Dimmer applied by the effect, `value * scale / 256`
    brightness_scale: u8,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            effect: None,
            enabled: false,
            brightness_scale: DEFAULT_BRIGHTNESS_SCALE,
        }
    }
}

impl Slot {
    pub const fn effect(&self) -> Option<&EffectSlot> {
        self.effect.as_ref()
    }

    pub const fn is_allocated(&self) -> bool {
        self.effect.is_some()
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn brightness_scale(&self) -> u8 {
        self.brightness_scale
    }
}

/// Fixed-size set of effect slots, one per LED
///
/// Out-of-range indices are ignored by mutators and yield `None` from
/// accessors.
#[derive(Debug, Clone)]
pub struct Arena<const N: usize> {
    slots: [Slot; N],
}

impl<const N: usize> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot::default()),
        }
    }

    /// Number of slots
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Replace the effect in a slot
    ///
    /// The previous effect, if any, is dropped first. Returns the freshly
    /// installed effect.
    pub fn install(&mut self, index: usize, effect: EffectSlot) -> Option<&mut EffectSlot> {
        let slot = self.slots.get_mut(index)?;
        slot.effect = None;
        Some(slot.effect.insert(effect))
    }

    /// Drop the effect in a slot
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.effect = None;
        }
    }

    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.effect = None;
        }
    }

    pub fn get(&self, index: usize) -> Option<&EffectSlot> {
        self.slots.get(index)?.effect.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut EffectSlot> {
        self.slots.get_mut(index)?.effect.as_mut()
    }

    /// Borrow a slot's effect as variant `V`
    ///
    /// `None` when the slot is empty or runs another variant.
    pub fn get_as<V: Variant>(&self, index: usize) -> Option<&V> {
        self.get(index)?.as_variant()
    }

    pub fn get_as_mut<V: Variant>(&mut self, index: usize) -> Option<&mut V> {
        self.get_mut(index)?.as_variant_mut()
    }

    pub fn id(&self, index: usize) -> Option<EffectId> {
        self.get(index).map(EffectSlot::id)
    }

    pub fn is_allocated(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_allocated)
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_enabled)
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.enabled = enabled;
        }
    }

    pub fn set_enabled_all(&mut self, enabled: bool) {
        for slot in &mut self.slots {
            slot.enabled = enabled;
        }
    }

    pub fn brightness_scale(&self, index: usize) -> Option<u8> {
        self.slots.get(index).map(Slot::brightness_scale)
    }

    pub fn set_brightness_scale(&mut self, index: usize, scale: u8) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.brightness_scale = scale;
        }
    }

    pub fn set_brightness_scale_all(&mut self, scale: u8) {
        for slot in &mut self.slots {
            slot.brightness_scale = scale;
        }
    }

    /// Select a brightness level on a slot's effect
    ///
    /// Ignored for empty slots, effects without levels and levels out of
    /// range.
    pub fn set_brightness_level(&mut self, index: usize, level: u8) {
        if let Some(effect) = self.get_mut(index) {
            effect.set_brightness_level(level);
        }
    }

    pub fn set_brightness_level_all(&mut self, level: u8) {
        for effect in self.slots.iter_mut().filter_map(|slot| slot.effect.as_mut()) {
            effect.set_brightness_level(level);
        }
    }

    /// Effect and brightness scale of a slot the frame driver should animate
    pub(crate) fn active_mut(&mut self, index: usize) -> Option<(&mut EffectSlot, u8)> {
        let slot = self.slots.get_mut(index)?;
        if !slot.enabled {
            return None;
        }
        let scale = slot.brightness_scale;
        slot.effect.as_mut().map(|effect| (effect, scale))
    }
}
