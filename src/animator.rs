//! Frame driver
//!
//! Owns the per-LED effects, the color filter and the shared clocks, and
//! turns them into one frame per [`Animator::tick`].

use embassy_time::{Duration, block_for};
use fastrand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::arena::Arena;
use crate::clock::PhaseClocks;
use crate::color::{Rgb, hsv16_to_rgb};
use crate::command::{Command, CommandReceiver};
use crate::effect::{EffectConfig, EffectId, EffectSlot, Variant};
use crate::filter::{ColorFilter, Filter, FilterProfile, Mood, MoodGauges};
use crate::{OutputDriver, TickSource};

/// How long the acknowledge blink keeps the strip dark
pub const DEFAULT_ACKNOWLEDGE_HOLD: Duration = Duration::from_millis(60);

const DEFAULT_SEED: u64 = 0x6d6f_6570_6362;

/// Configuration for the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorConfig {
    pub filter: FilterProfile,
    /// Seed of the sparkle random generator
    pub seed: u64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            filter: FilterProfile::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Animates up to `N` LEDs, one effect per LED
pub struct Animator<D: OutputDriver, const N: usize> {
    driver: D,
    arena: Arena<N>,
    filter: ColorFilter<N>,
    clocks: PhaseClocks,
    rng: Rng,
}

impl<D: OutputDriver, const N: usize> Animator<D, N> {
    pub fn new(driver: D, config: AnimatorConfig) -> Self {
        Self {
            driver,
            arena: Arena::new(),
            filter: ColorFilter::new(config.filter),
            clocks: PhaseClocks::new(),
            rng: Rng::with_seed(config.seed),
        }
    }

    /// Render one frame
    ///
    /// Every enabled LED with an effect is updated, filtered and written to
    /// the driver, which is flushed once if anything was written. The filter
    /// and the shared clocks then advance exactly once. Returns whether the
    /// driver was flushed.
    pub fn tick(&mut self) -> bool {
        let mut written = false;
        for index in 0..N {
            let Some((effect, scale)) = self.arena.active_mut(index) else {
                continue;
            };
            let raw = effect.update(scale, &mut self.rng);
            let color = self.filter.filter(index, raw);
            self.driver.set_pixel(index, hsv16_to_rgb(color));
            written = true;
        }
        if written {
            self.driver.show();
        }

        self.filter.tick();
        self.clocks.advance();
        written
    }

    /// Install an effect on a LED, replacing the previous one
    ///
    /// Returns the new effect, or `None` for an out-of-range index.
    pub fn set_mode(&mut self, index: usize, config: EffectConfig) -> Option<&mut EffectSlot> {
        if index >= N {
            return None;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Animator.set_mode] led {} -> {}", index, config.id().as_str());
        let effect = config.build(&mut self.rng);
        self.arena.install(index, effect)
    }

    pub fn clear_mode(&mut self, index: usize) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.clear_mode] led {}", index);
        self.arena.clear(index);
    }

    pub fn clear_all(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.clear_all]");
        self.arena.clear_all();
    }

    pub fn effect(&self, index: usize) -> Option<&EffectSlot> {
        self.arena.get(index)
    }

    pub fn effect_id(&self, index: usize) -> Option<EffectId> {
        self.arena.id(index)
    }

    /// Borrow a LED's effect as variant `V`, `None` for any other variant
    pub fn effect_as<V: Variant>(&self, index: usize) -> Option<&V> {
        self.arena.get_as(index)
    }

    pub fn effect_as_mut<V: Variant>(&mut self, index: usize) -> Option<&mut V> {
        self.arena.get_as_mut(index)
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.arena.is_enabled(index)
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        self.arena.set_enabled(index, enabled);
    }

    pub fn set_enabled_all(&mut self, enabled: bool) {
        self.arena.set_enabled_all(enabled);
    }

    /// Levels above 3 are ignored
    pub fn set_brightness_level(&mut self, index: usize, level: u8) {
        self.arena.set_brightness_level(index, level);
    }

    pub fn set_brightness_level_all(&mut self, level: u8) {
        self.arena.set_brightness_level_all(level);
    }

    pub fn set_brightness_scale(&mut self, index: usize, scale: u8) {
        self.arena.set_brightness_scale(index, scale);
    }

    pub fn set_brightness_scale_all(&mut self, scale: u8) {
        self.arena.set_brightness_scale_all(scale);
    }

    pub fn set_mood(&mut self, mood: Mood, active: bool) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.set_mood] {:?} = {}", mood, active);
        self.filter.set_mood(mood, active);
    }

    pub fn set_angry(&mut self, active: bool) {
        self.set_mood(Mood::Anger, active);
    }

    pub fn set_cold(&mut self, active: bool) {
        self.set_mood(Mood::Cold, active);
    }

    pub fn set_heat(&mut self, active: bool) {
        self.set_mood(Mood::Heat, active);
    }

    pub fn set_drunk(&mut self, active: bool) {
        self.set_mood(Mood::Drunk, active);
    }

    /// Mood gauges, when the mood-aware filter is in use
    pub const fn gauges(&self) -> Option<&MoodGauges> {
        self.filter.gauges()
    }

    pub fn set_filter_enabled(&mut self, enabled: bool) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.set_filter_enabled] {}", enabled);
        self.filter.set_enabled(enabled);
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset_last_color();
    }

    pub const fn filter(&self) -> &ColorFilter<N> {
        &self.filter
    }

    pub const fn clocks(&self) -> &PhaseClocks {
        &self.clocks
    }

    pub const fn arena(&self) -> &Arena<N> {
        &self.arena
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Apply a queued configuration call
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetMode { index, effect } => {
                self.set_mode(index, effect);
            }
            Command::ClearMode(index) => self.clear_mode(index),
            Command::ClearAll => self.clear_all(),
            Command::SetEnabled { index, enabled } => self.set_enabled(index, enabled),
            Command::SetEnabledAll(enabled) => self.set_enabled_all(enabled),
            Command::SetBrightnessLevel { index, level } => self.set_brightness_level(index, level),
            Command::SetBrightnessLevelAll(level) => self.set_brightness_level_all(level),
            Command::SetBrightnessScale { index, scale } => self.set_brightness_scale(index, scale),
            Command::SetBrightnessScaleAll(scale) => self.set_brightness_scale_all(scale),
            Command::SetMood { mood, active } => self.set_mood(mood, active),
            Command::SetFilterEnabled(enabled) => self.set_filter_enabled(enabled),
            Command::ResetFilter => self.reset_filter(),
        }
    }

    /// Drain the command queue (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_commands<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(command) = commands.try_receive() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Blank the strip for `hold` with the tick source suspended
    ///
    /// Blocks the caller for `hold`; the next tick redraws the effects.
    pub fn acknowledge<T: TickSource>(&mut self, ticks: &mut T, hold: Duration) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.acknowledge] hold {} ms", hold.as_millis());
        ticks.suspend();
        for index in 0..N {
            self.driver.set_pixel(index, Rgb::default());
        }
        self.driver.show();
        block_for(hold);
        ticks.resume();
    }
}
