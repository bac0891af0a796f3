#![no_std]

pub mod animator;
pub mod arena;
pub mod clock;
pub mod color;
pub mod command;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod math8;

pub use animator::{Animator, AnimatorConfig, DEFAULT_ACKNOWLEDGE_HOLD};
pub use arena::{Arena, Slot};
pub use clock::PhaseClocks;
pub use command::{
    Command, CommandChannel, CommandReceiver, CommandSender, TryReceiveError, TrySendError,
};
pub use effect::{BrightnessLevel, Effect, EffectConfig, EffectId, EffectSlot, Variant};
pub use filter::{ColorFilter, Filter, FilterProfile, Mood, MoodGauges};
pub use frame_scheduler::{FrameResult, FrameScheduler};

pub use color::{Color, Hsv16, Rgb};
pub use embassy_time::{Duration, Instant};

/// LED strip driver
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    /// Stage the color of one LED
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmit the staged colors; called at most once per frame
    fn show(&mut self);
}

/// Periodic source that drives [`Animator::tick`]
///
/// Suspended while a multi-step sequence must not be interleaved with
/// frames.
pub trait TickSource {
    fn suspend(&mut self);

    fn resume(&mut self);
}
