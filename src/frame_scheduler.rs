//! Software tick source
//!
//! Paces [`Animator::tick`] without async or a hardware timer. The caller
//! sleeps for the returned duration between calls.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animator::Animator;
use crate::{OutputDriver, TickSource};

/// Shortest accepted frame period (50 Hz)
pub const MIN_FRAME_DURATION: Duration = Duration::from_millis(20);
/// Longest accepted frame period (40 Hz)
pub const MAX_FRAME_DURATION: Duration = Duration::from_millis(25);
pub const DEFAULT_FRAME_DURATION: Duration = MIN_FRAME_DURATION;

/// Result of a frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Deadline of the next frame
    pub next_deadline: Instant,
    /// Time left until the next frame, zero when behind schedule
    pub sleep_duration: Duration,
    /// Whether this call rendered a frame
    pub rendered: bool,
}

/// Suspend flag toggled through [`TickSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TickGate {
    suspended: bool,
}

impl TickGate {
    pub const fn is_suspended(&self) -> bool {
        self.suspended
    }
}

impl TickSource for TickGate {
    fn suspend(&mut self) {
        self.suspended = true;
    }

    fn resume(&mut self) {
        self.suspended = false;
    }
}

/// Fixed-period frame pacing with drift correction
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(animator);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<D: OutputDriver, const N: usize> {
    animator: Animator<D, N>,
    gate: TickGate,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<D: OutputDriver, const N: usize> FrameScheduler<D, N> {
    pub fn new(animator: Animator<D, N>) -> Self {
        Self::with_frame_duration(animator, DEFAULT_FRAME_DURATION)
    }

    /// Frame duration is clamped into 20..=25 ms
    pub fn with_frame_duration(animator: Animator<D, N>, frame_duration: Duration) -> Self {
        Self {
            animator,
            gate: TickGate::default(),
            next_frame: Instant::from_millis(0),
            frame_duration: frame_duration.clamp(MIN_FRAME_DURATION, MAX_FRAME_DURATION),
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn is_suspended(&self) -> bool {
        self.gate.is_suspended()
    }

    /// Run one frame if due and not suspended
    ///
    /// Falling more than two frames behind drops the backlog instead of
    /// rendering a burst of catch-up frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FrameScheduler.tick] drift reset, {} ms behind",
                (now - self.next_frame).as_millis()
            );
            self.next_frame = now;
        }

        let rendered = !self.gate.is_suspended() && now >= self.next_frame;
        if rendered {
            self.animator.tick();
            self.next_frame += self.frame_duration;
        }

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            rendered,
        }
    }

    /// Acknowledge blink with this scheduler as the tick source
    pub fn acknowledge(&mut self, hold: Duration) {
        self.animator.acknowledge(&mut self.gate, hold);
    }

    pub const fn animator(&self) -> &Animator<D, N> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator<D, N> {
        &mut self.animator
    }
}

impl<D: OutputDriver, const N: usize> TickSource for FrameScheduler<D, N> {
    fn suspend(&mut self) {
        self.gate.suspend();
    }

    fn resume(&mut self) {
        self.gate.resume();
    }
}
