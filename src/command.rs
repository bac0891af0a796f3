//! Deferred configuration
//!
//! Configuration calls issued from an interrupt or another task are queued
//! as [`Command`]s and applied by the animator between frames, so a frame
//! never observes a half-applied change. The queue is a fixed-size
//! `heapless::Deque` guarded by a critical section.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::EffectConfig;
use crate::filter::Mood;

/// One configuration call, applied verbatim by the animator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Install an effect on a LED
    SetMode { index: usize, effect: EffectConfig },
    /// Remove the effect of a LED
    ClearMode(usize),
    /// Remove every effect
    ClearAll,
    SetEnabled { index: usize, enabled: bool },
    SetEnabledAll(bool),
    SetBrightnessLevel { index: usize, level: u8 },
    SetBrightnessLevelAll(u8),
    SetBrightnessScale { index: usize, scale: u8 },
    SetBrightnessScaleAll(u8),
    SetMood { mood: Mood, active: bool },
    SetFilterEnabled(bool),
    /// Snap every LED to its next effect color
    ResetFilter,
}

/// Returned when the queue is full; carries the rejected command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub Command);

/// Returned when the queue is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded command queue shared between producers and the animator
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue a command, handing it back when the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(command)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest queued command
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .pop_front()
                .ok_or(TryReceiveError)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Producer handle of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// Consumer handle of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }
}
