//! Non-blocking, time-driven strip effects.
//!
//! Every effect is a small state machine advanced by [`Effect::advance`] with
//! the caller's current instant. Effects never touch hardware themselves; a
//! driver such as [`RgbStrip::play`](crate::strip::RgbStrip::play) writes the
//! returned frame. This keeps several effects (and input polling) running in
//! the same loop without any of them blocking.

mod burst;
mod fade;
mod multi_flash;
mod rainbow;
mod two_color_flash;

pub use burst::FlashBurst;
pub use fade::TwoColorFade;
pub use multi_flash::{MAX_FLASH_COLORS, MultiColorFlash, MultiColorFlashBuilder, PlayOrder};
pub use rainbow::{DEFAULT_RAINBOW_SPEED, Rainbow};
pub use two_color_flash::TwoColorFlash;

use crate::time::{TimeDuration, TimeInstant};

/// A time-driven effect producing one frame per call.
pub trait Effect<I: TimeInstant> {
    /// What the effect produces each tick (a strip color or a channel level).
    type Frame;

    /// Advances the effect to `now`.
    ///
    /// # Returns
    /// * `Some(frame)` - The frame to display at this time
    /// * `None` - The effect has run its course; see [`Effect::final_frame`]
    fn advance(&mut self, now: I) -> Option<Self::Frame>;

    /// Frame to leave on the output once `advance` has returned `None`.
    ///
    /// Defaults to `None`: the output keeps whatever was written last.
    fn final_frame(&self) -> Option<Self::Frame> {
        None
    }

    /// Returns true while the effect's lifetime is running.
    fn is_active(&self) -> bool;

    /// Cancels the effect. The next `advance` starts it from scratch.
    fn stop(&mut self);
}

/// Result of polling an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnvelopeState {
    /// Idle before this call; the start time was latched now.
    Started,
    /// Still within its duration.
    Running,
    /// Duration exceeded. The envelope is idle again.
    Expired,
}

/// The "active flag plus total duration" lifetime shared by timed effects.
///
/// The first poll while idle latches the start time. Later polls report
/// `Expired` once strictly more than `duration` has elapsed, returning the
/// envelope to idle so that the following poll starts a new run.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<I: TimeInstant> {
    duration: I::Duration,
    started_at: Option<I>,
}

impl<I: TimeInstant> Envelope<I> {
    /// Creates an idle envelope.
    pub fn new(duration: I::Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    /// Polls the envelope at `now`.
    pub fn poll(&mut self, now: I) -> EnvelopeState {
        match self.started_at {
            None => {
                self.started_at = Some(now);
                EnvelopeState::Started
            }
            Some(start) if now.millis_since(start) > self.duration.as_millis() => {
                self.started_at = None;
                EnvelopeState::Expired
            }
            Some(_) => EnvelopeState::Running,
        }
    }

    /// Returns true between the first poll and expiry.
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns the latched start instant, if running.
    pub fn started_at(&self) -> Option<I> {
        self.started_at
    }

    /// Returns the configured lifetime.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }

    /// Replaces the lifetime. Takes effect on the running envelope too.
    pub fn set_duration(&mut self, duration: I::Duration) {
        self.duration = duration;
    }

    /// Returns the envelope to idle.
    pub fn reset(&mut self) {
        self.started_at = None;
    }
}

/// Effect configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectError {
    /// No colors provided.
    EmptyPalette,

    /// More colors than the effect can hold.
    CapacityExceeded,

    /// Fade endpoints are the same color.
    IdenticalFadeColors,
}

impl core::fmt::Display for EffectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EffectError::EmptyPalette => {
                write!(f, "effect needs at least one color")
            }
            EffectError::CapacityExceeded => {
                write!(f, "effect holds at most {} colors", MAX_FLASH_COLORS)
            }
            EffectError::IdenticalFadeColors => {
                write!(f, "fade endpoints must differ in at least one channel")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EffectError {}
