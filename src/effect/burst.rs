use crate::COLOR_OFF;
use crate::colors::Color;
use crate::effect::Effect;
use crate::time::{TimeDuration, TimeInstant};

/// A fixed number of on/off pulses, without blocking.
///
/// Produces `on` for `length`, then `off` for `length`, and so on for
/// `flashes` pulses. There is no trailing off period: the burst finishes
/// `(2 * flashes - 1) * length` after its first `advance` and its
/// [`Effect::final_frame`] is `on`, so the output is left lit even when no
/// poll landed in the last pulse.
///
/// `T` is the frame type: a [`Color`] for strips, a `u8` level for single
/// channel outputs.
#[derive(Debug, Clone, Copy)]
pub struct FlashBurst<I: TimeInstant, T> {
    on: T,
    off: T,
    flashes: u32,
    length: I::Duration,
    started_at: Option<I>,
}

impl<I: TimeInstant, T: Copy> FlashBurst<I, T> {
    /// Creates a burst alternating between `on` and `off`.
    pub fn new(on: T, off: T, flashes: u32, length: I::Duration) -> Self {
        Self {
            on,
            off,
            flashes,
            length,
            started_at: None,
        }
    }

    /// Number of pulses in the burst.
    pub fn flashes(&self) -> u32 {
        self.flashes
    }

    /// Time from the first pulse starting to the last pulse ending, in ms.
    pub fn total_millis(&self) -> u64 {
        match self.flashes {
            0 => 0,
            n => (u64::from(n) * 2 - 1).saturating_mul(self.length.as_millis()),
        }
    }
}

impl<I: TimeInstant> FlashBurst<I, Color> {
    /// A strip burst flashing `color` against black.
    pub fn rgb(color: Color, flashes: u32, length: I::Duration) -> Self {
        Self::new(color, COLOR_OFF, flashes, length)
    }
}

impl<I: TimeInstant> FlashBurst<I, u8> {
    /// A single channel burst flashing `level` against zero.
    pub fn level(level: u8, flashes: u32, length: I::Duration) -> Self {
        Self::new(level, 0, flashes, length)
    }
}

impl<I: TimeInstant, T: Copy> Effect<I> for FlashBurst<I, T> {
    type Frame = T;

    fn advance(&mut self, now: I) -> Option<T> {
        let start = *self.started_at.get_or_insert(now);
        let elapsed = now.millis_since(start);

        if elapsed >= self.total_millis() {
            self.started_at = None;
            return None;
        }

        let half_period = elapsed / self.length.as_millis().max(1);
        Some(if half_period % 2 == 0 { self.on } else { self.off })
    }

    fn final_frame(&self) -> Option<T> {
        (self.flashes > 0).then_some(self.on)
    }

    fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    fn stop(&mut self) {
        self.started_at = None;
    }
}
