use crate::colors::Color;
use crate::effect::{Effect, EffectError, Envelope, EnvelopeState};
use crate::time::{TimeDuration, TimeInstant};
use heapless::Vec;
use oorandom::Rand32;

/// Maximum number of colors a [`MultiColorFlash`] cycles through.
pub const MAX_FLASH_COLORS: usize = 5;

/// Order in which a [`MultiColorFlash`] visits its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayOrder {
    /// First to last, then wrap around.
    Sequential,

    /// Uniformly random over all colors, seeded for reproducibility.
    Random(u64),
}

#[derive(Debug, Clone, Copy)]
struct FlashSlot<D> {
    color: Color,
    duration: D,
}

/// Cycles through up to five colors, each held for its own duration, until
/// the total duration has passed.
///
/// The first `advance` after creation (or after expiry) starts the run on the
/// current color. The active color switches once its hold time has elapsed
/// since the last switch. Once strictly more than the total duration has
/// elapsed, `advance` returns `None` without producing a frame and the effect
/// becomes inactive; the caller decides what the strip shows next.
#[derive(Debug, Clone)]
pub struct MultiColorFlash<I: TimeInstant> {
    slots: Vec<FlashSlot<I::Duration>, MAX_FLASH_COLORS>,
    order: PlayOrder,
    rng: Rand32,
    envelope: Envelope<I>,
    last_switch: Option<I>,
    active_index: usize,
}

impl<I: TimeInstant> MultiColorFlash<I> {
    /// Creates a new builder.
    pub fn builder() -> MultiColorFlashBuilder<I> {
        MultiColorFlashBuilder::new()
    }

    /// Builds a flash from parallel color and duration slices.
    ///
    /// Only the first [`MAX_FLASH_COLORS`] pairs are used, and the shorter
    /// slice bounds the count.
    ///
    /// # Errors
    /// * `EmptyPalette` - Either slice is empty
    pub fn from_slices(
        colors: &[Color],
        durations: &[I::Duration],
        order: PlayOrder,
        total: I::Duration,
    ) -> Result<Self, EffectError> {
        let mut builder = Self::builder().order(order).total_duration(total);
        for (&color, &duration) in colors.iter().zip(durations).take(MAX_FLASH_COLORS) {
            builder = builder.color(color, duration)?;
        }
        builder.build()
    }

    /// Returns the number of colors.
    pub fn color_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the index of the color currently shown.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the color currently shown.
    pub fn active_color(&self) -> Color {
        self.slots[self.active_index].color
    }

    /// Returns the play order.
    pub fn order(&self) -> PlayOrder {
        self.order
    }

    fn next_index(&mut self) -> usize {
        let count = self.slots.len();
        match self.order {
            PlayOrder::Sequential => (self.active_index + 1) % count,
            PlayOrder::Random(_) => self.rng.rand_range(0..count as u32) as usize,
        }
    }
}

impl<I: TimeInstant> Effect<I> for MultiColorFlash<I> {
    type Frame = Color;

    fn advance(&mut self, now: I) -> Option<Color> {
        match self.envelope.poll(now) {
            EnvelopeState::Expired => {
                #[cfg(feature = "defmt")]
                defmt::trace!("multi-color flash expired");
                return None;
            }
            EnvelopeState::Started => self.last_switch = Some(now),
            EnvelopeState::Running => {}
        }

        let last_switch = self.last_switch.unwrap_or(now);
        let hold = self.slots[self.active_index].duration.as_millis();
        if now.millis_since(last_switch) >= hold {
            self.last_switch = Some(now);
            self.active_index = self.next_index();
        }

        Some(self.active_color())
    }

    fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    fn stop(&mut self) {
        self.envelope.reset();
    }
}

/// Builder for validated [`MultiColorFlash`] effects.
#[derive(Debug)]
pub struct MultiColorFlashBuilder<I: TimeInstant> {
    slots: Vec<FlashSlot<I::Duration>, MAX_FLASH_COLORS>,
    order: PlayOrder,
    total: I::Duration,
}

impl<I: TimeInstant> MultiColorFlashBuilder<I> {
    /// Creates an empty sequential builder with zero total duration.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: PlayOrder::Sequential,
            total: I::Duration::ZERO,
        }
    }

    /// Adds a color shown for `duration` each time it comes up.
    ///
    /// # Errors
    /// * `CapacityExceeded` - Already holds [`MAX_FLASH_COLORS`] colors
    pub fn color(mut self, color: Color, duration: I::Duration) -> Result<Self, EffectError> {
        self.slots
            .push(FlashSlot { color, duration })
            .map_err(|_| EffectError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets the play order. Default is `Sequential`.
    pub fn order(mut self, order: PlayOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets how long the whole effect runs.
    pub fn total_duration(mut self, total: I::Duration) -> Self {
        self.total = total;
        self
    }

    /// Builds and validates the effect.
    ///
    /// # Errors
    /// * `EmptyPalette` - No colors were added
    pub fn build(self) -> Result<MultiColorFlash<I>, EffectError> {
        if self.slots.is_empty() {
            return Err(EffectError::EmptyPalette);
        }

        let seed = match self.order {
            PlayOrder::Random(seed) => seed,
            PlayOrder::Sequential => 0,
        };

        Ok(MultiColorFlash {
            slots: self.slots,
            order: self.order,
            rng: Rand32::new(seed),
            envelope: Envelope::new(self.total),
            last_switch: None,
            active_index: 0,
        })
    }
}

impl<I: TimeInstant> Default for MultiColorFlashBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
