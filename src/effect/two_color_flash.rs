use crate::colors::Color;
use crate::effect::{Effect, Envelope, EnvelopeState};
use crate::time::{TimeDuration, TimeInstant};

/// Alternates between two colors, each with its own hold time, until the total
/// duration has passed.
///
/// Same lifetime rules as [`MultiColorFlash`](crate::effect::MultiColorFlash).
/// The alternation starts on the first color.
#[derive(Debug, Clone, Copy)]
pub struct TwoColorFlash<I: TimeInstant> {
    first: Color,
    second: Color,
    first_hold: I::Duration,
    second_hold: I::Duration,
    envelope: Envelope<I>,
    last_switch: Option<I>,
    first_active: bool,
}

impl<I: TimeInstant> TwoColorFlash<I> {
    /// Creates a two-color flash.
    pub fn new(
        first: Color,
        second: Color,
        first_hold: I::Duration,
        second_hold: I::Duration,
        total: I::Duration,
    ) -> Self {
        Self {
            first,
            second,
            first_hold,
            second_hold,
            envelope: Envelope::new(total),
            last_switch: None,
            first_active: true,
        }
    }

    /// Returns true while the first color is shown.
    pub fn first_active(&self) -> bool {
        self.first_active
    }

    fn hold(&self) -> I::Duration {
        if self.first_active {
            self.first_hold
        } else {
            self.second_hold
        }
    }
}

impl<I: TimeInstant> Effect<I> for TwoColorFlash<I> {
    type Frame = Color;

    fn advance(&mut self, now: I) -> Option<Color> {
        match self.envelope.poll(now) {
            EnvelopeState::Expired => return None,
            EnvelopeState::Started => self.last_switch = Some(now),
            EnvelopeState::Running => {}
        }

        let last_switch = self.last_switch.unwrap_or(now);
        if now.millis_since(last_switch) >= self.hold().as_millis() {
            self.last_switch = Some(now);
            self.first_active = !self.first_active;
        }

        Some(if self.first_active {
            self.first
        } else {
            self.second
        })
    }

    fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    fn stop(&mut self) {
        self.envelope.reset();
    }
}
