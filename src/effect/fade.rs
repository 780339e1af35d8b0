use crate::colors::{Color, clamp_channel};
use crate::effect::{Effect, EffectError, Envelope, EnvelopeState};
use crate::time::{TimeDuration, TimeInstant};
use palette::Srgb;

/// Fixed-point scale of the fade accumulators.
const SCALE: i32 = 100;

const MIN_STEP: u8 = 1;
const MAX_STEP: u8 = 5;

/// Ping-pong fade between two colors.
///
/// All three channels move in lockstep: the channel with the largest distance
/// moves `step` units per tick and the others move proportionally less, so
/// every channel reaches its endpoint on the same tick. Accumulators are kept
/// at 100x precision to hold the fractional proportional steps.
///
/// When any channel passes beyond its endpoint, all channels snap to the
/// endpoint they were heading for and every direction reverses.
#[derive(Debug, Clone, Copy)]
pub struct TwoColorFade<I: TimeInstant> {
    low: [i32; 3],
    high: [i32; 3],
    step: [i32; 3],
    direction: [i32; 3],
    level: [i32; 3],
    speed: I::Duration,
    envelope: Envelope<I>,
    last_step: Option<I>,
}

impl<I: TimeInstant> TwoColorFade<I> {
    /// Creates a fade starting at `from`, heading for `to`.
    ///
    /// `step` is clamped to `1..=5` units per tick; a tick happens at most
    /// once every `speed`.
    ///
    /// # Errors
    /// * `IdenticalFadeColors` - `from` and `to` are the same color
    pub fn new(
        from: Color,
        to: Color,
        step: u8,
        speed: I::Duration,
        total: I::Duration,
    ) -> Result<Self, EffectError> {
        let from = channels(from);
        let to = channels(to);
        if from == to {
            return Err(EffectError::IdenticalFadeColors);
        }

        let step_size = i32::from(step.clamp(MIN_STEP, MAX_STEP)) * SCALE;

        let distance: [i32; 3] = core::array::from_fn(|i| (from[i] - to[i]).abs());
        let lead = distance
            .iter()
            .copied()
            .max()
            .unwrap_or(1)
            .max(1);

        Ok(Self {
            low: core::array::from_fn(|i| from[i].min(to[i]) * SCALE),
            high: core::array::from_fn(|i| from[i].max(to[i]) * SCALE),
            step: core::array::from_fn(|i| step_size * distance[i] / lead),
            direction: core::array::from_fn(|i| if from[i] < to[i] { 1 } else { -1 }),
            level: core::array::from_fn(|i| from[i] * SCALE),
            speed,
            envelope: Envelope::new(total),
            last_step: None,
        })
    }

    /// Per-channel step in fixed-point units (100 = one color unit).
    pub fn step(&self) -> [i32; 3] {
        self.step
    }

    /// Per-channel direction of travel, `1` or `-1`.
    pub fn direction(&self) -> [i32; 3] {
        self.direction
    }

    /// The color the fade currently shows.
    pub fn current_color(&self) -> Color {
        let [red, green, blue] = self.level.map(|v| clamp_channel(v / SCALE));
        Srgb::new(red, green, blue)
    }

    fn overshot(&self, i: usize) -> bool {
        if self.direction[i] == 1 {
            self.level[i] > self.high[i]
        } else {
            self.level[i] < self.low[i]
        }
    }

    fn reverse(&mut self) {
        for i in 0..3 {
            self.level[i] = if self.direction[i] == 1 {
                self.high[i]
            } else {
                self.low[i]
            };
            self.direction[i] = -self.direction[i];
        }
    }
}

impl<I: TimeInstant> Effect<I> for TwoColorFade<I> {
    type Frame = Color;

    fn advance(&mut self, now: I) -> Option<Color> {
        match self.envelope.poll(now) {
            EnvelopeState::Expired => return None,
            EnvelopeState::Started => self.last_step = Some(now),
            EnvelopeState::Running => {}
        }

        let last_step = self.last_step.unwrap_or(now);
        if now.millis_since(last_step) >= self.speed.as_millis() {
            self.last_step = Some(now);
            for i in 0..3 {
                self.level[i] += self.direction[i] * self.step[i];
            }
            if (0..3).any(|i| self.overshot(i)) {
                self.reverse();
            }
        }

        Some(self.current_color())
    }

    fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    fn stop(&mut self) {
        self.envelope.reset();
    }
}

fn channels(color: Color) -> [i32; 3] {
    let (red, green, blue) = color.into_components();
    [i32::from(red), i32::from(green), i32::from(blue)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::unpack;
    use crate::time::{Millis, MillisDuration};

    #[test]
    fn identical_endpoints_are_rejected() {
        let result = TwoColorFade::<Millis>::new(
            unpack(0x102030),
            unpack(0x102030),
            1,
            MillisDuration(10),
            MillisDuration(1000),
        );
        assert!(matches!(result, Err(EffectError::IdenticalFadeColors)));
    }

    #[test]
    fn steps_are_proportional_to_channel_distance() {
        let fade = TwoColorFade::<Millis>::new(
            unpack(0x000000),
            Srgb::new(200, 100, 50),
            2,
            MillisDuration(10),
            MillisDuration(1000),
        )
        .unwrap();
        assert_eq!(fade.step(), [200, 100, 50]);
        assert_eq!(fade.direction(), [1, 1, 1]);
    }

    #[test]
    fn step_size_is_clamped() {
        let fade = TwoColorFade::<Millis>::new(
            unpack(0xFF0000),
            unpack(0x000000),
            9,
            MillisDuration(10),
            MillisDuration(1000),
        )
        .unwrap();
        assert_eq!(fade.step(), [500, 0, 0]);
        assert_eq!(fade.direction(), [-1, -1, -1]);
    }
}
