use crate::colors::Color;
use crate::effect::Effect;
use crate::time::TimeInstant;
use palette::Srgb;

/// Default milliseconds per color step.
pub const DEFAULT_RAINBOW_SPEED: u32 = 7;

const STEPS_PER_PHASE: u64 = 256;
const PHASES: u64 = 6;

/// Continuous hue wheel: red, yellow, green, teal, blue, violet and back.
///
/// One cycle lasts `speed * 6 * 256` ms, split into six phases. In each phase
/// exactly one channel ramps between 0 and 255 while the other two hold the
/// values the previous phases ended on:
///
/// | phase | ramp          | ends at |
/// |-------|---------------|---------|
/// | 0     | red 0→255     | violet  |
/// | 1     | blue 255→0    | red     |
/// | 2     | green 0→255   | yellow  |
/// | 3     | red 255→0     | green   |
/// | 4     | blue 0→255    | teal    |
/// | 5     | green 255→0   | blue    |
///
/// The color depends only on the time since the cycle started, so polling
/// coarsely skips steps without drifting off the wheel. The wheel never
/// finishes; [`Effect::advance`] always returns a color.
#[derive(Debug, Clone, Copy)]
pub struct Rainbow<I: TimeInstant> {
    speed: u32,
    cycle_start: Option<I>,
}

impl<I: TimeInstant> Rainbow<I> {
    /// Creates a rainbow with [`DEFAULT_RAINBOW_SPEED`].
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_RAINBOW_SPEED)
    }

    /// Creates a rainbow advancing one step every `speed` ms (minimum 1).
    pub fn with_speed(speed: u32) -> Self {
        Self {
            speed: speed.max(1),
            cycle_start: None,
        }
    }

    /// Sets the step interval in ms. Zero is raised to 1.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    /// Returns the step interval in ms.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Length of one full trip around the wheel in ms.
    pub fn cycle_millis(&self) -> u64 {
        u64::from(self.speed) * STEPS_PER_PHASE * PHASES
    }

    fn color_at(&self, elapsed: u64) -> Color {
        let speed = u64::from(self.speed);
        let phase_len = speed * STEPS_PER_PHASE;
        let level = ((elapsed % phase_len) / speed) as u8;

        match elapsed / phase_len {
            0 => Srgb::new(level, 0, 255),
            1 => Srgb::new(255, 0, 255 - level),
            2 => Srgb::new(255, level, 0),
            3 => Srgb::new(255 - level, 255, 0),
            4 => Srgb::new(0, 255, level),
            _ => Srgb::new(0, 255 - level, 255),
        }
    }
}

impl<I: TimeInstant> Default for Rainbow<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: TimeInstant> Effect<I> for Rainbow<I> {
    type Frame = Color;

    fn advance(&mut self, now: I) -> Option<Color> {
        let start = *self.cycle_start.get_or_insert(now);
        let elapsed = now.millis_since(start);

        if elapsed >= self.cycle_millis() {
            self.cycle_start = Some(now);
            return Some(self.color_at(0));
        }

        Some(self.color_at(elapsed))
    }

    fn is_active(&self) -> bool {
        self.cycle_start.is_some()
    }

    fn stop(&mut self) {
        *self = Self::with_speed(self.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;

    #[test]
    fn speed_is_clamped_to_one() {
        let mut rainbow = Rainbow::<Millis>::with_speed(0);
        assert_eq!(rainbow.speed(), 1);
        rainbow.set_speed(0);
        assert_eq!(rainbow.speed(), 1);
        assert_eq!(rainbow.cycle_millis(), 1536);
    }

    #[test]
    fn stop_rewinds_to_phase_zero() {
        let mut rainbow = Rainbow::<Millis>::with_speed(1);
        rainbow.advance(Millis(0));
        rainbow.advance(Millis(700));
        rainbow.stop();
        assert!(!rainbow.is_active());
        assert_eq!(rainbow.advance(Millis(5000)), Some(Srgb::new(0, 0, 255)));
    }

    #[test]
    fn skipped_phase_ends_are_filled_in() {
        let mut rainbow = Rainbow::<Millis>::with_speed(1);
        rainbow.advance(Millis(0));
        assert_eq!(rainbow.advance(Millis(300)), Some(Srgb::new(255, 0, 211)));
        assert_eq!(rainbow.advance(Millis(1100)), Some(Srgb::new(0, 255, 76)));
    }
}
