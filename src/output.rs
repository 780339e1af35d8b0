//! Single channel 12V outputs and the brightness scale shared with strips.
//!
//! [`PwmOutput`] drives anything hanging off one PWM line of the shield: a
//! single LED, a plain LED strip, a shaker motor.

use crate::effect::{Effect, Envelope, EnvelopeState};
use crate::time::TimeInstant;
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

/// Output brightness as a percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// 100 percent.
    pub const FULL: Self = Brightness(100);

    /// Clamps `percent` into `0..=100`.
    pub fn clamped(percent: i32) -> Self {
        Brightness(percent.clamp(0, 100) as u8)
    }

    /// Uses `percent` if it lies in `0..=100`, full brightness otherwise.
    pub fn or_full(percent: i32) -> Self {
        match u8::try_from(percent) {
            Ok(p) if p <= 100 => Brightness(p),
            _ => Self::FULL,
        }
    }

    /// Returns the percentage.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Scales a channel value, truncating: `value * percent / 100`.
    pub fn scale(self, value: u8) -> u8 {
        (u16::from(value) * u16::from(self.0) / 100) as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

/// A single PWM output with a brightness scale.
pub struct PwmOutput<P: SetDutyCycle> {
    pin: P,
    brightness: Brightness,
    level: u8,
}

impl<P: SetDutyCycle> PwmOutput<P> {
    /// Takes ownership of a PWM channel and switches it off.
    pub fn new(pin: P) -> Self {
        let mut output = Self {
            pin,
            brightness: Brightness::FULL,
            level: 0,
        };
        output.output(0);
        output
    }

    /// Sets brightness in percent.
    ///
    /// Anything outside `0..=100` silently selects full brightness. Note this
    /// differs from [`RgbStrip::set_brightness`](crate::strip::RgbStrip::set_brightness),
    /// which clamps.
    pub fn set_brightness(&mut self, percent: i32) {
        self.brightness = Brightness::or_full(percent);
    }

    /// Returns the brightness.
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Writes `level` (clamped to `0..=255`) scaled by brightness.
    pub fn output(&mut self, level: i32) {
        self.write(level.clamp(0, 255) as u8);
    }

    /// Switches the output off.
    pub fn switch_off(&mut self) {
        self.write(0);
    }

    /// Returns the last level requested, before brightness scaling.
    pub fn current_level(&self) -> u8 {
        self.level
    }

    /// Drives `level` for `duration`, then switches off, without blocking.
    ///
    /// Call this every loop iteration with the same `pulse`. The first call
    /// while `pulse` is idle latches `now` and `duration`; the duration of a
    /// running pulse is not changed by later calls. Once strictly more than
    /// the latched duration has elapsed the output is switched off and
    /// `pulse` returns to idle, so the next call starts a new pulse.
    ///
    /// # Returns
    /// `true` while the pulse is running, `false` on the call that ends it.
    pub fn output_with_delay<I: TimeInstant>(
        &mut self,
        level: i32,
        duration: I::Duration,
        now: I,
        pulse: &mut Envelope<I>,
    ) -> bool {
        if !pulse.is_active() {
            pulse.set_duration(duration);
        }

        match pulse.poll(now) {
            EnvelopeState::Expired => {
                #[cfg(feature = "defmt")]
                defmt::trace!("timed output expired");
                self.switch_off();
                false
            }
            EnvelopeState::Started | EnvelopeState::Running => {
                self.output(level);
                true
            }
        }
    }

    /// Flashes `flashes` times, blocking for the whole burst.
    ///
    /// The output stays on after the last pulse. Nothing else in the loop
    /// runs meanwhile; prefer [`FlashBurst`](crate::effect::FlashBurst) with
    /// [`PwmOutput::play`] when other effects or inputs must keep going.
    pub fn make_flashes<D: DelayNs>(&mut self, level: i32, flashes: u32, length_ms: u32, delay: &mut D) {
        for flash in 1..=flashes {
            self.output(level);
            delay.delay_ms(length_ms);
            if flash < flashes {
                self.switch_off();
                delay.delay_ms(length_ms);
            }
        }
    }

    /// Advances `effect` and writes its level.
    ///
    /// Returns whether the effect is still running; a finished effect writes
    /// only its [`Effect::final_frame`], if any.
    pub fn play<I, E>(&mut self, effect: &mut E, now: I) -> bool
    where
        I: TimeInstant,
        E: Effect<I, Frame = u8>,
    {
        match effect.advance(now) {
            Some(level) => {
                self.write(level);
                true
            }
            None => {
                if let Some(level) = effect.final_frame() {
                    self.write(level);
                }
                false
            }
        }
    }

    /// Returns a reference to the PWM channel.
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Releases the PWM channel.
    pub fn release(self) -> P {
        self.pin
    }

    fn write(&mut self, level: u8) {
        self.level = level;
        let _ = self
            .pin
            .set_duty_cycle_fraction(u16::from(self.brightness.scale(level)), 255);
    }
}
