//! RGB strip driver with brightness control.
//!
//! Provides [`RgbStrip`], which owns an [`RgbLed`], applies the brightness
//! scale to every write, and plays [`Effect`]s onto the LED.

use crate::COLOR_OFF;
use crate::colors::{Color, clamp_channel, unpack};
use crate::effect::Effect;
use crate::led::RgbLed;
use crate::output::Brightness;
use crate::time::TimeInstant;
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// An RGB LED strip with a brightness factor.
///
/// Colors passed in are the nominal colors; the LED receives each channel
/// multiplied by `brightness / 100`, truncated.
pub struct RgbStrip<L: RgbLed> {
    led: L,
    brightness: Brightness,
    current_color: Color,
}

impl<L: RgbLed> RgbStrip<L> {
    /// Creates a strip and switches it off.
    ///
    /// `brightness` is clamped into `0..=100`.
    pub fn new(led: L, brightness: i32) -> Self {
        let mut strip = Self {
            led,
            brightness: Brightness::clamped(brightness),
            current_color: COLOR_OFF,
        };
        strip.switch_off();
        strip
    }

    /// Sets brightness in percent, clamped into `0..=100`.
    ///
    /// Takes effect with the next write.
    pub fn set_brightness(&mut self, percent: i32) {
        self.brightness = Brightness::clamped(percent);
    }

    /// Returns the brightness.
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Lights the strip in `color`.
    pub fn light(&mut self, color: Color) {
        self.current_color = color;
        let scaled = Srgb::new(
            self.brightness.scale(color.red),
            self.brightness.scale(color.green),
            self.brightness.scale(color.blue),
        );
        self.led.set_color(scaled);
    }

    /// Lights the strip in a packed `0xRRGGBB` color.
    pub fn light_packed(&mut self, color: u32) {
        self.light(unpack(color));
    }

    /// Lights the strip from signed channel values, each clamped to `0..=255`.
    pub fn light_channels(&mut self, red: i32, green: i32, blue: i32) {
        self.light(Srgb::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        ));
    }

    /// Switches all channels off.
    pub fn switch_off(&mut self) {
        self.light(COLOR_OFF);
    }

    /// Returns the last color written, before brightness scaling.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Flashes `flashes` times, blocking for the whole burst.
    ///
    /// Off periods happen only between flashes; the strip is left lit after
    /// the last one. Nothing else in the loop runs meanwhile; prefer
    /// [`FlashBurst`](crate::effect::FlashBurst) with [`RgbStrip::play`] when
    /// other effects or inputs must keep going.
    pub fn make_flashes<D: DelayNs>(&mut self, color: Color, flashes: u32, length_ms: u32, delay: &mut D) {
        for flash in 1..=flashes {
            self.light(color);
            delay.delay_ms(length_ms);
            if flash < flashes {
                self.switch_off();
                delay.delay_ms(length_ms);
            }
        }
    }

    /// Advances `effect` to `now` and lights its color.
    ///
    /// Returns whether the effect is still running. A finished effect writes
    /// only its [`Effect::final_frame`], if any; otherwise the strip keeps its
    /// last color until the caller decides (typically [`RgbStrip::switch_off`]).
    pub fn play<I, E>(&mut self, effect: &mut E, now: I) -> bool
    where
        I: TimeInstant,
        E: Effect<I, Frame = Color>,
    {
        match effect.advance(now) {
            Some(color) => {
                self.light(color);
                true
            }
            None => {
                if let Some(color) = effect.final_frame() {
                    self.light(color);
                }
                false
            }
        }
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Releases the LED.
    pub fn release(self) -> L {
        self.led
    }
}
