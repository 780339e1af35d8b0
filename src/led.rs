//! LED hardware abstraction.
//!
//! [`RgbLed`] is the seam between strip logic and hardware. [`PwmRgbLed`]
//! implements it for three `embedded-hal` PWM channels; tests and other
//! drivers (shift registers, smart LEDs) can implement it directly.

use crate::colors::Color;
use embedded_hal::pwm::SetDutyCycle;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow a
/// [`RgbStrip`](crate::strip::RgbStrip) to drive it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Values are final channel intensities, already scaled for brightness.
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: Color);
}

/// RGB strip driven by three PWM channels.
///
/// Each 0..=255 channel value maps onto the channel's full duty range.
/// Common anode strips (MOSFET pulls the color low) invert the duty cycle.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Creates a new PWM-driven RGB LED.
    ///
    /// # Arguments
    /// * `red` - PWM channel for red
    /// * `green` - PWM channel for green
    /// * `blue` - PWM channel for blue
    /// * `common_anode` - true for inverted (common anode) wiring
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn duty(&self, value: u8) -> u16 {
        if self.common_anode {
            u16::from(255 - value)
        } else {
            u16::from(value)
        }
    }
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_color(&mut self, color: Color) {
        let (red, green, blue) = (self.duty(color.red), self.duty(color.green), self.duty(color.blue));
        let _ = self.red.set_duty_cycle_fraction(red, 255);
        let _ = self.green.set_duty_cycle_fraction(green, 255);
        let _ = self.blue.set_duty_cycle_fraction(blue, 255);
    }
}
