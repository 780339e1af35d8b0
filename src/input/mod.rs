//! Digital inputs read from the machine: switches, optos, lamp inserts and
//! plain drive lines.
//!
//! All readers wrap an `embedded-hal` [`InputPin`]. A pin that reports an
//! error reads as inactive.

mod insert;
mod switch;

pub use insert::{Insert, InsertState};
pub use switch::{OptoSwitch, Switch};

use crate::time::TimeInstant;
use embedded_hal::digital::InputPin;

/// A switch-like input with an immediate and a debounced read.
pub trait SwitchInput<I: TimeInstant> {
    /// Returns the instantaneous state (true = closed / ball present).
    fn is_closed(&mut self) -> bool;

    /// Returns true once the input has stayed closed for the configured
    /// wait time, and then not again until it has opened and closed anew.
    fn is_closed_debounced(&mut self, now: I) -> bool;
}

/// An active-high drive line (flasher, coil, motor, shaker) sensed by the
/// shield.
pub struct StdInput<P: InputPin> {
    pin: P,
}

impl<P: InputPin> StdInput<P> {
    /// Wraps an input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns true while the device is driven.
    pub fn is_active(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }
}
