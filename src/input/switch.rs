use crate::input::SwitchInput;
use crate::time::{TimeDuration, TimeInstant};
use embedded_hal::digital::InputPin;

#[derive(Debug, Clone, Copy)]
enum Contact<I> {
    Open,
    Closed { since: I },
    Reported,
}

/// Edge-triggered hold timer shared by [`Switch`] and [`OptoSwitch`].
#[derive(Debug, Clone, Copy)]
struct Debouncer<I: TimeInstant> {
    wait: I::Duration,
    contact: Contact<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    fn new(wait: I::Duration) -> Self {
        Self {
            wait,
            contact: Contact::Open,
        }
    }

    fn update(&mut self, closed: bool, now: I) -> bool {
        if !closed {
            self.contact = Contact::Open;
            return false;
        }

        let since = match self.contact {
            Contact::Reported => return false,
            Contact::Closed { since } => since,
            Contact::Open => {
                self.contact = Contact::Closed { since: now };
                now
            }
        };

        if now.millis_since(since) >= self.wait.as_millis() {
            self.contact = Contact::Reported;
            true
        } else {
            false
        }
    }
}

/// A mechanical switch wired active-high (closed reads high).
///
/// The debounced read is meant for spots a ball may just roll over, like the
/// ball trough: it reports a closure only after the switch has stayed closed
/// for `wait`.
pub struct Switch<P: InputPin, I: TimeInstant> {
    pin: P,
    debouncer: Debouncer<I>,
}

impl<P: InputPin, I: TimeInstant> Switch<P, I> {
    /// Wraps an input pin with the given hold time.
    pub fn new(pin: P, wait: I::Duration) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(wait),
        }
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin, I: TimeInstant> SwitchInput<I> for Switch<P, I> {
    fn is_closed(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }

    fn is_closed_debounced(&mut self, now: I) -> bool {
        let closed = self.is_closed();
        self.debouncer.update(closed, now)
    }
}

/// An optical switch.
///
/// The light barrier conducts while no ball is present, so the pin reads low
/// when a ball interrupts it. Reads are inverted to match [`Switch`]: `true`
/// means a ball is present.
pub struct OptoSwitch<P: InputPin, I: TimeInstant> {
    pin: P,
    debouncer: Debouncer<I>,
}

impl<P: InputPin, I: TimeInstant> OptoSwitch<P, I> {
    /// Wraps an input pin with the given hold time.
    pub fn new(pin: P, wait: I::Duration) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(wait),
        }
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin, I: TimeInstant> SwitchInput<I> for OptoSwitch<P, I> {
    fn is_closed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    fn is_closed_debounced(&mut self, now: I) -> bool {
        let closed = self.is_closed();
        self.debouncer.update(closed, now)
    }
}
