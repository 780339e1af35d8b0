use crate::time::{TimeDuration, TimeInstant};
use embedded_hal::digital::InputPin;

/// Display state of a playfield insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InsertState {
    /// Dark.
    Off = 0,
    /// Steadily lit.
    On = 1,
    /// Blinking.
    Blinking = 2,
    /// Just lit; not yet known whether it stays on or blinks.
    Undefined = 3,
}

impl InsertState {
    /// Numeric code of the state, `0..=3`.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<InsertState> for u8 {
    fn from(state: InsertState) -> Self {
        state.code()
    }
}

/// A lamp-matrix insert sensed through the shield.
///
/// Lamp matrices never drive a lamp continuously; an "on" insert sees short
/// pulses (around 25 ms on WPC machines). [`Insert::is_on`] bridges gaps
/// shorter than `filter_delay` so the insert reads steadily on.
///
/// [`Insert::blink_state`] classifies the filtered signal:
///
/// | state     | filtered on                        | filtered off                 |
/// |-----------|------------------------------------|------------------------------|
/// | Off       | Undefined                          | Off                          |
/// | Undefined | rising edge: Blinking; held past `on_delay`: On | off past `off_delay`: Off |
/// | Blinking  | held past `on_delay`: On           | off past `off_delay`: Off    |
/// | On        | On                                 | Off                          |
///
/// Any cell without a condition met keeps the current state. `on_delay` is
/// measured from the last filtered-off reading, `off_delay` from the last raw
/// high reading; both must exceed a blink half-period or a blinking insert
/// will be misread.
pub struct Insert<P: InputPin, I: TimeInstant> {
    pin: P,
    filter_delay: I::Duration,
    on_delay: I::Duration,
    off_delay: I::Duration,
    last_high: Option<I>,
    last_low: Option<I>,
    lit: bool,
    classified_lit: bool,
    state: InsertState,
}

impl<P: InputPin, I: TimeInstant> Insert<P, I> {
    /// Wraps an input pin.
    ///
    /// # Arguments
    /// * `filter_delay` - Longest gap between drive pulses of a lit insert
    /// * `on_delay` - How long a blinking insert must stay lit to count as on
    /// * `off_delay` - How long a blinking insert must stay dark to count as off
    pub fn new(
        pin: P,
        filter_delay: I::Duration,
        on_delay: I::Duration,
        off_delay: I::Duration,
    ) -> Self {
        Self {
            pin,
            filter_delay,
            on_delay,
            off_delay,
            last_high: None,
            last_low: None,
            lit: false,
            classified_lit: false,
            state: InsertState::Off,
        }
    }

    /// Returns whether the insert is lit, bridging gaps between drive pulses.
    pub fn is_on(&mut self, now: I) -> bool {
        let lit = if self.pin.is_high().unwrap_or(false) {
            self.last_high = Some(now);
            true
        } else if self.last_high.is_some_and(|t| now.millis_since(t) <= self.filter_delay.as_millis()) {
            true
        } else {
            self.last_low = Some(now);
            false
        };

        if lit && !self.lit && self.last_low.is_none() {
            // Never seen dark: hold times count from the first light.
            self.last_low = Some(now);
        }
        self.lit = lit;
        lit
    }

    /// Polls the pin and returns the classified state.
    pub fn blink_state(&mut self, now: I) -> InsertState {
        // Edges are taken between classifier polls, so extra `is_on` calls in
        // between cannot swallow one.
        let was_lit = self.classified_lit;
        let lit = self.is_on(now);
        self.classified_lit = lit;

        let next = match (self.state, lit) {
            (InsertState::Off, false) => InsertState::Off,
            (InsertState::Off, true) => InsertState::Undefined,
            (InsertState::On, true) => InsertState::On,
            (InsertState::On, false) => InsertState::Off,
            (InsertState::Undefined, true) if !was_lit => InsertState::Blinking,
            (InsertState::Undefined | InsertState::Blinking, true) => {
                if Self::exceeded(self.last_low, self.on_delay, now) {
                    InsertState::On
                } else {
                    self.state
                }
            }
            (InsertState::Undefined | InsertState::Blinking, false) => {
                if Self::exceeded(self.last_high, self.off_delay, now) {
                    InsertState::Off
                } else {
                    self.state
                }
            }
        };

        if next != self.state {
            #[cfg(feature = "defmt")]
            defmt::trace!("insert {} -> {}", self.state, next);
            self.state = next;
        }
        next
    }

    /// Returns the last classified state without polling.
    pub fn state(&self) -> InsertState {
        self.state
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }

    fn exceeded(since: Option<I>, limit: I::Duration, now: I) -> bool {
        since.is_none_or(|t| now.millis_since(t) > limit.as_millis())
    }
}
