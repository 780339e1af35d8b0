#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbStrip`**: Drives one RGB strip through an `RgbLed`, with a brightness factor
//! - **`PwmOutput`**: Drives one 12V PWM line (LED, plain strip, shaker motor)
//! - **`Effect`**: A non-blocking, time-driven animation advanced with the current instant
//! - **`Rainbow`**, **`MultiColorFlash`**, **`TwoColorFlash`**, **`TwoColorFade`**, **`FlashBurst`**: The built-in effects
//! - **`Envelope`**: The shared "active for a total duration" lifetime of timed effects
//! - **`Switch`**, **`OptoSwitch`**: Debounced switch readers (`SwitchInput`)
//! - **`Insert`**: Classifies a lamp-matrix insert as off, on or blinking
//! - **`TimeInstant`**: Trait to implement for your timing system (`Millis` is provided)
//!
//! Nothing here reads a clock or blocks, except the documented `make_flashes`
//! helpers. Sample the time once per loop iteration and pass it to every call.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod effect;
pub mod input;
pub mod led;
pub mod output;
pub mod strip;
pub mod time;

pub use colors::Color;
pub use effect::{
    Effect, EffectError, Envelope, EnvelopeState, FlashBurst, MultiColorFlash, PlayOrder, Rainbow,
    TwoColorFade, TwoColorFlash,
};
pub use input::{Insert, InsertState, OptoSwitch, StdInput, Switch, SwitchInput};
pub use led::{PwmRgbLed, RgbLed};
pub use output::{Brightness, PwmOutput};
pub use strip::RgbStrip;
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant};

pub const COLOR_OFF: Color = Srgb::new(0, 0, 0);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);
pub const WHITE: Color = Srgb::new(255, 255, 255);
