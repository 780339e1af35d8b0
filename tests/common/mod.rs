//! Shared test infrastructure for pinlight-shield integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};
use pinlight_shield::{Color, RgbLed};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: Color,
    color_history: heapless::Vec<Color, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Color::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> Color {
        self.current_color
    }

    pub fn color_history(&self) -> &[Color] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Color) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock PWM channel
// ============================================================================

/// Mock PWM channel with an 8-bit duty range that records every duty written
pub struct MockPwm {
    duty: u16,
    duty_history: heapless::Vec<u16, 64>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: 0,
            duty_history: heapless::Vec::new(),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn duty_history(&self) -> &[u16] {
        &self.duty_history
    }
}

impl PwmErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        let _ = self.duty_history.push(duty);
        Ok(())
    }
}

// ============================================================================
// Mock input pin
// ============================================================================

/// Mock input pin; clones share the same level so a test can keep a handle
/// after handing the pin to a reader
#[derive(Clone)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn low() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
        }
    }

    pub fn high() -> Self {
        Self {
            level: Rc::new(Cell::new(true)),
        }
    }

    pub fn set_high(&self) {
        self.level.set(true);
    }

    pub fn set_low(&self) {
        self.level.set(false);
    }
}

impl DigitalErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

// ============================================================================
// Mock delay
// ============================================================================

/// Mock delay that only accumulates the requested time
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_millis(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use pinlight_shield::{BLUE, COLOR_OFF, GREEN, RED, WHITE};

/// Shorthand for an 8-bit color
pub fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::new(red, green, blue)
}
