//! Integration tests for PwmOutput

mod common;
use common::*;

use pinlight_shield::{Envelope, FlashBurst, Millis, MillisDuration, PwmOutput};

#[test]
fn new_output_switches_off() {
    let output = PwmOutput::new(MockPwm::new());
    assert_eq!(output.pin().duty_history(), &[0]);
    assert_eq!(output.brightness().percent(), 100);
}

#[test]
fn output_clamps_level() {
    let mut output = PwmOutput::new(MockPwm::new());
    output.output(400);
    assert_eq!(output.pin().duty(), 255);
    output.output(-7);
    assert_eq!(output.pin().duty(), 0);
    output.output(90);
    assert_eq!(output.pin().duty(), 90);
}

#[test]
fn out_of_range_brightness_resets_to_full() {
    let mut output = PwmOutput::new(MockPwm::new());
    output.set_brightness(40);
    output.output(200);
    assert_eq!(output.pin().duty(), 80);

    output.set_brightness(101);
    assert_eq!(output.brightness().percent(), 100);
    output.set_brightness(25);
    output.set_brightness(-1);
    assert_eq!(output.brightness().percent(), 100);
}

#[test]
fn timed_output_switches_off_after_latched_duration() {
    let mut output = PwmOutput::new(MockPwm::new());
    let mut pulse = Envelope::<Millis>::new(MillisDuration(0));

    assert!(output.output_with_delay(200, MillisDuration(100), Millis(1000), &mut pulse));
    assert_eq!(output.pin().duty(), 200);

    // A running pulse keeps its latched duration.
    assert!(output.output_with_delay(200, MillisDuration(10), Millis(1050), &mut pulse));
    assert!(output.output_with_delay(200, MillisDuration(10), Millis(1100), &mut pulse));
    assert_eq!(output.pin().duty(), 200);

    assert!(!output.output_with_delay(200, MillisDuration(100), Millis(1101), &mut pulse));
    assert_eq!(output.pin().duty(), 0);
    assert!(!pulse.is_active());
}

#[test]
fn timed_output_can_be_retriggered() {
    let mut output = PwmOutput::new(MockPwm::new());
    let mut pulse = Envelope::<Millis>::new(MillisDuration(0));

    output.output_with_delay(255, MillisDuration(20), Millis(0), &mut pulse);
    assert!(!output.output_with_delay(255, MillisDuration(20), Millis(21), &mut pulse));

    assert!(output.output_with_delay(128, MillisDuration(50), Millis(500), &mut pulse));
    assert_eq!(output.pin().duty(), 128);
    assert_eq!(pulse.started_at(), Some(Millis(500)));
    assert!(!output.output_with_delay(128, MillisDuration(50), Millis(551), &mut pulse));
}

#[test]
fn timed_output_survives_counter_wrap() {
    let mut output = PwmOutput::new(MockPwm::new());
    let mut pulse = Envelope::<Millis>::new(MillisDuration(0));

    output.output_with_delay(255, MillisDuration(100), Millis(u32::MAX - 20), &mut pulse);
    assert!(output.output_with_delay(255, MillisDuration(100), Millis(50), &mut pulse));
    assert!(!output.output_with_delay(255, MillisDuration(100), Millis(80), &mut pulse));
}

#[test]
fn blocking_flashes_leave_output_on() {
    let mut output = PwmOutput::new(MockPwm::new());
    let mut delay = MockDelay::new();

    output.make_flashes(180, 2, 25, &mut delay);

    assert_eq!(output.pin().duty_history(), &[0, 180, 0, 180]);
    assert_eq!(delay.total_millis(), 75);
    assert_eq!(output.current_level(), 180);
}

#[test]
fn play_drives_level_effects() {
    let mut output = PwmOutput::new(MockPwm::new());
    output.set_brightness(50);
    let mut burst = FlashBurst::<Millis, u8>::level(200, 2, MillisDuration(10));

    assert!(output.play(&mut burst, Millis(0)));
    assert_eq!(output.pin().duty(), 100);
    assert!(output.play(&mut burst, Millis(10)));
    assert_eq!(output.pin().duty(), 0);
    assert!(output.play(&mut burst, Millis(20)));
    assert!(!output.play(&mut burst, Millis(30)));
    assert_eq!(output.current_level(), 200);
}

#[test]
fn coarse_polled_burst_leaves_level_on() {
    let mut output = PwmOutput::new(MockPwm::new());
    let mut burst = FlashBurst::<Millis, u8>::level(200, 3, MillisDuration(10));

    assert!(output.play(&mut burst, Millis(0)));
    assert!(output.play(&mut burst, Millis(35)));
    assert_eq!(output.pin().duty(), 0);

    assert!(!output.play(&mut burst, Millis(90)));
    assert_eq!(output.pin().duty(), 200);
    assert_eq!(output.current_level(), 200);
}
