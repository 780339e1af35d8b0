//! Integration tests for colors module

use pinlight_shield::Srgb;
use pinlight_shield::colors::{self, blue, green, pack, red, to_packed, unpack, unpack_channels, unpack_wide};

#[test]
fn unpack_reverses_pack() {
    for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (1, 2, 3), (255, 0, 128), (17, 200, 99)] {
        let packed = pack(r, g, b);
        assert_eq!(unpack(packed), Srgb::new(r, g, b));
        assert_eq!(unpack_channels(packed), [r, g, b]);
        assert_eq!(unpack_wide(packed), [i32::from(r), i32::from(g), i32::from(b)]);
    }
}

#[test]
fn pack_matches_arithmetic_definition() {
    let (r, g, b) = (0x12u32, 0xABu32, 0x07u32);
    assert_eq!(pack(0x12, 0xAB, 0x07), r * 65536 + g * 256 + b);
}

#[test]
fn single_channel_extraction() {
    let orange = 0xFF8000;
    assert_eq!(red(orange), 0xFF);
    assert_eq!(green(orange), 0x80);
    assert_eq!(blue(orange), 0x00);
}

#[test]
fn color_round_trips_through_packed_form() {
    let teal = Srgb::new(0, 128, 128);
    assert_eq!(to_packed(teal), 0x008080);
    assert_eq!(colors::unpack(to_packed(teal)), teal);
}
