//! Packed color helpers.
//!
//! Strip colors are 8-bit [`Color`] triples. Sketch-style code often carries
//! them as a single `0xRRGGBB` value instead, so this module converts between
//! the two forms. All functions are total; bits above the low 24 are ignored.

use palette::Srgb;

/// An 8-bit-per-channel RGB color.
pub type Color = Srgb<u8>;

/// Packs three channels into `0xRRGGBB`.
#[inline]
pub const fn pack(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Packs a [`Color`] into `0xRRGGBB`.
#[inline]
pub fn to_packed(color: Color) -> u32 {
    pack(color.red, color.green, color.blue)
}

/// Unpacks `0xRRGGBB` into a [`Color`].
#[inline]
pub const fn unpack(value: u32) -> Color {
    Srgb::new(red(value), green(value), blue(value))
}

/// Unpacks `0xRRGGBB` into `[red, green, blue]` bytes.
#[inline]
pub const fn unpack_channels(value: u32) -> [u8; 3] {
    [red(value), green(value), blue(value)]
}

/// Unpacks `0xRRGGBB` into signed channel values, for arithmetic that may
/// leave the 0..=255 range (fades, brightness math).
#[inline]
pub const fn unpack_wide(value: u32) -> [i32; 3] {
    [red(value) as i32, green(value) as i32, blue(value) as i32]
}

/// Red channel of a packed color.
#[inline]
pub const fn red(value: u32) -> u8 {
    ((value >> 16) & 0xFF) as u8
}

/// Green channel of a packed color.
#[inline]
pub const fn green(value: u32) -> u8 {
    ((value >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color.
#[inline]
pub const fn blue(value: u32) -> u8 {
    (value & 0xFF) as u8
}

/// Clamps a signed channel value into `0..=255`.
#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_places_channels_in_rrggbb_order() {
        assert_eq!(pack(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(pack(255, 0, 0), 0xFF0000);
    }

    #[test]
    fn unpack_ignores_high_byte() {
        assert_eq!(unpack(0xAB_FF8000), Srgb::new(255, 128, 0));
        assert_eq!(unpack_channels(0xFF_000001), [0, 0, 1]);
    }

    #[test]
    fn clamp_channel_saturates_both_ends() {
        assert_eq!(clamp_channel(-5), 0);
        assert_eq!(clamp_channel(300), 255);
        assert_eq!(clamp_channel(77), 77);
    }
}
