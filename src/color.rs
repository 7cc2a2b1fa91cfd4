//! Colors as channel fractions, and the codec that packs them into LED color words.
//!
//! Channels are fractions in `0.0..=1.0`. The codec multiplies each by 255 and
//! **truncates** (no rounding) to 8 bits, then places the bytes in the order the panel
//! shifts them out: green in the most significant byte, then red, then blue, with the
//! lowest byte left at zero.
//!
//! ```
//! use keypad_led_show::color::{color_word, decode_color_word};
//!
//! let word = color_word(0.0, 1.0, 0.5); // blue, red, green
//! assert_eq!(word, 0x7F_FF_00_00);
//! let rgb = decode_color_word(word);
//! assert_eq!((rgb.r, rgb.g, rgb.b), (255, 127, 0));
//! ```
//!
//! Values outside `0.0..=1.0` are a caller error. Debug builds assert on them; release
//! builds saturate in the float-to-byte conversion.

use smart_leds::RGB8;

/// A color as three channel fractions in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    /// Red fraction.
    pub red: f64,
    /// Green fraction.
    pub green: f64,
    /// Blue fraction.
    pub blue: f64,
}

impl Color {
    /// All channels off.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Full red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Full green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Full blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a color from red, green, and blue fractions.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Multiply every channel by `intensity`.
    #[must_use]
    pub fn scaled(self, intensity: f64) -> Self {
        Self::new(
            self.red * intensity,
            self.green * intensity,
            self.blue * intensity,
        )
    }

    /// Pack into a color word (see [`color_word`]).
    #[must_use]
    pub fn to_word(self) -> u32 {
        color_word(self.blue, self.red, self.green)
    }

    /// Truncate each channel to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> RGB8 {
        RGB8::new(
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue),
        )
    }
}

/// Pack blue, red, and green fractions into a color word.
///
/// Argument order follows the panel firmware convention (blue first). Each channel is
/// `floor(fraction * 255)`; the word is `G << 24 | R << 16 | B << 8`.
#[must_use]
pub fn color_word(blue: f64, red: f64, green: f64) -> u32 {
    let red = u32::from(channel_byte(red));
    let green = u32::from(channel_byte(green));
    let blue = u32::from(channel_byte(blue));
    (green << 24) | (red << 16) | (blue << 8)
}

/// Unpack a color word back into 8-bit channels.
#[must_use]
pub const fn decode_color_word(word: u32) -> RGB8 {
    let [green, red, blue, _unused] = word.to_be_bytes();
    RGB8::new(red, green, blue)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "truncation to a byte is the wire contract"
)]
fn channel_byte(fraction: f64) -> u8 {
    debug_assert!(
        (0.0..=1.0).contains(&fraction),
        "channel fraction must be within 0.0..=1.0"
    );
    (fraction * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::{Color, channel_byte, color_word, decode_color_word};

    #[test]
    fn channel_byte_truncates() {
        assert_eq!(channel_byte(0.0), 0);
        assert_eq!(channel_byte(1.0), 255);
        // 0.5 * 255 = 127.5
        assert_eq!(channel_byte(0.5), 127);
        // 0.2 * 255 = 51.000000000000007
        assert_eq!(channel_byte(0.2), 51);
        // 0.999 * 255 = 254.745
        assert_eq!(channel_byte(0.999), 254);
    }

    #[test]
    fn lowest_byte_is_unused() {
        for word in [
            color_word(1.0, 1.0, 1.0),
            color_word(0.3, 0.6, 0.9),
            color_word(0.0, 0.0, 0.0),
        ] {
            assert_eq!(word & 0xFF, 0);
        }
    }

    #[test]
    fn channels_land_in_wire_order() {
        assert_eq!(color_word(0.0, 0.0, 1.0), 0xFF_00_00_00);
        assert_eq!(color_word(0.0, 1.0, 0.0), 0x00_FF_00_00);
        assert_eq!(color_word(1.0, 0.0, 0.0), 0x00_00_FF_00);
    }

    #[test]
    fn color_to_word_matches_codec_argument_order() {
        let color = Color::new(0.8, 0.5, 0.2);
        assert_eq!(color.to_word(), color_word(0.2, 0.8, 0.5));
        assert_eq!(decode_color_word(color.to_word()), color.to_rgb8());
    }

    #[test]
    fn scaled_multiplies_each_channel() {
        let scaled = Color::new(1.0, 0.8, 0.0).scaled(0.5);
        assert_eq!(scaled.to_rgb8(), smart_leds::RGB8::new(127, 102, 0));
    }
}
