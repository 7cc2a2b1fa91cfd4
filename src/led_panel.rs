//! A device abstraction for a square `NeoPixel`-style (WS2812) LED panel.
//!
//! Pixels are streamed one color word at a time, in raster order, over a single data line.
//! There is no frame buffer: every word is visible as soon as its bits shift out, and a
//! frame is exactly one pass over all [`PIXEL_COUNT`] pixels.
//!
//! See [`LedPanel`] for usage.

use crate::color::Color;

#[cfg(feature = "pico1")]
mod pio_sink;
#[cfg(feature = "pico1")]
pub use pio_sink::PioColorSink;

/// Panel width in LEDs.
pub const PANEL_WIDTH: usize = 5;

/// Panel height in LEDs.
pub const PANEL_HEIGHT: usize = 5;

/// Number of LEDs on the panel. Every frame table row has exactly this many entries.
#[allow(clippy::arithmetic_side_effects, reason = "compile-time constant")]
pub const PIXEL_COUNT: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// The serial line that carries color words to the panel.
///
/// `write_word` blocks until the line has accepted the word. On the board that means
/// waiting for room in the PIO transmit FIFO, which paces the caller to the LED bit rate.
pub trait ColorWordSink {
    /// Queue one color word for transmission, waiting for room if needed.
    fn write_word(&mut self, word: u32);
}

impl<S: ColorWordSink + ?Sized> ColorWordSink for &mut S {
    fn write_word(&mut self, word: u32) {
        (**self).write_word(word);
    }
}

/// A device abstraction for an `N`-pixel LED panel.
///
/// # Example
///
/// ```rust
/// use keypad_led_show::color::Color;
/// use keypad_led_show::led_panel::{ColorWordSink, LedPanel};
///
/// struct Words(Vec<u32>);
/// impl ColorWordSink for Words {
///     fn write_word(&mut self, word: u32) {
///         self.0.push(word);
///     }
/// }
///
/// let mut panel = LedPanel::<_, 4>::new(Words(Vec::new()));
/// panel.write_frame(&[Color::RED, Color::GREEN, Color::BLUE, Color::BLACK]);
/// panel.fill(Color::new(0.2, 0.2, 0.2));
/// assert_eq!(panel.into_inner().0.len(), 8);
/// ```
pub struct LedPanel<S, const N: usize> {
    sink: S,
}

impl<S: ColorWordSink, const N: usize> LedPanel<S, N> {
    /// Create a panel that streams through `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Stream one full frame, pixel 0 first.
    pub fn write_frame(&mut self, pixels: &[Color; N]) {
        for pixel in pixels {
            self.sink.write_word(pixel.to_word());
        }
    }

    /// Stream the same color to every pixel.
    pub fn fill(&mut self, color: Color) {
        let word = color.to_word();
        for _ in 0..N {
            self.sink.write_word(word);
        }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
