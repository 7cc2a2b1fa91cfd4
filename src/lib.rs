//! Keypad-driven light and sound shows for a Pico with a 5x5 `NeoPixel` (WS2812) panel and a buzzer.
//!
//! A 4x4 matrix keypad picks one of ten preprogrammed animations (or a static fill). Each
//! animation is rendered onto the panel frame by frame while a buzzer plays a tone in
//! lock-step with the frames.
//!
//! # Glossary
//!
//! - **Frame table:** ordered per-pixel intensity arrays (`[f64; N]`) that make up one animation.
//! - **Intensity:** per-pixel brightness in `0.0..=1.0`, multiplied into a base or override color.
//! - **Color word:** a packed `u32` in the LED wire order (green, red, blue, then an unused byte).
//! - **Settle delay:** the fixed wait after a key is detected. It debounces the key and throttles repeats.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the RP2040 peripheral that shifts color words out with WS2812 bit timing.
//!
//! # Layout
//!
//! The portable core is written against `embedded-hal` traits and builds on the host:
//! [`color`], [`tone`], [`led_panel`], [`keypad`], [`animation`], and [`shows`].
//! The `embedded` feature adds [`board`], which binds the core to RP2040 pins and PIO0.
#![cfg_attr(not(test), no_std)]

// Compile-time check: the board layer needs both the chip and the architecture.
#[cfg(all(feature = "pico1", not(feature = "arm")))]
compile_error!("The 'pico1' board feature requires the 'arm' architecture feature");

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod animation;
#[cfg(feature = "pico1")]
pub mod board;
pub mod color;
mod error;
pub mod keypad;
pub mod led_panel;
#[cfg(feature = "pico1")]
#[doc(hidden)]
pub mod pio_irqs;
pub mod shows;
pub mod tone;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
