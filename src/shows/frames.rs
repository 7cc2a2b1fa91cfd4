//! Frame tables for the built-in shows, one 5x5 grid per frame.

use crate::animation::Frame;
use crate::led_panel::PIXEL_COUNT;

/// Diagonal brightness wave.
#[rustfmt::skip]
pub static WAVE: [Frame<PIXEL_COUNT>; 5] = [
    [
        0.0, 0.2, 0.4, 0.6, 0.8,
        1.0, 0.8, 0.6, 0.4, 0.2,
        0.0, 0.2, 0.4, 0.6, 0.8,
        1.0, 0.8, 0.6, 0.4, 0.2,
        0.0, 0.2, 0.4, 0.6, 0.8,
    ],
    [
        0.8, 0.0, 0.2, 0.4, 0.6,
        0.8, 1.0, 0.8, 0.6, 0.4,
        0.2, 0.0, 0.2, 0.4, 0.6,
        0.8, 1.0, 0.8, 0.6, 0.4,
        0.2, 0.0, 0.2, 0.4, 0.6,
    ],
    [
        0.6, 0.8, 0.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.8, 0.6,
        0.4, 0.2, 0.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.8, 0.6,
        0.4, 0.2, 0.0, 0.2, 0.4,
    ],
    [
        0.4, 0.6, 0.8, 0.0, 0.2,
        0.4, 0.6, 0.8, 1.0, 0.8,
        0.6, 0.4, 0.2, 0.0, 0.2,
        0.4, 0.6, 0.8, 1.0, 0.8,
        0.6, 0.4, 0.2, 0.0, 0.2,
    ],
    [
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
    ],
];

/// Alternating pixels brightening in steps.
#[rustfmt::skip]
pub static PULSE: [Frame<PIXEL_COUNT>; 5] = [
    [
        0.0, 0.2, 0.0, 0.2, 0.0,
        0.2, 0.0, 0.2, 0.0, 0.2,
        0.0, 0.2, 0.0, 0.2, 0.0,
        0.2, 0.0, 0.2, 0.0, 0.2,
        0.0, 0.2, 0.0, 0.2, 0.0,
    ],
    [
        0.2, 0.4, 0.2, 0.4, 0.2,
        0.4, 0.2, 0.4, 0.2, 0.4,
        0.2, 0.4, 0.2, 0.4, 0.2,
        0.4, 0.2, 0.4, 0.2, 0.4,
        0.2, 0.4, 0.2, 0.4, 0.2,
    ],
    [
        0.4, 0.6, 0.4, 0.6, 0.4,
        0.6, 0.4, 0.6, 0.4, 0.6,
        0.4, 0.6, 0.4, 0.6, 0.4,
        0.6, 0.4, 0.6, 0.4, 0.6,
        0.4, 0.6, 0.4, 0.6, 0.4,
    ],
    [
        0.6, 0.8, 0.6, 0.8, 0.6,
        0.8, 0.6, 0.8, 0.6, 0.8,
        0.6, 0.8, 0.6, 0.8, 0.6,
        0.8, 0.6, 0.8, 0.6, 0.8,
        0.6, 0.8, 0.6, 0.8, 0.6,
    ],
    [
        0.8, 1.0, 0.8, 1.0, 0.8,
        1.0, 0.8, 1.0, 0.8, 1.0,
        0.8, 1.0, 0.8, 1.0, 0.8,
        1.0, 0.8, 1.0, 0.8, 1.0,
        0.8, 1.0, 0.8, 1.0, 0.8,
    ],
];

/// Row gradients that flip direction every frame.
#[rustfmt::skip]
pub static RIPPLE: [Frame<PIXEL_COUNT>; 5] = [
    [
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
    ],
    [
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
    ],
    [
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
    ],
    [
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
    ],
    [
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.2, 0.4, 0.6, 0.8, 1.0,
    ],
];

/// Shifting gradients, drawn with two interleaved colors.
#[rustfmt::skip]
pub static DUET: [Frame<PIXEL_COUNT>; 5] = [
    [
        0.8, 0.6, 0.4, 0.2, 0.0,
        1.0, 0.8, 0.6, 0.4, 0.2,
        0.8, 0.6, 0.4, 0.2, 1.0,
        0.8, 0.6, 0.4, 0.2, 1.0,
        0.8, 0.6, 0.4, 0.2, 0.0,
    ],
    [
        0.2, 0.4, 0.6, 0.8, 1.0,
        0.0, 0.2, 0.4, 0.6, 0.8,
        1.0, 0.2, 0.4, 0.6, 0.8,
        1.0, 0.2, 0.4, 0.6, 0.8,
        1.0, 0.0, 0.2, 0.4, 0.6,
    ],
    [
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
        1.0, 0.8, 0.6, 0.4, 0.2,
    ],
    [
        0.4, 0.6, 0.8, 1.0, 0.2,
        0.4, 0.6, 0.8, 1.0, 0.2,
        0.4, 0.6, 0.8, 1.0, 0.4,
        0.6, 0.8, 1.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.2, 0.4,
    ],
    [
        0.6, 0.8, 1.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.2, 0.4,
        0.6, 0.8, 1.0, 0.6, 0.8,
        1.0, 0.2, 0.4, 0.6, 0.8,
    ],
];

/// A lit column sweeping across the panel and back.
#[rustfmt::skip]
pub static ZIGZAG: [Frame<PIXEL_COUNT>; 10] = [
    [
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
    ],
    [
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    [
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
    ],
    [
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
    ],
    [
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
    ],
];

/// The letters L, O, R, E, N, Z, O.
#[rustfmt::skip]
pub static LETTERS: [Frame<PIXEL_COUNT>; 7] = [
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 1.0, 1.0,
        1.0, 0.0, 1.0, 0.0, 1.0,
        1.0, 1.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
];

/// Note glyphs, one per beat of the melody.
#[rustfmt::skip]
pub static MELODY: [Frame<PIXEL_COUNT>; 24] = [
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Alternating diagonal stripes.
#[rustfmt::skip]
pub static SIREN: [Frame<PIXEL_COUNT>; 6] = [
    [
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
    ],
    [
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
    ],
    [
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
    ],
    [
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
    ],
    [
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
    ],
    [
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
    ],
];

/// The digits 5 down to 0.
#[rustfmt::skip]
pub static COUNTDOWN: [Frame<PIXEL_COUNT>; 6] = [
    [
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.0, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.0,
        0.8, 0.8, 0.8, 0.8, 0.8,
    ],
    [
        0.8, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.0,
        0.8, 0.0, 0.0, 0.0, 0.8,
    ],
    [
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.0, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.0, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
    ],
    [
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.0,
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.0, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
    ],
    [
        0.0, 0.0, 0.8, 0.0, 0.0,
        0.0, 0.0, 0.8, 0.0, 0.0,
        0.0, 0.0, 0.8, 0.0, 0.0,
        0.0, 0.0, 0.8, 0.0, 0.0,
        0.0, 0.0, 0.8, 0.0, 0.0,
    ],
    [
        0.8, 0.8, 0.8, 0.8, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.0, 0.0, 0.0, 0.8,
        0.8, 0.8, 0.8, 0.8, 0.8,
    ],
];

/// A rising spark that bursts and twinkles.
#[rustfmt::skip]
pub static FIREWORK: [Frame<PIXEL_COUNT>; 10] = [
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];
