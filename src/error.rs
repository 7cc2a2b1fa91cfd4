use derive_more::{Debug, Display, Error};

/// A specialized [`Result`](core::result::Result) for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from setting up the board or converting user input.
///
/// Rendering, tones, and keypad scans never fail at run time; their preconditions are
/// asserted instead.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The WS2812 program did not fit in the PIO instruction memory.
    #[display("PIO instruction memory is full; cannot load the LED program")]
    PioProgramLoad,

    /// The character is not on the 4x4 keypad.
    #[display("'{_0}' is not a keypad symbol")]
    UnknownKey(#[error(not(source))] char),
}
