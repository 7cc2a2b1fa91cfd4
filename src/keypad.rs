//! A device abstraction for a 4x4 matrix keypad with settle-time debouncing.
//!
//! See [`Keypad`] for usage.

use core::convert::Infallible;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::Error;

// ============================================================================
// Constants
// ============================================================================

/// Wait after a key is detected before the scan returns.
///
/// This debounces the contacts and also limits how fast a held key repeats, since each
/// [`Keypad::scan`] reports at most one key.
pub const KEY_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Keypad rows.
pub const ROW_COUNT: usize = 4;

/// Keypad columns.
pub const COLUMN_COUNT: usize = 4;

/// Key at each `[row][column]`, matching the printed keypad.
pub const KEY_LAYOUT: [[Key; COLUMN_COUNT]; ROW_COUNT] = [
    [Key::One, Key::Two, Key::Three, Key::A],
    [Key::Four, Key::Five, Key::Six, Key::B],
    [Key::Seven, Key::Eight, Key::Nine, Key::C],
    [Key::Star, Key::Zero, Key::Hash, Key::D],
];

// ============================================================================
// Key
// ============================================================================

/// One of the 16 keypad symbols.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs, reason = "variant names are the printed symbols")]
pub enum Key {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// The character printed on the key.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::Star => '*',
            Self::Hash => '#',
        }
    }
}

impl TryFrom<char> for Key {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Error> {
        KEY_LAYOUT
            .iter()
            .flatten()
            .copied()
            .find(|key| key.as_char() == symbol)
            .ok_or(Error::UnknownKey(symbol))
    }
}

impl From<Key> for char {
    fn from(key: Key) -> Self {
        key.as_char()
    }
}

// ============================================================================
// Keypad
// ============================================================================

/// A device abstraction for a 4x4 matrix keypad.
///
/// # Hardware Requirements
///
/// Rows are outputs that idle high. Columns are inputs with pull-ups, so a column reads
/// low only while its row is driven low and the key joining them is held down.
///
/// # Scanning
///
/// [`scan`](Self::scan) drives each row low in turn (rows 1 to 4) and reads the columns
/// (1 to 4). The first low column wins: the scan waits [`KEY_SETTLE_DELAY`], restores the
/// row, and returns that key. Held keys further along the scan order are not reported.
/// When nothing is pressed the scan returns `None` without waiting.
///
/// # Example
///
/// ```rust,no_run
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
/// # struct Row;
/// # impl ErrorType for Row { type Error = Infallible; }
/// # impl OutputPin for Row {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// # struct Column;
/// # impl ErrorType for Column { type Error = Infallible; }
/// # impl InputPin for Column {
/// #     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(true) }
/// #     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(false) }
/// # }
/// # struct Delay;
/// # impl embedded_hal::delay::DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
/// use keypad_led_show::keypad::Keypad;
///
/// let mut keypad = Keypad::new([Row, Row, Row, Row], [Column, Column, Column, Column], Delay);
/// loop {
///     if let Some(_key) = keypad.scan() {
///         // Handle the key
///     }
/// }
/// ```
pub struct Keypad<R, C, D> {
    rows: [R; ROW_COUNT],
    columns: [C; COLUMN_COUNT],
    delay: D,
}

impl<R, C, D> Keypad<R, C, D>
where
    R: OutputPin<Error = Infallible>,
    C: InputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Take the row and column pins and park every row high.
    pub fn new(mut rows: [R; ROW_COUNT], columns: [C; COLUMN_COUNT], delay: D) -> Self {
        for row in &mut rows {
            let Ok(()) = row.set_high();
        }
        Self {
            rows,
            columns,
            delay,
        }
    }

    /// Scan the matrix once and return the first pressed key, if any.
    ///
    /// See the [struct-level docs](Self) for scan order and timing.
    pub fn scan(&mut self) -> Option<Key> {
        for (row, row_keys) in self.rows.iter_mut().zip(KEY_LAYOUT.iter()) {
            let Ok(()) = row.set_low();
            for (column, &key) in self.columns.iter_mut().zip(row_keys.iter()) {
                let Ok(is_low) = column.is_low();
                if is_low {
                    self.delay.delay_ms(settle_delay_ms());
                    let Ok(()) = row.set_high();
                    debug!("Keypad: {} pressed", key.as_char());
                    return Some(key);
                }
            }
            let Ok(()) = row.set_high();
        }
        None
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the settle delay is a few hundred milliseconds"
)]
const fn settle_delay_ms() -> u32 {
    KEY_SETTLE_DELAY.as_millis() as u32
}

#[cfg(test)]
mod tests {
    use super::{KEY_LAYOUT, Key, settle_delay_ms};
    use crate::Error;

    #[test]
    fn every_layout_symbol_round_trips_through_char() {
        for key in KEY_LAYOUT.iter().flatten().copied() {
            assert_eq!(Key::try_from(key.as_char()), Ok(key));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(Key::try_from('E'), Err(Error::UnknownKey('E')));
        assert_eq!(Key::try_from('\0'), Err(Error::UnknownKey('\0')));
    }

    #[test]
    fn settle_delay_is_200_ms() {
        assert_eq!(settle_delay_ms(), 200);
    }
}
