//! A device abstraction for a passive buzzer driven as a square wave.
//!
//! See [`Buzzer`] for usage.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// A tone request: frequency and how long to play it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency_hz: u32,
    /// Duration in milliseconds.
    pub duration_ms: u32,
}

impl Tone {
    /// Create a tone.
    #[must_use]
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Whether playing this tone would do anything. Animations only play audible tones.
    #[must_use]
    pub const fn is_audible(self) -> bool {
        self.frequency_hz > 0 && self.duration_ms > 0
    }
}

/// Pin timing for one [`Tone`].
///
/// Both values use integer division. A tone with `frequency_hz * duration_ms < 1000`
/// has zero cycles and is silent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneTiming {
    /// Time the pin spends high, and then low, per cycle.
    pub half_period_us: u32,
    /// Number of high/low cycles.
    pub cycles: u64,
}

impl ToneTiming {
    /// Compute the timing for `tone`.
    ///
    /// # Panics
    ///
    /// Panics if the frequency is 0.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        reason = "frequency is nonzero and the product of two u32s fits in u64"
    )]
    pub const fn of(tone: Tone) -> Self {
        assert!(tone.frequency_hz > 0, "tone frequency must be positive");
        Self {
            half_period_us: 500_000 / tone.frequency_hz,
            cycles: tone.frequency_hz as u64 * tone.duration_ms as u64 / 1000,
        }
    }

    /// True when truncation leaves nothing to play even though a duration was asked for.
    #[must_use]
    pub const fn is_lost_to_truncation(self, tone: Tone) -> bool {
        self.cycles == 0 && tone.duration_ms > 0
    }
}

/// A device abstraction for a passive buzzer on one digital output.
///
/// [`play`](Self::play) toggles the pin at a 50% duty cycle and blocks the caller for the
/// whole tone. The pin is low whenever `play` is not running.
///
/// # Example
///
/// ```rust
/// use keypad_led_show::tone::{Buzzer, Tone};
/// # use core::convert::Infallible;
/// # struct Pin;
/// # impl embedded_hal::digital::ErrorType for Pin { type Error = Infallible; }
/// # impl embedded_hal::digital::OutputPin for Pin {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// # struct Delay;
/// # impl embedded_hal::delay::DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
///
/// let mut buzzer = Buzzer::new(Pin, Delay);
/// buzzer.play(Tone::new(440, 100)); // 44 cycles of 1136 µs high, 1136 µs low
/// ```
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Buzzer<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Take the buzzer pin and drive it low.
    pub fn new(mut pin: P, delay: D) -> Self {
        let Ok(()) = pin.set_low();
        Self { pin, delay }
    }

    /// Play `tone`, returning when it has finished.
    ///
    /// # Panics
    ///
    /// Panics if the frequency is 0. Callers that build tones from data should check
    /// [`Tone::is_audible`] first.
    pub fn play(&mut self, tone: Tone) {
        let timing = ToneTiming::of(tone);
        if timing.is_lost_to_truncation(tone) {
            warn!(
                "Buzzer: {} Hz for {} ms truncates to zero cycles",
                tone.frequency_hz, tone.duration_ms
            );
        }
        trace!(
            "Buzzer: {} cycles of {} us",
            timing.cycles, timing.half_period_us
        );
        for _ in 0..timing.cycles {
            let Ok(()) = self.pin.set_high();
            self.delay.delay_us(timing.half_period_us);
            let Ok(()) = self.pin.set_low();
            self.delay.delay_us(timing.half_period_us);
        }
    }
}
