//! Pin assignments and peripheral setup for the RP2040 (Pico 1) keypad show board.
//!
//! | Signal      | GPIO                  | Mode                        |
//! |-------------|-----------------------|-----------------------------|
//! | Rows 1-4    | 10, 9, 8, 6           | output, idle high           |
//! | Columns 1-4 | 5, 4, 3, 2            | input, pull-up, active low  |
//! | Buzzer      | 21                    | output, idle low            |
//! | LED data    | 7                     | PIO0 state machine 0        |

use embassy_rp::Peripherals;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{Common, Pio};
use embassy_time::Delay;

use crate::Result;
use crate::animation::Player;
use crate::keypad::Keypad;
use crate::led_panel::{LedPanel, PIXEL_COUNT, PioColorSink};
use crate::pio_irqs::Pio0Irqs;
use crate::tone::Buzzer;

/// The keypad as wired on this board.
pub type BoardKeypad = Keypad<Output<'static>, Input<'static>, Delay>;

/// The player as wired on this board.
pub type BoardPlayer = Player<PioColorSink<'static, PIO0, 0>, Output<'static>, Delay, PIXEL_COUNT>;

/// Every peripheral the firmware drives.
pub struct Board {
    /// The 4x4 keypad.
    pub keypad: BoardKeypad,
    /// The LED panel and buzzer.
    pub player: BoardPlayer,
    _pio_common: Common<'static, PIO0>,
}

impl Board {
    /// Claim the board's pins and start the LED state machine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PioProgramLoad`](crate::Error::PioProgramLoad) if the WS2812
    /// program does not fit in PIO0.
    pub fn new(peripherals: Peripherals) -> Result<Self> {
        info!("Board: rows GPIO10 GPIO9 GPIO8 GPIO6, columns GPIO5 GPIO4 GPIO3 GPIO2");
        info!("Board: buzzer GPIO21, LED data GPIO7 on PIO0 SM0");

        let rows = [
            Output::new(peripherals.PIN_10, Level::High),
            Output::new(peripherals.PIN_9, Level::High),
            Output::new(peripherals.PIN_8, Level::High),
            Output::new(peripherals.PIN_6, Level::High),
        ];
        let columns = [
            Input::new(peripherals.PIN_5, Pull::Up),
            Input::new(peripherals.PIN_4, Pull::Up),
            Input::new(peripherals.PIN_3, Pull::Up),
            Input::new(peripherals.PIN_2, Pull::Up),
        ];
        let keypad = Keypad::new(rows, columns, Delay);

        let Pio {
            mut common, sm0, ..
        } = Pio::new(peripherals.PIO0, Pio0Irqs);
        let sink = PioColorSink::new(&mut common, sm0, peripherals.PIN_7)?;
        let buzzer = Buzzer::new(Output::new(peripherals.PIN_21, Level::Low), Delay);
        let player = Player::new(LedPanel::new(sink), buzzer, Delay);

        Ok(Self {
            keypad,
            player,
            _pio_common: common,
        })
    }
}
