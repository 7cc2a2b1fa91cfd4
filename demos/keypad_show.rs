//! Keypad show firmware: press a key, watch (and hear) the panel.
//!
//! Digits play the built-in shows, `A` `B` `C` `D` `#` fill the panel, and `*` reboots into
//! the USB bootloader for reflashing.

#![no_std]
#![no_main]

use core::convert::Infallible;
use core::panic;

use defmt::info;
use embassy_executor::Spawner;
use keypad_led_show::Result;
use keypad_led_show::board::Board;
use keypad_led_show::shows::{self, Command};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().unwrap_err();
    panic!("{err}");
}

fn inner_main() -> Result<Infallible> {
    info!("Starting keypad LED show");
    let peripherals = embassy_rp::init(Default::default());
    let mut board = Board::new(peripherals)?;

    // Clear whatever the panel powered up showing.
    board.player.fill(shows::FILL_BLACK);
    info!("Ready for keys");

    loop {
        let Some(key) = board.keypad.scan() else {
            continue;
        };
        info!("Key {} pressed", key.as_char());
        match shows::command_for_key(key) {
            Command::Panel(command) => board.player.perform(command),
            Command::Reflash => {
                info!("Rebooting into the USB bootloader");
                embassy_rp::rom_data::reset_to_usb_boot(0, 0);
            }
        }
    }
}
