use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, Pin, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use fixed::types::U24F8;

use super::ColorWordSink;
use crate::{Error, Result};

/// WS2812 data rate in kHz.
const WS2812_FREQUENCY_KHZ: u32 = 800;

/// PIO clock cycles per WS2812 bit (T1 + T2 + T3 in the program below).
const CYCLES_PER_BIT: u32 = 10;

/// Color words carry 24 bits of color above an unused low byte.
const BITS_PER_WORD: u8 = 24;

/// Streams color words to a WS2812 panel through one PIO state machine.
///
/// Each word is pushed into the state machine's TX FIFO (joined to 8 entries). When the
/// FIFO is full, [`write_word`](ColorWordSink::write_word) spins until a slot frees up.
pub struct PioColorSink<'d, PIO: Instance, const SM: usize> {
    state_machine: StateMachine<'d, PIO, SM>,
    _data_pin: Pin<'d, PIO>,
}

impl<'d, PIO: Instance, const SM: usize> PioColorSink<'d, PIO, SM> {
    /// Load the WS2812 program into `common` and start `state_machine` on `pin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PioProgramLoad`] if the program does not fit in PIO memory.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut state_machine: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Result<Self> {
        // Same program as embassy-rp's `PioWs2812Program`, driven here by blocking FIFO pushes.
        // Side-set drives the data line: high for T1, then high (1) or low (0) for T2, low for T3.
        let program = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "do_one:",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap",
        );
        let loaded = common.try_load_program(&program.program).map_err(|_| {
            error!("PioColorSink: no room for the WS2812 program");
            Error::PioProgramLoad
        })?;

        let data_pin = common.make_pio_pin(pin);
        let mut config = Config::default();
        config.use_program(&loaded, &[&data_pin]);

        // Clock math in kHz to stay within U24F8.
        let clock_khz = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_khz = U24F8::from_num(WS2812_FREQUENCY_KHZ * CYCLES_PER_BIT);
        config.clock_divider = clock_khz / bit_khz;
        config.fifo_join = FifoJoin::TxOnly;
        config.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_WORD,
            direction: ShiftDirection::Left,
        };

        state_machine.set_config(&config);
        state_machine.set_pin_dirs(Direction::Out, &[&data_pin]);
        state_machine.set_enable(true);
        info!(
            "PioColorSink: SM{} running, clock divider {}",
            SM,
            config.clock_divider.to_num::<f32>()
        );

        Ok(Self {
            state_machine,
            _data_pin: data_pin,
        })
    }
}

impl<PIO: Instance, const SM: usize> ColorWordSink for PioColorSink<'_, PIO, SM> {
    fn write_word(&mut self, word: u32) {
        let tx = self.state_machine.tx();
        while !tx.try_push(word) {
            core::hint::spin_loop();
        }
    }
}
