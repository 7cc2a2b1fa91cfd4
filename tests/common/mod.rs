//! Recording fakes for the pins, delays, and LED line the device abstractions drive.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use keypad_led_show::keypad::{COLUMN_COUNT, ROW_COUNT};
use keypad_led_show::led_panel::ColorWordSink;

/// Pin names used in the log for keypad rows.
pub const ROW_NAMES: [&str; ROW_COUNT] = ["row1", "row2", "row3", "row4"];

/// One observable action, in the order it happened.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    Word(u32),
    High(&'static str),
    Low(&'static str),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

/// A shared, ordered event log.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn words(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Word(word) => Some(word),
                _ => None,
            })
            .collect()
    }

    pub fn sleeps_ms(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::DelayMs(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    /// Events between frame sleeps: one entry per `DelayMs`, without the sleep itself.
    pub fn frames(&self) -> Vec<Vec<Event>> {
        let mut frames = Vec::new();
        let mut current = Vec::new();
        for event in self.events() {
            if let Event::DelayMs(_) = event {
                frames.push(std::mem::take(&mut current));
            } else {
                current.push(event);
            }
        }
        assert!(current.is_empty(), "events after the last sleep: {current:?}");
        frames
    }

    pub fn pin(&self, name: &'static str) -> RecordingPin {
        RecordingPin {
            name,
            log: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    pub fn sink(&self) -> RecordingSink {
        RecordingSink { log: self.clone() }
    }
}

pub struct RecordingPin {
    name: &'static str,
    log: Log,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::Low(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::High(self.name));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub struct RecordingSink {
    log: Log,
}

impl ColorWordSink for RecordingSink {
    fn write_word(&mut self, word: u32) {
        self.log.push(Event::Word(word));
    }
}

// ============================================================================
// Keypad matrix
// ============================================================================

#[derive(Default)]
struct MatrixState {
    rows_low: [bool; ROW_COUNT],
    pressed: Vec<(usize, usize)>,
}

/// A 4x4 switch matrix: a column reads low while a pressed key joins it to a low row.
#[derive(Clone)]
pub struct Matrix {
    state: Rc<RefCell<MatrixState>>,
    log: Log,
}

impl Matrix {
    pub fn new(log: &Log, pressed: &[(usize, usize)]) -> Self {
        let state = MatrixState {
            pressed: pressed.to_vec(),
            ..MatrixState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            log: log.clone(),
        }
    }

    pub fn rows(&self) -> [MatrixRow; ROW_COUNT] {
        std::array::from_fn(|row| MatrixRow {
            row,
            matrix: self.clone(),
        })
    }

    pub fn columns(&self) -> [MatrixColumn; COLUMN_COUNT] {
        std::array::from_fn(|column| MatrixColumn {
            column,
            matrix: self.clone(),
        })
    }

    pub fn rows_low(&self) -> [bool; ROW_COUNT] {
        self.state.borrow().rows_low
    }
}

pub struct MatrixRow {
    row: usize,
    matrix: Matrix,
}

impl MatrixRow {
    fn drive(&mut self, low: bool) {
        self.matrix.state.borrow_mut().rows_low[self.row] = low;
        let name = ROW_NAMES[self.row];
        let event = if low {
            Event::Low(name)
        } else {
            Event::High(name)
        };
        self.matrix.log.push(event);
    }
}

impl ErrorType for MatrixRow {
    type Error = Infallible;
}

impl OutputPin for MatrixRow {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(true);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(false);
        Ok(())
    }
}

pub struct MatrixColumn {
    column: usize,
    matrix: Matrix,
}

impl ErrorType for MatrixColumn {
    type Error = Infallible;
}

impl InputPin for MatrixColumn {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        let state = self.matrix.state.borrow();
        let joined = state
            .pressed
            .iter()
            .any(|&(row, column)| column == self.column && state.rows_low[row]);
        Ok(joined)
    }
}
