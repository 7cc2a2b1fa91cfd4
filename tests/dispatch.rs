#![allow(missing_docs)]
//! Host-level tests for the key-to-command table.

use keypad_led_show::animation::PanelCommand;
use keypad_led_show::color::Color;
use keypad_led_show::keypad::{KEY_LAYOUT, Key};
use keypad_led_show::shows::{self, Command};

fn show_name(key: Key) -> Option<&'static str> {
    match shows::command_for_key(key) {
        Command::Panel(PanelCommand::Play(show)) => Some(show.name()),
        _ => None,
    }
}

fn fill_color(key: Key) -> Option<Color> {
    match shows::command_for_key(key) {
        Command::Panel(PanelCommand::Fill(color)) => Some(color),
        _ => None,
    }
}

#[test]
fn digits_play_shows_in_catalog_order() {
    let digits = "0123456789"
        .chars()
        .map(|symbol| Key::try_from(symbol).unwrap());
    let names: Vec<&str> = digits.filter_map(show_name).collect();
    let catalog: Vec<&str> = shows::ALL.iter().map(|show| show.name()).collect();
    assert_eq!(names, catalog);
    assert_eq!(show_name(Key::Seven), Some("siren"));
}

#[test]
fn letters_and_hash_fill() {
    assert_eq!(fill_color(Key::A), Some(Color::BLACK));
    assert_eq!(fill_color(Key::B), Some(Color::new(0.0, 0.0, 1.0)));
    assert_eq!(fill_color(Key::C), Some(Color::new(0.8, 0.0, 0.0)));
    assert_eq!(fill_color(Key::D), Some(Color::new(0.0, 0.5, 0.0)));
    assert_eq!(fill_color(Key::Hash), Some(Color::new(0.2, 0.2, 0.2)));
}

#[test]
fn star_reflashes() {
    assert!(matches!(shows::command_for_key(Key::Star), Command::Reflash));
}

#[test]
fn every_key_is_bound_exactly_once() {
    let mut plays = 0;
    let mut fills = 0;
    let mut reflashes = 0;
    for &key in KEY_LAYOUT.iter().flatten() {
        match shows::command_for_key(key) {
            Command::Panel(PanelCommand::Play(_)) => plays += 1,
            Command::Panel(PanelCommand::Fill(_)) => fills += 1,
            Command::Reflash => reflashes += 1,
        }
    }
    assert_eq!((plays, fills, reflashes), (10, 5, 1));
}
