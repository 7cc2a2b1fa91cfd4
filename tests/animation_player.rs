#![allow(missing_docs)]
//! Host-level tests for show playback: frame writes, tones, and frame timing.

mod common;

use common::{Event, Log};
use keypad_led_show::animation::{PanelCommand, Player};
use keypad_led_show::color::{Color, decode_color_word};
use keypad_led_show::led_panel::{LedPanel, PIXEL_COUNT};
use keypad_led_show::shows::{self, PanelShow};
use keypad_led_show::tone::Buzzer;

type TestPlayer =
    Player<common::RecordingSink, common::RecordingPin, common::RecordingDelay, PIXEL_COUNT>;

fn player(log: &Log) -> TestPlayer {
    let buzzer = Buzzer::new(log.pin("buzzer"), log.delay());
    let player = Player::new(LedPanel::new(log.sink()), buzzer, log.delay());
    log.clear();
    player
}

fn play(show: &'static PanelShow) -> Log {
    let log = Log::new();
    player(&log).play(show);
    log
}

fn words(frame: &[Event]) -> Vec<u32> {
    frame
        .iter()
        .filter_map(|event| match event {
            Event::Word(word) => Some(*word),
            _ => None,
        })
        .collect()
}

fn beeps(frame: &[Event]) -> usize {
    frame
        .iter()
        .filter(|event| **event == Event::High("buzzer"))
        .count()
}

fn half_period(frame: &[Event]) -> Option<u32> {
    frame.iter().find_map(|event| match event {
        Event::DelayUs(us) => Some(*us),
        _ => None,
    })
}

#[test]
fn every_frame_writes_all_pixels_then_beeps_then_sleeps() {
    for show in shows::ALL {
        let log = play(show);
        let frames = log.frames();
        assert_eq!(frames.len(), show.iterations(), "{}", show.name());
        for frame in &frames {
            let first_non_word = frame
                .iter()
                .position(|event| !matches!(event, Event::Word(_)))
                .unwrap_or(frame.len());
            assert_eq!(first_non_word, PIXEL_COUNT, "{}", show.name());
            assert_eq!(words(frame).len(), PIXEL_COUNT, "{}", show.name());
        }
    }
}

#[test]
fn wave_scales_its_base_color_by_intensity() {
    let log = play(&shows::WAVE);
    let expected: Vec<u32> = shows::WAVE
        .animation()
        .frames()
        .iter()
        .flatten()
        .map(|&intensity| Color::new(1.0, 0.0, 1.0).scaled(intensity).to_word())
        .collect();
    assert_eq!(log.words(), expected);
    assert_eq!(log.sleeps_ms(), [142; 5]);
}

#[test]
fn pulse_runs_for_one_second_in_silence() {
    let log = play(&shows::PULSE);
    assert_eq!(log.sleeps_ms().iter().sum::<u32>(), 1000);
    assert!(!log.events().contains(&Event::High("buzzer")));
}

#[test]
fn duet_interleaves_colors_and_beeps_each_frame() {
    let log = play(&shows::DUET);
    for frame in log.frames() {
        for (pixel, word) in words(&frame).into_iter().enumerate() {
            let rgb = decode_color_word(word);
            if pixel % 2 == 0 {
                assert_eq!((rgb.g, rgb.b), (0, 0), "pixel {pixel}");
            } else {
                assert_eq!((rgb.r, rgb.g), (0, 0), "pixel {pixel}");
            }
        }
        assert_eq!(beeps(&frame), 44);
        assert_eq!(half_period(&frame), Some(1136));
    }
    assert_eq!(log.sleeps_ms(), [200; 5]);
}

#[test]
fn letters_change_color_and_climb_in_pitch() {
    let log = play(&shows::LETTERS);
    let frames = log.frames();
    assert_eq!(frames.len(), 7);
    for (index, frame) in frames.iter().enumerate() {
        let frequency = 440 + 50 * u32::try_from(index).unwrap();
        assert_eq!(
            half_period(frame),
            Some(500_000 / frequency),
            "letter {index}"
        );
    }
    let first_letter = words(&frames[0]);
    assert!(first_letter.iter().any(|&word| word != 0));
    assert!(first_letter.iter().all(|&word| word & 0xFF00_FF00 == 0));
    assert_eq!(log.sleeps_ms(), [500; 7]);
}

#[test]
fn melody_plays_its_bands() {
    let log = play(&shows::MELODY);
    let frames = log.frames();
    assert_eq!(frames.len(), 24);
    assert_eq!(half_period(&frames[0]), Some(500_000 / 261));
    assert_eq!(half_period(&frames[1]), Some(500_000 / 293));
    assert_eq!(half_period(&frames[2]), Some(500_000 / 329));
    assert_eq!(half_period(&frames[3]), Some(500_000 / 349));
    assert_eq!(half_period(&frames[13]), Some(500_000 / 392));
    for frame in &frames {
        assert!(words(frame).iter().all(|&word| word & 0xFFFF_0000 == 0));
    }
    assert_eq!(log.sleeps_ms(), [250; 24]);
}

#[test]
fn siren_alternates_red_and_blue_with_two_tones() {
    let log = play(&shows::SIREN);
    let frames = log.frames();
    assert_eq!(frames.len(), 9);
    for (iteration, frame) in frames.iter().enumerate() {
        let frame_words = words(frame);
        assert!(
            frame_words.iter().any(|&word| word != 0),
            "iteration {iteration}"
        );
        if iteration % 2 == 0 {
            assert!(frame_words.iter().all(|&word| word & 0xFF00_FF00 == 0));
            assert_eq!(beeps(frame), 333);
            assert_eq!(half_period(frame), Some(500));
        } else {
            assert!(frame_words.iter().all(|&word| word & 0xFFFF_0000 == 0));
            assert_eq!(beeps(frame), 233);
            assert_eq!(half_period(frame), Some(714));
        }
    }
    assert_eq!(log.sleeps_ms(), [333; 9]);
}

#[test]
fn countdown_and_firework_beep_every_frame() {
    let log = play(&shows::COUNTDOWN);
    assert!(log.frames().iter().all(|frame| beeps(frame) == 100));
    assert_eq!(log.sleeps_ms(), [1000; 6]);

    let log = play(&shows::FIREWORK);
    assert!(log.frames().iter().all(|frame| beeps(frame) == 48));
    assert_eq!(log.sleeps_ms(), [200; 10]);
}

#[test]
fn fill_writes_one_unscaled_pass_without_waiting() {
    let log = Log::new();
    let mut player = player(&log);

    player.perform(PanelCommand::Fill(shows::FILL_GRAY));

    assert_eq!(log.words(), [0x3333_3300; PIXEL_COUNT]);
    assert!(log.sleeps_ms().is_empty());
}
