//! The built-in show catalog and the table that maps each keypad key to a command.
//!
//! Digit keys play a show, letter keys and `#` fill the panel with a solid color, and `*`
//! asks the firmware to reboot into the USB bootloader.

mod frames;

use crate::animation::{Animation, ColorRule, Melody, NoteBand, PanelCommand, Show, ToneRule};
use crate::color::Color;
use crate::keypad::Key;
use crate::led_panel::PIXEL_COUNT;
use crate::tone::Tone;

/// A show sized for the panel.
pub type PanelShow = Show<PIXEL_COUNT>;

/// What a key press asks for.
#[derive(Clone, Copy, Debug)]
pub enum Command {
    /// Something the [`Player`](crate::animation::Player) runs.
    Panel(PanelCommand<PIXEL_COUNT>),
    /// Reboot into the USB bootloader so new firmware can be flashed.
    Reflash,
}

/// The command bound to `key`.
///
/// ```rust
/// use keypad_led_show::keypad::Key;
/// use keypad_led_show::shows::{self, Command};
///
/// assert!(matches!(shows::command_for_key(Key::Star), Command::Reflash));
/// ```
#[must_use]
pub fn command_for_key(key: Key) -> Command {
    let panel = match key {
        Key::Zero => PanelCommand::Play(&WAVE),
        Key::One => PanelCommand::Play(&PULSE),
        Key::Two => PanelCommand::Play(&RIPPLE),
        Key::Three => PanelCommand::Play(&DUET),
        Key::Four => PanelCommand::Play(&ZIGZAG),
        Key::Five => PanelCommand::Play(&LETTERS),
        Key::Six => PanelCommand::Play(&MELODY),
        Key::Seven => PanelCommand::Play(&SIREN),
        Key::Eight => PanelCommand::Play(&COUNTDOWN),
        Key::Nine => PanelCommand::Play(&FIREWORK),
        Key::A => PanelCommand::Fill(FILL_BLACK),
        Key::B => PanelCommand::Fill(FILL_BLUE),
        Key::C => PanelCommand::Fill(FILL_RED),
        Key::D => PanelCommand::Fill(FILL_GREEN),
        Key::Hash => PanelCommand::Fill(FILL_GRAY),
        Key::Star => return Command::Reflash,
    };
    Command::Panel(panel)
}

// ============================================================================
// Fills
// ============================================================================

/// Key `A`: all pixels off.
pub const FILL_BLACK: Color = Color::BLACK;
/// Key `B`.
pub const FILL_BLUE: Color = Color::new(0.0, 0.0, 1.0);
/// Key `C`.
pub const FILL_RED: Color = Color::new(0.8, 0.0, 0.0);
/// Key `D`.
pub const FILL_GREEN: Color = Color::new(0.0, 0.5, 0.0);
/// Key `#`.
pub const FILL_GRAY: Color = Color::new(0.2, 0.2, 0.2);

// ============================================================================
// Shows
// ============================================================================

/// Key `0`: magenta diagonal wave.
pub static WAVE: PanelShow = Show::new(
    "wave",
    Animation::new(&frames::WAVE, Color::new(1.0, 0.0, 1.0), 7),
);

/// Key `1`: amber pulse.
pub static PULSE: PanelShow = Show::new(
    "pulse",
    Animation::new(&frames::PULSE, Color::new(1.0, 0.8, 0.0), 5),
);

/// Key `2`: blue ripple.
pub static RIPPLE: PanelShow = Show::new(
    "ripple",
    Animation::new(&frames::RIPPLE, Color::new(0.0, 0.0, 1.0), 5),
);

/// Key `3`: dark red and blue on alternate pixels, with a short A4 beep per frame.
pub static DUET: PanelShow = Show::new(
    "duet",
    Animation::new(&frames::DUET, Color::new(0.5, 0.0, 0.0), 5),
)
.with_color_rule(ColorRule::Interleaved(Color::new(0.0, 0.0, 1.0)))
.with_tone_rule(ToneRule::Fixed(Tone::new(440, 100)));

/// Key `4`: cyan column sweep.
pub static ZIGZAG: PanelShow = Show::new(
    "zigzag",
    Animation::new(&frames::ZIGZAG, Color::new(0.0, 1.0, 1.0), 3),
);

/// Colors of the seven letters, in order.
pub static LETTER_COLORS: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::new(1.0, 1.0, 0.0),
    Color::new(1.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 1.0),
    Color::new(1.0, 0.5, 0.0),
];

/// Key `5`: spells a name one colored letter at a time, each a step higher in pitch.
pub static LETTERS: PanelShow =
    Show::new("letters", Animation::new(&frames::LETTERS, Color::BLACK, 2))
        .with_color_rule(ColorRule::PerFrame(&LETTER_COLORS))
        .with_tone_rule(ToneRule::Rising {
            start_hz: 440,
            step_hz: 50,
            duration_ms: 200,
        });

const fn blue(level: f64) -> Color {
    Color::new(0.0, 0.0, level)
}

/// Blue level of each note glyph, brighter on the downbeats.
pub static MELODY_COLORS: [Color; 24] = [
    blue(1.0),
    blue(0.8),
    blue(0.6),
    blue(0.4),
    blue(0.4),
    blue(0.4),
    blue(1.0),
    blue(0.8),
    blue(1.0),
    blue(0.8),
    blue(0.8),
    blue(0.8),
    blue(1.0),
    blue(0.2),
    blue(0.4),
    blue(0.6),
    blue(0.6),
    blue(0.6),
    blue(1.0),
    blue(0.8),
    blue(0.6),
    blue(0.4),
    blue(0.4),
    blue(0.4),
];

/// Frame-to-pitch bands for the melody. Unlisted frames play G4.
pub static MELODY_BANDS: [NoteBand; 4] = [
    NoteBand {
        frequency_hz: 261,
        frames: &[0, 6, 8, 12, 18],
    },
    NoteBand {
        frequency_hz: 293,
        frames: &[1, 7, 9, 10, 11, 19],
    },
    NoteBand {
        frequency_hz: 329,
        frames: &[2, 15, 16, 17, 20],
    },
    NoteBand {
        frequency_hz: 349,
        frames: &[3, 4, 5, 14, 21, 22, 23],
    },
];

/// Key `6`: a 24-note tune with a glyph per note.
pub static MELODY: PanelShow = Show::new("melody", Animation::new(&frames::MELODY, Color::BLACK, 4))
    .with_color_rule(ColorRule::PerFrame(&MELODY_COLORS))
    .with_tone_rule(ToneRule::Melody(Melody {
        bands: &MELODY_BANDS,
        otherwise_hz: 392,
        note_ms: 250,
    }));

const SIREN_ANIMATION: Animation<PIXEL_COUNT> = Animation::new(&frames::SIREN, Color::RED, 3);

/// Key `7`: three seconds of red/blue stripes with a two-tone wail, one tone per frame.
pub static SIREN: PanelShow = Show::new("siren", SIREN_ANIMATION)
    .with_color_rule(ColorRule::Alternating {
        even: Color::RED,
        odd: Color::BLUE,
    })
    .with_tone_rule(ToneRule::Alternating {
        even: Tone::new(1000, SIREN_ANIMATION.frame_delay_ms()),
        odd: Tone::new(700, SIREN_ANIMATION.frame_delay_ms()),
    })
    .repeat_for_seconds(3);

/// Key `8`: digits 5 to 0, one per second, each with a low beep.
pub static COUNTDOWN: PanelShow = Show::new(
    "countdown",
    Animation::new(&frames::COUNTDOWN, Color::new(0.5, 0.0, 0.0), 1),
)
.with_tone_rule(ToneRule::Fixed(Tone::new(200, 500)));

/// Key `9`: cyan firework with a short chirp per frame.
pub static FIREWORK: PanelShow = Show::new(
    "firework",
    Animation::new(&frames::FIREWORK, Color::new(0.0, 1.0, 1.0), 5),
)
.with_tone_rule(ToneRule::Fixed(Tone::new(600, 80)));

/// Every show, in key order `0` to `9`.
pub static ALL: [&PanelShow; 10] = [
    &WAVE, &PULSE, &RIPPLE, &DUET, &ZIGZAG, &LETTERS, &MELODY, &SIREN, &COUNTDOWN, &FIREWORK,
];
