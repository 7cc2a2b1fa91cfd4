//! The animation engine: frame tables, per-pixel color rules, per-frame tone rules, and
//! the [`Player`] that renders them onto an [`LedPanel`] in step with a [`Buzzer`].
//!
//! Every show shares one skeleton. For each step the player
//! 1. streams one full frame (`N` color words),
//! 2. plays at most one tone, blocking until it ends,
//! 3. sleeps `1000 / fps` milliseconds (integer division).
//!
//! Shows differ only in which [`ColorRule`] picks each pixel's color, which [`ToneRule`]
//! picks each step's tone, and whether the frame table is played once or cycled for a
//! fixed time ([`Span`]).
//!
//! # Example
//!
//! ```rust
//! use keypad_led_show::animation::{Animation, ColorRule, Show, ToneRule};
//! use keypad_led_show::color::Color;
//! use keypad_led_show::tone::Tone;
//!
//! static BLINK_FRAMES: [[f64; 4]; 2] = [[1.0, 0.0, 1.0, 0.0], [0.0, 1.0, 0.0, 1.0]];
//! static BLINK: Show<4> = Show::new("blink", Animation::new(&BLINK_FRAMES, Color::RED, 2))
//!     .with_color_rule(ColorRule::Interleaved(Color::BLUE))
//!     .with_tone_rule(ToneRule::Fixed(Tone::new(440, 50)));
//!
//! assert_eq!(BLINK.iterations(), 2);
//! assert_eq!(BLINK.animation().frame_delay_ms(), 500);
//! let colors = BLINK.pixel_colors(BLINK.step(1));
//! assert_eq!(colors[1], Color::BLUE);
//! ```
//!
//! Intensities are expected in `0.0..=1.0`. Only debug builds check this; a value outside
//! that range is an authoring error in the frame table.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::color::Color;
use crate::led_panel::{ColorWordSink, LedPanel};
use crate::tone::{Buzzer, Tone};

/// Slowest supported frame rate.
pub const FPS_MIN: u32 = 1;

/// Fastest supported frame rate.
pub const FPS_MAX: u32 = 30;

/// One frame: an intensity in `0.0..=1.0` per pixel, in panel raster order.
pub type Frame<const N: usize> = [f64; N];

// ============================================================================
// Animation
// ============================================================================

/// A frame table with its base color and frame rate.
///
/// Built in `const` context, so an empty table or an out-of-range frame rate fails the build.
#[derive(Clone, Copy, Debug)]
pub struct Animation<const N: usize> {
    frames: &'static [Frame<N>],
    color: Color,
    fps: u32,
}

impl<const N: usize> Animation<N> {
    /// Create an animation.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is empty or `fps` is outside [`FPS_MIN`]`..=`[`FPS_MAX`].
    #[must_use]
    pub const fn new(frames: &'static [Frame<N>], color: Color, fps: u32) -> Self {
        assert!(!frames.is_empty(), "animation requires at least one frame");
        assert!(
            fps >= FPS_MIN && fps <= FPS_MAX,
            "animation fps must be within FPS_MIN..=FPS_MAX"
        );
        Self { frames, color, fps }
    }

    /// The frame table, in playback order.
    #[must_use]
    pub const fn frames(&self) -> &'static [Frame<N>] {
        self.frames
    }

    /// Number of frames in the table.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Base color, scaled by each pixel's intensity.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Frames per second.
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }

    /// Sleep after each frame: `1000 / fps` milliseconds, truncated.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        reason = "fps is at least FPS_MIN and truncation is the device's timing"
    )]
    pub const fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Position within a show: the iteration count and the frame it renders.
///
/// For shows played once these are equal. For repeating shows the frame index wraps.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Zero-based iteration within the show.
    pub iteration: usize,
    /// Zero-based index into the frame table.
    pub frame_index: usize,
}

/// How a pixel's color is chosen before its intensity is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRule {
    /// Every pixel uses the animation's base color.
    Base,
    /// Even pixel indexes use the base color; odd indexes use this one.
    Interleaved(Color),
    /// Frame `i` uses `colors[i]` for every pixel. The base color is ignored.
    PerFrame(&'static [Color]),
    /// Even iterations use `even`, odd iterations use `odd`. The base color is ignored.
    Alternating {
        /// Color for even iterations.
        even: Color,
        /// Color for odd iterations.
        odd: Color,
    },
}

impl ColorRule {
    /// Color for `pixel_index` at `step`, before intensity.
    #[must_use]
    pub fn color_for(self, base: Color, step: Step, pixel_index: usize) -> Color {
        match self {
            Self::Base => base,
            Self::Interleaved(odd) => {
                if pixel_index % 2 == 0 {
                    base
                } else {
                    odd
                }
            }
            Self::PerFrame(colors) => colors
                .get(step.frame_index)
                .copied()
                .unwrap_or(Color::BLACK),
            Self::Alternating { even, odd } => {
                if step.iteration % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

/// A frequency used for a listed set of frame indexes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoteBand {
    /// Frequency in Hz.
    pub frequency_hz: u32,
    /// Frame indexes that play this frequency.
    pub frames: &'static [usize],
}

/// A short tune: each frame plays the frequency of the band that lists it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Melody {
    /// Bands checked in order; the first band listing the frame wins.
    pub bands: &'static [NoteBand],
    /// Frequency for frames no band lists.
    pub otherwise_hz: u32,
    /// Length of every note in milliseconds.
    pub note_ms: u32,
}

impl Melody {
    /// The note for `frame_index`.
    #[must_use]
    pub fn tone_for(&self, frame_index: usize) -> Tone {
        let frequency_hz = self
            .bands
            .iter()
            .find(|band| band.frames.contains(&frame_index))
            .map_or(self.otherwise_hz, |band| band.frequency_hz);
        Tone::new(frequency_hz, self.note_ms)
    }
}

/// Which tone, if any, follows each frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToneRule {
    /// No sound.
    Silent,
    /// The same tone after every frame.
    Fixed(Tone),
    /// Frame `i` plays `start_hz + i * step_hz`.
    Rising {
        /// Frequency for frame 0.
        start_hz: u32,
        /// Increase per frame.
        step_hz: u32,
        /// Length of every tone in milliseconds.
        duration_ms: u32,
    },
    /// Frame pitch looked up in a [`Melody`].
    Melody(Melody),
    /// Even iterations play `even`, odd iterations play `odd`.
    Alternating {
        /// Tone for even iterations.
        even: Tone,
        /// Tone for odd iterations.
        odd: Tone,
    },
}

impl ToneRule {
    /// Tone after the frame at `step`, if the rule asks for one.
    #[must_use]
    pub fn tone_for(self, step: Step) -> Option<Tone> {
        match self {
            Self::Silent => None,
            Self::Fixed(tone) => Some(tone),
            Self::Rising {
                start_hz,
                step_hz,
                duration_ms,
            } => {
                let offset = u32::try_from(step.frame_index)
                    .ok()
                    .and_then(|frame_index| frame_index.checked_mul(step_hz))
                    .unwrap_or(u32::MAX);
                Some(Tone::new(start_hz.saturating_add(offset), duration_ms))
            }
            Self::Melody(melody) => Some(melody.tone_for(step.frame_index)),
            Self::Alternating { even, odd } => {
                Some(if step.iteration % 2 == 0 { even } else { odd })
            }
        }
    }
}

/// How long a show runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Span {
    /// Play the frame table once, in order.
    Once,
    /// Cycle the frame table for `seconds * fps` iterations, wrapping at the end.
    Repeat {
        /// Nominal run time in seconds.
        seconds: u32,
    },
}

// ============================================================================
// Show
// ============================================================================

/// An [`Animation`] plus the rules that color and voice it.
#[derive(Clone, Copy, Debug)]
pub struct Show<const N: usize> {
    name: &'static str,
    animation: Animation<N>,
    color_rule: ColorRule,
    tone_rule: ToneRule,
    span: Span,
}

impl<const N: usize> Show<N> {
    /// A silent show that plays `animation` once in its base color.
    #[must_use]
    pub const fn new(name: &'static str, animation: Animation<N>) -> Self {
        Self {
            name,
            animation,
            color_rule: ColorRule::Base,
            tone_rule: ToneRule::Silent,
            span: Span::Once,
        }
    }

    /// Replace the color rule.
    ///
    /// # Panics
    ///
    /// Panics if a [`ColorRule::PerFrame`] table does not have one color per frame.
    #[must_use]
    pub const fn with_color_rule(self, color_rule: ColorRule) -> Self {
        if let ColorRule::PerFrame(colors) = color_rule {
            assert!(
                colors.len() == self.animation.frame_count(),
                "per-frame colors must match the frame count"
            );
        }
        Self { color_rule, ..self }
    }

    /// Replace the tone rule.
    #[must_use]
    pub const fn with_tone_rule(self, tone_rule: ToneRule) -> Self {
        Self { tone_rule, ..self }
    }

    /// Cycle the frame table for `seconds` instead of playing it once.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is 0.
    #[must_use]
    pub const fn repeat_for_seconds(self, seconds: u32) -> Self {
        assert!(
            seconds > 0,
            "a repeating show must run for at least one second"
        );
        Self {
            span: Span::Repeat { seconds },
            ..self
        }
    }

    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying animation.
    #[must_use]
    pub const fn animation(&self) -> &Animation<N> {
        &self.animation
    }

    /// The color rule.
    #[must_use]
    pub const fn color_rule(&self) -> ColorRule {
        self.color_rule
    }

    /// The tone rule.
    #[must_use]
    pub const fn tone_rule(&self) -> ToneRule {
        self.tone_rule
    }

    /// How long the show runs.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Number of frames rendered (and frame sleeps taken) by one playback.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "seconds and fps are small configuration constants"
    )]
    pub const fn iterations(&self) -> usize {
        match self.span {
            Span::Once => self.animation.frame_count(),
            Span::Repeat { seconds } => (seconds * self.animation.fps) as usize,
        }
    }

    /// The [`Step`] for `iteration`.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, reason = "frame count is never zero")]
    pub const fn step(&self, iteration: usize) -> Step {
        let frame_index = match self.span {
            Span::Once => iteration,
            Span::Repeat { .. } => iteration % self.animation.frame_count(),
        };
        Step {
            iteration,
            frame_index,
        }
    }

    /// Every step of one playback, in order.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        (0..self.iterations()).map(move |iteration| self.step(iteration))
    }

    /// Final pixel colors at `step`: rule color times pixel intensity.
    ///
    /// A step past the end of the frame table renders black.
    #[must_use]
    pub fn pixel_colors(&self, step: Step) -> [Color; N] {
        let Some(frame) = self.animation.frames.get(step.frame_index) else {
            return [Color::BLACK; N];
        };
        let base = self.animation.color;
        core::array::from_fn(|pixel_index| {
            let intensity = frame.get(pixel_index).copied().unwrap_or_default();
            self.color_rule
                .color_for(base, step, pixel_index)
                .scaled(intensity)
        })
    }

    /// Tone to play after the frame at `step`. Inaudible tones are dropped.
    #[must_use]
    pub fn tone(&self, step: Step) -> Option<Tone> {
        self.tone_rule
            .tone_for(step)
            .filter(|tone| tone.is_audible())
    }
}

// ============================================================================
// Player
// ============================================================================

/// Something the player can show on the panel.
#[derive(Clone, Copy, Debug)]
pub enum PanelCommand<const N: usize> {
    /// Play a show to completion.
    Play(&'static Show<N>),
    /// Stream one color to every pixel.
    Fill(Color),
}

/// Renders shows: owns the panel, the buzzer, and the frame-sleep delay.
///
/// Everything runs on the caller's thread. [`play`](Self::play) returns only after the
/// last frame's sleep; there is no way to cut a show short.
pub struct Player<S, P, D, const N: usize> {
    panel: LedPanel<S, N>,
    buzzer: Buzzer<P, D>,
    delay: D,
}

impl<S, P, D, const N: usize> Player<S, P, D, N>
where
    S: ColorWordSink,
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Create a player.
    pub const fn new(panel: LedPanel<S, N>, buzzer: Buzzer<P, D>, delay: D) -> Self {
        Self {
            panel,
            buzzer,
            delay,
        }
    }

    /// Play `show` once through, returning when it has finished.
    pub fn play(&mut self, show: &Show<N>) {
        let frame_delay_ms = show.animation().frame_delay_ms();
        info!(
            "Player: {} starting, {} iterations at {} fps",
            show.name(),
            show.iterations(),
            show.animation().fps()
        );
        for step in show.steps() {
            trace!(
                "Player: {} iteration {} frame {}",
                show.name(),
                step.iteration,
                step.frame_index
            );
            self.panel.write_frame(&show.pixel_colors(step));
            if let Some(tone) = show.tone(step) {
                self.buzzer.play(tone);
            }
            self.delay.delay_ms(frame_delay_ms);
        }
        debug!("Player: {} finished", show.name());
    }

    /// Stream `color` to every pixel.
    pub fn fill(&mut self, color: Color) {
        info!("Player: fill {} {} {}", color.red, color.green, color.blue);
        self.panel.fill(color);
    }

    /// Run one panel command to completion.
    pub fn perform(&mut self, command: PanelCommand<N>) {
        match command {
            PanelCommand::Play(show) => self.play(show),
            PanelCommand::Fill(color) => self.fill(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Animation, ColorRule, Melody, NoteBand, Show, Span, Step, ToneRule};
    use crate::color::Color;
    use crate::tone::Tone;

    static FRAMES: [[f64; 2]; 3] = [[1.0, 0.5], [0.0, 1.0], [0.5, 0.0]];
    static ANIMATION: Animation<2> = Animation::new(&FRAMES, Color::new(1.0, 0.0, 0.0), 3);

    #[test]
    fn frame_delay_truncates() {
        assert_eq!(ANIMATION.frame_delay_ms(), 333);
        assert_eq!(Animation::new(&FRAMES, Color::RED, 7).frame_delay_ms(), 142);
        assert_eq!(
            Animation::new(&FRAMES, Color::RED, 1).frame_delay_ms(),
            1000
        );
    }

    #[test]
    fn once_steps_follow_the_table() {
        let show = Show::new("once", ANIMATION);
        assert_eq!(show.span(), Span::Once);
        let steps: Vec<Step> = show.steps().collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|step| step.iteration == step.frame_index));
    }

    #[test]
    fn repeating_steps_wrap_the_table() {
        let show = Show::new("repeat", ANIMATION).repeat_for_seconds(2);
        assert_eq!(show.iterations(), 6);
        let frames: Vec<usize> = show.steps().map(|step| step.frame_index).collect();
        assert_eq!(frames, [0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn interleaved_uses_pixel_parity() {
        let rule = ColorRule::Interleaved(Color::BLUE);
        let step = Step {
            iteration: 0,
            frame_index: 0,
        };
        assert_eq!(rule.color_for(Color::RED, step, 0), Color::RED);
        assert_eq!(rule.color_for(Color::RED, step, 1), Color::BLUE);
        assert_eq!(rule.color_for(Color::RED, step, 24), Color::RED);
    }

    #[test]
    fn alternating_uses_iteration_parity() {
        let rule = ColorRule::Alternating {
            even: Color::RED,
            odd: Color::BLUE,
        };
        let odd_step = Step {
            iteration: 7,
            frame_index: 1,
        };
        assert_eq!(rule.color_for(Color::GREEN, odd_step, 0), Color::BLUE);
    }

    #[test]
    fn rising_tone_climbs_per_frame() {
        let rule = ToneRule::Rising {
            start_hz: 440,
            step_hz: 50,
            duration_ms: 200,
        };
        let step = Step {
            iteration: 6,
            frame_index: 6,
        };
        assert_eq!(rule.tone_for(step), Some(Tone::new(740, 200)));
    }

    #[test]
    fn melody_falls_back_for_unlisted_frames() {
        static LOW: NoteBand = NoteBand {
            frequency_hz: 261,
            frames: &[0, 2],
        };
        let melody = Melody {
            bands: core::slice::from_ref(&LOW),
            otherwise_hz: 392,
            note_ms: 250,
        };
        assert_eq!(melody.tone_for(2), Tone::new(261, 250));
        assert_eq!(melody.tone_for(1), Tone::new(392, 250));
    }

    #[test]
    fn inaudible_tones_are_dropped() {
        let show = Show::new("quiet", ANIMATION).with_tone_rule(ToneRule::Fixed(Tone::new(0, 100)));
        assert_eq!(show.tone(show.step(0)), None);
    }

    #[test]
    #[should_panic(expected = "per-frame colors must match the frame count")]
    fn per_frame_colors_must_cover_every_frame() {
        static TOO_FEW: [Color; 2] = [Color::RED, Color::BLUE];
        let _ = Show::new("short", ANIMATION).with_color_rule(ColorRule::PerFrame(&TOO_FEW));
    }
}
