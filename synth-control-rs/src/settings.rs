//! Global settings and the SETTINGS page editor.
//!
//! Persisting settings is the caller's business: build a [`Settings`] from
//! wherever they are kept and read it back from
//! [`Instrument::settings`](crate::control::Instrument::settings) after an
//! edit.

use core::fmt::Write;

use heapless::String;

use crate::display::Display;

/// Capacity of a formatted setting value.
const VALUE_CAPACITY: usize = 16;

/// Values the control core consumes that do not belong to a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Receive channel 1–16, or 0 for all channels.
    pub midi_channel: u8,
    /// Pitch bend range in semitones.
    pub pitch_bend_range: u8,
    /// Mod wheel depth in tenths.
    pub mod_wheel_depth: u8,
    /// Invert the main encoder.
    pub encoder_reversed: bool,
    /// Soft takeover for absolute controls.
    pub pick_up: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            midi_channel: 0,
            pitch_bend_range: 12,
            mod_wheel_depth: 2,
            encoder_reversed: false,
            pick_up: false,
        }
    }
}

impl Settings {
    /// Whether a message on `channel` (1–16) is for us.
    pub fn accepts_channel(&self, channel: u8) -> bool {
        self.midi_channel == 0 || self.midi_channel == channel
    }

    /// Mod wheel depth as a multiplier of the mod wheel curve.
    pub fn mod_wheel_scale(&self) -> f32 {
        f32::from(self.mod_wheel_depth) / 10.0
    }
}

/// One editable entry of the SETTINGS page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    MidiChannel,
    PitchBendRange,
    ModWheelDepth,
    EncoderDirection,
    PickUp,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::MidiChannel,
        Setting::PitchBendRange,
        Setting::ModWheelDepth,
        Setting::EncoderDirection,
        Setting::PickUp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Setting::MidiChannel => "MIDI Ch.",
            Setting::PitchBendRange => "Pitch Bend",
            Setting::ModWheelDepth => "MW Depth",
            Setting::EncoderDirection => "Encoder",
            Setting::PickUp => "Pick-up",
        }
    }

    /// Inclusive range of valid values.
    pub fn range(self) -> (u8, u8) {
        match self {
            Setting::MidiChannel => (0, 16),
            Setting::PitchBendRange => (1, 12),
            Setting::ModWheelDepth => (1, 10),
            Setting::EncoderDirection | Setting::PickUp => (0, 1),
        }
    }

    pub fn get(self, settings: &Settings) -> u8 {
        match self {
            Setting::MidiChannel => settings.midi_channel,
            Setting::PitchBendRange => settings.pitch_bend_range,
            Setting::ModWheelDepth => settings.mod_wheel_depth,
            Setting::EncoderDirection => u8::from(settings.encoder_reversed),
            Setting::PickUp => u8::from(settings.pick_up),
        }
    }

    /// Store `value`, clamped into [`range`](Self::range).
    pub fn set(self, settings: &mut Settings, value: u8) {
        let (low, high) = self.range();
        let value = value.clamp(low, high);
        match self {
            Setting::MidiChannel => settings.midi_channel = value,
            Setting::PitchBendRange => settings.pitch_bend_range = value,
            Setting::ModWheelDepth => settings.mod_wheel_depth = value,
            Setting::EncoderDirection => settings.encoder_reversed = value > 0,
            Setting::PickUp => settings.pick_up = value > 0,
        }
    }

    /// Human-readable form of `value`.
    pub fn format(self, value: u8) -> String<VALUE_CAPACITY> {
        let mut out = String::new();
        let _ = match (self, value) {
            (Setting::MidiChannel, 0) => out.push_str("All").map_err(|_| core::fmt::Error),
            (Setting::EncoderDirection, 0) => out.push_str("Type 1").map_err(|_| core::fmt::Error),
            (Setting::EncoderDirection, _) => out.push_str("Type 2").map_err(|_| core::fmt::Error),
            (Setting::PickUp, 0) => out.push_str("Off").map_err(|_| core::fmt::Error),
            (Setting::PickUp, _) => out.push_str("On").map_err(|_| core::fmt::Error),
            (_, v) => write!(out, "{}", v),
        };
        out
    }
}

/// Cursor and pending value of the SETTINGS / SETTINGSVALUE pages.
///
/// Browsing wraps through [`Setting::ALL`]; editing clamps the pending
/// value. Nothing reaches [`Settings`] until [`store`](Self::store).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsMenu {
    position: usize,
    pending: u8,
}

impl SettingsMenu {
    pub fn setting(&self) -> Setting {
        Setting::ALL[self.position % Setting::ALL.len()]
    }

    pub fn pending(&self) -> u8 {
        self.pending
    }

    /// Reload the pending value from `settings`, discarding edits.
    pub fn reset(&mut self, settings: &Settings) {
        self.pending = self.setting().get(settings);
    }

    /// Move to another setting, wrapping.
    pub fn browse(&mut self, delta: i32, settings: &Settings) {
        let len = Setting::ALL.len() as i64;
        self.position = (self.position as i64 + i64::from(delta)).rem_euclid(len) as usize;
        self.reset(settings);
    }

    /// Change the pending value, clamped to the setting's range.
    pub fn adjust(&mut self, delta: i32) {
        let (low, high) = self.setting().range();
        let value = (i32::from(self.pending) + delta).clamp(i32::from(low), i32::from(high));
        self.pending = value as u8;
    }

    /// Write the pending value into `settings`.
    pub fn store(&self, settings: &mut Settings) {
        self.setting().set(settings, self.pending);
        #[cfg(feature = "defmt")]
        defmt::info!("setting {} = {}", self.setting(), self.pending);
    }

    pub fn show<D: Display + ?Sized>(&self, display: &mut D) {
        let setting = self.setting();
        display.show_settings(setting.name(), &setting.format(self.pending));
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
