//! Recording test doubles for the engine and display.
//!
//! Available in unit tests and with the `std` feature, so integration tests
//! and host tools can drive an [`Instrument`](crate::control::Instrument)
//! without hardware.

extern crate std;

use std::string::{String, ToString};
use std::vec::Vec;

use crate::control::{Page, Section};
use crate::display::{Display, Notice};
use crate::engine::{Mode, SynthEngine, Switch, Target, WaveSlot, Waveform};
use crate::tables::CHORD_VOICES;

/// Engine that stores whatever it is told and logs performance events.
#[derive(Debug, Clone)]
pub struct RecordingEngine {
    values: [f32; Target::COUNT],
    switches: [bool; Switch::COUNT],
    modes: [u8; Mode::COUNT],
    waveforms: [Waveform; WaveSlot::COUNT],
    /// Every `set` call, in order.
    pub writes: Vec<(Target, f32)>,
    pub notes: Vec<(u8, u8)>,
    pub released: Vec<u8>,
    pub all_notes_off: usize,
    pub envelopes_closed: usize,
    pub bend: f32,
    pub chord: [u8; CHORD_VOICES],
    pub beat_hz: Option<f32>,
    pub clock_starts: usize,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            values: [0.0; Target::COUNT],
            switches: [false; Switch::COUNT],
            modes: [0; Mode::COUNT],
            waveforms: [Waveform::default(); WaveSlot::COUNT],
            writes: Vec::new(),
            notes: Vec::new(),
            released: Vec::new(),
            all_notes_off: 0,
            envelopes_closed: 0,
            bend: 0.0,
            chord: [0; CHORD_VOICES],
            beat_hz: None,
            clock_starts: 0,
        }
    }
}

impl RecordingEngine {
    /// Forget logged writes and events, keeping engine state.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.notes.clear();
        self.released.clear();
    }
}

impl SynthEngine for RecordingEngine {
    fn set(&mut self, target: Target, value: f32) {
        self.values[target as usize] = value;
        self.writes.push((target, value));
    }

    fn get(&self, target: Target) -> f32 {
        self.values[target as usize]
    }

    fn set_switch(&mut self, switch: Switch, on: bool) {
        self.switches[switch as usize] = on;
    }

    fn switch(&self, switch: Switch) -> bool {
        self.switches[switch as usize]
    }

    fn set_mode(&mut self, mode: Mode, value: u8) {
        self.modes[mode as usize] = value;
    }

    fn mode(&self, mode: Mode) -> u8 {
        self.modes[mode as usize]
    }

    fn set_waveform(&mut self, slot: WaveSlot, waveform: Waveform) {
        self.waveforms[slot as usize] = waveform;
    }

    fn waveform(&self, slot: WaveSlot) -> Waveform {
        self.waveforms[slot as usize]
    }

    fn note_on(&mut self, note: u8, velocity: u8) {
        self.notes.push((note, velocity));
    }

    fn note_off(&mut self, note: u8) {
        self.released.push(note);
    }

    fn all_notes_off(&mut self) {
        self.all_notes_off += 1;
    }

    fn close_envelopes(&mut self) {
        self.envelopes_closed += 1;
    }

    fn set_chord_intervals(&mut self, intervals: [u8; CHORD_VOICES]) {
        self.chord = intervals;
    }

    fn pitch_bend(&mut self, semitones: f32) {
        self.bend = semitones;
    }

    fn midi_clock(&mut self, beat_hz: f32) {
        self.beat_hz = Some(beat_hz);
    }

    fn midi_clock_start(&mut self) {
        self.clock_starts += 1;
    }
}

/// One notification received by [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Parameter {
        label: String,
        value: String,
        section: Option<Section>,
    },
    Patch {
        number: u16,
        name: String,
        version: Option<u8>,
    },
    Renaming {
        typed: String,
        candidate: char,
    },
    Settings {
        setting: String,
        value: String,
    },
    Notice(Notice),
    Page(Page),
}

/// Display that keeps every notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Shown>,
}

impl RecordingDisplay {
    pub fn clear(&mut self) {
        self.shown.clear();
    }

    pub fn last(&self) -> Option<&Shown> {
        self.shown.last()
    }

    /// Label and value of the latest parameter readout.
    pub fn last_parameter(&self) -> Option<(&str, &str)> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Parameter { label, value, .. } => Some((label.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Number and name of the latest patch page.
    pub fn last_patch(&self) -> Option<(u16, &str)> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Patch { number, name, .. } => Some((*number, name.as_str())),
            _ => None,
        })
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Notice(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

impl Display for RecordingDisplay {
    fn show_parameter(&mut self, label: &str, value: &str, section: Option<Section>) {
        self.shown.push(Shown::Parameter {
            label: label.to_string(),
            value: value.to_string(),
            section,
        });
    }

    fn show_patch(&mut self, number: u16, name: &str, version: Option<u8>) {
        self.shown.push(Shown::Patch {
            number,
            name: name.to_string(),
            version,
        });
    }

    fn show_renaming(&mut self, typed: &str, candidate: char) {
        self.shown.push(Shown::Renaming {
            typed: typed.to_string(),
            candidate,
        });
    }

    fn show_settings(&mut self, setting: &str, value: &str) {
        self.shown.push(Shown::Settings {
            setting: setting.to_string(),
            value: value.to_string(),
        });
    }

    fn show_notice(&mut self, notice: Notice) {
        self.shown.push(Shown::Notice(notice));
    }

    fn page_changed(&mut self, page: Page) {
        self.shown.push(Shown::Page(page));
    }
}
