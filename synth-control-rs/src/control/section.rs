//! Panel sections and what their four encoders edit.

use crate::params::{Param, Steps};
use crate::tables::{self, step_distinct, StepPolicy};
use crate::{N_SECTIONS, SLOTS_PER_SECTION};

/// A group of related parameters under the four section encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Section {
    #[default]
    Osc1,
    Osc2,
    Noise,
    Lfo,
    FilterEnvelope,
    Filter,
    FilterLfo,
    AmpEnvelope,
    Effects,
}

/// Human-readable section names, indexed by section.
pub const SECTION_NAMES: [&str; N_SECTIONS] = [
    "Osc 1",
    "Osc 2",
    "Noise",
    "LFO",
    "Filter Env",
    "Filter",
    "Filter LFO",
    "Amp Env",
    "Effects",
];

/// What one section encoder edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotEdit {
    /// Step the parameter through its table.
    Param(Param),
    /// Turning up toggles filter LFO clock sync, turning down toggles
    /// filter LFO retrigger.
    SyncRetrig,
    Unused,
}

/// Section encoder layout.
///
/// `SECTION_SLOTS[section][encoder]` names the edit each encoder performs.
/// Changing the layout needs no other code change: [`section_of`] and the
/// encoder router both read this table.
pub const SECTION_SLOTS: [[SlotEdit; SLOTS_PER_SECTION]; N_SECTIONS] = [
    // Osc 1
    [
        SlotEdit::Param(Param::PitchA),
        SlotEdit::Param(Param::WaveformA),
        SlotEdit::Param(Param::PulseWidthA),
        SlotEdit::Param(Param::OscMix),
    ],
    // Osc 2
    [
        SlotEdit::Param(Param::PitchB),
        SlotEdit::Param(Param::WaveformB),
        SlotEdit::Param(Param::PulseWidthB),
        SlotEdit::Param(Param::Detune),
    ],
    // Noise
    [
        SlotEdit::Param(Param::Noise),
        SlotEdit::Param(Param::PitchEnvelope),
        SlotEdit::Param(Param::PwmRate),
        SlotEdit::Param(Param::OscFx),
    ],
    // LFO
    [
        SlotEdit::Param(Param::PitchLfoAmount),
        SlotEdit::Param(Param::PitchLfoWaveform),
        SlotEdit::Param(Param::PitchLfoRate),
        SlotEdit::Param(Param::Unison),
    ],
    // Filter Env
    [
        SlotEdit::Param(Param::FilterAttack),
        SlotEdit::Param(Param::FilterDecay),
        SlotEdit::Param(Param::FilterSustain),
        SlotEdit::Param(Param::FilterRelease),
    ],
    // Filter
    [
        SlotEdit::Param(Param::FilterCutoff),
        SlotEdit::Param(Param::FilterResonance),
        SlotEdit::Param(Param::FilterMixer),
        SlotEdit::Param(Param::FilterEnvelope),
    ],
    // Filter LFO
    [
        SlotEdit::Param(Param::FilterLfoAmount),
        SlotEdit::Param(Param::FilterLfoWaveform),
        SlotEdit::Param(Param::FilterLfoRate),
        SlotEdit::SyncRetrig,
    ],
    // Amp Env
    [
        SlotEdit::Param(Param::AmpAttack),
        SlotEdit::Param(Param::AmpDecay),
        SlotEdit::Param(Param::AmpSustain),
        SlotEdit::Param(Param::AmpRelease),
    ],
    // Effects
    [
        SlotEdit::Param(Param::Glide),
        SlotEdit::Param(Param::EffectAmount),
        SlotEdit::Param(Param::EffectMix),
        SlotEdit::Unused,
    ],
];

impl Section {
    pub const ALL: [Section; N_SECTIONS] = [
        Section::Osc1,
        Section::Osc2,
        Section::Noise,
        Section::Lfo,
        Section::FilterEnvelope,
        Section::Filter,
        Section::FilterLfo,
        Section::AmpEnvelope,
        Section::Effects,
    ];

    pub fn name(self) -> &'static str {
        SECTION_NAMES[self as usize]
    }

    pub fn slots(self) -> &'static [SlotEdit; SLOTS_PER_SECTION] {
        &SECTION_SLOTS[self as usize]
    }

    /// The section `delta` places away, wrapping.
    pub fn step(self, delta: i32) -> Section {
        let next = tables::step(N_SECTIONS, self as usize, delta, StepPolicy::Wrap);
        Section::ALL[next]
    }
}

/// The section whose encoders edit `param`, if any.
pub fn section_of(param: Param) -> Option<Section> {
    Section::ALL.into_iter().find(|s| {
        s.slots().iter().any(|slot| match slot {
            SlotEdit::Param(p) => *p == param,
            SlotEdit::SyncRetrig => matches!(param, Param::FilterLfoSync | Param::FilterLfoRetrig),
            SlotEdit::Unused => false,
        })
    })
}

/// Raw controller value reached by turning an encoder `delta` detents from
/// stored index `index`.
///
/// Curve-backed parameters move by distinct table values, so a run of equal
/// entries (a chord, a tempo division, an LFO shape) is one detent.
/// Enumerations cycle through their stored indices.
pub fn stepped_raw(param: Param, index: u8, delta: i32, synced: bool, chord: bool) -> u8 {
    let policy = param.step_policy();
    let raw = usize::from(param.raw_from_index(index));
    let next = match param.steps(synced, chord) {
        Steps::Curve(table) => step_distinct(table, raw, delta, policy),
        Steps::Codes(table) => step_distinct(table, raw, delta, policy),
        Steps::Semitones(table) => step_distinct(table, raw, delta, policy),
        Steps::Linear { stride } => {
            let delta = delta.saturating_mul(i32::from(stride));
            tables::step(128, raw, delta, policy)
        }
        Steps::Cycle => {
            let i = tables::step(param.width(), usize::from(index), delta, policy);
            usize::from(param.raw_from_index(u8::try_from(i).unwrap_or(u8::MAX)))
        }
    };
    u8::try_from(next).unwrap_or(127).min(127)
}

// ── Unit Tests ───────────────────────────────────────────────────────
