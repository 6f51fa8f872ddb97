//! Logical synth parameters and their descriptors.
//!
//! Every control the core knows about is a [`Param`]. Its [`Descriptor`]
//! says how a table index becomes an engine value ([`Kind`]), what label the
//! UI shows, and whether pick-up applies. The dispatch, mapping and patch
//! codec layers are written once against descriptors instead of once per
//! parameter.
//!
//! # Index domains
//!
//! A parameter has two integer representations:
//!
//! - the **raw** value, 0–127, as carried by MIDI CC;
//! - the **stored index**, as kept in a [`PatchRecord`]. For most
//!   parameters the two are equal. The exceptions are the filter cutoff
//!   (256-entry table, index = raw × 2), oscillator waveforms (index into
//!   the selectable waveform list, raw = waveform code), switches (0/1) and
//!   modes (clamped to their range).
//!
//! [`index_from_raw`](Param::index_from_raw) and
//! [`raw_from_index`](Param::raw_from_index) convert between them.
//!
//! [`PatchRecord`]: crate::patch::PatchRecord

pub mod cc;
mod format;

pub use format::{readout, Readout, READOUT_CAPACITY};

use crate::engine::{Mode, Switch, Target, WaveSlot, Waveform};
use crate::tables::{
    self, StepPolicy, CHORD_INDEX, ENSEMBLE_LFO, ENV_TIMES, FILTER_FREQS_256, FILTER_MIXER,
    FILTER_MOD_MIXER_MAX, FILTER_RESONANCE, KEY_TRACKING, LFO_MAX_RATE, LFO_TEMPO,
    LFO_WAVEFORM_CODES, LINEAR, LINEAR_CENTRE_ZERO, MAX_DETUNE, OSC_MOD_MIXER_MAX,
    OSC_WAVEFORMS_A, OSC_WAVEFORMS_B, PITCH, POWER, PWM_RATE,
};

/// A logical synth parameter.
///
/// Variants up to and including [`Monophonic`](Param::Monophonic) are
/// stored in patches; the rest are performance controls that only touch
/// the live engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Param {
    OscMix,
    Noise,
    Unison,
    OscFx,
    Detune,
    KeyTracking,
    Glide,
    PitchA,
    PitchB,
    WaveformA,
    WaveformB,
    PwmSource,
    PulseWidthA,
    PulseWidthB,
    PwmRate,
    FilterResonance,
    FilterCutoff,
    FilterMixer,
    FilterEnvelope,
    PitchLfoAmount,
    PitchLfoRate,
    PitchLfoWaveform,
    PitchLfoRetrig,
    PitchLfoSync,
    FilterLfoRate,
    FilterLfoRetrig,
    FilterLfoSync,
    FilterLfoAmount,
    FilterLfoWaveform,
    FilterAttack,
    FilterDecay,
    FilterSustain,
    FilterRelease,
    AmpAttack,
    AmpDecay,
    AmpSustain,
    AmpRelease,
    EffectAmount,
    EffectMix,
    PitchEnvelope,
    VelocitySensitivity,
    Monophonic,
    // Performance controls, not stored.
    ModWheel,
    Volume,
    PwmAmount,
}

/// How a stored index turns into engine state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// `table[index] * scale` written to `target`.
    Curve {
        table: &'static [f32],
        scale: f32,
        target: Target,
        unit: Unit,
    },
    /// One index, two crossfaded oscillator levels.
    OscMix,
    /// Detune ratio and, in chord unison, the chord.
    Detune,
    /// Semitone offset from [`PITCH`].
    Pitch(Target),
    /// Pulse width from the centred curve and PWM amount from the linear
    /// curve, both driven by one index.
    PulseWidth { width: Target, amount: Target },
    /// Free-running rate from [`POWER`], or a tempo division of the MIDI
    /// clock when `sync` is on.
    LfoRate { target: Target, sync: Switch },
    /// Index into a list of selectable waveforms.
    OscWaveform {
        slot: WaveSlot,
        choices: &'static [Waveform],
    },
    /// Raw index into the banded LFO waveform table.
    LfoWaveform(WaveSlot),
    Switch {
        switch: Switch,
        off: &'static str,
        on: &'static str,
    },
    Mode {
        mode: Mode,
        names: &'static [&'static str],
    },
    /// [`POWER`] scaled by the mod wheel depth setting.
    ModWheel,
    /// Overrides the PWM amount of both oscillators.
    PwmAmount,
}

/// Display unit of a [`Kind::Curve`] readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Two decimals.
    Level,
    /// Signed, two decimals.
    Bipolar,
    /// Whole percent.
    Percent,
    Millis,
    /// Glide amount shown as a time, scaled by
    /// [`GLIDE_FACTOR`](crate::tables::GLIDE_FACTOR).
    Glide,
    Hertz,
    /// Low pass / high pass blend, or band pass.
    FilterMixer,
    /// PWM rate, or one of the PWM rate markers.
    PwmRate,
    /// Pink / white noise balance.
    Noise,
}

/// Static description of a [`Param`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptor {
    pub label: &'static str,
    pub kind: Kind,
    /// Soft takeover applies to absolute controls of this parameter.
    pub pick_up: bool,
}

/// Stepping table for relative encoder edits, in the raw domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steps {
    Curve(&'static [f32]),
    Codes(&'static [u8]),
    Semitones(&'static [i8]),
    /// Plain raw steps of `stride`.
    Linear { stride: u8 },
    /// Cycle through the stored index domain.
    Cycle,
}

const fn curve(table: &'static [f32], target: Target, unit: Unit) -> Kind {
    Kind::Curve {
        table,
        scale: 1.0,
        target,
        unit,
    }
}

const UNISON_NAMES: [&str; 3] = ["Off", "Dyn. Detune", "Chord"];
const OSC_FX_NAMES: [&str; 3] = ["Off", "On - X Mod", "On - XOR"];
const VELOCITY_NAMES: [&str; 5] = ["Off", "Curve 1", "Curve 2", "Curve 3", "Curve 4"];

impl Param {
    /// Number of parameters stored in a patch.
    pub const STORED: usize = Param::Monophonic as usize + 1;

    /// Total number of parameters.
    pub const COUNT: usize = Param::PwmAmount as usize + 1;

    /// Every parameter, in discriminant order.
    pub const ALL: [Param; Param::COUNT] = [
        Param::OscMix,
        Param::Noise,
        Param::Unison,
        Param::OscFx,
        Param::Detune,
        Param::KeyTracking,
        Param::Glide,
        Param::PitchA,
        Param::PitchB,
        Param::WaveformA,
        Param::WaveformB,
        Param::PwmSource,
        Param::PulseWidthA,
        Param::PulseWidthB,
        Param::PwmRate,
        Param::FilterResonance,
        Param::FilterCutoff,
        Param::FilterMixer,
        Param::FilterEnvelope,
        Param::PitchLfoAmount,
        Param::PitchLfoRate,
        Param::PitchLfoWaveform,
        Param::PitchLfoRetrig,
        Param::PitchLfoSync,
        Param::FilterLfoRate,
        Param::FilterLfoRetrig,
        Param::FilterLfoSync,
        Param::FilterLfoAmount,
        Param::FilterLfoWaveform,
        Param::FilterAttack,
        Param::FilterDecay,
        Param::FilterSustain,
        Param::FilterRelease,
        Param::AmpAttack,
        Param::AmpDecay,
        Param::AmpSustain,
        Param::AmpRelease,
        Param::EffectAmount,
        Param::EffectMix,
        Param::PitchEnvelope,
        Param::VelocitySensitivity,
        Param::Monophonic,
        Param::ModWheel,
        Param::Volume,
        Param::PwmAmount,
    ];

    /// Whether the parameter is part of a patch.
    pub fn is_stored(self) -> bool {
        (self as usize) < Self::STORED
    }

    pub fn descriptor(self) -> Descriptor {
        let (label, kind, pick_up) = match self {
            Param::OscMix => ("Osc Mix", Kind::OscMix, false),
            Param::Noise => (
                "Noise Level",
                curve(&LINEAR_CENTRE_ZERO, Target::Noise, Unit::Noise),
                false,
            ),
            Param::Unison => (
                "Unison",
                Kind::Mode {
                    mode: Mode::Unison,
                    names: &UNISON_NAMES,
                },
                false,
            ),
            Param::OscFx => (
                "Osc FX",
                Kind::Mode {
                    mode: Mode::OscFx,
                    names: &OSC_FX_NAMES,
                },
                false,
            ),
            Param::Detune => ("Detune", Kind::Detune, false),
            Param::KeyTracking => (
                "Key Tracking",
                curve(&KEY_TRACKING, Target::KeyTracking, Unit::Percent),
                false,
            ),
            Param::Glide => ("Glide", curve(&POWER, Target::Glide, Unit::Glide), false),
            Param::PitchA => ("1. Semitones", Kind::Pitch(Target::PitchA), false),
            Param::PitchB => ("2. Semitones", Kind::Pitch(Target::PitchB), false),
            Param::WaveformA => (
                "1. Waveform",
                Kind::OscWaveform {
                    slot: WaveSlot::OscA,
                    choices: &OSC_WAVEFORMS_A,
                },
                false,
            ),
            Param::WaveformB => (
                "2. Waveform",
                Kind::OscWaveform {
                    slot: WaveSlot::OscB,
                    choices: &OSC_WAVEFORMS_B,
                },
                false,
            ),
            Param::PwmSource => (
                "PWM Source",
                Kind::Switch {
                    switch: Switch::PwmFromFilterEnv,
                    off: "LFO",
                    on: "Filter Env",
                },
                false,
            ),
            Param::PulseWidthA => (
                "1. PW Amt",
                Kind::PulseWidth {
                    width: Target::PulseWidthA,
                    amount: Target::PwmAmountA,
                },
                false,
            ),
            Param::PulseWidthB => (
                "2. PW Amt",
                Kind::PulseWidth {
                    width: Target::PulseWidthB,
                    amount: Target::PwmAmountB,
                },
                false,
            ),
            Param::PwmRate => (
                "PWM Rate",
                curve(&PWM_RATE, Target::PwmRate, Unit::PwmRate),
                false,
            ),
            Param::FilterResonance => (
                "Resonance",
                curve(&FILTER_RESONANCE, Target::FilterResonance, Unit::Level),
                true,
            ),
            Param::FilterCutoff => (
                "Cutoff",
                curve(&FILTER_FREQS_256, Target::FilterCutoff, Unit::Hertz),
                true,
            ),
            Param::FilterMixer => (
                "Filter Type",
                curve(&FILTER_MIXER, Target::FilterMixer, Unit::FilterMixer),
                true,
            ),
            Param::FilterEnvelope => (
                "Filter Env.",
                Kind::Curve {
                    table: &LINEAR_CENTRE_ZERO,
                    scale: FILTER_MOD_MIXER_MAX,
                    target: Target::FilterEnvelope,
                    unit: Unit::Bipolar,
                },
                false,
            ),
            Param::PitchLfoAmount => (
                "LFO Amount",
                curve(&POWER, Target::PitchLfoAmount, Unit::Level),
                true,
            ),
            Param::PitchLfoRate => (
                "LFO Rate",
                Kind::LfoRate {
                    target: Target::PitchLfoRate,
                    sync: Switch::PitchLfoClockSync,
                },
                true,
            ),
            Param::PitchLfoWaveform => ("Pitch LFO", Kind::LfoWaveform(WaveSlot::PitchLfo), false),
            Param::PitchLfoRetrig => (
                "LFO Retrig",
                Kind::Switch {
                    switch: Switch::PitchLfoRetrig,
                    off: "Off",
                    on: "On",
                },
                false,
            ),
            Param::PitchLfoSync => (
                "LFO Sync",
                Kind::Switch {
                    switch: Switch::PitchLfoClockSync,
                    off: "Off",
                    on: "On",
                },
                false,
            ),
            Param::FilterLfoRate => (
                "F. LFO Rate",
                Kind::LfoRate {
                    target: Target::FilterLfoRate,
                    sync: Switch::FilterLfoClockSync,
                },
                true,
            ),
            Param::FilterLfoRetrig => (
                "F. LFO Retrig",
                Kind::Switch {
                    switch: Switch::FilterLfoRetrig,
                    off: "Off",
                    on: "On",
                },
                false,
            ),
            Param::FilterLfoSync => (
                "F. LFO Sync",
                Kind::Switch {
                    switch: Switch::FilterLfoClockSync,
                    off: "Off",
                    on: "On",
                },
                false,
            ),
            Param::FilterLfoAmount => (
                "F. LFO Amt",
                Kind::Curve {
                    table: &LINEAR,
                    scale: FILTER_MOD_MIXER_MAX,
                    target: Target::FilterLfoAmount,
                    unit: Unit::Level,
                },
                true,
            ),
            Param::FilterLfoWaveform => (
                "Filter LFO",
                Kind::LfoWaveform(WaveSlot::FilterLfo),
                false,
            ),
            Param::FilterAttack => (
                "Filter Attack",
                curve(&ENV_TIMES, Target::FilterAttack, Unit::Millis),
                false,
            ),
            Param::FilterDecay => (
                "Filter Decay",
                curve(&ENV_TIMES, Target::FilterDecay, Unit::Millis),
                false,
            ),
            Param::FilterSustain => (
                "Filter Sustain",
                curve(&LINEAR, Target::FilterSustain, Unit::Level),
                false,
            ),
            Param::FilterRelease => (
                "Filter Release",
                curve(&ENV_TIMES, Target::FilterRelease, Unit::Millis),
                false,
            ),
            Param::AmpAttack => (
                "Attack",
                curve(&ENV_TIMES, Target::AmpAttack, Unit::Millis),
                false,
            ),
            Param::AmpDecay => (
                "Decay",
                curve(&ENV_TIMES, Target::AmpDecay, Unit::Millis),
                false,
            ),
            Param::AmpSustain => (
                "Sustain",
                curve(&LINEAR, Target::AmpSustain, Unit::Level),
                false,
            ),
            Param::AmpRelease => (
                "Release",
                curve(&ENV_TIMES, Target::AmpRelease, Unit::Millis),
                false,
            ),
            Param::EffectAmount => (
                "Effect Amt",
                curve(&ENSEMBLE_LFO, Target::EffectAmount, Unit::Hertz),
                true,
            ),
            Param::EffectMix => (
                "Effect Mix",
                curve(&LINEAR, Target::EffectMix, Unit::Level),
                true,
            ),
            Param::PitchEnvelope => (
                "Pitch Env Amt",
                Kind::Curve {
                    table: &LINEAR_CENTRE_ZERO,
                    scale: OSC_MOD_MIXER_MAX,
                    target: Target::PitchEnvelope,
                    unit: Unit::Bipolar,
                },
                false,
            ),
            Param::VelocitySensitivity => (
                "Velocity Sens.",
                Kind::Mode {
                    mode: Mode::VelocityCurve,
                    names: &VELOCITY_NAMES,
                },
                false,
            ),
            Param::Monophonic => (
                "Monophonic",
                Kind::Switch {
                    switch: Switch::Monophonic,
                    off: "Off",
                    on: "On",
                },
                false,
            ),
            Param::ModWheel => ("Mod Wheel", Kind::ModWheel, false),
            Param::Volume => ("Volume", curve(&LINEAR, Target::Volume, Unit::Level), false),
            Param::PwmAmount => ("PWM Amt", Kind::PwmAmount, false),
        };
        Descriptor {
            label,
            kind,
            pick_up,
        }
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Number of valid stored indices.
    pub fn width(self) -> usize {
        match self.descriptor().kind {
            Kind::Curve { table, .. } => table.len(),
            Kind::OscWaveform { choices, .. } => choices.len(),
            Kind::Switch { .. } => 2,
            Kind::Mode { names, .. } => names.len(),
            Kind::OscMix
            | Kind::Detune
            | Kind::Pitch(_)
            | Kind::PulseWidth { .. }
            | Kind::LfoRate { .. }
            | Kind::LfoWaveform(_)
            | Kind::ModWheel
            | Kind::PwmAmount => 128,
        }
    }

    /// Largest valid stored index.
    pub fn max_index(self) -> u8 {
        u8::try_from(self.width().saturating_sub(1)).unwrap_or(u8::MAX)
    }

    /// Stored indices per raw step: 2 for the 256-entry cutoff table.
    pub fn raw_scale(self) -> usize {
        (self.width() / 128).max(1)
    }

    /// Convert a raw 0–127 controller value into a stored index.
    pub fn index_from_raw(self, raw: u8) -> u8 {
        let raw = raw.min(127);
        match self.descriptor().kind {
            Kind::OscWaveform { choices, .. } => choices
                .iter()
                .position(|w| w.code() == raw)
                .and_then(|i| u8::try_from(i).ok())
                .unwrap_or(0),
            Kind::Switch { .. } => u8::from(raw > 0),
            Kind::Mode { .. } => raw.min(self.max_index()),
            _ => {
                let index = usize::from(raw) * self.raw_scale();
                u8::try_from(index).unwrap_or(u8::MAX)
            }
        }
    }

    /// Convert a stored index back into the raw value a controller would
    /// send for it.
    pub fn raw_from_index(self, index: u8) -> u8 {
        let index = index.min(self.max_index());
        match self.descriptor().kind {
            Kind::OscWaveform { choices, .. } => choices
                .get(usize::from(index))
                .map(|w| w.code())
                .unwrap_or(0),
            Kind::Switch { .. } => {
                if index > 0 {
                    127
                } else {
                    0
                }
            }
            _ => {
                let raw = usize::from(index) / self.raw_scale();
                u8::try_from(raw).unwrap_or(127)
            }
        }
    }

    /// Real value for a stored index, as written to the engine.
    ///
    /// `beat_hz` is the MIDI clock beat frequency when the parameter's LFO
    /// is clock-synced, `None` when free-running. Kinds without a single
    /// real value (waveforms, switches, modes) return the index itself.
    pub fn value(self, index: u8, beat_hz: Option<f32>) -> f32 {
        let i = usize::from(index);
        match self.descriptor().kind {
            Kind::Curve { table, scale, .. } => {
                tables::value_at(table, i).unwrap_or(0.0) * scale
            }
            Kind::Detune => 1.0 - MAX_DETUNE * curve_at(&POWER, i),
            Kind::Pitch(_) => f32::from(tables::value_at(&PITCH, i).unwrap_or(0)),
            Kind::PulseWidth { .. } => curve_at(&LINEAR_CENTRE_ZERO, i),
            Kind::LfoRate { .. } => match beat_hz {
                Some(beat) => beat * curve_at(&LFO_TEMPO, i),
                None => LFO_MAX_RATE * curve_at(&POWER, i),
            },
            Kind::ModWheel => curve_at(&POWER, i),
            Kind::PwmAmount => curve_at(&LINEAR, i),
            Kind::OscMix
            | Kind::OscWaveform { .. }
            | Kind::LfoWaveform(_)
            | Kind::Switch { .. }
            | Kind::Mode { .. } => f32::from(index),
        }
    }

    /// Nearest stored index for a real value, the reverse of
    /// [`value`](Self::value).
    ///
    /// Returns `None` for the oscillator mix, which needs both levels (see
    /// [`osc_mix_from_levels`](crate::tables::osc_mix_from_levels)).
    /// Waveforms are matched by code, falling back to the first entry.
    pub fn nearest_index(self, value: f32, beat_hz: Option<f32>) -> Option<u8> {
        let index = match self.descriptor().kind {
            Kind::OscMix => return None,
            Kind::OscWaveform { choices, .. } => choices
                .iter()
                .position(|w| f32::from(w.code()) == value)
                .unwrap_or(0),
            Kind::LfoWaveform(_) => {
                let position = LFO_WAVEFORM_CODES
                    .iter()
                    .position(|code| f32::from(*code) == value);
                position.unwrap_or(0)
            }
            Kind::Switch { .. } => usize::from(value > 0.0),
            Kind::Mode { .. } => {
                if value > 0.0 {
                    (value as usize).min(self.width() - 1)
                } else {
                    0
                }
            }
            _ => tables::closest_by(self.width(), |i| self.value(i as u8, beat_hz), value),
        };
        Some(u8::try_from(index).unwrap_or(u8::MAX))
    }

    /// The monotonic curve compared by pick-up, with values indexed in the
    /// stored domain.
    pub fn pick_up_curve(self) -> Option<(&'static [f32], f32)> {
        let descriptor = self.descriptor();
        if !descriptor.pick_up {
            return None;
        }
        match descriptor.kind {
            Kind::Curve { table, scale, .. } => Some((table, scale)),
            Kind::LfoRate { .. } => Some((&POWER, LFO_MAX_RATE)),
            _ => None,
        }
    }

    /// Stepping table for encoder edits.
    ///
    /// `synced` selects the tempo-division table for LFO rates; `chord`
    /// makes detune step whole chords.
    pub fn steps(self, synced: bool, chord: bool) -> Steps {
        match self.descriptor().kind {
            Kind::Curve { table, .. } if table.len() == 128 => Steps::Curve(table),
            Kind::Curve { .. } => Steps::Linear { stride: 1 },
            Kind::Detune if chord => Steps::Codes(&CHORD_INDEX),
            Kind::Detune | Kind::ModWheel => Steps::Curve(&POWER),
            Kind::Pitch(_) => Steps::Semitones(&PITCH),
            Kind::PulseWidth { .. } => Steps::Curve(&LINEAR_CENTRE_ZERO),
            Kind::LfoRate { .. } if synced => Steps::Curve(&LFO_TEMPO),
            Kind::LfoRate { .. } => Steps::Curve(&POWER),
            Kind::LfoWaveform(_) => Steps::Codes(&LFO_WAVEFORM_CODES),
            Kind::OscMix => Steps::Linear { stride: 8 },
            Kind::PwmAmount => Steps::Curve(&LINEAR),
            Kind::OscWaveform { .. } | Kind::Switch { .. } | Kind::Mode { .. } => Steps::Cycle,
        }
    }

    /// Boundary behaviour of encoder edits.
    pub fn step_policy(self) -> StepPolicy {
        match self.descriptor().kind {
            Kind::OscWaveform { .. }
            | Kind::LfoWaveform(_)
            | Kind::Switch { .. }
            | Kind::Mode { .. } => StepPolicy::Wrap,
            _ => StepPolicy::Clamp,
        }
    }
}

fn curve_at(table: &[f32], index: usize) -> f32 {
    tables::value_at(table, index).unwrap_or(0.0)
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, p) in Param::ALL.iter().enumerate() {
            assert_eq!(*p as usize, i);
        }
    }

    #[test]
    fn stored_split() {
        assert!(Param::Monophonic.is_stored());
        assert!(!Param::ModWheel.is_stored());
        assert!(!Param::Volume.is_stored());
        assert_eq!(Param::STORED, 42);
    }

    #[test]
    fn widths_fit_in_an_index_byte() {
        for p in Param::ALL {
            assert!(p.width() >= 2 && p.width() <= 256, "{:?}", p);
        }
        assert_eq!(Param::FilterCutoff.width(), 256);
        assert_eq!(Param::Unison.width(), 3);
        assert_eq!(Param::WaveformA.width(), OSC_WAVEFORMS_A.len());
    }

    // ── Raw and stored domains ───────────────────────────────────────

    #[test]
    fn cutoff_uses_every_other_entry() {
        assert_eq!(Param::FilterCutoff.index_from_raw(64), 128);
        assert_eq!(Param::FilterCutoff.index_from_raw(127), 254);
        assert_eq!(Param::FilterCutoff.raw_from_index(255), 127);
        assert_eq!(Param::FilterCutoff.raw_scale(), 2);
    }

    #[test]
    fn waveform_raw_is_code() {
        let saw = Waveform::BandlimitSawtooth.code();
        let index = Param::WaveformA.index_from_raw(saw);
        assert_eq!(OSC_WAVEFORMS_A[usize::from(index)], Waveform::BandlimitSawtooth);
        assert_eq!(Param::WaveformA.raw_from_index(index), saw);
    }

    #[test]
    fn unknown_waveform_code_falls_back_to_first_choice() {
        assert_eq!(Param::WaveformB.index_from_raw(4), 0);
        assert_eq!(Param::WaveformB.index_from_raw(100), 0);
    }

    #[test]
    fn mode_out_of_range_clamps_to_top() {
        assert_eq!(Param::Unison.index_from_raw(1), 1);
        assert_eq!(Param::Unison.index_from_raw(99), 2);
        assert_eq!(Param::OscFx.index_from_raw(3), 2);
    }

    #[test]
    fn switch_is_on_for_any_non_zero_value() {
        assert_eq!(Param::PitchLfoSync.index_from_raw(0), 0);
        assert_eq!(Param::PitchLfoSync.index_from_raw(1), 1);
        assert_eq!(Param::PitchLfoSync.raw_from_index(1), 127);
    }

    // ── Values ───────────────────────────────────────────────────────

    #[test]
    fn lfo_rate_value_depends_on_sync() {
        let free = Param::PitchLfoRate.value(127, None);
        assert_eq!(free, LFO_MAX_RATE);
        let synced = Param::PitchLfoRate.value(127, Some(2.0));
        assert_eq!(synced, 2.0 * LFO_TEMPO[127]);
    }

    #[test]
    fn detune_value_is_a_ratio_below_one() {
        assert_eq!(Param::Detune.value(0, None), 1.0);
        assert_eq!(Param::Detune.value(127, None), 1.0 - MAX_DETUNE);
    }

    #[test]
    fn nearest_index_inverts_value() {
        for p in [
            Param::FilterResonance,
            Param::FilterEnvelope,
            Param::AmpAttack,
            Param::Detune,
            Param::PitchLfoRate,
            Param::EffectAmount,
        ] {
            for i in [0u8, 1, 40, 100, 127] {
                let v = p.value(i, None);
                assert_eq!(p.nearest_index(v, None), Some(i), "{:?} {}", p, i);
            }
        }
        assert_eq!(Param::OscMix.nearest_index(0.5, None), None);
    }

    #[test]
    fn nearest_index_for_codes() {
        let code = f32::from(Waveform::SampleHold.code());
        assert_eq!(Param::PitchLfoWaveform.nearest_index(code, None), Some(111));
        assert_eq!(Param::Unison.nearest_index(7.0, None), Some(2));
        assert_eq!(Param::Monophonic.nearest_index(1.0, None), Some(1));
    }

    // ── Pick-up and stepping ─────────────────────────────────────────

    #[test]
    fn pick_up_params() {
        let with_pick_up: heapless::Vec<Param, 16> = Param::ALL
            .iter()
            .copied()
            .filter(|p| p.pick_up_curve().is_some())
            .collect();
        assert_eq!(
            with_pick_up.as_slice(),
            &[
                Param::FilterResonance,
                Param::FilterCutoff,
                Param::FilterMixer,
                Param::PitchLfoAmount,
                Param::PitchLfoRate,
                Param::FilterLfoRate,
                Param::FilterLfoAmount,
                Param::EffectAmount,
                Param::EffectMix,
            ]
        );
    }

    #[test]
    fn steps_follow_mode() {
        assert_eq!(Param::Detune.steps(false, true), Steps::Codes(&CHORD_INDEX));
        assert_eq!(Param::Detune.steps(false, false), Steps::Curve(&POWER));
        assert_eq!(Param::FilterLfoRate.steps(true, false), Steps::Curve(&LFO_TEMPO));
        assert_eq!(Param::FilterCutoff.steps(false, false), Steps::Linear { stride: 1 });
        assert_eq!(Param::Unison.steps(false, false), Steps::Cycle);
        assert_eq!(Param::Unison.step_policy(), StepPolicy::Wrap);
        assert_eq!(Param::AmpRelease.step_policy(), StepPolicy::Clamp);
    }
}
