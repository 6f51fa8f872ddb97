//! The synthesis engine as seen from the control core.
//!
//! The engine is an external collaborator: oscillators, filters and
//! envelopes live behind [`SynthEngine`]. The core only pushes derived
//! values through setters and reads them back through getters for reverse
//! mapping (reinitialising a [`PatchRecord`] from live state).
//!
//! [`PatchRecord`]: crate::patch::PatchRecord

use crate::tables::CHORD_VOICES;

/// Continuous engine parameters, written as derived real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    OscLevelA,
    OscLevelB,
    /// Pink noise above zero, white noise below.
    Noise,
    /// Oscillator 2 tuning ratio, `1.0` for no detune.
    Detune,
    KeyTracking,
    /// Glide amount, 0..1. The engine scales it by
    /// [`GLIDE_FACTOR`](crate::tables::GLIDE_FACTOR).
    Glide,
    /// Semitone offset of oscillator 1.
    PitchA,
    /// Semitone offset of oscillator 2.
    PitchB,
    PulseWidthA,
    PulseWidthB,
    PwmAmountA,
    PwmAmountB,
    /// PWM LFO rate in Hz, or one of the PWM rate markers.
    PwmRate,
    FilterResonance,
    /// Filter cutoff in Hz.
    FilterCutoff,
    FilterMixer,
    FilterEnvelope,
    PitchLfoAmount,
    /// Pitch LFO rate in Hz.
    PitchLfoRate,
    FilterLfoRate,
    FilterLfoAmount,
    /// Envelope stage times in milliseconds, sustain as a level.
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
    ModWheel,
    Volume,
}

impl Target {
    /// Number of [`Target`] variants.
    pub const COUNT: usize = Target::Volume as usize + 1;
}

/// Two-state engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    PitchLfoRetrig,
    PitchLfoClockSync,
    FilterLfoRetrig,
    FilterLfoClockSync,
    /// PWM follows the filter envelope instead of the PWM LFO.
    PwmFromFilterEnv,
    Monophonic,
}

impl Switch {
    /// Number of [`Switch`] variants.
    pub const COUNT: usize = Switch::Monophonic as usize + 1;
}

/// Small enumerated engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// 0 off, 1 detuned unison, 2 chord unison.
    Unison,
    /// 0 off, 1 cross modulation, 2 XOR.
    OscFx,
    /// Chord played in chord unison, an index into
    /// [`CHORD_NAMES`](crate::tables::CHORD_NAMES).
    Chord,
    /// Velocity response curve, 0 (none) to 4.
    VelocityCurve,
}

impl Mode {
    /// Number of [`Mode`] variants.
    pub const COUNT: usize = Mode::VelocityCurve as usize + 1;
}

/// Waveform-selectable engine sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveSlot {
    OscA,
    OscB,
    PitchLfo,
    FilterLfo,
}

impl WaveSlot {
    /// Number of [`WaveSlot`] variants.
    pub const COUNT: usize = WaveSlot::FilterLfo as usize + 1;
}

/// Engine waveforms. The discriminant is the code sent over MIDI CC and
/// stored in legacy patch files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Waveform {
    #[default]
    Sine = 0,
    Sawtooth = 1,
    Square = 2,
    Triangle = 3,
    Pulse = 5,
    SawtoothReverse = 6,
    SampleHold = 7,
    TriangleVariable = 8,
    BandlimitSawtooth = 9,
    BandlimitSquare = 11,
    BandlimitPulse = 12,
    Silent = 19,
    Parabolic = 20,
    Harmonic = 21,
}

impl Waveform {
    const ALL: [Waveform; 14] = [
        Waveform::Sine,
        Waveform::Sawtooth,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Pulse,
        Waveform::SawtoothReverse,
        Waveform::SampleHold,
        Waveform::TriangleVariable,
        Waveform::BandlimitSawtooth,
        Waveform::BandlimitSquare,
        Waveform::BandlimitPulse,
        Waveform::Silent,
        Waveform::Parabolic,
        Waveform::Harmonic,
    ];

    /// MIDI/storage code of this waveform.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Waveform for a MIDI/storage code, if the code names one.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|w| w.code() == code)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Silent => "Off",
            Waveform::SampleHold => "Sample & Hold",
            Waveform::Sine => "Sine",
            Waveform::Square | Waveform::BandlimitSquare => "Square",
            Waveform::Triangle => "Triangle",
            Waveform::Sawtooth | Waveform::BandlimitSawtooth => "Sawtooth",
            Waveform::SawtoothReverse => "Ramp",
            Waveform::Pulse | Waveform::BandlimitPulse => "Var. Pulse",
            Waveform::TriangleVariable => "Var. Triangle",
            Waveform::Parabolic => "Parabolic",
            Waveform::Harmonic => "Harmonic",
        }
    }
}

/// Parameter-setting interface of the synthesis engine.
///
/// Setters are fire-and-forget. Getters return the last value applied and
/// are used only for reverse mapping, never to read-modify-write.
pub trait SynthEngine {
    fn set(&mut self, target: Target, value: f32);
    fn get(&self, target: Target) -> f32;

    fn set_switch(&mut self, switch: Switch, on: bool);
    fn switch(&self, switch: Switch) -> bool;

    fn set_mode(&mut self, mode: Mode, value: u8);
    fn mode(&self, mode: Mode) -> u8;

    fn set_waveform(&mut self, slot: WaveSlot, waveform: Waveform);
    fn waveform(&self, slot: WaveSlot) -> Waveform;

    fn note_on(&mut self, note: u8, velocity: u8);
    fn note_off(&mut self, note: u8);
    fn all_notes_off(&mut self);
    /// Force every envelope into its release stage.
    fn close_envelopes(&mut self);
    /// Semitone offset of each voice in chord unison.
    fn set_chord_intervals(&mut self, intervals: [u8; CHORD_VOICES]);

    /// Pitch bend in semitones.
    fn pitch_bend(&mut self, semitones: f32);

    /// A new beat frequency (Hz) measured from MIDI clock.
    fn midi_clock(&mut self, beat_hz: f32);
    /// MIDI clock start: realign LFO phase.
    fn midi_clock_start(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_codes_round_trip() {
        for w in Waveform::ALL {
            assert_eq!(Waveform::from_code(w.code()), Some(w));
        }
        assert_eq!(Waveform::from_code(4), None);
        assert_eq!(Waveform::from_code(127), None);
    }

    #[test]
    fn bandlimited_variants_share_names() {
        assert_eq!(Waveform::BandlimitSquare.name(), Waveform::Square.name());
        assert_eq!(Waveform::Silent.name(), "Off");
    }
}
