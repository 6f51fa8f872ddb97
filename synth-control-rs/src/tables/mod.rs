//! Immutable curve tables and the search helpers that run over them.
//!
//! A curve table maps a raw controller index (0–127, or 0–255 for
//! [`FILTER_FREQS_256`]) to the real value the engine consumes. Tables never
//! change at runtime; only the index held in a [`PatchRecord`] moves.
//!
//! [`PatchRecord`]: crate::patch::PatchRecord

mod data;
mod search;

pub use data::*;
pub use search::{
    closest, closest_by, closest_into, index_of, lower_bound, osc_mix_from_levels, step,
    step_distinct, step_distinct_by, value_at, StepPolicy,
};

use crate::engine::Waveform;

// ── Engine scaling ───────────────────────────────────────────────────

/// Largest oscillator detune, as a fraction of pitch.
pub const MAX_DETUNE: f32 = 0.0225;

/// Glide time in milliseconds at the top of the [`POWER`] curve.
pub const GLIDE_FACTOR: f32 = 5000.0;

/// Free-running LFO rate in Hz at the top of the [`POWER`] curve.
pub const LFO_MAX_RATE: f32 = 40.0;

/// Scale applied to the pitch envelope amount.
pub const OSC_MOD_MIXER_MAX: f32 = 0.5;

/// Scale applied to filter envelope and filter LFO amounts.
pub const FILTER_MOD_MIXER_MAX: f32 = 1.0;

/// [`FILTER_MIXER`] value selecting the band pass response.
pub const BANDPASS: f32 = 2.0;

/// [`PWM_RATE`] marker: pulse width follows the PW controls directly.
pub const PWM_RATE_PW_MODE: f32 = -10.0;

/// [`PWM_RATE`] marker: pulse width is modulated by the filter envelope.
pub const PWM_RATE_FILTER_ENV: f32 = -5.0;

// ── Waveform selections ──────────────────────────────────────────────

/// Waveforms selectable on oscillator 1, in encoder order.
pub const OSC_WAVEFORMS_A: [Waveform; 10] = [
    Waveform::Silent,
    Waveform::Sine,
    Waveform::BandlimitSawtooth,
    Waveform::BandlimitSquare,
    Waveform::TriangleVariable,
    Waveform::BandlimitPulse,
    Waveform::SawtoothReverse,
    Waveform::SampleHold,
    Waveform::Parabolic,
    Waveform::Harmonic,
];

/// Waveforms selectable on oscillator 2, in encoder order.
pub const OSC_WAVEFORMS_B: [Waveform; 10] = [
    Waveform::Silent,
    Waveform::Sine,
    Waveform::BandlimitSawtooth,
    Waveform::BandlimitSquare,
    Waveform::TriangleVariable,
    Waveform::BandlimitPulse,
    Waveform::SawtoothReverse,
    Waveform::SampleHold,
    Waveform::Triangle,
    Waveform::Harmonic,
];

// ── Chord unison ─────────────────────────────────────────────────────

/// Number of chords selectable in chord unison mode.
pub const N_CHORDS: usize = 19;

/// Number of voices a chord is spread across.
pub const CHORD_VOICES: usize = 12;

/// Chord names, indexed by [`CHORD_INDEX`] values.
pub const CHORD_NAMES: [&str; N_CHORDS] = [
    "Major",
    "Minor",
    "Diminished",
    "Augmented",
    "Sus 2nd",
    "Sus 4th",
    "7th Sus 2nd",
    "7th Sus 4th",
    "6th",
    "7th",
    "9th",
    "Major 7th",
    "Major 9th",
    "Major 11th",
    "Minor 6th",
    "Minor 7th",
    "Minor 9th",
    "Minor 11th",
    "All 12",
];

/// Semitone offset of each voice, per chord: `CHORD_DETUNE[voice][chord]`.
pub const CHORD_DETUNE: [[u8; N_CHORDS]; CHORD_VOICES] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 4, 2, 5, 2, 5, 4, 4, 4, 4, 4, 4, 3, 3, 2, 3, 1],
    [7, 7, 6, 8, 5, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 3, 7, 2],
    [12, 12, 0, 0, 0, 0, 10, 10, 9, 10, 10, 11, 11, 11, 9, 10, 7, 10, 3],
    [0, 0, 3, 4, 2, 5, 0, 0, 0, 0, 14, 0, 14, 14, 0, 0, 10, 14, 4],
    [4, 3, 6, 8, 5, 7, 2, 5, 4, 4, 0, 4, 0, 17, 3, 3, 0, 17, 5],
    [7, 7, 0, 0, 0, 0, 7, 7, 7, 7, 4, 7, 4, 0, 7, 7, 2, 0, 6],
    [12, 12, 3, 4, 2, 5, 10, 10, 9, 10, 7, 11, 7, 4, 9, 10, 3, 3, 7],
    [0, 0, 6, 8, 5, 7, 0, 0, 0, 0, 10, 0, 11, 7, 0, 0, 7, 7, 8],
    [4, 3, 0, 0, 0, 0, 2, 5, 4, 4, 14, 4, 14, 11, 3, 3, 10, 10, 9],
    [7, 7, 3, 4, 2, 5, 7, 7, 7, 7, 0, 7, 0, 14, 7, 7, 0, 14, 10],
    [12, 12, 6, 8, 5, 7, 10, 10, 9, 10, 0, 11, 0, 17, 9, 10, 0, 17, 11],
];

/// Name of the chord selected by a raw detune index.
pub fn chord_name(raw: u8) -> &'static str {
    let chord = value_at(&CHORD_INDEX, usize::from(raw)).unwrap_or(0);
    CHORD_NAMES[usize::from(chord).min(N_CHORDS - 1)]
}

/// Semitone offsets of every voice for the chord at a raw detune index.
pub fn chord_intervals(raw: u8) -> [u8; CHORD_VOICES] {
    let chord = value_at(&CHORD_INDEX, usize::from(raw)).unwrap_or(0);
    let chord = usize::from(chord).min(N_CHORDS - 1);
    let mut intervals = [0; CHORD_VOICES];
    for (voice, interval) in intervals.iter_mut().enumerate() {
        *interval = CHORD_DETUNE[voice][chord];
    }
    intervals
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn non_decreasing(table: &[f32]) -> bool {
        table.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn curves_are_non_decreasing() {
        for (name, table) in [
            ("LINEAR", &LINEAR[..]),
            ("LINEAR_CENTRE_ZERO", &LINEAR_CENTRE_ZERO[..]),
            ("POWER", &POWER[..]),
            ("ENV_TIMES", &ENV_TIMES[..]),
            ("FILTER_FREQS_256", &FILTER_FREQS_256[..]),
            ("FILTER_RESONANCE", &FILTER_RESONANCE[..]),
            ("FILTER_MIXER", &FILTER_MIXER[..]),
            ("KEY_TRACKING", &KEY_TRACKING[..]),
            ("PWM_RATE", &PWM_RATE[..]),
            ("ENSEMBLE_LFO", &ENSEMBLE_LFO[..]),
            ("LFO_TEMPO", &LFO_TEMPO[..]),
        ] {
            assert!(non_decreasing(table), "{} is not sorted", name);
        }
        assert!(PITCH.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn curve_endpoints() {
        assert_eq!(LINEAR[0], 0.0);
        assert_eq!(LINEAR[127], 1.0);
        assert_eq!(LINEAR[100], 0.787);
        assert_eq!(LINEAR_CENTRE_ZERO[0], -1.0);
        assert_eq!(LINEAR_CENTRE_ZERO[63], 0.0);
        assert_eq!(LINEAR_CENTRE_ZERO[64], 0.0);
        assert_eq!(LINEAR_CENTRE_ZERO[127], 1.0);
        assert_eq!(POWER[0], 0.0);
        assert_eq!(POWER[127], 1.0);
        assert_eq!(PITCH[0], -24);
        assert_eq!(PITCH[64], 0);
        assert_eq!(PITCH[127], 24);
        assert_eq!(FILTER_FREQS_256[255], 12000.0);
        assert_eq!(FILTER_MIXER[127], BANDPASS);
    }

    #[test]
    fn pwm_rate_markers_occupy_bottom_runs() {
        assert_eq!(PWM_RATE[0], PWM_RATE_PW_MODE);
        assert_eq!(PWM_RATE[1], PWM_RATE_PW_MODE);
        assert_eq!(PWM_RATE[2], PWM_RATE_FILTER_ENV);
        assert_eq!(PWM_RATE[3], PWM_RATE_FILTER_ENV);
        assert!(PWM_RATE[4] > 0.0);
    }

    #[test]
    fn osc_mix_tables_crossfade() {
        assert_eq!(OSC_MIX_A[0], 127);
        assert_eq!(OSC_MIX_B[0], 0);
        assert_eq!(OSC_MIX_A[127], 0);
        assert_eq!(OSC_MIX_B[127], 127);
        assert!(OSC_MIX_A.windows(2).all(|w| w[0] >= w[1]));
        assert!(OSC_MIX_B.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn chord_lookup_by_raw_index() {
        assert_eq!(chord_name(0), "Major");
        assert_eq!(chord_name(6), "Major");
        assert_eq!(chord_name(7), "Minor");
        assert_eq!(chord_name(127), "All 12");
        assert_eq!(chord_intervals(7)[1], 3);
        assert_eq!(chord_intervals(127), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn tempo_labels_follow_tempo_runs() {
        for i in 1..LFO_TEMPO.len() {
            let same_value = LFO_TEMPO[i] == LFO_TEMPO[i - 1];
            let same_label = LFO_TEMPO_LABELS[i] == LFO_TEMPO_LABELS[i - 1];
            assert_eq!(same_value, same_label, "index {}", i);
        }
        assert_eq!(LFO_TEMPO_LABELS[0], "4 Bars");
        assert_eq!(LFO_TEMPO_LABELS[127], "1/64");
    }
}
