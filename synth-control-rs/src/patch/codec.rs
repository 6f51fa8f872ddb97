//! Text encoding of a [`PatchRecord`].
//!
//! A patch is one line of 52 comma-delimited fields. Field 50 carries the
//! format version:
//!
//! - **0 (legacy)**: fields hold the real values the engine was set to.
//!   They are migrated on read by mapping each value to its nearest table
//!   index.
//! - **1 ([`FORMAT_VERSION`])**: fields hold table indices. This is the only
//!   format written.
//!
//! Decoding never fails. Missing trailing fields read as zero, and a field
//! that does not parse as a number reads as zero.
//!
//! [`FORMAT_VERSION`]: crate::FORMAT_VERSION

use core::fmt::{self, Write};

use heapless::String;

use super::{patch_name, PatchName, PatchRecord};
use crate::params::Param;
use crate::tables::osc_mix_from_levels;
use crate::{FORMAT_VERSION, RECORD_CAPACITY};

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 52;

/// Field holding the format version.
pub const VERSION_FIELD: usize = 50;

/// Buffer large enough for one encoded record.
pub type RecordBuffer = String<RECORD_CAPACITY>;

/// Meaning of each field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Value(Param),
    /// Written as a copy of another field, ignored on read.
    Mirror(Param),
    /// MIDI clock state of the legacy format: beat frequency, clock
    /// interval, tempo division. Written as zero.
    Clock,
    Version,
    /// Reserved. Legacy field 2 (second oscillator level) is read only by
    /// the migration.
    Spare,
}

const LAYOUT: [Field; FIELD_COUNT] = [
    Field::Name,
    Field::Value(Param::OscMix),
    Field::Spare,
    Field::Value(Param::Noise),
    Field::Value(Param::Unison),
    Field::Value(Param::OscFx),
    Field::Value(Param::Detune),
    Field::Clock,
    Field::Clock,
    Field::Clock,
    Field::Value(Param::KeyTracking),
    Field::Value(Param::Glide),
    Field::Value(Param::PitchA),
    Field::Value(Param::PitchB),
    Field::Value(Param::WaveformA),
    Field::Value(Param::WaveformB),
    Field::Value(Param::PwmSource),
    Field::Mirror(Param::PulseWidthA),
    Field::Mirror(Param::PulseWidthB),
    Field::Value(Param::PwmRate),
    Field::Value(Param::PulseWidthA),
    Field::Value(Param::PulseWidthB),
    Field::Value(Param::FilterResonance),
    Field::Value(Param::FilterCutoff),
    Field::Value(Param::FilterMixer),
    Field::Value(Param::FilterEnvelope),
    Field::Value(Param::PitchLfoAmount),
    Field::Value(Param::PitchLfoRate),
    Field::Value(Param::PitchLfoWaveform),
    Field::Value(Param::PitchLfoRetrig),
    Field::Value(Param::PitchLfoSync),
    Field::Value(Param::FilterLfoRate),
    Field::Value(Param::FilterLfoRetrig),
    Field::Value(Param::FilterLfoSync),
    Field::Value(Param::FilterLfoAmount),
    Field::Value(Param::FilterLfoWaveform),
    Field::Value(Param::FilterAttack),
    Field::Value(Param::FilterDecay),
    Field::Value(Param::FilterSustain),
    Field::Value(Param::FilterRelease),
    Field::Value(Param::AmpAttack),
    Field::Value(Param::AmpDecay),
    Field::Value(Param::AmpSustain),
    Field::Value(Param::AmpRelease),
    Field::Value(Param::EffectAmount),
    Field::Value(Param::EffectMix),
    Field::Value(Param::PitchEnvelope),
    Field::Value(Param::VelocitySensitivity),
    // Chord index. Detune and chord share one index.
    Field::Mirror(Param::Detune),
    Field::Value(Param::Monophonic),
    Field::Version,
    Field::Spare,
];

// Legacy field positions read by the migration.
const LEGACY_OSC_LEVEL_A: usize = 1;
const LEGACY_OSC_LEVEL_B: usize = 2;
const LEGACY_BEAT_HZ: usize = 7;
const LEGACY_UNISON: usize = 4;
const LEGACY_PITCH_LFO_SYNC: usize = 30;
const LEGACY_FILTER_LFO_SYNC: usize = 33;
const LEGACY_CHORD: usize = 48;

/// A decoded record and the format version it was stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub record: PatchRecord,
    pub version: u8,
}

/// Encode `record` as one newline-terminated line in the current format.
///
/// ```
/// use synth_control::patch::{encode, PatchRecord, RecordBuffer};
///
/// let mut out = RecordBuffer::new();
/// encode(&PatchRecord::default(), &mut out).unwrap();
/// assert!(out.starts_with("Initial Patch,64,0,63,"));
/// assert!(out.ends_with(",1,0\n"));
/// ```
pub fn encode<W: Write>(record: &PatchRecord, out: &mut W) -> fmt::Result {
    for (position, field) in LAYOUT.iter().enumerate() {
        if position > 0 {
            out.write_char(',')?;
        }
        match field {
            Field::Name => out.write_str(&record.name)?,
            Field::Value(param) | Field::Mirror(param) => write!(out, "{}", record.get(*param))?,
            Field::Version => write!(out, "{}", FORMAT_VERSION)?,
            Field::Clock | Field::Spare => out.write_char('0')?,
        }
    }
    out.write_char('\n')
}

/// Decode a record in any supported format version.
pub fn decode(text: &str) -> Decoded {
    let fields = split(text);
    let version = parse_version(fields[VERSION_FIELD]);
    let mut record = if version == 0 {
        decode_legacy(&fields)
    } else {
        #[cfg(feature = "defmt")]
        if version > FORMAT_VERSION {
            defmt::warn!("patch format {} is newer than {}", version, FORMAT_VERSION);
        }
        decode_indices(&fields)
    };
    record.name = patch_name(fields[0].trim());
    record.sanitize();
    Decoded { record, version }
}

/// Name and format version only, for building the catalog without decoding
/// whole records. `None` when the name field is empty.
pub fn decode_header(text: &str) -> Option<(PatchName, u8)> {
    let fields = split(text);
    let name = patch_name(fields[0].trim());
    if name.is_empty() {
        return None;
    }
    Some((name, parse_version(fields[VERSION_FIELD])))
}

fn split(text: &str) -> [&str; FIELD_COUNT] {
    let mut fields = [""; FIELD_COUNT];
    let line = text.lines().next().unwrap_or("");
    for (slot, field) in fields.iter_mut().zip(line.split(',')) {
        *slot = field;
    }
    fields
}

fn parse_number(field: &str) -> f32 {
    let value = field.trim().parse::<f32>().unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// A record cut short before the version field is in the current format.
/// Only an explicit 0 selects the legacy format.
fn parse_version(field: &str) -> u8 {
    if field.trim().is_empty() {
        FORMAT_VERSION
    } else {
        parse_index(field)
    }
}

/// Saturating conversion: negative values and NaN read as 0.
fn parse_index(field: &str) -> u8 {
    parse_number(field) as u8
}

fn decode_indices(fields: &[&str; FIELD_COUNT]) -> PatchRecord {
    let mut record = PatchRecord::zeroed();
    for (field, text) in LAYOUT.iter().zip(fields.iter()) {
        if let Field::Value(param) = field {
            record.set(*param, parse_index(text));
        }
    }
    record
}

fn decode_legacy(fields: &[&str; FIELD_COUNT]) -> PatchRecord {
    let number = |i: usize| parse_number(fields[i]);
    let beat_hz = number(LEGACY_BEAT_HZ);
    let synced = |i: usize| (number(i) > 0.0).then_some(beat_hz);
    let chord_unison = parse_index(fields[LEGACY_UNISON]) >= 2;

    let mut record = PatchRecord::zeroed();
    for (position, field) in LAYOUT.iter().enumerate() {
        let Field::Value(param) = field else {
            continue;
        };
        let value = number(position);
        let index = match param {
            Param::OscMix => Some(osc_mix_from_levels(
                number(LEGACY_OSC_LEVEL_A),
                number(LEGACY_OSC_LEVEL_B),
            )),
            Param::Detune if chord_unison => Some(parse_index(fields[LEGACY_CHORD])),
            Param::PitchLfoRate => param.nearest_index(value, synced(LEGACY_PITCH_LFO_SYNC)),
            Param::FilterLfoRate => param.nearest_index(value, synced(LEGACY_FILTER_LFO_SYNC)),
            _ => param.nearest_index(value, None),
        };
        record.set(*param, index.unwrap_or(0));
    }
    record
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Waveform;
    use crate::tables::{ENV_TIMES, FILTER_FREQS_256, LFO_TEMPO, LINEAR, OSC_MIX_A, OSC_MIX_B};

    fn populated() -> PatchRecord {
        let mut record = PatchRecord::zeroed();
        record.name = patch_name("Brass Stab");
        for (i, p) in Param::ALL[..Param::STORED].iter().enumerate() {
            // Distinct, in-range values for every field.
            let index = (i as u8 * 3 + 1).min(p.max_index());
            record.set(*p, index);
        }
        record
    }

    fn legacy_line(overrides: &[(usize, &str)]) -> std::string::String {
        let mut fields = [""; FIELD_COUNT].map(std::string::String::from);
        fields[0] = "Old Patch".into();
        fields[VERSION_FIELD] = "0.00".into();
        for (i, text) in overrides {
            fields[*i] = (*text).into();
        }
        fields.join(",")
    }

    // ── Layout ───────────────────────────────────────────────────────

    #[test]
    fn every_stored_param_has_exactly_one_field() {
        for p in &Param::ALL[..Param::STORED] {
            let count = LAYOUT.iter().filter(|f| **f == Field::Value(*p)).count();
            assert_eq!(count, 1, "{:?}", p);
        }
        assert_eq!(LAYOUT[VERSION_FIELD], Field::Version);
    }

    // ── Current format ───────────────────────────────────────────────

    #[test]
    fn round_trip_is_field_for_field() {
        let record = populated();
        let mut out = RecordBuffer::new();
        encode(&record, &mut out).unwrap();
        let decoded = decode(&out);
        assert_eq!(decoded.version, FORMAT_VERSION);
        assert_eq!(decoded.record, record);
    }

    #[test]
    fn encoded_record_has_all_fields() {
        let mut out = RecordBuffer::new();
        encode(&populated(), &mut out).unwrap();
        assert_eq!(out.trim_end().split(',').count(), FIELD_COUNT);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn malformed_numbers_read_as_zero() {
        let mut record = PatchRecord::default();
        record.set(Param::Noise, 90);
        let mut out = RecordBuffer::new();
        encode(&record, &mut out).unwrap();
        let damaged = out.replacen(",90,", ",abc,", 1);
        let decoded = decode(&damaged);
        assert_eq!(decoded.record.get(Param::Noise), 0);
        assert_eq!(decoded.record.get(Param::FilterCutoff), 255);
    }

    #[test]
    fn out_of_range_indices_are_clamped() {
        let mut line = legacy_line(&[(VERSION_FIELD, "1"), (4, "7"), (40, "300")]);
        line.push('\n');
        let decoded = decode(&line);
        assert_eq!(decoded.record.get(Param::Unison), 2);
        assert_eq!(decoded.record.get(Param::AmpAttack), 127);
    }

    #[test]
    fn header_requires_a_name() {
        assert_eq!(
            decode_header("Lead,1,2\n").map(|(n, v)| (n.as_str().into(), v)),
            Some((std::string::String::from("Lead"), FORMAT_VERSION))
        );
        let legacy = legacy_line(&[]);
        assert_eq!(decode_header(&legacy).map(|(_, v)| v), Some(0));
        assert_eq!(decode_header(",1,2\n"), None);
        assert_eq!(decode_header(""), None);
    }

    #[test]
    fn truncated_record_keeps_the_fields_it_has() {
        let mut record = populated();
        record.set(Param::Noise, 90);
        record.set(Param::FilterResonance, 90);
        record.set(Param::Glide, 40);
        let mut out = RecordBuffer::new();
        encode(&record, &mut out).unwrap();

        let kept: std::vec::Vec<&str> = out.trim_end().split(',').take(30).collect();
        let decoded = decode(&kept.join(","));
        assert_eq!(decoded.version, FORMAT_VERSION);
        assert_eq!(decoded.record.name.as_str(), "Brass Stab");
        for (i, field) in LAYOUT.iter().enumerate() {
            if let Field::Value(p) = field {
                let expected = if i < 30 { record.get(*p) } else { 0 };
                assert_eq!(decoded.record.get(*p), expected, "{:?}", p);
            }
        }
    }

    #[test]
    fn short_record_reads_missing_fields_as_zero() {
        let decoded = decode("Pad,1,0\n");
        assert_eq!(decoded.version, FORMAT_VERSION);
        assert_eq!(decoded.record.name.as_str(), "Pad");
        assert_eq!(decoded.record.get(Param::AmpSustain), 0);
        assert_eq!(decoded.record.get(Param::FilterCutoff), 0);
    }

    // ── Legacy migration ─────────────────────────────────────────────

    #[test]
    fn explicit_zero_version_selects_legacy() {
        let decoded = decode(&legacy_line(&[(23, "0.0")]));
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.record.name.as_str(), "Old Patch");
        assert_eq!(decoded.record.get(Param::FilterCutoff), 0);
    }

    #[test]
    fn legacy_osc_levels_migrate_by_pair() {
        let a = LINEAR[usize::from(OSC_MIX_A[77])];
        let b = LINEAR[usize::from(OSC_MIX_B[77])];
        let line = legacy_line(&[(1, &format!("{:.5}", a)), (2, &format!("{:.5}", b))]);
        assert_eq!(decode(&line).record.get(Param::OscMix), 77);
    }

    #[test]
    fn legacy_real_values_map_to_nearest_index() {
        let line = legacy_line(&[
            (23, &format!("{}", FILTER_FREQS_256[200])),
            (40, &format!("{}", ENV_TIMES[90] + 0.4)),
            (12, "-12"),
            (14, &format!("{}", Waveform::BandlimitSquare.code())),
            (28, &format!("{}", Waveform::Square.code())),
            (29, "1"),
        ]);
        let record = decode(&line).record;
        assert_eq!(record.get(Param::FilterCutoff), 200);
        assert_eq!(record.get(Param::AmpAttack), 90);
        assert_eq!(Param::PitchA.value(record.get(Param::PitchA), None), -12.0);
        assert_eq!(record.get(Param::WaveformA), 3);
        assert_eq!(record.get(Param::PitchLfoWaveform), 92);
        assert_eq!(record.get(Param::PitchLfoRetrig), 1);
    }

    #[test]
    fn legacy_synced_lfo_rate_uses_stored_beat() {
        let beat = 2.0;
        let rate = beat * LFO_TEMPO[40];
        let line = legacy_line(&[
            (7, "2"),
            (27, &format!("{}", rate)),
            (30, "1"),
        ]);
        let record = decode(&line).record;
        assert_eq!(record.get(Param::PitchLfoSync), 1);
        let index = record.get(Param::PitchLfoRate);
        assert_eq!(LFO_TEMPO[usize::from(index)], LFO_TEMPO[40]);
    }

    #[test]
    fn legacy_chord_unison_takes_chord_field() {
        let line = legacy_line(&[(4, "2"), (6, "0.99"), (48, "30")]);
        let record = decode(&line).record;
        assert_eq!(record.get(Param::Unison), 2);
        assert_eq!(record.get(Param::Detune), 30);
    }
}
