//! Parameter mapping: stored indices in, engine values out.
//!
//! A [`VoiceGroup`] owns one engine handle and the [`PatchRecord`] that
//! describes its current sound. Every parameter update goes through
//! [`VoiceGroup::apply_index`], which
//!
//! 1. stores the index in the record (for stored parameters),
//! 2. looks up the real value through the parameter's [`Kind`] and writes
//!    it to the engine,
//! 3. returns the readout the display should show.
//!
//! Applying the same index twice yields the same engine state and the same
//! readout. The reverse direction, [`VoiceGroup::capture_from_engine`],
//! rebuilds the record from whatever the engine currently holds.

use crate::control::section_of;
use crate::display::Display;
use crate::engine::{Mode, SynthEngine, Switch, Target, Waveform};
use crate::params::{readout, Kind, Param, Readout};
use crate::patch::PatchRecord;
use crate::tables::{
    self, CHORD_INDEX, LFO_WAVEFORM_CODES, LINEAR, LINEAR_CENTRE_ZERO, OSC_MIX_A, OSC_MIX_B, POWER,
};

/// Beat frequency assumed until MIDI clock says otherwise (120 BPM).
pub const DEFAULT_BEAT_HZ: f32 = 2.0;

/// One engine and the patch record it is playing.
pub struct VoiceGroup<E: SynthEngine> {
    engine: E,
    record: PatchRecord,
    beat_hz: f32,
    mod_wheel_depth: f32,
}

impl<E: SynthEngine> VoiceGroup<E> {
    /// Wrap `engine`. The engine is not touched until a record is applied.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            record: PatchRecord::default(),
            beat_hz: DEFAULT_BEAT_HZ,
            mod_wheel_depth: 0.2,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Give the engine back.
    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn record(&self) -> &PatchRecord {
        &self.record
    }

    pub fn set_name(&mut self, name: &str) {
        self.record.name = crate::patch::patch_name(name);
    }

    pub fn beat_hz(&self) -> f32 {
        self.beat_hz
    }

    /// Multiplier applied to the mod wheel curve.
    pub fn set_mod_wheel_depth(&mut self, depth: f32) {
        self.mod_wheel_depth = depth;
    }

    /// Apply a raw 0–127 controller value.
    pub fn apply(&mut self, param: Param, raw: u8) -> Readout {
        self.apply_index(param, param.index_from_raw(raw))
    }

    /// Apply a raw controller value and show the result.
    pub fn update<D: Display + ?Sized>(&mut self, param: Param, raw: u8, display: &mut D) {
        let shown = self.apply(param, raw);
        display.show_parameter(shown.label, &shown.value, section_of(param));
    }

    /// Apply a stored index, clamped into the parameter's table.
    pub fn apply_index(&mut self, param: Param, index: u8) -> Readout {
        let index = index.min(param.max_index());
        self.record.set(param, index);
        self.write(param, index);
        readout(param, index, &self.engine)
    }

    /// Replace the current record and push all of it to the engine.
    ///
    /// Switches and modes go first, so clock sync is known before LFO
    /// rates are chosen and unison mode before detune.
    pub fn apply_record(&mut self, record: &PatchRecord) {
        self.record = record.clone();
        self.record.sanitize();
        let record = self.record.clone();
        for first_pass in [true, false] {
            for (param, index) in record.iter() {
                let is_setting = matches!(
                    param.descriptor().kind,
                    Kind::Switch { .. } | Kind::Mode { .. }
                );
                if is_setting == first_pass {
                    self.write(param, index);
                }
            }
        }
    }

    /// Rebuild the record from live engine state by nearest-index search.
    /// The name is kept.
    pub fn capture_from_engine(&mut self) -> &PatchRecord {
        for param in &Param::ALL[..Param::STORED] {
            if let Some(index) = self.read_back(*param) {
                self.record.set(*param, index);
            }
        }
        &self.record
    }

    /// A new MIDI clock tempo. Clock-synced LFO rates are re-applied.
    pub fn retempo(&mut self, beat_hz: f32) {
        self.beat_hz = beat_hz;
        for param in [Param::PitchLfoRate, Param::FilterLfoRate] {
            if let Kind::LfoRate { sync, .. } = param.descriptor().kind {
                if self.engine.switch(sync) {
                    self.write(param, self.record.get(param));
                }
            }
        }
    }

    /// Push one index to the engine.
    fn write(&mut self, param: Param, index: u8) {
        let i = usize::from(index);
        let engine = &mut self.engine;
        match param.descriptor().kind {
            Kind::Curve { target, .. } => engine.set(target, param.value(index, None)),
            Kind::OscMix => {
                let i = i.min(127);
                engine.set(Target::OscLevelA, LINEAR[usize::from(OSC_MIX_A[i])]);
                engine.set(Target::OscLevelB, LINEAR[usize::from(OSC_MIX_B[i])]);
            }
            Kind::Detune => {
                engine.set(Target::Detune, param.value(index, None));
                engine.set_mode(Mode::Chord, tables::value_at(&CHORD_INDEX, i).unwrap_or(0));
                engine.set_chord_intervals(tables::chord_intervals(index));
            }
            Kind::Pitch(target) => engine.set(target, param.value(index, None)),
            Kind::PulseWidth { width, amount } => {
                engine.set(width, curve(&LINEAR_CENTRE_ZERO, i));
                engine.set(amount, curve(&LINEAR, i));
            }
            Kind::LfoRate { target, sync } => {
                // Sync state decides the table, so read it first.
                let beat = engine.switch(sync).then_some(self.beat_hz);
                engine.set(target, param.value(index, beat));
            }
            Kind::OscWaveform { slot, choices } => {
                let waveform = choices.get(i).copied().unwrap_or_default();
                engine.set_waveform(slot, waveform);
            }
            Kind::LfoWaveform(slot) => {
                let code = tables::value_at(&LFO_WAVEFORM_CODES, i).unwrap_or(0);
                engine.set_waveform(slot, Waveform::from_code(code).unwrap_or_default());
            }
            Kind::Switch { switch, .. } => {
                engine.set_switch(switch, index > 0);
                if let Some(rate) = rate_synced_by(switch) {
                    self.write(rate, self.record.get(rate));
                }
            }
            Kind::Mode { mode, names } => {
                let top = u8::try_from(names.len().saturating_sub(1)).unwrap_or(0);
                engine.set_mode(mode, index.min(top));
            }
            Kind::ModWheel => {
                let depth = curve(&POWER, i) * self.mod_wheel_depth;
                engine.set(Target::ModWheel, depth);
            }
            Kind::PwmAmount => {
                let amount = curve(&LINEAR, i);
                engine.set(Target::PwmAmountA, amount);
                engine.set(Target::PwmAmountB, amount);
            }
        }
    }

    /// Nearest stored index for the engine's current state.
    fn read_back(&self, param: Param) -> Option<u8> {
        let engine = &self.engine;
        match param.descriptor().kind {
            Kind::Curve { target, .. } => param.nearest_index(engine.get(target), None),
            Kind::OscMix => Some(tables::osc_mix_from_levels(
                engine.get(Target::OscLevelA),
                engine.get(Target::OscLevelB),
            )),
            Kind::Detune if engine.mode(Mode::Unison) == 2 => {
                let first = tables::index_of(&CHORD_INDEX, engine.mode(Mode::Chord));
                u8::try_from(first.min(CHORD_INDEX.len() - 1)).ok()
            }
            Kind::Detune => param.nearest_index(engine.get(Target::Detune), None),
            Kind::Pitch(target) => param.nearest_index(engine.get(target), None),
            Kind::PulseWidth { width, .. } => param.nearest_index(engine.get(width), None),
            Kind::LfoRate { target, sync } => {
                let beat = engine.switch(sync).then_some(self.beat_hz);
                param.nearest_index(engine.get(target), beat)
            }
            Kind::OscWaveform { slot, .. } | Kind::LfoWaveform(slot) => {
                param.nearest_index(f32::from(engine.waveform(slot).code()), None)
            }
            Kind::Switch { switch, .. } => Some(u8::from(engine.switch(switch))),
            Kind::Mode { mode, .. } => Some(engine.mode(mode).min(param.max_index())),
            Kind::ModWheel | Kind::PwmAmount => None,
        }
    }
}

fn curve(table: &[f32], index: usize) -> f32 {
    tables::value_at(table, index).unwrap_or(0.0)
}

/// The LFO rate whose table a sync switch selects.
fn rate_synced_by(switch: Switch) -> Option<Param> {
    match switch {
        Switch::PitchLfoClockSync => Some(Param::PitchLfoRate),
        Switch::FilterLfoClockSync => Some(Param::FilterLfoRate),
        _ => None,
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Section;
    use crate::engine::WaveSlot;
    use crate::patch::patch_name;
    use crate::tables::{
        FILTER_FREQS_256, LFO_MAX_RATE, LFO_TEMPO, LFO_TEMPO_LABELS, OSC_WAVEFORMS_B,
    };
    use crate::testing::{RecordingDisplay, RecordingEngine, Shown};

    fn group() -> VoiceGroup<RecordingEngine> {
        VoiceGroup::new(RecordingEngine::default())
    }

    // ── Forward mapping ──────────────────────────────────────────────

    #[test]
    fn apply_is_idempotent() {
        let mut g = group();
        let first = g.apply(Param::FilterResonance, 90);
        let value = g.engine().get(Target::FilterResonance);
        let second = g.apply(Param::FilterResonance, 90);
        assert_eq!(first, second);
        assert_eq!(g.engine().get(Target::FilterResonance), value);
        assert_eq!(g.record().get(Param::FilterResonance), 90);
    }

    #[test]
    fn cutoff_raw_selects_every_other_frequency() {
        let mut g = group();
        g.apply(Param::FilterCutoff, 100);
        assert_eq!(g.engine().get(Target::FilterCutoff), FILTER_FREQS_256[200]);
        assert_eq!(g.record().get(Param::FilterCutoff), 200);
    }

    #[test]
    fn osc_mix_sets_both_levels() {
        let mut g = group();
        g.apply(Param::OscMix, 77);
        assert_eq!(g.engine().get(Target::OscLevelA), LINEAR[usize::from(OSC_MIX_A[77])]);
        assert_eq!(g.engine().get(Target::OscLevelB), LINEAR[usize::from(OSC_MIX_B[77])]);
    }

    #[test]
    fn pulse_width_drives_width_and_amount() {
        let mut g = group();
        g.apply(Param::PulseWidthB, 127);
        assert_eq!(g.engine().get(Target::PulseWidthB), 1.0);
        assert_eq!(g.engine().get(Target::PwmAmountB), LINEAR[127]);
    }

    #[test]
    fn detune_also_selects_chord() {
        let mut g = group();
        g.apply(Param::Detune, 20);
        assert_eq!(g.engine().mode(Mode::Chord), CHORD_INDEX[20]);
        assert!(g.engine().get(Target::Detune) < 1.0);
    }

    #[test]
    fn detune_sends_chord_intervals() {
        let mut g = group();
        g.apply(Param::Detune, 7);
        assert_eq!(g.engine().chord[..3], [0, 3, 7]);
        g.apply(Param::Detune, 127);
        assert_eq!(g.engine().chord, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn waveform_raw_is_a_code() {
        let mut g = group();
        g.apply(Param::WaveformB, Waveform::Triangle.code());
        assert_eq!(g.engine().waveform(WaveSlot::OscB), Waveform::Triangle);
        let index = usize::from(g.record().get(Param::WaveformB));
        assert_eq!(OSC_WAVEFORMS_B[index], Waveform::Triangle);

        g.apply(Param::FilterLfoWaveform, 100);
        assert_eq!(g.engine().waveform(WaveSlot::FilterLfo), Waveform::Square);
    }

    #[test]
    fn mod_wheel_uses_depth() {
        let mut g = group();
        g.set_mod_wheel_depth(0.5);
        g.apply(Param::ModWheel, 127);
        assert_eq!(g.engine().get(Target::ModWheel), 0.5);
        assert_eq!(g.record(), &PatchRecord::default());
    }

    #[test]
    fn pwm_amount_overrides_both_oscillators() {
        let mut g = group();
        g.apply(Param::PwmAmount, 64);
        assert_eq!(g.engine().get(Target::PwmAmountA), LINEAR[64]);
        assert_eq!(g.engine().get(Target::PwmAmountB), LINEAR[64]);
    }

    #[test]
    fn update_shows_label_value_and_section() {
        let mut g = group();
        let mut display = RecordingDisplay::default();
        g.update(Param::AmpAttack, 0, &mut display);
        assert_eq!(
            display.last(),
            Some(&Shown::Parameter {
                label: "Attack".into(),
                value: "1 ms".into(),
                section: Some(Section::AmpEnvelope),
            })
        );
    }

    // ── Tempo sync ───────────────────────────────────────────────────

    #[test]
    fn lfo_rate_reads_sync_before_choosing_table() {
        let mut g = group();
        g.apply(Param::PitchLfoRate, 127);
        assert_eq!(g.engine().get(Target::PitchLfoRate), LFO_MAX_RATE);

        g.apply(Param::PitchLfoSync, 127);
        assert_eq!(
            g.engine().get(Target::PitchLfoRate),
            DEFAULT_BEAT_HZ * LFO_TEMPO[127]
        );
        let shown = g.apply(Param::PitchLfoRate, 127);
        assert_eq!(shown.value.as_str(), LFO_TEMPO_LABELS[127]);
    }

    #[test]
    fn retempo_only_touches_synced_rates() {
        let mut g = group();
        g.apply(Param::FilterLfoSync, 127);
        g.apply(Param::FilterLfoRate, 64);
        g.apply(Param::PitchLfoRate, 64);
        let free = g.engine().get(Target::PitchLfoRate);
        g.retempo(4.0);
        assert_eq!(g.engine().get(Target::FilterLfoRate), 4.0 * LFO_TEMPO[64]);
        assert_eq!(g.engine().get(Target::PitchLfoRate), free);
    }

    // ── Records ──────────────────────────────────────────────────────

    #[test]
    fn apply_record_then_capture_round_trips() {
        let mut record = PatchRecord::default();
        record.name = patch_name("Strings");
        record.set(Param::OscMix, 77);
        record.set(Param::FilterCutoff, 201);
        record.set(Param::PitchLfoSync, 1);
        record.set(Param::PitchLfoRate, 43);
        record.set(Param::Unison, 1);
        record.set(Param::Detune, 90);
        record.set(Param::WaveformA, 5);
        record.set(Param::PitchLfoWaveform, 30);
        record.set(Param::Monophonic, 1);

        let mut g = group();
        g.apply_record(&record);
        let mut other = group();
        *other.engine_mut() = g.engine().clone();
        other.set_name("Strings");
        let captured = other.capture_from_engine().clone();

        for (param, index) in record.iter() {
            let got = captured.get(param);
            // Runs of equal values come back as the first index of the run.
            assert_eq!(
                param.value(got, Some(DEFAULT_BEAT_HZ)),
                param.value(index, Some(DEFAULT_BEAT_HZ)),
                "{:?}",
                param
            );
        }
        assert_eq!(captured.get(Param::OscMix), 77);
        assert_eq!(captured.get(Param::FilterCutoff), 201);
        assert_eq!(captured.name.as_str(), "Strings");
    }

    #[test]
    fn capture_in_chord_mode_reads_the_chord() {
        let mut g = group();
        g.apply(Param::Unison, 2);
        g.apply(Param::Detune, 45);
        g.capture_from_engine();
        let index = g.record().get(Param::Detune);
        assert_eq!(CHORD_INDEX[usize::from(index)], CHORD_INDEX[45]);
        assert_eq!(index, 42);
    }

    #[test]
    fn apply_record_is_silent_and_complete() {
        let mut g = group();
        g.apply_record(&PatchRecord::default());
        assert_eq!(g.engine().get(Target::FilterCutoff), FILTER_FREQS_256[255]);
        assert_eq!(g.engine().get(Target::AmpSustain), 1.0);
        assert_eq!(g.record().name.as_str(), "Initial Patch");
    }
}
