//! MIDI control-change numbers.
//!
//! One controller per parameter. The numbers are part of the instrument's
//! external interface and never change between firmware revisions.

use super::Param;

pub const MOD_WHEEL: u8 = 1;
pub const GLIDE: u8 = 5;
pub const VOLUME: u8 = 7;
pub const UNISON: u8 = 9;
pub const OSC_FX: u8 = 12;
pub const WAVEFORM_A: u8 = 14;
pub const WAVEFORM_B: u8 = 15;
pub const PITCH_A: u8 = 16;
pub const PITCH_B: u8 = 17;
pub const DETUNE: u8 = 18;
pub const PWM_SOURCE: u8 = 19;
pub const OSC_MIX: u8 = 20;
pub const NOISE: u8 = 21;
pub const PWM_RATE: u8 = 22;
pub const PWM_AMOUNT: u8 = 23;
pub const PULSE_WIDTH_A: u8 = 24;
pub const PULSE_WIDTH_B: u8 = 25;
pub const KEY_TRACKING: u8 = 26;
pub const FILTER_MIXER: u8 = 27;
pub const FILTER_ENVELOPE: u8 = 28;
pub const PITCH_ENVELOPE: u8 = 29;
pub const PITCH_LFO_AMOUNT: u8 = 30;
pub const PITCH_LFO_RATE: u8 = 31;
pub const PITCH_LFO_WAVEFORM: u8 = 32;
pub const PITCH_LFO_RETRIG: u8 = 33;
pub const PITCH_LFO_SYNC: u8 = 34;
pub const FILTER_LFO_RATE: u8 = 35;
pub const FILTER_LFO_AMOUNT: u8 = 36;
pub const FILTER_LFO_WAVEFORM: u8 = 37;
pub const FILTER_LFO_RETRIG: u8 = 38;
pub const FILTER_LFO_SYNC: u8 = 39;
pub const FILTER_RESONANCE: u8 = 71;
pub const AMP_RELEASE: u8 = 72;
pub const AMP_ATTACK: u8 = 73;
pub const FILTER_CUTOFF: u8 = 74;
pub const AMP_DECAY: u8 = 75;
pub const AMP_SUSTAIN: u8 = 79;
pub const FILTER_ATTACK: u8 = 85;
pub const FILTER_DECAY: u8 = 86;
pub const FILTER_SUSTAIN: u8 = 87;
pub const FILTER_RELEASE: u8 = 88;
pub const EFFECT_AMOUNT: u8 = 93;
pub const EFFECT_MIX: u8 = 94;
pub const ALL_NOTES_OFF: u8 = 123;

/// What a control-change message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CcAction {
    Set(Param),
    AllNotesOff,
}

/// Controller → parameter. Unlisted parameters (monophonic, velocity
/// sensitivity) are set only from patches.
const ROUTES: [(u8, Param); 43] = [
    (MOD_WHEEL, Param::ModWheel),
    (GLIDE, Param::Glide),
    (VOLUME, Param::Volume),
    (UNISON, Param::Unison),
    (OSC_FX, Param::OscFx),
    (WAVEFORM_A, Param::WaveformA),
    (WAVEFORM_B, Param::WaveformB),
    (PITCH_A, Param::PitchA),
    (PITCH_B, Param::PitchB),
    (DETUNE, Param::Detune),
    (PWM_SOURCE, Param::PwmSource),
    (OSC_MIX, Param::OscMix),
    (NOISE, Param::Noise),
    (PWM_RATE, Param::PwmRate),
    (PWM_AMOUNT, Param::PwmAmount),
    (PULSE_WIDTH_A, Param::PulseWidthA),
    (PULSE_WIDTH_B, Param::PulseWidthB),
    (KEY_TRACKING, Param::KeyTracking),
    (FILTER_MIXER, Param::FilterMixer),
    (FILTER_ENVELOPE, Param::FilterEnvelope),
    (PITCH_ENVELOPE, Param::PitchEnvelope),
    (PITCH_LFO_AMOUNT, Param::PitchLfoAmount),
    (PITCH_LFO_RATE, Param::PitchLfoRate),
    (PITCH_LFO_WAVEFORM, Param::PitchLfoWaveform),
    (PITCH_LFO_RETRIG, Param::PitchLfoRetrig),
    (PITCH_LFO_SYNC, Param::PitchLfoSync),
    (FILTER_LFO_RATE, Param::FilterLfoRate),
    (FILTER_LFO_AMOUNT, Param::FilterLfoAmount),
    (FILTER_LFO_WAVEFORM, Param::FilterLfoWaveform),
    (FILTER_LFO_RETRIG, Param::FilterLfoRetrig),
    (FILTER_LFO_SYNC, Param::FilterLfoSync),
    (FILTER_RESONANCE, Param::FilterResonance),
    (AMP_RELEASE, Param::AmpRelease),
    (AMP_ATTACK, Param::AmpAttack),
    (FILTER_CUTOFF, Param::FilterCutoff),
    (AMP_DECAY, Param::AmpDecay),
    (AMP_SUSTAIN, Param::AmpSustain),
    (FILTER_ATTACK, Param::FilterAttack),
    (FILTER_DECAY, Param::FilterDecay),
    (FILTER_SUSTAIN, Param::FilterSustain),
    (FILTER_RELEASE, Param::FilterRelease),
    (EFFECT_AMOUNT, Param::EffectAmount),
    (EFFECT_MIX, Param::EffectMix),
];

/// Route a controller number. Unknown controllers return `None`.
pub fn action(controller: u8) -> Option<CcAction> {
    if controller == ALL_NOTES_OFF {
        return Some(CcAction::AllNotesOff);
    }
    ROUTES
        .iter()
        .find(|(cc, _)| *cc == controller)
        .map(|(_, param)| CcAction::Set(*param))
}

/// Controller number of a parameter, if it has one.
pub fn controller(param: Param) -> Option<u8> {
    ROUTES.iter().find(|(_, p)| *p == param).map(|(cc, _)| *cc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_unique() {
        for (i, (cc, p)) in ROUTES.iter().enumerate() {
            for (other_cc, other_p) in &ROUTES[i + 1..] {
                assert_ne!(cc, other_cc);
                assert_ne!(p, other_p);
            }
            assert_ne!(*cc, ALL_NOTES_OFF);
        }
    }

    #[test]
    fn controller_and_action_agree() {
        for p in Param::ALL {
            if let Some(cc) = controller(p) {
                assert_eq!(action(cc), Some(CcAction::Set(p)));
            }
        }
    }

    #[test]
    fn every_live_param_has_a_controller() {
        let routed = Param::ALL.iter().filter(|p| controller(**p).is_some()).count();
        assert_eq!(routed, Param::COUNT - 2);
    }

    #[test]
    fn patch_only_params_have_no_controller() {
        assert_eq!(controller(Param::Monophonic), None);
        assert_eq!(controller(Param::VelocitySensitivity), None);
    }

    #[test]
    fn unknown_controllers_are_ignored() {
        assert_eq!(action(0), None);
        assert_eq!(action(120), None);
        assert_eq!(action(ALL_NOTES_OFF), Some(CcAction::AllNotesOff));
    }
}
