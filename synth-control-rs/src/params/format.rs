//! Human-readable parameter readouts.

use core::fmt::Write;

use heapless::String;

use super::{Kind, Param, Unit};
use crate::engine::{Mode, SynthEngine, Switch, Target};
use crate::tables::{
    self, BANDPASS, GLIDE_FACTOR, LFO_TEMPO_LABELS, LINEAR, OSC_MIX_A, OSC_MIX_B,
    PWM_RATE_FILTER_ENV, PWM_RATE_PW_MODE,
};

/// Capacity of a formatted value string.
pub const READOUT_CAPACITY: usize = 24;

/// Label and formatted value of one parameter update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub label: &'static str,
    pub value: String<READOUT_CAPACITY>,
}

impl Readout {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }
}

/// Format the readout for `param` at stored `index`.
///
/// Some readouts depend on other engine state (pulse width shows PWM
/// amount unless PW mode is selected; LFO rates show a tempo division when
/// clock-synced; detune shows the chord in chord unison), so the engine is
/// consulted after the value has been applied.
pub fn readout<E: SynthEngine + ?Sized>(param: Param, index: u8, engine: &E) -> Readout {
    let descriptor = param.descriptor();
    let mut out = Readout::new(descriptor.label);
    let i = usize::from(index);
    let buf = &mut out.value;
    // Overflowing the fixed buffer truncates the readout, nothing more.
    let _ = match descriptor.kind {
        Kind::Curve { unit, .. } => format_unit(buf, unit, param.value(index, None)),
        Kind::OscMix => {
            let a = LINEAR[usize::from(OSC_MIX_A[i.min(127)])];
            let b = LINEAR[usize::from(OSC_MIX_B[i.min(127)])];
            write!(buf, "{:.2} : {:.2}", a, b)
        }
        Kind::Detune => {
            if engine.mode(Mode::Unison) == 2 {
                out.label = "Chord";
                buf.push_str(tables::chord_name(index)).map_err(|_| core::fmt::Error)
            } else {
                let ratio = param.value(index, None);
                write!(buf, "{:.2} %", (1.0 - ratio) * 100.0)
            }
        }
        Kind::Pitch(_) => {
            let semitones = param.value(index, None) as i32;
            if semitones > 0 {
                write!(buf, "+{}", semitones)
            } else {
                write!(buf, "{}", semitones)
            }
        }
        Kind::PulseWidth { width, amount } => {
            if engine.get(Target::PwmRate) == PWM_RATE_PW_MODE {
                write!(buf, "{:.2}", engine.get(width))
            } else {
                out.label = if width == Target::PulseWidthA {
                    "1. PWM Amt"
                } else {
                    "2. PWM Amt"
                };
                let source = if engine.switch(Switch::PwmFromFilterEnv) {
                    "F. Env"
                } else {
                    "LFO"
                };
                write!(buf, "{} {:.2}", source, engine.get(amount))
            }
        }
        Kind::LfoRate { target, sync } => {
            if engine.switch(sync) {
                let label = tables::value_at(&LFO_TEMPO_LABELS, i).unwrap_or("");
                buf.push_str(label).map_err(|_| core::fmt::Error)
            } else {
                write!(buf, "{:.2} Hz", engine.get(target))
            }
        }
        Kind::OscWaveform { choices, .. } => {
            let name = choices.get(i).map(|w| w.name()).unwrap_or("");
            buf.push_str(name).map_err(|_| core::fmt::Error)
        }
        Kind::LfoWaveform(slot) => buf
            .push_str(engine.waveform(slot).name())
            .map_err(|_| core::fmt::Error),
        Kind::Switch { off, on, .. } => buf
            .push_str(if index > 0 { on } else { off })
            .map_err(|_| core::fmt::Error),
        Kind::Mode { names, .. } => {
            let name = names.get(i).copied().unwrap_or("");
            buf.push_str(name).map_err(|_| core::fmt::Error)
        }
        Kind::ModWheel => write!(buf, "{:.2}", engine.get(Target::ModWheel)),
        Kind::PwmAmount => {
            let amount = param.value(index, None);
            write!(buf, "{:.2} : {:.2}", amount, amount)
        }
    };
    out
}

fn format_unit<const N: usize>(buf: &mut String<N>, unit: Unit, value: f32) -> core::fmt::Result {
    match unit {
        Unit::Level => write!(buf, "{:.2}", value),
        Unit::Bipolar => write!(buf, "{:+.2}", value),
        Unit::Percent => write!(buf, "{} %", (value * 100.0) as i32),
        Unit::Millis => millis(buf, value),
        Unit::Glide => millis(buf, value * GLIDE_FACTOR),
        Unit::Hertz => {
            if value >= 100.0 {
                write!(buf, "{} Hz", value as i32)
            } else {
                write!(buf, "{:.2} Hz", value)
            }
        }
        Unit::FilterMixer => {
            if value == BANDPASS {
                buf.push_str("Band Pass").map_err(|_| core::fmt::Error)
            } else if value == 0.0 {
                buf.push_str("Low Pass").map_err(|_| core::fmt::Error)
            } else if value == 1.0 {
                buf.push_str("High Pass").map_err(|_| core::fmt::Error)
            } else {
                write!(buf, "LP {:.2} - {:.2} HP", 1.0 - value, value)
            }
        }
        Unit::PwmRate => {
            if value == PWM_RATE_PW_MODE {
                buf.push_str("PW Mode").map_err(|_| core::fmt::Error)
            } else if value == PWM_RATE_FILTER_ENV {
                buf.push_str("Filter Env").map_err(|_| core::fmt::Error)
            } else {
                // The PWM LFO sweeps through the centre twice per cycle.
                write!(buf, "{:.2} Hz", 2.0 * value)
            }
        }
        Unit::Noise => {
            if value > 0.0 {
                write!(buf, "Pink {:.2}", value)
            } else if value < 0.0 {
                write!(buf, "White {:.2}", -value)
            } else {
                buf.push_str("Off").map_err(|_| core::fmt::Error)
            }
        }
    }
}

fn millis<const N: usize>(buf: &mut String<N>, ms: f32) -> core::fmt::Result {
    if ms < 1000.0 {
        write!(buf, "{} ms", ms as i32)
    } else {
        write!(buf, "{:.2} s", ms / 1000.0)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
