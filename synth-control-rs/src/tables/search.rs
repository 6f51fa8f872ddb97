//! Lookup and stepping over curve tables.
//!
//! Four lookup modes translate a real value back into a table index:
//!
//! - [`index_of`]: exact match, first equal index, `table.len()` when absent.
//! - [`lower_bound`]: first index whose value is `>=` the target. The table
//!   must be non-decreasing.
//! - [`closest`] / [`closest_by`] / [`closest_into`]: full scan for the
//!   minimal distance. Ties keep the lowest index.
//! - [`step`] / [`step_distinct`]: relative movement for encoder edits, with
//!   an explicit [`StepPolicy`] at every call.
//!
//! Distances are compared squared so the scan needs no float intrinsics and
//! stays usable under `no_std`.

use super::{LINEAR, OSC_MIX_A, OSC_MIX_B};

/// What happens when a relative step runs off either end of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepPolicy {
    /// Continue from the opposite end.
    Wrap,
    /// Stay on the boundary index.
    Clamp,
}

/// Value at `index`, with the index clamped into the table.
///
/// Returns `None` only for an empty table.
pub fn value_at<T: Copy>(table: &[T], index: usize) -> Option<T> {
    let last = table.len().checked_sub(1)?;
    table.get(index.min(last)).copied()
}

/// First index whose value equals `target`, or `table.len()` if none does.
///
/// ```
/// use synth_control::tables::{index_of, LINEAR};
///
/// assert_eq!(index_of(&LINEAR, 0.787), 100);
/// assert_eq!(index_of(&LINEAR, 0.5), LINEAR.len());
/// ```
pub fn index_of<T: PartialEq>(table: &[T], target: T) -> usize {
    table
        .iter()
        .position(|v| *v == target)
        .unwrap_or(table.len())
}

/// First index whose value is `>= target` in a non-decreasing table.
///
/// Below the first entry this is 0; above the last it is `table.len()`,
/// which callers clamp before indexing.
pub fn lower_bound<T: PartialOrd>(table: &[T], target: T) -> usize {
    table.partition_point(|v| *v < target)
}

/// Index of the entry nearest to `target`.
pub fn closest<T: Copy + Into<f32>>(table: &[T], target: f32) -> usize {
    closest_by(table.len(), |i| table[i].into(), target)
}

/// Nearest index over a derived curve `value(i)` for `i` in `0..len`.
///
/// Used where the real value is computed from a table rather than stored in
/// one (a scaled curve, a tempo-synced rate). Returns 0 for `len == 0` or a
/// NaN target.
pub fn closest_by<F: Fn(usize) -> f32>(len: usize, value: F, target: f32) -> usize {
    min_cost(len, |i| {
        let delta = value(i) - target;
        delta * delta
    })
}

/// Index with the lowest `cost`. Ties keep the lowest index.
fn min_cost<F: Fn(usize) -> f32>(len: usize, cost: F) -> usize {
    let mut best = 0;
    let mut best_cost = f32::INFINITY;
    for i in 0..len {
        let c = cost(i);
        // Strict improvement only, so the first of equally close entries wins.
        if c < best_cost {
            best = i;
            best_cost = c;
        }
    }
    best
}

/// Writes the nearest index for `target` into `index`.
///
/// Saturates at `u8::MAX` for tables wider than an index field can hold.
pub fn closest_into<T: Copy + Into<f32>>(table: &[T], target: f32, index: &mut u8) {
    *index = u8::try_from(closest(table, target)).unwrap_or(u8::MAX);
}

/// Plain arithmetic step over `0..len`.
///
/// ```
/// use synth_control::tables::{step, StepPolicy};
///
/// assert_eq!(step(128, 127, 1, StepPolicy::Wrap), 0);
/// assert_eq!(step(128, 127, 1, StepPolicy::Clamp), 127);
/// assert_eq!(step(3, 0, -1, StepPolicy::Wrap), 2);
/// ```
pub fn step(len: usize, index: usize, delta: i32, policy: StepPolicy) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    let target = index.min(len as usize - 1) as i64 + i64::from(delta);
    let next = match policy {
        StepPolicy::Wrap => target.rem_euclid(len),
        StepPolicy::Clamp => target.clamp(0, len - 1),
    };
    next as usize
}

/// Step by `delta` distinct values, treating each run of equal entries as
/// one position.
///
/// Forward movement lands on the first index of the next run; backward
/// movement lands on the first index of the previous run. At either end the
/// policy decides between wrapping to the opposite run and staying put.
///
/// ```
/// use synth_control::tables::{step_distinct, StepPolicy, CHORD_INDEX};
///
/// // Chords occupy seven raw positions each.
/// assert_eq!(step_distinct(&CHORD_INDEX, 0, 1, StepPolicy::Clamp), 7);
/// assert_eq!(step_distinct(&CHORD_INDEX, 9, -1, StepPolicy::Clamp), 0);
/// ```
pub fn step_distinct<T: PartialEq>(
    table: &[T],
    index: usize,
    delta: i32,
    policy: StepPolicy,
) -> usize {
    step_distinct_by(table.len(), |a, b| table[a] == table[b], index, delta, policy)
}

/// [`step_distinct`] over an arbitrary equality relation on `0..len`.
pub fn step_distinct_by<F: Fn(usize, usize) -> bool>(
    len: usize,
    same: F,
    index: usize,
    delta: i32,
    policy: StepPolicy,
) -> usize {
    if len == 0 {
        return 0;
    }
    let mut current = index.min(len - 1);
    for _ in 0..delta.unsigned_abs() {
        let next = if delta > 0 {
            next_run(len, &same, current, policy)
        } else {
            previous_run(len, &same, current, policy)
        };
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// First index of the run after the one containing `index`.
fn next_run<F: Fn(usize, usize) -> bool>(
    len: usize,
    same: &F,
    index: usize,
    policy: StepPolicy,
) -> usize {
    let mut i = index;
    while i + 1 < len && same(i + 1, index) {
        i += 1;
    }
    if i + 1 < len {
        i + 1
    } else {
        match policy {
            StepPolicy::Wrap => 0,
            StepPolicy::Clamp => index,
        }
    }
}

/// First index of the run before the one containing `index`.
fn previous_run<F: Fn(usize, usize) -> bool>(
    len: usize,
    same: &F,
    index: usize,
    policy: StepPolicy,
) -> usize {
    let start = run_start(same, index);
    let previous = if start > 0 {
        start - 1
    } else {
        match policy {
            StepPolicy::Wrap => len - 1,
            StepPolicy::Clamp => return index,
        }
    };
    run_start(same, previous)
}

fn run_start<F: Fn(usize, usize) -> bool>(same: &F, index: usize) -> usize {
    let mut i = index;
    while i > 0 && same(i - 1, index) {
        i -= 1;
    }
    i
}

/// Recover the oscillator mix index from a pair of oscillator levels.
///
/// Each level curve is flat over half of the mix range, so the two curves
/// are matched together by minimal sum of squared errors rather than one at
/// a time.
///
/// ```
/// use synth_control::tables::{osc_mix_from_levels, LINEAR, OSC_MIX_A, OSC_MIX_B};
///
/// let a = LINEAR[OSC_MIX_A[77] as usize];
/// let b = LINEAR[OSC_MIX_B[77] as usize];
/// assert_eq!(osc_mix_from_levels(a, b), 77);
/// ```
pub fn osc_mix_from_levels(level_a: f32, level_b: f32) -> u8 {
    let index = min_cost(OSC_MIX_A.len(), |i| {
        let a = LINEAR[usize::from(OSC_MIX_A[i])] - level_a;
        let b = LINEAR[usize::from(OSC_MIX_B[i])] - level_b;
        a * a + b * b
    });
    u8::try_from(index).unwrap_or(u8::MAX)
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{
        CHORD_INDEX, ENV_TIMES, FILTER_FREQS_256, LFO_TEMPO, LFO_WAVEFORM_CODES,
        LINEAR_CENTRE_ZERO, PITCH, POWER, PWM_RATE,
    };

    // ── Exact match ──────────────────────────────────────────────────

    #[test]
    fn index_of_finds_every_unique_entry() {
        for (i, v) in LINEAR.iter().enumerate() {
            assert_eq!(index_of(&LINEAR, *v), i);
        }
        for (i, v) in ENV_TIMES.iter().enumerate() {
            assert_eq!(index_of(&ENV_TIMES, *v), i);
        }
    }

    #[test]
    fn index_of_resolves_duplicates_to_first() {
        assert_eq!(index_of(&CHORD_INDEX, 1), 7);
        assert_eq!(index_of(&LINEAR_CENTRE_ZERO, 0.0), 63);
        assert!(index_of(&PITCH, 0) <= 64);
    }

    #[test]
    fn index_of_absent_returns_sentinel() {
        assert_eq!(index_of(&POWER, 2.0), POWER.len());
        assert_eq!(index_of::<u8>(&[], 1), 0);
    }

    // ── Lower bound ──────────────────────────────────────────────────

    #[test]
    fn lower_bound_edges() {
        assert_eq!(lower_bound(&LINEAR, -1.0), 0);
        assert_eq!(lower_bound(&LINEAR, 2.0), LINEAR.len());
        assert_eq!(lower_bound(&LINEAR, 0.787), 100);
        // Between 0.780 and 0.787.
        assert_eq!(lower_bound(&LINEAR, 0.783), 100);
    }

    #[test]
    fn lower_bound_on_duplicate_run_returns_run_start() {
        assert_eq!(lower_bound(&LFO_TEMPO, LFO_TEMPO[10]), 8);
    }

    // ── Closest ──────────────────────────────────────────────────────

    #[test]
    fn closest_round_trips_every_index() {
        for i in 0..LINEAR.len() {
            assert_eq!(closest(&LINEAR, LINEAR[i]), i);
            assert_eq!(closest(&POWER, POWER[i]), i);
            assert_eq!(closest(&ENV_TIMES, ENV_TIMES[i]), i);
        }
        for i in 0..FILTER_FREQS_256.len() {
            assert_eq!(closest(&FILTER_FREQS_256, FILTER_FREQS_256[i]), i);
        }
    }

    #[test]
    fn closest_with_duplicates_returns_first_tied_index() {
        for i in 0..PITCH.len() {
            let first = index_of(&PITCH, PITCH[i]);
            assert_eq!(closest(&PITCH, f32::from(PITCH[i])), first);
        }
    }

    #[test]
    fn closest_between_entries_picks_nearer_one() {
        assert_eq!(closest(&LINEAR, 0.7855), 100);
        assert_eq!(closest(&LINEAR, 0.7815), 99);
    }

    #[test]
    fn closest_into_writes_index() {
        let mut index = 0u8;
        closest_into(&LINEAR, 0.511, &mut index);
        assert_eq!(index, 65);
        closest_into(&FILTER_FREQS_256, 1.0e9, &mut index);
        assert_eq!(index, 255);
    }

    #[test]
    fn closest_nan_target_falls_back_to_zero() {
        assert_eq!(closest(&LINEAR, f32::NAN), 0);
    }

    // ── Stepping ─────────────────────────────────────────────────────

    #[test]
    fn wrap_returns_to_start_after_full_cycle() {
        for start in [0usize, 1, 63, 127] {
            let mut i = start;
            for _ in 0..128 {
                i = step(128, i, 1, StepPolicy::Wrap);
            }
            assert_eq!(i, start);
        }
    }

    #[test]
    fn clamp_stays_at_last_index() {
        let mut i = 120;
        for _ in 0..50 {
            i = step(128, i, 1, StepPolicy::Clamp);
        }
        assert_eq!(i, 127);
        assert_eq!(step(128, 0, -4, StepPolicy::Clamp), 0);
    }

    #[test]
    fn multi_step_delta() {
        assert_eq!(step(128, 10, 8, StepPolicy::Clamp), 18);
        assert_eq!(step(3, 2, 2, StepPolicy::Wrap), 1);
    }

    #[test]
    fn step_distinct_skips_whole_run() {
        assert_eq!(step_distinct(&CHORD_INDEX, 0, 1, StepPolicy::Clamp), 7);
        assert_eq!(step_distinct(&CHORD_INDEX, 3, 1, StepPolicy::Clamp), 7);
        assert_eq!(step_distinct(&CHORD_INDEX, 7, 2, StepPolicy::Clamp), 21);
    }

    #[test]
    fn step_distinct_backward_lands_on_previous_run_start() {
        assert_eq!(step_distinct(&CHORD_INDEX, 14, -1, StepPolicy::Clamp), 7);
        assert_eq!(step_distinct(&CHORD_INDEX, 20, -1, StepPolicy::Clamp), 7);
    }

    #[test]
    fn step_distinct_boundaries() {
        let last_run = index_of(&CHORD_INDEX, 18);
        assert_eq!(step_distinct(&CHORD_INDEX, last_run, 1, StepPolicy::Clamp), last_run);
        assert_eq!(step_distinct(&CHORD_INDEX, 127, 1, StepPolicy::Wrap), 0);
        assert_eq!(step_distinct(&CHORD_INDEX, 0, -1, StepPolicy::Clamp), 0);
        assert_eq!(step_distinct(&CHORD_INDEX, 3, -1, StepPolicy::Wrap), last_run);
    }

    #[test]
    fn step_distinct_every_tick_changes_value() {
        let mut i = 0;
        loop {
            let next = step_distinct(&LFO_WAVEFORM_CODES, i, 1, StepPolicy::Clamp);
            if next == i {
                break;
            }
            assert_ne!(LFO_WAVEFORM_CODES[next], LFO_WAVEFORM_CODES[i]);
            i = next;
        }
        assert_eq!(LFO_WAVEFORM_CODES[i], LFO_WAVEFORM_CODES[127]);
    }

    #[test]
    fn step_distinct_skips_centre_detent_and_pwm_markers() {
        assert_eq!(step_distinct(&LINEAR_CENTRE_ZERO, 62, 1, StepPolicy::Clamp), 63);
        assert_eq!(step_distinct(&LINEAR_CENTRE_ZERO, 63, 1, StepPolicy::Clamp), 65);
        assert_eq!(step_distinct(&PWM_RATE, 0, 1, StepPolicy::Clamp), 2);
        assert_eq!(step_distinct(&PWM_RATE, 2, 1, StepPolicy::Clamp), 4);
    }

    // ── Oscillator mix ───────────────────────────────────────────────

    #[test]
    fn osc_mix_round_trips_every_index() {
        for i in 0..128u8 {
            let a = LINEAR[usize::from(OSC_MIX_A[usize::from(i)])];
            let b = LINEAR[usize::from(OSC_MIX_B[usize::from(i)])];
            assert_eq!(osc_mix_from_levels(a, b), i, "mix index {}", i);
        }
    }

    #[test]
    fn osc_mix_77_is_not_confused_with_neighbours() {
        assert_eq!(LINEAR[usize::from(OSC_MIX_A[77])], 0.787);
        assert_eq!(LINEAR[usize::from(OSC_MIX_B[77])], 1.0);
        assert_eq!(osc_mix_from_levels(0.787, 1.0), 77);
    }

    #[test]
    fn osc_mix_from_off_grid_levels_picks_nearest_pair() {
        // Between 76 (0.803) and 77 (0.787), slightly nearer 77.
        assert_eq!(osc_mix_from_levels(0.792, 0.999), 77);
    }

    // ── value_at ─────────────────────────────────────────────────────

    #[test]
    fn value_at_clamps_index() {
        assert_eq!(value_at(&LINEAR, 500), Some(1.0));
        assert_eq!(value_at::<f32>(&[], 0), None);
    }
}
