//! Soft takeover for absolute controls.
//!
//! After a patch recall the physical pots rarely sit where the patch put
//! the parameters. With pick-up enabled, a pot is ignored until it comes
//! within [`PICKUP_TOLERANCE`] raw steps of the applied value, so turning
//! it never makes the sound jump.
//!
//! The window is checked in the real-value domain against both edges:
//! the value at `raw - TOLERANCE` must not exceed the applied value, and
//! the value at `raw + TOLERANCE` must not be below it. Pick-up only
//! applies to parameters whose descriptor opts in, all of which have a
//! non-decreasing curve.

use crate::params::Param;
use crate::tables;
use crate::PICKUP_TOLERANCE;

/// Pick-up state shared by every absolute control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PickUp {
    enabled: bool,
    /// Set after reinitialising from the panel, cleared by the next recall.
    bypassed: bool,
}

impl PickUp {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bypassed: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stop suppressing until the next [`rearm`](Self::rearm).
    pub fn bypass(&mut self) {
        self.bypassed = true;
    }

    /// Resume suppressing. Called when a patch is recalled.
    pub fn rearm(&mut self) {
        self.bypassed = false;
    }

    /// Whether suppression can happen at all.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.bypassed
    }

    /// Whether an absolute control at `raw` may move `param`, whose stored
    /// index is currently `current`.
    pub fn accepts(&self, param: Param, current: u8, raw: u8) -> bool {
        if !self.is_active() {
            return true;
        }
        match param.pick_up_curve() {
            Some((table, _)) => within_window(table, param.raw_scale(), current, raw),
            None => true,
        }
    }
}

/// The pick-up window test on a non-decreasing `table` indexed in the
/// stored domain, `raw_scale` stored indices per raw step.
pub fn within_window(table: &[f32], raw_scale: usize, current: u8, raw: u8) -> bool {
    let at = |i: usize| tables::value_at(table, i).unwrap_or(0.0);
    let low = usize::from(raw.saturating_sub(PICKUP_TOLERANCE)) * raw_scale;
    // The top raw step covers the rest of a wide table.
    let high = match raw.saturating_add(PICKUP_TOLERANCE) {
        r if r >= 127 => table.len().saturating_sub(1),
        r => usize::from(r) * raw_scale,
    };
    let applied = at(usize::from(current));
    at(low) <= applied && applied <= at(high)
}

// ── Unit Tests ───────────────────────────────────────────────────────
