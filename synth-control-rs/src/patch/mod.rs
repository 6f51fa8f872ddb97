//! Patch records, their file format, and the patch store.
//!
//! # Architecture
//!
//! ```text
//! PatchRecord ──encode──▶ text record ──PatchStorage::write──▶ file "<n>"
//!      ▲                                                          │
//!      └────────decode──── text record ◀──PatchStorage::read──────┘
//!
//! PatchStore = PatchStorage + Catalog (ordered PatchEntry ring)
//! ```
//!
//! A [`PatchRecord`] holds one stored index per [`Param`], never derived
//! floats. The [`codec`] turns records into comma-delimited text and back.
//! [`PatchStore`] owns the storage backend and the in-memory [`Catalog`]
//! of patch numbers and names, which is what the UI navigates.

pub mod catalog;
pub mod codec;
#[cfg(feature = "std")]
mod fs;
mod storage;
mod store;

pub use catalog::{Catalog, PatchEntry};
pub use codec::{decode, decode_header, encode, Decoded, RecordBuffer};
#[cfg(feature = "std")]
pub use fs::DirStorage;
#[cfg(any(test, feature = "std"))]
pub use storage::{MemoryFault, MemoryStorage};
pub use storage::PatchStorage;
pub use store::PatchStore;

use heapless::String;

use crate::params::Param;
use crate::NAME_CAPACITY;

/// Name of a patch.
pub type PatchName = String<NAME_CAPACITY>;

/// Name given to a patch that has not been named by the user.
pub const INITIAL_PATCH_NAME: &str = "Initial Patch";

/// Build a [`PatchName`], truncating at the capacity and dropping the
/// characters the record format uses as delimiters.
pub fn patch_name(text: &str) -> PatchName {
    let mut name = PatchName::new();
    for c in text.chars().filter(|c| !matches!(c, ',' | '\n' | '\r')) {
        if name.push(c).is_err() {
            break;
        }
    }
    name
}

/// Every stored parameter of one patch, as table indices, plus its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecord {
    pub name: PatchName,
    values: [u8; Param::STORED],
}

impl Default for PatchRecord {
    fn default() -> Self {
        let mut values = [0; Param::STORED];
        for p in &Param::ALL[..Param::STORED] {
            values[*p as usize] = initial_index(*p);
        }
        Self {
            name: patch_name(INITIAL_PATCH_NAME),
            values,
        }
    }
}

impl PatchRecord {
    /// A record with every index zero and an empty name.
    pub fn zeroed() -> Self {
        Self {
            name: PatchName::new(),
            values: [0; Param::STORED],
        }
    }

    /// Stored index of `param`. Performance parameters read as 0.
    pub fn get(&self, param: Param) -> u8 {
        self.values.get(param as usize).copied().unwrap_or(0)
    }

    /// Set the stored index of `param`, clamped into its table. Performance
    /// parameters are ignored.
    pub fn set(&mut self, param: Param, index: u8) {
        if let Some(slot) = self.values.get_mut(param as usize) {
            *slot = index.min(param.max_index());
        }
    }

    /// Clamp every index into its table.
    pub fn sanitize(&mut self) {
        for p in &Param::ALL[..Param::STORED] {
            let i = *p as usize;
            self.values[i] = self.values[i].min(p.max_index());
        }
    }

    /// Whether every index is valid for its table.
    pub fn is_valid(&self) -> bool {
        Param::ALL[..Param::STORED]
            .iter()
            .all(|p| self.values[*p as usize] <= p.max_index())
    }

    /// Stored parameters with their indices, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, u8)> + '_ {
        Param::ALL[..Param::STORED]
            .iter()
            .map(move |p| (*p, self.values[*p as usize]))
    }
}

/// Index of each parameter in a fresh patch.
fn initial_index(param: Param) -> u8 {
    match param {
        Param::OscMix | Param::PitchA | Param::PitchB => 64,
        Param::Noise | Param::PulseWidthA | Param::PulseWidthB => 63,
        Param::FilterEnvelope | Param::PitchEnvelope => 63,
        // Band-limited sawtooth in both waveform lists.
        Param::WaveformA | Param::WaveformB => 2,
        Param::FilterCutoff => 255,
        Param::PitchLfoRate | Param::FilterLfoRate => 64,
        Param::FilterDecay | Param::AmpDecay => 64,
        Param::FilterSustain | Param::AmpSustain => 127,
        Param::FilterRelease | Param::AmpRelease => 40,
        _ => 0,
    }
}
