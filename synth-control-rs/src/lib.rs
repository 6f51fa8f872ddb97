//! Parameter mapping, control dispatch and patch storage for a polyphonic
//! synthesizer's control firmware.
//!
//! This crate turns controller values, encoder detents and panel button
//! gestures into synthesis engine parameters, and keeps named patches on
//! durable storage.
//!
//! # Architecture
//!
//! ```text
//!  MIDI / panel ─▶ control::Instrument ─▶ pickup ─▶ mapping::VoiceGroup ─▶ SynthEngine
//!                        │                               │
//!                        │                               └──▶ Display
//!                        ▼
//!                 patch::PatchStore ─▶ PatchStorage ("<n>" text files)
//! ```
//!
//! Three value representations meet here:
//!
//! - the **raw** 0–127 controller value,
//! - the **stored index** into a parameter's curve table, which is what a
//!   [`PatchRecord`](patch::PatchRecord) holds,
//! - the **derived** real value written to the engine.
//!
//! [`params`] describes every parameter once (table, engine target, label,
//! pick-up eligibility) and the rest of the crate is written against those
//! descriptors. [`tables`] holds the curve tables and the search utilities
//! used for reverse mapping and encoder stepping.
//!
//! # Features
//!
//! - **`defmt`**: structured logging and [`defmt::Format`] implementations
//!   on public types, for embedded targets.
//! - **`std`**: the [`DirStorage`](patch::DirStorage) and
//!   [`MemoryStorage`](patch::MemoryStorage) backends and the recording
//!   test doubles in [`testing`].
//!
//! # `no_std` Compatibility
//!
//! Without `std` the crate allocates nothing: the catalog, names and
//! formatted readouts are fixed-capacity `heapless` containers sized by
//! the constants below.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod control;
pub mod display;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod params;
pub mod patch;
pub mod pickup;
pub mod settings;
pub mod tables;
#[cfg(any(test, feature = "std"))]
pub mod testing;

pub use control::{Instrument, Page, Section};
pub use display::{Display, Notice};
pub use engine::SynthEngine;
pub use error::StoreError;
pub use mapping::VoiceGroup;
pub use params::Param;
pub use patch::{PatchRecord, PatchStorage, PatchStore};
pub use settings::Settings;

/// Maximum number of patches in the catalog.
pub const PATCHES_LIMIT: usize = 999;

/// Encoders per panel section.
pub const SLOTS_PER_SECTION: usize = 4;

/// Number of panel sections.
pub const N_SECTIONS: usize = 9;

/// Maximum number of voice groups an [`Instrument`] drives.
pub const MAX_VOICE_GROUPS: usize = 4;

/// Half-width of the pick-up window, in raw controller steps.
pub const PICKUP_TOLERANCE: u8 = 2;

/// Bytes available for a patch name.
pub const NAME_CAPACITY: usize = 32;

/// Characters that can be typed when naming a patch.
pub const RENAME_MAX_CHARS: usize = 12;

/// Bytes available for one encoded patch record.
pub const RECORD_CAPACITY: usize = 512;

/// Format version written into field 50 of every saved patch. Version 0
/// is the older float-valued format.
pub const FORMAT_VERSION: u8 = 1;

/// A button level must be stable this long to count.
pub const DEBOUNCE_MS: u32 = 30;

/// A press this long is a hold.
pub const HOLD_MS: u32 = 750;
