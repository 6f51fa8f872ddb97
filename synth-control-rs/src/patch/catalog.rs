//! Ordered list of stored patches.
//!
//! The catalog is a ring: the entry at the front is the *current* patch.
//! Browsing rotates the ring by one in either direction, so the patches on
//! either side of the current one are always the last entry and the second
//! entry.
//!
//! ```text
//!   front ─▶ [ 3 "Lead" ][ 4 "Pad" ][ 1 "Bass" ][ 2 "Keys" ]
//!              current     next                   previous
//! ```

use heapless::Vec;

use super::PatchName;
use crate::PATCHES_LIMIT;

/// A catalog entry: file number, name and the format version it was read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchEntry {
    pub number: u16,
    pub name: PatchName,
    pub version: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PatchEntry {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u16} {=str}", self.number, self.name.as_str());
    }
}

/// Patch numbers and names in browsing order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<PatchEntry, PATCHES_LIMIT>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append at the back. Returns the entry if the catalog is full.
    pub fn push(&mut self, entry: PatchEntry) -> Result<(), PatchEntry> {
        self.entries.push(entry)
    }

    /// Insert at the front, making `entry` current.
    pub fn push_front(&mut self, entry: PatchEntry) -> Result<(), PatchEntry> {
        self.entries.insert(0, entry)
    }

    /// Remove and return the current entry.
    pub fn pop_front(&mut self) -> Option<PatchEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// The current entry.
    pub fn current(&self) -> Option<&PatchEntry> {
        self.entries.first()
    }

    /// The entry browsing backwards would reach.
    pub fn previous(&self) -> Option<&PatchEntry> {
        self.entries.last()
    }

    /// The entry browsing forwards would reach.
    pub fn next(&self) -> Option<&PatchEntry> {
        self.entries.get(1).or_else(|| self.entries.first())
    }

    /// Remove the entry numbered `number`, keeping the order of the rest.
    pub fn remove(&mut self, number: u16) -> Option<PatchEntry> {
        let position = self.position(number)?;
        Some(self.entries.remove(position))
    }

    pub fn get(&self, position: usize) -> Option<&PatchEntry> {
        self.entries.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut PatchEntry> {
        self.entries.get_mut(position)
    }

    pub fn position(&self, number: u16) -> Option<usize> {
        self.entries.iter().position(|e| e.number == number)
    }

    /// Rotate by `delta` entries. Positive moves forwards: the next entry
    /// becomes current and the old current goes to the back.
    pub fn rotate(&mut self, delta: i32) {
        let len = self.entries.len();
        if len < 2 {
            return;
        }
        let shift = (i64::from(delta)).rem_euclid(len as i64) as usize;
        self.entries.rotate_left(shift);
    }

    /// Rotate until the entry numbered `number` is current. Returns `false`
    /// and leaves the order unchanged if there is no such entry.
    pub fn rotate_to(&mut self, number: u16) -> bool {
        match self.position(number) {
            Some(position) => {
                self.entries.rotate_left(position);
                true
            }
            None => false,
        }
    }

    /// Sort by patch number, so patch 1 is current.
    pub fn sort(&mut self) {
        self.entries.sort_unstable_by_key(|e| e.number);
    }

    /// Highest patch number in the catalog, or 0 when empty.
    pub fn highest_number(&self) -> u16 {
        self.entries.iter().map(|e| e.number).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatchEntry> {
        self.entries.iter()
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
