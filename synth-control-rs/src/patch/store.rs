//! Patch files plus the in-memory catalog.

use heapless::Vec;

use super::codec::{self, Decoded, RecordBuffer};
use super::{patch_name, Catalog, PatchEntry, PatchRecord, PatchStorage};
use crate::error::StoreError;
use crate::{FORMAT_VERSION, PATCHES_LIMIT, RECORD_CAPACITY};

/// Owns a storage backend and the catalog of what it holds.
///
/// Only [`enumerate`](Self::enumerate) and [`load`](Self::load) rebuild the
/// catalog from storage. Save, delete and renumber keep it in step with
/// the files they touch, so callers can reload or not as the workflow
/// requires.
pub struct PatchStore<S: PatchStorage> {
    storage: S,
    catalog: Catalog,
}

impl<S: PatchStorage> PatchStore<S> {
    /// Wrap `storage` with an empty catalog. Call [`load`](Self::load) to
    /// fill it.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            catalog: Catalog::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Rebuild the catalog from storage, in the order storage lists files.
    ///
    /// Files without a name are skipped. When storage holds more than
    /// [`PATCHES_LIMIT`] patches the rest are left out. Returns the
    /// catalog length.
    pub fn enumerate(&mut self) -> Result<usize, StoreError<S::Error>> {
        self.catalog.clear();
        let mut numbers: Vec<u16, PATCHES_LIMIT> = Vec::new();
        let mut overflow = false;
        self.storage.list(&mut |n| {
            if n > 0 && numbers.push(n).is_err() {
                overflow = true;
            }
        })?;
        if overflow {
            #[cfg(feature = "defmt")]
            defmt::warn!("more than {} patch files, extra files ignored", PATCHES_LIMIT);
        }

        let mut buf = [0u8; RECORD_CAPACITY];
        for number in numbers {
            match self.read_text(number, &mut buf) {
                Ok(text) => match codec::decode_header(text) {
                    Some((name, version)) => {
                        // Capacity matches `numbers`, so this cannot fail.
                        let _ = self.catalog.push(PatchEntry {
                            number,
                            name,
                            version,
                        });
                    }
                    None => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("patch {} has no name, skipped", number);
                    }
                },
                Err(StoreError::Storage(e)) => return Err(StoreError::Storage(e)),
                Err(_other) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("patch {} unreadable, skipped: {}", number, _other);
                }
            }
        }
        Ok(self.catalog.len())
    }

    /// Put the catalog into ascending patch-number order.
    pub fn sort(&mut self) {
        self.catalog.sort();
    }

    /// [`enumerate`](Self::enumerate) then [`sort`](Self::sort).
    pub fn load(&mut self) -> Result<usize, StoreError<S::Error>> {
        let count = self.enumerate()?;
        self.sort();
        #[cfg(feature = "defmt")]
        defmt::info!("catalog loaded: {} patches", count);
        Ok(count)
    }

    /// Write `record` as patch `number`, replacing any existing file.
    ///
    /// The old file is removed before the new one is written, so a failure
    /// in between loses it. The catalog entry for `number` is updated, or
    /// added at the back.
    pub fn save(&mut self, number: u16, record: &PatchRecord) -> Result<(), StoreError<S::Error>> {
        let position = self.catalog.position(number);
        if position.is_none() && self.catalog.is_full() {
            return Err(StoreError::CatalogFull);
        }
        if record.name.is_empty() {
            return Err(StoreError::Malformed(number));
        }

        let mut text = RecordBuffer::new();
        codec::encode(record, &mut text).map_err(|_| StoreError::Malformed(number))?;
        self.storage.remove(number)?;
        self.storage.write(number, text.as_bytes())?;

        let entry = PatchEntry {
            number,
            name: record.name.clone(),
            version: FORMAT_VERSION,
        };
        match position.and_then(|p| self.catalog.get_mut(p)) {
            Some(existing) => *existing = entry,
            None => {
                let _ = self.catalog.push(entry);
            }
        }
        #[cfg(feature = "defmt")]
        defmt::info!("patch {} saved", number);
        Ok(())
    }

    /// Read and decode patch `number`.
    pub fn recall(&mut self, number: u16) -> Result<Decoded, StoreError<S::Error>> {
        let mut buf = [0u8; RECORD_CAPACITY];
        let text = self.read_text(number, &mut buf)?;
        let decoded = codec::decode(text);
        if decoded.record.name.is_empty() {
            return Err(StoreError::Malformed(number));
        }
        #[cfg(feature = "defmt")]
        defmt::info!("patch {} recalled (format {})", number, decoded.version);
        Ok(decoded)
    }

    /// Rename patch `number` on storage and in the catalog.
    pub fn rename(&mut self, number: u16, name: &str) -> Result<(), StoreError<S::Error>> {
        let mut decoded = self.recall(number)?;
        decoded.record.name = patch_name(name);
        self.save(number, &decoded.record)
    }

    /// Remove patch `number`. Missing files are not an error.
    pub fn delete(&mut self, number: u16) -> Result<(), StoreError<S::Error>> {
        self.storage.remove(number)?;
        self.catalog.remove(number);
        #[cfg(feature = "defmt")]
        defmt::info!("patch {} deleted", number);
        Ok(())
    }

    /// Renumber the catalogued patches to 1..=count in number order.
    ///
    /// Each file that moves is copied to its new number and the old file
    /// removed, so no file above `count` remains. The catalog keeps its
    /// rotation with the new numbers.
    ///
    /// Fails with [`StoreError::Occupied`] before moving anything if a
    /// target number holds a file the catalog skipped.
    pub fn renumber_all(&mut self) -> Result<(), StoreError<S::Error>> {
        let mut numbers: Vec<u16, PATCHES_LIMIT> = self.catalog.iter().map(|e| e.number).collect();
        numbers.sort_unstable();

        for (i, old) in numbers.iter().copied().enumerate() {
            let new = dense_number(i);
            if old != new && numbers.binary_search(&new).is_err() && self.storage.exists(new)? {
                #[cfg(feature = "defmt")]
                defmt::warn!("renumber stopped: patch {} is not catalogued", new);
                return Err(StoreError::Occupied(new));
            }
        }

        let mut buf = [0u8; RECORD_CAPACITY];
        for (i, old) in numbers.iter().copied().enumerate() {
            let new = dense_number(i);
            if old == new {
                continue;
            }
            let len = self
                .storage
                .read(old, &mut buf)?
                .ok_or(StoreError::NotFound(old))?;
            self.storage.write(new, &buf[..len])?;
            self.storage.remove(old)?;
        }

        for position in 0..self.catalog.len() {
            if let Some(entry) = self.catalog.get_mut(position) {
                if let Ok(i) = numbers.binary_search(&entry.number) {
                    entry.number = dense_number(i);
                }
            }
        }
        Ok(())
    }

    /// Rotate the catalog by `delta` entries.
    pub fn rotate(&mut self, delta: i32) {
        self.catalog.rotate(delta);
    }

    /// Make patch `number` the first catalog entry. Returns `false` if it
    /// is not catalogued.
    pub fn rotate_to_front(&mut self, number: u16) -> bool {
        self.catalog.rotate_to(number)
    }

    fn read_text<'b>(
        &mut self,
        number: u16,
        buf: &'b mut [u8],
    ) -> Result<&'b str, StoreError<S::Error>> {
        let len = self
            .storage
            .read(number, buf)?
            .ok_or(StoreError::NotFound(number))?;
        core::str::from_utf8(&buf[..len]).map_err(|_| StoreError::Malformed(number))
    }
}

fn dense_number(position: usize) -> u16 {
    u16::try_from(position + 1).unwrap_or(u16::MAX)
}

// ── Unit Tests ───────────────────────────────────────────────────────
