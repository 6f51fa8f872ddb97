//! Durable storage for patch files.

use core::fmt;

/// A flat store of patch files addressed by patch number.
///
/// Implementations map number `n` to one file. Listing order is whatever
/// the medium returns; [`PatchStore`](super::PatchStore) sorts afterwards.
pub trait PatchStorage {
    type Error: fmt::Debug;

    /// Report the number of every patch file present.
    fn list(&mut self, found: &mut dyn FnMut(u16)) -> Result<(), Self::Error>;

    fn exists(&mut self, number: u16) -> Result<bool, Self::Error>;

    /// Read patch `number` into `buf`, returning the byte count, or `None`
    /// when there is no such file. Files longer than `buf` are truncated.
    fn read(&mut self, number: u16, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;

    /// Create or replace patch `number`.
    fn write(&mut self, number: u16, data: &[u8]) -> Result<(), Self::Error>;

    /// Remove patch `number`. Removing a missing file is not an error.
    fn remove(&mut self, number: u16) -> Result<(), Self::Error>;
}

#[cfg(any(test, feature = "std"))]
pub use memory::{MemoryFault, MemoryStorage};

#[cfg(any(test, feature = "std"))]
mod memory {
    extern crate std;

    use std::collections::BTreeMap;
    use std::vec::Vec;

    use super::PatchStorage;

    /// Failure injected by [`MemoryStorage::set_failing`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MemoryFault;

    /// Patch files held in a map, for tests and host tools.
    ///
    /// Listing yields numbers in descending order, so code that forgets to
    /// sort shows up in tests.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        files: BTreeMap<u16, Vec<u8>>,
        failing: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every later operation fail with [`MemoryFault`].
        pub fn set_failing(&mut self, failing: bool) {
            self.failing = failing;
        }

        /// Numbers of the files present, ascending.
        pub fn numbers(&self) -> Vec<u16> {
            self.files.keys().copied().collect()
        }

        /// Contents of file `number` as text.
        pub fn text(&self, number: u16) -> Option<&str> {
            self.files
                .get(&number)
                .and_then(|data| core::str::from_utf8(data).ok())
        }

        /// Place raw contents directly, bypassing the codec.
        pub fn insert(&mut self, number: u16, text: &str) {
            self.files.insert(number, text.as_bytes().to_vec());
        }

        fn check(&self) -> Result<(), MemoryFault> {
            if self.failing {
                Err(MemoryFault)
            } else {
                Ok(())
            }
        }
    }

    impl PatchStorage for MemoryStorage {
        type Error = MemoryFault;

        fn list(&mut self, found: &mut dyn FnMut(u16)) -> Result<(), MemoryFault> {
            self.check()?;
            self.files.keys().rev().for_each(|n| found(*n));
            Ok(())
        }

        fn exists(&mut self, number: u16) -> Result<bool, MemoryFault> {
            self.check()?;
            Ok(self.files.contains_key(&number))
        }

        fn read(&mut self, number: u16, buf: &mut [u8]) -> Result<Option<usize>, MemoryFault> {
            self.check()?;
            Ok(self.files.get(&number).map(|data| {
                let len = data.len().min(buf.len());
                buf[..len].copy_from_slice(&data[..len]);
                len
            }))
        }

        fn write(&mut self, number: u16, data: &[u8]) -> Result<(), MemoryFault> {
            self.check()?;
            self.files.insert(number, data.to_vec());
            Ok(())
        }

        fn remove(&mut self, number: u16) -> Result<(), MemoryFault> {
            self.check()?;
            self.files.remove(&number);
            Ok(())
        }
    }
}
