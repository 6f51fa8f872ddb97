//! Error types for the patch store.

use core::fmt;

/// Errors that can occur while reading or writing patches.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError<E> {
    /// Underlying storage backend error.
    Storage(E),

    /// No patch file with this number.
    NotFound(u16),

    /// The catalog already holds [`PATCHES_LIMIT`](crate::PATCHES_LIMIT)
    /// patches.
    CatalogFull,

    /// No storage is attached.
    Offline,

    /// The patch file exists but has no name.
    Malformed(u16),

    /// A file the catalog does not hold sits at this number.
    Occupied(u16),
}

// Allow ergonomic `?` propagation from backend errors.
impl<E> From<E> for StoreError<E> {
    fn from(error: E) -> Self {
        StoreError::Storage(error)
    }
}

impl<E: fmt::Debug> fmt::Display for StoreError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Storage(e) => write!(f, "storage error: {:?}", e),
            StoreError::NotFound(n) => write!(f, "patch {} not found", n),
            StoreError::CatalogFull => write!(f, "patch catalog is full"),
            StoreError::Offline => write!(f, "no storage"),
            StoreError::Malformed(n) => write!(f, "patch {} has no name", n),
            StoreError::Occupied(n) => write!(f, "patch {} is not catalogued", n),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for StoreError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            // Backend errors are rarely `defmt::Format`; name the variant only.
            StoreError::Storage(_) => defmt::write!(f, "storage error"),
            StoreError::NotFound(n) => defmt::write!(f, "patch {=u16} not found", n),
            StoreError::CatalogFull => defmt::write!(f, "patch catalog is full"),
            StoreError::Offline => defmt::write!(f, "no storage"),
            StoreError::Malformed(n) => defmt::write!(f, "patch {=u16} has no name", n),
            StoreError::Occupied(n) => defmt::write!(f, "patch {=u16} is not catalogued", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_convert() {
        fn fails() -> Result<(), StoreError<&'static str>> {
            Err::<(), _>("disk")?;
            Ok(())
        }
        assert_eq!(fails(), Err(StoreError::Storage("disk")));
    }

    #[test]
    fn display() {
        let e: StoreError<()> = StoreError::NotFound(7);
        assert_eq!(std::format!("{}", e), "patch 7 not found");
    }
}
