//! Raw capture data types

use std::ops::Deref;

use memmap2::Mmap;

/// Backing storage for a loaded capture
#[derive(Debug)]
enum Storage {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

/// Flat byte sequence read from a sensor capture, immutable once loaded
#[derive(Debug)]
pub struct RawDump {
    storage: Storage,
}

impl RawDump {
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            storage: Storage::Owned(bytes),
        }
    }

    pub(crate) fn from_mmap(map: Mmap) -> Self {
        Self {
            storage: Storage::Mapped(map),
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.storage, Storage::Mapped(_))
    }
}

impl Deref for RawDump {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(bytes) => bytes.as_slice(),
            Storage::Mapped(map) => &map[..],
        }
    }
}

impl From<Vec<u8>> for RawDump {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}
