//! Filesystem reader for raw sensor captures.
//!
//! Captures carry no header and no geometry, so loading is nothing more than
//! getting the bytes into memory. Large captures can be memory-mapped instead
//! of copied.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::image_pipeline::common::error::{DumpError, Result};
use crate::image_pipeline::dump::reader::DumpReader;
use crate::image_pipeline::dump::types::RawDump;

/// Reads a capture file from disk, either fully buffered or memory-mapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDumpReader {
    use_mmap: bool,
}

impl FileDumpReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    /// Reader that maps the file read-only instead of copying it.
    pub fn mmap() -> Self {
        Self { use_mmap: true }
    }

    fn map_file(path: &Path) -> std::io::Result<RawDump> {
        let file = File::open(path)?;
        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(RawDump::from_vec(Vec::new()));
        }
        // Safety: the capture is opened read-only and not modified while mapped
        let map = unsafe { Mmap::map(&file)? };
        Ok(RawDump::from_mmap(map))
    }
}

impl DumpReader for FileDumpReader {
    /// Loads the whole capture as an ordered sequence of `u8`.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InputReadError`] carrying the underlying
    /// [`std::io::Error`] if the path is missing or unreadable.
    fn read_dump(&self, path: &Path) -> Result<RawDump> {
        let loaded = if self.use_mmap {
            Self::map_file(path)
        } else {
            std::fs::read(path).map(RawDump::from_vec)
        };

        let dump = loaded.map_err(|source| DumpError::InputReadError {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loaded {} bytes from {} (mapped: {})",
            dump.len(),
            path.display(),
            dump.is_mapped()
        );
        Ok(dump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_buffered() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3, 4]).unwrap();

        let dump = FileDumpReader::new().read_dump(file.path()).unwrap();
        assert_eq!(&dump[..], &[1, 2, 3, 4]);
        assert!(!dump.is_mapped());
    }

    #[test]
    fn test_read_mapped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[9, 8, 7]).unwrap();
        file.flush().unwrap();

        let dump = FileDumpReader::mmap().read_dump(file.path()).unwrap();
        assert_eq!(&dump[..], &[9, 8, 7]);
        assert!(dump.is_mapped());
    }

    #[test]
    fn test_read_empty_file_mapped() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dump = FileDumpReader::mmap().read_dump(file.path()).unwrap();
        assert!(dump.is_empty());
    }

    #[test]
    fn test_missing_file_reports_io_kind() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("image4.bin");

        for reader in [FileDumpReader::new(), FileDumpReader::mmap()] {
            let err = reader.read_dump(&missing).unwrap_err();
            match err {
                DumpError::InputReadError { path, source } => {
                    assert_eq!(path, missing);
                    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
