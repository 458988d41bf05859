//! Capture dump loading module
//!
//! This module loads headerless sensor captures as flat byte sequences.

mod reader;
mod file_reader;
pub mod types;

pub use reader::DumpReader;
pub use file_reader::FileDumpReader;
pub use types::RawDump;
