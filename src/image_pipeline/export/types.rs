//! TIFF export configuration types

use clap::ValueEnum;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}
