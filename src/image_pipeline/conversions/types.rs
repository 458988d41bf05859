//! Dump viewing configuration types

use std::path::PathBuf;

use crate::image_pipeline::export::types::TiffCompression;
use crate::image_pipeline::raster::types::Region;

/// Row width in bytes the capture is assumed to have: 1040 two-byte pixels.
pub const DEFAULT_WIDTH: usize = 1040 * 2;

/// Configuration for reconstructing and viewing a dump
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Candidate row widths, shown in order
    pub widths: Vec<usize>,
    /// Drop the packed low-order bit bytes before reshaping
    pub strip_packed_low_bits: bool,
    /// Optional window to show instead of the full raster
    pub crop: Option<Region>,
    /// Stretch intensities to the full display range
    pub normalize: bool,
    /// Reject rasters with zero rows before export or display
    pub validate_dimensions: bool,
    /// Open a viewer window for every raster
    pub display: bool,
    /// Directory for TIFF snapshots; none disables export
    pub export_dir: Option<PathBuf>,
    /// Compression used for TIFF snapshots
    pub compression: TiffCompression,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            widths: vec![DEFAULT_WIDTH],
            strip_packed_low_bits: false,
            crop: None,
            normalize: true,
            validate_dimensions: true,
            display: true,
            export_dir: None,
            compression: TiffCompression::None,
        }
    }
}

impl ViewConfig {
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::default()
    }
}

/// Builder for ViewConfig
#[derive(Default)]
pub struct ViewConfigBuilder {
    widths: Option<Vec<usize>>,
    strip_packed_low_bits: Option<bool>,
    crop: Option<Option<Region>>,
    normalize: Option<bool>,
    validate_dimensions: Option<bool>,
    display: Option<bool>,
    export_dir: Option<Option<PathBuf>>,
    compression: Option<TiffCompression>,
}

impl ViewConfigBuilder {
    pub fn width(self, width: usize) -> Self {
        self.widths(vec![width])
    }

    /// An empty list keeps the default width.
    pub fn widths(mut self, widths: Vec<usize>) -> Self {
        if !widths.is_empty() {
            self.widths = Some(widths);
        }
        self
    }

    pub fn strip_packed_low_bits(mut self, enable: bool) -> Self {
        self.strip_packed_low_bits = Some(enable);
        self
    }

    pub fn crop(mut self, region: Option<Region>) -> Self {
        self.crop = Some(region);
        self
    }

    pub fn normalize(mut self, enable: bool) -> Self {
        self.normalize = Some(enable);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn display(mut self, enable: bool) -> Self {
        self.display = Some(enable);
        self
    }

    pub fn export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = Some(dir);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn build(self) -> ViewConfig {
        let default = ViewConfig::default();
        ViewConfig {
            widths: self.widths.unwrap_or(default.widths),
            strip_packed_low_bits: self.strip_packed_low_bits.unwrap_or(default.strip_packed_low_bits),
            crop: self.crop.unwrap_or(default.crop),
            normalize: self.normalize.unwrap_or(default.normalize),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            display: self.display.unwrap_or(default.display),
            export_dir: self.export_dir.unwrap_or(default.export_dir),
            compression: self.compression.unwrap_or(default.compression),
        }
    }
}
