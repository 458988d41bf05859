//! TIFF snapshot module
//!
//! This module writes reconstructed rasters to disk so they can be inspected
//! without a display.

mod writer;
mod tiff_raster_writer;
pub mod types;

pub use writer::RasterWriter;
pub use tiff_raster_writer::TiffRasterWriter;
pub use types::TiffCompression;
