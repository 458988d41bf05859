use std::io::Write;

use ::tiff::encoder::compression::DeflateLevel;
use ::tiff::encoder::{Compression, TiffEncoder, colortype};
use tracing::debug;

use crate::image_pipeline::common::error::{DumpError, Result};
use crate::image_pipeline::export::types::TiffCompression;
use crate::image_pipeline::export::writer::RasterWriter;
use crate::image_pipeline::raster::types::Raster;

/// TIFF stores dimensions as `u32`; wider or taller rasters are rejected.
fn tiff_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(DumpError::InvalidDimensions(width, height)),
    }
}

/// Writes rasters as single-page 8-bit grayscale TIFFs.
pub struct TiffRasterWriter;

impl RasterWriter for TiffRasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, compression: TiffCompression) -> Result<()> {
        let (width, height) = (raster.width(), raster.height());
        if width == 0 || height == 0 {
            return Err(DumpError::InvalidDimensions(width, height));
        }
        let (tiff_width, tiff_height) = tiff_dimensions(width, height)?;
        debug!("Encoding TIFF image: {}x{}", width, height);

        let compression = match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        };

        // TiffEncoder needs Seek, so encode into memory first
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| DumpError::EncodeError(e.to_string()))?
            .with_compression(compression);

        let pixels: Vec<u8> = raster.pixels.iter().copied().collect();
        encoder
            .write_image::<colortype::Gray8>(tiff_width, tiff_height, &pixels)
            .map_err(|e| DumpError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
