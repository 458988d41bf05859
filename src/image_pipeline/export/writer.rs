use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::export::types::TiffCompression;
use crate::image_pipeline::raster::types::Raster;

pub trait RasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, compression: TiffCompression) -> Result<()>;
}
