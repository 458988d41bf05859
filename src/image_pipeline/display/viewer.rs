use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;

pub trait RasterViewer {
    /// Shows `raster` and returns once the viewer has been closed.
    /// With `normalize` set, intensities are stretched to the full range.
    fn show(&self, raster: &Raster, title: &str, normalize: bool) -> Result<()>;
}
