//! Interactive raster viewer backed by a minifb window.

use minifb::{Key, Scale, ScaleMode, Window, WindowOptions};
use tracing::{debug, info};

use crate::image_pipeline::common::error::{DumpError, Result};
use crate::image_pipeline::display::render::render_grayscale;
use crate::image_pipeline::display::viewer::RasterViewer;
use crate::image_pipeline::raster::types::Raster;

const TARGET_FPS: usize = 30;

/// Opens one window per raster and blocks until it is closed or Escape is
/// pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifbViewer;

impl RasterViewer for MinifbViewer {
    fn show(&self, raster: &Raster, title: &str, normalize: bool) -> Result<()> {
        let (width, height) = (raster.width(), raster.height());
        if width == 0 || height == 0 {
            return Err(DumpError::InvalidDimensions(width, height));
        }

        let framebuf = render_grayscale(raster, normalize);

        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                scale: Scale::FitScreen,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| DumpError::DisplayError(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);

        info!(width, height, "Viewer open, close the window or press Escape to continue");

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&framebuf, width, height)
                .map_err(|e| DumpError::DisplayError(e.to_string()))?;
        }

        debug!("Viewer closed");
        Ok(())
    }
}
