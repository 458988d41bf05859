//! On-screen raster display module

mod viewer;
mod render;
mod minifb_viewer;

pub use viewer::RasterViewer;
pub use render::render_grayscale;
pub use minifb_viewer::MinifbViewer;
