use crate::image_pipeline::raster::types::Raster;

fn gray_pixel(value: u8) -> u32 {
    let v = value as u32;
    (v << 16) | (v << 8) | v
}

/// Converts a raster to a 0RGB framebuffer in row-major order.
///
/// With `normalize` set, intensities are stretched linearly so the darkest
/// pixel maps to black and the brightest to white. A flat raster renders
/// unchanged.
pub fn render_grayscale(raster: &Raster, normalize: bool) -> Vec<u32> {
    let (lo, hi) = raster
        .pixels
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let stretch = normalize && hi > lo;
    let range = (hi as u32).saturating_sub(lo as u32).max(1);

    raster
        .pixels
        .iter()
        .map(|&v| {
            if stretch {
                gray_pixel((((v - lo) as u32 * 255) / range) as u8)
            } else {
                gray_pixel(v)
            }
        })
        .collect()
}
