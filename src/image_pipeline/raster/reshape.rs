use ndarray::{Array2, s};
use tracing::{debug, warn};

use crate::image_pipeline::common::error::{DumpError, Result};
use crate::image_pipeline::raster::types::{Raster, Region};

/// Reshapes `merged` row-major into `⌊len / width⌋` rows of `width` columns.
///
/// Elements past the last whole row are dropped and counted in
/// [`Raster::discarded`]. A width that does not match the true sensor
/// geometry is not detected; the result is simply skewed.
pub fn to_raster(merged: &[u8], width: usize) -> Result<Raster> {
    if width == 0 {
        return Err(DumpError::InvalidWidth(width));
    }

    let height = merged.len() / width;
    let kept = width * height;
    let discarded = merged.len() - kept;

    if discarded > 0 {
        warn!(width, height, "{} trailing bytes discarded", discarded);
    } else {
        debug!(width, height, "Raster fills exactly");
    }

    let pixels = Array2::from_shape_vec((height, width), merged[..kept].to_vec())?;
    Ok(Raster { pixels, discarded })
}

/// Cuts `region` out of `raster`, clamping it to the raster bounds.
pub fn crop(raster: &Raster, region: &Region) -> Result<Raster> {
    let row_end = region.rows.end.min(raster.height());
    let col_end = region.cols.end.min(raster.width());
    let row_start = region.rows.start.min(row_end);
    let col_start = region.cols.start.min(col_end);

    if row_start == row_end || col_start == col_end {
        return Err(DumpError::InvalidRegion(format!(
            "{:?},{:?} is empty within a {}x{} raster",
            region.rows,
            region.cols,
            raster.width(),
            raster.height()
        )));
    }

    let pixels = raster
        .pixels
        .slice(s![row_start..row_end, col_start..col_end])
        .to_owned();
    debug!("Cropped to {}x{}", pixels.ncols(), pixels.nrows());

    Ok(Raster {
        pixels,
        discarded: raster.discarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_exact_fit() {
        let raster = to_raster(&[10, 20, 30, 40, 50, 60], 2).unwrap();
        assert_eq!(raster.pixels, array![[10u8, 20], [30, 40], [50, 60]]);
        assert_eq!(raster.discarded, 0);
    }

    #[test]
    fn test_remainder_dropped() {
        let raster = to_raster(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(raster.pixels, array![[1u8, 2], [3, 4]]);
        assert_eq!(raster.discarded, 1);
    }

    #[test]
    fn test_element_count_matches_width_times_rows() {
        let merged: Vec<u8> = (0..=200).collect();
        for width in [1, 3, 7, 64, 200, 201, 500] {
            let raster = to_raster(&merged, width).unwrap();
            assert_eq!(raster.pixels.len(), width * (merged.len() / width));
            assert_eq!(raster.discarded, merged.len() % width);
            assert_eq!(raster.width(), width);
        }
    }

    #[test]
    fn test_shorter_than_one_row() {
        let raster = to_raster(&[1, 2, 3], 2080).unwrap();
        assert_eq!(raster.height(), 0);
        assert!(raster.is_empty());
        assert_eq!(raster.discarded, 3);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(to_raster(&[1, 2], 0), Err(DumpError::InvalidWidth(0))));
    }

    #[test]
    fn test_crop_window() {
        let merged: Vec<u8> = (0..16).collect();
        let raster = to_raster(&merged, 4).unwrap();
        let cropped = crop(&raster, &Region::new(1..3, 2..4)).unwrap();
        assert_eq!(cropped.pixels, array![[6u8, 7], [10, 11]]);
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let merged: Vec<u8> = (0..16).collect();
        let raster = to_raster(&merged, 4).unwrap();
        let cropped = crop(&raster, &Region::new(2..1000, 0..1200)).unwrap();
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.width(), 4);
    }

    #[test]
    fn test_crop_outside_raster() {
        let raster = to_raster(&[0; 16], 4).unwrap();
        let err = crop(&raster, &Region::new(1000..2000, 0..1200)).unwrap_err();
        assert!(matches!(err, DumpError::InvalidRegion(_)));
    }
}
