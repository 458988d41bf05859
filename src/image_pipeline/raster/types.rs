//! Raster data types

use std::ops::Range;
use std::str::FromStr;

use ndarray::Array2;

use crate::image_pipeline::common::error::DumpError;

/// Row-major grid of 8-bit intensities reshaped from a merged sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Pixel grid, shape `(height, width)`
    pub pixels: Array2<u8>,
    /// Trailing elements dropped because they did not fill a whole row
    pub discarded: usize,
}

impl Raster {
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Half-open row and column window into a raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Region {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }
}

fn parse_range(text: &str) -> Result<Range<usize>, DumpError> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| DumpError::InvalidRegion(format!("expected START:END, got '{text}'")))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| DumpError::InvalidRegion(format!("'{s}': {e}")))
    };
    Ok(parse(start)?..parse(end)?)
}

/// Parses `R0:R1,C0:C1`, e.g. `1000:2000,0:1200`.
impl FromStr for Region {
    type Err = DumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .split_once(',')
            .ok_or_else(|| DumpError::InvalidRegion(format!("expected ROWS,COLS, got '{s}'")))?;
        Ok(Self::new(parse_range(rows)?, parse_range(cols)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        let region: Region = "1000:2000,0:1200".parse().unwrap();
        assert_eq!(region, Region::new(1000..2000, 0..1200));
    }

    #[test]
    fn test_parse_region_rejects_garbage() {
        assert!(matches!(
            "1000:2000".parse::<Region>(),
            Err(DumpError::InvalidRegion(_))
        ));
        assert!(matches!(
            "a:b,0:1".parse::<Region>(),
            Err(DumpError::InvalidRegion(_))
        ));
    }
}
