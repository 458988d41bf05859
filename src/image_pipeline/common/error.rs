use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to read input file {}: {source}", .path.display())]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid raster width: {0}")]
    InvalidWidth(usize),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid crop region: {0}")]
    InvalidRegion(String),

    #[error("Display error: {0}")]
    DisplayError(String),

    #[error("Raster shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
