//! Sensor dump reconstruction pipeline
//!
//! This module turns headerless sensor captures into viewable rasters, with
//! separate modules for loading, lane deinterleaving, reshaping, display and
//! TIFF export.

pub mod dump;
pub mod deinterleave;
pub mod packing;
pub mod raster;
pub mod display;
pub mod export;
pub mod conversions;
pub mod common;

pub use common::{
    DumpError,
    Result,
};

pub use dump::{
    DumpReader,
    FileDumpReader,
    RawDump,
};

pub use deinterleave::{
    Channels,
    MergedSequence,
    deinterleave_and_merge,
    merge_swapped,
    split_channels,
};

pub use packing::strip_packed_low_bits;

pub use raster::{
    Raster,
    Region,
    crop,
    to_raster,
};

pub use display::{
    MinifbViewer,
    RasterViewer,
};

pub use export::{
    RasterWriter,
    TiffCompression,
    TiffRasterWriter,
};

pub use conversions::{
    DEFAULT_WIDTH,
    DumpViewPipeline,
    SweepReport,
    ViewConfig,
    ViewConfigBuilder,
    WidthOutcome,
};
