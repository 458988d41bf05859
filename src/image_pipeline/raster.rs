//! Raster reshaping module
//!
//! This module turns a merged byte sequence into a fixed-width 2D grid and
//! crops regions out of it.

mod reshape;
pub mod types;

pub use reshape::{crop, to_raster};
pub use types::{Raster, Region};
