//! Pipeline conversions module
//!
//! This module contains orchestration logic for reconstructing and viewing
//! sensor dumps.

mod dump_view;
pub mod types;


pub use dump_view::{DumpViewPipeline, SweepReport, WidthOutcome};
pub use types::{DEFAULT_WIDTH, ViewConfig, ViewConfigBuilder};
