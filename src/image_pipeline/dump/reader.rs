use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dump::types::RawDump;

pub trait DumpReader {
    fn read_dump(&self, path: &Path) -> Result<RawDump>;
}
