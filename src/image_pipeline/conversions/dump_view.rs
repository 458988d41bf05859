use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{DumpError, Result},
    conversions::types::ViewConfig,
    deinterleave::{MergedSequence, deinterleave_and_merge},
    display::{MinifbViewer, RasterViewer},
    dump::{DumpReader, FileDumpReader},
    export::{RasterWriter, TiffRasterWriter},
    packing::strip_packed_low_bits,
    raster::{Raster, crop, to_raster},
};

/// Result of reconstructing the capture at one candidate width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthOutcome {
    pub width: usize,
    pub height: usize,
    pub discarded: usize,
    pub exported: Option<PathBuf>,
}

/// Summary of a whole sweep over the configured widths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub input_len: usize,
    pub merged_len: usize,
    pub padded_tail: bool,
    pub outcomes: Vec<WidthOutcome>,
}

pub struct DumpViewPipeline<R: DumpReader, V: RasterViewer, W: RasterWriter> {
    reader: R,
    viewer: V,
    writer: W,
    config: ViewConfig,
}

impl DumpViewPipeline<FileDumpReader, MinifbViewer, TiffRasterWriter> {
    pub fn new(config: ViewConfig) -> Self {
        Self::with_reader(FileDumpReader::new(), config)
    }

    pub fn with_reader(reader: FileDumpReader, config: ViewConfig) -> Self {
        Self {
            reader,
            viewer: MinifbViewer,
            writer: TiffRasterWriter,
            config,
        }
    }
}

impl<R: DumpReader, V: RasterViewer, W: RasterWriter> DumpViewPipeline<R, V, W> {
    pub fn with_custom(reader: R, viewer: V, writer: W, config: ViewConfig) -> Self {
        Self {
            reader,
            viewer,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, raster: &Raster) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if raster.width() == 0 || raster.height() == 0 {
            return Err(DumpError::InvalidDimensions(raster.width(), raster.height()));
        }

        Ok(())
    }

    /// Swaps the byte lanes and, if configured, strips packed low bits.
    pub fn merge(&self, raw: &[u8]) -> MergedSequence {
        let mut merged = {
            let _span = tracing::info_span!("deinterleave").entered();
            deinterleave_and_merge(raw)
        };

        if self.config.strip_packed_low_bits {
            let _span = tracing::info_span!("strip_packed_low_bits").entered();
            merged.data = strip_packed_low_bits(&merged.data);
        }

        merged
    }

    /// Reshapes a merged sequence to `width` and applies the configured crop.
    pub fn reconstruct(&self, merged: &[u8], width: usize) -> Result<Raster> {
        let raster = {
            let _span = tracing::info_span!("to_raster", width).entered();
            to_raster(merged, width)?
        };

        self.validate_dimensions(&raster)?;

        match &self.config.crop {
            Some(region) => {
                let _span = tracing::info_span!("crop").entered();
                crop(&raster, region)
            }
            None => Ok(raster),
        }
    }

    fn export(&self, raster: &Raster, dir: &Path, name: &str, width: usize) -> Result<PathBuf> {
        let _span = tracing::info_span!("export").entered();
        let path = dir.join(format!("{name}_w{width}.tiff"));

        let mut file = std::fs::File::create(&path).map_err(|e| {
            DumpError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.writer
            .write_raster(raster, &mut file, self.config.compression)?;

        info!(output = %path.display(), "Snapshot written");
        Ok(path)
    }

    /// Reconstructs `raw` at every configured width, exporting and showing
    /// each raster in turn. `name` labels windows and snapshot files.
    #[instrument(skip(self, raw), fields(input_size = raw.len()))]
    pub fn view(&self, raw: &[u8], name: &str) -> Result<SweepReport> {
        info!("Reconstructing {} widths", self.config.widths.len());

        let merged = self.merge(raw);
        let mut outcomes = Vec::with_capacity(self.config.widths.len());

        for &width in &self.config.widths {
            let raster = self.reconstruct(&merged.data, width)?;

            let exported = match &self.config.export_dir {
                Some(dir) => Some(self.export(&raster, dir, name, width)?),
                None => None,
            };

            if self.config.display {
                let _span = tracing::info_span!("display", width).entered();
                self.viewer.show(
                    &raster,
                    &format!("{name} @ {width} bytes/row"),
                    self.config.normalize,
                )?;
            }

            info!(
                width,
                height = raster.height(),
                discarded = raster.discarded,
                "Width done"
            );
            outcomes.push(WidthOutcome {
                width,
                height: raster.height(),
                discarded: raster.discarded,
                exported,
            });
        }

        Ok(SweepReport {
            input_len: raw.len(),
            merged_len: merged.len(),
            padded_tail: merged.padded_tail,
            outcomes,
        })
    }

    #[instrument(skip(self, input_path))]
    pub fn view_file<P: AsRef<Path>>(&self, input_path: P) -> Result<SweepReport> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Viewing dump");

        let raw = {
            let _span = tracing::info_span!("read_dump").entered();
            self.reader.read_dump(input_path)?
        };

        let name = input_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dump".to_string());

        self.view(&raw, &name)
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
    }
}
