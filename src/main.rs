use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sensor_dump_viewer::image_pipeline::{
    DEFAULT_WIDTH, DumpViewPipeline, FileDumpReader, Region, TiffCompression, ViewConfig,
};
use sensor_dump_viewer::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reconstruct and view raw sensor captures")]
struct Args {
    /// Path to the binary capture
    #[arg(default_value = "image4.bin")]
    input: PathBuf,

    /// Row width in bytes; repeat to sweep several candidates
    #[arg(short, long = "width", default_values_t = [DEFAULT_WIDTH])]
    widths: Vec<usize>,

    /// Drop the packed low-order bit bytes (every 5th) before reshaping
    #[arg(long)]
    strip_packed_low_bits: bool,

    /// Only show ROWS,COLS, e.g. 1000:2000,0:1200
    #[arg(long)]
    crop: Option<Region>,

    /// Show raw intensities instead of stretching them to full range
    #[arg(long)]
    no_normalize: bool,

    /// Write a TIFF snapshot per width into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Compression for TIFF snapshots
    #[arg(long, value_enum, default_value_t = TiffCompression::None)]
    compression: TiffCompression,

    /// Do not open a viewer window
    #[arg(long)]
    no_display: bool,

    /// Memory-map the capture instead of reading it into memory
    #[arg(long)]
    mmap: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    info!("Starting sensor_dump_viewer...");

    let config = ViewConfig::builder()
        .widths(args.widths)
        .strip_packed_low_bits(args.strip_packed_low_bits)
        .crop(args.crop)
        .normalize(!args.no_normalize)
        .display(!args.no_display)
        .export_dir(args.export_dir)
        .compression(args.compression)
        .build();

    if let Some(dir) = &config.export_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating export directory {}", dir.display()))?;
    }

    let reader = if args.mmap { FileDumpReader::mmap() } else { FileDumpReader::new() };
    let pipeline = DumpViewPipeline::with_reader(reader, config);

    info!("Widths: {:?}", pipeline.config().widths);

    let report = pipeline
        .view_file(&args.input)
        .with_context(|| format!("viewing {}", args.input.display()))?;

    for outcome in &report.outcomes {
        info!(
            "width {:>5}: {} rows, {} bytes discarded",
            outcome.width, outcome.height, outcome.discarded
        );
    }

    Ok(())
}
