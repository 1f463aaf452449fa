//! Command-line interface for building a mosaic from a photo directory

use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_IMAGE_DIR, DEFAULT_OUT_HEIGHT,
    DEFAULT_OUT_WIDTH, DEFAULT_OUTPUT_IMAGE, DEFAULT_SEED, DEFAULT_SOURCE_IMAGE,
    DEFAULT_WORKER_COUNT, MosaicConfig, QUEUE_CAPACITY,
};
use crate::io::error::Result;
use crate::io::image::{list_candidate_files, load_target, save_image};
use crate::io::progress::ProgressManager;
use crate::pipeline::{MosaicPipeline, require_pool};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image as a grid of photos matched by average color"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Target image to rebuild
    #[arg(short, long = "src-img", value_name = "FILE", default_value = DEFAULT_SOURCE_IMAGE)]
    pub src_img: PathBuf,

    /// Directory holding the candidate photos
    #[arg(short = 'd', long = "img-dir", value_name = "DIR", default_value = DEFAULT_IMAGE_DIR)]
    pub img_dir: PathBuf,

    /// Output file, format taken from the extension
    #[arg(short, long = "out-img", value_name = "FILE", default_value = DEFAULT_OUTPUT_IMAGE)]
    pub out_img: PathBuf,

    /// Output width in pixels
    #[arg(long = "out-w", default_value_t = DEFAULT_OUT_WIDTH)]
    pub out_width: u32,

    /// Output height in pixels
    #[arg(long = "out-h", default_value_t = DEFAULT_OUT_HEIGHT)]
    pub out_height: u32,

    /// Grid cell width in pixels
    #[arg(long = "grid-w", default_value_t = DEFAULT_GRID_WIDTH)]
    pub grid_width: u32,

    /// Grid cell height in pixels
    #[arg(long = "grid-h", default_value_t = DEFAULT_GRID_HEIGHT)]
    pub grid_height: u32,

    /// Number of candidate indexing workers
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// Random seed for the best/second-best tie-break
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress bars and informational logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration described by the arguments
    pub const fn mosaic_config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_width: self.grid_width,
            tile_height: self.grid_height,
            out_width: self.out_width,
            out_height: self.out_height,
            worker_count: self.workers,
            queue_capacity: QUEUE_CAPACITY,
            seed: self.seed,
        }
    }
}

/// Runs one standalone mosaic build from parsed arguments
pub struct MosaicJob {
    cli: Cli,
}

impl MosaicJob {
    /// Create a job for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments the job was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// List candidates, index them, build the mosaic and save it
    ///
    /// Nothing is written when the run fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The candidate directory cannot be listed
    /// - The target image cannot be decoded
    /// - No candidate indexes successfully
    /// - The output cannot be written
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.mosaic_config();

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        let pipeline = MosaicPipeline::new(config)?.with_progress(progress);

        let candidates = list_candidate_files(&self.cli.img_dir)?;
        let target = load_target(&self.cli.src_img, config.output_dimensions())?;

        let report = pipeline.index(candidates)?;
        let pool = require_pool(report)?;
        let canvas = pipeline.compose(&target, &pool)?;
        pipeline.progress().finish();

        save_image(&canvas, &self.cli.out_img)?;
        info!(
            output = %self.cli.out_img.display(),
            elapsed = ?start_time.elapsed(),
            "mosaic written"
        );

        Ok(())
    }
}
