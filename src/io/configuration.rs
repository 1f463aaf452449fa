//! Mosaic constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Output raster settings
/// Default width of the finished mosaic in pixels
pub const DEFAULT_OUT_WIDTH: u32 = 1000;
/// Default height of the finished mosaic in pixels
pub const DEFAULT_OUT_HEIGHT: u32 = 1000;

// Tiles are resized to the grid cell, so one pair of values drives both
/// Default grid cell (and tile) width in pixels
pub const DEFAULT_GRID_WIDTH: u32 = 50;
/// Default grid cell (and tile) height in pixels
pub const DEFAULT_GRID_HEIGHT: u32 = 50;

/// Number of candidate indexing workers
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// Capacity of the path queue and the result queue between pipeline stages
pub const QUEUE_CAPACITY: usize = 10;

/// Fixed seed for reproducible tie-breaks
pub const DEFAULT_SEED: u64 = 42;

// Default file locations
/// Target image decoded when none is given
pub const DEFAULT_SOURCE_IMAGE: &str = "src.jpg";
/// Directory scanned for candidate photographs
pub const DEFAULT_IMAGE_DIR: &str = "images";
/// Output file written when none is given
pub const DEFAULT_OUTPUT_IMAGE: &str = "out.jpg";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters for one engine run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Grid cell width, also the width candidates are resized to
    pub tile_width: u32,
    /// Grid cell height, also the height candidates are resized to
    pub tile_height: u32,
    /// Width the target is resized to before gridding
    pub out_width: u32,
    /// Height the target is resized to before gridding
    pub out_height: u32,
    /// Number of indexing worker threads
    pub worker_count: usize,
    /// Capacity of the bounded pipeline queues
    pub queue_capacity: usize,
    /// Seed for the tie-break generator, drawn from once per run
    pub seed: u64,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_GRID_WIDTH,
            tile_height: DEFAULT_GRID_HEIGHT,
            out_width: DEFAULT_OUT_WIDTH,
            out_height: DEFAULT_OUT_HEIGHT,
            worker_count: DEFAULT_WORKER_COUNT,
            queue_capacity: QUEUE_CAPACITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl MosaicConfig {
    /// Tile dimensions as a `(width, height)` pair
    pub const fn tile_dimensions(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Output dimensions as a `(width, height)` pair
    pub const fn output_dimensions(&self) -> (u32, u32) {
        (self.out_width, self.out_height)
    }

    /// Reject configurations the engine cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if any dimension,
    /// the worker count or the queue capacity is zero
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("out_width", self.out_width),
            ("out_height", self.out_height),
        ];
        for (parameter, value) in dimensions {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1 pixel"));
            }
        }

        if self.worker_count == 0 {
            return Err(invalid_parameter(
                "worker_count",
                &self.worker_count,
                &"at least one indexing worker is required",
            ));
        }

        if self.queue_capacity == 0 {
            return Err(invalid_parameter(
                "queue_capacity",
                &self.queue_capacity,
                &"queues must hold at least one item",
            ));
        }

        Ok(())
    }
}
