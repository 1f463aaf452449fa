//! Two-phase mosaic run: index every candidate, then match every cell
//!
//! Indexing uses a feeder thread pushing paths into a bounded queue, a fixed pool
//! of workers draining it, and one aggregator draining the bounded result queue.
//! The aggregator only returns once every worker has dropped its result sender
//! and the result queue is empty; joining it is the barrier before matching.

use crate::candidates::indexer::IndexWorker;
use crate::candidates::{CandidatePool, CandidateTile, IndexReport, PoolAggregator};
use crate::io::configuration::MosaicConfig;
use crate::io::error::{MosaicError, Result};
use crate::io::image::resize_target;
use crate::io::progress::ProgressManager;
use crate::mosaic::{TieBreaker, match_cell, write_cell};
use crate::spatial::Grid;
use crossbeam_channel::bounded;
use image::{DynamicImage, RgbImage};
use std::path::PathBuf;
use std::thread;
use tracing::{Dispatch, debug, dispatcher, info, warn};

/// Cells left unfilled and other counters from the matching phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeStats {
    /// Cells that received a tile
    pub cells_filled: u64,
    /// Cells skipped because no candidate was available
    pub cells_unfilled: u64,
}

/// Configured mosaic engine
pub struct MosaicPipeline {
    config: MosaicConfig,
    progress: ProgressManager,
}

impl MosaicPipeline {
    /// Create a pipeline with hidden progress
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            progress: ProgressManager::hidden(),
        })
    }

    /// Replace the progress display
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = progress;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Progress display shared with the workers
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    /// Index every candidate path into a sealed pool
    ///
    /// Undecodable candidates are dropped with a warning and listed in the
    /// report. The call returns only after all workers have exited and every
    /// result has been aggregated.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::WorkerPanicked`] if a pipeline thread panics
    pub fn index(&self, paths: Vec<PathBuf>) -> Result<IndexReport> {
        let capacity = self.config.queue_capacity;
        let tile_dimensions = self.config.tile_dimensions();
        let progress = &self.progress;

        info!(
            candidates = paths.len(),
            workers = self.config.worker_count,
            "indexing candidates"
        );
        progress.start_indexing(paths.len());

        // Pipeline threads log to the caller's subscriber, not only the global one
        let dispatch = &dispatcher::get_default(Dispatch::clone);

        let (path_tx, path_rx) = bounded::<PathBuf>(capacity);
        let (result_tx, result_rx) = bounded::<Result<CandidateTile>>(capacity);

        let report = thread::scope(|scope| {
            let feeder = scope.spawn(move || {
                for path in paths {
                    if path_tx.send(path).is_err() {
                        break;
                    }
                }
                // path_tx drops here, closing the queue
            });

            let workers: Vec<_> = (0..self.config.worker_count)
                .map(|id| {
                    let paths = path_rx.clone();
                    let results = result_tx.clone();
                    let worker = IndexWorker::new(id, tile_dimensions);
                    scope.spawn(move || {
                        dispatcher::with_default(dispatch, || worker.run(&paths, &results, progress))
                    })
                })
                .collect();

            // Only worker clones may keep the queues open
            drop(path_rx);
            drop(result_tx);

            let aggregator = scope.spawn(move || {
                dispatcher::with_default(dispatch, || {
                    let mut aggregator = PoolAggregator::new();
                    aggregator.drain(result_rx);
                    debug!(received = aggregator.received(), "result queue drained");
                    aggregator.finish()
                })
            });

            feeder
                .join()
                .map_err(|_| MosaicError::WorkerPanicked { role: "feeder" })?;

            for (id, worker) in workers.into_iter().enumerate() {
                let handled = worker
                    .join()
                    .map_err(|_| MosaicError::WorkerPanicked { role: "indexer" })?;
                debug!(worker = id, handled, "indexing worker finished");
            }

            aggregator
                .join()
                .map_err(|_| MosaicError::WorkerPanicked { role: "aggregator" })
        })?;

        progress.finish_indexing();
        info!(
            indexed = report.pool.len(),
            skipped = report.skipped.len(),
            "candidate pool sealed"
        );

        Ok(report)
    }

    /// Match and composite every cell of an already resized target
    ///
    /// The canvas has the target's dimensions. Cells are processed in row-major
    /// order with one tie-break generator seeded for the whole run.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPool`] if the pool is empty and the target
    /// has at least one pixel, or an error if the grid cannot be built
    pub fn compose(&self, target: &RgbImage, pool: &CandidatePool) -> Result<RgbImage> {
        self.compose_with_stats(target, pool).map(|(canvas, _)| canvas)
    }

    /// Same as [`Self::compose`], also returning cell counters
    ///
    /// # Errors
    ///
    /// See [`Self::compose`]
    pub fn compose_with_stats(
        &self,
        target: &RgbImage,
        pool: &CandidatePool,
    ) -> Result<(RgbImage, ComposeStats)> {
        let (width, height) = target.dimensions();
        let grid = Grid::new(
            width,
            height,
            self.config.tile_width,
            self.config.tile_height,
        )?;

        if pool.is_empty() && grid.cell_count() > 0 {
            return Err(MosaicError::EmptyPool {
                attempted: 0,
                skipped: 0,
            });
        }

        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            pool = pool.len(),
            "matching cells"
        );

        let mut canvas = RgbImage::new(width, height);
        let mut tie_breaker = TieBreaker::new(self.config.seed);
        let mut stats = ComposeStats::default();
        self.progress.start_matching();

        for row in 0..grid.rows() {
            let mut row_end = 0;
            for cell in grid.row(row) {
                row_end = cell.rect.y + cell.rect.height;
                let written = match_cell(target, &cell, pool, &mut tie_breaker)
                    .and_then(|tile| write_cell(&mut canvas, cell.origin(), tile.pixels()));

                match written {
                    Some(region) if region == cell.rect => stats.cells_filled += 1,
                    Some(region) => {
                        warn!(?region, cell = ?cell.rect, "tile smaller than its cell");
                        stats.cells_filled += 1;
                    }
                    None => stats.cells_unfilled += 1,
                }
            }
            self.progress.row_completed(row_end, height);
        }

        self.progress.finish_matching();
        Ok((canvas, stats))
    }

    /// Build a complete mosaic from a decoded target and candidate paths
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A pipeline thread panics
    /// - No candidate indexes successfully ([`MosaicError::EmptyPool`])
    pub fn run(&self, target: &DynamicImage, paths: Vec<PathBuf>) -> Result<RgbImage> {
        let report = self.index(paths)?;
        let pool = require_pool(report)?;
        let resized = resize_target(target, self.config.output_dimensions());
        self.compose(&resized, &pool)
    }
}

/// Unwrap the pool, failing fast if indexing produced nothing usable
///
/// # Errors
///
/// Returns [`MosaicError::EmptyPool`] when the report holds no tile
pub fn require_pool(report: IndexReport) -> Result<CandidatePool> {
    if report.pool.is_empty() {
        return Err(MosaicError::EmptyPool {
            attempted: report.attempted(),
            skipped: report.skipped.len(),
        });
    }
    Ok(report.pool)
}
