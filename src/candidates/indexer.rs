//! Turns candidate files into color-characterized tiles
//!
//! Each worker pulls paths from a shared queue until the queue is closed and
//! drained, and forwards one result per path. A failure to decode one file is
//! forwarded as an error result and never stops the worker. Neither does a
//! panic inside the codec; it is caught and forwarded the same way.

use crate::candidates::pool::CandidateTile;
use crate::color::average_color_of;
use crate::io::error::{MosaicError, Result, WithPath, invalid_parameter};
use crate::io::progress::ProgressManager;
use crossbeam_channel::{Receiver, Sender};
use image::DynamicImage;
use image::imageops::FilterType;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resampling filter used for every tile
pub const TILE_FILTER: FilterType = FilterType::Lanczos3;

/// Decode `path` and index it at `tile_dimensions`
///
/// # Errors
///
/// Returns [`crate::MosaicError::ImageLoad`] if the file cannot be read or decoded
pub fn index_candidate(path: &Path, tile_dimensions: (u32, u32)) -> Result<CandidateTile> {
    let image = image::open(path).with_load_path(path)?;
    index_image(path.to_path_buf(), &image, tile_dimensions)
}

/// Index an already decoded image
///
/// # Errors
///
/// Returns an error if either tile dimension is zero
pub fn index_image(
    path: PathBuf,
    image: &DynamicImage,
    tile_dimensions: (u32, u32),
) -> Result<CandidateTile> {
    let (width, height) = tile_dimensions;
    let empty_tile = || {
        invalid_parameter(
            "tile_dimensions",
            &format!("{width}x{height}"),
            &"tiles must cover at least one pixel",
        )
    };
    if width == 0 || height == 0 {
        return Err(empty_tile());
    }

    let pixels = image.resize_exact(width, height, TILE_FILTER).to_rgb8();
    let color = average_color_of(&pixels).ok_or_else(empty_tile)?;

    Ok(CandidateTile::new(path, pixels, color))
}

/// Run `index` for the candidate at `path`, turning a panic into an error
///
/// # Errors
///
/// Returns whatever `index` returns, or [`MosaicError::DecodePanicked`] if it panics
pub fn index_guarded<F>(path: &Path, index: F) -> Result<CandidateTile>
where
    F: FnOnce() -> Result<CandidateTile>,
{
    panic::catch_unwind(AssertUnwindSafe(index)).unwrap_or_else(|payload| {
        Err(MosaicError::DecodePanicked {
            path: path.to_path_buf(),
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// One member of the fixed indexing pool
#[derive(Debug, Clone, Copy)]
pub struct IndexWorker {
    id: usize,
    tile_dimensions: (u32, u32),
}

impl IndexWorker {
    /// Create worker `id` producing tiles of `tile_dimensions`
    pub const fn new(id: usize, tile_dimensions: (u32, u32)) -> Self {
        Self {
            id,
            tile_dimensions,
        }
    }

    /// Process paths until the queue is closed and empty
    ///
    /// Returns the number of paths this worker handled. Stops early if the
    /// aggregator has gone away, since nobody is left to receive results.
    pub fn run(
        &self,
        paths: &Receiver<PathBuf>,
        results: &Sender<Result<CandidateTile>>,
        progress: &ProgressManager,
    ) -> usize {
        let mut handled = 0;

        for path in paths {
            let result = index_guarded(&path, || index_candidate(&path, self.tile_dimensions));
            debug!(worker = self.id, path = %path.display(), ok = result.is_ok(), "indexed");
            handled += 1;
            progress.candidate_indexed();

            if results.send(result).is_err() {
                break;
            }
        }

        handled
    }
}
