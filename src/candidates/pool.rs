//! Candidate tiles and the write-once pool they are collected into
//!
//! Workers hand their results to a single [`PoolAggregator`], the only place the
//! pool is ever mutated. Finishing the aggregator consumes it and yields an
//! immutable [`CandidatePool`], so nothing can be appended once matching starts.

use crate::color::Color;
use crate::io::error::MosaicError;
use image::RgbImage;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A candidate photo resized to the tile dimensions
#[derive(Debug, Clone)]
pub struct CandidateTile {
    path: PathBuf,
    pixels: RgbImage,
    color: Color,
}

impl CandidateTile {
    /// Bundle resized pixels with their average color
    pub const fn new(path: PathBuf, pixels: RgbImage, color: Color) -> Self {
        Self {
            path,
            pixels,
            color,
        }
    }

    /// Source file, unique within a pool
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resized pixel block
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Average color of the resized pixels
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Fully indexed, read-only collection of candidate tiles
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    tiles: Vec<CandidateTile>,
}

impl CandidatePool {
    /// Number of tiles in the pool
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no candidate survived indexing
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, in arrival order
    pub fn tiles(&self) -> &[CandidateTile] {
        &self.tiles
    }

    /// Iterate over the tiles
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateTile> {
        self.tiles.iter()
    }
}

impl FromIterator<CandidateTile> for CandidatePool {
    fn from_iter<T: IntoIterator<Item = CandidateTile>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a CandidateTile;
    type IntoIter = std::slice::Iter<'a, CandidateTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// A candidate dropped during indexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    /// File that failed to index
    pub path: PathBuf,
    /// Rendered reason for the failure
    pub reason: String,
}

/// Outcome of the indexing phase
#[derive(Debug, Default)]
pub struct IndexReport {
    /// Tiles that indexed successfully
    pub pool: CandidatePool,
    /// Candidates dropped with a warning
    pub skipped: Vec<SkippedCandidate>,
}

impl IndexReport {
    /// Number of candidates the indexer processed, successful or not
    pub fn attempted(&self) -> usize {
        self.pool.len() + self.skipped.len()
    }
}

/// Exclusive collector for worker results
#[derive(Debug, Default)]
pub struct PoolAggregator {
    tiles: Vec<CandidateTile>,
    seen: HashSet<PathBuf>,
    skipped: Vec<SkippedCandidate>,
}

impl PoolAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one worker result
    ///
    /// Failures are logged and kept in the report; they never reach the pool.
    /// A path already in the pool is skipped the same way, so paths stay unique.
    pub fn accept(&mut self, result: Result<CandidateTile, MosaicError>) {
        match result {
            Ok(tile) if self.seen.insert(tile.path.clone()) => self.tiles.push(tile),
            Ok(tile) => self.skip(&MosaicError::DuplicateCandidate { path: tile.path }),
            Err(error) => self.skip(&error),
        }
    }

    fn skip(&mut self, error: &MosaicError) {
        let path = error
            .candidate_path()
            .map_or_else(|| PathBuf::from("<unknown>"), Path::to_path_buf);
        warn!(path = %path.display(), %error, "skipping candidate");
        self.skipped.push(SkippedCandidate {
            path,
            reason: error.to_string(),
        });
    }

    /// Drain a result stream until every producer has hung up
    pub fn drain<I>(&mut self, results: I)
    where
        I: IntoIterator<Item = Result<CandidateTile, MosaicError>>,
    {
        for result in results {
            self.accept(result);
        }
    }

    /// Number of results accepted so far
    pub fn received(&self) -> usize {
        self.tiles.len() + self.skipped.len()
    }

    /// Seal the pool
    pub fn finish(self) -> IndexReport {
        IndexReport {
            pool: self.tiles.into_iter().collect(),
            skipped: self.skipped,
        }
    }
}
