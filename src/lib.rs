//! Photomosaic construction from a target image and a pool of candidate photos
//!
//! Candidates are decoded, resized to the grid cell size and fingerprinted by
//! average color on a fixed pool of worker threads. Once the pool is sealed, the
//! target is partitioned into cells and each cell is filled with one of its two
//! closest candidates.

#![forbid(unsafe_code)]

/// Candidate indexing and the write-once tile pool
pub mod candidates;
/// Average color sampling and RGB distance
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cell matching and compositing into the output canvas
pub mod mosaic;
/// Two-phase run coordination
pub mod pipeline;
/// Rectangles and the cell grid
pub mod spatial;

pub use io::configuration::MosaicConfig;
pub use io::error::{MosaicError, Result};
pub use pipeline::MosaicPipeline;
