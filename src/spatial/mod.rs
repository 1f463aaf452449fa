//! Spatial data structures for partitioning rasters
//!
//! This module contains:
//! - Pixel rectangles with clipping against raster bounds
//! - The row-major cell grid laid over the target image

/// Row-major cell partition of the target raster
pub mod grid;
/// Clippable pixel rectangles
pub mod rect;

pub use grid::{Cell, Grid};
pub use rect::Rect;
