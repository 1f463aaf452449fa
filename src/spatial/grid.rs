//! Row-major partition of a raster into fixed-size cells
//!
//! Cells start at the origin and step by the cell size. Where the raster is not
//! an exact multiple of the cell size the last column and row are clipped to the
//! raster bounds rather than padded, so every pixel belongs to exactly one cell.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::rect::Rect;

/// One grid cell, already clipped to the raster it partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Zero-based row index
    pub row: u32,
    /// Zero-based column index
    pub column: u32,
    /// Pixel region covered by the cell
    pub rect: Rect,
}

impl Cell {
    /// Top-left pixel of the cell
    pub const fn origin(&self) -> (u32, u32) {
        (self.rect.x, self.rect.y)
    }
}

/// Deterministic partition of a `width` x `height` raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
}

impl Grid {
    /// Create a grid over a raster of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if either cell dimension is zero
    pub fn new(width: u32, height: u32, cell_width: u32, cell_height: u32) -> Result<Self> {
        if cell_width == 0 {
            return Err(invalid_parameter(
                "cell_width",
                &cell_width,
                &"grid cells must be at least 1 pixel wide",
            ));
        }
        if cell_height == 0 {
            return Err(invalid_parameter(
                "cell_height",
                &cell_height,
                &"grid cells must be at least 1 pixel tall",
            ));
        }

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
        })
    }

    /// Width of the partitioned raster
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the partitioned raster
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cell columns, counting a clipped trailing column
    pub const fn columns(&self) -> u32 {
        self.width.div_ceil(self.cell_width)
    }

    /// Number of cell rows, counting a clipped trailing row
    pub const fn rows(&self) -> u32 {
        self.height.div_ceil(self.cell_height)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.columns() as u64 * self.rows() as u64
    }

    /// Cell at the given row and column, if it exists
    pub fn cell(&self, row: u32, column: u32) -> Option<Cell> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }

        let unclipped = Rect::new(
            column * self.cell_width,
            row * self.cell_height,
            self.cell_width,
            self.cell_height,
        );

        unclipped
            .clip(self.width, self.height)
            .map(|rect| Cell { row, column, rect })
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u32) -> impl Iterator<Item = Cell> + use<> {
        let grid = *self;
        (0..grid.columns()).filter_map(move |column| grid.cell(row, column))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let grid = *self;
        (0..grid.rows()).flat_map(move |row| grid.row(row))
    }
}
