//! Axis-aligned pixel rectangles with clipping against raster bounds

/// Rectangle of pixels anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its origin and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole raster of the given size
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when the rectangle covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with a raster of size `bound_width` x `bound_height`
    ///
    /// Returns `None` when nothing of the rectangle lies inside the raster,
    /// so callers never see a zero-area region.
    pub fn clip(&self, bound_width: u32, bound_height: u32) -> Option<Self> {
        if self.x >= bound_width || self.y >= bound_height {
            return None;
        }

        let clipped = Self::new(
            self.x,
            self.y,
            self.width.min(bound_width - self.x),
            self.height.min(bound_height - self.y),
        );

        (!clipped.is_empty()).then_some(clipped)
    }

    /// Pixel coordinates covered by the rectangle, in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let Self {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y.saturating_add(height))
            .flat_map(move |py| (x..x.saturating_add(width)).map(move |px| (px, py)))
    }
}
