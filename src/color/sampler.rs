//! Average color of rectangular raster regions

use crate::spatial::rect::Rect;
use image::{GenericImageView, Rgb};

/// Mean channel intensities of a pixel region
///
/// Channels stay in the codec's native 8-bit range (0 to 255) rather than being
/// normalized, so candidate and target colors compare on the same scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Mean red intensity
    pub r: f64,
    /// Mean green intensity
    pub g: f64,
    /// Mean blue intensity
    pub b: f64,
}

impl Color {
    /// Create a color from channel intensities
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance in RGB space
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }
}

/// Average color of `rect` within `image`
///
/// The rectangle is clipped to the image bounds first. Returns `None` when the
/// clipped region is empty, since a zero-area region has no mean.
pub fn average_color<I>(image: &I, rect: Rect) -> Option<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    let region = rect.clip(width, height)?;

    let mut sum = [0.0f64; 3];
    for (x, y) in region.positions() {
        let Rgb(channels) = image.get_pixel(x, y);
        for (total, channel) in sum.iter_mut().zip(channels) {
            *total += f64::from(channel);
        }
    }

    let count = region.area() as f64;
    let [r, g, b] = sum;
    Some(Color::new(r / count, g / count, b / count))
}

/// Average color over every pixel of `image`
pub fn average_color_of<I>(image: &I) -> Option<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    average_color(image, Rect::from_dimensions(width, height))
}
