//! Copies chosen tiles into the output canvas

use crate::spatial::Rect;
use image::RgbImage;

/// Overwrite the canvas with `tile` starting at `origin`
///
/// The copy is clamped to both the tile and the canvas bounds, so edge cells
/// receive only the part of the tile that fits. Returns the region written, or
/// `None` if nothing of the tile lands on the canvas.
pub fn write_cell(canvas: &mut RgbImage, origin: (u32, u32), tile: &RgbImage) -> Option<Rect> {
    let (x, y) = origin;
    let region = Rect::new(x, y, tile.width(), tile.height())
        .clip(canvas.width(), canvas.height())?;

    for (canvas_x, canvas_y) in region.positions() {
        let pixel = *tile.get_pixel(canvas_x - x, canvas_y - y);
        canvas.put_pixel(canvas_x, canvas_y, pixel);
    }

    Some(region)
}
