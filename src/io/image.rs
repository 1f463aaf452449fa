//! Candidate discovery, target decoding and mosaic export

use crate::candidates::indexer::TILE_FILTER;
use crate::io::error::{Result, WithPath, file_system_error};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Regular files in `dir` whose extension names an image format, sorted by path
///
/// Files are not decoded here; unreadable images surface later as per-candidate
/// warnings during indexing.
///
/// # Errors
///
/// Returns [`crate::MosaicError::FileSystem`] if the directory cannot be listed
pub fn list_candidate_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read directory entry", e))?
            .path();

        if !path.is_file() {
            continue;
        }

        if ImageFormat::from_path(&path).is_ok() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "ignoring file without an image extension");
        }
    }

    files.sort();
    Ok(files)
}

/// Resize a decoded target to the output dimensions
pub fn resize_target(image: &DynamicImage, dimensions: (u32, u32)) -> RgbImage {
    let (width, height) = dimensions;
    image.resize_exact(width, height, TILE_FILTER).to_rgb8()
}

/// Decode the target image and resize it to the output dimensions
///
/// # Errors
///
/// Returns [`crate::MosaicError::ImageLoad`] if the target cannot be decoded;
/// without a target there is nothing to build, so callers treat this as fatal
pub fn load_target(path: &Path, dimensions: (u32, u32)) -> Result<RgbImage> {
    let image = image::open(path).with_load_path(path)?;
    Ok(resize_target(&image, dimensions))
}

/// Encode `canvas` to `path`, inferring the format from the extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The format cannot be inferred or the file cannot be written
pub fn save_image(canvas: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    canvas.save(path).with_export_path(path)
}
