//! Tests for candidate decoding, resizing and the worker loop

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;
    use image::{DynamicImage, Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::candidates::indexer::{
        IndexWorker, index_candidate, index_guarded, index_image,
    };
    use photomosaic::io::progress::ProgressManager;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_uniform(dir: &Path, name: &str, color: [u8; 3], width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb(color))
            .save(&path)
            .unwrap();
        path
    }

    fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"definitely not an image").unwrap();
        path
    }

    // Tests a candidate is resized to the tile dimensions and fingerprinted
    // Verified by sampling before resizing
    #[test]
    fn test_index_candidate_resizes() {
        let dir = TempDir::new().unwrap();
        let path = write_uniform(dir.path(), "green.png", [0, 200, 0], 64, 48);

        let tile = index_candidate(&path, (10, 8)).unwrap();

        assert_eq!(tile.pixels().dimensions(), (10, 8));
        assert_eq!(tile.path(), path.as_path());
        let color = tile.color();
        assert!(color.r.abs() < 1.0);
        assert!((color.g - 200.0).abs() < 1.0);
        assert!(color.b.abs() < 1.0);
    }

    // Tests undecodable files report a recoverable load error with the path
    // Verified by panicking on decode failure
    #[test]
    fn test_index_candidate_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = write_corrupt(dir.path(), "broken.jpg");

        let error = index_candidate(&path, (10, 10)).unwrap_err();

        assert!(error.is_recoverable());
        match error {
            MosaicError::ImageLoad { path: failed, .. } => assert_eq!(failed, path),
            other => unreachable!("Expected ImageLoad, got {other}"),
        }
    }

    // Tests missing files report a load error
    // Verified by treating missing files as empty images
    #[test]
    fn test_index_candidate_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = index_candidate(&dir.path().join("absent.png"), (10, 10));

        assert!(matches!(result, Err(MosaicError::ImageLoad { .. })));
    }

    // Tests indexing the same file twice gives identical tiles
    // Verified by adding a random offset to the average
    #[test]
    fn test_index_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let image = RgbImage::from_fn(40, 30, |x, y| Rgb([(x * 6) as u8, (y * 8) as u8, 90]));
        let path = dir.path().join("gradient.png");
        image.save(&path).unwrap();

        let first = index_candidate(&path, (12, 9)).unwrap();
        let second = index_candidate(&path, (12, 9)).unwrap();

        assert_eq!(first.color(), second.color());
        assert_eq!(first.pixels(), second.pixels());
    }

    // Tests zero tile dimensions are rejected without resizing
    // Verified by removing the dimension guard
    #[test]
    fn test_index_image_zero_dimensions() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));

        let result = index_image(PathBuf::from("mem.png"), &image, (0, 4));

        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "tile_dimensions",
                ..
            })
        ));
    }

    // Tests a panic while indexing one candidate becomes a recoverable error
    // Verified by letting the panic unwind out of the guard
    #[test]
    fn test_index_guarded_catches_panic() {
        let path = Path::new("tiles/exploding.png");

        let error = index_guarded(path, || panic!("codec exploded")).unwrap_err();

        assert!(error.is_recoverable());
        match error {
            MosaicError::DecodePanicked {
                path: failed,
                message,
            } => {
                assert_eq!(failed, path);
                assert!(message.contains("codec exploded"));
            }
            other => unreachable!("Expected DecodePanicked, got {other}"),
        }
    }

    // Tests the guard passes through ordinary results untouched
    // Verified by wrapping every result in an error
    #[test]
    fn test_index_guarded_passes_results() {
        let dir = TempDir::new().unwrap();
        let path = write_uniform(dir.path(), "plain.png", [40, 40, 40], 8, 8);

        let tile = index_guarded(&path, || index_candidate(&path, (4, 4))).unwrap();

        assert_eq!(tile.pixels().dimensions(), (4, 4));
    }

    // Tests a worker forwards one result per path and survives bad files
    // Verified by stopping the loop at the first error
    #[test]
    fn test_worker_processes_until_queue_closed() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_uniform(dir.path(), "a.png", [255, 0, 0], 16, 16),
            write_corrupt(dir.path(), "b.png"),
            write_uniform(dir.path(), "c.png", [0, 0, 255], 16, 16),
        ];

        let (path_tx, path_rx) = unbounded();
        let (result_tx, result_rx) = unbounded();
        for path in &paths {
            path_tx.send(path.clone()).unwrap();
        }
        drop(path_tx);

        let progress = ProgressManager::hidden();
        let handled = IndexWorker::new(0, (8, 8)).run(&path_rx, &result_tx, &progress);
        drop(result_tx);

        let results: Vec<_> = result_rx.iter().collect();
        assert_eq!(handled, 3);
        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
        assert_eq!(progress.candidates_indexed(), 3);
    }

    // Tests a worker stops when nobody receives its results
    // Verified by ignoring send failures
    #[test]
    fn test_worker_stops_without_receiver() {
        let dir = TempDir::new().unwrap();
        let (path_tx, path_rx) = unbounded();
        for index in 0..4 {
            let name = format!("{index}.png");
            path_tx
                .send(write_uniform(dir.path(), &name, [9, 9, 9], 4, 4))
                .unwrap();
        }
        drop(path_tx);

        let (result_tx, result_rx) = unbounded();
        drop(result_rx);

        let handled =
            IndexWorker::new(1, (2, 2)).run(&path_rx, &result_tx, &ProgressManager::hidden());

        assert_eq!(handled, 1);
    }
}
