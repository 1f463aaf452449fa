//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{WithPath, file_system_error, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    fn io_image_error(message: &str) -> image::ImageError {
        image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            message.to_string(),
        ))
    }

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error(Path::new("/tmp/images"), "read directory", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read directory"));
        assert!(message.contains("/tmp/images"));
    }

    // Tests EmptyPool formatting includes both counts
    // Verified by omitting the skipped count from the message
    #[test]
    fn test_empty_pool_error() {
        let error = MosaicError::EmptyPool {
            attempted: 12,
            skipped: 12,
        };

        let message = error.to_string();
        assert!(message.contains("12 attempted"));
        assert!(message.contains("12 skipped"));
        assert!(error.source().is_none());
        assert!(!error.is_recoverable());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("grid_width", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("grid_width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests only per-candidate errors are recoverable
    // Verified by marking export errors recoverable
    #[test]
    fn test_recoverable_classification() {
        let load = Err::<(), _>(io_image_error("denied"))
            .with_load_path(Path::new("a.jpg"))
            .unwrap_err();
        let export = Err::<(), _>(io_image_error("denied"))
            .with_export_path(Path::new("out.jpg"))
            .unwrap_err();

        assert!(load.is_recoverable());
        assert!(!export.is_recoverable());
        assert!(!MosaicError::WorkerPanicked { role: "indexer" }.is_recoverable());
        assert!(
            MosaicError::DecodePanicked {
                path: PathBuf::from("a.jpg"),
                message: "overflow".to_string(),
            }
            .is_recoverable()
        );
        assert!(
            MosaicError::DuplicateCandidate {
                path: PathBuf::from("a.jpg"),
            }
            .is_recoverable()
        );
    }

    // Tests per-candidate errors expose the candidate path
    // Verified by returning None for decode panics
    #[test]
    fn test_candidate_path() {
        let panicked = MosaicError::DecodePanicked {
            path: PathBuf::from("tiles/b.png"),
            message: "index out of bounds".to_string(),
        };
        let duplicate = MosaicError::DuplicateCandidate {
            path: PathBuf::from("tiles/c.png"),
        };

        assert_eq!(panicked.candidate_path(), Some(Path::new("tiles/b.png")));
        assert!(panicked.to_string().contains("index out of bounds"));
        assert_eq!(duplicate.candidate_path(), Some(Path::new("tiles/c.png")));
        assert!(duplicate.to_string().contains("already indexed"));
        assert!(
            MosaicError::WorkerPanicked { role: "feeder" }
                .candidate_path()
                .is_none()
        );
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/output.jpg"),
            source: io_image_error("access denied"),
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.jpg"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from foreign errors
    // Verified by mapping io errors to ImageLoad
    #[test]
    fn test_from_conversions() {
        let from_io = MosaicError::from(std::io::Error::other("boom"));
        let from_image = MosaicError::from(io_image_error("bad"));

        assert!(matches!(from_io, MosaicError::FileSystem { .. }));
        assert!(matches!(from_image, MosaicError::ImageLoad { .. }));
    }

    // Tests panicked worker message names the role
    // Verified by dropping the role from the message
    #[test]
    fn test_worker_panicked_error() {
        let error = MosaicError::WorkerPanicked { role: "aggregator" };

        assert!(error.to_string().contains("aggregator"));
    }
}
