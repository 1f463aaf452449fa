//! Input/output, configuration and ambient concerns

/// Command-line parsing and the standalone job runner
pub mod cli;
/// Defaults and the validated run configuration
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Candidate discovery, target decoding and mosaic export
pub mod image;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Terminal progress bars for both phases
pub mod progress;
