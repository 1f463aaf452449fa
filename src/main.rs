//! CLI entry point for the photomosaic builder

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicJob};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    photomosaic::io::logging::init(cli.quiet);
    MosaicJob::new(cli)
        .process()
        .inspect_err(|error| tracing::error!(%error, "mosaic run failed"))
}
