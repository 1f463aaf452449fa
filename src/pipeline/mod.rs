//! Orchestration of the index-then-match run

/// Worker pool, aggregation barrier and matching loop
pub mod coordinator;

pub use coordinator::{ComposeStats, MosaicPipeline, require_pool};
