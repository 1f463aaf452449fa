//! Candidate indexing and the pool of tiles it produces

/// Decode, resize and color-characterize candidate files
pub mod indexer;
/// Candidate tiles, the write-once pool and its aggregator
pub mod pool;

pub use pool::{CandidatePool, CandidateTile, IndexReport, PoolAggregator, SkippedCandidate};
