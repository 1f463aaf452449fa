//! Cell matching and compositing

/// Tile placement into the output canvas
pub mod compositor;
/// Best-fit selection with a seeded random tie-break
pub mod matcher;

pub use compositor::write_cell;
pub use matcher::{MatchPair, TieBreaker, find_best_pair, match_cell};
