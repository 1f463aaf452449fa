//! Best-fit candidate selection for grid cells
//!
//! A single scan over the pool tracks the closest candidate and the closest one
//! whose path differs from the current best. The final pick alternates between
//! the two at random so cells of similar color do not all repeat one photo.

use crate::candidates::{CandidatePool, CandidateTile};
use crate::color::{Color, average_color};
use crate::spatial::Cell;
use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The two closest distinct candidates for one color
#[derive(Debug, Clone, Copy)]
pub struct MatchPair<'a> {
    /// Candidate with the smallest distance
    pub best: &'a CandidateTile,
    /// Distance from the sampled color to `best`
    pub best_distance: f64,
    /// Closest candidate whose path differs from `best`
    pub second: Option<(&'a CandidateTile, f64)>,
}

/// Scan `pool` for the candidates closest to `color`
///
/// Ties keep the earlier candidate. A displaced best is never farther than the
/// current second-best, so it always takes the second-best slot when its path
/// differs from the new best. Any pool with at least two distinct paths thus
/// yields a second-best. Returns `None` for an empty pool.
pub fn find_best_pair(pool: &CandidatePool, color: Color) -> Option<MatchPair<'_>> {
    let mut best: Option<(&CandidateTile, f64)> = None;
    let mut second: Option<(&CandidateTile, f64)> = None;

    for tile in pool {
        let distance = tile.color().distance(&color);

        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            if let Some(displaced) = best.replace((tile, distance)) {
                if displaced.0.path() != tile.path()
                    && second.is_none_or(|(_, second_distance)| displaced.1 <= second_distance)
                {
                    second = Some(displaced);
                }
            }
            if second.is_some_and(|(candidate, _)| candidate.path() == tile.path()) {
                second = None;
            }
            continue;
        }

        let differs_from_best = best.is_some_and(|(current, _)| current.path() != tile.path());
        if differs_from_best
            && second.is_none_or(|(_, second_distance)| distance < second_distance)
        {
            second = Some((tile, distance));
        }
    }

    best.map(|(best, best_distance)| MatchPair {
        best,
        best_distance,
        second,
    })
}

/// Coin flip between best and second-best, seeded once per run
#[derive(Debug, Clone)]
pub struct TieBreaker {
    rng: StdRng,
}

impl TieBreaker {
    /// Create a deterministic tie-breaker
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick `best` or `second` with equal probability
    ///
    /// Without a second-best the best candidate is returned and no draw is made.
    pub fn choose<'a>(&mut self, pair: &MatchPair<'a>) -> &'a CandidateTile {
        match pair.second {
            Some((second, _)) if self.rng.random_bool(0.5) => second,
            _ => pair.best,
        }
    }
}

/// Sample `cell` in `target` and pick a candidate for it
///
/// Returns `None` when the pool is empty, leaving the cell unfilled.
pub fn match_cell<'a>(
    target: &RgbImage,
    cell: &Cell,
    pool: &'a CandidatePool,
    tie_breaker: &mut TieBreaker,
) -> Option<&'a CandidateTile> {
    let color = average_color(target, cell.rect)?;
    let pair = find_best_pair(pool, color)?;
    Some(tie_breaker.choose(&pair))
}
