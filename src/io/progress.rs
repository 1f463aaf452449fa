//! Progress display for the indexing and matching phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use tracing::debug;

static INDEX_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Indexing [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static MATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Matching [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{percent:>3}}%");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coarse completion percentage after finishing the row starting at `row_y`
///
/// Matches row granularity: the value only moves when a whole grid row is done.
pub const fn percent_complete(row_y: u32, height: u32) -> u32 {
    if height == 0 {
        return 100;
    }
    let done = row_y as u64 * 100 / height as u64;
    if done > 100 { 100 } else { done as u32 }
}

/// Coordinates the two phase bars
///
/// All methods take `&self` so indexing workers can share one manager.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    index_bar: ProgressBar,
    match_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a manager that tracks progress without drawing anything
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let multi_progress = MultiProgress::with_draw_target(target);

        let index_bar = multi_progress.add(ProgressBar::new(0));
        index_bar.set_style(INDEX_STYLE.clone());

        let match_bar = multi_progress.add(ProgressBar::new(0));
        match_bar.set_style(MATCH_STYLE.clone());

        Self {
            multi_progress,
            index_bar,
            match_bar,
        }
    }

    /// Announce how many candidates will be indexed
    pub fn start_indexing(&self, candidate_count: usize) {
        self.index_bar.set_length(candidate_count as u64);
        self.index_bar.set_position(0);
    }

    /// Record one processed candidate, successful or not
    pub fn candidate_indexed(&self) {
        self.index_bar.inc(1);
    }

    /// Number of candidates processed so far
    pub fn candidates_indexed(&self) -> u64 {
        self.index_bar.position()
    }

    /// Close the indexing bar
    pub fn finish_indexing(&self) {
        self.index_bar.finish();
    }

    /// Announce the height of the canvas about to be matched
    pub fn start_matching(&self) {
        self.match_bar.set_length(100);
        self.match_bar.set_position(0);
    }

    /// Record a finished grid row and return the overall percentage
    pub fn row_completed(&self, next_row_y: u32, height: u32) -> u32 {
        let percent = percent_complete(next_row_y, height);
        self.match_bar.set_position(u64::from(percent));
        debug!(percent, "matching progress");
        percent
    }

    /// Current matching percentage
    pub fn matching_percent(&self) -> u64 {
        self.match_bar.position()
    }

    /// Close the matching bar
    pub fn finish_matching(&self) {
        self.match_bar.finish();
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
