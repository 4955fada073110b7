/// Candidate curation module
///
/// Scores fetched candidates, collapses duplicates, and keeps the top slice
/// of the pool per the 80/20 heuristic: the best fifth of a well-curated
/// pool carries most of the learning value.

pub mod dedup;
pub mod scoring;

// Re-export main operations
pub use dedup::{deduplicate, string_similarity};
pub use scoring::{parse_duration_seconds, quality_score};

use crate::search::Candidate;
use serde::{Deserialize, Serialize};

/// A candidate with its composite quality score attached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredVideo {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub quality_score: f64,
}

/// Pareto cut: keep the top `max(min_count, ceil(ratio * len))` of a
/// score-sorted pool. A pool smaller than the minimum is returned whole;
/// under-supply is a short result, not a failure.
pub fn select_top(videos: Vec<ScoredVideo>, min_count: usize, ratio: f64) -> Vec<ScoredVideo> {
    let pareto_count = ((videos.len() as f64) * ratio).ceil() as usize;
    let keep = min_count.max(pareto_count).min(videos.len());

    videos.into_iter().take(keep).collect()
}
