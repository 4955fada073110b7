//! Deduplication and channel diversity
//!
//! The multi-query fetch produces heavy overlap: the same upload returned by
//! several queries, re-uploads with near-identical titles, and channels that
//! dominate a topic. Candidates are processed in descending score order so
//! higher-quality items win ties.

use super::ScoredVideo;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Normalized similarity between two strings via Levenshtein distance:
/// `1 - distance / max_length`, case-insensitive. Two empty strings are
/// identical.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&a, &b);
    (longer - distance) as f64 / longer as f64
}

/// Classic dynamic-programming edit distance, kept to a single rolling row
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution_cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + substitution_cost)
                .min(curr[j] + 1)
                .min(prev[j + 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Remove near-duplicates and cap per-channel selections.
///
/// Returns the surviving videos sorted descending by quality score. A
/// candidate is skipped when its exact lowercase title+channel key was
/// already accepted, when its channel has already contributed
/// `max_per_channel` videos, or when its title is more than
/// `similarity_threshold` similar to an already-accepted title. Candidates
/// with a non-finite score are dropped outright.
pub fn deduplicate(
    mut videos: Vec<ScoredVideo>,
    max_per_channel: usize,
    similarity_threshold: f64,
) -> Vec<ScoredVideo> {
    let input_len = videos.len();

    videos.retain(|v| v.quality_score.is_finite());

    // Stable sort keeps input order on score ties
    videos.sort_by(|a, b| {
        b.quality_score
            .partial_cmp(&a.quality_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut channel_counts: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<ScoredVideo> = Vec::new();

    for video in videos {
        let key = format!("{}-{}", video.candidate.title, video.candidate.channel).to_lowercase();
        if seen.contains(&key) {
            debug!(
                "Skipping duplicate: {} by {}",
                video.candidate.title, video.candidate.channel
            );
            continue;
        }

        let channel_count = channel_counts
            .get(&video.candidate.channel)
            .copied()
            .unwrap_or(0);
        if channel_count >= max_per_channel {
            debug!(
                "Skipping video from over-represented channel: {}",
                video.candidate.channel
            );
            continue;
        }

        let has_similar = result.iter().any(|accepted| {
            string_similarity(&video.candidate.title, &accepted.candidate.title)
                > similarity_threshold
        });
        if has_similar {
            debug!("Skipping near-duplicate title: {}", video.candidate.title);
            continue;
        }

        seen.insert(key);
        channel_counts.insert(video.candidate.channel.clone(), channel_count + 1);
        result.push(video);
    }

    debug!("Deduplicated {} candidates down to {}", input_len, result.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Candidate;
    use chrono::Utc;

    fn scored(title: &str, channel: &str, score: f64) -> ScoredVideo {
        ScoredVideo {
            candidate: Candidate {
                id: format!("{}-{}", title, channel),
                title: title.to_string(),
                channel: channel.to_string(),
                published_at: Utc::now(),
                description: String::new(),
                thumbnail: String::new(),
                views: 0,
                likes: 0,
                comments: 0,
                duration: "PT10M".to_string(),
            },
            quality_score: score,
        }
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(string_similarity("", ""), 1.0);
        assert_eq!(string_similarity("abc", "abc"), 1.0);
        assert_eq!(string_similarity("ABC", "abc"), 1.0);
        assert!(string_similarity("kitten", "sitting") < 1.0);
        assert!(string_similarity("completely different", "zzz") < 0.3);
    }

    #[test]
    fn test_exact_duplicate_pair_keeps_one() {
        let videos = vec![
            scored("Intro to Rust", "RustChan", 80.0),
            scored("Intro To RUST", "rustchan", 60.0),
        ];
        let result = deduplicate(videos, 2, 0.85);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quality_score, 80.0);
    }

    #[test]
    fn test_channel_cap() {
        let videos = vec![
            scored("Video One About X", "SameChannel", 90.0),
            scored("Totally Unrelated Title Y", "SameChannel", 85.0),
            scored("A Third Distinct Subject Z", "SameChannel", 80.0),
        ];
        let result = deduplicate(videos, 2, 0.85);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_similar_titles_collapsed() {
        let videos = vec![
            scored("Learn Python in 10 Minutes", "A", 90.0),
            scored("Learn Python in 12 Minutes", "B", 70.0),
        ];
        let result = deduplicate(videos, 2, 0.85);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].candidate.channel, "A");
    }

    #[test]
    fn test_non_finite_scores_dropped() {
        let videos = vec![
            scored("Valid", "A", 50.0),
            scored("Broken", "B", f64::NAN),
        ];
        let result = deduplicate(videos, 2, 0.85);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].candidate.title, "Valid");
    }

    #[test]
    fn test_result_sorted_descending() {
        let videos = vec![
            scored("Alpha Unique Title", "A", 10.0),
            scored("Beta Something Else", "B", 90.0),
            scored("Gamma Another One Entirely", "C", 50.0),
        ];
        let result = deduplicate(videos, 2, 0.85);
        let scores: Vec<f64> = result.iter().map(|v| v.quality_score).collect();
        assert_eq!(scores, vec![90.0, 50.0, 10.0]);
    }
}
