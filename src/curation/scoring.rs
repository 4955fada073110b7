//! Composite quality scoring
//!
//! Each candidate gets a deterministic 0-100 score built from five signals:
//! engagement (up to 40 points), topical relevance (30), duration fitness
//! (10), freshness (10), and channel authority (10). All sub-scores operate
//! only on fields already present on the normalized candidate.

use crate::search::Candidate;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Channel name substrings that indicate an authoritative source
const AUTHORITY_INDICATORS: [&str; 10] = [
    "university",
    "academy",
    "institute",
    "school",
    "education",
    "official",
    "verified",
    "expert",
    "pro",
    "master",
];

/// Discount applied to the non-engagement components when view counts are
/// too low for engagement ratios to mean anything
const LOW_ENGAGEMENT_DISCOUNT: f64 = 0.8;

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid duration regex")
    })
}

/// Parse an ISO-8601-like duration code ("PT1H4M13S") to seconds.
/// Unparseable input counts as zero-length.
pub fn parse_duration_seconds(duration: &str) -> u64 {
    let Some(caps) = duration_regex().captures(duration) else {
        return 0;
    };

    let component = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}

/// Relevance of a candidate to the topic: fraction of topic tokens found as
/// substrings in the title (weight 0.8) and description (weight 0.2),
/// scaled to 0-100. Empty topic scores 0.
fn relevance_score(title: &str, description: &str, topic: &str) -> f64 {
    let title = title.to_lowercase();
    let description = description.to_lowercase();
    let topic = topic.to_lowercase();

    let tokens: Vec<&str> = topic.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut title_matches = 0usize;
    let mut desc_matches = 0usize;
    for token in &tokens {
        if title.contains(token) {
            title_matches += 1;
        }
        if description.contains(token) {
            desc_matches += 1;
        }
    }

    let title_score = title_matches as f64 / tokens.len() as f64;
    let desc_score = desc_matches as f64 / tokens.len() as f64;

    ((title_score * 0.8 + desc_score * 0.2) * 100.0).clamp(0.0, 100.0)
}

/// Duration fitness: 5-20 minute videos are ideal for a course segment
fn duration_score(duration: &str) -> f64 {
    let minutes = parse_duration_seconds(duration) as f64 / 60.0;

    if (5.0..=20.0).contains(&minutes) {
        100.0
    } else if (3.0..=30.0).contains(&minutes) {
        80.0
    } else if (1.0..=45.0).contains(&minutes) {
        60.0
    } else {
        30.0
    }
}

/// Freshness: content that has been out for 30 days to a year is both
/// recent and proven; brand-new uploads are unproven
fn freshness_score(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - published_at).num_days();

    if days <= 30 {
        70.0
    } else if days <= 365 {
        100.0
    } else if days <= 1095 {
        80.0
    } else {
        50.0
    }
}

/// Channel authority from naming patterns
fn channel_authority_score(channel: &str) -> f64 {
    let channel_lower = channel.to_lowercase();
    let has_authority = AUTHORITY_INDICATORS
        .iter()
        .any(|indicator| channel_lower.contains(indicator));

    if has_authority {
        100.0
    } else {
        50.0
    }
}

/// Engagement from like-to-view and (like+comment)-to-view ratios, each
/// capped at 100 and weighted 0.2, for at most 40 points. Returns `None`
/// below the view threshold, where the ratios are unreliable.
fn engagement_score(candidate: &Candidate, view_threshold: u64) -> Option<f64> {
    if candidate.views <= view_threshold {
        return None;
    }

    let views = candidate.views as f64;
    let likes = candidate.likes as f64;
    let comments = candidate.comments as f64;

    let like_ratio = ((likes / views) * 100.0).min(100.0);
    let engagement_rate = (((likes + comments) / views) * 100.0).min(100.0);

    Some((like_ratio * 0.2 + engagement_rate * 0.2).min(40.0))
}

/// Compute the composite quality score for a candidate against a topic.
///
/// Deterministic and pure apart from reading the supplied clock value.
/// Candidates without reliable engagement data fall back to the discounted
/// non-engagement components instead of dividing by a near-zero view count.
pub fn quality_score(
    candidate: &Candidate,
    topic: &str,
    view_threshold: u64,
    now: DateTime<Utc>,
) -> f64 {
    let relevance = relevance_score(&candidate.title, &candidate.description, topic) * 0.3;
    let duration = duration_score(&candidate.duration) * 0.1;
    let freshness = freshness_score(candidate.published_at, now) * 0.1;
    let authority = channel_authority_score(&candidate.channel) * 0.1;

    let base = relevance + duration + freshness + authority;

    let score = match engagement_score(candidate, view_threshold) {
        Some(engagement) => engagement + base,
        None => base * LOW_ENGAGEMENT_DISCOUNT,
    };

    score.clamp(0.0, 100.0)
}
