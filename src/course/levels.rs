//! Learning-level classification
//!
//! Each selected video is tagged with exactly one level by scanning its
//! lowercase title+description against three keyword families. Hands-on
//! content without beginner markers is treated as practical; advanced
//! markers win over beginner ones; anything ambiguous lands in intermediate.

use serde::{Deserialize, Serialize};

/// Inferred difficulty level, total and mutually exclusive per video
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Practical,
}

const BEGINNER_KEYWORDS: [&str; 12] = [
    "beginner",
    "basic",
    "intro",
    "introduction",
    "start",
    "getting started",
    "fundamentals",
    "basics",
    "learn",
    "tutorial",
    "explained",
    "simple",
];

const ADVANCED_KEYWORDS: [&str; 11] = [
    "advanced",
    "expert",
    "master",
    "professional",
    "deep dive",
    "complex",
    "sophisticated",
    "enterprise",
    "production",
    "optimization",
    "architecture",
];

const PRACTICAL_KEYWORDS: [&str; 11] = [
    "project",
    "build",
    "create",
    "example",
    "case study",
    "real world",
    "hands on",
    "practice",
    "implementation",
    "demo",
    "walkthrough",
];

/// Classify a video's learning level from its title and description
pub fn classify_level(title: &str, description: &str) -> Level {
    let content = format!("{} {}", title.to_lowercase(), description.to_lowercase());

    let has_beginner = BEGINNER_KEYWORDS.iter().any(|k| content.contains(k));
    let has_advanced = ADVANCED_KEYWORDS.iter().any(|k| content.contains(k));
    let has_practical = PRACTICAL_KEYWORDS.iter().any(|k| content.contains(k));

    if has_practical && !has_beginner {
        Level::Practical
    } else if has_advanced {
        Level::Advanced
    } else if has_beginner {
        Level::Beginner
    } else {
        Level::Intermediate
    }
}
