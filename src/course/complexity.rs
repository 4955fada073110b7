//! Topic complexity classification
//!
//! A coarse label driving how many modules the course gets. Complex topics
//! are matched before simple ones; anything unmatched defaults to medium.

use serde::{Deserialize, Serialize};

/// Coarse complexity of the requested subject
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TopicComplexity {
    Simple,
    Medium,
    Complex,
}

const COMPLEX_TOPICS: [&str; 12] = [
    "machine learning",
    "artificial intelligence",
    "blockchain",
    "quantum computing",
    "cybersecurity",
    "data science",
    "deep learning",
    "neural networks",
    "cryptocurrency",
    "advanced programming",
    "system design",
    "devops",
];

const SIMPLE_TOPICS: [&str; 10] = [
    "excel",
    "powerpoint",
    "email",
    "social media",
    "basic photography",
    "cooking",
    "fitness",
    "meditation",
    "time management",
    "productivity",
];

/// Classify a topic via case-insensitive substring containment
pub fn classify_complexity(topic: &str) -> TopicComplexity {
    let topic_lower = topic.to_lowercase();

    if COMPLEX_TOPICS.iter().any(|t| topic_lower.contains(t)) {
        return TopicComplexity::Complex;
    }

    if SIMPLE_TOPICS.iter().any(|t| topic_lower.contains(t)) {
        return TopicComplexity::Simple;
    }

    TopicComplexity::Medium
}
