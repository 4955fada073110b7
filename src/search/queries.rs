//! Query expansion
//!
//! A single topic phrasing misses a lot of good material; widening to a
//! fixed set of differently-angled queries lets the scorer discriminate
//! over a broader pool.

/// Angle phrases appended to the topic, one query per phrase
const QUERY_ANGLES: [&str; 5] = [
    "tutorial complete guide",
    "explained simply beginner",
    "step by step guide",
    "best practices tips",
    "real world example practical",
];

/// Expand a topic into multiple search query variants.
///
/// Pure function; always produces output for non-empty input. Each variant
/// contains the original topic verbatim.
pub fn expand_queries(topic: &str) -> Vec<String> {
    QUERY_ANGLES
        .iter()
        .map(|angle| format!("{} {}", topic, angle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_expansion_count_and_distinctness() {
        let queries = expand_queries("rust programming");
        assert_eq!(queries.len(), 5);

        let unique: HashSet<&String> = queries.iter().collect();
        assert_eq!(unique.len(), queries.len());
    }

    #[test]
    fn test_every_variant_contains_topic() {
        let topic = "Machine Learning";
        for query in expand_queries(topic) {
            assert!(!query.is_empty());
            assert!(query.to_lowercase().contains(&topic.to_lowercase()));
        }
    }
}
