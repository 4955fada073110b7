//! Adaptive module structure
//!
//! A deterministic decision table: simple topics and small selections get a
//! compact two-module course, complex topics with plenty of material get
//! four modules, everything else gets three.

use super::complexity::{classify_complexity, TopicComplexity};
use super::ModuleShell;

/// Generate ordered module shells for a topic and selected-video count
pub fn generate_module_structure(topic: &str, video_count: usize) -> Vec<ModuleShell> {
    let complexity = classify_complexity(topic);

    if complexity == TopicComplexity::Simple || video_count <= 8 {
        return vec![
            ModuleShell::new("Getting Started", "Essential basics and fundamentals", 0),
            ModuleShell::new("Practical Application", "Putting knowledge into practice", 1),
        ];
    }

    if complexity == TopicComplexity::Complex && video_count >= 16 {
        return vec![
            ModuleShell::new("Foundation", "Prerequisites and basic concepts", 0),
            ModuleShell::new("Core Principles", "Main theories and methodologies", 1),
            ModuleShell::new("Advanced Techniques", "Sophisticated applications and methods", 2),
            ModuleShell::new("Real-World Implementation", "Case studies and practical projects", 3),
        ];
    }

    vec![
        ModuleShell::new("Fundamentals", "Core concepts and basics", 0),
        ModuleShell::new("Intermediate Concepts", "Building on the fundamentals", 1),
        ModuleShell::new("Advanced Applications", "Real-world applications and mastery", 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(shells: &[ModuleShell]) -> Vec<&str> {
        shells.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_simple_topic_gets_two_modules() {
        let shells = generate_module_structure("Excel", 6);
        assert_eq!(shells.len(), 2);
        assert_eq!(titles(&shells), vec!["Getting Started", "Practical Application"]);
    }

    #[test]
    fn test_small_selection_gets_two_modules_regardless_of_topic() {
        let shells = generate_module_structure("Machine Learning", 8);
        assert_eq!(shells.len(), 2);
    }

    #[test]
    fn test_complex_topic_with_many_videos_gets_four_modules() {
        let shells = generate_module_structure("Machine Learning", 20);
        assert_eq!(shells.len(), 4);
        assert_eq!(
            titles(&shells),
            vec![
                "Foundation",
                "Core Principles",
                "Advanced Techniques",
                "Real-World Implementation"
            ]
        );
    }

    #[test]
    fn test_medium_topic_gets_three_modules() {
        let shells = generate_module_structure("JavaScript", 12);
        assert_eq!(shells.len(), 3);
        assert_eq!(
            titles(&shells),
            vec!["Fundamentals", "Intermediate Concepts", "Advanced Applications"]
        );
    }

    #[test]
    fn test_order_indices_contiguous() {
        for (topic, count) in [("Excel", 5), ("JavaScript", 12), ("Machine Learning", 20)] {
            let shells = generate_module_structure(topic, count);
            for (i, shell) in shells.iter().enumerate() {
                assert_eq!(shell.order_index, i);
            }
        }
    }
}
