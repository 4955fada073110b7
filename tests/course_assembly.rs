//! End-to-end course assembly scenarios, exercising the pipeline from raw
//! candidates to assembled modules without any network access.

use chrono::{Duration, Utc};
use skillweave::{
    generate_from_candidates, Candidate, Config, CourseOutcome, SkillWeaveError,
};
use std::collections::HashSet;

fn candidate(id: &str, title: &str, channel: &str, views: u64) -> Candidate {
    Candidate {
        id: id.to_string(),
        title: title.to_string(),
        channel: channel.to_string(),
        published_at: Utc::now() - Duration::days(200),
        description: format!("A video about {}", title),
        thumbnail: "thumb.jpg".to_string(),
        views,
        likes: views / 25,
        comments: views / 200,
        duration: "PT12M".to_string(),
    }
}

/// 27 distinct tutorials, each from its own channel, with titles different
/// enough that none trip the near-duplicate similarity threshold
fn python_titles() -> Vec<&'static str> {
    vec![
        "Python Crash Course for Newcomers",
        "Understanding Generators and Iterators",
        "Web Scraping with BeautifulSoup Walkthrough",
        "Async IO Deep Dive in Production",
        "Build a REST API Hands-On Project",
        "Data Classes Explained Simply",
        "Type Hints and Static Checking Overview",
        "Packaging and Publishing to PyPI",
        "Decorators from First Principles",
        "Multiprocessing versus Threading Benchmarks",
        "Virtual Environments Done Right",
        "Testing with Pytest Fixtures Guide",
        "Django Models and Migrations Basics",
        "Flask Blueprints Real World Example",
        "Pandas Dataframe Optimization Techniques",
        "NumPy Broadcasting Masterclass",
        "Context Managers and the With Statement",
        "Logging Configuration Best Practices",
        "Regular Expressions Cookbook Session",
        "CLI Tools with Argparse Demo",
        "Memory Profiling Advanced Workshop",
        "Metaclasses and Descriptors Architecture",
        "SQLAlchemy ORM Getting Started",
        "Concurrency Patterns Case Study",
        "Error Handling Idioms Collection",
        "File IO and Pathlib Introduction",
        "Dataclass Serialization Recipes",
    ]
}

#[test]
fn test_end_to_end_python_scenario() {
    let titles = python_titles();
    assert_eq!(titles.len(), 27);

    // 27 unique candidates plus 3 exact (title, channel) duplicate copies
    let mut candidates: Vec<Candidate> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            candidate(
                &format!("vid{}", i),
                title,
                &format!("Channel {}", i),
                5_000 + i as u64 * 100,
            )
        })
        .collect();
    for i in 0..3 {
        let mut dup = candidates[i].clone();
        dup.id = format!("dup{}", i);
        candidates.push(dup);
    }
    assert_eq!(candidates.len(), 30);

    let config = Config::default().curation;
    let outcome = generate_from_candidates(&config, "Python", candidates, 12).unwrap();
    let course = match outcome {
        CourseOutcome::Course(course) => course,
        CourseOutcome::NoResults { message } => panic!("unexpected empty result: {}", message),
    };

    // max(12, ceil(27 * 0.2)) = 12 selected; Python is medium complexity
    // and 8 < 12 < 16, so three modules
    assert_eq!(course.video_count(), 12);
    assert_eq!(course.modules.len(), 3);

    // Every selected video appears in exactly one module
    let ids: Vec<&str> = course
        .modules
        .iter()
        .flat_map(|m| m.videos.iter().map(|v| v.video.candidate.id.as_str()))
        .collect();
    let unique: HashSet<&&str> = ids.iter().collect();
    assert_eq!(ids.len(), 12);
    assert_eq!(unique.len(), 12);

    // Order indices are 1-based, sequential across the course
    let indices: Vec<usize> = course
        .modules
        .iter()
        .flat_map(|m| m.videos.iter().map(|v| v.order_index))
        .collect();
    assert_eq!(indices, (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_simple_topic_gets_compact_course() {
    let config = Config::default().curation;
    let candidates: Vec<Candidate> = (0..6)
        .map(|i| {
            candidate(
                &format!("v{}", i),
                [
                    "Spreadsheet Formulas from Scratch",
                    "Pivot Tables Hands-On Demo",
                    "Chart Design Walkthrough Session",
                    "Conditional Formatting Explained",
                    "Macro Recording Introduction",
                    "Lookup Functions Advanced Patterns",
                ][i],
                &format!("Channel {}", i),
                1_000,
            )
        })
        .collect();

    let outcome = generate_from_candidates(&config, "Excel", candidates, 6).unwrap();
    let course = outcome.as_course().expect("course expected").clone();

    assert_eq!(course.modules.len(), 2);
    assert_eq!(course.modules[0].title, "Getting Started");
    assert_eq!(course.modules[1].title, "Practical Application");
    assert_eq!(course.video_count(), 6);
}

#[test]
fn test_complex_topic_with_many_videos_gets_four_modules() {
    let config = Config::default().curation;
    let subjects = [
        "Gradient Descent", "Backpropagation", "Feature Engineering", "Model Evaluation",
        "Random Forests", "Support Vectors", "Clustering Methods", "Dimensionality Reduction",
        "Transfer Learning", "Regularization", "Hyperparameter Search", "Cross Validation",
        "Attention Mechanisms", "Embedding Spaces", "Data Augmentation", "Batch Normalization",
        "Loss Landscapes", "Ensemble Stacking", "Quantization Tricks", "Inference Serving",
    ];
    let candidates: Vec<Candidate> = subjects
        .iter()
        .enumerate()
        .map(|(i, s)| {
            candidate(
                &format!("ml{}", i),
                &format!("{} Walkthrough Episode", s),
                &format!("Lab {}", i),
                20_000,
            )
        })
        .collect();

    let outcome =
        generate_from_candidates(&config, "machine learning", candidates, 20).unwrap();
    let course = outcome.as_course().expect("course expected").clone();

    assert_eq!(course.title, "Machine Learning");
    assert_eq!(course.modules.len(), 4);
    assert_eq!(course.video_count(), 20);
}

#[test]
fn test_empty_topic_rejected_before_any_work() {
    let config = Config::default().curation;
    let err = generate_from_candidates(&config, "", Vec::new(), 12).unwrap_err();
    assert!(matches!(err, SkillWeaveError::InvalidQuery));
    assert_eq!(err.code(), "INVALID_QUERY");
    assert_eq!(err.status(), 400);
}

#[test]
fn test_candidates_without_engagement_still_assemble() {
    let config = Config::default().curation;
    let candidates: Vec<Candidate> = (0..10)
        .map(|i| {
            let mut c = candidate(
                &format!("z{}", i),
                [
                    "Knife Skills Fundamentals Lesson",
                    "Stocks and Sauces Deep Dive",
                    "Bread Proofing Case Study",
                    "Plating Composition Workshop",
                    "Fermentation Basics Overview",
                    "Sous Vide Temperature Charts",
                    "Pastry Lamination Walkthrough",
                    "Seasoning Balance Masterclass",
                    "Grill Maintenance Checklist",
                    "Menu Costing Spreadsheet Demo",
                ][i],
                &format!("Kitchen {}", i),
                0,
            );
            c.likes = 0;
            c.comments = 0;
            c
        })
        .collect();

    let outcome = generate_from_candidates(&config, "cooking", candidates, 10).unwrap();
    let course = outcome.as_course().expect("course expected").clone();

    // "cooking" is a simple topic
    assert_eq!(course.modules.len(), 2);
    assert_eq!(course.video_count(), 10);
    for module in &course.modules {
        for video in &module.videos {
            assert!(video.video.quality_score.is_finite());
        }
    }
}
