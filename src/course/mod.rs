/// Course assembly module
///
/// Turns a curated, score-sorted set of videos into an ordered sequence of
/// learning modules: classifies the topic's complexity, generates module
/// shells, buckets each video by inferred difficulty level, and distributes
/// the videos across the shells.

pub mod complexity;
pub mod distribute;
pub mod levels;
pub mod structure;
pub mod title;

// Re-export main types and operations
pub use complexity::{classify_complexity, TopicComplexity};
pub use distribute::{assemble_course, distribute_videos};
pub use levels::{classify_level, Level};
pub use structure::generate_module_structure;
pub use title::format_course_title;

use crate::curation::ScoredVideo;
use serde::{Deserialize, Serialize};

/// An empty, ordered course section awaiting video assignment.
/// Created once per generation run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleShell {
    pub title: String,
    pub description: String,
    /// 0-based, strictly increasing, contiguous
    pub order_index: usize,
}

impl ModuleShell {
    pub fn new(title: &str, description: &str, order_index: usize) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            order_index,
        }
    }
}

/// A video placed in a course, with its final position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseVideo {
    #[serde(flatten)]
    pub video: ScoredVideo,
    /// Inferred difficulty level
    pub level: Level,
    /// 1-based, sequential and unique across the whole course
    pub order_index: usize,
}

/// A module shell populated with its assigned videos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseModule {
    pub title: String,
    pub description: String,
    pub order_index: usize,
    pub videos: Vec<CourseVideo>,
}

/// The assembled output of a generation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssembledCourse {
    /// Formatted course title
    pub title: String,
    pub description: String,
    /// Raw topic the course was generated from
    pub topic: String,
    pub modules: Vec<CourseModule>,
}

impl AssembledCourse {
    /// Total number of videos across all modules
    pub fn video_count(&self) -> usize {
        self.modules.iter().map(|m| m.videos.len()).sum()
    }
}

/// Outcome of a generation request. Zero usable candidates is a reportable
/// outcome with an explanatory message, distinct from a hard error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CourseOutcome {
    Course(AssembledCourse),
    NoResults { message: String },
}

impl CourseOutcome {
    pub fn no_results_for(topic: &str) -> Self {
        Self::NoResults {
            message: format!(
                "No videos found for \"{}\". Try adjusting your search terms.",
                topic
            ),
        }
    }

    pub fn as_course(&self) -> Option<&AssembledCourse> {
        match self {
            Self::Course(course) => Some(course),
            Self::NoResults { .. } => None,
        }
    }
}
