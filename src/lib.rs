/// SkillWeave - Video Curation and Course Assembly
///
/// Turns a free-text topic into a structured course: expands the topic into
/// multiple search queries, scores the fetched candidates on a composite
/// quality metric, deduplicates and diversifies the pool, keeps the top
/// slice, and arranges it into a pedagogically ordered module sequence.

pub mod config;
pub mod course;
pub mod curation;
pub mod error;
pub mod pipeline;
pub mod search;
pub mod store;

#[cfg(feature = "api")]
pub mod api;

// Re-export main types for easy access
pub use crate::config::{Config, ConfigBuilder};
pub use crate::course::{
    classify_complexity, classify_level, format_course_title, generate_module_structure,
    AssembledCourse, CourseModule, CourseOutcome, CourseVideo, Level, ModuleShell,
    TopicComplexity,
};
pub use crate::curation::{deduplicate, quality_score, select_top, ScoredVideo};
pub use crate::error::SkillWeaveError;
pub use crate::pipeline::{curate, generate_from_candidates, CourseGenerator};
pub use crate::search::{expand_queries, Candidate, SearchCacheManager, YouTubeSearchClient};
pub use crate::store::{CourseStore, JsonFileStore, SavedCourse};
