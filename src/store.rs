//! Course persistence
//!
//! The pipeline computes courses; writing them is an external concern behind
//! the `CourseStore` trait. A storage failure after a successful assembly is
//! a distinct error class: callers must be able to tell "nothing was
//! produced" apart from "produced but not saved".

use crate::course::AssembledCourse;
use crate::curation::parse_duration_seconds;
use crate::error::{Result, SkillWeaveError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Persisted course record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub topic_name: String,
    pub description: String,
    pub created_by: String,
}

/// Persisted module record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub title: String,
    pub description: String,
    pub order_index: usize,
    pub course_id: String,
}

/// Persisted video record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub source_id: String,
    pub title: String,
    pub creator_name: String,
    pub module_id: String,
    pub order_index: usize,
    pub duration_seconds: u64,
}

/// Everything written for one course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCourse {
    pub course_id: String,
    pub course: CourseRecord,
    pub modules: Vec<ModuleRecord>,
    pub videos: Vec<VideoRecord>,
}

/// Storage seam for assembled courses
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn save_course(&self, course: &AssembledCourse, owner: &str) -> Result<SavedCourse>;
}

/// Flatten an assembled course into its persisted record shapes
pub fn to_records(course: &AssembledCourse, owner: &str, course_id: &str) -> SavedCourse {
    let course_record = CourseRecord {
        topic_name: course.title.clone(),
        description: course.description.clone(),
        created_by: owner.to_string(),
    };

    let mut modules = Vec::with_capacity(course.modules.len());
    let mut videos = Vec::new();

    for module in &course.modules {
        let module_id = format!("{}-m{}", course_id, module.order_index);
        modules.push(ModuleRecord {
            title: module.title.clone(),
            description: module.description.clone(),
            order_index: module.order_index,
            course_id: course_id.to_string(),
        });

        for video in &module.videos {
            videos.push(VideoRecord {
                source_id: video.video.candidate.id.clone(),
                title: video.video.candidate.title.clone(),
                creator_name: video.video.candidate.channel.clone(),
                module_id: module_id.clone(),
                order_index: video.order_index,
                duration_seconds: parse_duration_seconds(&video.video.candidate.duration),
            });
        }
    }

    SavedCourse {
        course_id: course_id.to_string(),
        course: course_record,
        modules,
        videos,
    }
}

/// Reference store writing one JSON document per course
#[derive(Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn course_id(course: &AssembledCourse) -> String {
        let slug: String = course
            .topic
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        format!("{}-{}", slug.trim_matches('-'), chrono::Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl CourseStore for JsonFileStore {
    async fn save_course(&self, course: &AssembledCourse, owner: &str) -> Result<SavedCourse> {
        let course_id = Self::course_id(course);
        let saved = to_records(course, owner, &course_id);

        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| SkillWeaveError::Persistence(e.to_string()))?;

        let path = self.base_dir.join(format!("{}.json", course_id));
        let content = serde_json::to_string_pretty(&saved)
            .map_err(|e| SkillWeaveError::Persistence(e.to_string()))?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| SkillWeaveError::Persistence(e.to_string()))?;

        info!("💾 Saved course {} to {}", course_id, path.display());
        Ok(saved)
    }
}
