//! API request handlers

use crate::course::CourseOutcome;
use crate::error::{Result, SkillWeaveError};
use crate::pipeline::CourseGenerator;
use serde_json::Value;

use super::models::GenerateCourseRequest;

/// Handle health check requests
pub async fn health_check() -> Value {
    serde_json::json!({
        "status": "healthy",
        "service": "skillweave",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}

/// Handle course generation requests. Malformed topics are rejected before
/// any fetch work begins.
pub async fn generate_course(
    generator: &CourseGenerator,
    request: GenerateCourseRequest,
) -> Result<CourseOutcome> {
    let topic = request
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SkillWeaveError::InvalidQuery)?;

    generator.generate(topic, request.max_results).await
}
