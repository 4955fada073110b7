//! API data models

use serde::{Deserialize, Serialize};

/// Course generation request body
#[derive(Debug, Deserialize)]
pub struct GenerateCourseRequest {
    pub topic: Option<String>,
    /// Floor on selected video count; defaults from configuration
    pub max_results: Option<usize>,
}

/// Machine-readable error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl ErrorResponse {
    pub fn new(message: String, code: &str) -> Self {
        Self {
            error: message,
            code: code.to_string(),
            retry_after: None,
        }
    }
}
