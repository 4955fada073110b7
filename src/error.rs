//! Service error vocabulary
//!
//! Every failure that crosses the service boundary maps to a fixed
//! machine-readable code and an HTTP-style status. Recoverable conditions
//! inside the pipeline (a single failed search query, a candidate that
//! cannot be scored) are logged and skipped instead of surfacing here.

use thiserror::Error;

/// Errors surfaced by the course-generation service
#[derive(Debug, Error)]
pub enum SkillWeaveError {
    /// The request carried an empty or malformed topic
    #[error("topic must be a non-empty string")]
    InvalidQuery,

    /// A required credential or setting is missing
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream search API refused the request on quota grounds
    #[error("search quota exceeded, retry in {retry_after_secs}s")]
    QuotaExceeded { retry_after_secs: u64 },

    /// Could not reach the upstream search service at all
    #[error("network failure: {0}")]
    Network(String),

    /// The course was assembled but could not be written
    #[error("failed to persist course: {0}")]
    Persistence(String),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl SkillWeaveError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuery => "INVALID_QUERY",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP-style status for the service boundary
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidQuery => 400,
            Self::QuotaExceeded { .. } => 429,
            Self::Network(_) => 503,
            Self::Configuration(_) | Self::Persistence(_) | Self::Internal(_) => 500,
        }
    }

    /// Retry hint in seconds, present only for quota errors
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::QuotaExceeded { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SkillWeaveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Network(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

/// Convenience alias used throughout the pipeline
pub type Result<T> = std::result::Result<T, SkillWeaveError>;
