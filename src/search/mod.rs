/// Video search module
///
/// Talks to the YouTube Data API (search + batched details lookup), expands
/// a topic into multiple query angles, and normalizes the loosely-shaped API
/// payloads into `Candidate` records exactly once at this boundary so the
/// rest of the pipeline can assume required fields are present.

pub mod cache;
pub mod client;
pub mod queries;

// Re-export main types
pub use cache::SearchCacheManager;
pub use client::YouTubeSearchClient;
pub use queries::expand_queries;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder thumbnail when the API returns none
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/320x180";

/// Raw search hit from the search endpoint (id only; details come from the
/// batched videos lookup)
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchItem {
    pub id: Option<RawSearchId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Raw video record from the videos endpoint, fields optional throughout
/// because the API omits them freely
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoItem {
    pub id: Option<String>,
    pub snippet: Option<RawSnippet>,
    pub statistics: Option<RawStatistics>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<RawContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSnippet {
    pub title: Option<String>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<RawThumbnails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnails {
    pub default: Option<RawThumbnail>,
    pub medium: Option<RawThumbnail>,
    pub high: Option<RawThumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnail {
    pub url: Option<String>,
}

/// Engagement counters arrive as strings from the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContentDetails {
    pub duration: Option<String>,
}

/// A normalized candidate video, produced once at the fetch boundary.
/// Required fields are guaranteed present; counters default to 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Opaque source video id
    pub id: String,
    /// Video title (always non-empty)
    pub title: String,
    /// Source channel name (always non-empty)
    pub channel: String,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
    /// Description, may be empty
    pub description: String,
    /// Thumbnail URL after the fallback chain
    pub thumbnail: String,
    /// View count, 0 when absent or unparseable
    pub views: u64,
    /// Like count, 0 when absent or unparseable
    pub likes: u64,
    /// Comment count, 0 when absent or unparseable
    pub comments: u64,
    /// Encoded duration string, e.g. "PT12M30S"
    pub duration: String,
}

impl RawVideoItem {
    /// Normalize into a `Candidate`, filling defaults. Returns `None` when
    /// the record lacks an id, title, or channel name; such candidates are
    /// never scored or selected.
    pub fn normalize(self) -> Option<Candidate> {
        let id = self.id.filter(|s| !s.is_empty())?;
        let snippet = self.snippet?;
        let title = snippet
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())?;
        let channel = snippet
            .channel_title
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())?;

        let published_at = snippet
            .published_at
            .and_then(|ts| DateTime::parse_from_rfc3339(&ts).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        // Thumbnail fallback chain: medium, then high, then default
        let thumbnail = snippet
            .thumbnails
            .and_then(|t| {
                t.medium
                    .and_then(|v| v.url)
                    .or_else(|| t.high.and_then(|v| v.url))
                    .or_else(|| t.default.and_then(|v| v.url))
            })
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

        let stats = self.statistics;
        let parse_counter = |v: Option<&String>| -> u64 {
            v.and_then(|s| s.parse().ok()).unwrap_or(0)
        };
        let (views, likes, comments) = match &stats {
            Some(s) => (
                parse_counter(s.view_count.as_ref()),
                parse_counter(s.like_count.as_ref()),
                parse_counter(s.comment_count.as_ref()),
            ),
            None => (0, 0, 0),
        };

        let duration = self
            .content_details
            .and_then(|cd| cd.duration)
            .unwrap_or_else(|| "PT0M0S".to_string());

        Some(Candidate {
            id,
            title,
            channel,
            published_at,
            description: snippet.description.unwrap_or_default(),
            thumbnail,
            views,
            likes,
            comments,
            duration,
        })
    }
}
