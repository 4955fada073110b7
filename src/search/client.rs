//! YouTube Data API client
//!
//! Two-step fetch per query: the search endpoint returns hit ids, a batched
//! videos lookup returns snippet, statistics, and contentDetails for those
//! ids. The batch may return fewer records than requested ids; missing ones
//! are skipped silently. Quota exhaustion is detected from the error body
//! and surfaced with a retry-after hint.

use super::{Candidate, RawSearchItem, RawVideoItem};
use crate::config::SearchConfig;
use crate::error::{Result, SkillWeaveError};
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<RawSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    items: Option<Vec<RawVideoItem>>,
}

/// Client for the video search API
#[derive(Clone)]
pub struct YouTubeSearchClient {
    client: Client,
    api_key: String,
    search_endpoint: String,
    videos_endpoint: String,
    max_results_per_query: u32,
}

impl YouTubeSearchClient {
    /// Create a new client from search configuration
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SkillWeaveError::Configuration("missing YouTube API key".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| SkillWeaveError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            search_endpoint: config.search_endpoint.clone(),
            videos_endpoint: config.videos_endpoint.clone(),
            max_results_per_query: config.max_results_per_query,
        })
    }

    /// Fetch normalized candidates for one expanded query
    pub async fn fetch_candidates(&self, query: &str) -> Result<Vec<Candidate>> {
        let ids = self.search_video_ids(query).await?;
        if ids.is_empty() {
            debug!("No search hits for query: {}", query);
            return Ok(Vec::new());
        }

        let candidates = self.fetch_video_details(&ids).await?;
        info!(
            "🔎 Query \"{}\": {} hits, {} usable candidates",
            query,
            ids.len(),
            candidates.len()
        );
        Ok(candidates)
    }

    /// Search endpoint: query -> video ids
    async fn search_video_ids(&self, query: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}?part=snippet&type=video&q={}&maxResults={}&key={}&order=relevance&videoDuration=medium",
            self.search_endpoint,
            urlencoding::encode(query),
            self.max_results_per_query,
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| SkillWeaveError::Internal(format!("malformed search response: {}", e)))?;

        let ids = search
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.id.and_then(|id| id.video_id))
            .filter(|id| !id.is_empty())
            .collect();

        Ok(ids)
    }

    /// Batched videos endpoint: ids -> normalized candidates
    async fn fetch_video_details(&self, ids: &[String]) -> Result<Vec<Candidate>> {
        let url = format!(
            "{}?part=statistics,contentDetails,snippet&id={}&key={}",
            self.videos_endpoint,
            ids.join(","),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body));
        }

        let videos: VideosResponse = response
            .json()
            .await
            .map_err(|e| SkillWeaveError::Internal(format!("malformed videos response: {}", e)))?;

        let items = videos.items.unwrap_or_default();
        let requested = ids.len();
        let candidates: Vec<Candidate> = items.into_iter().filter_map(|v| v.normalize()).collect();

        if candidates.len() < requested {
            warn!(
                "Details lookup returned {} of {} requested records",
                candidates.len(),
                requested
            );
        }

        Ok(candidates)
    }
}

/// Map an API error response onto the service vocabulary. Quota errors are
/// recognized from the response body keywords the API uses.
fn classify_api_error(status: u16, body: &str) -> SkillWeaveError {
    let body_lower = body.to_lowercase();
    let quota_markers = ["quota", "exceeded", "ratelimit", "usage limit"];

    if status == 429 || quota_markers.iter().any(|m| body_lower.contains(m)) {
        return SkillWeaveError::QuotaExceeded {
            retry_after_secs: seconds_until_quota_reset(),
        };
    }

    if status >= 500 {
        return SkillWeaveError::Network(format!("upstream error {}: {}", status, body));
    }

    SkillWeaveError::Internal(format!("search API error {}: {}", status, body))
}

/// Daily quotas reset at midnight; report seconds until the next UTC midnight
fn seconds_until_quota_reset() -> u64 {
    let now = Utc::now();
    let next_midnight = (now + ChronoDuration::days(1))
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");

    (next_midnight - now.naive_utc()).num_seconds().max(0) as u64
}
