//! Course generation pipeline
//!
//! One logical unit of work per request: expand the topic into queries,
//! fetch candidates concurrently, score, deduplicate, select the top slice,
//! and assemble the module sequence. A failed query variant is skipped;
//! quota exhaustion is terminal; an empty candidate pool is an outcome, not
//! an error.

use crate::config::{Config, CurationConfig};
use crate::course::{assemble_course, CourseOutcome};
use crate::curation::{deduplicate, quality_score, select_top, ScoredVideo};
use crate::error::{Result, SkillWeaveError};
use crate::search::{expand_queries, Candidate, SearchCacheManager, YouTubeSearchClient};
use chrono::Utc;
use tracing::{info, warn};

/// Orchestrates fetch, curation, and assembly for one topic at a time
pub struct CourseGenerator {
    config: Config,
    client: YouTubeSearchClient,
    cache: Option<SearchCacheManager>,
}

impl CourseGenerator {
    /// Create a generator, initializing the result cache when enabled
    pub async fn new(config: Config) -> Result<Self> {
        let client = YouTubeSearchClient::new(&config.search)?;

        let cache = if config.cache.enabled {
            let manager =
                SearchCacheManager::new(config.cache.cache_dir.clone(), config.cache.ttl_seconds);
            manager
                .initialize()
                .await
                .map_err(|e| SkillWeaveError::Configuration(e.to_string()))?;
            Some(manager)
        } else {
            None
        };

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Generate a course for a free-text topic.
    ///
    /// `min_results` overrides the configured floor on selected videos when
    /// provided.
    pub async fn generate(&self, topic: &str, min_results: Option<usize>) -> Result<CourseOutcome> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SkillWeaveError::InvalidQuery);
        }

        let min_results = min_results.unwrap_or(self.config.curation.min_results);

        let curated = match self.load_cached(topic).await {
            Some(curated) => curated,
            None => {
                let curated = self.fetch_and_curate(topic).await?;
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.save(topic, &curated).await {
                        warn!("Failed to cache curated results for \"{}\": {}", topic, e);
                    }
                }
                curated
            }
        };

        if curated.is_empty() {
            info!("No usable candidates for topic: {}", topic);
            return Ok(CourseOutcome::no_results_for(topic));
        }

        let selected = select_top(curated, min_results, self.config.curation.selection_ratio);
        info!("✅ Selected {} high-quality videos for \"{}\"", selected.len(), topic);

        Ok(CourseOutcome::Course(assemble_course(topic, selected)))
    }

    async fn load_cached(&self, topic: &str) -> Option<Vec<ScoredVideo>> {
        match &self.cache {
            Some(cache) => cache.load(topic).await,
            None => None,
        }
    }

    /// Fetch candidates across all expanded queries and curate them
    async fn fetch_and_curate(&self, topic: &str) -> Result<Vec<ScoredVideo>> {
        let queries = expand_queries(topic);
        let fetches = queries.iter().map(|q| self.client.fetch_candidates(q));
        let results = futures::future::join_all(fetches).await;

        let mut candidates: Vec<Candidate> = Vec::new();
        for (query, result) in queries.iter().zip(results) {
            match result {
                Ok(batch) => candidates.extend(batch),
                // Quota exhaustion poisons every remaining query too
                Err(err @ SkillWeaveError::QuotaExceeded { .. }) => return Err(err),
                Err(e) => {
                    warn!("Skipping failed query \"{}\": {}", query, e);
                }
            }
        }

        info!("🔎 Collected {} raw candidates for \"{}\"", candidates.len(), topic);
        Ok(curate(&self.config.curation, topic, candidates))
    }
}

/// Score and deduplicate already-fetched candidates.
///
/// Exposed separately so the surrounding application can hand in candidate
/// records it already holds. A candidate whose score comes out non-finite is
/// scored 0 with a diagnostic instead of aborting the batch.
pub fn curate(
    config: &CurationConfig,
    topic: &str,
    candidates: Vec<Candidate>,
) -> Vec<ScoredVideo> {
    let now = Utc::now();

    let scored: Vec<ScoredVideo> = candidates
        .into_iter()
        .map(|candidate| {
            let mut score =
                quality_score(&candidate, topic, config.engagement_view_threshold, now);
            if !score.is_finite() {
                warn!("Scoring produced a non-finite value for {}, using 0", candidate.id);
                score = 0.0;
            }
            ScoredVideo {
                candidate,
                quality_score: score,
            }
        })
        .collect();

    deduplicate(scored, config.max_per_channel, config.similarity_threshold)
}

/// Curate and assemble in one step from already-fetched candidates
pub fn generate_from_candidates(
    config: &CurationConfig,
    topic: &str,
    candidates: Vec<Candidate>,
    min_results: usize,
) -> Result<CourseOutcome> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(SkillWeaveError::InvalidQuery);
    }

    let curated = curate(config, topic, candidates);
    if curated.is_empty() {
        return Ok(CourseOutcome::no_results_for(topic));
    }

    let selected = select_top(curated, min_results, config.selection_ratio);
    Ok(CourseOutcome::Course(assemble_course(topic, selected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn candidate(id: &str, title: &str, channel: &str, views: u64) -> Candidate {
        Candidate {
            id: id.to_string(),
            title: title.to_string(),
            channel: channel.to_string(),
            published_at: Utc::now() - Duration::days(120),
            description: String::new(),
            thumbnail: String::new(),
            views,
            likes: views / 20,
            comments: views / 100,
            duration: "PT12M".to_string(),
        }
    }

    #[test]
    fn test_empty_topic_rejected() {
        let config = CurationConfig {
            max_per_channel: 2,
            similarity_threshold: 0.85,
            selection_ratio: 0.2,
            min_results: 12,
            engagement_view_threshold: 100,
        };
        assert!(matches!(
            generate_from_candidates(&config, "   ", Vec::new(), 12),
            Err(SkillWeaveError::InvalidQuery)
        ));
    }

    #[test]
    fn test_no_candidates_is_outcome_not_error() {
        let config = Config::default().curation;
        let outcome = generate_from_candidates(&config, "python", Vec::new(), 12).unwrap();
        assert!(matches!(outcome, CourseOutcome::NoResults { .. }));
    }

    #[test]
    fn test_curation_scores_and_dedups() {
        let config = Config::default().curation;
        let candidates = vec![
            candidate("a", "Python Tutorial for Everyone", "Chan A", 10_000),
            candidate("b", "Python Tutorial For Everyone", "Chan A", 500), // exact dup key
            candidate("c", "Completely Different Walkthrough", "Chan B", 2_000),
        ];

        let curated = curate(&config, "python", candidates);
        assert_eq!(curated.len(), 2);
        assert!(curated[0].quality_score >= curated[1].quality_score);
        assert!(curated.iter().all(|v| v.quality_score.is_finite()));
    }
}
