/// Topic result cache
///
/// Repeated requests for the same topic within the TTL window skip the
/// expensive multi-query fetch + score + dedup work. The cache is an
/// explicit, injected abstraction keyed by the raw topic string; each entry
/// is one JSON file holding the curated video list and its creation time.
use crate::curation::ScoredVideo;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Cached curation result for a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSearch {
    /// Creation timestamp (unix seconds)
    pub timestamp: u64,
    /// Raw topic the entry was generated for
    pub topic: String,
    /// Curated, score-sorted videos
    pub videos: Vec<ScoredVideo>,
}

/// Manages topic cache operations
#[derive(Clone)]
pub struct SearchCacheManager {
    /// Cache directory path
    cache_dir: PathBuf,
    /// Cache TTL in seconds
    ttl_seconds: u64,
}

impl SearchCacheManager {
    /// Create a new cache manager
    pub fn new(cache_dir: PathBuf, ttl_seconds: u64) -> Self {
        Self {
            cache_dir,
            ttl_seconds,
        }
    }

    /// Initialize cache directory
    pub async fn initialize(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        debug!("📁 Search cache directory initialized: {}", self.cache_dir.display());
        Ok(())
    }

    /// Stable cache key for a topic: readable prefix plus a hash to handle
    /// long topics and special characters
    pub fn cache_key(&self, topic: &str) -> String {
        let normalized = topic.trim().to_lowercase();
        let mut hasher = DefaultHasher::new();
        normalized.hash(&mut hasher);
        let hash = hasher.finish();

        format!(
            "{}_{:08x}",
            normalized.chars().take(30).collect::<String>().replace(' ', "_"),
            hash
        )
    }

    /// Load the cached result for a topic if present and unexpired.
    /// Expired entries are removed on read.
    pub async fn load(&self, topic: &str) -> Option<Vec<ScoredVideo>> {
        let cache_path = self.entry_path(topic);
        if !cache_path.exists() {
            debug!("Cache miss for topic: {}", topic);
            return None;
        }

        let content = match tokio::fs::read_to_string(&cache_path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read cache file {}: {}", cache_path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<CachedSearch>(&content) {
            Ok(cached) if self.is_valid(&cached) => {
                info!("📚 Cache hit: {} curated videos for \"{}\"", cached.videos.len(), topic);
                Some(cached.videos)
            }
            Ok(_) => {
                info!("⏰ Cache expired for topic: {}", topic);
                let _ = tokio::fs::remove_file(&cache_path).await;
                None
            }
            Err(e) => {
                warn!("Failed to parse cache file {}: {}", cache_path.display(), e);
                None
            }
        }
    }

    /// Save a curated result for a topic
    pub async fn save(&self, topic: &str, videos: &[ScoredVideo]) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        let cached = CachedSearch {
            timestamp: now,
            topic: topic.to_string(),
            videos: videos.to_vec(),
        };

        let cache_path = self.entry_path(topic);
        let json_content = serde_json::to_string_pretty(&cached)?;
        tokio::fs::write(&cache_path, json_content).await?;
        info!("💾 Cached {} curated videos for \"{}\"", videos.len(), topic);

        Ok(())
    }

    /// Force invalidate the entry for a topic
    pub async fn invalidate(&self, topic: &str) -> Result<bool> {
        let cache_path = self.entry_path(topic);
        if cache_path.exists() {
            tokio::fs::remove_file(&cache_path).await?;
            info!("🗑️ Invalidated cache for topic: {}", topic);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clean up expired cache files, returning how many were removed
    pub async fn cleanup_expired(&self) -> Result<usize> {
        let mut cleaned_count = 0;
        let mut entries = tokio::fs::read_dir(&self.cache_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Ok(content) = tokio::fs::read_to_string(&path).await {
                    if let Ok(cached) = serde_json::from_str::<CachedSearch>(&content) {
                        if !self.is_valid(&cached) && tokio::fs::remove_file(&path).await.is_ok() {
                            cleaned_count += 1;
                        }
                    }
                }
            }
        }

        if cleaned_count > 0 {
            info!("🧹 Cleaned up {} expired cache files", cleaned_count);
        }

        Ok(cleaned_count)
    }

    fn entry_path(&self, topic: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.cache_key(topic)))
    }

    /// Check whether an entry is still inside its TTL
    fn is_valid(&self, cached: &CachedSearch) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        now.saturating_sub(cached.timestamp) < self.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Candidate;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_videos() -> Vec<ScoredVideo> {
        vec![ScoredVideo {
            candidate: Candidate {
                id: "v1".to_string(),
                title: "Cached Video".to_string(),
                channel: "Chan".to_string(),
                published_at: Utc::now(),
                description: String::new(),
                thumbnail: String::new(),
                views: 100,
                likes: 10,
                comments: 1,
                duration: "PT10M".to_string(),
            },
            quality_score: 72.5,
        }]
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let manager = SearchCacheManager::new(dir.path().to_path_buf(), 3600);
        manager.initialize().await.unwrap();

        assert!(manager.load("rust").await.is_none());

        manager.save("rust", &sample_videos()).await.unwrap();
        let loaded = manager.load("rust").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].candidate.id, "v1");
    }

    #[tokio::test]
    async fn test_expired_entry_removed_on_read() {
        let dir = TempDir::new().unwrap();
        let manager = SearchCacheManager::new(dir.path().to_path_buf(), 0);
        manager.initialize().await.unwrap();

        manager.save("rust", &sample_videos()).await.unwrap();
        // TTL of zero means every entry is already expired
        assert!(manager.load("rust").await.is_none());
        assert!(!manager.invalidate("rust").await.unwrap());
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let dir = TempDir::new().unwrap();
        let manager = SearchCacheManager::new(dir.path().to_path_buf(), 0);
        manager.initialize().await.unwrap();
        manager.save("one topic", &sample_videos()).await.unwrap();
        manager.save("another topic", &sample_videos()).await.unwrap();

        let cleaned = manager.cleanup_expired().await.unwrap();
        assert_eq!(cleaned, 2);
    }

    #[test]
    fn test_cache_key_stability() {
        let manager = SearchCacheManager::new(PathBuf::from("/tmp"), 3600);
        assert_eq!(manager.cache_key("Rust"), manager.cache_key("  rust "));
        assert_ne!(manager.cache_key("rust"), manager.cache_key("go"));
    }
}
