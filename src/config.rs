use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the SkillWeave curation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Video search API settings
    pub search: SearchConfig,

    /// Scoring and curation knobs
    pub curation: CurationConfig,

    /// Result cache settings
    pub cache: CacheConfig,

    /// Output and storage settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// YouTube Data API key
    pub api_key: Option<String>,

    /// Search endpoint base URL
    pub search_endpoint: String,

    /// Videos (statistics/contentDetails) endpoint base URL
    pub videos_endpoint: String,

    /// Maximum raw results requested per expanded query
    pub max_results_per_query: u32,

    /// HTTP request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationConfig {
    /// Maximum selections allowed per source channel
    pub max_per_channel: usize,

    /// Title similarity above which a candidate counts as a duplicate
    pub similarity_threshold: f64,

    /// Fraction of the curated pool kept by the Pareto cut
    pub selection_ratio: f64,

    /// Floor on the number of selected videos
    pub min_results: usize,

    /// View count below which engagement signals are treated as unreliable
    pub engagement_view_threshold: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable the topic result cache
    pub enabled: bool,

    /// Cache directory
    pub cache_dir: PathBuf,

    /// Cache TTL in seconds
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for persisted course records
    pub base_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_paths = [
            "skillweave.toml",
            "config/skillweave.toml",
            "~/.config/skillweave/config.toml",
            "/etc/skillweave/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        config.apply_env_overrides();
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to defaults plus environment variables
        Ok(Self::from_env())
    }

    /// Build configuration from defaults and environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("YOUTUBE_API_KEY") {
            self.search.api_key = Some(api_key);
        }

        if let Ok(max_results) = std::env::var("SKILLWEAVE_MAX_RESULTS_PER_QUERY") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results_per_query = n;
            }
        }

        if let Ok(cache_dir) = std::env::var("SKILLWEAVE_CACHE_DIR") {
            self.cache.cache_dir = PathBuf::from(cache_dir);
        }

        if let Ok(output_dir) = std::env::var("SKILLWEAVE_OUTPUT_DIR") {
            self.output.base_dir = PathBuf::from(output_dir);
        }

        if let Ok(log_level) = std::env::var("SKILLWEAVE_LOG_LEVEL") {
            self.output.log_level = log_level;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results_per_query == 0 {
            return Err(anyhow!("max_results_per_query must be greater than 0"));
        }

        if !(0.0..=1.0).contains(&self.curation.selection_ratio) {
            return Err(anyhow!("selection_ratio must be between 0.0 and 1.0"));
        }

        if !(0.0..=1.0).contains(&self.curation.similarity_threshold) {
            return Err(anyhow!("similarity_threshold must be between 0.0 and 1.0"));
        }

        if self.curation.max_per_channel == 0 {
            return Err(anyhow!("max_per_channel must be greater than 0"));
        }

        if self.cache.enabled && self.cache.ttl_seconds == 0 {
            return Err(anyhow!("cache ttl_seconds must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                api_key: None,
                search_endpoint: "https://www.googleapis.com/youtube/v3/search".to_string(),
                videos_endpoint: "https://www.googleapis.com/youtube/v3/videos".to_string(),
                max_results_per_query: 15,
                request_timeout_seconds: 30,
            },
            curation: CurationConfig {
                max_per_channel: 2,
                similarity_threshold: 0.85,
                selection_ratio: 0.2,
                min_results: 12,
                engagement_view_threshold: 100,
            },
            cache: CacheConfig {
                enabled: true,
                cache_dir: PathBuf::from("./cache"),
                ttl_seconds: 3600, // 1 hour
            },
            output: OutputConfig {
                base_dir: PathBuf::from("./output"),
                log_level: "info".to_string(),
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.config.search.api_key = Some(api_key);
        self
    }

    pub fn with_min_results(mut self, min_results: usize) -> Self {
        self.config.curation.min_results = min_results;
        self
    }

    pub fn with_max_per_channel(mut self, max_per_channel: usize) -> Self {
        self.config.curation.max_per_channel = max_per_channel;
        self
    }

    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.config.cache.cache_dir = dir;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output.base_dir = dir;
        self
    }

    pub fn enable_cache(mut self, enable: bool) -> Self {
        self.config.cache.enabled = enable;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
