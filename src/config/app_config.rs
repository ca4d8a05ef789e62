use serde::Deserialize;

use crate::domain::cache::{FILE_CACHE_DEFAULTS, MEMORY_CACHE_DEFAULTS};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub cache: CacheSettings,
    pub sources: SourceSettings,
    pub logging: LoggingConfig,
}

/// Cache backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    File,
    #[default]
    Tiered,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    /// Directory for the file-backed tier
    pub dir: String,
    /// In-memory tier capacity; the sweep evicts oldest-stored-first beyond it
    pub max_entries: u64,
    pub sweep_interval_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            dir: FILE_CACHE_DEFAULTS.cache_dir.to_string(),
            max_entries: MEMORY_CACHE_DEFAULTS.max_entries,
            sweep_interval_secs: MEMORY_CACHE_DEFAULTS.sweep_interval_ms / 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Override for the safety feed base URL (tests, mirrors)
    pub safety_feed_base_url: Option<String>,
    /// Override for the country-reference API base URL
    pub country_api_base_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            safety_feed_base_url: None,
            country_api_base_url: None,
            request_timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TRAVEL_INFO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
