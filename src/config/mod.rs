mod app_config;

pub use app_config::{
    AppConfig, CacheBackend, CacheSettings, LogFormat, LoggingConfig, SourceSettings,
};
