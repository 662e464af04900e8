use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub server: ServerSettings,
    #[validate(nested)]
    pub source: SourceSettings,
    #[validate(nested)]
    pub matching: MatchingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
    #[validate(range(min = 1))]
    pub workers: Option<usize>,
}

/// Where the job and worker collections are fetched from
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SourceSettings {
    #[validate(url)]
    pub jobs_url: String,
    #[validate(url)]
    pub workers_url: String,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    #[validate(range(min = 1))]
    pub max_results: usize,
}

fn default_timeout_secs() -> u64 { 30 }
fn default_max_redirects() -> usize { 10 }
fn default_max_results() -> usize { crate::core::DEFAULT_MAX_RESULTS }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        validated(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        validated(settings.try_deserialize()?)
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("source.jobs_url", "http://test.swipejobs.com/api/jobs")?
        .set_default("source.workers_url", "http://test.swipejobs.com/api/workers")?
        .set_default("matching.max_results", default_max_results() as u64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCHER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn validated(settings: Settings) -> Result<Settings, ConfigError> {
    settings
        .validate()
        .map_err(|errors| ConfigError::Message(format!("invalid settings: {}", errors)))?;
    Ok(settings)
}
