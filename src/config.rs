//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::service::HttpBackendConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Mock API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Hero service client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:8082/api".to_string()
}

fn default_search_debounce() -> u64 {
    300
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_ms: None,
            search_debounce_ms: default_search_debounce(),
        }
    }
}

impl ClientConfig {
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.api_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level. Format is `json` or
    /// anything else for human-readable output.
    pub fn init(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("heroes={},tower_http=info", self.level).into());

        let registry = tracing_subscriber::registry().with(filter);
        if self.format == "json" {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Logging is not installed yet at this point, so what happened is
    /// returned as notes for the caller to log after `LoggingConfig::init`.
    pub fn load_default() -> (Self, Vec<ConfigNote>) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("heroes").join("config.toml")),
            Some(PathBuf::from("./heroes.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing path that parses, falling back to defaults
    pub fn load_first(paths: &[PathBuf]) -> (Self, Vec<ConfigNote>) {
        let mut notes = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    notes.push(ConfigNote::Loaded(path.clone()));
                    return (config, notes);
                }
                Err(error) => notes.push(ConfigNote::Failed(error)),
            }
        }

        notes.push(ConfigNote::Defaults);
        (Self::from_env(), notes)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HEROES_API_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("HEROES_API_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(url) = std::env::var("HEROES_API_URL") {
            self.client.api_url = url;
        }

        if let Ok(level) = std::env::var("HEROES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HEROES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Outcome of one step of [`Config::load_default`]
#[derive(Debug)]
pub enum ConfigNote {
    Loaded(PathBuf),
    Failed(ConfigError),
    Defaults,
}

impl ConfigNote {
    /// Emit the note; call once the subscriber is installed
    pub fn log(&self) {
        match self {
            ConfigNote::Loaded(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigNote::Failed(e) => tracing::warn!("Skipping config: {}", e),
            ConfigNote::Defaults => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Heroes Configuration
#
# Environment variables override these settings:
# - HEROES_API_HOST
# - HEROES_API_PORT
# - HEROES_API_URL
# - HEROES_LOG_LEVEL
# - HEROES_LOG_FORMAT

[server]
# Mock API server host
host = "0.0.0.0"

# Mock API server port
port = 8082

[client]
# Base URL of the heroes API
api_url = "http://localhost:8082/api"

# Request timeout in milliseconds (unset: wait indefinitely)
# request_timeout_ms = 5000

# Delay before a typeahead search hits the API
search_debounce_ms = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
