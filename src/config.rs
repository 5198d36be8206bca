//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, logging, and default paths. `AppConfig` is the root
//! configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Analysis responses are computed per request and must never be served from
/// an intermediary cache.
pub const CACHE_CONTROL_API: &str = "no-store";

/// Health responses must always reflect the current process, never a cache.
pub const CACHE_CONTROL_HEALTH: &str = "no-cache";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Log target prefix for this service (the crate name as seen by `tracing`)
pub const SERVICE_LOG_TARGET: &str = "insight_agent";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=debug,axum=info", SERVICE_LOG_TARGET);

/// Log format values accepted by `logging.format`
pub const LOG_FORMAT_TEXT: &str = "text";
pub const LOG_FORMAT_JSON: &str = "json";

/// Environment variable overriding the listening port
pub const ENV_PORT: &str = "PORT";

/// Default listening address
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// Resolve the configured host and port into a bindable socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port: {}:{}",
                    self.host, self.port
                ))
            })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        LOG_FORMAT_TEXT.to_string()
    }

    /// Whether structured JSON log output is requested.
    pub fn is_json(&self) -> bool {
        self.format == LOG_FORMAT_JSON
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: logging format must be a supported value
        if config.logging.format != LOG_FORMAT_TEXT && config.logging.format != LOG_FORMAT_JSON {
            return Err(ConfigError::Validation(format!(
                "Unsupported logging.format '{}': expected \"{}\" or \"{}\"",
                config.logging.format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// The service runs with zero configuration out of the box; a config file
    /// that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
