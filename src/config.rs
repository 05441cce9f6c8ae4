//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::notebook::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// Maximum number of concurrent notebook sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds without a request before a session is ended
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_max_body_size() -> usize {
    256 * 1024 // 256 KB
}

fn default_max_sessions() -> usize {
    1000
}

fn default_session_idle_secs() -> u64 {
    3600 // 1 hour
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

    /// Load from default locations or environment
    ///
    /// A config file that exists but cannot be read or parsed is an error;
    /// defaults are only used when no file is found.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("moonlit").join("config.toml")),
            Some(PathBuf::from("/etc/moonlit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file of `paths`, or env-only defaults
    fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("MOONLIT_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("MOONLIT_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }
        if let Some(max) = lookup("MOONLIT_MAX_SESSIONS").and_then(|m| m.parse().ok()) {
            self.api.max_sessions = max;
        }
        if let Some(secs) = lookup("MOONLIT_SESSION_IDLE_SECS").and_then(|s| s.parse().ok()) {
            self.api.session_idle_secs = secs;
        }

        if let Some(level) = lookup("MOONLIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MOONLIT_LOG_FORMAT") {
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

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Moonlit Journal Configuration
#
# Environment variables override these settings:
# - MOONLIT_API_HOST
# - MOONLIT_API_PORT
# - MOONLIT_MAX_SESSIONS
# - MOONLIT_SESSION_IDLE_SECS
# - MOONLIT_LOG_LEVEL
# - MOONLIT_LOG_FORMAT

[api]
# API server host
host = "127.0.0.1"

# API server port
port = 8086

# Maximum request body size (bytes)
max_body_size = 262144

# Maximum number of concurrent notebook sessions
max_sessions = 1000

# Seconds without a request before a session and its entries are discarded
session_idle_secs = 3600

[theme]
# Every field is optional; omitted fields keep the Moonlit Fireplace copy.
title = "Moonlit Fireplace Journal"
icon = "🌙"
tagline = "A warm, lined notebook for quiet thoughts."
placeholder = "Write under the moonlight..."
# session_note = "Your notebook saves for this browser session."
# pages_heading = "📔 Notebook Pages"
# saved_message = "Saved — your entry has been added to the notebook."
# rejected_message = "Please write something before saving."
# empty_message = "Your notebook is empty — the night is ready for your first thought ✨"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
