//! Configuration file loading with precedence handling.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::pack::{
    LimitsError, PackLimits, DEFAULT_CHUNK_LIMIT, DEFAULT_FIELD_LIMIT,
    DEFAULT_MAX_FIELDS_PER_PAGE, DEFAULT_PAGE_LIMIT,
};
use crate::state::DEFAULT_SESSION_TIMEOUT;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything not specified falls back to the
/// built-in defaults. Corresponds to `~/.config/cardfold/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fields allowed on one page.
    #[serde(default)]
    pub max_fields_per_page: Option<usize>,

    /// Width budget for one field value, in chars.
    #[serde(default)]
    pub field_limit: Option<usize>,

    /// Width budget for one page, in chars.
    #[serde(default)]
    pub page_limit: Option<usize>,

    /// Width budget for one chunked plain-text page, in chars.
    #[serde(default)]
    pub chunk_limit: Option<usize>,

    /// Seconds of inactivity before a session expires.
    #[serde(default)]
    pub session_timeout_secs: Option<u64>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Fields allowed on one page.
    pub max_fields_per_page: usize,
    /// Width budget for one field value, in chars.
    pub field_limit: usize,
    /// Width budget for one page, in chars.
    pub page_limit: usize,
    /// Width budget for one chunked plain-text page, in chars.
    pub chunk_limit: usize,
    /// Seconds of inactivity before a session expires.
    pub session_timeout_secs: u64,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_fields_per_page: DEFAULT_MAX_FIELDS_PER_PAGE,
            field_limit: DEFAULT_FIELD_LIMIT,
            page_limit: DEFAULT_PAGE_LIMIT,
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            session_timeout_secs: DEFAULT_SESSION_TIMEOUT.as_secs(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Packing limits from the resolved values.
    ///
    /// # Errors
    ///
    /// Returns `LimitsError` when a configured limit is zero.
    pub fn pack_limits(&self) -> Result<PackLimits, LimitsError> {
        PackLimits::new(self.max_fields_per_page, self.field_limit, self.page_limit)
    }

    /// Session inactivity timeout as a `Duration`.
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

/// Resolve the default log file path.
///
/// Returns `~/.local/state/cardfold/cardfold.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cardfold").join("cardfold.log")
    } else {
        PathBuf::from("cardfold.log")
    }
}

/// Resolve the default config file path.
///
/// Returns `~/.config/cardfold/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardfold").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// A missing file is not an error; `Ok(None)` means "use defaults".
///
/// # Errors
///
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (the CLI `--config` flag)
/// 2. `CARDFOLD_CONFIG` environment variable
/// 3. Default path `~/.config/cardfold/config.toml`
///
/// Missing config files are not errors; defaults apply.
///
/// # Errors
///
/// Returns an error only when a chosen file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CARDFOLD_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file into the defaults.
///
/// Each `Some` field in the file wins over the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_fields_per_page: config
            .max_fields_per_page
            .unwrap_or(defaults.max_fields_per_page),
        field_limit: config.field_limit.unwrap_or(defaults.field_limit),
        page_limit: config.page_limit.unwrap_or(defaults.page_limit),
        chunk_limit: config.chunk_limit.unwrap_or(defaults.chunk_limit),
        session_timeout_secs: config
            .session_timeout_secs
            .unwrap_or(defaults.session_timeout_secs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(name, %raw, "ignoring unparsable environment override");
            None
        }
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// Checks `CARDFOLD_FIELD_LIMIT`, `CARDFOLD_PAGE_LIMIT`, and
/// `CARDFOLD_TIMEOUT_SECS`. Values that fail to parse are logged and
/// ignored rather than aborting startup.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(limit) = env_parse("CARDFOLD_FIELD_LIMIT") {
        config.field_limit = limit;
    }
    if let Some(limit) = env_parse("CARDFOLD_PAGE_LIMIT") {
        config.page_limit = limit;
    }
    if let Some(secs) = env_parse("CARDFOLD_TIMEOUT_SECS") {
        config.session_timeout_secs = secs;
    }
    config
}

/// Limit overrides collected from CLI flags.
///
/// `None` means the flag was not given; only explicit flags override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--max-fields` flag.
    pub max_fields_per_page: Option<usize>,
    /// `--field-limit` flag.
    pub field_limit: Option<usize>,
    /// `--page-limit` flag.
    pub page_limit: Option<usize>,
    /// `--chunk-limit` flag.
    pub chunk_limit: Option<usize>,
    /// `--timeout-secs` flag.
    pub timeout_secs: Option<u64>,
}

/// Apply CLI argument overrides to a resolved config.
///
/// CLI args sit at the top of the precedence chain:
/// Defaults -> Config File -> Env Vars -> CLI Args (highest).
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(max_fields) = overrides.max_fields_per_page {
        config.max_fields_per_page = max_fields;
    }
    if let Some(limit) = overrides.field_limit {
        config.field_limit = limit;
    }
    if let Some(limit) = overrides.page_limit {
        config.page_limit = limit;
    }
    if let Some(limit) = overrides.chunk_limit {
        config.chunk_limit = limit;
    }
    if let Some(secs) = overrides.timeout_secs {
        config.session_timeout_secs = secs;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
