//! Configuration file loading with precedence handling.

use crate::engine::DEFAULT_COMPARISON_COUNT;
use crate::model::{SortDirection, SortKey};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "CITYDASH_CONFIG";
/// Environment variable overriding the initial sort key.
pub const ENV_SORT: &str = "CITYDASH_SORT";
/// Environment variable overriding the initial theme (`1`/`true` for dark).
pub const ENV_DARK_MODE: &str = "CITYDASH_DARK_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an unknown key.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override holds a value that cannot be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/citydash/config.toml`:
///
/// ```toml
/// sort_key = "literacy_rate"
/// sort_direction = "asc"
/// dark_mode = true
/// comparison_count = 5
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial sort key.
    #[serde(default)]
    pub sort_key: Option<SortKey>,

    /// Initial sort direction ("asc" or "desc").
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,

    /// Start with the dark palette.
    #[serde(default)]
    pub dark_mode: Option<bool>,

    /// How many cities the comparison chart shows.
    #[serde(default)]
    pub comparison_count: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial sort column.
    pub sort_key: SortKey,
    /// Initial sort direction.
    pub sort_direction: SortDirection,
    /// Start in the dark theme.
    pub dark_mode: bool,
    /// Number of cities in the detail comparison.
    pub comparison_count: usize,
    /// Where the log file is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Population,
            sort_direction: SortDirection::Descending,
            dark_mode: false,
            comparison_count: DEFAULT_COMPARISON_COUNT,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/citydash/citydash.log` on Unix-like systems, or
/// `citydash.log` in the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("citydash").join("citydash.log")
    } else {
        PathBuf::from("citydash.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/citydash/config.toml` on Unix, appropriate path on
/// other platforms. `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("citydash").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CITYDASH_CONFIG` environment variable
/// 3. Default path `~/.config/citydash/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is set but empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        sort_key: config.sort_key.unwrap_or(defaults.sort_key),
        sort_direction: config.sort_direction.unwrap_or(defaults.sort_direction),
        dark_mode: config.dark_mode.unwrap_or(defaults.dark_mode),
        comparison_count: config
            .comparison_count
            .unwrap_or(defaults.comparison_count),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CITYDASH_SORT`: sort key name (same names as `--sort`)
/// - `CITYDASH_DARK_MODE`: `1`/`true`/`yes` or `0`/`false`/`no`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when a variable is set to
/// something that cannot be parsed.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_SORT) {
        config.sort_key = raw.parse().map_err(|e: crate::model::QueryError| {
            ConfigError::InvalidValue {
                name: ENV_SORT.to_string(),
                reason: e.to_string(),
            }
        })?;
    }

    if let Ok(raw) = std::env::var(ENV_DARK_MODE) {
        config.dark_mode = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
            name: ENV_DARK_MODE.to_string(),
            reason: format!("expected a boolean, got '{raw}'"),
        })?;
    }

    Ok(config)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    sort_key: Option<SortKey>,
    sort_direction: Option<SortDirection>,
    dark_mode: Option<bool>,
) -> ResolvedConfig {
    if let Some(key) = sort_key {
        config.sort_key = key;
    }

    if let Some(direction) = sort_direction {
        config.sort_direction = direction;
    }

    if let Some(dark) = dark_mode {
        config.dark_mode = dark;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
