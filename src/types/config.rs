//! Configuration structures.
//!
//! Configuration is loaded from a JSON config file and/or environment
//! variables. Environment variables override file values.

use super::errors::{Error, Result};
use crate::toolsets::{ResolverOptions, DEFAULT_CACHE_MAX_ENTRIES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the comma-separated toolset list.
pub const ENV_TOOLSETS: &str = "MIDNIGHT_TOOLSETS";
/// Environment variable toggling strict validation (`true`/`false`).
pub const ENV_TOOLSETS_STRICT: &str = "MIDNIGHT_TOOLSETS_STRICT";
/// Environment variable toggling the empty-resolution fallback.
pub const ENV_TOOLSETS_FALLBACK: &str = "MIDNIGHT_TOOLSETS_FALLBACK";
/// Environment variable bounding the resolution cache (`0` disables it).
pub const ENV_TOOLSETS_CACHE_MAX: &str = "MIDNIGHT_TOOLSETS_CACHE_MAX";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MIDNIGHT_LOG_LEVEL";
/// Environment variable selecting the log format (`json` or `text`).
pub const ENV_LOG_FORMAT: &str = "MIDNIGHT_LOG_FORMAT";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Toolset selection.
    #[serde(default)]
    pub toolsets: ToolsetsConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Toolset selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsetsConfig {
    /// Raw comma-separated toolset list. `None` means catalog defaults.
    pub enabled: Option<String>,

    /// Reject unknown toolset IDs instead of warning and skipping them.
    pub strict: bool,

    /// Use the default toolsets when a non-empty list resolves to nothing.
    pub fall_back_to_defaults: bool,

    /// Memoise resolutions keyed by the raw input string.
    pub cache: bool,

    /// Upper bound on memoised resolutions.
    pub cache_max_entries: usize,
}

impl Default for ToolsetsConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            strict: false,
            fall_back_to_defaults: true,
            cache: true,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl ToolsetsConfig {
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            strict: self.strict,
            fall_back_to_defaults: self.fall_back_to_defaults,
            cache: self.cache,
            max_entries: self.cache_max_entries,
        }
    }

    /// The raw toolset string to resolve; empty when unset.
    pub fn raw(&self) -> &str {
        self.enabled.as_deref().unwrap_or("")
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Defaults overlaid with process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Overlay environment-style overrides onto this configuration.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TOOLSETS) {
            self.toolsets.enabled = Some(raw);
        }
        if let Some(v) = lookup(ENV_TOOLSETS_STRICT) {
            self.toolsets.strict = parse_bool(ENV_TOOLSETS_STRICT, &v)?;
        }
        if let Some(v) = lookup(ENV_TOOLSETS_FALLBACK) {
            self.toolsets.fall_back_to_defaults = parse_bool(ENV_TOOLSETS_FALLBACK, &v)?;
        }
        if let Some(v) = lookup(ENV_TOOLSETS_CACHE_MAX) {
            self.toolsets.cache_max_entries = v.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_TOOLSETS_CACHE_MAX, v
                ))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
