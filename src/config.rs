// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading from environment variables.
//!
//! All configuration values are loaded from `SRT_*` environment variables
//! with sensible defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `SRT_LOG_LEVEL` | warn | tracing filter directive |
//! | `SRT_LOG_FORMAT` | json | `json` or `pretty` |
//! | `SRT_LOG_FILE` | (stderr) | write logs to this file |
//! | `SRT_OUTPUT_FORMAT` | yaml | `yaml` or `json` for rendered documents |
//! | `SRT_DEFAULT_NAMESPACE` | default | namespace for runtimes that omit one |

use std::path::PathBuf;
use std::str::FromStr;

use crate::telemetry::{LogConfig, LogFormat};

pub const DEFAULT_NAMESPACE: &str = "default";

/// Format for documents printed by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// All configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log: LogConfig,
    pub output_format: OutputFormat,
    pub default_namespace: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            output_format: OutputFormat::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Parse an env var with `FromStr`, returning `default` on missing or invalid.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Read a non-blank string env var.
fn non_blank(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load all configuration from environment variables.
///
/// Missing or invalid values fall back to safe defaults without panicking.
pub fn load() -> EnvConfig {
    let defaults = EnvConfig::default();
    let log = LogConfig {
        format: parse_or("SRT_LOG_FORMAT", LogFormat::Json),
        level: non_blank("SRT_LOG_LEVEL").unwrap_or(defaults.log.level),
        output_path: non_blank("SRT_LOG_FILE").map(PathBuf::from),
    };

    EnvConfig {
        log,
        output_format: parse_or("SRT_OUTPUT_FORMAT", defaults.output_format),
        default_namespace: non_blank("SRT_DEFAULT_NAMESPACE")
            .unwrap_or(defaults.default_namespace),
    }
}

impl EnvConfig {
    /// Effective values as `(variable, value)` pairs, in documented order.
    pub fn effective(&self) -> Vec<(&'static str, String)> {
        let log_format = match self.log.format {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        };
        let log_file = self
            .log
            .output_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        vec![
            ("SRT_LOG_LEVEL", self.log.level.clone()),
            ("SRT_LOG_FORMAT", log_format.to_string()),
            ("SRT_LOG_FILE", log_file),
            ("SRT_OUTPUT_FORMAT", self.output_format.as_str().to_string()),
            ("SRT_DEFAULT_NAMESPACE", self.default_namespace.clone()),
        ]
    }
}
