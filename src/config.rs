//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `STARTBOOK_LOG` | `tracing` filter directive | `warn` |
//! | `STARTBOOK_OUTPUT` | default output format (`human`, `json`, `pretty`) | `human` |
//!
//! Command-line flags override these values.

use anyhow::{anyhow, Result};

use crate::output::OutputFormat;

pub const LOG_ENV: &str = "STARTBOOK_LOG";
pub const OUTPUT_ENV: &str = "STARTBOOK_OUTPUT";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Filter directive handed to the log subscriber
    pub log_filter: String,
    /// Output format used when `--output` is not given
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output_format: OutputFormat::Human,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }

        if let Some(raw) = lookup(OUTPUT_ENV) {
            config.output_format = OutputFormat::from_str(raw.trim()).ok_or_else(|| {
                anyhow!(
                    "{} must be human, json, or pretty (got {:?})",
                    OUTPUT_ENV,
                    raw
                )
            })?;
        }

        Ok(config)
    }
}
