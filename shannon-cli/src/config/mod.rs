//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shannon_core::PipelineConfig;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Core pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config
            .pipeline
            .validate()
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Worker thread count, resolving 0 to the number of CPUs
    pub fn worker_threads(&self, requested: Option<usize>) -> usize {
        match requested.unwrap_or(self.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
