//! Pipeline configuration

use crate::error::{Result, TextError};
use crate::normalize::NormalizeConfig;
use crate::summary::DEFAULT_SUMMARY_SENTENCES;
use serde::{Deserialize, Serialize};

/// Characters of cleaned text kept in a [`DocumentReport`](crate::DocumentReport)
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Normalization settings
    pub normalize: NormalizeConfig,

    /// Summary settings
    pub summary: SummaryConfig,

    /// Truncate reported cleaned text to this many characters (`None` keeps all)
    pub preview_chars: Option<usize>,

    /// N-gram settings
    pub ngram: NGramConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
            summary: SummaryConfig::default(),
            preview_chars: Some(DEFAULT_PREVIEW_CHARS),
            ngram: NGramConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.ngram.validate()
    }
}

/// Summary settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of leading sentences to keep
    pub sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }
}

/// N-gram settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramConfig {
    /// Window width
    pub n: usize,
    /// Additive smoothing constant
    pub smoothing: f64,
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            n: 2,
            smoothing: 0.0,
        }
    }
}

impl NGramConfig {
    /// Reject a zero window or a negative smoothing constant
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(TextError::InvalidInput("n must be at least 1".to_string()));
        }
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(TextError::InvalidInput(format!(
                "smoothing must be a non-negative number, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }
}
