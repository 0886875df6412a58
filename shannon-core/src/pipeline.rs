//! End-to-end contracts: raw text in, structured results out
//!
//! ```text
//! raw -> clean -> normalize -> { statistics, summary, n-grams }
//! ```

use crate::config::PipelineConfig;
use crate::error::{Result, TextError};
use crate::ngram::{self, CountTable};
use crate::normalize::Normalizer;
use crate::stats::{self, Statistics};
use crate::summary;
use crate::tokenize;
use serde::{Deserialize, Serialize};

/// Result of cleaning and analyzing a whole document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Normalized body text, possibly truncated to the configured preview length
    pub cleaned_text: String,
    /// Statistics of the full normalized text
    pub statistics: Statistics,
    /// Leading sentences of the normalized text
    pub summary: String,
}

/// Token stream fed to the n-gram analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenUnit {
    /// Word tokens
    Words,
    /// Character tokens
    Characters {
        /// Keep (collapsed) spaces as tokens
        include_space: bool,
    },
}

/// Clean, normalize and analyze a raw document.
///
/// # Errors
/// [`TextError::InvalidInput`] when the normalized body has no words or no
/// sentences.
pub fn process_document(raw: &str, config: &PipelineConfig) -> Result<DocumentReport> {
    let normalizer = Normalizer::new(config.normalize.clone());
    let normalized = normalizer.clean_and_normalize(raw);

    let statistics = stats::compute(&normalized)?;
    let summary = summary::summarize(&normalized, config.summary.sentences);

    let cleaned_text = match config.preview_chars {
        Some(limit) => truncate_chars(&normalized, limit),
        None => normalized,
    };

    Ok(DocumentReport {
        cleaned_text,
        statistics,
        summary,
    })
}

/// Statistics for text the caller may or may not have normalized.
///
/// # Errors
/// [`TextError::InvalidInput`] for empty or blank input, or text without
/// words and sentences.
pub fn analyze_text(text: &str) -> Result<Statistics> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TextError::InvalidInput(
            "empty text input provided".to_string(),
        ));
    }
    stats::compute(text)
}

/// Clean and normalize `raw`, then tokenize it into `unit` tokens
pub fn tokens(raw: &str, unit: TokenUnit, config: &PipelineConfig) -> Vec<String> {
    let normalized = Normalizer::new(config.normalize.clone()).clean_and_normalize(raw);
    match unit {
        TokenUnit::Words => tokenize::words(&normalized),
        TokenUnit::Characters { include_space } => {
            tokenize::character_tokens(&normalized, include_space)
        }
    }
}

/// Count n-grams of `raw` using the configured window width
pub fn ngram_counts(raw: &str, unit: TokenUnit, config: &PipelineConfig) -> Result<CountTable> {
    config.ngram.validate()?;
    ngram::count_ngrams(&tokens(raw, unit, config), config.ngram.n)
}

/// First `limit` code points of `text`
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
