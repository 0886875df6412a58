//! Positional extractive summaries

use crate::tokenize;

/// Sentences kept when no count is given
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// The first `num_sentences` sentences of `text`, joined by single spaces.
///
/// Shorter texts return every sentence they have; empty input gives an empty
/// string. Terminal punctuation is not restored.
pub fn summarize(text: &str, num_sentences: usize) -> String {
    tokenize::sentences(text)
        .into_iter()
        .take(num_sentences)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
