//! Descriptive text statistics

use crate::error::{Result, TextError};
use crate::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of entries reported in [`Statistics::most_common_words`]
pub const TOP_WORDS: usize = 10;

/// Counts, averages and the most frequent words of a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Code points in the analyzed text
    pub total_characters: usize,
    /// Words as produced by [`tokenize::words`]
    pub total_words: usize,
    /// Sentences as produced by [`tokenize::sentences`]
    pub total_sentences: usize,
    /// Characters per word, rounded to 2 decimals
    pub avg_word_length: f64,
    /// Words per sentence, rounded to 2 decimals
    pub avg_sentence_length: f64,
    /// Up to ten case-folded words with their counts, most frequent first
    pub most_common_words: Vec<(String, usize)>,
}

/// Compute statistics for `text`.
///
/// # Errors
/// Returns [`TextError::InvalidInput`] when the text yields no words or no
/// sentences.
pub fn compute(text: &str) -> Result<Statistics> {
    let words = tokenize::words(text);
    let sentences = tokenize::sentences(text);

    if words.is_empty() || sentences.is_empty() {
        return Err(TextError::InvalidInput(
            "text must contain both words and sentences".to_string(),
        ));
    }

    let total_words = words.len();
    let total_sentences = sentences.len();
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();

    let stats = Statistics {
        total_characters: text.chars().count(),
        total_words,
        total_sentences,
        avg_word_length: round2(letters as f64 / total_words as f64),
        avg_sentence_length: round2(total_words as f64 / total_sentences as f64),
        most_common_words: most_common(words.iter().map(|w| w.to_lowercase()), TOP_WORDS),
    };

    log::debug!(
        "statistics: {} words, {} sentences, {} characters",
        stats.total_words,
        stats.total_sentences,
        stats.total_characters
    );
    Ok(stats)
}

/// The `limit` most frequent items, ties ordered by first occurrence
pub fn most_common<I>(items: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    // word -> (count, first position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, (count, _))| (word, count))
        .collect()
}

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
