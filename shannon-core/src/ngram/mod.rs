//! N-gram counting and probability estimation
//!
//! An [`NGram`] is either a single token (`n = 1`) or an ordered sequence of
//! `n > 1` tokens. A [`FrequencyTable`] maps n-grams of one common order to a
//! count or a probability. The string encoding of keys lives in [`persist`]
//! and nowhere else.

pub mod persist;

use crate::error::{Result, TextError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

pub use persist::{deserialize, from_json, load, save, serialize, to_json, KEY_DELIMITER};

/// Token storage for multi-token n-grams; bigrams and trigrams stay inline
pub type TokenSeq = SmallVec<[String; 3]>;

/// A contiguous run of tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NGram {
    /// A single token (`n = 1`)
    Unigram(String),
    /// Two or more tokens (`n > 1`); tables refuse shorter sequences
    Sequence(TokenSeq),
}

impl NGram {
    /// Build an n-gram from a token window.
    ///
    /// A one-token window becomes a [`NGram::Unigram`], anything longer a
    /// [`NGram::Sequence`].
    ///
    /// # Panics
    /// Panics on an empty window.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        assert!(!tokens.is_empty(), "an n-gram needs at least one token");
        if tokens.len() == 1 {
            NGram::Unigram(tokens[0].as_ref().to_owned())
        } else {
            NGram::Sequence(tokens.iter().map(|t| t.as_ref().to_owned()).collect())
        }
    }

    /// False for a sequence of fewer than two tokens, which would collide
    /// with a unigram of the same order
    pub fn is_well_formed(&self) -> bool {
        match self {
            NGram::Unigram(_) => true,
            NGram::Sequence(tokens) => tokens.len() > 1,
        }
    }

    /// Number of tokens
    pub fn order(&self) -> usize {
        match self {
            NGram::Unigram(_) => 1,
            NGram::Sequence(tokens) => tokens.len(),
        }
    }

    /// Tokens in order
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            NGram::Unigram(token) => vec![token.as_str()],
            NGram::Sequence(tokens) => tokens.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for NGram {
    fn from(token: &str) -> Self {
        NGram::Unigram(token.to_owned())
    }
}

/// # Panics
/// Panics when `N` is zero.
impl<const N: usize> From<[&str; N]> for NGram {
    fn from(tokens: [&str; N]) -> Self {
        NGram::from_tokens(&tokens)
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NGram::Unigram(token) => write!(f, "{token}"),
            NGram::Sequence(tokens) => write!(f, "({})", tokens.join(", ")),
        }
    }
}

/// Values a frequency table can hold
pub trait FrequencyValue: Copy + PartialOrd + Serialize + DeserializeOwned {
    /// Value as a float for sums and comparisons
    fn as_f64(self) -> f64;

    /// Whether the value may appear in a table
    fn is_valid(self) -> bool;
}

impl FrequencyValue for u64 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn is_valid(self) -> bool {
        true
    }
}

impl FrequencyValue for f64 {
    fn as_f64(self) -> f64 {
        self
    }

    fn is_valid(self) -> bool {
        self.is_finite() && self >= 0.0
    }
}

/// Mapping from n-grams of a single order to a value
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<V> {
    entries: HashMap<NGram, V>,
}

/// Raw occurrence counts
pub type CountTable = FrequencyTable<u64>;

/// Probabilities in `[0, 1]`
pub type ProbabilityTable = FrequencyTable<f64>;

impl<V> Default for FrequencyTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: FrequencyValue> FrequencyTable<V> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct n-grams
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no n-grams
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order shared by every key, `None` for an empty table
    pub fn order(&self) -> Option<usize> {
        self.entries.keys().next().map(NGram::order)
    }

    /// Value recorded for `ngram`
    pub fn get(&self, ngram: &NGram) -> Option<V> {
        self.entries.get(ngram).copied()
    }

    /// Value recorded for the n-gram made of `tokens`
    pub fn get_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Option<V> {
        if tokens.is_empty() {
            return None;
        }
        self.get(&NGram::from_tokens(tokens))
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, NGram, V> {
        self.entries.iter()
    }

    /// Sum of all values (`0.0` for an empty table)
    pub fn total(&self) -> f64 {
        self.entries.values().fold(0.0, |acc, v| acc + v.as_f64())
    }

    /// Insert a value, checking that the key's order matches the table.
    ///
    /// # Errors
    /// [`TextError::InvalidInput`] when the key is a sequence of fewer than
    /// two tokens, the order differs from existing keys, or the value is
    /// negative or not finite.
    pub fn insert(&mut self, ngram: NGram, value: V) -> Result<Option<V>> {
        if !ngram.is_well_formed() {
            return Err(TextError::InvalidInput(format!(
                "sequence {ngram} needs at least two tokens"
            )));
        }
        if let Some(order) = self.order() {
            if ngram.order() != order {
                return Err(TextError::InvalidInput(format!(
                    "n-gram {ngram} has order {}, table holds order {order}",
                    ngram.order()
                )));
            }
        }
        if !value.is_valid() {
            return Err(TextError::InvalidInput(format!(
                "invalid frequency value for {ngram}"
            )));
        }
        Ok(self.entries.insert(ngram, value))
    }

    /// The `k` highest-valued entries, ties ordered by key
    pub fn top(&self, k: usize) -> Vec<(&NGram, V)> {
        let mut entries: Vec<(&NGram, V)> = self.entries.iter().map(|(g, v)| (g, *v)).collect();
        entries.sort_by(|a, b| {
            b.1.as_f64()
                .total_cmp(&a.1.as_f64())
                .then_with(|| a.0.cmp(b.0))
        });
        entries.truncate(k);
        entries
    }
}

impl<V> IntoIterator for FrequencyTable<V> {
    type Item = (NGram, V);
    type IntoIter = hash_map::IntoIter<NGram, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a FrequencyTable<V> {
    type Item = (&'a NGram, &'a V);
    type IntoIter = hash_map::Iter<'a, NGram, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count every window of `n` consecutive tokens (stride 1).
///
/// There are `tokens.len() - n + 1` windows; fewer than `n` tokens give an
/// empty table.
///
/// # Errors
/// [`TextError::InvalidInput`] when `n` is zero.
pub fn count_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<CountTable> {
    if n == 0 {
        return Err(TextError::InvalidInput("n must be at least 1".to_string()));
    }

    let mut entries: HashMap<NGram, u64> = HashMap::new();
    for window in tokens.windows(n) {
        *entries.entry(NGram::from_tokens(window)).or_insert(0) += 1;
    }

    log::debug!(
        "counted {} distinct {n}-grams over {} tokens",
        entries.len(),
        tokens.len()
    );
    Ok(FrequencyTable { entries })
}

/// Convert counts to additively smoothed probabilities.
///
/// `p(k) = (count(k) + smoothing) / (total + smoothing * distinct)`, computed
/// over the observed keys only. `smoothing = 0` is the maximum-likelihood
/// estimate.
///
/// # Errors
/// [`TextError::InvalidInput`] when `smoothing` is negative or not finite,
/// or when a non-empty table sums to zero with no smoothing to spread.
pub fn to_probabilities(counts: &CountTable, smoothing: f64) -> Result<ProbabilityTable> {
    if !smoothing.is_finite() || smoothing < 0.0 {
        return Err(TextError::InvalidInput(format!(
            "smoothing must be a non-negative number, got {smoothing}"
        )));
    }

    let denominator = counts.total() + smoothing * counts.len() as f64;
    if !counts.is_empty() && denominator <= 0.0 {
        return Err(TextError::InvalidInput(
            "counts sum to zero; use a positive smoothing constant".to_string(),
        ));
    }

    let entries = counts
        .entries
        .iter()
        .map(|(ngram, count)| (ngram.clone(), (*count as f64 + smoothing) / denominator))
        .collect();

    Ok(FrequencyTable { entries })
}
