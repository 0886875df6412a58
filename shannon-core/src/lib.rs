//! Text normalization, statistics and n-gram models for plain-text e-books
//!
//! Raw text flows through a chain of pure stages:
//!
//! - [`normalize`]: strips header/footer boilerplate and canonicalizes case,
//!   quotes, dashes, punctuation and whitespace
//! - [`tokenize`]: sentences, words and characters
//! - [`stats`]: counts, averages and the most frequent words
//! - [`summary`]: positional extractive summaries
//! - [`ngram`]: n-gram counts, smoothed probabilities and a flat persisted form
//!
//! No stage keeps state between calls, so independent documents can be
//! processed concurrently.
//!
//! # Example
//!
//! ```rust
//! use shannon_core::{normalize, stats, tokenize, ngram};
//!
//! let text = normalize::normalize("Hello world. Hello again!", true);
//! let words = tokenize::words(&text);
//! assert_eq!(words, ["hello", "world", "hello", "again"]);
//!
//! let statistics = stats::compute(&text).unwrap();
//! assert_eq!(statistics.total_sentences, 2);
//!
//! let bigrams = ngram::count_ngrams(&words, 2).unwrap();
//! assert_eq!(bigrams.get_tokens(&["hello", "world"]), Some(1));
//! ```

pub mod config;
pub mod error;
pub mod ngram;
pub mod normalize;
pub mod pipeline;
pub mod stats;
pub mod summary;
pub mod tokenize;

pub use config::{NGramConfig, PipelineConfig, SummaryConfig};
pub use error::{Result, TextError};
pub use ngram::{
    count_ngrams, to_probabilities, CountTable, FrequencyTable, NGram, ProbabilityTable,
};
pub use normalize::{BoilerplateMarkers, NormalizeConfig, Normalizer};
pub use pipeline::{analyze_text, process_document, DocumentReport, TokenUnit};
pub use stats::Statistics;
pub use summary::summarize;
