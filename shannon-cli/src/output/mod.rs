//! Output formatting module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shannon_core::{DocumentReport, Statistics};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the report produced for one document
    fn format_report(&mut self, source: &str, report: &DocumentReport) -> Result<()>;

    /// Format statistics for one text
    fn format_statistics(&mut self, source: &str, statistics: &Statistics) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod table;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Text,
    /// JSON array of results
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Writer type shared by all formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout when no path is given
pub fn open_writer(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: OutputWriter,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Render the ranked word list as `word (count)` pairs
pub(crate) fn word_list(statistics: &Statistics) -> String {
    statistics
        .most_common_words
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}
