//! Analyze command implementation

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, open_writer, OutputFormat};
use anyhow::Result;
use clap::{ArgGroup, Args};
use shannon_core::{analyze_text, Normalizer};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub struct AnalyzeArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Inline text to analyze
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Clean and normalize the text before analysis
    #[arg(short, long)]
    pub normalize: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        let (source, text) = match (&self.input, &self.text) {
            (Some(path), _) => (FileReader::display_name(path), FileReader::read_text(path)?),
            (None, Some(text)) => ("text".to_string(), text.clone()),
            (None, None) => {
                return Err(CliError::ProcessingError("no input provided".to_string()).into())
            }
        };

        let text = if self.normalize {
            Normalizer::default().clean_and_normalize(&text)
        } else {
            text
        };

        let statistics = analyze_text(&text).map_err(CliError::from)?;
        log::info!(
            "{source}: {} words in {} sentences",
            statistics.total_words,
            statistics.total_sentences
        );

        let mut formatter = create_formatter(self.format, open_writer(None)?, true);
        formatter.format_statistics(&source, &statistics)?;
        formatter.finish()
    }
}
