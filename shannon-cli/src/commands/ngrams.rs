//! N-gram command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::table::{count, probability, write_table};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use shannon_core::ngram;
use shannon_core::pipeline::{ngram_counts, TokenUnit};
use shannon_core::{BoilerplateMarkers, PipelineConfig};
use std::io;
use std::path::PathBuf;

/// Token stream to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    /// Word n-grams
    Words,
    /// Character n-grams
    Chars,
}

/// Arguments for the ngrams command
#[derive(Debug, Args)]
pub struct NgramsArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Window width (default: from config, else 2)
    #[arg(short = 'n', long = "order", value_name = "N")]
    pub order: Option<usize>,

    /// Token unit
    #[arg(short, long, value_enum, default_value = "words")]
    pub unit: Unit,

    /// Keep spaces as character tokens
    #[arg(long)]
    pub include_space: bool,

    /// Convert counts to probabilities
    #[arg(short, long)]
    pub probabilities: bool,

    /// Additive smoothing constant (implies --probabilities)
    #[arg(short, long, value_name = "S")]
    pub smoothing: Option<f64>,

    /// Save the table as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of entries to print
    #[arg(short = 'k', long, default_value_t = 10)]
    pub top: usize,

    /// Keep the whole file instead of looking for boilerplate markers
    #[arg(long)]
    pub no_markers: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl NgramsArgs {
    /// Execute the ngrams command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let pipeline = self.pipeline_config(&config);
        pipeline.validate().map_err(CliError::from)?;

        let raw = FileReader::read_text(&self.input)?;
        let counts = ngram_counts(&raw, self.token_unit(), &pipeline).map_err(CliError::from)?;
        log::info!(
            "Counted {} distinct {}-grams in {}",
            counts.len(),
            pipeline.ngram.n,
            self.input.display()
        );

        let mut stdout = io::stdout().lock();
        if self.probabilities || self.smoothing.is_some() {
            let table = ngram::to_probabilities(&counts, pipeline.ngram.smoothing)
                .map_err(CliError::from)?;
            if let Some(path) = &self.output {
                ngram::save(&table, path)
                    .with_context(|| format!("Failed to save table: {}", path.display()))?;
            }
            write_table(&mut stdout, &table, self.top, probability)
        } else {
            if let Some(path) = &self.output {
                ngram::save(&counts, path)
                    .with_context(|| format!("Failed to save table: {}", path.display()))?;
            }
            write_table(&mut stdout, &counts, self.top, count)
        }
    }

    fn token_unit(&self) -> TokenUnit {
        match self.unit {
            Unit::Words => TokenUnit::Words,
            Unit::Chars => TokenUnit::Characters {
                include_space: self.include_space,
            },
        }
    }

    fn pipeline_config(&self, config: &CliConfig) -> PipelineConfig {
        let mut pipeline = config.pipeline.clone();
        if let Some(n) = self.order {
            pipeline.ngram.n = n;
        }
        if let Some(smoothing) = self.smoothing {
            pipeline.ngram.smoothing = smoothing;
        }
        if self.no_markers {
            pipeline.normalize.markers = BoilerplateMarkers::none();
        }
        pipeline
    }
}
