//! Clean command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use shannon_core::{process_document, BoilerplateMarkers, DocumentReport, PipelineConfig};
use std::path::{Path, PathBuf};

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of leading sentences in the summary
    #[arg(long, value_name = "N")]
    pub summary_sentences: Option<usize>,

    /// Truncate the reported cleaned text to N characters
    #[arg(long, value_name = "N", conflicts_with = "full_text")]
    pub preview_chars: Option<usize>,

    /// Report the whole cleaned text
    #[arg(long)]
    pub full_text: bool,

    /// Keep the whole file instead of looking for boilerplate markers
    #[arg(long)]
    pub no_markers: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text cleaning");

        let config = CliConfig::load(self.config.as_deref())?;
        let pipeline = self.pipeline_config(&config);
        pipeline.validate().map_err(CliError::from)?;

        let files = resolve_patterns(&self.input)?;
        let threads = config.worker_threads(self.threads);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;
        log::debug!("Processing {} file(s) on {} thread(s)", files.len(), threads);

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<(String, Result<DocumentReport>)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let name = FileReader::display_name(path);
                    let result = process_file(path, &pipeline);
                    progress.file_completed(&name);
                    (name, result)
                })
                .collect()
        });
        progress.finish();

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        let mut failures = 0usize;
        for (name, result) in &results {
            match result {
                Ok(report) => formatter.format_report(name, report)?,
                Err(e) => {
                    failures += 1;
                    log::error!("{name}: {e:#}");
                    if quiet {
                        continue;
                    }
                    eprintln!("Error: {name}: {e:#}");
                }
            }
        }
        formatter.finish()?;

        if failures > 0 {
            return Err(CliError::ProcessingError(format!(
                "{} of {} file(s) failed",
                failures,
                results.len()
            ))
            .into());
        }

        log::info!("Cleaned {} file(s)", results.len());
        Ok(())
    }

    /// Apply command-line overrides on top of the file configuration
    fn pipeline_config(&self, config: &CliConfig) -> PipelineConfig {
        let mut pipeline = config.pipeline.clone();
        if let Some(sentences) = self.summary_sentences {
            pipeline.summary.sentences = sentences;
        }
        if self.full_text {
            pipeline.preview_chars = None;
        } else if let Some(limit) = self.preview_chars {
            pipeline.preview_chars = Some(limit);
        }
        if self.no_markers {
            pipeline.normalize.markers = BoilerplateMarkers::none();
        }
        pipeline
    }
}

fn process_file(path: &Path, pipeline: &PipelineConfig) -> Result<DocumentReport> {
    let raw = FileReader::read_text(path)?;
    let report = process_document(&raw, pipeline).map_err(CliError::from)?;
    Ok(report)
}
