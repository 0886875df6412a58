//! Show command implementation

use crate::output::table::{count, probability, write_table};
use anyhow::{Context, Result};
use clap::Args;
use shannon_core::ngram::persist;
use shannon_core::{CountTable, ProbabilityTable};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Table written by `shannon ngrams --output`
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Number of entries to print
    #[arg(short = 'k', long, default_value_t = 10)]
    pub top: usize,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> Result<()> {
        let json = fs::read_to_string(&self.table)
            .with_context(|| format!("Failed to load table: {}", self.table.display()))?;

        let mut stdout = io::stdout().lock();
        write_saved_table(&mut stdout, &json, self.top)
            .with_context(|| format!("Failed to load table: {}", self.table.display()))
    }
}

/// List a persisted table, choosing count or probability rendering from its values.
///
/// Counts are written as JSON integers and probabilities as floats (`1.0`,
/// never `1`), so a record that parses as integers is a count table.
fn write_saved_table<W: Write>(writer: &mut W, json: &str, top: usize) -> Result<()> {
    match persist::from_json::<u64>(json) {
        Ok(counts) => write_counts(writer, &counts, top),
        Err(e) if e.is_format_error() => {
            let probabilities: ProbabilityTable = persist::from_json(json)?;
            write_table(writer, &probabilities, top, probability)
        }
        Err(e) => Err(e.into()),
    }
}

fn write_counts<W: Write>(writer: &mut W, counts: &CountTable, top: usize) -> Result<()> {
    log::debug!("showing {} counts", counts.len());
    write_table(writer, counts, top, count)
}
