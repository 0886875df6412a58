//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod clean;
pub mod ngrams;
pub mod show;

/// Clean plain-text e-books, compute text statistics and build n-gram models
#[derive(Debug, Parser)]
#[command(name = "shannon", version, about, long_about = None)]
pub struct Cli {
    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger installed by an embedding process wins.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Strip boilerplate, normalize and report statistics and a summary per file
    Clean(clean::CleanArgs),

    /// Compute statistics for a file or an inline text
    Analyze(analyze::AnalyzeArgs),

    /// Count n-grams in a file and optionally save the table
    Ngrams(ngrams::NgramsArgs),

    /// Inspect a saved n-gram table
    Show(show::ShowArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Clean(args) => args.execute(quiet),
            Commands::Analyze(args) => args.execute(),
            Commands::Ngrams(args) => args.execute(),
            Commands::Show(args) => args.execute(),
        }
    }
}
