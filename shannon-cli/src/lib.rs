//! Shannon CLI library
//!
//! This library provides the command-line interface for cleaning plain-text
//! e-books, computing text statistics and building n-gram frequency tables.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
