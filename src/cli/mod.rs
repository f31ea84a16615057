//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{DocumentsCommand, ProcessCommand, RunCommand, ValidateCommand};
use std::ffi::OsString;

/// Template Method pipelines for documents and files
#[derive(Debug, Parser, Clone)]
#[command(name = "templated")]
#[command(author = "Pipeline Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Run document and file-processing pipelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print execution events as steps run
    #[arg(short, long, global = true)]
    pub events: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Create documents through open, edit, save, close
    Documents(DocumentsCommand),

    /// Read, parse and process a file
    Process(ProcessCommand),

    /// Execute a run plan
    Run(RunCommand),

    /// Validate a run plan
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
