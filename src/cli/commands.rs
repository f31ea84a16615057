//! CLI command definitions

use clap::Args;
use crate::document::DocumentKind;
use crate::processing::FileFormat;

/// Create documents
#[derive(Debug, Args, Clone)]
pub struct DocumentsCommand {
    /// Document kinds to create (defaults to all)
    #[arg(short, long, value_enum)]
    pub kind: Vec<DocumentKindArg>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl DocumentsCommand {
    /// Selected kinds, or every kind when none were given
    pub fn kinds(&self) -> Vec<DocumentKind> {
        if self.kind.is_empty() {
            DocumentKind::ALL.to_vec()
        } else {
            self.kind.iter().map(|&k| k.into()).collect()
        }
    }
}

/// Process a single file
#[derive(Debug, Args, Clone)]
pub struct ProcessCommand {
    /// Path to the input file
    #[arg(short, long)]
    pub file: String,

    /// File format
    #[arg(long, value_enum, default_value_t = FileFormatArg::Text)]
    pub format: FileFormatArg,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Execute a run plan
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to run plan YAML file
    #[arg(short, long)]
    pub config: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate a run plan
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to run plan YAML file
    #[arg(short, long)]
    pub config: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Document kind argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentKindArg {
    Report,
    Presentation,
    Spreadsheet,
}

impl From<DocumentKindArg> for DocumentKind {
    fn from(arg: DocumentKindArg) -> Self {
        match arg {
            DocumentKindArg::Report => DocumentKind::Report,
            DocumentKindArg::Presentation => DocumentKind::Presentation,
            DocumentKindArg::Spreadsheet => DocumentKind::Spreadsheet,
        }
    }
}

/// File format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FileFormatArg {
    Text,
    Csv,
    Xml,
}

impl From<FileFormatArg> for FileFormat {
    fn from(arg: FileFormatArg) -> Self {
        match arg {
            FileFormatArg::Text => FileFormat::Text,
            FileFormatArg::Csv => FileFormat::Csv,
            FileFormatArg::Xml => FileFormat::Xml,
        }
    }
}
