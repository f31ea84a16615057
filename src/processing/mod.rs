//! File-processing pipeline
//!
//! A [`FileProcessor`] supplies `read`, `parse` and `process`. Each step hands
//! its output to the next. Only `read` touches the filesystem; `parse` fails
//! only for formats with a grammar to check, such as XML.

pub mod csv;
pub mod framework;
pub mod text;
pub mod xml;

use crate::core::PipelineError;
use crate::execution::{ExecutionEngine, RunOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

pub use csv::CsvFileProcessor;
pub use framework::FileProcessorFramework;
pub use text::TextFileProcessor;
pub use xml::XmlFileProcessor;

/// Capability set of the file-processing pipeline
pub trait FileProcessor {
    /// What `read` produces
    type Raw;
    /// What `parse` produces
    type Parsed;
    /// What the whole pipeline returns
    type Output;

    /// Variant name, used in logs and run summaries
    fn name(&self) -> &str;

    /// Load the raw content of `path`
    fn read(&self, path: &Path) -> Result<Self::Raw, PipelineError>;

    /// Split raw content into records
    ///
    /// Line-based formats never fail here; structured formats reject
    /// malformed content with [`PipelineError::Parse`].
    fn parse(&self, raw: Self::Raw) -> Result<Self::Parsed, PipelineError>;

    /// Reduce records to the final result
    fn process(&self, parsed: Self::Parsed) -> Self::Output;
}

/// Run the file pipeline without event handlers
pub fn process_file<P, Q>(processor: &P, path: Q) -> Result<P::Output, PipelineError>
where
    P: FileProcessor + ?Sized,
    Q: AsRef<Path>,
{
    ExecutionEngine::new()
        .process_file(processor, path.as_ref())
        .map(|outcome| outcome.output)
}

/// Read a whole file as UTF-8 text
///
/// The handle is opened and closed inside this call. Errors are returned
/// untouched as [`PipelineError::Read`].
pub fn read_text(path: &Path) -> Result<String, PipelineError> {
    let content = std::fs::read_to_string(path).map_err(PipelineError::Read)?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Built-in file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Text,
    Csv,
    Xml,
}

impl FileFormat {
    /// Run the matching processor on `path`
    pub fn run(
        self,
        engine: &ExecutionEngine,
        path: &Path,
    ) -> Result<RunOutcome<ProcessedFile>, PipelineError> {
        match self {
            FileFormat::Text => engine
                .process_file(&TextFileProcessor, path)
                .map(|outcome| outcome.map(ProcessedFile::Lines)),
            FileFormat::Csv => engine
                .process_file(&CsvFileProcessor, path)
                .map(|outcome| outcome.map(ProcessedFile::Records)),
            FileFormat::Xml => engine
                .process_file(&XmlFileProcessor, path)
                .map(|outcome| outcome.map(ProcessedFile::Lines)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FileFormat::Text => "text",
            FileFormat::Csv => "csv",
            FileFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of any built-in processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProcessedFile {
    /// Trimmed, non-empty lines of a text file, or text nodes of an XML file
    Lines(Vec<String>),
    /// Trimmed, non-blank rows of a CSV file
    Records(Vec<Vec<String>>),
}

impl ProcessedFile {
    /// Number of lines or rows
    pub fn len(&self) -> usize {
        match self {
            ProcessedFile::Lines(lines) => lines.len(),
            ProcessedFile::Records(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One display line per line or row
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            ProcessedFile::Lines(lines) => lines.clone(),
            ProcessedFile::Records(rows) => rows.iter().map(|row| row.join(", ")).collect(),
        }
    }
}
