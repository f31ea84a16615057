//! Document-creation pipeline
//!
//! A [`Document`] supplies the four steps `open`, `edit`, `save` and `close`.
//! The order they run in is owned by the execution engine, never by the
//! variant, so every document kind goes through the same skeleton.

pub mod variants;

use crate::core::{DocumentStep, OutputSink, PipelineError, RunSummary};
use crate::execution::ExecutionEngine;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use variants::{Presentation, Report, Spreadsheet};

/// Capability set of the document-creation pipeline
pub trait Document {
    /// Human-readable document kind, used in status lines
    fn kind(&self) -> &str;

    fn open(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError>;

    fn edit(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError>;

    fn save(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError>;

    fn close(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError>;
}

/// Run the document pipeline without event handlers
pub fn create_document<D: Document + ?Sized>(
    document: &D,
    sink: &mut dyn OutputSink,
) -> Result<RunSummary, PipelineError> {
    ExecutionEngine::new().create_document(document, sink)
}

/// Status line for a step, e.g. `"Saving Report..."`
pub fn status_line(step: DocumentStep, kind: &str) -> String {
    format!("{} {}...", step.action(), kind)
}

/// Write the status line of a step to the sink
pub fn emit_status(
    sink: &mut dyn OutputSink,
    step: DocumentStep,
    kind: &str,
) -> Result<(), PipelineError> {
    sink.line(&status_line(step, kind))
        .map_err(PipelineError::Output)
}

/// Built-in document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Report,
    Presentation,
    Spreadsheet,
}

impl DocumentKind {
    /// Every built-in kind, in demo order
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Report,
        DocumentKind::Presentation,
        DocumentKind::Spreadsheet,
    ];

    /// Construct a fresh variant for this kind
    pub fn document(self) -> Box<dyn Document> {
        match self {
            DocumentKind::Report => Box::new(Report),
            DocumentKind::Presentation => Box::new(Presentation),
            DocumentKind::Spreadsheet => Box::new(Spreadsheet),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Report => "Report",
            DocumentKind::Presentation => "Presentation",
            DocumentKind::Spreadsheet => "Spreadsheet",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
