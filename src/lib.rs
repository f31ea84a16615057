//! templated-pipeline - Template Method pipelines for documents and files

pub mod cli;
pub mod core;
pub mod document;
pub mod execution;
pub mod processing;

// Re-export commonly used types
pub use crate::core::{
    MemorySink, OutputSink, PipelineDefinition, PipelineError, ResourceErrorKind, RunSummary,
    WriterSink,
};
pub use crate::document::{create_document, Document, DocumentKind, Presentation, Report, Spreadsheet};
pub use crate::execution::{ExecutionEngine, ExecutionEvent, RunOutcome};
pub use crate::processing::{
    process_file, CsvFileProcessor, FileFormat, FileProcessor, FileProcessorFramework,
    TextFileProcessor, XmlFileProcessor,
};
