//! Step definitions for the fixed pipeline kinds

use serde::Serialize;
use std::fmt;

/// A closed set of steps making up one pipeline kind.
///
/// `ORDER` is the execution skeleton. Every variant of the pipeline runs the
/// steps in exactly this order.
pub trait StepSet: Copy + fmt::Debug + 'static {
    /// Name of the pipeline kind
    const PIPELINE: &'static str;

    /// Steps in execution order
    const ORDER: &'static [Self];

    /// Stable, lowercase step name
    fn name(self) -> &'static str;
}

/// Steps of the document-creation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStep {
    Open,
    Edit,
    Save,
    Close,
}

impl DocumentStep {
    /// Progressive verb used in status lines ("Opening", "Editing", ...)
    pub fn action(self) -> &'static str {
        match self {
            DocumentStep::Open => "Opening",
            DocumentStep::Edit => "Editing",
            DocumentStep::Save => "Saving",
            DocumentStep::Close => "Closing",
        }
    }
}

impl StepSet for DocumentStep {
    const PIPELINE: &'static str = "document";
    const ORDER: &'static [Self] = &[
        DocumentStep::Open,
        DocumentStep::Edit,
        DocumentStep::Save,
        DocumentStep::Close,
    ];

    fn name(self) -> &'static str {
        match self {
            DocumentStep::Open => "open",
            DocumentStep::Edit => "edit",
            DocumentStep::Save => "save",
            DocumentStep::Close => "close",
        }
    }
}

/// Steps of the file-processing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStep {
    Read,
    Parse,
    Process,
}

impl StepSet for FileStep {
    const PIPELINE: &'static str = "file";
    const ORDER: &'static [Self] = &[FileStep::Read, FileStep::Parse, FileStep::Process];

    fn name(self) -> &'static str {
        match self {
            FileStep::Read => "read",
            FileStep::Parse => "parse",
            FileStep::Process => "process",
        }
    }
}

/// Ordered step names of a pipeline kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineDefinition {
    /// Pipeline kind name
    pub name: &'static str,

    /// Step names in execution order
    pub steps: Vec<&'static str>,
}

impl PipelineDefinition {
    /// Build the definition of a step set
    pub fn of<S: StepSet>() -> Self {
        Self {
            name: S::PIPELINE,
            steps: S::ORDER.iter().map(|step| step.name()).collect(),
        }
    }

    /// Definition of the document-creation pipeline
    pub fn document() -> Self {
        Self::of::<DocumentStep>()
    }

    /// Definition of the file-processing pipeline
    pub fn file() -> Self {
        Self::of::<FileStep>()
    }
}
