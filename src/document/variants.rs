//! Built-in document variants

use super::{emit_status, Document};
use crate::core::{DocumentStep, OutputSink, PipelineError};

/// Report document
#[derive(Debug, Clone, Copy, Default)]
pub struct Report;

impl Document for Report {
    fn kind(&self) -> &str {
        "Report"
    }

    fn open(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Open, self.kind())
    }

    fn edit(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Edit, self.kind())
    }

    fn save(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Save, self.kind())
    }

    fn close(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Close, self.kind())
    }
}

/// Presentation document
#[derive(Debug, Clone, Copy, Default)]
pub struct Presentation;

impl Document for Presentation {
    fn kind(&self) -> &str {
        "Presentation"
    }

    fn open(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Open, self.kind())
    }

    fn edit(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Edit, self.kind())
    }

    fn save(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Save, self.kind())
    }

    fn close(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Close, self.kind())
    }
}

/// Spreadsheet document
#[derive(Debug, Clone, Copy, Default)]
pub struct Spreadsheet;

impl Document for Spreadsheet {
    fn kind(&self) -> &str {
        "Spreadsheet"
    }

    fn open(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Open, self.kind())
    }

    fn edit(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Edit, self.kind())
    }

    fn save(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Save, self.kind())
    }

    fn close(&self, sink: &mut dyn OutputSink) -> Result<(), PipelineError> {
        emit_status(sink, DocumentStep::Close, self.kind())
    }
}
