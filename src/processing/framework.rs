//! Framework entry point for file processing

use super::FileProcessor;
use crate::core::PipelineError;
use crate::execution::ExecutionEngine;
use std::path::Path;

/// Holds one processor and forwards `process_file` to it
///
/// Callers depend on the framework, so the processor can be swapped without
/// touching call sites.
pub struct FileProcessorFramework<P> {
    processor: P,
    engine: ExecutionEngine,
}

impl<P: FileProcessor> FileProcessorFramework<P> {
    pub fn new(processor: P) -> Self {
        Self::with_engine(processor, ExecutionEngine::new())
    }

    /// Use an engine with event handlers already registered
    pub fn with_engine(processor: P, engine: ExecutionEngine) -> Self {
        Self { processor, engine }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Run the processor's pipeline on `path`
    pub fn process_file<Q: AsRef<Path>>(&self, path: Q) -> Result<P::Output, PipelineError> {
        self.engine
            .process_file(&self.processor, path.as_ref())
            .map(|outcome| outcome.output)
    }
}
