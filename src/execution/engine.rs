//! Execution engine - runs the fixed step skeleton of each pipeline kind

use crate::{
    core::{
        DocumentStep, ExecutionStatus, FileStep, OutputSink, PipelineDefinition, PipelineError,
        RunSummary, StepSet, StepState,
    },
    document::Document,
    processing::FileProcessor,
};
use chrono::Utc;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionEvent {
    PipelineStarted {
        run_id: Uuid,
        pipeline: String,
        variant: String,
    },
    StepStarted {
        run_id: Uuid,
        step: String,
    },
    StepCompleted {
        run_id: Uuid,
        step: String,
    },
    StepFailed {
        run_id: Uuid,
        step: String,
        error: String,
    },
    PipelineCompleted {
        run_id: Uuid,
        status: ExecutionStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&ExecutionEvent) + Send + Sync>;

/// Output of a successful run together with its summary
#[derive(Debug, Clone)]
pub struct RunOutcome<T> {
    pub output: T,
    pub summary: RunSummary,
}

impl<T> RunOutcome<T> {
    /// Transform the output, keeping the summary
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RunOutcome<U> {
        RunOutcome {
            output: f(self.output),
            summary: self.summary,
        }
    }
}

/// Runs pipelines step by step, in definition order
///
/// The engine never catches a step failure: it records it, notifies the
/// handlers and returns the original error. Steps after a failed one stay
/// `Pending`.
#[derive(Clone, Default)]
pub struct ExecutionEngine {
    event_handlers: Vec<EventHandler>,
}

impl fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("event_handlers", &self.event_handlers.len())
            .finish()
    }
}

impl ExecutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    pub fn with_event_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.add_event_handler(handler);
        self
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Run `open`, `edit`, `save`, `close` on a document
    pub fn create_document<D: Document + ?Sized>(
        &self,
        document: &D,
        sink: &mut dyn OutputSink,
    ) -> Result<RunSummary, PipelineError> {
        let mut run = self.begin::<DocumentStep>(document.kind());

        for &step in DocumentStep::ORDER {
            self.run_step(&mut run, step, || match step {
                DocumentStep::Open => document.open(sink),
                DocumentStep::Edit => document.edit(sink),
                DocumentStep::Save => document.save(sink),
                DocumentStep::Close => document.close(sink),
            })?;
        }

        self.finish(&mut run);
        Ok(run)
    }

    /// Run `read`, `parse`, `process` on a file and return the processed output
    pub fn process_file<P: FileProcessor + ?Sized>(
        &self,
        processor: &P,
        path: &Path,
    ) -> Result<RunOutcome<P::Output>, PipelineError> {
        let mut run = self.begin::<FileStep>(processor.name());
        debug!("Processing {} with {} processor", path.display(), processor.name());

        let raw = self.run_step(&mut run, FileStep::Read, || processor.read(path))?;
        let parsed = self.run_step(&mut run, FileStep::Parse, || processor.parse(raw))?;
        let output = self.run_step(&mut run, FileStep::Process, || Ok(processor.process(parsed)))?;

        self.finish(&mut run);
        Ok(RunOutcome {
            output,
            summary: run,
        })
    }

    fn begin<S: StepSet>(&self, variant: &str) -> RunSummary {
        let mut run = RunSummary::new(&PipelineDefinition::of::<S>(), variant);
        run.start();

        info!("Starting {} pipeline: {} ({})", S::PIPELINE, variant, run.run_id);
        self.emit_event(ExecutionEvent::PipelineStarted {
            run_id: run.run_id,
            pipeline: S::PIPELINE.to_string(),
            variant: variant.to_string(),
        });

        run
    }

    fn finish(&self, run: &mut RunSummary) {
        run.complete();
        info!("Pipeline finished: {} - {:?}", run.variant, run.status);
        self.emit_event(ExecutionEvent::PipelineCompleted {
            run_id: run.run_id,
            status: run.status,
        });
    }

    /// Execute a single step, recording its state and emitting events
    fn run_step<S, T, F>(&self, run: &mut RunSummary, step: S, body: F) -> Result<T, PipelineError>
    where
        S: StepSet,
        F: FnOnce() -> Result<T, PipelineError>,
    {
        let name = step.name();
        let started_at = Utc::now();
        set_step_state(run, name, StepState::Running { started_at });

        debug!("Executing step: {}", name);
        self.emit_event(ExecutionEvent::StepStarted {
            run_id: run.run_id,
            step: name.to_string(),
        });

        match body() {
            Ok(value) => {
                set_step_state(
                    run,
                    name,
                    StepState::Completed {
                        started_at,
                        completed_at: Utc::now(),
                    },
                );
                self.emit_event(ExecutionEvent::StepCompleted {
                    run_id: run.run_id,
                    step: name.to_string(),
                });
                Ok(value)
            }
            Err(e) => {
                error!("Step {} of {} failed: {}", name, run.variant, e);
                set_step_state(
                    run,
                    name,
                    StepState::Failed {
                        error: e.to_string(),
                        failed_at: Utc::now(),
                    },
                );
                run.fail();
                self.emit_event(ExecutionEvent::StepFailed {
                    run_id: run.run_id,
                    step: name.to_string(),
                    error: e.to_string(),
                });
                self.emit_event(ExecutionEvent::PipelineCompleted {
                    run_id: run.run_id,
                    status: ExecutionStatus::Failed,
                });
                Err(e)
            }
        }
    }
}

fn set_step_state(run: &mut RunSummary, name: &str, state: StepState) {
    if let Some(record) = run.step_mut(name) {
        record.state = state;
    }
}
