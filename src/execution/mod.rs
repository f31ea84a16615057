//! Pipeline execution engine

pub mod engine;

pub use engine::{EventHandler, ExecutionEngine, ExecutionEvent, RunOutcome};
