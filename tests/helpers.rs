//! Test utility functions for templated-pipeline

#![allow(dead_code)]

use templated_pipeline::core::OutputSink;
use templated_pipeline::execution::{ExecutionEngine, ExecutionEvent};

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Engine that records every event it emits
pub fn recording_engine() -> (ExecutionEngine, Arc<Mutex<Vec<ExecutionEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let recorded = events.clone();
    let engine = ExecutionEngine::new().with_event_handler(move |event| {
        recorded.lock().unwrap().push(event.clone());
    });
    (engine, events)
}

/// Names of the steps that started, in order
pub fn started_steps(events: &[ExecutionEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            ExecutionEvent::StepStarted { step, .. } => Some(step.clone()),
            _ => None,
        })
        .collect()
}

/// Write `content` to a file in a fresh temp dir
///
/// The directory lives as long as the returned guard.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    (dir, path)
}

/// Sink that accepts `capacity` lines, then fails every write
pub struct FailingSink {
    capacity: usize,
    pub lines: Vec<String>,
    pub attempts: usize,
}

impl FailingSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Vec::new(),
            attempts: 0,
        }
    }
}

impl OutputSink for FailingSink {
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.attempts += 1;
        if self.lines.len() >= self.capacity {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_sink_capacity() {
        let mut sink = FailingSink::new(1);
        assert!(sink.line("a").is_ok());
        assert!(sink.line("b").is_err());
        assert_eq!(sink.lines, vec!["a"]);
        assert_eq!(sink.attempts, 2);
    }

    #[test]
    fn test_temp_file_written() {
        let (_dir, path) = temp_file("x.txt", "content");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}
