//! Plain text processor

use super::{read_text, FileProcessor};
use crate::core::PipelineError;
use std::path::Path;

/// Returns the trimmed, non-empty lines of a text file
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileProcessor;

impl FileProcessor for TextFileProcessor {
    type Raw = String;
    type Parsed = Vec<String>;
    type Output = Vec<String>;

    fn name(&self) -> &str {
        "text"
    }

    fn read(&self, path: &Path) -> Result<String, PipelineError> {
        read_text(path)
    }

    /// Split on `'\n'`. An empty input yields a single empty line and a
    /// trailing newline yields a trailing empty line.
    fn parse(&self, raw: String) -> Result<Vec<String>, PipelineError> {
        Ok(raw.split('\n').map(str::to_string).collect())
    }

    fn process(&self, parsed: Vec<String>) -> Vec<String> {
        parsed
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
