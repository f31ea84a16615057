//! Comma-separated values processor
//!
//! Fields are split on every `','`. Quoting and escaping are not supported.

use super::{read_text, FileProcessor};
use crate::core::PipelineError;
use std::path::Path;

/// Returns the trimmed, non-blank rows of a CSV file
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileProcessor;

impl FileProcessor for CsvFileProcessor {
    type Raw = String;
    type Parsed = Vec<Vec<String>>;
    type Output = Vec<Vec<String>>;

    fn name(&self) -> &str {
        "csv"
    }

    fn read(&self, path: &Path) -> Result<String, PipelineError> {
        read_text(path)
    }

    fn parse(&self, raw: String) -> Result<Vec<Vec<String>>, PipelineError> {
        Ok(raw
            .split('\n')
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect())
    }

    fn process(&self, parsed: Vec<Vec<String>>) -> Vec<Vec<String>> {
        parsed
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|field| field.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|row| row.iter().any(|field| !field.is_empty()))
            .collect()
    }
}
