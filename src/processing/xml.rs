//! XML processor
//!
//! `parse` checks well-formedness and collects every text node in document
//! order. Element names and attributes are not part of the result.

use super::{read_text, FileProcessor};
use crate::core::PipelineError;
use std::path::Path;

/// Returns the trimmed, non-empty text content of an XML file
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFileProcessor;

impl FileProcessor for XmlFileProcessor {
    type Raw = String;
    type Parsed = Vec<String>;
    type Output = Vec<String>;

    fn name(&self) -> &str {
        "xml"
    }

    fn read(&self, path: &Path) -> Result<String, PipelineError> {
        read_text(path)
    }

    fn parse(&self, raw: String) -> Result<Vec<String>, PipelineError> {
        let doc = roxmltree::Document::parse(&raw).map_err(|e| PipelineError::Parse {
            format: "xml",
            message: e.to_string(),
        })?;

        Ok(doc
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .map(str::to_string)
            .collect())
    }

    fn process(&self, parsed: Vec<String>) -> Vec<String> {
        parsed
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect()
    }
}
