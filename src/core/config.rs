//! Run plan configuration from YAML
//!
//! A run plan only chooses which variants run on which inputs. The steps and
//! their order are fixed by the pipeline kinds and cannot be configured.

use crate::document::DocumentKind;
use crate::processing::FileFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level run plan loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPlan {
    /// Plan name
    pub name: String,

    /// Plan description (optional)
    #[serde(default)]
    pub description: Option<String>,

    /// Document kinds to create, in order
    #[serde(default)]
    pub documents: Vec<DocumentKind>,

    /// Files to process, in order
    #[serde(default)]
    pub files: Vec<FileJob>,
}

/// A file to run through the file-processing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileJob {
    /// Path to the input file
    pub path: String,

    /// Which processor to use
    #[serde(default)]
    pub format: FileFormat,

    /// Whether validation should require the file to exist
    #[serde(default)]
    pub validate_exists: bool,
}

impl RunPlan {
    /// Load a run plan from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a run plan from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let plan: RunPlan = serde_yaml::from_str(yaml)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Validate the run plan
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Run plan name must not be empty");
        }

        if self.documents.is_empty() && self.files.is_empty() {
            anyhow::bail!("Run plan '{}' has no documents or files", self.name);
        }

        for job in &self.files {
            if job.path.trim().is_empty() {
                anyhow::bail!("Run plan '{}' has a file entry with an empty path", self.name);
            }
            if job.validate_exists && !Path::new(&job.path).exists() {
                anyhow::bail!("File doesn't exist: {}", job.path);
            }
        }

        Ok(())
    }

    /// Total number of pipeline runs the plan describes
    pub fn run_count(&self) -> usize {
        self.documents.len() + self.files.len()
    }
}
