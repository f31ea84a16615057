//! Pipeline error types

use std::io;
use thiserror::Error;

/// Errors raised by pipeline steps
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input resource could not be opened or read
    #[error(transparent)]
    Read(io::Error),

    /// The raw content is not well-formed for the processor's format
    #[error("Malformed {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A status line could not be written to the output sink
    #[error("Failed to write status line: {0}")]
    Output(#[source] io::Error),
}

/// Classification of resource-access failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl From<io::ErrorKind> for ResourceErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => ResourceErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ResourceErrorKind::PermissionDenied,
            _ => ResourceErrorKind::Other,
        }
    }
}

impl PipelineError {
    /// Classify the failure; content errors count as `Other`
    pub fn kind(&self) -> ResourceErrorKind {
        self.io_error()
            .map(|e| e.kind().into())
            .unwrap_or(ResourceErrorKind::Other)
    }

    /// The I/O error exactly as the operating system reported it
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            PipelineError::Read(e) | PipelineError::Output(e) => Some(e),
            PipelineError::Parse { .. } => None,
        }
    }
}
