//! Error types for the generation pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a generation run.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
}

/// Why the cheat data dump was rejected.
#[derive(Debug, Error)]
pub enum MalformedInput {
    /// Not JSON, or no `Entries` array.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// A record lacking `Name`/`TypeFullName`/`Guid` or with a non-string one.
    #[error("record {index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::MalformedInput(MalformedInput::Json(err))
    }
}

impl CodegenError {
    /// True when the run failed because of the input data rather than I/O.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, CodegenError::MalformedInput(_))
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
