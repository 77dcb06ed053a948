//! Error types for the batch harness.
//!
//! The core engine is total and contributes no variants here; every error
//! belongs to the I/O layer around it.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing results.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An input file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The automaton file was not valid JSON of the expected shape
    #[error("malformed automaton file {path}: {source}")]
    Automaton {
        path: String,
        source: serde_json::Error,
    },

    /// The results file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl HarnessError {
    /// Creates a read error with path context.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    /// Creates an automaton-parse error with path context.
    pub fn automaton(path: &Path, source: serde_json::Error) -> Self {
        Self::Automaton {
            path: path.display().to_string(),
            source,
        }
    }

    /// Creates a write error with path context.
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}
