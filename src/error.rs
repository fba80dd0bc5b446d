//! Error types for md2anki.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the user. Extraction itself never fails.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file '{}' not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("error reading input file '{}': {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

impl ConvertError {
    /// Stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "InputNotFound",
            Self::InputRead { .. } => "InputReadError",
            Self::OutputWrite { .. } => "OutputWriteError",
        }
    }
}

/// Underlying cause of an output write failure.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}
