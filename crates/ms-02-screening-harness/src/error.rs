//! Error types for the screening harness

use std::io;
use std::path::PathBuf;

use ms_01_probabilistic_set::FilterError;
use thiserror::Error;

/// Errors that can occur while running a screening comparison
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
