use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Hard failures. Anything that only means "this file is not an FAQ source"
/// is a [`crate::parser::SkipReason`] instead.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize FAQ dataset")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FaqError>;
