//! Error types for the outlet library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration and dataset loading.
///
/// Rendering and scroll coordination never fail: mismatched items render empty and
/// out-of-band measurements keep the previous state.
#[derive(Debug, Error)]
pub enum OutletError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid dataset: {0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, OutletError>;
