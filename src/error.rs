//! The crate's error taxonomy.
//!
//! This is a single-pass batch tool: there are no retries, and any error
//! aborts the current run entirely.

use thiserror::Error;

/// Error covers every failure a run can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed YAML on the primary or override input, or a YAML
    /// serialization failure in normal output mode.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON input, or a JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unsupported combination encountered while merging an override.
    #[error(transparent)]
    Merge(#[from] crate::merge::MergeError),

    /// File open/read/write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
