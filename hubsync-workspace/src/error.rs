//! Error types for hubsync-workspace.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from workspace scanning.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The path is missing or not a directory.
    #[error("invalid workspace path: {path}")]
    InvalidPath { path: PathBuf },

    /// A directory inside an organization is not a valid git checkout.
    #[error("{path} is not a git repository: {source}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// Underlying I/O failure while reading directory entries.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
