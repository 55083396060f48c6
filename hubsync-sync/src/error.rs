//! Error types for hubsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use hubsync_core::RemoteError;
use hubsync_workspace::WorkspaceError;

/// All errors that can arise from reconciliation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Local workspace scanning failed for the entity being processed.
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// The remote graph could not be fetched for the entity being processed.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// A libgit2 operation failed (remote config, branch lookup/deletion).
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// A `git` subprocess (clone/fetch) exited non-zero.
    #[error("`git {args}` failed in {path}: {stderr}")]
    GitCommand {
        args: String,
        path: PathBuf,
        stderr: String,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failed (terminal gone).
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
