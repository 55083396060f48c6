//! Error types for hubsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading configuration.
///
/// Every variant is fatal at startup — hubsync never reconciles against a
/// half-understood configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error on load — includes file path and line context from
    /// serde_yaml. Unknown keys in any section surface here.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.hubsync.yaml`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The configuration file did not exist at the expected path.
    #[error("configuration not found at {path}")]
    NotFound { path: PathBuf },
}

/// Failures talking to the remote hosting service.
///
/// These are never fatal for a whole run: the org/repo pairing being
/// resolved fails and is reported, the run continues with its siblings.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request itself failed (network error, non-2xx status, rate limit).
    #[error("remote request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}
