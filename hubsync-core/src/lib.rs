//! # hubsync-core
//!
//! Shared domain types, configuration, and error taxonomy for hubsync.
//!
//! The reconciliation engine consumes remote entities through the
//! [`RemoteSource`] capability trait defined here; `hubsync-github`
//! provides the HTTP-backed implementation.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, RemoteError};
pub use types::{RemoteFork, RemoteOrg, RemoteRepo, RemoteSource};
