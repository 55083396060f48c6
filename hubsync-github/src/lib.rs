//! # hubsync-github
//!
//! GitHub-style REST client backing the [`RemoteSource`] trait.
//!
//! The traversal mirrors the hosting API's conventional shape: the org
//! listing returns stubs carrying a detail `url`, each detail document
//! carries a `repos_url`, each repo document a `forks_url`. Everything goes
//! through a single [`Api::get`] primitive with an optional per-run cache.
//!
//! [`RemoteSource`]: hubsync_core::RemoteSource

mod api;
mod payload;

pub use api::Api;
