//! Remote entity descriptors and the `RemoteSource` capability trait.
//!
//! Remote descriptors are immutable snapshots of API responses; the engine
//! never mutates them. Entity names are the sole matching key during
//! reconciliation — URLs are opaque locations.

use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// A remote organization: a named grouping of repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOrg {
    pub name: String,
    /// API detail URL for this organization (used to resolve its repo list).
    pub url: String,
}

/// A remote repository descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepo {
    pub name: String,
    /// Owning organization (or user) name.
    pub owner: String,
    /// URL suitable for `git clone`.
    pub clone_url: String,
    /// API detail URL for this repository (used to resolve its fork list).
    pub url: String,
}

/// A remote-side fork of a repository, owned by a different account.
///
/// Fork wiring is an unimplemented extension point; the descriptor exists
/// so the API surface is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFork {
    pub name: String,
    pub clone_url: String,
}

/// Capability interface over the remote hosting service's org/repo graph.
///
/// Implementations may cache per-run to avoid refetching the same URL;
/// correctness never depends on caching. All methods are read-only.
pub trait RemoteSource {
    /// Every organization visible to the configured account.
    fn organizations(&self) -> Result<Vec<RemoteOrg>, RemoteError>;

    /// Repositories belonging to `org`.
    fn repos(&self, org: &RemoteOrg) -> Result<Vec<RemoteRepo>, RemoteError>;

    /// Forks of `repo` owned by other accounts.
    fn forks(&self, repo: &RemoteRepo) -> Result<Vec<RemoteFork>, RemoteError>;
}
