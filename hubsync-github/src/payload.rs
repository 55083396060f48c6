//! Wire payloads and their conversion into core descriptors.

use serde::Deserialize;
use serde_json::Value;

use hubsync_core::{RemoteError, RemoteFork, RemoteOrg, RemoteRepo};

/// Stub entry in a listing response — only the detail URL matters.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingStub {
    pub url: String,
}

/// Organization detail document (`/orgs/<name>` or `/user`).
#[derive(Debug, Deserialize)]
pub(crate) struct OrgPayload {
    pub login: String,
    pub repos_url: String,
}

/// Repository detail document.
#[derive(Debug, Deserialize)]
pub(crate) struct RepoPayload {
    pub name: String,
    pub owner: OwnerPayload,
    pub ssh_url: Option<String>,
    pub clone_url: Option<String>,
    pub forks_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerPayload {
    pub login: String,
}

/// Fork entry in a `forks_url` listing.
#[derive(Debug, Deserialize)]
pub(crate) struct ForkPayload {
    pub name: String,
    pub ssh_url: Option<String>,
    pub clone_url: Option<String>,
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    url: &str,
    body: Value,
) -> Result<T, RemoteError> {
    serde_json::from_value(body).map_err(|e| RemoteError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn org_from_payload(url: &str, payload: OrgPayload) -> RemoteOrg {
    RemoteOrg {
        name: payload.login,
        url: url.to_string(),
    }
}

/// Prefer `ssh_url` so clones go over SSH, fall back to `clone_url`;
/// a repo with neither is malformed.
pub(crate) fn repo_from_payload(url: &str, payload: RepoPayload) -> Result<RemoteRepo, RemoteError> {
    let clone_url = payload
        .ssh_url
        .or(payload.clone_url)
        .ok_or_else(|| RemoteError::Malformed {
            url: url.to_string(),
            reason: "repository has neither ssh_url nor clone_url".to_string(),
        })?;
    Ok(RemoteRepo {
        name: payload.name,
        owner: payload.owner.login,
        clone_url,
        url: url.to_string(),
    })
}

pub(crate) fn fork_from_payload(url: &str, payload: ForkPayload) -> Result<RemoteFork, RemoteError> {
    let clone_url = payload
        .ssh_url
        .or(payload.clone_url)
        .ok_or_else(|| RemoteError::Malformed {
            url: url.to_string(),
            reason: "fork has neither ssh_url nor clone_url".to_string(),
        })?;
    Ok(RemoteFork {
        name: payload.name,
        clone_url,
    })
}
