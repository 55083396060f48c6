//! The HTTP client and its `RemoteSource` implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use hubsync_core::{RemoteError, RemoteFork, RemoteOrg, RemoteRepo, RemoteSource};

use crate::payload::{
    decode, fork_from_payload, org_from_payload, repo_from_payload, ForkPayload, ListingStub,
    OrgPayload, RepoPayload,
};

/// Client for a GitHub-compatible REST API.
///
/// All traffic goes through [`Api::get`]; responses are cached for the
/// lifetime of the client so the listing→detail traversal never fetches the
/// same URL twice in one run.
pub struct Api {
    agent: ureq::Agent,
    api_url: String,
    token: Option<String>,
    sync_user: bool,
    cache: RefCell<HashMap<String, Value>>,
}

impl Api {
    /// `api_url` without a trailing slash, e.g. `https://api.github.com`.
    /// When `sync_user` is set, the authenticated user's own account is
    /// reported as an organization alongside `/user/orgs`.
    pub fn new(api_url: impl Into<String>, token: Option<String>, sync_user: bool) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
            sync_user,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// GET `url` and parse the body as JSON, consulting the per-run cache.
    pub fn get(&self, url: &str) -> Result<Value, RemoteError> {
        if let Some(cached) = self.cache.borrow().get(url) {
            tracing::trace!("cache hit: {url}");
            return Ok(cached.clone());
        }

        tracing::debug!("GET {url}");
        let mut request = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("token {token}"));
        }

        let response = request.call().map_err(|e| RemoteError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let body: Value = response.into_json().map_err(|e| RemoteError::Malformed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.cache
            .borrow_mut()
            .insert(url.to_string(), body.clone());
        Ok(body)
    }

    fn get_as<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        let body = self.get(url)?;
        decode(url, body)
    }
}

impl RemoteSource for Api {
    fn organizations(&self) -> Result<Vec<RemoteOrg>, RemoteError> {
        let mut orgs = Vec::new();

        if self.sync_user {
            let user_url = format!("{}/user", self.api_url);
            let payload: OrgPayload = self.get_as(&user_url)?;
            orgs.push(org_from_payload(&user_url, payload));
        }

        let listing_url = format!("{}/user/orgs", self.api_url);
        let stubs: Vec<ListingStub> = self.get_as(&listing_url)?;
        for stub in stubs {
            let payload: OrgPayload = self.get_as(&stub.url)?;
            orgs.push(org_from_payload(&stub.url, payload));
        }

        tracing::info!("remote has {} organizations", orgs.len());
        Ok(orgs)
    }

    fn repos(&self, org: &RemoteOrg) -> Result<Vec<RemoteRepo>, RemoteError> {
        let detail: OrgPayload = self.get_as(&org.url)?;
        let stubs: Vec<ListingStub> = self.get_as(&detail.repos_url)?;

        let mut repos = Vec::new();
        for stub in stubs {
            let payload: RepoPayload = self.get_as(&stub.url)?;
            repos.push(repo_from_payload(&stub.url, payload)?);
        }
        tracing::debug!("organization {} has {} repos", org.name, repos.len());
        Ok(repos)
    }

    fn forks(&self, repo: &RemoteRepo) -> Result<Vec<RemoteFork>, RemoteError> {
        let detail: RepoPayload = self.get_as(&repo.url)?;
        let payloads: Vec<ForkPayload> = self.get_as(&detail.forks_url)?;
        payloads
            .into_iter()
            .map(|p| fork_from_payload(&detail.forks_url, p))
            .collect()
    }
}
