//! The org- and repo-level reconcilers.
//!
//! Control flows top-down, synchronously, one organization and one
//! repository at a time:
//!
//! ```text
//! run
//!   └─ per org pair: skip / prompt-and-delete / prompt-and-create
//!        └─ sync_org (org pre-hook ... org post-hook)
//!             └─ per repo pair: skip / prompt-and-delete / prompt-and-clone
//!                  └─ sync_repo (repo pre-hook, wiring, hygiene, post-hook)
//! ```
//!
//! A failure while processing one org or repo is recorded in the report and
//! the run continues with the next sibling. Destructive defaults are
//! conservative (delete: no); additive defaults are permissive (clone: yes).

use std::fs;

use hubsync_core::{Config, RemoteOrg, RemoteRepo, RemoteSource};
use hubsync_workspace::{LocalOrg, LocalRepo, Workspace};

use crate::branches::{prune_stale_branches, BranchOptions};
use crate::error::{io_err, SyncError};
use crate::hooks::run_hook;
use crate::pair::zip_pairs;
use crate::prompt::Prompt;
use crate::remotes::{clone_repo, wire_remotes};

use hubsync_core::config::HookConfig;

// ---------------------------------------------------------------------------
// Options and report
// ---------------------------------------------------------------------------

/// Engine knobs derived from the loaded configuration.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub case_sensitive: bool,
    pub fork_repos: bool,
    pub org_hooks: HookConfig,
    pub repo_hooks: HookConfig,
    pub branch: BranchOptions,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            fork_repos: false,
            org_hooks: HookConfig::default(),
            repo_hooks: HookConfig::default(),
            branch: BranchOptions::default(),
        }
    }
}

impl SyncOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            case_sensitive: config.global.case_sensitive,
            fork_repos: config.global.fork_repos,
            org_hooks: config.org.clone(),
            repo_hooks: config.repo.clone(),
            branch: BranchOptions::default(),
        }
    }
}

/// One org or repo whose processing failed; siblings continued.
#[derive(Debug, Clone)]
pub struct SyncFailure {
    /// `<org>` or `<org>/<repo>`.
    pub subject: String,
    pub reason: String,
}

/// Summary of everything a run changed (or failed to change).
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub orgs_created: Vec<String>,
    pub orgs_deleted: Vec<String>,
    pub repos_cloned: Vec<String>,
    pub repos_deleted: Vec<String>,
    pub branches_pruned: Vec<String>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// True when the run neither changed anything nor hit a failure.
    pub fn is_noop(&self) -> bool {
        self.orgs_created.is_empty()
            && self.orgs_deleted.is_empty()
            && self.repos_cloned.is_empty()
            && self.repos_deleted.is_empty()
            && self.branches_pruned.is_empty()
            && self.failures.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

/// Applies the three-way policy to every org/repo pairing.
pub struct Reconciler<'a> {
    source: &'a dyn RemoteSource,
    prompt: &'a mut dyn Prompt,
    options: SyncOptions,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        source: &'a dyn RemoteSource,
        prompt: &'a mut dyn Prompt,
        options: SyncOptions,
    ) -> Self {
        Self {
            source,
            prompt,
            options,
        }
    }

    /// One full reconciliation pass over the workspace.
    pub fn run(&mut self, workspace: &Workspace) -> Result<SyncReport, SyncError> {
        let locals = workspace.organizations()?;
        let remotes = self.source.organizations()?;
        tracing::info!(
            "reconciling {} local against {} remote organizations",
            locals.len(),
            remotes.len()
        );

        let case_sensitive = self.options.case_sensitive;
        let pairs = zip_pairs(
            locals,
            remotes,
            |org| match_key(&org.name, case_sensitive),
            |org| match_key(&org.name, case_sensitive),
        );

        let mut report = SyncReport::default();
        for pair in pairs {
            match (pair.local, pair.remote) {
                (Some(local), None) => {
                    println!(
                        "Found organization {} locally but not on the remote.",
                        local.name
                    );
                    if self.prompt.confirm("Delete locally?", false)? {
                        fs::remove_dir_all(&local.path).map_err(|e| io_err(&local.path, e))?;
                        tracing::info!("deleted organization directory {}", local.path.display());
                        report.orgs_deleted.push(local.name);
                    }
                }
                (None, Some(remote)) => {
                    println!(
                        "Found organization {} on the remote but not locally.",
                        remote.name
                    );
                    if !self.prompt.confirm("Create locally?", true)? {
                        continue;
                    }
                    let path = workspace.root().join(&remote.name);
                    fs::create_dir(&path).map_err(|e| io_err(&path, e))?;
                    report.orgs_created.push(remote.name.clone());
                    let local = LocalOrg {
                        name: remote.name.clone(),
                        path,
                    };
                    self.descend_org(&local, &remote, &mut report);
                }
                (Some(local), Some(remote)) => {
                    self.descend_org(&local, &remote, &mut report);
                }
                (None, None) => {} // zip_pairs never emits an empty pair
            }
        }
        Ok(report)
    }

    /// Hook-wrapped descent into one resolved organization pairing.
    /// Errors are recorded; the caller moves on to the next sibling.
    fn descend_org(&mut self, local: &LocalOrg, remote: &RemoteOrg, report: &mut SyncReport) {
        run_hook(&self.options.org_hooks.pre, &local.path);
        if let Err(e) = self.sync_org(local, remote, report) {
            tracing::error!("organization {} failed: {e}", local.name);
            report.failures.push(SyncFailure {
                subject: local.name.clone(),
                reason: e.to_string(),
            });
        }
        run_hook(&self.options.org_hooks.post, &local.path);
    }

    /// Pair and reconcile the repositories of one organization.
    fn sync_org(
        &mut self,
        local_org: &LocalOrg,
        remote_org: &RemoteOrg,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        tracing::info!("syncing organization {}", local_org.name);
        let locals = local_org.repos()?;
        let remotes = self.source.repos(remote_org)?;

        let case_sensitive = self.options.case_sensitive;
        let pairs = zip_pairs(
            locals,
            remotes,
            |repo| match_key(&repo.name, case_sensitive),
            |repo| match_key(&repo.name, case_sensitive),
        );

        for pair in pairs {
            match (pair.local, pair.remote) {
                (Some(local), None) => {
                    println!(
                        "Found repo {} locally but not on the remote.",
                        local.name
                    );
                    if self.prompt.confirm("Delete locally?", false)? {
                        fs::remove_dir_all(&local.path).map_err(|e| io_err(&local.path, e))?;
                        tracing::info!("deleted repo directory {}", local.path.display());
                        report
                            .repos_deleted
                            .push(format!("{}/{}", local_org.name, local.name));
                    }
                }
                (None, Some(remote)) => {
                    println!(
                        "Found repo {} on the remote but not locally.",
                        remote.name
                    );
                    if !self.prompt.confirm("Clone locally?", true)? {
                        continue;
                    }
                    let subject = format!("{}/{}", local_org.name, remote.name);
                    match clone_repo(&remote.clone_url, &local_org.path, &remote.name) {
                        Ok(()) => {
                            report.repos_cloned.push(subject);
                            let local = LocalRepo {
                                name: remote.name.clone(),
                                path: local_org.path.join(&remote.name),
                            };
                            self.descend_repo(local_org, &local, &remote, report);
                        }
                        Err(e) => {
                            tracing::error!("clone of {subject} failed: {e}");
                            report.failures.push(SyncFailure {
                                subject,
                                reason: e.to_string(),
                            });
                        }
                    }
                }
                (Some(local), Some(remote)) => {
                    self.descend_repo(local_org, &local, &remote, report);
                }
                (None, None) => {}
            }
        }
        Ok(())
    }

    /// Hook-wrapped wiring + hygiene for one resolved repository pairing.
    fn descend_repo(
        &mut self,
        org: &LocalOrg,
        local: &LocalRepo,
        remote: &RemoteRepo,
        report: &mut SyncReport,
    ) {
        let subject = format!("{}/{}", org.name, local.name);
        run_hook(&self.options.repo_hooks.pre, &local.path);
        if let Err(e) = self.sync_repo(local, remote, &subject, report) {
            tracing::error!("repo {subject} failed: {e}");
            report.failures.push(SyncFailure {
                subject,
                reason: e.to_string(),
            });
        }
        run_hook(&self.options.repo_hooks.post, &local.path);
    }

    fn sync_repo(
        &mut self,
        local: &LocalRepo,
        remote: &RemoteRepo,
        subject: &str,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        tracing::info!("syncing repo {subject}");
        wire_remotes(&local.path, &remote.clone_url)?;

        let pruned = prune_stale_branches(&local.path, &self.options.branch, self.prompt)?;
        report
            .branches_pruned
            .extend(pruned.into_iter().map(|b| format!("{subject}:{b}")));

        if self.options.fork_repos {
            // Fork-remote setup and fork-branch sync are not implemented.
            tracing::debug!("fork synchronization requested for {subject}; not implemented");
        }
        Ok(())
    }
}

/// The name-equality join key, optionally case-folded.
fn match_key(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

/// Run a full reconciliation pass with settings taken from `config`.
pub fn sync(
    config: &Config,
    source: &dyn RemoteSource,
    prompt: &mut dyn Prompt,
) -> Result<SyncReport, SyncError> {
    let workspace = Workspace::new(&config.workspace.path);
    Reconciler::new(source, prompt, SyncOptions::from_config(config)).run(&workspace)
}
