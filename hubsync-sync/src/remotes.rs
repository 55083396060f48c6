//! Remote wiring for a resolved repository pairing.
//!
//! Every synced checkout ends up with two remotes bound to the canonical
//! clone URL:
//!
//! - `origin` — fetch-enabled, pushes disabled by pointing the push URL at
//!   a sentinel git cannot resolve;
//! - `upstream` — fetch-enabled, unrestricted.
//!
//! The operation is idempotent: re-running it on a correctly-configured
//! repository changes nothing besides re-fetching. Fork-remote setup is an
//! unimplemented extension point (see [`crate::reconcile`]).
//!
//! Remote inspection and configuration go through libgit2; the network
//! operations (clone, fetch) shell out to `git` so the operator's normal
//! credential helpers apply.

use std::path::Path;
use std::process::Command;

use git2::Repository;

use crate::error::{io_err, SyncError};

/// Push URL assigned to `origin`; git fails fast on any accidental push.
pub const NOPUSH_SENTINEL: &str = "nopush";

/// Ensure `origin` and `upstream` point at `clone_url` and fetch both.
pub fn wire_remotes(repo_path: &Path, clone_url: &str) -> Result<(), SyncError> {
    let repo = Repository::open(repo_path)?;

    ensure_remote(&repo, "origin", clone_url)?;
    repo.remote_set_pushurl("origin", Some(NOPUSH_SENTINEL))?;
    fetch(repo_path, "origin")?;

    ensure_remote(&repo, "upstream", clone_url)?;
    fetch(repo_path, "upstream")?;

    Ok(())
}

/// Create the remote if absent; an existing remote is left as configured.
fn ensure_remote(repo: &Repository, name: &str, url: &str) -> Result<(), SyncError> {
    if repo.find_remote(name).is_ok() {
        return Ok(());
    }
    tracing::info!("creating remote {name} -> {url}");
    repo.remote(name, url)?;
    Ok(())
}

/// `git fetch <remote>` in `repo_path`.
pub(crate) fn fetch(repo_path: &Path, remote: &str) -> Result<(), SyncError> {
    run_git(repo_path, &["fetch", remote])
}

/// `git clone <url> <name>` with `parent` as the working directory.
pub(crate) fn clone_repo(clone_url: &str, parent: &Path, name: &str) -> Result<(), SyncError> {
    run_git(parent, &["clone", clone_url, name])
}

fn run_git(cwd: &Path, args: &[&str]) -> Result<(), SyncError> {
    tracing::debug!("git {} (in {})", args.join(" "), cwd.display());
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| io_err(cwd, e))?;
    if !output.status.success() {
        return Err(SyncError::GitCommand {
            args: args.join(" "),
            path: cwd.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
