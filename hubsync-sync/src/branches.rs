//! Branch hygiene: prune local branches fully contained in the primary
//! branch's history.
//!
//! A branch is stale iff it has zero commits ahead of `origin/<primary>`
//! and at least one commit behind it — a strict, non-empty ancestor with no
//! unique work. Branches with any unique commit are never touched, however
//! far behind they are.

use std::path::Path;

use git2::{BranchType, Repository};

use crate::error::SyncError;
use crate::prompt::Prompt;

/// Parameters for the staleness check.
#[derive(Debug, Clone)]
pub struct BranchOptions {
    /// Name of the primary integration branch on `origin`.
    pub primary: String,
}

impl Default for BranchOptions {
    fn default() -> Self {
        Self {
            primary: "master".to_string(),
        }
    }
}

/// Scan local branches and delete confirmed stale ones (default: accept).
///
/// Returns the names of deleted branches. Repositories without an
/// `origin/<primary>` reference are skipped entirely — there is nothing to
/// measure staleness against.
pub fn prune_stale_branches(
    repo_path: &Path,
    options: &BranchOptions,
    prompt: &mut dyn Prompt,
) -> Result<Vec<String>, SyncError> {
    let repo = Repository::open(repo_path)?;

    let primary_ref = format!("refs/remotes/origin/{}", options.primary);
    let primary_oid = match repo.find_reference(&primary_ref) {
        Ok(reference) => reference.peel_to_commit()?.id(),
        Err(_) => {
            tracing::debug!(
                "{}: no {} reference, skipping branch hygiene",
                repo_path.display(),
                primary_ref
            );
            return Ok(Vec::new());
        }
    };

    // Collect names first; deleting while iterating invalidates the walk.
    let mut local_branches = Vec::new();
    for entry in repo.branches(Some(BranchType::Local))? {
        let (branch, _) = entry?;
        let is_head = branch.is_head();
        if let Some(name) = branch.name()?.map(String::from) {
            local_branches.push((name, is_head));
        }
    }

    let mut deleted = Vec::new();
    for (name, is_head) in local_branches {
        let branch = repo.find_branch(&name, BranchType::Local)?;
        let Some(branch_oid) = branch.get().target() else {
            continue;
        };
        let (ahead, behind) = repo.graph_ahead_behind(branch_oid, primary_oid)?;
        if ahead > 0 || behind == 0 {
            continue;
        }

        if is_head {
            tracing::warn!(
                "branch {name} is stale but checked out; leaving it in place"
            );
            continue;
        }

        println!(
            "Found stale branch {name} locally ({behind} behind origin/{}).",
            options.primary
        );
        if prompt.confirm("Delete locally?", true)? {
            let mut branch = repo.find_branch(&name, BranchType::Local)?;
            branch.delete()?;
            tracing::info!("deleted stale branch {name}");
            deleted.push(name);
        }
    }
    Ok(deleted)
}
