//! # hubsync-workspace
//!
//! Local workspace scanner.
//!
//! A workspace is a directory tree two levels deep:
//!
//! ```text
//! <workspace root>/
//!   <organization>/
//!     <repository>/     (must be a valid git checkout)
//! ```
//!
//! [`Workspace::organizations`] lists the first level,
//! [`LocalOrg::repos`] the second. Scanning is read-only; all mutation
//! (mkdir, clone, rmtree) happens in the reconciler.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::WorkspaceError;

/// The root of the local workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// One [`LocalOrg`] per immediate subdirectory, sorted by name.
    ///
    /// Dot-directories are skipped. Returns `WorkspaceError::InvalidPath`
    /// if the root is missing or not a directory.
    pub fn organizations(&self) -> Result<Vec<LocalOrg>, WorkspaceError> {
        let mut orgs: Vec<LocalOrg> = sub_directories(&self.root)?
            .into_iter()
            .map(|(name, path)| LocalOrg { name, path })
            .collect();
        orgs.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "scanned workspace {}: {} organizations",
            self.root.display(),
            orgs.len()
        );
        Ok(orgs)
    }
}

/// A local organization: a named top-level directory in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOrg {
    pub name: String,
    pub path: PathBuf,
}

impl LocalOrg {
    /// One [`LocalRepo`] per subdirectory, sorted by name.
    ///
    /// Every subdirectory must open as a git repository; a plain directory
    /// inside an organization is a `WorkspaceError::NotARepository`.
    pub fn repos(&self) -> Result<Vec<LocalRepo>, WorkspaceError> {
        let mut repos = Vec::new();
        for (name, path) in sub_directories(&self.path)? {
            git2::Repository::open(&path).map_err(|source| WorkspaceError::NotARepository {
                path: path.clone(),
                source,
            })?;
            repos.push(LocalRepo { name, path });
        }
        repos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(repos)
    }
}

/// A local repository: a git checkout inside an organization directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepo {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of `path` as `(name, path)`, dot-entries skipped.
fn sub_directories(path: &Path) -> Result<Vec<(String, PathBuf)>, WorkspaceError> {
    if !path.is_dir() {
        return Err(WorkspaceError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        dirs.push((name, entry.path()));
    }
    Ok(dirs)
}
