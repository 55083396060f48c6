//! Typed hubsync configuration.
//!
//! Loaded from `~/.hubsync.yaml` (override with `--config`). The schema is
//! strict: unknown keys in any section are a hard [`ConfigError`], and
//! booleans must be the YAML literals `true`/`false` — loose spellings like
//! `"False"` are rejected at parse time, never coerced.
//!
//! ```yaml
//! github:
//!   api_url: https://api.github.com
//!   token: ghp_xxx
//! workspace:
//!   path: /home/me/code
//! org:
//!   pre: "echo entering org"
//! global:
//!   interactive: true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Filename of the per-user configuration, resolved under the home directory.
pub const CONFIG_FILE_NAME: &str = ".hubsync.yaml";

/// Structured configuration for the whole application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub org: HookConfig,
    #[serde(default)]
    pub repo: HookConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// `[github]` — API endpoint and credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// `[workspace]` — where the local org/repo tree lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Root directory containing one subdirectory per organization.
    pub path: PathBuf,
}

/// Pre/post hook commands for one reconciliation level (`[org]` / `[repo]`).
///
/// Empty strings are no-ops. Hooks run through the shell with the working
/// directory set to the org/repo being processed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    #[serde(default)]
    pub pre: String,
    #[serde(default)]
    pub post: String,
}

/// `[global]` — behaviour toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// When false, prompts are bypassed and defaults apply silently.
    #[serde(default = "default_true")]
    pub interactive: bool,
    /// Include the authenticated user's own account as an organization.
    #[serde(default = "default_true")]
    pub sync_user: bool,
    /// Reserved: fork wiring/sync is a documented no-op.
    #[serde(default)]
    pub fork_repos: bool,
    /// Match entity names case-sensitively.
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            sync_user: true,
            fork_repos: false,
            case_sensitive: true,
        }
    }
}

/// `<home>/.hubsync.yaml` (via `dirs::home_dir()`).
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Load and validate the configuration at `path`.
///
/// Returns `ConfigError::NotFound` if absent, `ConfigError::Parse` (with
/// path + line context) for malformed YAML or unrecognized keys.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
