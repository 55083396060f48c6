//! `hubsync status` — read-only local/remote difference report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use hubsync_core::{Config, RemoteSource};
use hubsync_github::Api;
use hubsync_sync::zip_pairs;
use hubsync_workspace::Workspace;

/// Arguments for `hubsync status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to the configuration file (default: ~/.hubsync.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config(self.config)?;
        let api = Api::new(
            config.github.api_url.clone(),
            config.github.token.clone(),
            config.global.sync_user,
        );

        let rows = build_report(&config, &api)?;
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize status JSON")?
            );
            return Ok(());
        }
        print_table(rows);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct StatusRow {
    #[tabled(rename = "organization")]
    org: String,
    #[tabled(rename = "repository")]
    repo: String,
    state: &'static str,
}

/// Pair orgs and repos exactly as `sync` would, but only record the outcome.
fn build_report(config: &Config, source: &dyn RemoteSource) -> Result<Vec<StatusRow>> {
    let workspace = Workspace::new(&config.workspace.path);
    let locals = workspace
        .organizations()
        .context("failed to scan workspace")?;
    let remotes = source
        .organizations()
        .context("failed to list remote organizations")?;

    let key = |name: &str| {
        if config.global.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    };

    let mut rows = Vec::new();
    let pairs = zip_pairs(locals, remotes, |o| key(&o.name), |o| key(&o.name));
    for pair in pairs {
        match (pair.local, pair.remote) {
            (Some(local), None) => rows.push(StatusRow {
                org: local.name,
                repo: "-".to_string(),
                state: "local only",
            }),
            (None, Some(remote)) => rows.push(StatusRow {
                org: remote.name,
                repo: "-".to_string(),
                state: "remote only",
            }),
            (Some(local), Some(remote)) => {
                let local_repos = local
                    .repos()
                    .with_context(|| format!("failed to scan organization {}", local.name))?;
                let remote_repos = source
                    .repos(&remote)
                    .with_context(|| format!("failed to list repos of {}", remote.name))?;
                let repo_pairs =
                    zip_pairs(local_repos, remote_repos, |r| key(&r.name), |r| key(&r.name));
                for repo_pair in repo_pairs {
                    match (repo_pair.local, repo_pair.remote) {
                        (Some(repo), None) => rows.push(StatusRow {
                            org: local.name.clone(),
                            repo: repo.name,
                            state: "local only",
                        }),
                        (None, Some(repo)) => rows.push(StatusRow {
                            org: local.name.clone(),
                            repo: repo.name,
                            state: "remote only",
                        }),
                        (Some(repo), Some(_)) => rows.push(StatusRow {
                            org: local.name.clone(),
                            repo: repo.name,
                            state: "in sync",
                        }),
                        (None, None) => {}
                    }
                }
            }
            (None, None) => {}
        }
    }
    Ok(rows)
}

fn print_table(rows: Vec<StatusRow>) {
    let pending = rows.iter().filter(|r| r.state != "in sync").count();
    println!(
        "hubsync v{} | {} entries | {} pending",
        env!("CARGO_PKG_VERSION"),
        rows.len(),
        pending,
    );

    if rows.is_empty() {
        println!("Workspace and remote are both empty.");
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if pending > 0 {
        println!("{}", "Run 'hubsync sync' to reconcile.".yellow());
    } else {
        println!("{}", "Everything is in sync.".green());
    }
}
