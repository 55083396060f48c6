//! `hubsync sync` — reconcile the workspace against the remote.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hubsync_github::Api;
use hubsync_sync::{ConsolePrompt, SyncReport};

/// Arguments for `hubsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the configuration file (default: ~/.hubsync.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Never prompt; apply every default answer silently.
    #[arg(long)]
    pub non_interactive: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config(self.config)?;

        let api = Api::new(
            config.github.api_url.clone(),
            config.github.token.clone(),
            config.global.sync_user,
        );
        let interactive = config.global.interactive && !self.non_interactive;
        let mut prompt = ConsolePrompt::new(interactive);

        let report =
            hubsync_sync::sync(&config, &api, &mut prompt).context("reconciliation failed")?;
        print_report(&report);

        if report.failures.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("{} entries failed to sync", report.failures.len())
        }
    }
}

fn print_report(report: &SyncReport) {
    if report.is_noop() {
        println!("{}", "Workspace is in sync; nothing to do.".green());
        return;
    }

    print_section("Organizations created", &report.orgs_created);
    print_section("Organizations deleted", &report.orgs_deleted);
    print_section("Repositories cloned", &report.repos_cloned);
    print_section("Repositories deleted", &report.repos_deleted);
    print_section("Branches pruned", &report.branches_pruned);

    if !report.failures.is_empty() {
        println!("{}", "Failures:".red().bold());
        for failure in &report.failures {
            println!("  {} {}: {}", "✗".red(), failure.subject, failure.reason);
        }
    }
}

fn print_section(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!("{} ({}):", title.bold(), entries.len());
    for entry in entries {
        println!("  {} {}", "•".green(), entry);
    }
}
