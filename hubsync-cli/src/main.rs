//! hubsync — keep a local workspace mirrored against GitHub.
//!
//! # Usage
//!
//! ```text
//! hubsync sync [--config <path>] [--non-interactive]
//! hubsync status [--config <path>] [--json]
//! ```
//!
//! The workspace layout is `<root>/<organization>/<repository>`; `sync`
//! reconciles it against the organizations and repositories visible to the
//! configured GitHub account, and `status` reports the differences without
//! changing anything.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{status::StatusArgs, sync::SyncArgs};

#[derive(Parser, Debug)]
#[command(
    name = "hubsync",
    version,
    about = "Mirror a local org/repo workspace against GitHub",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile the local workspace against the remote.
    Sync(SyncArgs),

    /// Show local/remote differences without changing anything.
    Status(StatusArgs),
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}
