//! Pre/post hook execution.
//!
//! Hooks are arbitrary shell commands configured per reconciliation level.
//! They run with the child's working directory set explicitly to the org or
//! repo being processed — the process-global CWD is never touched. Failures
//! are reported and ignored: a broken hook never blocks a sync step.

use std::path::Path;
use std::process::Command;

/// Run `command` through `sh -c` with `cwd` as the working directory.
///
/// An empty or whitespace-only command is a no-op.
pub fn run_hook(command: &str, cwd: &Path) {
    if command.trim().is_empty() {
        return;
    }
    tracing::debug!("running hook '{}' in {}", command, cwd.display());
    match Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!("hook '{}' exited with {}", command, status);
        }
        Err(e) => {
            tracing::warn!("hook '{}' could not be started: {}", command, e);
        }
    }
}
