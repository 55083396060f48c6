pub mod status;
pub mod sync;

use std::path::PathBuf;

use anyhow::{Context, Result};
use hubsync_core::{config, Config};

/// Load the configuration from `--config` or the default location.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => config::default_path()?,
    };
    config::load(&path).with_context(|| format!("failed to load {}", path.display()))
}
