//! File logging.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log lines go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const DEFAULT_LOG_FILE: &str = "tui-tetromino.log";

/// Log file used when none is configured.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Install the global logger, appending to `path`. Filter from `RUST_LOG`,
/// `info` when unset.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_module_path(false)
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
