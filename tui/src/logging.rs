use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FREEBIES_LOG";

/// Log file path (~/.cache/freebies/freebies.log)
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("freebies").join("freebies.log"))
}

/// Route tracing output to a file so it never draws over the terminal UI.
pub fn init() -> Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("opening {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}
