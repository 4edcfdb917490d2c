//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so log output goes to
//! `<dir>/unsplash-tui.log` instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "unsplash-tui.log";

const DEFAULT_FILTER: &str = "unsplash_tui=info";

/// Returned by [`init_logging`]; carries the path of the active log file.
#[derive(Debug)]
pub struct LogGuard {
    pub path: PathBuf,
}

/// Directory used when no log dir is configured.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("unsplash-tui"))
}

/// Create the log directory and open the log file for appending.
pub fn open_log_file(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Install the global subscriber. The filter comes from `RUST_LOG`.
///
/// Returns `Ok(None)` when no log directory can be determined; the app
/// then runs without logging.
pub fn init_logging(dir: Option<&Path>) -> io::Result<Option<LogGuard>> {
    let Some(dir) = dir.map(Path::to_path_buf).or_else(default_log_dir) else {
        return Ok(None);
    };
    let (file, path) = open_log_file(&dir)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_err() {
        // A subscriber was already set (tests, embedding); keep it.
        return Ok(None);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "logging started");
    Ok(Some(LogGuard { path }))
}
