//! Process-wide logging setup.
//!
//! Logging is an explicitly constructed component rather than a lazily
//! attached global: the host calls [`init`] once, and repeated calls are
//! no-ops guarded by an initialized flag. Records go to an append-mode file
//! whose directory and filename come from the environment, serialized by a
//! mutex writer so interleaved calls cannot corrupt lines.
//!
//! Purely observability — nothing in the functional contract depends on it.

use crate::error::QaError;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Where log records are written. Read from `LOG_DIR` / `LOG_FILE`, with
/// `logs/app.log` as the default.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file: "app.log".to_string(),
        }
    }
}

impl LogConfig {
    /// Build a config from `LOG_DIR` and `LOG_FILE`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dir: std::env::var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            file: std::env::var("LOG_FILE").unwrap_or(defaults.file),
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

/// Install the process-wide subscriber writing to the configured log file.
///
/// INFO is the default level; `RUST_LOG` overrides it. Idempotent: the first
/// call wins, later calls (including from other threads) return `Ok` without
/// touching the existing subscriber.
pub fn init(config: &LogConfig) -> Result<(), QaError> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    fs::create_dir_all(&config.dir).map_err(QaError::Logging)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.path())
        .map_err(QaError::Logging)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
