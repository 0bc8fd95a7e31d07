//! Command-line arguments and resolved runtime configuration.
//!
//! # Invariants
//! - `AppConfig::log_dir` is always absolute.

use activity_core::default_log_level;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "activities.sqlite3";

/// Interactive tracker for tasks and events.
#[derive(Debug, Parser)]
#[command(name = "activity", version, about)]
pub struct Args {
    /// Where activities are kept.
    #[arg(long, value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// SQLite file used by `--store sqlite`.
    #[arg(long, default_value = DEFAULT_DB_FILE_NAME)]
    pub db_path: PathBuf,

    /// trace|debug|info|warn|error. Defaults to debug for debug builds, info otherwise.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Process-lifetime list; nothing is written to disk.
    Memory,
    /// SQLite file that survives restarts.
    Sqlite,
}

/// Runtime configuration resolved from `Args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreKind,
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves defaults; relative paths are anchored at `cwd`.
    pub fn resolve(args: Args, cwd: &Path) -> Self {
        let log_dir = args
            .log_dir
            .unwrap_or_else(|| std::env::temp_dir().join("activity_tracker").join("logs"));

        Self {
            store: args.store,
            db_path: absolutize(args.db_path, cwd),
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: absolutize(log_dir, cwd),
        }
    }

    /// The log directory as UTF-8, which the logging bootstrap requires.
    pub fn log_dir_utf8(&self) -> Result<&str, String> {
        self.log_dir.to_str().ok_or_else(|| {
            format!(
                "log directory `{}` is not valid UTF-8",
                self.log_dir.display()
            )
        })
    }
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
