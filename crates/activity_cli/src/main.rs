//! Console entry point for the activity tracker.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the selected store.
//! - Hand stdin/stdout to the menu loop.

mod config;
mod console;

use activity_core::db::open_db;
use activity_core::{
    init_logging, ActivityService, ActivityStore, MemoryActivityStore, SqliteActivityStore,
};
use clap::Parser;
use config::{AppConfig, Args, StoreKind};
use console::Console;
use log::{error, info};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
    let config = AppConfig::resolve(Args::parse(), &cwd);

    let logging = config
        .log_dir_utf8()
        .and_then(|log_dir| init_logging(&config.log_level, log_dir));
    if let Err(err) = logging {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    info!(
        "event=session_start module=cli status=ok store={:?} version={}",
        config.store,
        activity_core::core_version()
    );

    match config.store {
        StoreKind::Memory => serve(ActivityService::new(MemoryActivityStore::new())),
        StoreKind::Sqlite => {
            let conn = open_db(&config.db_path)?;
            let store = SqliteActivityStore::try_new(&conn)?;
            serve(ActivityService::resume(store)?)
        }
    }
}

fn serve<S: ActivityStore>(service: ActivityService<S>) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&service)?;
    Ok(())
}
