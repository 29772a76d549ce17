//! Task Tracker - Main Entry Point
//!
//! This is the main entry point for the interactive task tracker.
//! The actual implementation is in the `task_tracker` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use task_tracker::{Config, Menu, TrackerApp};
use tracing_subscriber::EnvFilter;

/// Task Tracker - in-memory task list with due dates, urgency and categories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // Logs go to stderr so they never interleave with the menu on stdout
    let level = args
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut menu = Menu::new(TrackerApp::new(config), stdin.lock(), io::stdout());
    menu.run()?;
    Ok(())
}
