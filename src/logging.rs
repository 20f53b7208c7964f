//! `tracing` subscriber setup.
//!
//! The interactive game owns the terminal, so it only logs to a file (and
//! not at all without `TAMBOLA_LOG_PATH`). `simulate` logs to stderr, leaving
//! stdout to the JSON records.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn file_or_off(path: Option<PathBuf>) -> Self {
        path.map_or(LogTarget::Off, LogTarget::File)
    }
}

/// Parse an `EnvFilter` directive such as `info` or `tambola_engine=debug`.
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .with_context(|| format!("invalid TAMBOLA_LOG filter {directive:?}"))
}

/// Install the global subscriber.
pub fn init(directive: &str, target: LogTarget) -> Result<()> {
    let filter = parse_filter(directive)?;
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .map_err(|e| anyhow!(e)),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
                .map_err(|e| anyhow!(e))
        }
    }
}
