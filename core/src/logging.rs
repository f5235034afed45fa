//! Log sinks for the client and log-file setup for test and CLI sessions.
//!
//! # Design
//! The client never calls the `log` macros directly; it writes through a
//! `LogSink` it was given. `LogFacade` is the production sink and forwards
//! to whatever `log` backend the process installed. `MemoryLog` keeps the
//! entries in memory so tests can assert on them.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use log::{Level, LevelFilter};
use thiserror::Error;

/// Target used for every entry the client emits through `LogFacade`.
pub const LOG_TARGET: &str = "cbr_client";

/// Receiver for the client's diagnostic entries.
pub trait LogSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

impl<L: LogSink + ?Sized> LogSink for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<L: LogSink + ?Sized> LogSink for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Forwards to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{message}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// In-memory sink that records every entry in order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages logged at `level`, oldest first.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                level,
                message: message.to_string(),
            });
    }
}

impl LogSink for MemoryLog {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Install a process-wide `env_logger` that writes Info and above to a
/// fresh `get_rates_<timestamp>.log` under `dir`, one line per record:
/// `<local time> - <LEVEL> - <message>`.
///
/// Returns the path of the created file.
pub fn init_session_log(dir: &Path) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("get_rates_{stamp}.log"));
    let file = File::create(&path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()?;

    log::info!("=== test session logging started ===");
    Ok(path)
}
