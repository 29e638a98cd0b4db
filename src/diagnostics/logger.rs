// SPDX-License-Identifier: MPL-2.0
//! `log` backend writing to stderr and keeping recent records in memory.

use super::buffer::CircularBuffer;
use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, OnceLock};

/// Crate prefix; records from other crates are only kept at warning level or above.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// One formatted log entry.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {:<5} {}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    records: Mutex<CircularBuffer<LogRecord>>,
}

impl Logger {
    #[must_use]
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            records: Mutex::new(CircularBuffer::with_raw_capacity(capacity)),
        }
    }

    /// Snapshot of the buffered records, oldest first.
    #[must_use]
    pub fn recent(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn keep(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
            && (metadata.target().starts_with(OWN_TARGET) || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogRecord {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        // A closed stderr must not take the application down.
        let _ = writeln!(std::io::stderr().lock(), "{entry}");
        self.keep(entry);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the global logger at `level`.
///
/// # Errors
///
/// Returns an error if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<&'static Logger, log::SetLoggerError> {
    let logger = LOGGER.get_or_init(|| Logger::new(level, super::buffer::DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Records buffered by the installed logger; empty before [`init`].
#[must_use]
pub fn recent_records() -> Vec<LogRecord> {
    LOGGER.get().map(Logger::recent).unwrap_or_default()
}
