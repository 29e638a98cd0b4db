// SPDX-License-Identifier: MPL-2.0
//! Logging backend.
//!
//! - [`Logger`]: `log` implementation printing to stderr
//! - [`CircularBuffer`]: memory-bounded storage for the most recent records
//! - [`install_panic_hook`]: dumps those records to a crash report on panic

mod buffer;
mod logger;
mod report;

pub use buffer::{CircularBuffer, DEFAULT_CAPACITY};
pub use logger::{init, recent_records, LogRecord, Logger};
pub use report::{generate_report_filename, install_panic_hook, write_report};
