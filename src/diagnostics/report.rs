// SPDX-License-Identifier: MPL-2.0
//! Crash reports built from the buffered log records.
//!
//! On panic the most recent records are written next to the panic message,
//! so a crash can be diagnosed even when stderr was not captured.

use super::logger::{recent_records, LogRecord};
use chrono::Local;
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

/// Report file name for a crash happening now.
#[must_use]
pub fn generate_report_filename() -> String {
    format!("iced_meme_crash_{}.log", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Writes `headline` followed by `records`, one per line, to `path`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_report(path: &Path, headline: &str, records: &[LogRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = format!("{headline}\n\nRecent log records ({}):\n", records.len());
    for record in records {
        content.push_str(&record.to_string());
        content.push('\n');
    }
    fs::write(path, content)
}

/// Chains a panic hook that saves a crash report into `report_dir`.
pub fn install_panic_hook(report_dir: PathBuf) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let path = report_dir.join(generate_report_filename());
        match write_report(&path, &info.to_string(), &recent_records()) {
            Ok(()) => eprintln!("Crash report written to {}", path.display()),
            Err(err) => eprintln!("Could not write crash report {}: {err}", path.display()),
        }
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use tempfile::tempdir;

    #[test]
    fn filename_has_timestamp() {
        let name = generate_report_filename();
        assert!(name.starts_with("iced_meme_crash_"));
        assert!(name.ends_with(".log"));
        // YYYYMMDD_HHMMSS
        assert_eq!(name.len(), "iced_meme_crash_".len() + 15 + ".log".len());
    }

    #[test]
    fn report_lists_headline_then_records() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("crash.log");
        let records = vec![
            LogRecord {
                timestamp: Local::now(),
                level: Level::Info,
                target: "iced_meme::media".into(),
                message: "Loaded cat.png".into(),
            },
            LogRecord {
                timestamp: Local::now(),
                level: Level::Warn,
                target: "iced_meme::app".into(),
                message: "Gallery request failed".into(),
            },
        ];

        write_report(&path, "panicked at src/app/update.rs", &records).expect("write report");

        let content = fs::read_to_string(&path).expect("read report");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "panicked at src/app/update.rs");
        assert_eq!(lines[2], "Recent log records (2):");
        assert!(lines[3].ends_with("iced_meme::media] Loaded cat.png"));
        assert!(lines[4].ends_with("iced_meme::app] Gallery request failed"));
    }
}
