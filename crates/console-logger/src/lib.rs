//! Console Logger
//!
//! A `log` backend for the browser. Every record is written to the devtools
//! console and the most recent lines are kept in a bounded in-memory ring,
//! which [`ConsoleLogger::dump`] returns when the app panics.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Rolling logger with a fixed-size line buffer
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first, joined for a panic report
    ///
    /// Returns an empty string if the buffer is locked, so a panic raised
    /// while logging cannot deadlock the hook.
    pub fn dump(&self) -> String {
        match self.recent.try_lock() {
            Ok(recent) => recent.iter().map(String::as_str).collect::<Vec<_>>().join("\n"),
            Err(_) => String::new(),
        }
    }

    fn remember(&self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut recent) = self.recent.lock() {
            while recent.len() >= self.capacity {
                recent.pop_front();
            }
            recent.push_back(line.to_string());
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.remember(&line);
    }

    fn flush(&self) {}
}

/// Install the global logger at `level`
///
/// Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("todo_core::store")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_latest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 3);
        for n in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", n));
        }

        let dump = logger.dump();
        let recent: Vec<_> = dump.lines().collect();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        log_line(&logger, Level::Debug, "hidden");
        log_line(&logger, Level::Warn, "shown");

        let dump = logger.dump();
        let recent: Vec<_> = dump.lines().collect();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("WARN"));
        assert!(recent[0].contains("[todo_core::store]"));
    }

    #[test]
    fn test_dump_joins_buffered_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);
        for n in 0..3 {
            log_line(&logger, Level::Info, &format!("line {}", n));
        }

        let dump = logger.dump();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("line 1"));
        assert!(lines[1].ends_with("line 2"));
    }

    #[test]
    fn test_dump_of_empty_buffer() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 4);
        assert_eq!(logger.dump(), "");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        log_line(&logger, Level::Error, "dropped");
        assert!(logger.dump().is_empty());
    }
}
