//! Console Logger
//!
//! A `log` backend for the browser: every record goes to `console.*`
//! with a local timestamp prefix.

use chrono::{DateTime, Local};
use log::{Level, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    level: Level,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Local::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(now: &DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", now.format("%H:%M:%S%.3f"), level, target, message)
}

/// Install the console logger as the global `log` backend
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
