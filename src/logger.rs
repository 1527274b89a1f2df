//! Console Logger
//!
//! Bridges the `log` facade to the browser console so controller failure
//! logs actually land somewhere visible.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        console_write(record.level(), format!("[{}] {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn console_write(level: Level, msg: String) {
    let msg = wasm_bindgen::JsValue::from(msg);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        _ => web_sys::console::log_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_write(_level: Level, msg: String) {
    eprintln!("{msg}");
}

/// Install the console logger. Safe to call more than once; later calls
/// are ignored by the facade.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("todo_ui").build()
    }

    #[test]
    fn init_registers_a_logger_at_info_level() {
        init();
        assert_eq!(log::max_level(), LevelFilter::Info);
        // a second init must not panic or change the level
        init();
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn failure_level_records_pass_the_filter() {
        assert!(LOGGER.enabled(&metadata(Level::Error)));
        assert!(LOGGER.enabled(&metadata(Level::Warn)));
        assert!(LOGGER.enabled(&metadata(Level::Info)));
        assert!(!LOGGER.enabled(&metadata(Level::Debug)));
        assert!(!LOGGER.enabled(&metadata(Level::Trace)));
    }
}
