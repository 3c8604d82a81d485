//! In-memory logger for unit tests
//!
//! Installed once per test binary. Tests running in parallel share it, so
//! lookups filter on the request id each builder logs with.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use reqforge_request::RequestId;

struct CaptureLogger;

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = CAPTURED.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub(crate) fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured lines at `level` that mention `id`
pub(crate) fn lines_for(id: RequestId, level: Level) -> Vec<String> {
    let needle = id.to_string();
    CAPTURED
        .lock()
        .map(|lines| {
            lines
                .iter()
                .filter(|(at, line)| *at == level && line.contains(&needle))
                .map(|(_, line)| line.clone())
                .collect()
        })
        .unwrap_or_default()
}
