//! Console logging for the storefront.

use std::sync::Arc;

use adega_observability::{LogEntry, LogLevel, LogSink, StructuredLogger};
use leptos::leptos_dom::logging::{console_error, console_log, console_warn};

use crate::config::StorefrontConfig;

/// Sends log lines to the browser console (stdout/stderr off the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry, line: &str) {
        match entry.level {
            LogLevel::Error => console_error(line),
            LogLevel::Warn => console_warn(line),
            _ => console_log(line),
        }
    }
}

/// Root logger for the app, writing to the console.
pub fn logger_from_config(config: &StorefrontConfig) -> StructuredLogger {
    StructuredLogger::new(config.name.clone())
        .with_min_level(config.log_level)
        .with_format(config.log_format)
        .with_sink(Arc::new(ConsoleSink))
}
