//! Log output destinations.

use std::sync::{Arc, Mutex};

use crate::logging::LogEntry;

/// Receives every entry that passes the logger's level filter.
///
/// `line` is the entry already rendered in the logger's format.
pub trait LogSink {
    fn write(&self, entry: &LogEntry, line: &str);
}

/// Writes rendered lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _entry: &LogEntry, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps entries in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, _line: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}
