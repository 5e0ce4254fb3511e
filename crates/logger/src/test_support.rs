//! Test support utilities
//!
//! In-memory sink for capturing emitted lines in tests.

use crate::LogSink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// A sink that records every emitted line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`Logger`](crate::Logger) and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Create a new capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any captured line contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(text))
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_owned());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
