//! Output sinks

use parking_lot::Mutex;
use std::io::{self, Write};

/// Destination for serialized log lines.
///
/// Implementations must write each line as one indivisible unit so that
/// concurrent emits never interleave partial lines.
pub trait LogSink: Send + Sync {
    /// Write one newline-terminated line.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> io::Result<()>;
}

/// Sink writing to the process's standard output.
#[derive(Debug)]
pub struct StdoutSink {
    stdout: Mutex<io::Stdout>,
}

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = self.stdout.lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.stdout.lock().flush()
    }
}
