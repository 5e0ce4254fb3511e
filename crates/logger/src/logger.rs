//! The structured logger

use crate::{Context, LogRecord, LogSink, Result, Severity, StdoutSink};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A structured logger writing one JSON line per call.
///
/// Holds a persistent context merged into every record. Per-call context
/// overrides persistent fields for a single record without mutating them.
pub struct Logger {
    context: RwLock<Context>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger with empty context, writing to stdout.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink::new()))
    }

    /// Create a logger writing to a custom sink.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            context: RwLock::new(Context::new()),
            sink,
        }
    }

    /// Merge `updates` into the persistent context. Updated keys win.
    ///
    /// Reserved keys are rejected when the caller builds `updates`, before
    /// this logger is touched, so a rejected update never partially applies.
    pub fn set_context(&self, updates: Context) {
        self.context.write().extend(updates);
    }

    /// Snapshot of the persistent context.
    pub fn context(&self) -> Context {
        self.context.read().clone()
    }

    /// Emit one record.
    ///
    /// Merges the persistent context with `call_context` (call-level keys
    /// win), resolves self-describing values, and writes the record as one
    /// newline-terminated JSON object. A sink failure surfaces as
    /// [`Error::Io`](crate::Error::Io) and leaves the logger untouched.
    pub fn log(
        &self,
        severity: Severity,
        message: impl Into<String>,
        call_context: &Context,
    ) -> Result<()> {
        let merged = self.context.read().merge(call_context);
        let line = LogRecord::new(severity, message)
            .with_fields(merged.resolve())
            .to_json_line()?;
        self.sink.write_line(&line)?;
        Ok(())
    }

    /// Emit at `debug` severity.
    pub fn debug(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Debug, message, call_context)
    }

    /// Emit at `info` severity.
    pub fn info(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Info, message, call_context)
    }

    /// Emit at `notice` severity.
    pub fn notice(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Notice, message, call_context)
    }

    /// Emit at `warning` severity.
    pub fn warning(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Warning, message, call_context)
    }

    /// Emit at `error` severity.
    pub fn error(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Error, message, call_context)
    }

    /// Emit at `critical` severity.
    pub fn critical(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Critical, message, call_context)
    }

    /// Emit at `alert` severity.
    pub fn alert(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Alert, message, call_context)
    }

    /// Emit at `emergency` severity.
    pub fn emergency(&self, message: impl Into<String>, call_context: &Context) -> Result<()> {
        self.log(Severity::Emergency, message, call_context)
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("context", &*self.context.read())
            .finish_non_exhaustive()
    }
}
