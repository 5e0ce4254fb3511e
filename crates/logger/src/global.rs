//! Process-wide default logger
//!
//! A `OnceLock` guards initialization: install a configured logger up front
//! with [`init`], or let the first call through this module construct a
//! stdout logger. Concurrent first use yields exactly one instance.

use crate::{Context, Error, Logger, Result, Severity};
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide default.
///
/// Fails with [`Error::AlreadyInitialized`] if a default logger already
/// exists, including one created lazily by an earlier call through this
/// module.
pub fn init(logger: Logger) -> Result<()> {
    DEFAULT.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide default logger, constructed on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Merge `updates` into the default logger's persistent context.
pub fn set_context(updates: Context) {
    default_logger().set_context(updates);
}

/// Snapshot of the default logger's persistent context.
pub fn context() -> Context {
    default_logger().context()
}

/// Emit at `debug` severity through the default logger.
pub fn debug(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Debug, message, call_context)
}

/// Emit at `info` severity through the default logger.
pub fn info(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Info, message, call_context)
}

/// Emit at `notice` severity through the default logger.
pub fn notice(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Notice, message, call_context)
}

/// Emit at `warning` severity through the default logger.
pub fn warning(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Warning, message, call_context)
}

/// Emit at `error` severity through the default logger.
pub fn error(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Error, message, call_context)
}

/// Emit at `critical` severity through the default logger.
pub fn critical(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Critical, message, call_context)
}

/// Emit at `alert` severity through the default logger.
pub fn alert(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Alert, message, call_context)
}

/// Emit at `emergency` severity through the default logger.
pub fn emergency(message: impl Into<String>, call_context: &Context) -> Result<()> {
    default_logger().log(Severity::Emergency, message, call_context)
}
