//! Structured JSON-line logging.
//!
//! Serializes severity-tagged messages with merged context fields as one
//! compact JSON object per line. Context lives at two levels: persistent
//! fields on a [`Logger`] and per-call fields that override them for a single
//! record. Types opt into controlling their own serialized representation by
//! implementing [`Loggable`].
//!
//! # Example
//! ```
//! use firehose_logger::{Context, Logger, test_support::CaptureSink};
//! use std::sync::Arc;
//!
//! # fn main() -> firehose_logger::Result<()> {
//! let sink = CaptureSink::new();
//! let logger = Logger::with_sink(Arc::new(sink.clone()));
//! logger.set_context(Context::new().with("serverID", "34y2ro3rof")?);
//! logger.notice("hello", &Context::new())?;
//! assert!(sink.contains("\"_severity\":\"notice\""));
//! assert!(sink.contains("\"serverID\":\"34y2ro3rof\""));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod context;
mod error;
pub mod global;
mod logger;
mod record;
mod severity;
mod sink;
pub mod test_support;
mod value;

pub use context::{Context, FieldName, RESERVED_KEYS};
pub use error::{Error, Result};
pub use logger::Logger;
pub use record::LogRecord;
pub use severity::Severity;
pub use sink::{LogSink, StdoutSink};
pub use value::{ContextValue, Loggable};
