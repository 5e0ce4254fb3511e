//! The ephemeral record serialized for each emit

use crate::{Result, Severity};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single log record, built fresh per emit and discarded after writing.
///
/// The reserved keys serialize first (struct fields precede the flattened
/// map); resolved context fields follow as sibling top-level keys.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Instant of emission
    #[serde(rename = "_timestamp", serialize_with = "rfc3339_millis")]
    pub timestamp: DateTime<Utc>,
    /// The log message
    #[serde(rename = "_message")]
    pub message: String,
    /// Severity, serialized as its canonical lowercase name
    #[serde(rename = "_severity")]
    pub severity: Severity,
    /// Resolved context fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogRecord {
    /// Create a record stamped with the current instant.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            severity,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style method for attaching resolved context fields.
    pub fn with_fields(mut self, fields: BTreeMap<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    /// Serialize as one compact JSON object plus a trailing newline.
    pub fn to_json_line(&self) -> Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

fn rfc3339_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
