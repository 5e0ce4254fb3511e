//! Log severity levels

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight severity levels, ordered from least to most severe.
///
/// The ordering is an informational ranking only; the logger never filters on
/// it. Serialized form is the canonical lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Detailed diagnostic information
    Debug,
    /// Routine operational messages
    Info,
    /// Normal but significant events
    Notice,
    /// Something unexpected that is not yet an error
    Warning,
    /// An operation failed
    Error,
    /// A failure requiring prompt attention
    Critical,
    /// A failure requiring immediate attention
    Alert,
    /// The system is unusable
    Emergency,
}

impl Severity {
    /// All severities, least to most severe.
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// The canonical lowercase name used in serialized records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Alert => "alert",
            Severity::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == name)
            .ok_or_else(|| Error::UnknownSeverity {
                name: name.to_owned(),
            })
    }
}
