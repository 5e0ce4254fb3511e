//! Error types for the logging facility

use std::io;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while logging
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reserved context key was supplied
    #[error("the context key \"{key}\" is reserved, use a different name")]
    ReservedKey {
        /// The offending key
        key: String,
    },

    /// I/O error while writing to the sink
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize a record
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A severity name did not match any canonical name
    #[error("unknown severity \"{name}\"")]
    UnknownSeverity {
        /// The unrecognized name
        name: String,
    },

    /// The process-wide default logger was already installed
    #[error("default logger already initialized")]
    AlreadyInitialized,
}
