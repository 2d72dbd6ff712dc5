//! Error types for stream decoding and dispatch.

use crate::types::UserId;
use thiserror::Error;

/// Main error type for the user stream core.
///
/// None of these are fatal to a session: decode failures are delivered to
/// the listener as `StreamException` events and the loop keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("Malformed {kind} record: {message}")]
    Decode { kind: &'static str, message: String },

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl StreamError {
    pub(crate) fn decode(kind: &'static str, message: impl Into<String>) -> Self {
        StreamError::Decode {
            kind,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StreamError {
    fn from(e: serde_json::Error) -> Self {
        StreamError::Deserialization(e.to_string())
    }
}

/// Failure of the on-demand user lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Lookup failed: {0}")]
    Failed(String),
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
