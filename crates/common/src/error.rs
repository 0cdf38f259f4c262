//! Common error types for catalog components.

use thiserror::Error;

/// Errors raised while talking to another service over the message bus.
#[derive(Error, Debug)]
pub enum BusError {
    /// No reply arrived within the request timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Nobody is subscribed to the requested pattern
    #[error("No responders for pattern: {0}")]
    NoResponders(String),

    /// Network transport error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote handler answered with an error packet
    #[error("Remote error {code}: {message}")]
    Remote {
        /// Error message reported by the remote service
        message: String,
        /// Numeric status code (404 for not-found)
        code: u16,
    },
}

impl From<serde_json::Error> for BusError {
    fn from(err: serde_json::Error) -> Self {
        BusError::Serialization(err.to_string())
    }
}

/// Result type alias using `BusError`
pub type Result<T> = std::result::Result<T, BusError>;
