//! Catalog Service error types.
//!
//! Every handler failure is turned into the `{message, code}` body carried in
//! the `err` field of the reply packet. Messages for internal failures are
//! generic; the transport logs the actual error once per failed request.

use common::bus::RpcErrorBody;
use thiserror::Error;

/// Message returned for malformed numeric payload fields.
pub const NUMERIC_VALIDATION_MESSAGE: &str = "Validation failed (numeric string is expected)";

/// Message returned when no handler is registered for a pattern.
pub const NO_HANDLER_MESSAGE: &str =
    "There is no matching message handler defined in the remote service.";

/// Catalog Service error type.
///
/// Maps to reply codes:
/// - NotFound: 404
/// - BadRequest: 400
/// - Database, Internal: 500
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Not-found error in the `<Entity> with id <id> not found` form.
    pub fn entity_not_found(entity: &str, id: i64) -> Self {
        CatalogError::NotFound(format!("{entity} with id {id} not found"))
    }

    /// Returns the reply code for this error.
    pub fn code(&self) -> u16 {
        match self {
            CatalogError::Database(_) | CatalogError::Internal(_) => 500,
            CatalogError::NotFound(_) => 404,
            CatalogError::BadRequest(_) => 400,
        }
    }

    /// Bounded label for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::Database(_) => "database",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::BadRequest(_) => "bad_request",
            CatalogError::Internal(_) => "internal",
        }
    }

    /// Whether the failure is on the service side (reply code 500).
    pub fn is_server_error(&self) -> bool {
        self.code() >= 500
    }

    /// Build the error body sent back to the caller.
    ///
    /// Server-side details are replaced by a generic message.
    pub fn to_rpc_error(&self) -> RpcErrorBody {
        let message = match self {
            CatalogError::Database(_) => "An internal database error occurred".to_string(),
            CatalogError::Internal(_) => "An internal error occurred".to_string(),
            CatalogError::NotFound(msg) | CatalogError::BadRequest(msg) => msg.clone(),
        };

        RpcErrorBody {
            message,
            code: self.code(),
        }
    }
}

/// Convert sqlx errors to CatalogError
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => CatalogError::NotFound("Record not found".to_string()),
            other => CatalogError::Database(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Internal(format!("Serialization failed: {err}"))
    }
}
