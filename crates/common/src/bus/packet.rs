//! Request and reply packets exchanged over NATS.
//!
//! The layout matches the NestJS NATS transport so existing callers can talk
//! to the catalog service unchanged:
//!
//! ```text
//! request:  {"pattern": "kinships.findOne", "data": {"id": 3}, "id": "<uuid>"}
//! success:  {"id": "<uuid>", "response": {...}, "isDisposed": true}
//! failure:  {"id": "<uuid>", "err": {"message": "...", "code": 404}, "isDisposed": true}
//! ```

use crate::error::BusError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Code reported when a remote error carries no usable code.
const FALLBACK_ERROR_CODE: u16 = 500;

/// Inbound/outbound request packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPacket {
    /// Message pattern the request is routed by.
    pub pattern: String,

    /// Handler payload.
    #[serde(default)]
    pub data: Value,

    /// Correlation id echoed back in the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RequestPacket {
    /// Build an outbound packet with a fresh correlation id.
    #[must_use]
    pub fn new(pattern: &str, data: Value) -> Self {
        Self {
            pattern: pattern.to_string(),
            data,
            id: Some(Uuid::new_v4().to_string()),
        }
    }

    /// Serialize the packet for publishing.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Serialization` if the payload cannot be encoded.
    pub fn encode(&self) -> Result<Bytes, BusError> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    /// Decode a message received on `subject`.
    ///
    /// Bodies that are not packets (plain JSON values published by simple
    /// clients) are taken as the payload for the subject's pattern. An empty
    /// body is a `null` payload.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Serialization` if the body is not valid JSON.
    pub fn decode(subject: &str, body: &[u8]) -> Result<Self, BusError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self {
                pattern: subject.to_string(),
                data: Value::Null,
                id: None,
            });
        }

        let value: Value = serde_json::from_slice(body)?;
        if Self::looks_like_packet(&value) {
            return Ok(serde_json::from_value(value)?);
        }

        Ok(Self {
            pattern: subject.to_string(),
            data: value,
            id: None,
        })
    }

    fn looks_like_packet(value: &Value) -> bool {
        value.as_object().is_some_and(|obj| {
            obj.get("pattern").is_some_and(Value::is_string)
                && (obj.contains_key("data") || obj.contains_key("id"))
        })
    }
}

/// Error body carried in the `err` field of a failure reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Human readable message.
    pub message: String,
    /// Numeric status code (404 not found, 400 bad request, 500 internal).
    pub code: u16,
}

/// Reply packet published to the request's reply subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPacket {
    /// Correlation id of the request being answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Handler result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,

    /// Error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<Value>,

    /// Always true: every request gets exactly one reply.
    #[serde(default)]
    pub is_disposed: bool,
}

impl ReplyPacket {
    /// Successful reply.
    #[must_use]
    pub fn success(id: Option<String>, response: Value) -> Self {
        Self {
            id,
            response: Some(response),
            err: None,
            is_disposed: true,
        }
    }

    /// Failure reply.
    #[must_use]
    pub fn failure(id: Option<String>, err: &RpcErrorBody) -> Self {
        Self {
            id,
            response: None,
            err: Some(serde_json::json!({ "message": err.message, "code": err.code })),
            is_disposed: true,
        }
    }

    /// Serialize the reply for publishing.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Serialization` if the response cannot be encoded.
    pub fn encode(&self) -> Result<Bytes, BusError> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    /// Decode a reply body.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Serialization` if the body is not a reply packet.
    pub fn decode(body: &[u8]) -> Result<Self, BusError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Turn the reply into the handler result it carries.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Remote` when the reply is a failure.
    pub fn into_result(self) -> Result<Value, BusError> {
        match self.err {
            Some(err) => Err(remote_error(&err)),
            None => Ok(self.response.unwrap_or(Value::Null)),
        }
    }
}

/// Interpret an `err` field, tolerating the shapes other services send
/// (plain strings, `{message, code}`, `{message, status}`).
fn remote_error(err: &Value) -> BusError {
    if let Some(message) = err.as_str() {
        return BusError::Remote {
            message: message.to_string(),
            code: FALLBACK_ERROR_CODE,
        };
    }

    let message = err
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Remote handler failed")
        .to_string();
    let code = err
        .get("code")
        .or_else(|| err.get("status"))
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
        .unwrap_or(FALLBACK_ERROR_CODE);

    BusError::Remote { message, code }
}
