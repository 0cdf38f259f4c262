//! Outbound request helpers.
//!
//! `BusClient` wraps a `BusRequester` and normalizes every outcome into a JSON
//! object carrying a boolean `status`, so callers never see a transport
//! failure as an error value.

use crate::bus::keys::omit_keys;
use crate::bus::packet::{ReplyPacket, RequestPacket};
use crate::error::BusError;
use async_nats::client::RequestErrorKind;
use serde_json::{json, Value};
use std::sync::Arc;

/// Message returned in the normalized failure object.
pub const CALL_FAILED_MESSAGE: &str = "Microservice call failed";

/// Sends one request and waits for its reply (enables mocking).
#[async_trait::async_trait]
pub trait BusRequester: Send + Sync {
    /// Send `payload` under `pattern` and return the reply's result.
    async fn request(&self, pattern: &str, payload: Value) -> Result<Value, BusError>;
}

/// `BusRequester` backed by a NATS connection.
///
/// The request timeout is the one configured on the client's
/// `ConnectOptions`.
#[derive(Clone)]
pub struct NatsRequester {
    client: async_nats::Client,
}

impl NatsRequester {
    /// Wrap a connected NATS client.
    #[must_use]
    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl BusRequester for NatsRequester {
    async fn request(&self, pattern: &str, payload: Value) -> Result<Value, BusError> {
        let body = RequestPacket::new(pattern, payload).encode()?;

        let message = self
            .client
            .request(pattern.to_string(), body)
            .await
            .map_err(|e| match e.kind() {
                RequestErrorKind::TimedOut => BusError::Timeout(pattern.to_string()),
                RequestErrorKind::NoResponders => BusError::NoResponders(pattern.to_string()),
                _ => BusError::Transport(e.to_string()),
            })?;

        ReplyPacket::decode(&message.payload)?.into_result()
    }
}

/// High level request helper used by services that call other services.
#[derive(Clone)]
pub struct BusClient {
    requester: Arc<dyn BusRequester>,
}

impl BusClient {
    /// Create a client over any requester.
    #[must_use]
    pub fn new(requester: Arc<dyn BusRequester>) -> Self {
        Self { requester }
    }

    /// Send one request and return its first reply, normalized.
    ///
    /// On success the reply object gains `"status": true` (a `null` reply
    /// becomes `{"status": true}`, any other non-object is wrapped as
    /// `{"data": <reply>, "status": true}`). On any failure the result is
    /// `{"status": false, "message": "Microservice call failed"}` and the
    /// failure is logged.
    pub async fn first_value(&self, pattern: &str, data: Value) -> Value {
        match self.requester.request(pattern, data).await {
            Ok(reply) => with_success_status(reply),
            Err(e) => {
                tracing::error!(
                    target: "common.bus.client",
                    pattern = %pattern,
                    error = %e,
                    "Error calling microservice: {}",
                    pattern
                );
                json!({ "status": false, "message": CALL_FAILED_MESSAGE })
            }
        }
    }

    /// Fetch an entity by id and strip `keys_to_omit` from it.
    ///
    /// Returns `None` when `entity_id` is absent or zero, or when the call
    /// failed.
    pub async fn fetch_and_clean(
        &self,
        entity_id: Option<i64>,
        pattern: &str,
        keys_to_omit: &[&str],
    ) -> Option<Value> {
        let id = entity_id.filter(|id| *id != 0)?;

        let mut value = self.first_value(pattern, json!({ "id": id })).await;
        if value.get("status") == Some(&Value::Bool(false)) {
            return None;
        }

        omit_keys(&mut value, keys_to_omit);
        Some(value)
    }
}

fn with_success_status(reply: Value) -> Value {
    match reply {
        Value::Object(mut map) => {
            map.insert("status".to_string(), Value::Bool(true));
            Value::Object(map)
        }
        Value::Null => json!({ "status": true }),
        other => json!({ "data": other, "status": true }),
    }
}

/// Mock requester for unit testing.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock requester answering from a fixed pattern table.
    pub struct MockRequester {
        /// Canned replies per pattern.
        replies: HashMap<String, Value>,
        /// Number of calls made.
        call_count: AtomicUsize,
        /// Payloads received, in order.
        payloads: Mutex<Vec<(String, Value)>>,
        /// Whether every call fails.
        return_error: bool,
    }

    impl MockRequester {
        /// Create a mock with no replies; unknown patterns get no responders.
        #[must_use]
        pub fn new() -> Self {
            Self {
                replies: HashMap::new(),
                call_count: AtomicUsize::new(0),
                payloads: Mutex::new(Vec::new()),
                return_error: false,
            }
        }

        /// Create a mock that times out on every call.
        #[must_use]
        pub fn failing() -> Self {
            Self {
                return_error: true,
                ..Self::new()
            }
        }

        /// Register the reply for `pattern`.
        #[must_use]
        pub fn with_reply(mut self, pattern: &str, reply: Value) -> Self {
            self.replies.insert(pattern.to_string(), reply);
            self
        }

        /// Get the number of calls made.
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// Get the `(pattern, payload)` pairs received so far.
        pub fn received(&self) -> Vec<(String, Value)> {
            self.payloads
                .lock()
                .map(|p| p.clone())
                .unwrap_or_default()
        }
    }

    impl Default for MockRequester {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait::async_trait]
    impl BusRequester for MockRequester {
        async fn request(&self, pattern: &str, payload: Value) -> Result<Value, BusError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut payloads) = self.payloads.lock() {
                payloads.push((pattern.to_string(), payload));
            }

            if self.return_error {
                return Err(BusError::Timeout(pattern.to_string()));
            }

            self.replies
                .get(pattern)
                .cloned()
                .ok_or_else(|| BusError::NoResponders(pattern.to_string()))
        }
    }
}
