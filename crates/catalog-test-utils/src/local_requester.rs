//! In-process bus requester.
//!
//! Encodes each request as a wire packet, hands it to the service's request
//! handler and decodes the reply, so the bus client and the packet codec are
//! exercised without a NATS server.

use async_trait::async_trait;
use catalog_service::routes::PatternRouter;
use catalog_service::transport;
use common::bus::{BusRequester, ReplyPacket, RequestPacket};
use common::error::BusError;
use serde_json::Value;
use std::sync::Arc;

pub struct LocalRequester {
    router: Arc<PatternRouter>,
}

impl LocalRequester {
    pub fn new(router: Arc<PatternRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl BusRequester for LocalRequester {
    async fn request(&self, pattern: &str, payload: Value) -> Result<Value, BusError> {
        let body = RequestPacket::new(pattern, payload).encode()?;
        let reply = transport::handle_request(&self.router, pattern, &body).await;
        let reply = ReplyPacket::decode(&reply.encode()?)?;
        reply.into_result()
    }
}
