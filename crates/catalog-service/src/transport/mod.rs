//! NATS transport for the Catalog Service.
//!
//! [`BusServer`] subscribes to every registered pattern, answers each inbound
//! message on its own task and stops accepting work when the cancellation
//! token fires. Replies use the NestJS packet format from `common::bus`.

use crate::errors::CatalogError;
use crate::observability::metrics;
use crate::routes::PatternRouter;
use common::bus::{ReplyPacket, RequestPacket};
use common::config::BusConfig;
use futures::StreamExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Name the service announces to the NATS server.
pub const CLIENT_NAME: &str = "catalog-service";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to connect to NATS: {0}")]
    Connect(String),

    #[error("Failed to subscribe to {pattern}: {reason}")]
    Subscribe { pattern: String, reason: String },

    #[error("All pattern subscriptions closed")]
    SubscriptionsClosed,
}

/// Connect to the configured NATS servers.
pub async fn connect(config: &BusConfig) -> Result<async_nats::Client, TransportError> {
    async_nats::ConnectOptions::new()
        .name(CLIENT_NAME)
        .request_timeout(Some(config.request_timeout()))
        .connect(config.joined_servers())
        .await
        .map_err(|e| TransportError::Connect(e.to_string()))
}

/// Request/reply server over the pattern router.
pub struct BusServer {
    client: async_nats::Client,
    router: Arc<PatternRouter>,
    queue_group: Option<String>,
}

impl BusServer {
    pub fn new(
        client: async_nats::Client,
        router: Arc<PatternRouter>,
        queue_group: Option<String>,
    ) -> Self {
        Self {
            client,
            router,
            queue_group,
        }
    }

    /// Serve requests until `cancel` fires.
    ///
    /// On cancellation the subscriptions are dropped, in-flight requests get
    /// up to `drain` to finish and pending replies are flushed.
    ///
    /// # Errors
    ///
    /// `Subscribe` when a pattern cannot be subscribed, and
    /// `SubscriptionsClosed` when the server stops delivering before `cancel`
    /// fires. In-flight requests are drained in both shutdown paths.
    pub async fn run(self, cancel: CancellationToken, drain: Duration) -> Result<(), TransportError> {
        let patterns = self.router.patterns();
        let mut subscriptions = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            let subscribed = match &self.queue_group {
                Some(group) => {
                    self.client
                        .queue_subscribe(pattern.to_string(), group.clone())
                        .await
                }
                None => self.client.subscribe(pattern.to_string()).await,
            };
            let subscriber = subscribed.map_err(|e| TransportError::Subscribe {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            subscriptions.push(Box::pin(subscriber));
        }

        info!(
            target: "catalog.transport",
            patterns = patterns.len(),
            queue_group = ?self.queue_group,
            "Listening for bus requests"
        );

        let mut messages = futures::stream::select_all(subscriptions);
        let mut tasks = JoinSet::new();
        let mut closed = false;

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                next = messages.next() => {
                    let Some(message) = next else {
                        error!(target: "catalog.transport", "All subscriptions closed");
                        closed = true;
                        break;
                    };
                    let client = self.client.clone();
                    let router = Arc::clone(&self.router);
                    tasks.spawn(async move { respond(&client, &router, message).await });
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        error!(target: "catalog.transport", error = %e, "Request task failed");
                    }
                }
            }
        }

        // Dropping the subscribers unsubscribes from every pattern.
        drop(messages);

        info!(
            target: "catalog.transport",
            in_flight = tasks.len(),
            "Stopped accepting bus requests"
        );
        let drained = tokio::time::timeout(drain, async {
            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    error!(target: "catalog.transport", error = %e, "Request task failed");
                }
            }
        })
        .await;
        if drained.is_err() {
            warn!(
                target: "catalog.transport",
                remaining = tasks.len(),
                "Drain period elapsed, aborting in-flight requests"
            );
            tasks.abort_all();
        }

        if let Err(e) = self.client.flush().await {
            warn!(target: "catalog.transport", error = %e, "Failed to flush NATS connection");
        }

        if closed {
            return Err(TransportError::SubscriptionsClosed);
        }
        Ok(())
    }
}

async fn respond(client: &async_nats::Client, router: &PatternRouter, message: async_nats::Message) {
    let subject: &str = &message.subject;
    let reply = handle_request(router, subject, &message.payload).await;

    let Some(reply_to) = message.reply else {
        warn!(target: "catalog.transport", subject = %subject, "Request without reply subject, dropping reply");
        return;
    };

    match reply.encode() {
        Ok(body) => {
            if let Err(e) = client.publish(reply_to, body).await {
                warn!(target: "catalog.transport", subject = %subject, error = %e, "Failed to publish reply");
            }
        }
        Err(e) => {
            error!(target: "catalog.transport", subject = %subject, error = %e, "Failed to encode reply");
        }
    }
}

/// Decode a request, dispatch it and build the reply packet.
///
/// Never fails: every error becomes an `err` reply.
pub async fn handle_request(router: &PatternRouter, subject: &str, payload: &[u8]) -> ReplyPacket {
    let start = Instant::now();

    let request = match RequestPacket::decode(subject, payload) {
        Ok(request) => request,
        Err(e) => {
            let label = router.metric_label(subject);
            warn!(target: "catalog.transport", pattern = label, error = %e, "Malformed request");
            let err = CatalogError::BadRequest("Malformed request payload".to_string());
            metrics::record_bus_request(label, "error", Some(err.error_type()), start.elapsed());
            return ReplyPacket::failure(None, &err.to_rpc_error());
        }
    };

    let label = router.metric_label(&request.pattern);
    match router.dispatch(&request.pattern, request.data).await {
        Ok(response) => {
            metrics::record_bus_request(label, "success", None, start.elapsed());
            debug!(target: "catalog.transport", pattern = label, "Request handled");
            ReplyPacket::success(request.id, response)
        }
        Err(e) => {
            metrics::record_bus_request(label, "error", Some(e.error_type()), start.elapsed());
            // The reply hides server-side details, so they are logged here
            if e.is_server_error() {
                error!(
                    target: "catalog.transport",
                    pattern = label,
                    error_type = e.error_type(),
                    error = %e,
                    "Request failed"
                );
            } else {
                debug!(
                    target: "catalog.transport",
                    pattern = label,
                    code = e.code(),
                    error = %e,
                    "Request failed"
                );
            }
            ReplyPacket::failure(request.id, &e.to_rpc_error())
        }
    }
}
