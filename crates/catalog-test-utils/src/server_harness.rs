//! Test server harness for E2E testing
//!
//! Provides `TestCatalog`, which serves the operational HTTP listener and
//! dispatches bus requests through the real pattern router.

use crate::local_requester::LocalRequester;
use catalog_service::config::Config;
use catalog_service::routes::{self, AppState, PatternRouter};
use catalog_service::transport;
use common::bus::{BusClient, ReplyPacket, RequestPacket};
use common::error::BusError;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for the Catalog Service.
///
/// # Example
/// ```rust,ignore
/// #[sqlx::test(migrations = "../../migrations")]
/// async fn test_categories(pool: PgPool) -> Result<()> {
///     seed_catalog(&pool).await?;
///     let catalog = TestCatalog::spawn(pool).await?;
///
///     let reply = catalog.request("categories.findOne", json!({"id": 1})).await?;
///     assert!(reply.err.is_none());
///     Ok(())
/// }
/// ```
pub struct TestCatalog {
    addr: SocketAddr,
    pool: PgPool,
    config: Config,
    router: Arc<PatternRouter>,
    _handle: JoinHandle<()>,
}

impl TestCatalog {
    /// Spawn a catalog instance over `pool` (typically from `#[sqlx::test]`).
    ///
    /// The HTTP listener binds to a random port on 127.0.0.1. No NATS
    /// connection is made; requests go through [`TestCatalog::request`].
    pub async fn spawn(pool: PgPool) -> Result<Self, anyhow::Error> {
        let vars = HashMap::from([
            (
                "NATS_SERVERS".to_string(),
                "nats://127.0.0.1:4222".to_string(),
            ),
            (
                "DATABASE_URL".to_string(),
                "postgresql://test/test".to_string(),
            ),
            ("PORT".to_string(), "0".to_string()),
            ("SHUTDOWN_DRAIN_SECONDS".to_string(), "0".to_string()),
        ]);

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let state = Arc::new(AppState {
            pool: pool.clone(),
            config: config.clone(),
            bus: None,
        });
        let router = Arc::new(routes::build_pattern_router(Arc::clone(&state)));

        // A recorder that is not installed globally, so every test gets its own
        let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
        let app = routes::build_http_routes(state, metrics_handle);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            pool,
            config,
            router,
            _handle: handle,
        })
    }

    /// Send a request packet for `pattern` and return the raw reply packet.
    pub async fn request(&self, pattern: &str, data: Value) -> Result<ReplyPacket, anyhow::Error> {
        let body = RequestPacket::new(pattern, data).encode()?;
        Ok(transport::handle_request(&self.router, pattern, &body).await)
    }

    /// Send a request and unwrap the reply into the handler result.
    pub async fn call(&self, pattern: &str, data: Value) -> Result<Value, BusError> {
        let body = RequestPacket::new(pattern, data).encode()?;
        transport::handle_request(&self.router, pattern, &body)
            .await
            .into_result()
    }

    /// A bus client whose requests are served by this instance.
    pub fn bus_client(&self) -> BusClient {
        BusClient::new(Arc::new(LocalRequester::new(Arc::clone(&self.router))))
    }

    /// Get reference to the database pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the pattern router.
    pub fn router(&self) -> &PatternRouter {
        &self.router
    }

    /// Get the base URL of the HTTP listener.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get reference to the service configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestCatalog {
    fn drop(&mut self) {
        self._handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;
    use serde_json::json;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_server_spawns_successfully(pool: PgPool) -> Result<(), anyhow::Error> {
        let catalog = TestCatalog::spawn(pool).await?;
        assert!(catalog.url().starts_with("http://127.0.0.1:"));

        let response = reqwest::get(&format!("{}/health", catalog.url())).await?;
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await?, "OK");

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_seed_is_visible_through_router(pool: PgPool) -> Result<(), anyhow::Error> {
        seed_catalog(&pool).await?;
        let catalog = TestCatalog::spawn(pool).await?;

        let categories = catalog.call("categories.findAll", Value::Null).await?;
        assert_eq!(categories.as_array().map(Vec::len), Some(2));

        let reply = catalog
            .request("categories.findOne", json!({"id": 1}))
            .await?;
        assert!(reply.is_disposed);
        assert!(reply.err.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_config_has_no_bus_side_effects(pool: PgPool) -> Result<(), anyhow::Error> {
        let catalog = TestCatalog::spawn(pool).await?;
        assert_eq!(catalog.config().shutdown_drain_seconds, 0);
        assert!(catalog.router().patterns().contains(&"kinships.findAllByIds"));
        Ok(())
    }
}
