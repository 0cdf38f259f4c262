//! Bus server lifecycle against a running NATS server.
//!
//! These need a reachable NATS server and are gated behind a feature:
//! `cargo test -p catalog-service --features nats-tests`. The server URL is
//! read from `NATS_URL` (default `nats://127.0.0.1:4222`).

#![cfg(feature = "nats-tests")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use catalog_service::config::Config;
use catalog_service::errors::CatalogError;
use catalog_service::routes::{AppState, PatternRouter};
use catalog_service::transport::{self, BusServer};
use common::bus::{ReplyPacket, RequestPacket};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn nats_url() -> String {
    std::env::var("NATS_URL").unwrap_or_else(|_| "nats://127.0.0.1:4222".to_string())
}

fn config() -> Config {
    let vars = HashMap::from([
        ("NATS_SERVERS".to_string(), nats_url()),
        (
            "DATABASE_URL".to_string(),
            "postgresql://test/test".to_string(),
        ),
        ("PORT".to_string(), "0".to_string()),
    ]);
    Config::from_vars(&vars).expect("test config")
}

/// Router state without a live database; the routes used here never query.
fn state() -> Arc<AppState> {
    Arc::new(AppState {
        pool: PgPoolOptions::new()
            .connect_lazy("postgresql://test/test")
            .expect("lazy pool"),
        config: config(),
        bus: None,
    })
}

async fn slow_echo(delay: Duration, data: Value) -> Result<Value, CatalogError> {
    tokio::time::sleep(delay).await;
    Ok(data)
}

async fn connect() -> async_nats::Client {
    transport::connect(&config().bus)
        .await
        .expect("NATS must be reachable for these tests")
}

/// Send `pattern` until something answers it.
async fn wait_until_serving(caller: &async_nats::Client, pattern: &'static str) {
    for _ in 0..50 {
        let body = RequestPacket::new(pattern, Value::Null).encode().unwrap();
        let answered =
            tokio::time::timeout(Duration::from_millis(500), caller.request(pattern, body)).await;
        if matches!(answered, Ok(Ok(_))) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("bus server never started answering {pattern}");
}

#[tokio::test]
async fn test_cancel_drains_in_flight_request() {
    let router = PatternRouter::new(state())
        .route("drainTest.ping", |_state, _data| async { Ok(json!("pong")) })
        .route("drainTest.slow", |_state, data| slow_echo(Duration::from_millis(500), data));
    let server = BusServer::new(connect().await, Arc::new(router), None);
    let caller = connect().await;

    let cancel = CancellationToken::new();
    let run = tokio::spawn(server.run(cancel.clone(), Duration::from_secs(5)));
    wait_until_serving(&caller, "drainTest.ping").await;

    let body = RequestPacket::new("drainTest.slow", json!({"id": 7}))
        .encode()
        .unwrap();
    let in_flight = {
        let caller = caller.clone();
        tokio::spawn(async move { caller.request("drainTest.slow", body).await })
    };

    // Let the request reach its handler before shutting down
    tokio::time::sleep(Duration::from_millis(150)).await;
    cancel.cancel();

    let message = in_flight
        .await
        .unwrap()
        .expect("in-flight request must still be answered");
    let reply = ReplyPacket::decode(&message.payload).unwrap();
    assert_eq!(reply.into_result().unwrap(), json!({"id": 7}));

    let result = tokio::time::timeout(Duration::from_secs(5), run)
        .await
        .expect("run must return within the drain period")
        .unwrap();
    assert!(result.is_ok(), "run failed: {result:?}");

    // Subscriptions were dropped
    let body = RequestPacket::new("drainTest.ping", Value::Null)
        .encode()
        .unwrap();
    let after =
        tokio::time::timeout(Duration::from_secs(2), caller.request("drainTest.ping", body)).await;
    assert!(!matches!(after, Ok(Ok(_))));
}

#[tokio::test]
async fn test_drain_period_bounds_shutdown() {
    let router = PatternRouter::new(state())
        .route("abortTest.ping", |_state, _data| async { Ok(json!("pong")) })
        .route("abortTest.stuck", |_state, data| slow_echo(Duration::from_secs(30), data));
    let server = BusServer::new(connect().await, Arc::new(router), None);
    let caller = connect().await;

    let cancel = CancellationToken::new();
    let drain = Duration::from_millis(300);
    let run = tokio::spawn(server.run(cancel.clone(), drain));
    wait_until_serving(&caller, "abortTest.ping").await;

    let body = RequestPacket::new("abortTest.stuck", Value::Null)
        .encode()
        .unwrap();
    let in_flight = {
        let caller = caller.clone();
        tokio::spawn(async move {
            let request = caller.request("abortTest.stuck", body);
            tokio::time::timeout(Duration::from_secs(3), request).await
        })
    };

    tokio::time::sleep(Duration::from_millis(150)).await;
    cancel.cancel();

    // Aborted after the drain period instead of waiting for the handler
    let result = tokio::time::timeout(Duration::from_secs(2), run)
        .await
        .expect("run must not wait for a stuck handler")
        .unwrap();
    assert!(result.is_ok(), "run failed: {result:?}");

    let answered = in_flight.await.unwrap();
    assert!(!matches!(answered, Ok(Ok(_))), "aborted request must not be answered");
}
