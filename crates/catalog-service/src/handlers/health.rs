//! Health check handlers.
//!
//! - `/health`: Liveness probe - returns OK if the process is running
//! - `/ready`: Readiness probe - checks the database and the NATS connection

use crate::models::ReadinessResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Liveness probe handler.
///
/// Does NOT check any dependencies - failure means the process is hung.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe handler.
///
/// Returns 200 when the database answers and the bus connection (if any) is
/// up, 503 otherwise. Error messages are generic; the actual failure is
/// logged with `tracing::warn!`.
#[tracing::instrument(skip_all, name = "catalog.health.readiness")]
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if let Err(e) = sqlx::query("SELECT 1").fetch_one(&state.pool).await {
        tracing::warn!("Readiness check failed: database error: {}", e);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not_ready",
                database: Some("unhealthy"),
                bus: None,
                error: Some("Service dependencies unavailable".to_string()),
            }),
        );
    }

    let bus = match &state.bus {
        None => "disabled",
        Some(client)
            if matches!(
                client.connection_state(),
                async_nats::connection::State::Connected
            ) =>
        {
            "connected"
        }
        Some(_) => "disconnected",
    };

    if bus == "disconnected" {
        tracing::warn!("Readiness check failed: NATS connection is down");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not_ready",
                database: Some("healthy"),
                bus: Some(bus),
                error: Some("Service dependencies unavailable".to_string()),
            }),
        );
    }

    (
        StatusCode::OK,
        Json(ReadinessResponse {
            status: "ready",
            database: Some("healthy"),
            bus: Some(bus),
            error: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    // readiness_check needs a database; see tests/health_tests.rs.
}
