//! Catalog Service
//!
//! Serves the reference-table lookups over NATS and exposes health, readiness
//! and metrics endpoints over HTTP.

use catalog_service::config::Config;
use catalog_service::lifecycle;
use catalog_service::observability::metrics::init_metrics_recorder;
use catalog_service::routes::{self, AppState};
use catalog_service::transport::{self, BusServer};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog_service=debug,tower_http=info,async_nats=warn".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!("Starting Catalog Service");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        bind_address = %config.bind_address,
        database = %config.database.endpoint.describe(),
        nats_servers = %config.bus.joined_servers(),
        queue_group = ?config.bus.queue_group,
        db_max_connections = config.database.max_connections,
        "Configuration loaded successfully"
    );

    let metrics_handle = init_metrics_recorder().map_err(|e| {
        error!("Failed to initialize metrics: {}", e);
        e
    })?;

    info!("Connecting to database...");
    let db_pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(config.pg_connect_options()?)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

    info!("Database connection established");

    info!("Connecting to NATS...");
    let bus = transport::connect(&config.bus).await.map_err(|e| {
        error!("Failed to connect to NATS: {}", e);
        e
    })?;

    info!("NATS connection established");

    let bind_address = config.bind_address.clone();
    let drain = Duration::from_secs(config.shutdown_drain_seconds);
    let queue_group = config.bus.queue_group.clone();

    let state = Arc::new(AppState {
        pool: db_pool,
        config,
        bus: Some(bus.clone()),
    });

    let router = Arc::new(routes::build_pattern_router(Arc::clone(&state)));
    let app = routes::build_http_routes(state, metrics_handle);

    let cancel = CancellationToken::new();

    let bus_server = BusServer::new(bus, router, queue_group);
    let bus_task = tokio::spawn(bus_server.run(cancel.child_token(), drain));

    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Catalog Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let http_cancel = cancel.clone();
    let http_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { http_cancel.cancelled().await })
            .await
    });

    lifecycle::supervise(shutdown_signal(), cancel, bus_task, http_task).await?;

    info!("Catalog Service shutdown complete");

    Ok(())
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, starting graceful shutdown..."),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
