//! Process lifecycle.
//!
//! The bus server and the HTTP listener run as separate tasks sharing one
//! cancellation token. [`supervise`] waits for a shutdown signal, but also
//! ends the process when either server stops on its own: a service with no
//! pattern subscriptions must not keep answering readiness probes.

use crate::transport::TransportError;
use std::future::Future;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("{0} stopped before shutdown was requested")]
    StoppedEarly(&'static str),
}

/// Run until `shutdown` resolves or a server task ends, then cancel and wait
/// for both tasks.
///
/// # Errors
///
/// `StoppedEarly` when a server task finished before `shutdown` resolved.
pub async fn supervise<F>(
    shutdown: F,
    cancel: CancellationToken,
    mut bus_task: JoinHandle<Result<(), TransportError>>,
    mut http_task: JoinHandle<std::io::Result<()>>,
) -> Result<(), LifecycleError>
where
    F: Future<Output = ()>,
{
    let mut bus_result = None;
    let mut http_result = None;
    let mut stopped_early = None;

    tokio::select! {
        () = shutdown => {}
        result = &mut bus_task => {
            error!(target: "catalog.lifecycle", "Bus server stopped unexpectedly, shutting down");
            bus_result = Some(result);
            stopped_early = Some("bus server");
        }
        result = &mut http_task => {
            error!(target: "catalog.lifecycle", "HTTP server stopped unexpectedly, shutting down");
            http_result = Some(result);
            stopped_early = Some("HTTP server");
        }
    }
    cancel.cancel();

    let bus_result = match bus_result {
        Some(result) => result,
        None => bus_task.await,
    };
    match bus_result {
        Ok(Ok(())) => info!(target: "catalog.lifecycle", "Bus server stopped"),
        Ok(Err(e)) => error!(target: "catalog.lifecycle", error = %e, "Bus server failed"),
        Err(e) => error!(target: "catalog.lifecycle", error = %e, "Bus server task panicked"),
    }

    let http_result = match http_result {
        Some(result) => result,
        None => http_task.await,
    };
    match http_result {
        Ok(Ok(())) => info!(target: "catalog.lifecycle", "HTTP server stopped"),
        Ok(Err(e)) => error!(target: "catalog.lifecycle", error = %e, "HTTP server error"),
        Err(e) => {
            warn!(target: "catalog.lifecycle", error = %e, "HTTP server task ended abnormally");
        }
    }

    match stopped_early {
        Some(server) => Err(LifecycleError::StoppedEarly(server)),
        None => Ok(()),
    }
}
