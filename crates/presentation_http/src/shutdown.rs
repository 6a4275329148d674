//! Graceful shutdown with a bounded drain period

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then wait at most `drain_timeout`
/// for in-flight connections before returning
///
/// Connections still open when the deadline passes are dropped with the
/// server future.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let notify = Arc::clone(&draining);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            notify.notify_one();
        })
        .into_future();

    let deadline = async {
        draining.notified().await;
        info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(?drain_timeout, "Shutdown timeout elapsed, closing remaining connections");
            Ok(())
        }
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
