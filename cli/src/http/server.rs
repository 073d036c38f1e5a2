//! Server lifecycle.

use std::net::SocketAddr;
use std::time::Duration;

use axum::middleware;
use tokio::signal;
use tracing::{info, warn};

use robotrun_core::api::HttpServerConfig;

use crate::http::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};

pub async fn start_server(
    config: HttpServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve(listener, config, state).await
}

/// Serves on an already bound listener until Ctrl+C, SIGTERM or a shutdown message.
pub async fn serve(
    listener: tokio::net::TcpListener,
    config: HttpServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut shutdown_rx = state.shutdown_tx.subscribe();
    let app = create_router(state)
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack(Duration::from_secs(
            config.request_timeout_secs,
        )));

    info!("HTTP server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal::ctrl_c() => info!("received Ctrl+C"),
                _ = shutdown_rx.recv() => info!("received shutdown message"),
                _ = wait_for_sigterm() => info!("received SIGTERM"),
            }
            info!("starting graceful shutdown");
        })
        .await?;

    info!("server shutdown complete");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("failed to install SIGTERM handler: {e}");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
