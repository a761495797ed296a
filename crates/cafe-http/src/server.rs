//! Listener setup and graceful shutdown.

use crate::{router, AppState};
use anyhow::Context;
use cafe_core::{config::Config, Catalog};
use tokio::net::TcpListener;

/// Load the catalog named by `config`, bind `config.server.bind`, and serve
/// until a shutdown signal arrives.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog).context("failed to load catalog")?;
    tracing::info!(
        cities = catalog.len(),
        cafes = catalog.cafe_count(),
        source = %config
            .catalog
            .path
            .as_deref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "catalog loaded"
    );

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;

    serve(listener, AppState::new(catalog)).await
}

/// Serve the router on an already-bound listener until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
