//! nquery server: loads config from the environment (and `.env`), then serves
//! `POST /n-new`, `GET /n-query` and the common routes.
//!
//! Run from repo root: `cargo run -p nquery-server`
//!
//! ```text
//! curl -d '{"n-new": 5}' -H 'Content-Type: application/json' -X POST http://localhost:4567/n-new
//! curl http://localhost:4567/n-query
//! ```

use nquery::{app_from_config, ServiceConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nquery=info,nquery_server=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        data_file = %config.data_file.display(),
        body_limit = config.body_limit,
        "loaded config"
    );

    let app = app_from_config(&config);
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("nquery listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
