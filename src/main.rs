use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::oneshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sleeptrack::api::rest::RestApi;
use sleeptrack::config::load_config;
use sleeptrack::error::AppError;
use sleeptrack::sleep::SystemClock;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let config = load_config(Path::new("config.yaml"))?;
    let addr = config.api.socket_addr()?;

    let api = RestApi::new(Arc::new(SystemClock));
    let routes = api.routes();

    info!(host = %config.api.host, port = config.api.port, "starting sleep tracker server");

    // Create a channel for the shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // Set up server with graceful shutdown
    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async move {
        shutdown_rx.await.ok();
        info!("shutting down server");
    });

    let server_handle = tokio::spawn(server);

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    info!("ctrl-c received, starting graceful shutdown");

    shutdown_tx.send(()).ok();
    server_handle.await?;

    info!("server shutdown complete");
    Ok(())
}
