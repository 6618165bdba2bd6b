//! Web front-end: a form on `GET /` and the JSON recommendation on `POST /`.

pub mod api;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Build the router. Handlers are stateless.
pub fn router() -> Router {
    Router::new().route("/", get(api::index).post(api::recommend))
}

/// Serve until the process is stopped or Ctrl-C is received.
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    info!(%local, "listening");
    println!("Serving on http://{local}");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server simply runs until killed.
        std::future::pending::<()>().await;
    }
}
