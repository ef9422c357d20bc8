//! Keep-alive HTTP endpoint for hosts that expect the process to bind a port

use anyhow::Result;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;

pub const ALIVE_MESSAGE: &str = "Bot is alive!";

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { ALIVE_MESSAGE }))
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve the keep-alive endpoint on `0.0.0.0:{port}` until the process exits
pub async fn serve(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "Keep-alive server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
