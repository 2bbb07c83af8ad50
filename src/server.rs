//! Web server module for locsrv.
//!
//! Builds the axum router, handles the `/location` endpoint, and falls
//! back to the static asset responder for everything else.
//!
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::{config::CONFIG, static_files};

/// Shared application state
pub struct AppState {
    /// Directory static assets are served from
    pub public_dir: PathBuf,
}

/// Start the web server on the configured port
pub async fn run() -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        public_dir: CONFIG.public_dir.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server is running on port {}", CONFIG.port);

    axum::serve(listener, router(state))
        .await
        .context("server failed to run")
}

/// Build the application router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/location", post(save_location))
        .fallback(get(static_files::serve_asset))
        .with_state(state)
}

/// JSON payload for the `/location` endpoint
#[derive(Deserialize)]
struct SaveLocationRequest {
    /// Reported location, any shape, not required
    location: Option<serde_json::Value>,
}

/// Acknowledge a reported location
async fn save_location(Json(payload): Json<SaveLocationRequest>) -> &'static str {
    tracing::debug!("received location: {:?}", payload.location);

    // Save the location information to the database or perform any other
    // desired operations

    "Location saved successfully!"
}
