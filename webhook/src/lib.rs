//! # webhook
//!
//! A single `POST /webhook` endpoint that acknowledges every request with
//! `200 {"message":"Webhook received"}`. The payload is neither validated nor forwarded anywhere.

use std::net::SocketAddr;

use axum::{body::Bytes, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

pub const WEBHOOK_PATH: &str = "/webhook";
pub const DEFAULT_PORT: u16 = 3000;

/// Fixed acknowledgment body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub message: &'static str,
}

impl Default for WebhookAck {
    fn default() -> Self {
        Self {
            message: "Webhook received",
        }
    }
}

/// POST /webhook
async fn receive_webhook(body: Bytes) -> (StatusCode, Json<WebhookAck>) {
    debug!(bytes = body.len(), "Webhook payload received");
    (StatusCode::OK, Json(WebhookAck::default()))
}

/// Router with the webhook route and HTTP tracing.
pub fn router() -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive_webhook))
        .layer(TraceLayer::new_for_http())
}

/// Binds `0.0.0.0:port` and returns the listener; port 0 picks a free port.
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();
    info!(port, "Server is running on port {}", port);
    Ok(listener)
}

/// Serves [`router`] on an already-bound listener until the server fails.
#[instrument(skip(listener))]
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, router()).await?;
    Ok(())
}
