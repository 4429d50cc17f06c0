//! HTTP/JSON API server implementation.
//!
//! Exposes the preview engine over a small REST surface. Validation
//! failures are per-order data in a 200 response; only malformed
//! requests and oversized batches are HTTP errors.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::models::{OrderDraft, PreviewResponse};
use crate::preview::PreviewEngine;

/// Shared state for the HTTP server.
#[derive(Debug, Clone)]
pub struct PreviewServer {
    engine: PreviewEngine,
    max_batch_orders: usize,
}

impl PreviewServer {
    /// Create a new preview server.
    #[must_use]
    pub const fn new(engine: PreviewEngine, max_batch_orders: usize) -> Self {
        Self {
            engine,
            max_batch_orders,
        }
    }
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(server: PreviewServer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/preview", post(preview_orders))
        .with_state(server)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Request to preview a batch of order drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Order drafts, previewed in this order.
    pub orders: Vec<OrderDraft>,
}

/// Preview endpoint.
async fn preview_orders(
    State(server): State<PreviewServer>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    tracing::info!(order_count = req.orders.len(), "Previewing order batch");

    if req.orders.len() > server.max_batch_orders {
        return Err(ApiError::bad_request(format!(
            "Batch of {} orders exceeds maximum of {}",
            req.orders.len(),
            server.max_batch_orders
        )));
    }

    Ok(Json(server.engine.preview_batch(&req.orders)))
}

/// Structured error body for request-level failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Request-level API error.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    /// Create a bad request error.
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody {
                code: "INVALID_REQUEST".to_string(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}
