//! HTTP API surface.
//!
//! Routes:
//! - POST /api/create_link_token: link-session token for the frontend
//! - POST /api/set_access_token: public-token exchange + credential upsert
//! - POST /api/sync_transactions: pull and persist the remote delta

pub mod error;
pub mod link;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::main_lib::AppState;

pub use error::{ApiError, ApiResult};

/// Assemble all API routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/create_link_token", post(link::create_link_token))
        .route("/api/set_access_token", post(link::set_access_token))
        .route("/api/sync_transactions", post(link::sync_transactions))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
