//! Link-session, token-exchange, and transaction-sync endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Demonstration end-user identifier used by the reference flow; a real
/// deployment derives this from the authenticated caller.
const DEMO_CLIENT_USER_ID: &str = "user-id";

#[derive(Debug, Deserialize)]
pub struct SetAccessTokenRequest {
    #[serde(default)]
    pub public_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SyncTransactionsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
    pub new_transactions: usize,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create a link-session token and relay the payload verbatim.
pub async fn create_link_token(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    info!("[Link] Creating link token");

    let payload = state
        .aggregator
        .create_link_token(DEMO_CLIENT_USER_ID)
        .await?;

    Ok(Json(payload))
}

/// Exchange a public token for durable credentials and persist them.
pub async fn set_access_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetAccessTokenRequest>,
) -> ApiResult<Json<StatusResponse>> {
    // Validated before any remote call is made.
    let (public_token, user_id) = match (non_empty(body.public_token), non_empty(body.user_id)) {
        (Some(public_token), Some(user_id)) => (public_token, user_id),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing public_token or user_id".to_string(),
            ))
        }
    };

    let exchange = state.aggregator.exchange_public_token(&public_token).await?;
    state
        .accounts
        .link(&user_id, exchange.access_token, exchange.item_id)
        .await?;

    info!(
        "[Link] Access token captured and saved for user_id: {}",
        user_id
    );
    Ok(Json(StatusResponse { status: "success" }))
}

/// Pull the remote transactions delta and append the added rows.
pub async fn sync_transactions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SyncTransactionsRequest>,
) -> ApiResult<Json<SyncResponse>> {
    let user_id = body.user_id.unwrap_or_default();

    let account = state.accounts.get_linked(&user_id)?;
    // No cursor is persisted between calls: every sync asks for the delta
    // from the beginning and re-inserts whatever comes back (see DESIGN.md).
    let delta = state
        .aggregator
        .sync_transactions(&account.access_token, None)
        .await?;
    let added = delta.added.into_iter().map(Into::into).collect();
    let count = state.sync.record_added(&user_id, added).await?;

    info!(
        "[Sync] Synced {} new transactions for user_id: {}",
        count, user_id
    );
    Ok(Json(SyncResponse {
        status: "success",
        new_transactions: count,
    }))
}
