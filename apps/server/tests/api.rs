//! End-to-end API tests against a scripted aggregation server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

use ledgerlink_server::main_lib::{create_app, AppState, Settings};
use ledgerlink_storage_sqlite::db::run_migrations;

/// Fake aggregation API: happy-path link/exchange/sync plus one scripted
/// exchange failure for the token "public-bad".
async fn start_fake_aggregator() -> String {
    let app = Router::new()
        .route(
            "/link/token/create",
            post(|| async {
                Json(json!({
                    "link_token": "link-sandbox-abc",
                    "expiration": "2024-01-01T00:04:00Z",
                    "request_id": "req-1"
                }))
            }),
        )
        .route(
            "/item/public_token/exchange",
            post(|Json(body): Json<Value>| async move {
                if body["public_token"] == "public-good" {
                    Json(json!({
                        "access_token": "access-sandbox-1",
                        "item_id": "item-1",
                        "request_id": "req-2"
                    }))
                    .into_response()
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error_type": "INVALID_REQUEST",
                            "error_code": "INVALID_PUBLIC_TOKEN",
                            "error_message": "could not find matching public token"
                        })),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/transactions/sync",
            post(|| async {
                Json(json!({
                    "added": [
                        {
                            "transaction_id": "tx-1",
                            "date": "2024-01-01",
                            "name": "Starbucks Coffee",
                            "amount": 4.5
                        },
                        {
                            "transaction_id": "tx-2",
                            "date": "2024-01-02",
                            "name": "Wire transfer ref 84113",
                            "amount": 250.0
                        }
                    ],
                    "modified": [],
                    "removed": [],
                    "next_cursor": "cursor-1",
                    "has_more": false,
                    "request_id": "req-3"
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake aggregator");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

async fn test_app() -> Router {
    let api_url = start_fake_aggregator().await;
    let dir = tempdir().expect("tempdir").keep();
    let db_path = dir.join("ledgerlink.db").to_string_lossy().to_string();
    run_migrations(&db_path).expect("migrate db");

    let settings = Settings {
        client_id: "client-id".to_string(),
        secret: "topsecret".to_string(),
        api_url,
        db_path,
        bind_addr: "127.0.0.1:0".to_string(),
    };
    let state = Arc::new(AppState::build(&settings).expect("state"));
    create_app(state)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_link_token_relays_the_session_payload() {
    let app = test_app().await;

    let (status, body) = post_json(&app, "/api/create_link_token", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["link_token"], "link-sandbox-abc");
}

#[tokio::test]
async fn set_access_token_requires_both_fields() {
    let app = test_app().await;

    let (status, body) =
        post_json(&app, "/api/set_access_token", json!({ "user_id": "user-1" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "Missing public_token or user_id");

    // Nothing was persisted: a sync for that user still reports no link.
    let (status, _) =
        post_json(&app, "/api/sync_transactions", json!({ "user_id": "user-1" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failed_exchange_surfaces_as_internal_error() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/set_access_token",
        json!({ "public_token": "public-bad", "user_id": "user-1" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("INVALID_PUBLIC_TOKEN"));
}

#[tokio::test]
async fn sync_without_a_linked_account_is_not_found() {
    let app = test_app().await;

    let (status, body) =
        post_json(&app, "/api/sync_transactions", json!({ "user_id": "ghost" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "No linked account found for this user.");
}

#[tokio::test]
async fn link_then_sync_inserts_and_counts_rows() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/set_access_token",
        json!({ "public_token": "public-good", "user_id": "user-1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, body) =
        post_json(&app, "/api/sync_transactions", json!({ "user_id": "user-1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["new_transactions"], 2);

    // No cursor is persisted, so replaying the same delta appends again.
    let (status, body) =
        post_json(&app, "/api/sync_transactions", json!({ "user_id": "user-1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["new_transactions"], 2);
}

#[tokio::test]
async fn relinking_overwrites_the_stored_credentials() {
    let app = test_app().await;

    for _ in 0..2 {
        let (status, _) = post_json(
            &app,
            "/api/set_access_token",
            json!({ "public_token": "public-good", "user_id": "user-1" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Still exactly one linked account: sync works and uses the last token.
    let (status, body) =
        post_json(&app, "/api/sync_transactions", json!({ "user_id": "user-1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["new_transactions"], 2);
}
