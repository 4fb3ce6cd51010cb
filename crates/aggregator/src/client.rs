//! HTTP client for the banking-data aggregation API.

use std::time::Duration;

use log::debug;
use serde_json::json;

use crate::error::{AggregatorError, Result};
use crate::types::{ApiErrorResponse, ExchangeTokenResponse, TransactionsSyncResponse};

/// Sandbox environment base URL.
pub const SANDBOX_API_URL: &str = "https://sandbox.plaid.com";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_LOG_BODY_CHARS: usize = 512;

/// Link-session parameters, fixed for every created session.
const CLIENT_NAME: &str = "LedgerLink";
const PRODUCTS: &[&str] = &["transactions"];
const COUNTRY_CODES: &[&str] = &["US"];
const LANGUAGE: &str = "en";

/// Client for the aggregation API.
///
/// Holds the API credentials and a long-lived HTTP client; one instance is
/// built at process start and shared by every request handler.
#[derive(Debug, Clone)]
pub struct AggregatorClient {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    secret: String,
}

impl AggregatorClient {
    /// Create a new aggregator client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The environment base URL (e.g., [`SANDBOX_API_URL`])
    /// * `client_id` / `secret` - API credentials issued by the aggregator
    pub fn new(base_url: &str, client_id: &str, secret: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            secret: secret.to_string(),
        }
    }

    fn log_response(status: reqwest::StatusCode, body: &str) {
        if status.is_success() {
            debug!("API response status: {}", status);
            return;
        }

        let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
        if body.chars().count() > MAX_LOG_BODY_CHARS {
            preview.push_str("...");
        }
        debug!("API response error ({}): {}", status, preview);
    }

    /// Attach the API credentials to a request body.
    ///
    /// The aggregation API authenticates every call with `client_id` and
    /// `secret` fields inside the JSON body rather than headers.
    fn authenticated_body(&self, mut payload: serde_json::Value) -> Result<serde_json::Value> {
        let body = payload
            .as_object_mut()
            .ok_or_else(|| AggregatorError::invalid_request("Request body must be a JSON object"))?;
        body.insert("client_id".to_string(), json!(self.client_id));
        body.insert("secret".to_string(), json!(self.secret));
        Ok(payload)
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let body = self.authenticated_body(payload)?;
        Ok(self.client.post(&url).json(&body).send().await?)
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        Self::log_response(status, &body);

        if !status.is_success() {
            // Try to parse the aggregator's error envelope
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                if error.error_code.is_some() || error.error_message.is_some() {
                    return Err(AggregatorError::api(
                        status.as_u16(),
                        format!(
                            "{}: {}",
                            error.error_code.as_deref().unwrap_or("UNKNOWN"),
                            error.error_message.as_deref().unwrap_or("no message")
                        ),
                    ));
                }
            }
            return Err(AggregatorError::api(
                status.as_u16(),
                format!("Request failed: {}", body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            AggregatorError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Create a link-session token for the given end user.
    ///
    /// POST /link/token/create
    ///
    /// Returns the payload as raw JSON so callers can relay it verbatim.
    pub async fn create_link_token(&self, client_user_id: &str) -> Result<serde_json::Value> {
        debug!("Creating link token for client_user_id: {}", client_user_id);

        let response = self
            .post(
                "/link/token/create",
                json!({
                    "client_name": CLIENT_NAME,
                    "user": { "client_user_id": client_user_id },
                    "products": PRODUCTS,
                    "country_codes": COUNTRY_CODES,
                    "language": LANGUAGE,
                }),
            )
            .await?;

        Self::parse_response(response).await
    }

    /// Exchange a temporary public token for durable item credentials.
    ///
    /// POST /item/public_token/exchange
    pub async fn exchange_public_token(
        &self,
        public_token: &str,
    ) -> Result<ExchangeTokenResponse> {
        let response = self
            .post(
                "/item/public_token/exchange",
                json!({ "public_token": public_token }),
            )
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the transactions delta for an access token.
    ///
    /// POST /transactions/sync
    ///
    /// With no cursor the aggregator reports the delta from the beginning of
    /// the item's history, which is how the reference flow consumes it.
    pub async fn sync_transactions(
        &self,
        access_token: &str,
        cursor: Option<&str>,
    ) -> Result<TransactionsSyncResponse> {
        let mut payload = json!({ "access_token": access_token });
        if let Some(cursor) = cursor {
            payload["cursor"] = json!(cursor);
        }

        let response = self.post("/transactions/sync", payload).await?;

        Self::parse_response(response).await
    }
}
