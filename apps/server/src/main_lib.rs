//! Server wiring: settings from environment, shared state, router assembly.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use ledgerlink_aggregator::{AggregatorClient, SANDBOX_API_URL};
use ledgerlink_core::accounts::LinkedAccountService;
use ledgerlink_core::sync::TransactionSyncService;
use ledgerlink_storage_sqlite::accounts::LinkedAccountRepository;
use ledgerlink_storage_sqlite::categories::CategoryRepository;
use ledgerlink_storage_sqlite::db::create_pool;
use ledgerlink_storage_sqlite::transactions::TransactionRepository;

use crate::api;

const ENV_CLIENT_ID: &str = "AGGREGATOR_CLIENT_ID";
const ENV_SECRET: &str = "AGGREGATOR_SECRET";
const ENV_API_URL: &str = "AGGREGATOR_API_URL";
const ENV_DB_PATH: &str = "LEDGERLINK_DB_PATH";
const ENV_BIND_ADDR: &str = "LEDGERLINK_BIND_ADDR";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub secret: String,
    pub api_url: String,
    pub db_path: String,
    pub bind_addr: String,
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required_env(name: &'static str) -> Result<String, SettingsError> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::MissingVar(name))
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            client_id: required_env(ENV_CLIENT_ID)?,
            secret: required_env(ENV_SECRET)?,
            api_url: env_or_default(ENV_API_URL, SANDBOX_API_URL),
            db_path: env_or_default(ENV_DB_PATH, "ledgerlink.db"),
            bind_addr: env_or_default(ENV_BIND_ADDR, "127.0.0.1:5001"),
        })
    }
}

/// Shared state injected into every request handler.
///
/// Everything here is long-lived: one aggregator client authenticated from
/// the environment, and the services over the shared connection pool.
pub struct AppState {
    pub aggregator: AggregatorClient,
    pub accounts: LinkedAccountService,
    pub sync: TransactionSyncService,
}

impl AppState {
    pub fn build(settings: &Settings) -> ledgerlink_core::Result<Self> {
        let pool = create_pool(&settings.db_path)?;
        let accounts = LinkedAccountService::new(Arc::new(LinkedAccountRepository::new(
            Arc::clone(&pool),
        )));
        let sync = TransactionSyncService::new(
            Arc::new(CategoryRepository::new(Arc::clone(&pool))),
            Arc::new(TransactionRepository::new(pool)),
        );
        let aggregator =
            AggregatorClient::new(&settings.api_url, &settings.client_id, &settings.secret);

        Ok(Self {
            aggregator,
            accounts,
            sync,
        })
    }
}

/// Assemble the application with CORS open for the browser frontend.
pub fn create_app(state: Arc<AppState>) -> Router {
    api::router().layer(CorsLayer::permissive()).with_state(state)
}
