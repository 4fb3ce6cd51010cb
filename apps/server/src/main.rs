use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledgerlink_server::main_lib::{create_app, AppState, Settings};
use ledgerlink_storage_sqlite::db::run_migrations;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    run_migrations(&settings.db_path)?;

    let state = Arc::new(AppState::build(&settings)?);
    let app = create_app(state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    info!("Starting LedgerLink server on http://{}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
