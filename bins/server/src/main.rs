//! ParkFin API Server
//!
//! Loads the dataset into memory and serves the analytics routes.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkfin_api::{AppState, create_router};
use parkfin_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkfin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let store = parkfin_store::open(&config.data.dataset_path)
        .await
        .with_context(|| format!("Failed to load dataset {}", config.data.dataset_path))?;
    info!(
        path = %config.data.dataset_path,
        synthetic_actuals = config.data.synthetic_actuals,
        "Dataset loaded"
    );

    let state = AppState {
        store,
        data: config.data,
        analytics: config.analytics,
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
