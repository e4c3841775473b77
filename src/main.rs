use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rfq_marketplace_server::{
    app,
    config::Config,
    db::init_db_pool,
    services::{Marketplace, TracingNotifier},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rfq_marketplace_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = init_db_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database")?;

    let marketplace = Marketplace::new(pool, Arc::new(TracingNotifier));
    let addr = config.server_addr();
    let router = app(AppState::new(marketplace, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Starting RFQ marketplace server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
