use anyhow::{Context, Result};
use realtor_site_edge::config::Config;
use realtor_site_edge::leads::LeadStore;
use realtor_site_edge::server::{self, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("realtor_site_edge=info".parse()?),
        )
        .init();

    info!("Starting realtor site edge");

    // Load configuration from environment
    let config = Config::from_env()?;

    let store = match &config.database_url {
        Some(url) => LeadStore::connect(url).await?,
        None => {
            warn!("DATABASE_URL not set, leads are kept in memory (preview mode)");
            LeadStore::in_memory()
        }
    };

    let state = Arc::new(AppState {
        store,
        admin_api_key: config.admin_api_key.clone(),
        site_url: config.site_url.clone(),
    });
    if state.admin_api_key.is_none() {
        warn!("ADMIN_API_KEY not set, lead listing is disabled");
    }

    let app = server::router(state, &config.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Serving {} on http://{}", config.static_dir, addr);

    axum::serve(listener, app).await?;
    Ok(())
}
