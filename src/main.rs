// src/main.rs
use anyhow::Result;
use career_finder::{start_web_server, ConfigManager};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("career_finder=info,rocket=warn")),
        )
        .init();

    let config = ConfigManager::load()?;

    // The dataset is a fixed deployment artifact; a missing file or broken
    // schema aborts startup instead of surfacing per request.
    let listing_count = config.validate_dataset().await?;
    info!("Dataset validated: {} usable job listings", listing_count);
    info!("Internship site: {}", config.service.internship_base_url);

    start_web_server(config).await
}
