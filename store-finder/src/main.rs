use tracing::info;
use tracing_subscriber::EnvFilter;

use store_finder::catalog::{StoreCatalog, load_store_records};
use store_finder::config::AppConfig;
use store_finder::geocode::{GeocoderClient, GeocoderConfig};
use store_finder::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;

    let geocoder_config = GeocoderConfig::new()
        .with_base_url(&config.postcodes_api_url)
        .with_timeout(config.geocoder_timeout_secs);
    let geocoder = GeocoderClient::new(geocoder_config)?;

    // Geocode the store list once, before accepting requests
    let records = load_store_records(&config.stores_file)?;
    info!(
        stores = records.len(),
        path = %config.stores_file.display(),
        "geocoding store list"
    );
    let catalog = StoreCatalog::build(records, &geocoder).await;

    let state = AppState::new(geocoder, catalog);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Store finder listening on http://{}", config.addr);
    info!("  GET  /                   - Store finder page");
    info!("  GET  /stores/search      - Search by postcode and radius");
    info!("  POST /api/stores/search  - Search (JSON)");
    info!("  GET  /health             - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
