//! Binary entry point for the registry server

use anyhow::Result;
use crm::config::ServerConfig;
use crm::server::ServerBuilder;
use crm::storage::{InMemoryBookingService, InMemoryShopService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_yaml_file(&path)?,
        None => ServerConfig::default(),
    };

    let shop = if config.seed_demo_data {
        InMemoryShopService::with_demo_data()
    } else {
        InMemoryShopService::new()
    };

    ServerBuilder::new()
        .with_shop_service(shop)
        .with_booking_service(InMemoryBookingService::new())
        .serve(&config.listen_addr)
        .await
}
