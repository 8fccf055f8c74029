use product_catalog::config::AppConfig;
use product_catalog::store::MemoryStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Default to Info, overridable through RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Product catalog server");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{} seed={}",
        config.server.host,
        config.server.port,
        config.catalog.seed_path
    );

    // Seeded once; the file is never re-read or written back
    let store = Arc::new(MemoryStore::from_seed(&config.catalog.seed_path));

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Catalog server running on http://{}", bind_address);

    product_catalog::run_server(listener, store).await
}
