pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::ApiError;

// Export all model types
pub use model::*;

// Export store types
pub use store::{CatalogStore, MemoryStore};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Router with all catalog endpoints bound to `store`
pub fn build_app<S: CatalogStore + 'static>(store: Arc<S>) -> Router {
    api::routes::create_router().with_state(store)
}

/// Serve the catalog API on an already bound listener until the server stops
pub async fn run_server<S: CatalogStore + 'static>(
    listener: TcpListener,
    store: Arc<S>,
) -> anyhow::Result<()> {
    axum::serve(listener, build_app(store)).await?;

    Ok(())
}
