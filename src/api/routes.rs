use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check::<S>))
        // Catalog
        .route(
            "/products",
            get(handlers::list_products::<S>).post(handlers::create_product::<S>),
        )
        .route("/products/search", get(handlers::search_products::<S>))
        .route(
            "/products/aggregate/:category",
            get(handlers::aggregate_category::<S>),
        )
        .route(
            "/products/:id",
            get(handlers::get_product::<S>)
                .put(handlers::update_product::<S>)
                .delete(handlers::delete_product::<S>),
        )
}
