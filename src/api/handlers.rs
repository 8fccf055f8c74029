use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::logic::{aggregate, normalize_category, parse_price};
use crate::model::{CategoryAggregate, Product, ProductFilter, ProductId, ProductPayload};
use crate::store::traits::CatalogStore;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub products: usize,
    pub timestamp: String,
}

pub async fn health_check<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        products: store.count().await?,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Raw search parameters. Prices stay strings here so a bad value can be
/// reported by name instead of as a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

impl SearchParams {
    pub fn into_filter(self) -> Result<ProductFilter, ApiError> {
        Ok(ProductFilter {
            category: self.category.as_deref().map(normalize_category),
            min_price: parse_price("minPrice", self.min_price.as_deref())?,
            max_price: parse_price("maxPrice", self.max_price.as_deref())?,
        })
    }
}

pub async fn list_products<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(store.list_products().await?))
}

pub async fn get_product<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    match store.get_product(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound(format!("Product {} not found", id))),
    }
}

pub async fn create_product<S: CatalogStore>(
    State(store): State<AppState<S>>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    let new_product = payload.validate_new().map_err(|errors| {
        log::debug!("Rejected new product: {}", errors.join(", "));
        ApiError::Validation(errors)
    })?;

    let product = store.add_product(new_product).await?;
    log::info!("Created product {} ({})", product.id, product.name);

    Ok(StatusCode::CREATED)
}

pub async fn update_product<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<ProductId>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    payload.validate_patch().map_err(|errors| {
        log::debug!("Rejected update of product {}: {}", id, errors.join(", "));
        ApiError::Validation(errors)
    })?;

    match store.update_product(id, &payload).await? {
        Some(product) => {
            log::info!("Updated product {} ({})", product.id, product.name);
            Ok(StatusCode::OK)
        }
        None => Err(ApiError::NotFound(format!("Product {} not found", id))),
    }
}

pub async fn delete_product<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    if store.delete_product(id).await? {
        log::info!("Deleted product {}", id);
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Product {} not found", id)))
    }
}

pub async fn search_products<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = params.into_filter()?;
    Ok(Json(store.search_products(&filter).await?))
}

pub async fn aggregate_category<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryAggregate>, ApiError> {
    let products = store.products_in_category(&category).await?;

    aggregate(&products)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No products in category '{}'", category)))
}
