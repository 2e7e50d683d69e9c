//! HTTP handlers for the product catalog

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{Product, ProductFilter};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::product::{CreateProductInput, ProductService};
use crate::AppState;

fn service(state: AppState) -> ProductService {
    ProductService::new(state.store, state.config.inventory.low_stock_threshold)
}

/// List products with optional category / stock status filters and sorting
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductFilter>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let Query(filter) = query?;
    Ok(Json(service(state).list(&filter).await))
}

/// Get a product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    let product = service(state).get(product_id).await?;
    Ok(Json(product))
}

/// Add a product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = service(state).create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    service(state).delete(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
