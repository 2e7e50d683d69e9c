//! HTTP handlers for stock mutations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::StockMutation;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, RecordMutationInput};
use crate::AppState;

/// List the stock ledger, newest first
pub async fn list_mutations(State(state): State<AppState>) -> Json<Vec<StockMutation>> {
    let service = InventoryService::new(state.store);
    Json(service.list_mutations().await)
}

/// List the ledger entries of one product
pub async fn list_product_mutations(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Vec<StockMutation>>> {
    let service = InventoryService::new(state.store);
    let mutations = service.product_mutations(product_id).await?;
    Ok(Json(mutations))
}

/// Record a stock mutation
pub async fn record_mutation(
    State(state): State<AppState>,
    Json(input): Json<RecordMutationInput>,
) -> AppResult<(StatusCode, Json<StockMutation>)> {
    let service = InventoryService::new(state.store);
    let mutation = service.record_mutation(input).await?;
    Ok((StatusCode::CREATED, Json(mutation)))
}
