//! HTTP handlers for purchase orders

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use shared::{PurchaseFilter, PurchaseOrder};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::purchase::{
    CreatePurchaseInput, PurchaseService, UpdatePurchaseStatusInput,
};
use crate::AppState;

#[derive(Serialize)]
pub struct NoteNumberResponse {
    pub note_number: String,
}

fn service(state: AppState) -> PurchaseService {
    PurchaseService::new(state.store, &state.config.notes.purchase_prefix)
}

/// List purchase orders
pub async fn list_purchases(
    State(state): State<AppState>,
    query: Result<Query<PurchaseFilter>, QueryRejection>,
) -> AppResult<Json<Vec<PurchaseOrder>>> {
    let Query(filter) = query?;
    Ok(Json(service(state).list(&filter).await))
}

/// Preview the note number of the next purchase order
pub async fn next_purchase_note_number(
    State(state): State<AppState>,
) -> Json<NoteNumberResponse> {
    let note_number = service(state).next_note_number().await;
    Json(NoteNumberResponse { note_number })
}

/// Get a purchase order
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<PurchaseOrder>> {
    let order = service(state).get(order_id).await?;
    Ok(Json(order))
}

/// Create a purchase order
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseInput>,
) -> AppResult<(StatusCode, Json<PurchaseOrder>)> {
    let order = service(state).create(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Set the status of a purchase order
pub async fn update_purchase_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(input): Json<UpdatePurchaseStatusInput>,
) -> AppResult<Json<PurchaseOrder>> {
    let order = service(state).update_status(order_id, input).await?;
    Ok(Json(order))
}
