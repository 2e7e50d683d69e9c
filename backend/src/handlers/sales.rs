//! HTTP handlers for sales orders

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{SalesFilter, SalesOrder};
use uuid::Uuid;

use super::purchase::NoteNumberResponse;
use crate::error::AppResult;
use crate::services::sales::{CreateSalesInput, SalesService, UpdateSalesStatusInput};
use crate::AppState;

fn service(state: AppState) -> SalesService {
    SalesService::new(state.store, &state.config.notes.sales_prefix)
}

/// List sales orders
pub async fn list_sales(
    State(state): State<AppState>,
    query: Result<Query<SalesFilter>, QueryRejection>,
) -> AppResult<Json<Vec<SalesOrder>>> {
    let Query(filter) = query?;
    Ok(Json(service(state).list(&filter).await))
}

/// Preview the note number of the next sales order
pub async fn next_sales_note_number(State(state): State<AppState>) -> Json<NoteNumberResponse> {
    let note_number = service(state).next_note_number().await;
    Json(NoteNumberResponse { note_number })
}

/// Get a sales order
pub async fn get_sale(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<SalesOrder>> {
    let order = service(state).get(order_id).await?;
    Ok(Json(order))
}

/// Create a sales order
pub async fn create_sale(
    State(state): State<AppState>,
    Json(input): Json<CreateSalesInput>,
) -> AppResult<(StatusCode, Json<SalesOrder>)> {
    let order = service(state).create(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Set the status of a sales order
pub async fn update_sale_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(input): Json<UpdateSalesStatusInput>,
) -> AppResult<Json<SalesOrder>> {
    let order = service(state).update_status(order_id, input).await?;
    Ok(Json(order))
}
