//! Order totals preview

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{LineItemInput, OrderTotals};

use crate::services::ProductService;
use crate::AppState;

#[derive(Deserialize)]
pub struct TotalsRequest {
    pub items: Vec<LineItemInput>,
}

/// Price draft line items against the live catalog
pub async fn compute_totals(
    State(state): State<AppState>,
    Json(body): Json<TotalsRequest>,
) -> Json<OrderTotals> {
    let service = ProductService::new(state.store, state.config.inventory.low_stock_threshold);
    Json(service.quote(&body.items).await)
}
