//! Dashboard handler

use axum::{extract::State, Json};
use shared::DashboardSummary;

use crate::services::DashboardService;
use crate::AppState;

/// Get the dashboard summary for today
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let service = DashboardService::new(state.store, state.config.inventory.low_stock_threshold);
    Json(service.summary().await)
}
