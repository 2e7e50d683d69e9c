//! Route definitions for the Mini ERP API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/auth", auth_routes())
        .route("/dashboard", get(handlers::get_dashboard))
        .nest("/products", product_routes())
        .nest("/inventory", inventory_routes())
        .nest("/purchases", purchase_routes())
        .nest("/sales", sales_routes())
        .route("/orders/totals", post(handlers::compute_totals))
}

/// Login gate
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::login))
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route(
            "/:product_id",
            get(handlers::get_product).delete(handlers::delete_product),
        )
        .route("/:product_id/mutations", get(handlers::list_product_mutations))
}

/// Stock ledger routes
fn inventory_routes() -> Router<AppState> {
    Router::new().route(
        "/mutations",
        get(handlers::list_mutations).post(handlers::record_mutation),
    )
}

/// Purchase order routes
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_purchases).post(handlers::create_purchase))
        .route("/next-note-number", get(handlers::next_purchase_note_number))
        .route("/:order_id", get(handlers::get_purchase))
        .route("/:order_id/status", put(handlers::update_purchase_status))
}

/// Sales order routes
fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::create_sale))
        .route("/next-note-number", get(handlers::next_sales_note_number))
        .route("/:order_id", get(handlers::get_sale))
        .route("/:order_id/status", put(handlers::update_sale_status))
}
