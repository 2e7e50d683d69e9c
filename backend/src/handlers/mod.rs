//! HTTP handlers for the Mini ERP API

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod product;
pub mod purchase;
pub mod sales;

pub use auth::login;
pub use dashboard::get_dashboard;
pub use health::health_check;
pub use inventory::{list_mutations, list_product_mutations, record_mutation};
pub use orders::compute_totals;
pub use product::{create_product, delete_product, get_product, list_products};
pub use purchase::{
    create_purchase, get_purchase, list_purchases, next_purchase_note_number,
    update_purchase_status,
};
pub use sales::{create_sale, get_sale, list_sales, next_sales_note_number, update_sale_status};
