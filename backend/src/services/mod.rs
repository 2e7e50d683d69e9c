//! Business logic services for the Mini ERP

pub mod dashboard;
pub mod inventory;
mod order_lines;
pub mod product;
pub mod purchase;
pub mod sales;

pub use dashboard::DashboardService;
pub use inventory::InventoryService;
pub use product::ProductService;
pub use purchase::PurchaseService;
pub use sales::SalesService;
