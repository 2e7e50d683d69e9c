//! Domain models for the Mini ERP

mod dashboard;
mod inventory;
mod order;
mod product;

pub use dashboard::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
