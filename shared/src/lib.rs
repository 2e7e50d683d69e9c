//! Shared types and models for the Mini ERP
//!
//! This crate contains the domain model and the pure order utilities shared
//! between the backend, the frontend (via WASM), and tests.

pub mod aggregation;
pub mod models;
pub mod note_number;
pub mod types;
pub mod validation;

pub use aggregation::*;
pub use models::*;
pub use note_number::*;
pub use types::*;
pub use validation::*;
