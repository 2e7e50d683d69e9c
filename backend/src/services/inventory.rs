//! Inventory service for recording stock mutations

use chrono::Utc;
use serde::Deserialize;
use shared::{apply_mutation, validate_quantity, MutationDirection, StockMutation};
use uuid::Uuid;

use crate::error::{check, AppError, AppResult};
use crate::store::Store;

/// Inventory service for managing the stock ledger
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

/// Input for recording a stock mutation
#[derive(Debug, Deserialize)]
pub struct RecordMutationInput {
    pub product_id: Uuid,
    pub direction: MutationDirection,
    pub quantity: u32,
    pub note: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all mutations, newest first
    pub async fn list_mutations(&self) -> Vec<StockMutation> {
        self.store.read().await.mutations.clone()
    }

    /// List mutations for one product, newest first
    pub async fn product_mutations(&self, product_id: Uuid) -> AppResult<Vec<StockMutation>> {
        let data = self.store.read().await;
        if data.product(product_id).is_none() {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(data
            .mutations
            .iter()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect())
    }

    /// Apply a stock mutation to its product and append it to the ledger.
    ///
    /// The stock update and the ledger entry happen under one write lock; a
    /// rejected mutation leaves both untouched.
    pub async fn record_mutation(&self, input: RecordMutationInput) -> AppResult<StockMutation> {
        check("quantity", validate_quantity(input.quantity))?;

        let mut data = self.store.write().await;
        let product = data
            .product_mut(input.product_id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let new_stock = apply_mutation(product.stock, input.direction, input.quantity)?;
        let previous_stock = product.stock;
        product.stock = new_stock;

        let mutation = StockMutation {
            id: Uuid::new_v4(),
            product_id: product.id,
            product_name: product.name.clone(),
            direction: input.direction,
            quantity: input.quantity,
            created_at: Utc::now(),
            note: input.note.map(|n| n.trim().to_string()).unwrap_or_default(),
        };
        data.mutations.insert(0, mutation.clone());

        tracing::info!(
            product_id = %mutation.product_id,
            direction = mutation.direction.as_str(),
            quantity = mutation.quantity,
            previous_stock,
            new_stock,
            "Stock mutation recorded"
        );

        Ok(mutation)
    }
}
