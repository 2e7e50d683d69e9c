//! Purchase order service

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use shared::{
    validate_counterparty, LineItemInput, NoteNumberFormat, PurchaseFilter, PurchaseOrder,
    PurchaseStatus,
};
use uuid::Uuid;
use validator::Validate;

use super::order_lines::capture_lines;
use crate::error::{check, AppError, AppResult};
use crate::store::Store;

/// Purchase service for managing orders placed with suppliers
#[derive(Clone)]
pub struct PurchaseService {
    store: Store,
    notes: NoteNumberFormat,
}

/// Input for creating a purchase order
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseInput {
    pub supplier: String,
    pub order_date: NaiveDate,
    #[validate(length(min = 1, message = "At least one product is required"))]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub status: PurchaseStatus,
}

/// Input for changing a purchase order's status
#[derive(Debug, Deserialize)]
pub struct UpdatePurchaseStatusInput {
    pub status: PurchaseStatus,
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(store: Store, prefix: &str) -> Self {
        Self {
            store,
            notes: NoteNumberFormat::new(prefix),
        }
    }

    /// List purchase orders matching a filter
    pub async fn list(&self, filter: &PurchaseFilter) -> Vec<PurchaseOrder> {
        let data = self.store.read().await;
        data.purchases
            .iter()
            .filter(|po| filter.matches(po))
            .cloned()
            .collect()
    }

    /// Get a purchase order by id
    pub async fn get(&self, id: Uuid) -> AppResult<PurchaseOrder> {
        let data = self.store.read().await;
        data.purchases
            .iter()
            .find(|po| po.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Purchase order".to_string()))
    }

    /// Note number the next purchase order created now would receive
    pub async fn next_note_number(&self) -> String {
        self.next_note_number_at(Local::now().naive_local()).await
    }

    pub async fn next_note_number_at(&self, now: NaiveDateTime) -> String {
        let data = self.store.read().await;
        self.notes.next(data.purchase_note_numbers(), now)
    }

    /// Create a purchase order
    pub async fn create(&self, input: CreatePurchaseInput) -> AppResult<PurchaseOrder> {
        self.create_at(input, Local::now().naive_local()).await
    }

    /// Create a purchase order, numbering it for the period containing `now`
    pub async fn create_at(
        &self,
        input: CreatePurchaseInput,
        now: NaiveDateTime,
    ) -> AppResult<PurchaseOrder> {
        check("supplier", validate_counterparty(&input.supplier))?;
        input.validate()?;

        let mut data = self.store.write().await;
        let captured = capture_lines(&data, &input.items, false)?;

        // Numbered under the write lock so concurrent creates cannot collide
        let note_number = self.notes.next(data.purchase_note_numbers(), now);
        if data.purchase_note_numbers().any(|n| n == note_number) {
            return Err(AppError::DuplicateEntry("note_number".to_string()));
        }

        let order = PurchaseOrder {
            id: Uuid::new_v4(),
            note_number,
            supplier: input.supplier.trim().to_string(),
            order_date: input.order_date,
            status: input.status,
            total_amount: captured.totals.cost_total,
            items: captured.items,
        };
        data.purchases.push(order.clone());

        tracing::info!(
            order_id = %order.id,
            note_number = %order.note_number,
            supplier = %order.supplier,
            total = %order.total_amount,
            "Purchase order created"
        );

        Ok(order)
    }

    /// Set a purchase order's status. Any status may follow any other.
    pub async fn update_status(
        &self,
        id: Uuid,
        input: UpdatePurchaseStatusInput,
    ) -> AppResult<PurchaseOrder> {
        let mut data = self.store.write().await;
        let order = data
            .purchases
            .iter_mut()
            .find(|po| po.id == id)
            .ok_or_else(|| AppError::NotFound("Purchase order".to_string()))?;

        let previous = order.status;
        order.status = input.status;

        tracing::info!(
            order_id = %order.id,
            note_number = %order.note_number,
            from = %previous,
            to = %order.status,
            "Purchase order status changed"
        );

        Ok(order.clone())
    }
}
