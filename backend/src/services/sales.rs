//! Sales order service

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use shared::{
    validate_counterparty, LineItemInput, NoteNumberFormat, SalesFilter, SalesOrder, SalesStatus,
};
use uuid::Uuid;
use validator::Validate;

use super::order_lines::{capture_lines, CapturedLines};
use crate::error::{check, AppError, AppResult};
use crate::store::Store;

/// Sales service for managing orders to customers
#[derive(Clone)]
pub struct SalesService {
    store: Store,
    notes: NoteNumberFormat,
}

/// Input for creating a sales order
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSalesInput {
    pub customer: String,
    /// Defaults to the creation date
    pub order_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "At least one product is required"))]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub status: SalesStatus,
}

/// Input for changing a sales order's status
#[derive(Debug, Deserialize)]
pub struct UpdateSalesStatusInput {
    pub status: SalesStatus,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(store: Store, prefix: &str) -> Self {
        Self {
            store,
            notes: NoteNumberFormat::new(prefix),
        }
    }

    /// List sales orders matching a filter
    pub async fn list(&self, filter: &SalesFilter) -> Vec<SalesOrder> {
        let data = self.store.read().await;
        data.sales
            .iter()
            .filter(|so| filter.matches(so))
            .cloned()
            .collect()
    }

    /// Get a sales order by id
    pub async fn get(&self, id: Uuid) -> AppResult<SalesOrder> {
        let data = self.store.read().await;
        data.sales
            .iter()
            .find(|so| so.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Sales order".to_string()))
    }

    /// Note number the next sales order created now would receive
    pub async fn next_note_number(&self) -> String {
        self.next_note_number_at(Local::now().naive_local()).await
    }

    pub async fn next_note_number_at(&self, now: NaiveDateTime) -> String {
        let data = self.store.read().await;
        self.notes.next(data.sales_note_numbers(), now)
    }

    /// Create a sales order
    pub async fn create(&self, input: CreateSalesInput) -> AppResult<SalesOrder> {
        self.create_at(input, Local::now().naive_local()).await
    }

    /// Create a sales order, numbering it for the period containing `now`.
    ///
    /// Unit cost and sale price are captured from the catalog, so later price
    /// changes do not alter the order's totals or margin.
    pub async fn create_at(
        &self,
        input: CreateSalesInput,
        now: NaiveDateTime,
    ) -> AppResult<SalesOrder> {
        check("customer", validate_counterparty(&input.customer))?;
        input.validate()?;
        let mut data = self.store.write().await;
        let CapturedLines { items, totals } = capture_lines(&data, &input.items, true)?;

        let note_number = self.notes.next(data.sales_note_numbers(), now);
        if data.sales_note_numbers().any(|n| n == note_number) {
            return Err(AppError::DuplicateEntry("note_number".to_string()));
        }

        let order = SalesOrder {
            id: Uuid::new_v4(),
            note_number,
            customer: input.customer.trim().to_string(),
            order_date: input.order_date.unwrap_or_else(|| now.date()),
            status: input.status,
            items,
            total_amount: totals.sale_total,
            cost_total: totals.cost_total,
            margin: totals.margin,
        };
        data.sales.push(order.clone());

        tracing::info!(
            order_id = %order.id,
            note_number = %order.note_number,
            customer = %order.customer,
            total = %order.total_amount,
            margin = %order.margin,
            "Sales order created"
        );

        Ok(order)
    }

    /// Set a sales order's status. Any status may follow any other.
    pub async fn update_status(
        &self,
        id: Uuid,
        input: UpdateSalesStatusInput,
    ) -> AppResult<SalesOrder> {
        let mut data = self.store.write().await;
        let order = data
            .sales
            .iter_mut()
            .find(|so| so.id == id)
            .ok_or_else(|| AppError::NotFound("Sales order".to_string()))?;

        let previous = order.status;
        order.status = input.status;

        tracing::info!(
            order_id = %order.id,
            note_number = %order.note_number,
            from = %previous,
            to = %order.status,
            "Sales order status changed"
        );

        Ok(order.clone())
    }
}
