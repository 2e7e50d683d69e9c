//! Purchase and sales order models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::blank_as_none;

/// One product-quantity pairing within a stored order, with prices captured at order time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    /// Unit cost (harga modal)
    pub unit_cost: Decimal,
    /// Unit selling price (harga jual); only captured for sales orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_sale: Option<Decimal>,
}

/// Subtotals clamp to the `Decimal` range rather than panic
impl OrderLineItem {
    pub fn cost_subtotal(&self) -> Decimal {
        self.unit_cost.saturating_mul(Decimal::from(self.quantity))
    }

    pub fn sale_subtotal(&self) -> Decimal {
        self.unit_sale
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(Decimal::from(self.quantity))
    }
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Purchase order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    #[default]
    Draft,
    Ordered,
    Received,
    Completed,
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Ordered => write!(f, "ordered"),
            Self::Received => write!(f, "received"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Sales order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalesStatus {
    #[default]
    Draft,
    Ordered,
    Delivered,
    Completed,
}

impl std::fmt::Display for SalesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Ordered => write!(f, "ordered"),
            Self::Delivered => write!(f, "delivered"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A purchase order placed with a supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub note_number: String,
    pub supplier: String,
    pub order_date: NaiveDate,
    pub status: PurchaseStatus,
    pub items: Vec<OrderLineItem>,
    /// Sum of unit cost x quantity over all items
    pub total_amount: Decimal,
}

impl PurchaseOrder {
    pub fn compute_total(items: &[OrderLineItem]) -> Decimal {
        saturating_sum(items.iter().map(OrderLineItem::cost_subtotal))
    }
}

/// A sales order to a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    pub id: Uuid,
    pub note_number: String,
    pub customer: String,
    pub order_date: NaiveDate,
    pub status: SalesStatus,
    pub items: Vec<OrderLineItem>,
    /// Sum of unit sale price x quantity over all items
    pub total_amount: Decimal,
    pub cost_total: Decimal,
    pub margin: Decimal,
}

impl SalesOrder {
    pub fn compute_total(items: &[OrderLineItem]) -> Decimal {
        saturating_sum(items.iter().map(OrderLineItem::sale_subtotal))
    }

    pub fn compute_cost_total(items: &[OrderLineItem]) -> Decimal {
        saturating_sum(items.iter().map(OrderLineItem::cost_subtotal))
    }
}

/// Case-insensitive substring match; an empty or missing needle matches everything
fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Filter for the purchase order table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseFilter {
    pub supplier: Option<String>,
    pub note_number: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub order_date: Option<NaiveDate>,
}

impl PurchaseFilter {
    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        contains_ignore_case(&order.supplier, self.supplier.as_deref())
            && contains_ignore_case(&order.note_number, self.note_number.as_deref())
            && self.order_date.map_or(true, |date| order.order_date == date)
    }
}

/// Filter for the sales order table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesFilter {
    pub customer: Option<String>,
    pub note_number: Option<String>,
}

impl SalesFilter {
    pub fn matches(&self, order: &SalesOrder) -> bool {
        contains_ignore_case(&order.customer, self.customer.as_deref())
            && contains_ignore_case(&order.note_number, self.note_number.as_deref())
    }
}
