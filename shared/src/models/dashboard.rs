//! Dashboard summary models

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Product, SalesOrder, SalesStatus};

/// Number of sales shown in the "recent transactions" panel
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Number of days covered by the sales chart
pub const SALES_CHART_DAYS: i64 = 7;

/// Dashboard overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub transactions_today: usize,
    pub sales_last_7_days: Vec<DailySales>,
    pub low_stock_products: Vec<LowStockProduct>,
    pub recent_transactions: Vec<RecentTransaction>,
}

/// Sales activity for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub order_count: usize,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockProduct {
    pub id: Uuid,
    pub name: String,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentTransaction {
    pub id: Uuid,
    pub note_number: String,
    pub customer: String,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: SalesStatus,
}

impl DashboardSummary {
    /// Build the summary from catalog and sales snapshots.
    ///
    /// Low stock means at or below `low_stock_threshold`, out-of-stock included.
    pub fn build(
        products: &[Product],
        sales: &[SalesOrder],
        today: NaiveDate,
        low_stock_threshold: u32,
    ) -> Self {
        let mut low_stock_products: Vec<LowStockProduct> = products
            .iter()
            .filter(|p| p.stock <= low_stock_threshold)
            .map(|p| LowStockProduct {
                id: p.id,
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect();
        low_stock_products.sort_by_key(|p| p.stock);

        let sales_last_7_days = (0..SALES_CHART_DAYS)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let day_sales = sales.iter().filter(|s| s.order_date == date);
                DailySales {
                    date,
                    order_count: day_sales.clone().count(),
                    total_amount: day_sales
                        .fold(Decimal::ZERO, |sum, s| sum.saturating_add(s.total_amount)),
                }
            })
            .collect();

        let mut recent: Vec<&SalesOrder> = sales.iter().collect();
        // Newest first; note numbers break ties within a day
        recent.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then_with(|| b.note_number.cmp(&a.note_number))
        });
        let recent_transactions = recent
            .into_iter()
            .take(RECENT_TRANSACTION_LIMIT)
            .map(|s| RecentTransaction {
                id: s.id,
                note_number: s.note_number.clone(),
                customer: s.customer.clone(),
                order_date: s.order_date,
                total_amount: s.total_amount,
                status: s.status,
            })
            .collect();

        Self {
            total_products: products.len(),
            low_stock_count: low_stock_products.len(),
            transactions_today: sales.iter().filter(|s| s.order_date == today).count(),
            sales_last_7_days,
            low_stock_products,
            recent_transactions,
        }
    }
}
