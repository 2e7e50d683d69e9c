//! Dashboard summary service

use chrono::{Local, NaiveDate};
use shared::DashboardSummary;

use crate::store::Store;

/// Builds the dashboard overview from the current store contents
#[derive(Clone)]
pub struct DashboardService {
    store: Store,
    low_stock_threshold: u32,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(store: Store, low_stock_threshold: u32) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }

    /// Summary as of the local date
    pub async fn summary(&self) -> DashboardSummary {
        self.summary_at(Local::now().date_naive()).await
    }

    pub async fn summary_at(&self, today: NaiveDate) -> DashboardSummary {
        let data = self.store.read().await;
        let summary =
            DashboardSummary::build(&data.products, &data.sales, today, self.low_stock_threshold);

        tracing::debug!(
            total_products = summary.total_products,
            low_stock = summary.low_stock_count,
            transactions_today = summary.transactions_today,
            "Dashboard summary built"
        );

        summary
    }
}
