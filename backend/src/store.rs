//! In-memory data store
//!
//! Holds the catalog, the stock ledger and the order books for the lifetime
//! of the server process. The store is created at startup (optionally seeded
//! with demo data) and injected into every service through [`AppState`].
//! Nothing is persisted; everything is discarded on shutdown.
//!
//! [`AppState`]: crate::AppState

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::{
    OrderLineItem, Product, ProductCategory, PurchaseOrder, PurchaseStatus, SalesOrder,
    SalesStatus, StockMutation,
};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Collections held by the store
#[derive(Debug, Default)]
pub struct StoreData {
    pub products: Vec<Product>,
    /// Newest first
    pub mutations: Vec<StockMutation>,
    pub purchases: Vec<PurchaseOrder>,
    pub sales: Vec<SalesOrder>,
}

impl StoreData {
    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: Uuid) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn purchase_note_numbers(&self) -> impl Iterator<Item = &str> {
        self.purchases.iter().map(|po| po.note_number.as_str())
    }

    pub fn sales_note_numbers(&self) -> impl Iterator<Item = &str> {
        self.sales.iter().map(|so| so.note_number.as_str())
    }
}

/// Shared handle to the in-memory data
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreData>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with demo catalog and orders.
    /// Sales are dated relative to `today` so the dashboard has recent activity.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed_data(today))),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}

fn product(
    name: &str,
    category: ProductCategory,
    cost: i64,
    sale: i64,
    stock: u32,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        cost_price: Decimal::from(cost),
        sale_price: Decimal::from(sale),
        stock,
    }
}

fn line(product: &Product, quantity: u32, unit_cost: i64, with_sale: bool) -> OrderLineItem {
    OrderLineItem {
        product_id: product.id,
        product_name: product.name.clone(),
        quantity,
        unit_cost: Decimal::from(unit_cost),
        unit_sale: with_sale.then_some(product.sale_price),
    }
}

fn seed_data(today: NaiveDate) -> StoreData {
    let oil = product("Oli Yamalube", ProductCategory::Oli, 30_000, 40_000, 20);
    let tire = product("Ban IRC", ProductCategory::Ban, 200_000, 250_000, 5);
    let battery = product("Aki GS", ProductCategory::Aki, 250_000, 300_000, 0);
    let filter = product("Filter Udara", ProductCategory::Sparepart, 35_000, 50_000, 2);

    let purchases = vec![
        {
            let items = vec![line(&oil, 5, 50_000, false), line(&tire, 2, 150_000, false)];
            PurchaseOrder {
                id: Uuid::new_v4(),
                note_number: "PO20250601-001".to_string(),
                supplier: "PT Oli Motor".to_string(),
                order_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or(today),
                status: PurchaseStatus::Ordered,
                total_amount: PurchaseOrder::compute_total(&items),
                items,
            }
        },
        {
            let items = vec![line(&battery, 3, 250_000, false)];
            PurchaseOrder {
                id: Uuid::new_v4(),
                note_number: "PO20250615-001".to_string(),
                supplier: "CV. Sumber Makmur".to_string(),
                order_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or(today),
                status: PurchaseStatus::Draft,
                total_amount: PurchaseOrder::compute_total(&items),
                items,
            }
        },
    ];

    let sale = |customer: &str,
                date: NaiveDate,
                seq: u32,
                status: SalesStatus,
                items: Vec<OrderLineItem>| {
        let total_amount = SalesOrder::compute_total(&items);
        let cost_total = SalesOrder::compute_cost_total(&items);
        SalesOrder {
            id: Uuid::new_v4(),
            note_number: format!("SO{}-{:03}", date.format("%Y%m%d"), seq),
            customer: customer.to_string(),
            order_date: date,
            status,
            items,
            total_amount,
            cost_total,
            margin: total_amount - cost_total,
        }
    };
    let yesterday = today - Duration::days(1);
    let sales = vec![
        sale(
            "Budi Santoso",
            yesterday,
            1,
            SalesStatus::Completed,
            vec![line(&oil, 5, 30_000, true), line(&filter, 1, 35_000, true)],
        ),
        sale(
            "Sari Dewi",
            today,
            1,
            SalesStatus::Ordered,
            vec![line(&tire, 2, 200_000, true)],
        ),
    ];

    let mutations = vec![StockMutation {
        id: Uuid::new_v4(),
        product_id: oil.id,
        product_name: oil.name.clone(),
        direction: shared::MutationDirection::In,
        quantity: 20,
        created_at: Utc::now(),
        note: "Stok awal".to_string(),
    }];

    StoreData {
        products: vec![oil, tire, battery, filter],
        mutations,
        purchases,
        sales,
    }
}
