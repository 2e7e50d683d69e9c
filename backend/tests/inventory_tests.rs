//! Inventory and catalog service tests
//!
//! Tests for:
//! - Stock mutations update stock and the ledger together
//! - Out-mutations larger than stock are rejected without side effects
//! - Catalog filtering and sorting

use chrono::NaiveDate;
use erp_server::error::AppError;
use erp_server::services::inventory::{InventoryService, RecordMutationInput};
use erp_server::services::product::{CreateProductInput, ProductService};
use erp_server::Store;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{MutationDirection, ProductCategory, ProductFilter, ProductSort, StockStatus};
use uuid::Uuid;

fn seeded() -> Store {
    Store::seeded(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())
}

async fn product_id(store: &Store, name: &str) -> Uuid {
    store
        .read()
        .await
        .products
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id)
        .unwrap()
}

fn mutation(product_id: Uuid, direction: MutationDirection, quantity: u32) -> RecordMutationInput {
    RecordMutationInput {
        product_id,
        direction,
        quantity,
        note: Some("Penyesuaian".to_string()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_stock_in_increases_stock() {
        let store = seeded();
        let oil = product_id(&store, "Oli Yamalube").await;
        let service = InventoryService::new(store.clone());

        let recorded = service
            .record_mutation(mutation(oil, MutationDirection::In, 10))
            .await
            .unwrap();

        assert_eq!(recorded.product_name, "Oli Yamalube");
        assert_eq!(store.read().await.product(oil).unwrap().stock, 30);

        let ledger = service.list_mutations().await;
        assert_eq!(ledger[0].id, recorded.id);
    }

    #[tokio::test]
    async fn test_stock_out_decreases_stock() {
        let store = seeded();
        let tire = product_id(&store, "Ban IRC").await;
        let service = InventoryService::new(store.clone());

        service
            .record_mutation(mutation(tire, MutationDirection::Out, 5))
            .await
            .unwrap();

        assert_eq!(store.read().await.product(tire).unwrap().stock, 0);
        assert_eq!(service.product_mutations(tire).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_out_beyond_stock_is_rejected() {
        let store = seeded();
        let filter = product_id(&store, "Filter Udara").await;
        let service = InventoryService::new(store.clone());
        let ledger_before = service.list_mutations().await.len();

        let result = service
            .record_mutation(mutation(filter, MutationDirection::Out, 3))
            .await;

        assert!(matches!(result, Err(AppError::InsufficientStock(_))));
        assert_eq!(store.read().await.product(filter).unwrap().stock, 2);
        assert_eq!(service.list_mutations().await.len(), ledger_before);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected() {
        let store = seeded();
        let oil = product_id(&store, "Oli Yamalube").await;
        let service = InventoryService::new(store);

        let result = service
            .record_mutation(mutation(oil, MutationDirection::In, 0))
            .await;

        assert!(matches!(result, Err(AppError::Validation { ref field, .. }) if field == "quantity"));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let service = InventoryService::new(seeded());
        let result = service
            .record_mutation(mutation(Uuid::new_v4(), MutationDirection::In, 1))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_product_trims_name() {
        let store = Store::new();
        let service = ProductService::new(store, 5);

        let product = service
            .create(CreateProductInput {
                name: "  Busi NGK  ".to_string(),
                category: ProductCategory::Sparepart,
                cost_price: Decimal::from(15_000),
                sale_price: Decimal::from(25_000),
                stock: 12,
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Busi NGK");
        assert_eq!(service.get(product.id).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_create_product_rejects_blank_name_and_negative_price() {
        let service = ProductService::new(Store::new(), 5);

        let blank = service
            .create(CreateProductInput {
                name: "   ".to_string(),
                category: ProductCategory::Oli,
                cost_price: Decimal::ZERO,
                sale_price: Decimal::ZERO,
                stock: 0,
            })
            .await;
        assert!(matches!(blank, Err(AppError::Validation { ref field, .. }) if field == "name"));

        let negative = service
            .create(CreateProductInput {
                name: "Oli Shell".to_string(),
                category: ProductCategory::Oli,
                cost_price: Decimal::from(-1),
                sale_price: Decimal::ZERO,
                stock: 0,
            })
            .await;
        assert!(
            matches!(negative, Err(AppError::Validation { ref field, .. }) if field == "cost_price")
        );

        let oversized = service
            .create(CreateProductInput {
                name: "Oli Shell".to_string(),
                category: ProductCategory::Oli,
                cost_price: Decimal::from(30_000),
                sale_price: Decimal::MAX,
                stock: 0,
            })
            .await;
        assert!(
            matches!(oversized, Err(AppError::Validation { ref field, .. }) if field == "sale_price")
        );
    }

    #[tokio::test]
    async fn test_delete_product() {
        let store = seeded();
        let battery = product_id(&store, "Aki GS").await;
        let service = ProductService::new(store, 5);

        service.delete(battery).await.unwrap();

        assert!(matches!(service.get(battery).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(battery).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_catalog_filters() {
        let service = ProductService::new(seeded(), 5);

        let low = service
            .list(&ProductFilter {
                stock_status: Some(StockStatus::Low),
                ..Default::default()
            })
            .await;
        let mut low_names: Vec<_> = low.iter().map(|p| p.name.as_str()).collect();
        low_names.sort();
        assert_eq!(low_names, ["Ban IRC", "Filter Udara"]);

        let out = service
            .list(&ProductFilter {
                stock_status: Some(StockStatus::Out),
                ..Default::default()
            })
            .await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Aki GS");

        let oils = service
            .list(&ProductFilter {
                category: Some(ProductCategory::Oli),
                ..Default::default()
            })
            .await;
        assert_eq!(oils.len(), 1);
    }

    #[tokio::test]
    async fn test_catalog_sorting() {
        let service = ProductService::new(seeded(), 5);

        let by_stock = service
            .list(&ProductFilter {
                sort: Some(ProductSort::StockDesc),
                ..Default::default()
            })
            .await;
        let stocks: Vec<u32> = by_stock.iter().map(|p| p.stock).collect();
        assert_eq!(stocks, vec![20, 5, 2, 0]);

        let by_name = service
            .list(&ProductFilter {
                sort: Some(ProductSort::NameAsc),
                ..Default::default()
            })
            .await;
        let names: Vec<&str> = by_name.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Aki GS", "Ban IRC", "Filter Udara", "Oli Yamalube"]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn direction_strategy() -> impl Strategy<Value = MutationDirection> {
        prop_oneof![Just(MutationDirection::In), Just(MutationDirection::Out)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Stock always equals the initial stock plus accepted ins minus accepted outs
        #[test]
        fn prop_stock_matches_ledger(
            initial in 0u32..50,
            steps in prop::collection::vec((direction_strategy(), 1u32..30), 1..20),
        ) {
            tokio_test::block_on(async {
                let store = Store::new();
                let products = ProductService::new(store.clone(), 5);
                let product = products
                    .create(CreateProductInput {
                        name: "Kampas Rem".to_string(),
                        category: ProductCategory::Sparepart,
                        cost_price: Decimal::from(20_000),
                        sale_price: Decimal::from(30_000),
                        stock: initial,
                    })
                    .await
                    .unwrap();
                let inventory = InventoryService::new(store.clone());

                let mut expected = initial;
                for (direction, quantity) in steps {
                    let result = inventory
                        .record_mutation(mutation(product.id, direction, quantity))
                        .await;
                    match direction {
                        MutationDirection::In => {
                            prop_assert!(result.is_ok());
                            expected += quantity;
                        }
                        MutationDirection::Out if quantity <= expected => {
                            prop_assert!(result.is_ok());
                            expected -= quantity;
                        }
                        MutationDirection::Out => {
                            prop_assert!(result.is_err());
                        }
                    }
                }

                let stock = store.read().await.product(product.id).unwrap().stock;
                prop_assert_eq!(stock, expected);

                let ledger = inventory.product_mutations(product.id).await.unwrap();
                let net: i64 = ledger
                    .iter()
                    .map(|m| match m.direction {
                        MutationDirection::In => i64::from(m.quantity),
                        MutationDirection::Out => -i64::from(m.quantity),
                    })
                    .sum();
                prop_assert_eq!(i64::from(initial) + net, i64::from(stock));
                Ok(())
            })?;
        }
    }
}
