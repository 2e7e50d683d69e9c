//! Product catalog service

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    compute_order_totals, validate_price, validate_product_name, LineItemInput, OrderTotals,
    Product, ProductCategory, ProductFilter,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{check, AppError, AppResult};
use crate::store::Store;

/// Product service for managing the catalog
#[derive(Clone)]
pub struct ProductService {
    store: Store,
    low_stock_threshold: u32,
}

/// Input for adding a product
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(length(max = 100, message = "Product name must be at most 100 characters"))]
    pub name: String,
    pub category: ProductCategory,
    pub cost_price: Decimal,
    pub sale_price: Decimal,
    #[serde(default)]
    pub stock: u32,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(store: Store, low_stock_threshold: u32) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }

    /// List products matching a filter, sorted as requested
    pub async fn list(&self, filter: &ProductFilter) -> Vec<Product> {
        let data = self.store.read().await;
        filter.apply(&data.products, self.low_stock_threshold)
    }

    /// Get a product by id
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        let data = self.store.read().await;
        data.product(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }

    /// Add a product to the catalog
    pub async fn create(&self, input: CreateProductInput) -> AppResult<Product> {
        input.validate()?;
        check("name", validate_product_name(&input.name))?;
        check("cost_price", validate_price(input.cost_price))?;
        check("sale_price", validate_price(input.sale_price))?;

        let product = Product {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            category: input.category,
            cost_price: input.cost_price,
            sale_price: input.sale_price,
            stock: input.stock,
        };

        self.store.write().await.products.push(product.clone());

        tracing::info!(
            product_id = %product.id,
            name = %product.name,
            category = %product.category,
            "Product added"
        );

        Ok(product)
    }

    /// Remove a product from the catalog
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.store.write().await;
        let index = data
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
        let removed = data.products.remove(index);

        tracing::info!(product_id = %id, name = %removed.name, "Product deleted");

        Ok(())
    }

    /// Price a draft order against the current catalog.
    /// Unknown products count as zero instead of failing.
    pub async fn quote(&self, items: &[LineItemInput]) -> OrderTotals {
        let data = self.store.read().await;
        compute_order_totals(items, &data.products)
    }
}
