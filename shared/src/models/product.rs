//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{blank_as_none, ParseEnumError};

/// Default stock level at or below which a product counts as running low
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the shop catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: ProductCategory,
    /// Unit purchase (modal) price
    pub cost_price: Decimal,
    /// Unit selling (jual) price
    pub sale_price: Decimal,
    pub stock: u32,
}

impl Product {
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::classify(self.stock, low_stock_threshold)
    }
}

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Oli,
    Ban,
    Aki,
    Sparepart,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Oli => write!(f, "Oli"),
            ProductCategory::Ban => write!(f, "Ban"),
            ProductCategory::Aki => write!(f, "Aki"),
            ProductCategory::Sparepart => write!(f, "Sparepart"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oli" => Ok(ProductCategory::Oli),
            "ban" => Ok(ProductCategory::Ban),
            "aki" => Ok(ProductCategory::Aki),
            "sparepart" => Ok(ProductCategory::Sparepart),
            _ => Err(ParseEnumError::new("product category", s)),
        }
    }
}

/// Stock availability bucket used by the catalog filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Above the low-stock threshold
    Available,
    /// Between 1 and the threshold (inclusive)
    Low,
    /// Nothing left
    Out,
}

impl StockStatus {
    pub fn classify(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::Out
        } else if stock <= low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(StockStatus::Available),
            "low" => Ok(StockStatus::Low),
            "out" => Ok(StockStatus::Out),
            _ => Err(ParseEnumError::new("stock status", s)),
        }
    }
}

/// Sort orders offered by the catalog table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    NameAsc,
    NameDesc,
    StockAsc,
    StockDesc,
}

impl std::str::FromStr for ProductSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name_asc" => Ok(ProductSort::NameAsc),
            "name_desc" => Ok(ProductSort::NameDesc),
            "stock_asc" => Ok(ProductSort::StockAsc),
            "stock_desc" => Ok(ProductSort::StockDesc),
            _ => Err(ParseEnumError::new("sort order", s)),
        }
    }
}

/// Catalog filter; unset or blank fields match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<ProductCategory>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub stock_status: Option<StockStatus>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sort: Option<ProductSort>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product, low_stock_threshold: u32) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(status) = self.stock_status {
            if product.stock_status(low_stock_threshold) != status {
                return false;
            }
        }
        true
    }

    /// Filter and sort a catalog snapshot. Without a sort key the input order is kept.
    pub fn apply(&self, products: &[Product], low_stock_threshold: u32) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p, low_stock_threshold))
            .cloned()
            .collect();

        match self.sort {
            Some(ProductSort::NameAsc) => result.sort_by_key(|p| p.name.to_lowercase()),
            Some(ProductSort::NameDesc) => {
                result.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
            }
            Some(ProductSort::StockAsc) => result.sort_by_key(|p| p.stock),
            Some(ProductSort::StockDesc) => result.sort_by(|a, b| b.stock.cmp(&a.stock)),
            None => {}
        }

        result
    }
}
