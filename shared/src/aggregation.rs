//! Order total aggregation
//!
//! Computes per-line subtotals and cost / sale / margin totals for a list of
//! line items against a price lookup. A product the lookup cannot resolve
//! contributes zero to every total instead of failing the computation, so a
//! stale product reference never blocks order entry. Callers that need strict
//! totals check `OrderTotals::unpriced_products` first.
//!
//! Arithmetic never panics: a product or sum outside the `Decimal` range is
//! clamped to the nearest bound and `OrderTotals::overflowed` is set.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{OrderLineItem, Product};

/// Unit prices of a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UnitPrices {
    pub cost: Decimal,
    pub sale: Decimal,
}

impl UnitPrices {
    pub fn new(cost: Decimal, sale: Decimal) -> Self {
        Self { cost, sale }
    }
}

/// Resolves the current prices of a product
pub trait PriceLookup {
    fn price_of(&self, product_id: &Uuid) -> Option<UnitPrices>;
}

impl PriceLookup for [Product] {
    fn price_of(&self, product_id: &Uuid) -> Option<UnitPrices> {
        self.iter()
            .find(|p| p.id == *product_id)
            .map(|p| UnitPrices::new(p.cost_price, p.sale_price))
    }
}

impl PriceLookup for Vec<Product> {
    fn price_of(&self, product_id: &Uuid) -> Option<UnitPrices> {
        self.as_slice().price_of(product_id)
    }
}

impl PriceLookup for HashMap<Uuid, UnitPrices> {
    fn price_of(&self, product_id: &Uuid) -> Option<UnitPrices> {
        self.get(product_id).copied()
    }
}

/// Anything that pairs a product with a quantity
pub trait QuantityLine {
    fn product_id(&self) -> Uuid;
    fn quantity(&self) -> u32;
}

/// A line item as entered on an order form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItemInput {
    pub product_id: Uuid,
    pub quantity: u32,
}

impl QuantityLine for LineItemInput {
    fn product_id(&self) -> Uuid {
        self.product_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl QuantityLine for OrderLineItem {
    fn product_id(&self) -> Uuid {
        self.product_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Subtotals for one line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotals {
    pub product_id: Uuid,
    pub quantity: u32,
    /// Prices used for this line; zero when the lookup failed
    pub unit_prices: UnitPrices,
    /// False when the lookup failed and the line was counted as zero
    pub priced: bool,
    pub cost_subtotal: Decimal,
    pub sale_subtotal: Decimal,
}

/// Result of aggregating an order's line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderTotals {
    pub lines: Vec<LineTotals>,
    pub cost_total: Decimal,
    pub sale_total: Decimal,
    /// `sale_total - cost_total`
    pub margin: Decimal,
    /// True when some amount left the `Decimal` range and was clamped
    #[serde(default)]
    pub overflowed: bool,
}

impl OrderTotals {
    /// Product ids the lookup could not resolve, in line order
    pub fn unpriced_products(&self) -> Vec<Uuid> {
        self.lines
            .iter()
            .filter(|l| !l.priced)
            .map(|l| l.product_id)
            .collect()
    }
}

/// Aggregate line items against a price lookup
pub fn aggregate<L, P>(items: &[L], prices: &P) -> OrderTotals
where
    L: QuantityLine,
    P: PriceLookup + ?Sized,
{
    let mut totals = OrderTotals::default();

    for item in items {
        let product_id = item.product_id();
        let quantity = item.quantity();
        let found = prices.price_of(&product_id);
        let unit_prices = found.unwrap_or_default();
        let qty = Decimal::from(quantity);

        let line = LineTotals {
            product_id,
            quantity,
            unit_prices,
            priced: found.is_some(),
            cost_subtotal: mul(unit_prices.cost, qty, &mut totals.overflowed),
            sale_subtotal: mul(unit_prices.sale, qty, &mut totals.overflowed),
        };

        totals.cost_total = add(totals.cost_total, line.cost_subtotal, &mut totals.overflowed);
        totals.sale_total = add(totals.sale_total, line.sale_subtotal, &mut totals.overflowed);
        totals.lines.push(line);
    }

    totals.margin = sub(totals.sale_total, totals.cost_total, &mut totals.overflowed);
    totals
}

fn mul(a: Decimal, b: Decimal, overflowed: &mut bool) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        *overflowed = true;
        a.saturating_mul(b)
    })
}

fn add(a: Decimal, b: Decimal, overflowed: &mut bool) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        *overflowed = true;
        a.saturating_add(b)
    })
}

fn sub(a: Decimal, b: Decimal, overflowed: &mut bool) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        *overflowed = true;
        a.saturating_sub(b)
    })
}

/// Aggregate form line items against the product catalog
pub fn compute_order_totals(items: &[LineItemInput], catalog: &[Product]) -> OrderTotals {
    aggregate(items, catalog)
}
