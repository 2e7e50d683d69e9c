//! Line item capture shared by purchase and sales orders

use std::collections::HashMap;

use shared::{
    aggregate, validate_quantity, LineItemInput, OrderLineItem, OrderTotals, UnitPrices,
};

use crate::error::{check, AppError, AppResult};
use crate::store::StoreData;

/// Line items with catalog prices frozen at order time, plus their totals
pub struct CapturedLines {
    pub items: Vec<OrderLineItem>,
    pub totals: OrderTotals,
}

/// Resolve line items against the catalog, capturing unit cost and, for
/// sales, the unit sale price.
///
/// Every product must exist: a stored order never carries zero-priced
/// unknown lines. Totals that leave the representable range are rejected.
pub fn capture_lines(
    data: &StoreData,
    inputs: &[LineItemInput],
    with_sale_price: bool,
) -> AppResult<CapturedLines> {
    let mut prices = HashMap::with_capacity(inputs.len());
    let mut items = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        check(&format!("items[{}].quantity", index), validate_quantity(input.quantity))?;
        let product = data
            .product(input.product_id)
            .ok_or_else(|| AppError::NotFound(format!("Product {}", input.product_id)))?;

        prices.insert(
            product.id,
            UnitPrices::new(product.cost_price, product.sale_price),
        );
        items.push(OrderLineItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: input.quantity,
            unit_cost: product.cost_price,
            unit_sale: with_sale_price.then_some(product.sale_price),
        });
    }

    let totals = aggregate(inputs, &prices);
    if totals.overflowed {
        return Err(AppError::invalid("items", "Order total is too large"));
    }

    Ok(CapturedLines { items, totals })
}
