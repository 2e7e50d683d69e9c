//! Validation utilities for the Mini ERP
//!
//! Form-level checks shared by the backend and the WASM front end.

use rust_decimal::Decimal;

// ============================================================================
// Login
// ============================================================================

/// Validate login form input. Any non-empty email/password pair is accepted.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

// ============================================================================
// Catalog
// ============================================================================

/// Validate product name (required after trimming)
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Product name is required");
    }
    if name.trim().chars().count() > 100 {
        return Err("Product name must be at most 100 characters");
    }
    Ok(())
}

/// Highest accepted unit price (Rp 1.000.000.000.000.000)
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000_000_000;

/// Validate a unit price
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    if price > Decimal::from(MAX_UNIT_PRICE) {
        return Err("Price must not exceed 1,000,000,000,000,000");
    }
    Ok(())
}

// ============================================================================
// Orders and stock
// ============================================================================

/// Validate a mutation or line item quantity
pub fn validate_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Quantity must be at least 1");
    }
    Ok(())
}

/// Validate supplier or customer name
pub fn validate_counterparty(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Supplier or customer is required");
    }
    Ok(())
}
