//! WebAssembly module for the Mini ERP
//!
//! Provides client-side computation for:
//! - Note number previews on the order forms
//! - Order totals while line items are being edited
//! - Form validation before submit

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::{LineItemInput, OrderTotals, Product, StockStatus};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

fn parse_existing(existing_json: &str) -> Result<Vec<String>, String> {
    if existing_json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(existing_json).map_err(|e| format!("Invalid note numbers JSON: {}", e))
}

fn note_number_at(prefix: &str, existing_json: &str, now: NaiveDateTime) -> Result<String, String> {
    let existing = parse_existing(existing_json)?;
    Ok(shared::generate_note_number(prefix, &existing, now))
}

fn note_number_on(
    prefix: &str,
    existing_json: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<String, String> {
    let now = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("Invalid date: {}-{}-{}", year, month, day))?;
    note_number_at(prefix, existing_json, now)
}

fn order_totals(items_json: &str, catalog_json: &str) -> Result<OrderTotals, String> {
    let items: Vec<LineItemInput> = serde_json::from_str(items_json)
        .map_err(|e| format!("Invalid line items JSON: {}", e))?;
    let catalog: Vec<Product> = serde_json::from_str(catalog_json)
        .map_err(|e| format!("Invalid catalog JSON: {}", e))?;
    Ok(shared::compute_order_totals(&items, &catalog))
}

/// Local wall-clock time of the browser
fn browser_now() -> Option<NaiveDateTime> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())?
        .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Next note number for today, given the note numbers already issued (JSON array of strings)
#[wasm_bindgen]
pub fn generate_note_number(prefix: &str, existing_json: &str) -> Result<String, JsValue> {
    let now = browser_now().ok_or_else(|| JsValue::from_str("Invalid browser clock"))?;
    note_number_at(prefix, existing_json, now).map_err(|e| JsValue::from_str(&e))
}

/// Next note number for an explicit calendar day
#[wasm_bindgen]
pub fn generate_note_number_at(
    prefix: &str,
    existing_json: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<String, JsValue> {
    note_number_on(prefix, existing_json, year, month, day).map_err(|e| JsValue::from_str(&e))
}

/// Compute cost, sale and margin totals for draft line items against a catalog.
/// Returns the totals as JSON.
#[wasm_bindgen]
pub fn compute_order_totals(items_json: &str, catalog_json: &str) -> Result<String, JsValue> {
    let totals = order_totals(items_json, catalog_json).map_err(|e| JsValue::from_str(&e))?;

    let unpriced = totals.unpriced_products();
    if !unpriced.is_empty() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "{} line item(s) reference unknown products and count as zero",
            unpriced.len()
        )));
    }

    serde_json::to_string(&totals).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate the login form; returns the error message, if any
#[wasm_bindgen]
pub fn validate_login_form(email: &str, password: &str) -> Option<String> {
    validate_login(email, password).err().map(str::to_string)
}

/// Stock badge for a product row ("available", "low" or "out")
#[wasm_bindgen]
pub fn classify_stock(stock: u32, low_stock_threshold: u32) -> String {
    match StockStatus::classify(stock, low_stock_threshold) {
        StockStatus::Available => "available",
        StockStatus::Low => "low",
        StockStatus::Out => "out",
    }
    .to_string()
}

/// Format a money amount with thousands separators, e.g. "Rp 1.250.000"
#[wasm_bindgen]
pub fn format_rupiah(amount: &str) -> String {
    let value = amount.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO).round();
    let digits = value.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if value.is_sign_negative() && !value.is_zero() {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}
