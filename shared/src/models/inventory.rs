//! Stock mutation ledger models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single movement of stock in or out of the shop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockMutation {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Product name at the time of the mutation
    pub product_name: String,
    pub direction: MutationDirection,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub note: String,
}

/// Direction of a stock mutation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MutationDirection {
    In,
    Out,
}

impl MutationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationDirection::In => "in",
            MutationDirection::Out => "out",
        }
    }
}

impl std::fmt::Display for MutationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationDirection::In => write!(f, "Masuk"),
            MutationDirection::Out => write!(f, "Keluar"),
        }
    }
}

/// Why a mutation could not be applied to a stock level
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StockError {
    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("insufficient stock: requested {requested}, available {available}")]
    Insufficient { requested: u32, available: u32 },

    #[error("stock would exceed the maximum representable quantity")]
    Overflow,
}

/// Compute the stock level after applying a mutation.
///
/// An outgoing mutation larger than the current stock is rejected; the
/// caller keeps its previous stock level in that case.
pub fn apply_mutation(
    current: u32,
    direction: MutationDirection,
    quantity: u32,
) -> Result<u32, StockError> {
    if quantity == 0 {
        return Err(StockError::ZeroQuantity);
    }

    match direction {
        MutationDirection::In => current.checked_add(quantity).ok_or(StockError::Overflow),
        MutationDirection::Out => current.checked_sub(quantity).ok_or(StockError::Insufficient {
            requested: quantity,
            available: current,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_in() {
        assert_eq!(apply_mutation(20, MutationDirection::In, 5), Ok(25));
    }

    #[test]
    fn test_apply_out_exact_stock() {
        assert_eq!(apply_mutation(5, MutationDirection::Out, 5), Ok(0));
    }

    #[test]
    fn test_apply_out_insufficient() {
        assert_eq!(
            apply_mutation(2, MutationDirection::Out, 3),
            Err(StockError::Insufficient {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        assert_eq!(
            apply_mutation(2, MutationDirection::In, 0),
            Err(StockError::ZeroQuantity)
        );
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            apply_mutation(u32::MAX, MutationDirection::In, 1),
            Err(StockError::Overflow)
        );
    }
}
