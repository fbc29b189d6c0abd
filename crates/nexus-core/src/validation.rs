//! # Validation Module
//!
//! Boundary validation for records arriving from the UI layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (engine boundary)                                │
//! │  ├── Required fields, positive quantities                              │
//! │  └── Subtotal/total consistency on ledger records                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Transaction processor                                        │
//! │  ├── Reference resolution (product, client)                            │
//! │  └── Stock availability, duplicate-commit guard                        │
//! │                                                                         │
//! │  Defense in depth: the processor never trusts partially-filled UI      │
//! │  state coerced into a record                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Purchase, Sale};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product code (SKU).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Ledger Record Validators
// =============================================================================

/// Validates a sale before the transaction processor applies it.
///
/// ## Checks
/// - id, client_id and seller_id present
/// - at least one line item
/// - every quantity positive and within range
/// - every subtotal equals quantity × unit price
/// - the total equals the sum of subtotals
pub fn validate_sale(sale: &Sale) -> ValidationResult<()> {
    validate_required("id", &sale.id)?;
    validate_required("client_id", &sale.client_id)?;
    validate_required("seller_id", &sale.seller_id)?;

    if sale.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    let mut expected_total = 0i64;
    for item in &sale.items {
        validate_quantity(item.quantity)?;

        let expected = item.unit_price_cents * item.quantity;
        if item.subtotal_cents != expected {
            return Err(ValidationError::SubtotalMismatch {
                product_id: item.product_id.clone(),
                expected,
                actual: item.subtotal_cents,
            });
        }
        expected_total += expected;
    }

    if sale.total_cents != expected_total {
        return Err(ValidationError::TotalMismatch {
            expected: expected_total,
            actual: sale.total_cents,
        });
    }

    Ok(())
}

/// Validates a purchase before the transaction processor applies it.
///
/// Same shape checks as [`validate_sale`], against the purchase cost
/// fields. The `reference` field is free text and not validated.
pub fn validate_purchase(purchase: &Purchase) -> ValidationResult<()> {
    validate_required("id", &purchase.id)?;
    validate_required("provider_id", &purchase.provider_id)?;

    if purchase.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    let mut expected_total = 0i64;
    for item in &purchase.items {
        validate_quantity(item.quantity)?;

        let expected = item.cost_price_cents * item.quantity;
        if item.subtotal_cents != expected {
            return Err(ValidationError::SubtotalMismatch {
                product_id: item.product_id.clone(),
                expected,
                actual: item.subtotal_cents,
            });
        }
        expected_total += expected;
    }

    if purchase.total_cents != expected_total {
        return Err(ValidationError::TotalMismatch {
            expected: expected_total,
            actual: purchase.total_cents,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
