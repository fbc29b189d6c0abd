//! # Domain Types
//!
//! Core domain records used throughout Nexus.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Records                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Purchase     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  code (SKU)     │   │  items[]        │   │  items[]        │       │
//! │  │  price_cents    │   │  total_cents    │   │  total_cents    │       │
//! │  │  stock          │   │  client_id      │   │  provider_id    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │     Client      │   │    Provider     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  username       │   │  total_spent    │   │  contact_name   │       │
//! │  │  password_hash  │   │  tax_id         │   │  category       │       │
//! │  │  role           │   │  ("cf" = walk-in│   │                 │       │
//! │  └─────────────────┘   │   sentinel)     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sale and purchase line items carry the product name and unit price *at
//! the time of the transaction*. Ledger records stay truthful even when the
//! product is later renamed, repriced, or deleted.
//!
//! ## Field Presence
//! The persisted collections carry no schema version. Every optional field
//! uses `#[serde(default)]` so records written by older builds (or the
//! original frontend) deserialize with absent fields defaulted rather than
//! failing the whole collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// Access role of a user account.
///
/// Serialized in SCREAMING_SNAKE_CASE (`"ADMIN"`) to stay byte-compatible
/// with the collections the original frontend persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full access, including user management.
    Admin,
    /// Point-of-sale access.
    Seller,
    /// Inventory and purchasing access.
    Warehouse,
}

// =============================================================================
// User
// =============================================================================

/// A user account that can sign in to the system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Login name - unique among users.
    pub username: String,

    /// Argon2 PHC hash of the password. `None` means a passwordless
    /// account; such accounts cannot authenticate. Plaintext passwords are
    /// never stored.
    #[serde(default)]
    pub password_hash: Option<String>,

    /// Access role.
    pub role: Role,

    /// Inactive accounts cannot sign in.
    pub is_active: bool,

    /// Optional avatar as a data URI.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl User {
    /// Returns a copy safe to hand outside the auth boundary: the password
    /// hash is cleared. This is what gets persisted as the session record.
    pub fn sanitized(&self) -> User {
        User {
            password_hash: None,
            ..self.clone()
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// A customer. `total_spent_cents` is a lifetime accumulator maintained by
/// the transaction processor - never written directly by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Fiscal identifier (RUC/NIT/RFC).
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Lifetime spend in cents. Incremented by exactly the sale total on
    /// every committed sale.
    pub total_spent_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Client {
    /// Lifetime spend as money.
    #[inline]
    pub fn total_spent(&self) -> Money {
        Money::from_cents(self.total_spent_cents)
    }
}

// =============================================================================
// Provider
// =============================================================================

/// A supplier that inventory is purchased from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    /// Free-text tag ("Technology", "Services", ...).
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product in inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Human-readable SKU. Users are expected to keep these unique; the
    /// system does not enforce it.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Sale price in cents.
    pub price_cents: i64,

    /// Last acquisition cost in cents. Overwritten by every purchase that
    /// references this product (last purchase price wins, no averaging).
    pub cost_cents: i64,

    /// Quantity on hand.
    pub stock: i64,

    /// Reorder threshold.
    pub min_stock: i64,

    /// Category tag.
    pub category_id: String,

    /// Optional image as a data URI.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Returns the sale price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the last acquisition cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Whether stock has fallen to or below the reorder threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
/// Uses the snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleItem {
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    /// Quantity sold. Always positive.
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Line total (unit_price × quantity).
    pub subtotal_cents: i64,
}

impl SaleItem {
    /// Builds a line item from a product, freezing its name and price.
    pub fn for_product(product: &Product, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price_cents: product.price_cents,
            subtotal_cents: product.price_cents * quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

/// A completed sale. Ledger records are append-only: once committed, a
/// sale is never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub client_id: String,
    /// Client name at time of sale (frozen).
    pub client_name: String,
    pub seller_id: String,
    /// Ordered line items.
    pub items: Vec<SaleItem>,
    /// Always equals the sum of item subtotals.
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
}

impl Sale {
    /// Builds a sale from its line items, computing the total.
    ///
    /// This is the only constructor the UI layer should use: a record
    /// built here cannot carry a total that disagrees with its items.
    pub fn from_items(
        id: impl Into<String>,
        date: DateTime<Utc>,
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        seller_id: impl Into<String>,
        items: Vec<SaleItem>,
        payment_method: PaymentMethod,
    ) -> Sale {
        let total_cents = items.iter().map(|i| i.subtotal_cents).sum();
        Sale {
            id: id.into(),
            date,
            client_id: client_id.into(),
            client_name: client_name.into(),
            seller_id: seller_id.into(),
            items,
            total_cents,
            payment_method,
        }
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// A line item in a purchase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseItem {
    pub product_id: String,
    /// Product name at time of purchase (frozen).
    pub product_name: String,
    /// Quantity received. Always positive.
    pub quantity: i64,
    /// Unit acquisition cost in cents for this purchase.
    pub cost_price_cents: i64,
    /// Line total (cost_price × quantity).
    pub subtotal_cents: i64,
}

impl PurchaseItem {
    /// Builds a line item from a product at a given unit cost.
    pub fn for_product(product: &Product, quantity: i64, cost_price: Money) -> PurchaseItem {
        PurchaseItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            cost_price_cents: cost_price.cents(),
            subtotal_cents: cost_price.cents() * quantity,
        }
    }

    /// Returns the unit cost as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_price_cents)
    }
}

/// A completed purchase from a provider. Append-only, like [`Sale`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Purchase {
    pub id: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub provider_id: String,
    /// Provider name at time of purchase (frozen).
    pub provider_name: String,
    /// Ordered line items.
    pub items: Vec<PurchaseItem>,
    /// Always equals the sum of item subtotals.
    pub total_cents: i64,
    /// Free-text invoice/remit number.
    #[serde(default)]
    pub reference: Option<String>,
}

impl Purchase {
    /// Builds a purchase from its line items, computing the total.
    pub fn from_items(
        id: impl Into<String>,
        date: DateTime<Utc>,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
        items: Vec<PurchaseItem>,
        reference: Option<String>,
    ) -> Purchase {
        let total_cents = items.iter().map(|i| i.subtotal_cents).sum();
        Purchase {
            id: id.into(),
            date,
            provider_id: provider_id.into(),
            provider_name: provider_name.into(),
            items,
            total_cents,
            reference,
        }
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            code: format!("SKU-{id}"),
            name: format!("Product {id}"),
            description: String::new(),
            price_cents,
            cost_cents: price_cents / 2,
            stock: 10,
            min_stock: 2,
            category_id: "misc".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_sale_from_items_computes_total() {
        let p1 = product("p1", 1200);
        let p2 = product("p2", 350);

        let sale = Sale::from_items(
            "s1",
            Utc::now(),
            "c1",
            "Corporación Alpha",
            "1",
            vec![
                SaleItem::for_product(&p1, 2),
                SaleItem::for_product(&p2, 1),
            ],
            PaymentMethod::Cash,
        );

        assert_eq!(sale.items[0].subtotal_cents, 2400);
        assert_eq!(sale.total_cents, 2750);
        assert_eq!(sale.total(), Money::from_cents(2750));
    }

    #[test]
    fn test_purchase_from_items_computes_total() {
        let p1 = product("p1", 1200);

        let purchase = Purchase::from_items(
            "b1",
            Utc::now(),
            "pr1",
            "TechSupply Inc",
            vec![PurchaseItem::for_product(&p1, 10, Money::from_cents(800))],
            Some("INV-0042".to_string()),
        );

        assert_eq!(purchase.items[0].subtotal_cents, 8000);
        assert_eq!(purchase.total_cents, 8000);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let mut p = product("p1", 100);
        p.min_stock = 10;

        p.stock = 11;
        assert!(!p.is_low_stock());
        p.stock = 10;
        assert!(p.is_low_stock());
        p.stock = 0;
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transfer).unwrap(),
            "\"TRANSFER\""
        );
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        // Records persisted by the original frontend carry no image_url or
        // reference keys at all - they must still deserialize.
        let json = r#"{
            "id": "c9", "name": "Ana", "tax_id": "1-9", "email": "a@b.c",
            "phone": "555", "address": "x", "total_spent_cents": 0
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert!(client.image_url.is_none());
    }

    #[test]
    fn test_sanitized_user_drops_hash() {
        let user = User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@nexus.com".to_string(),
            username: "admin".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
            role: Role::Admin,
            is_active: true,
            image_url: None,
        };
        assert!(user.sanitized().password_hash.is_none());
        assert_eq!(user.sanitized().username, "admin");
    }
}
