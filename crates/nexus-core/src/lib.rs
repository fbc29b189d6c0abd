//! # nexus-core: Pure Business Logic for Nexus
//!
//! This crate is the **heart** of the Nexus inventory/sales system. It
//! contains all business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Nexus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Inventory UI ──► New Sale UI ──► Purchases UI ──► Reports   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nexus-engine (Services)                      │   │
//! │  │    SessionGate, TransactionProcessor, BulkImporter             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nexus-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │                  │   │
//! │  │   │ Sale/Buy  │  │  parsing  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   nexus-store (Record Store)                    │   │
//! │  │          SQLite-backed collections, repositories                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (User, Client, Provider, Product, Sale, Purchase)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use nexus_core::Money` instead of
// `use nexus_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, ParseMoneyError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Client id of the anonymous walk-in buyer ("Consumidor Final").
///
/// ## Why a constant?
/// Every installation carries exactly one sentinel client. Sales with no
/// named customer are booked against it, so the record must always exist
/// and is never a valid deletion target.
pub const WALK_IN_CLIENT_ID: &str = "cf";

/// Fallback reorder threshold for imported products.
///
/// ## Business Reason
/// Spreadsheet exports frequently leave the min-stock column blank or
/// malformed. A row that is otherwise valid still imports, with this
/// threshold, instead of being rejected.
pub const DEFAULT_MIN_STOCK: i64 = 5;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Configurable per-installation in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
