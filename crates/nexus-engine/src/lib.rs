//! # nexus-engine: Transactional Services for Nexus
//!
//! The services the UI layer calls: session gate, transaction processor,
//! and bulk importer. This is the only crate that writes the
//! sales/purchases ledgers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Nexus Services                                  │
//! │                                                                         │
//! │  UI layer (out of scope: pages, forms, modals, charts, reports)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  nexus-engine (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌────────────────────┐  ┌──────────────┐  │   │
//! │  │   │ SessionGate  │  │ TransactionProcessor│  │ BulkImporter │  │   │
//! │  │   │ login/logout │  │ complete_sale       │  │ CSV → rows   │  │   │
//! │  │   │ current_user │  │ complete_purchase   │  │ → products   │  │   │
//! │  │   └──────────────┘  └────────────────────┘  └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  nexus-store (collections) ──► SQLite                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Authentication and the current-session record
//! - [`checkout`] - Sale/purchase application with atomic commits
//! - [`import`] - Bulk CSV product import
//! - [`error`] - Engine error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nexus_engine::{SessionGate, TransactionProcessor};
//! use nexus_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("./nexus.db")).await?;
//! let gate = SessionGate::new(store.clone());
//! let seller = gate.login("juan", "password").await?;
//!
//! let processor = TransactionProcessor::new(store.clone());
//! processor.complete_sale(&sale).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod import;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::TransactionProcessor;
pub use error::{EngineError, EngineResult};
pub use import::{BulkImporter, ImportSummary};
pub use session::SessionGate;
