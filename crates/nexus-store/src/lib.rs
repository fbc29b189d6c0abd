//! # nexus-store: Record Store for Nexus
//!
//! This crate provides persistence for the Nexus inventory/sales system.
//! It stores each named collection as a whole JSON payload in SQLite,
//! seeded with fixture data on first access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Nexus Data Flow                                 │
//! │                                                                         │
//! │  Service call (complete_sale, import, login)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    nexus-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (users, ...)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ load_or_seed  │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │    │ save (whole   │    │              │  │   │
//! │  │   │ Management    │    │  collection)  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database: collections(key, payload)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`collections`] - Generic whole-collection load/seed/save primitives
//! - [`repository`] - Typed repositories (users, clients, providers,
//!   products, ledgers)
//! - [`session`] - Singleton session record
//! - [`seed`] - Fixture dataset for first launch
//! - [`credentials`] - Argon2 password hashing/verification
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nexus_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/nexus.db")).await?;
//! let products = store.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collections;
pub mod credentials;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::clients::ClientRepository;
pub use repository::ledger::{PurchaseRepository, SaleRepository};
pub use repository::products::ProductRepository;
pub use repository::providers::ProviderRepository;
pub use repository::users::UserRepository;
pub use session::SessionRepository;
