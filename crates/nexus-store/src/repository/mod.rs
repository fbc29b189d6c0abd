//! # Repository Module
//!
//! Typed repositories over the named collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Service / UI layer                                                    │
//! │       │                                                                 │
//! │       │  store.products().upsert(&product)                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list()        load collection (seed on first access)              │
//! │  ├── upsert(&p)    replace-by-id or append, save whole collection      │
//! │  ├── delete(id)    filter-by-id, save (no-op on unknown id)            │
//! │  └── low_stock()   derived read                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  collections table (one JSON array per collection)                     │
//! │                                                                         │
//! │  Upsert is idempotent by id: applying the same record twice leaves     │
//! │  the collection in the same state as applying it once.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`users::UserRepository`] - accounts, username lookup for login
//! - [`clients::ClientRepository`] - customers, walk-in sentinel guard
//! - [`providers::ProviderRepository`] - suppliers
//! - [`products::ProductRepository`] - inventory, low-stock report
//! - [`ledger::SaleRepository`] / [`ledger::PurchaseRepository`] - append-only
//!   ledgers (read side; appends go through the transaction processor)

pub mod clients;
pub mod ledger;
pub mod products;
pub mod providers;
pub mod users;
