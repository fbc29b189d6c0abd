//! # Product Repository
//!
//! Inventory storage.
//!
//! ## Who Writes Stock
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI form edits        → upsert()        (price, name, thresholds...)   │
//! │  Bulk CSV import      → replace_all()   (one save for the whole batch) │
//! │  Sales / purchases    → transaction processor (atomic with the ledger) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Stock adjustments from checkout never go through this repository -
//! they must land in the same commit as the ledger append.

use sqlx::SqlitePool;
use tracing::debug;

use crate::collections::{self, keys};
use crate::error::StoreResult;
use crate::seed;
use nexus_core::Product;

/// Repository for products.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products, seeding the fixtures on first access.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        collections::load_or_seed(&self.pool, keys::PRODUCTS, || Ok(seed::products())).await
    }

    /// Inserts or replaces a product by id.
    pub async fn upsert(&self, product: &Product) -> StoreResult<()> {
        debug!(id = %product.id, code = %product.code, "Upserting product");

        let mut products = self.list().await?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        collections::save(&self.pool, keys::PRODUCTS, &products).await
    }

    /// Deletes a product by id. Unknown ids are a no-op.
    ///
    /// Ledger records that reference the product keep their name/price
    /// snapshots, so history stays intact.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(%id, "Deleting product");

        let mut products = self.list().await?;
        products.retain(|p| p.id != id);
        collections::save(&self.pool, keys::PRODUCTS, &products).await
    }

    /// Replaces the entire collection in one save.
    ///
    /// Used by the bulk importer, which builds the updated collection in
    /// memory and persists the batch with a single write.
    pub async fn replace_all(&self, products: &[Product]) -> StoreResult<()> {
        debug!(count = products.len(), "Replacing product collection");

        collections::save(&self.pool, keys::PRODUCTS, products).await
    }

    /// Products at or below their reorder threshold.
    pub async fn low_stock(&self) -> StoreResult<Vec<Product>> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(|p| p.is_low_stock()).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
