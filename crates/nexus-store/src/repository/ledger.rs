//! # Ledger Repositories
//!
//! Read side of the sales and purchases ledgers.
//!
//! ## Append-Only Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ledger writes have exactly one author: the transaction processor.     │
//! │                                                                         │
//! │  complete_sale ──► append + stock + client spend   (one commit)        │
//! │  complete_purchase ──► append + stock + cost       (one commit)        │
//! │                                                                         │
//! │  These repositories expose list() and contains() only. There is no     │
//! │  upsert and no delete: a committed sale or purchase is immutable       │
//! │  history.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! `contains()` backs the duplicate-commit guard: replaying a sale id
//! that is already in the ledger must be rejected, not double-applied.

use sqlx::SqlitePool;

use crate::collections::{self, keys};
use crate::error::StoreResult;
use nexus_core::{Purchase, Sale};

/// Read-side repository for the sales ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Lists the full sales ledger, oldest first. Ledgers seed empty.
    pub async fn list(&self) -> StoreResult<Vec<Sale>> {
        collections::load_or_seed(&self.pool, keys::SALES, || Ok(Vec::new())).await
    }

    /// Whether a sale id is already in the ledger.
    pub async fn contains(&self, id: &str) -> StoreResult<bool> {
        Ok(self.list().await?.iter().any(|s| s.id == id))
    }
}

/// Read-side repository for the purchases ledger.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Creates a new PurchaseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseRepository { pool }
    }

    /// Lists the full purchases ledger, oldest first. Ledgers seed empty.
    pub async fn list(&self) -> StoreResult<Vec<Purchase>> {
        collections::load_or_seed(&self.pool, keys::PURCHASES, || Ok(Vec::new())).await
    }

    /// Whether a purchase id is already in the ledger.
    pub async fn contains(&self, id: &str) -> StoreResult<bool> {
        Ok(self.list().await?.iter().any(|p| p.id == id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    #[tokio::test]
    async fn test_ledgers_seed_empty() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();

        assert!(store.sales().list().await.unwrap().is_empty());
        assert!(store.purchases().list().await.unwrap().is_empty());
        assert!(!store.sales().contains("s1").await.unwrap());
    }
}
