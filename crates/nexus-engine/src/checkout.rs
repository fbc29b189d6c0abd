//! # Transaction Processor
//!
//! Applies sales and purchases as single logical units.
//!
//! ## What One Commit Covers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     complete_sale(sale)                                 │
//! │                                                                         │
//! │  1. validate shape      items non-empty, totals consistent             │
//! │  2. duplicate guard     sale.id not already in the ledger              │
//! │  3. resolve products    every line's product_id must exist             │
//! │  4. stock check         cumulative per product, no oversell            │
//! │  5. resolve client      sale.client_id must exist                      │
//! │     ── nothing written up to here ──                                   │
//! │  6. apply in memory     ledger append, stock -= qty,                   │
//! │                         client.total_spent += sale.total              │
//! │  7. ONE SQLite transaction persists sales + products + clients        │
//! │                                                                         │
//! │  complete_purchase is analogous: ledger append, stock += qty,          │
//! │  product.cost = line cost (last purchase price wins), no client leg.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validation and reference resolution happens before the first
//! write, and the writes share one transaction - a rejected or failed
//! operation leaves every collection exactly as it was.
//!
//! ## Oversell Policy
//! The processor rejects a sale whose cumulative quantity for any product
//! exceeds the stock on hand. The UI performs its own availability check
//! when building the cart; that check is advisory - this one is
//! authoritative.

use std::collections::HashMap;

use tracing::info;

use nexus_core::{validation, CoreError, Purchase, Sale};
use nexus_store::collections::{self, keys};
use nexus_store::Store;

use crate::error::{EngineError, EngineResult};

/// Applies sales and purchases against the record store.
#[derive(Debug, Clone)]
pub struct TransactionProcessor {
    store: Store,
}

impl TransactionProcessor {
    /// Creates a new TransactionProcessor.
    pub fn new(store: Store) -> Self {
        TransactionProcessor { store }
    }

    /// Commits a sale: ledger append, stock decrements, client spend.
    ///
    /// ## Errors
    /// - [`EngineError::DuplicateTransaction`] - the sale id was already applied
    /// - [`EngineError::UnknownProduct`] / [`EngineError::UnknownClient`] -
    ///   a reference doesn't resolve; the whole sale is rejected
    /// - [`CoreError::InsufficientStock`] - cumulative quantity exceeds stock
    /// - [`EngineError::Core`] - the record shape is inconsistent
    pub async fn complete_sale(&self, sale: &Sale) -> EngineResult<()> {
        validation::validate_sale(sale).map_err(CoreError::from)?;

        let mut sales = self.store.sales().list().await?;
        if sales.iter().any(|s| s.id == sale.id) {
            return Err(EngineError::DuplicateTransaction {
                id: sale.id.clone(),
            });
        }

        let mut products = self.store.products().list().await?;

        // One sale may reference the same product in several lines; the
        // stock check is against the running total, in line order.
        let mut requested: HashMap<&str, i64> = HashMap::new();
        for item in &sale.items {
            let total = requested.entry(item.product_id.as_str()).or_insert(0);
            *total += item.quantity;

            let product = products
                .iter()
                .find(|p| p.id == item.product_id)
                .ok_or_else(|| EngineError::UnknownProduct {
                    id: item.product_id.clone(),
                })?;

            if product.stock < *total {
                return Err(CoreError::InsufficientStock {
                    code: product.code.clone(),
                    available: product.stock,
                    requested: *total,
                }
                .into());
            }
        }

        let mut clients = self.store.clients().list().await?;
        let client = clients
            .iter_mut()
            .find(|c| c.id == sale.client_id)
            .ok_or_else(|| EngineError::UnknownClient {
                id: sale.client_id.clone(),
            })?;

        // Everything resolves - apply against the in-memory snapshots.
        for (product_id, quantity) in &requested {
            if let Some(product) = products.iter_mut().find(|p| p.id == *product_id) {
                product.stock -= quantity;
            }
        }
        client.total_spent_cents += sale.total_cents;
        sales.push(sale.clone());

        // The ledger append, the stock decrements and the spend
        // accumulator land in one commit or not at all.
        let mut tx = self.store.pool().begin().await?;
        collections::save(&mut *tx, keys::SALES, &sales).await?;
        collections::save(&mut *tx, keys::PRODUCTS, &products).await?;
        collections::save(&mut *tx, keys::CLIENTS, &clients).await?;
        tx.commit().await?;

        info!(
            sale_id = %sale.id,
            client_id = %sale.client_id,
            total = %sale.total(),
            items = sale.items.len(),
            "Sale committed"
        );

        Ok(())
    }

    /// Commits a purchase: ledger append, stock increments, cost updates.
    ///
    /// The acquisition cost on each referenced product is overwritten
    /// with the line's cost price - last purchase price wins, no
    /// averaging. If one purchase references the same product twice, the
    /// later line's cost sticks.
    pub async fn complete_purchase(&self, purchase: &Purchase) -> EngineResult<()> {
        validation::validate_purchase(purchase).map_err(CoreError::from)?;

        let mut purchases = self.store.purchases().list().await?;
        if purchases.iter().any(|p| p.id == purchase.id) {
            return Err(EngineError::DuplicateTransaction {
                id: purchase.id.clone(),
            });
        }

        let mut products = self.store.products().list().await?;

        // Every line must resolve before anything is applied.
        for item in &purchase.items {
            if !products.iter().any(|p| p.id == item.product_id) {
                return Err(EngineError::UnknownProduct {
                    id: item.product_id.clone(),
                });
            }
        }

        for item in &purchase.items {
            if let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) {
                product.stock += item.quantity;
                product.cost_cents = item.cost_price_cents;
            }
        }
        purchases.push(purchase.clone());

        let mut tx = self.store.pool().begin().await?;
        collections::save(&mut *tx, keys::PURCHASES, &purchases).await?;
        collections::save(&mut *tx, keys::PRODUCTS, &products).await?;
        tx.commit().await?;

        info!(
            purchase_id = %purchase.id,
            provider_id = %purchase.provider_id,
            total = %purchase.total(),
            items = purchase.items.len(),
            "Purchase committed"
        );

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nexus_core::{PaymentMethod, Product, PurchaseItem, SaleItem};
    use nexus_store::StoreConfig;

    async fn processor() -> (Store, TransactionProcessor) {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let processor = TransactionProcessor::new(store.clone());
        (store, processor)
    }

    async fn seeded_product(store: &Store, id: &str) -> Product {
        store
            .products()
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    fn sale_of(id: &str, client_id: &str, items: Vec<SaleItem>) -> Sale {
        Sale::from_items(
            id,
            Utc::now(),
            client_id,
            "Corporación Alpha",
            "2",
            items,
            PaymentMethod::Cash,
        )
    }

    #[tokio::test]
    async fn test_sale_adjusts_stock_spend_and_ledger() {
        let (store, processor) = processor().await;

        let laptop = seeded_product(&store, "p1").await;
        let monitor = seeded_product(&store, "p2").await;
        let client_before = store
            .clients()
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.id == "c1")
            .unwrap();

        let sale = sale_of(
            "s1",
            "c1",
            vec![
                SaleItem::for_product(&laptop, 2),
                SaleItem::for_product(&monitor, 1),
            ],
        );
        processor.complete_sale(&sale).await.unwrap();

        // Stock decremented by exactly the line quantities
        assert_eq!(seeded_product(&store, "p1").await.stock, laptop.stock - 2);
        assert_eq!(seeded_product(&store, "p2").await.stock, monitor.stock - 1);

        // Client spend incremented by exactly the sale total
        let client_after = store
            .clients()
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.id == "c1")
            .unwrap();
        assert_eq!(
            client_after.total_spent_cents,
            client_before.total_spent_cents + sale.total_cents
        );

        // Ledger grew by one, in call order
        let ledger = store.sales().list().await.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].id, "s1");
    }

    #[tokio::test]
    async fn test_ledger_preserves_call_order() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        for id in ["s1", "s2", "s3"] {
            let sale = sale_of(id, "cf", vec![SaleItem::for_product(&laptop, 1)]);
            processor.complete_sale(&sale).await.unwrap();
        }

        let ids: Vec<_> = store
            .sales()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn test_replay_is_rejected_and_not_double_applied() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        let sale = sale_of("s1", "c1", vec![SaleItem::for_product(&laptop, 2)]);
        processor.complete_sale(&sale).await.unwrap();

        let result = processor.complete_sale(&sale).await;
        assert!(matches!(
            result,
            Err(EngineError::DuplicateTransaction { ref id }) if id == "s1"
        ));

        // Effects applied exactly once
        assert_eq!(seeded_product(&store, "p1").await.stock, laptop.stock - 2);
        assert_eq!(store.sales().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_product_rejects_whole_sale() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        let mut items = vec![SaleItem::for_product(&laptop, 1)];
        items.push(SaleItem {
            product_id: "ghost".to_string(),
            product_name: "Ghost".to_string(),
            quantity: 1,
            unit_price_cents: 100,
            subtotal_cents: 100,
        });
        let sale = sale_of("s1", "c1", items);

        let result = processor.complete_sale(&sale).await;
        assert!(matches!(
            result,
            Err(EngineError::UnknownProduct { ref id }) if id == "ghost"
        ));

        // No partial application: stock untouched, ledger empty,
        // client spend untouched
        assert_eq!(seeded_product(&store, "p1").await.stock, laptop.stock);
        assert!(store.sales().list().await.unwrap().is_empty());
        let client = store
            .clients()
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.id == "c1")
            .unwrap();
        assert_eq!(client.total_spent_cents, 150_000);
    }

    #[tokio::test]
    async fn test_unknown_client_rejects_sale() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        let sale = sale_of("s1", "ghost", vec![SaleItem::for_product(&laptop, 1)]);
        let result = processor.complete_sale(&sale).await;
        assert!(matches!(
            result,
            Err(EngineError::UnknownClient { ref id }) if id == "ghost"
        ));
        assert!(store.sales().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversell_is_rejected() {
        let (store, processor) = processor().await;
        // Mouse Gamer seeds with stock 3
        let mouse = seeded_product(&store, "p4").await;

        let sale = sale_of("s1", "cf", vec![SaleItem::for_product(&mouse, 5)]);
        let result = processor.complete_sale(&sale).await;
        assert!(matches!(
            result,
            Err(EngineError::Core(CoreError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            }))
        ));
        assert_eq!(seeded_product(&store, "p4").await.stock, 3);
    }

    #[tokio::test]
    async fn test_stock_check_is_cumulative_across_lines() {
        let (store, processor) = processor().await;
        // Two lines of 2 against stock 3 must be rejected together
        let mouse = seeded_product(&store, "p4").await;

        let sale = sale_of(
            "s1",
            "cf",
            vec![
                SaleItem::for_product(&mouse, 2),
                SaleItem::for_product(&mouse, 2),
            ],
        );
        let result = processor.complete_sale(&sale).await;
        assert!(matches!(
            result,
            Err(EngineError::Core(CoreError::InsufficientStock {
                available: 3,
                requested: 4,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn test_selling_down_to_zero_is_allowed() {
        let (store, processor) = processor().await;
        let mouse = seeded_product(&store, "p4").await;

        let sale = sale_of("s1", "cf", vec![SaleItem::for_product(&mouse, 3)]);
        processor.complete_sale(&sale).await.unwrap();
        assert_eq!(seeded_product(&store, "p4").await.stock, 0);
    }

    #[tokio::test]
    async fn test_tampered_total_is_rejected() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        let mut sale = sale_of("s1", "c1", vec![SaleItem::for_product(&laptop, 1)]);
        sale.total_cents += 1;

        let result = processor.complete_sale(&sale).await;
        assert!(matches!(result, Err(EngineError::Core(_))));
        assert!(store.sales().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_interrupted_commit_leaves_no_partial_state() {
        let (store, processor) = processor().await;
        let laptop = seeded_product(&store, "p1").await;

        // Simulate an interruption between collection writes: write the
        // ledger inside a transaction, then drop it without committing.
        {
            let sale = sale_of("s-lost", "c1", vec![SaleItem::for_product(&laptop, 1)]);
            let mut sales = store.sales().list().await.unwrap();
            sales.push(sale);

            let mut tx = store.pool().begin().await.unwrap();
            collections::save(&mut *tx, keys::SALES, &sales).await.unwrap();
            drop(tx); // rollback
        }

        // Nothing landed: the ledger is still empty and stock untouched
        assert!(store.sales().list().await.unwrap().is_empty());
        assert_eq!(seeded_product(&store, "p1").await.stock, laptop.stock);

        // The store is not corrupted - the next operation commits fine
        let sale = sale_of("s1", "c1", vec![SaleItem::for_product(&laptop, 1)]);
        processor.complete_sale(&sale).await.unwrap();
        assert_eq!(store.sales().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_purchase_adjusts_stock_and_cost() {
        let (store, processor) = processor().await;
        let monitor = seeded_product(&store, "p2").await;

        let purchase = Purchase::from_items(
            "b1",
            Utc::now(),
            "pr1",
            "TechSupply Inc",
            vec![PurchaseItem::for_product(
                &monitor,
                10,
                nexus_core::Money::from_cents(21_000),
            )],
            Some("INV-0042".to_string()),
        );
        processor.complete_purchase(&purchase).await.unwrap();

        let after = seeded_product(&store, "p2").await;
        assert_eq!(after.stock, monitor.stock + 10);
        assert_eq!(after.cost_cents, 21_000);

        let ledger = store.purchases().list().await.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].reference.as_deref(), Some("INV-0042"));
    }

    #[tokio::test]
    async fn test_purchase_same_product_twice_last_cost_wins() {
        let (store, processor) = processor().await;
        let monitor = seeded_product(&store, "p2").await;

        let purchase = Purchase::from_items(
            "b1",
            Utc::now(),
            "pr1",
            "TechSupply Inc",
            vec![
                PurchaseItem::for_product(&monitor, 5, nexus_core::Money::from_cents(21_000)),
                PurchaseItem::for_product(&monitor, 5, nexus_core::Money::from_cents(20_500)),
            ],
            None,
        );
        processor.complete_purchase(&purchase).await.unwrap();

        let after = seeded_product(&store, "p2").await;
        assert_eq!(after.stock, monitor.stock + 10);
        assert_eq!(after.cost_cents, 20_500);
    }

    #[tokio::test]
    async fn test_purchase_replay_is_rejected() {
        let (store, processor) = processor().await;
        let monitor = seeded_product(&store, "p2").await;

        let purchase = Purchase::from_items(
            "b1",
            Utc::now(),
            "pr1",
            "TechSupply Inc",
            vec![PurchaseItem::for_product(
                &monitor,
                10,
                nexus_core::Money::from_cents(21_000),
            )],
            None,
        );
        processor.complete_purchase(&purchase).await.unwrap();

        let result = processor.complete_purchase(&purchase).await;
        assert!(matches!(
            result,
            Err(EngineError::DuplicateTransaction { .. })
        ));
        assert_eq!(seeded_product(&store, "p2").await.stock, monitor.stock + 10);
        assert_eq!(store.purchases().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_purchase_unknown_product_rejects_all() {
        let (store, processor) = processor().await;
        let monitor = seeded_product(&store, "p2").await;

        let purchase = Purchase::from_items(
            "b1",
            Utc::now(),
            "pr1",
            "TechSupply Inc",
            vec![
                PurchaseItem::for_product(&monitor, 10, nexus_core::Money::from_cents(21_000)),
                PurchaseItem {
                    product_id: "ghost".to_string(),
                    product_name: "Ghost".to_string(),
                    quantity: 1,
                    cost_price_cents: 100,
                    subtotal_cents: 100,
                },
            ],
            None,
        );

        let result = processor.complete_purchase(&purchase).await;
        assert!(matches!(
            result,
            Err(EngineError::UnknownProduct { ref id }) if id == "ghost"
        ));
        assert_eq!(seeded_product(&store, "p2").await.stock, monitor.stock);
        assert!(store.purchases().list().await.unwrap().is_empty());
    }
}
