//! # Collection Primitives
//!
//! Generic load/seed/save operations for named collections.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Whole-Collection Persistence                          │
//! │                                                                         │
//! │  collections table                                                      │
//! │  ┌──────────────────────┬─────────────────────────────────────────┐    │
//! │  │ key                  │ payload                                 │    │
//! │  ├──────────────────────┼─────────────────────────────────────────┤    │
//! │  │ nexus_users          │ [{...}, {...}, {...}]                   │    │
//! │  │ nexus_clients        │ [{...}, {...}, {...}]                   │    │
//! │  │ nexus_products       │ [{...}, {...}, {...}, {...}]            │    │
//! │  │ nexus_sales          │ []                                      │    │
//! │  │ nexus_current_user   │ {...}          (singleton)              │    │
//! │  └──────────────────────┴─────────────────────────────────────────┘    │
//! │                                                                         │
//! │  load_or_seed:  SELECT payload; on first access write the fixture      │
//! │                 rows and return them                                    │
//! │  save:          serialize + upsert the whole payload                    │
//! │                                                                         │
//! │  Every save rewrites the full collection. Two saves without an          │
//! │  intervening reload lose whichever wrote first. The system has          │
//! │  exactly one logical writer, so this is acceptable; multi-writer        │
//! │  deployments would need per-record rows or optimistic versioning.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Save functions are generic over [`sqlx::Executor`] so the same code
//! runs against the pool or joins an open transaction - the transaction
//! processor commits several collections atomically this way.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::Sqlite;
use sqlx::{Executor, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Collection Keys
// =============================================================================

/// Fixed namespace keys for the persisted collections.
pub mod keys {
    pub const USERS: &str = "nexus_users";
    pub const CLIENTS: &str = "nexus_clients";
    pub const PRODUCTS: &str = "nexus_products";
    pub const PROVIDERS: &str = "nexus_providers";
    pub const SALES: &str = "nexus_sales";
    pub const PURCHASES: &str = "nexus_purchases";
    /// Singleton session record, not a collection.
    pub const CURRENT_USER: &str = "nexus_current_user";
}

// =============================================================================
// Collection Operations
// =============================================================================

/// Loads a collection, seeding it on first access.
///
/// ## Behavior
/// - Collection present: deserialize and return the stored rows.
/// - Collection absent: materialize `seed`, persist it, return it. The
///   insert uses `OR IGNORE` so a concurrent first access cannot
///   duplicate the key.
/// - Collection present but unreadable: [`StoreError::CorruptState`].
///   Never silently reseeds - that would discard the ledgers.
pub async fn load_or_seed<T, F>(pool: &SqlitePool, key: &str, seed: F) -> StoreResult<Vec<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> StoreResult<Vec<T>>,
{
    let stored: Option<String> =
        sqlx::query_scalar("SELECT payload FROM collections WHERE key = ?1")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    match stored {
        Some(payload) => {
            serde_json::from_str(&payload).map_err(|e| StoreError::corrupt(key, e))
        }
        None => {
            let rows = seed()?;
            let payload = serde_json::to_string(&rows)?;

            debug!(collection = %key, rows = rows.len(), "Seeding collection");

            sqlx::query("INSERT OR IGNORE INTO collections (key, payload) VALUES (?1, ?2)")
                .bind(key)
                .bind(payload)
                .execute(pool)
                .await?;

            Ok(rows)
        }
    }
}

/// Replaces a collection's payload in full.
///
/// Generic over the executor: pass the pool for a standalone save, or a
/// transaction to make several collection saves one atomic commit.
pub async fn save<'e, T, E>(executor: E, key: &str, rows: &[T]) -> StoreResult<()>
where
    T: Serialize,
    E: Executor<'e, Database = Sqlite>,
{
    let payload = serde_json::to_string(rows)?;

    debug!(collection = %key, rows = rows.len(), "Saving collection");

    sqlx::query(
        "INSERT INTO collections (key, payload) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
    )
    .bind(key)
    .bind(payload)
    .execute(executor)
    .await?;

    Ok(())
}

// =============================================================================
// Singleton Operations
// =============================================================================

/// Loads a singleton record (e.g. the session), or `None` if absent.
///
/// Corruption is surfaced as an error; the caller decides whether that is
/// fatal (collections) or equivalent to absence (session record).
pub async fn load_singleton<T>(pool: &SqlitePool, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
{
    let stored: Option<String> =
        sqlx::query_scalar("SELECT payload FROM collections WHERE key = ?1")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    match stored {
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e)),
        None => Ok(None),
    }
}

/// Writes a singleton record, replacing any previous value.
pub async fn save_singleton<T>(pool: &SqlitePool, key: &str, record: &T) -> StoreResult<()>
where
    T: Serialize,
{
    let payload = serde_json::to_string(record)?;

    sqlx::query(
        "INSERT INTO collections (key, payload) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
    )
    .bind(key)
    .bind(payload)
    .execute(pool)
    .await?;

    Ok(())
}

/// Removes a singleton record. Removing an absent record is a no-op.
pub async fn clear_singleton(pool: &SqlitePool, key: &str) -> StoreResult<()> {
    sqlx::query("DELETE FROM collections WHERE key = ?1")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(())
}

/// Overwrites a collection payload with raw text, bypassing
/// serialization. Test-only: used to simulate corrupt stored state.
#[cfg(test)]
pub async fn save_raw(pool: &SqlitePool, key: &str, payload: &str) -> StoreResult<()> {
    sqlx::query(
        "INSERT INTO collections (key, payload) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
    )
    .bind(key)
    .bind(payload)
    .execute(pool)
    .await?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
