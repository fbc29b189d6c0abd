//! # Client Repository
//!
//! Customer storage. The walk-in sentinel client (`"cf"`, "Consumidor
//! Final") books every anonymous sale and is guarded against deletion.
//!
//! `total_spent_cents` on a client is maintained by the transaction
//! processor; the UI upserts a client's contact fields but should never
//! write the accumulator directly.

use sqlx::SqlitePool;
use tracing::debug;

use crate::collections::{self, keys};
use crate::error::{StoreError, StoreResult};
use crate::seed;
use nexus_core::{Client, WALK_IN_CLIENT_ID};

/// Repository for clients.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Lists all clients, seeding the fixtures on first access.
    pub async fn list(&self) -> StoreResult<Vec<Client>> {
        collections::load_or_seed(&self.pool, keys::CLIENTS, || Ok(seed::clients())).await
    }

    /// Inserts or replaces a client by id.
    pub async fn upsert(&self, client: &Client) -> StoreResult<()> {
        debug!(id = %client.id, name = %client.name, "Upserting client");

        let mut clients = self.list().await?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }
        collections::save(&self.pool, keys::CLIENTS, &clients).await
    }

    /// Deletes a client by id. Unknown ids are a no-op.
    ///
    /// ## Errors
    /// Deleting the walk-in sentinel is rejected with
    /// [`StoreError::ProtectedRecord`] - anonymous sales have nowhere
    /// else to go.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        if id == WALK_IN_CLIENT_ID {
            return Err(StoreError::protected("Client", id));
        }

        debug!(%id, "Deleting client");

        let mut clients = self.list().await?;
        clients.retain(|c| c.id != id);
        collections::save(&self.pool, keys::CLIENTS, &clients).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
