//! # Provider Repository
//!
//! Supplier storage. Plain CRUD; purchases reference providers by id and
//! snapshot the name, so deleting a provider never rewrites history.

use sqlx::SqlitePool;
use tracing::debug;

use crate::collections::{self, keys};
use crate::error::StoreResult;
use crate::seed;
use nexus_core::Provider;

/// Repository for providers.
#[derive(Debug, Clone)]
pub struct ProviderRepository {
    pool: SqlitePool,
}

impl ProviderRepository {
    /// Creates a new ProviderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProviderRepository { pool }
    }

    /// Lists all providers, seeding the fixtures on first access.
    pub async fn list(&self) -> StoreResult<Vec<Provider>> {
        collections::load_or_seed(&self.pool, keys::PROVIDERS, || Ok(seed::providers())).await
    }

    /// Inserts or replaces a provider by id.
    pub async fn upsert(&self, provider: &Provider) -> StoreResult<()> {
        debug!(id = %provider.id, name = %provider.name, "Upserting provider");

        let mut providers = self.list().await?;
        match providers.iter_mut().find(|p| p.id == provider.id) {
            Some(existing) => *existing = provider.clone(),
            None => providers.push(provider.clone()),
        }
        collections::save(&self.pool, keys::PROVIDERS, &providers).await
    }

    /// Deletes a provider by id. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(%id, "Deleting provider");

        let mut providers = self.list().await?;
        providers.retain(|p| p.id != id);
        collections::save(&self.pool, keys::PROVIDERS, &providers).await
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
    async fn test_seed_then_crud() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.providers();

        let providers = repo.list().await.unwrap();
        assert_eq!(providers.len(), 2);

        let provider = Provider {
            id: "pr9".to_string(),
            name: "Mayorista Sur".to_string(),
            contact_name: "Lucía R.".to_string(),
            email: "compras@msur.com".to_string(),
            phone: "555-7000".to_string(),
            category: "Wholesale".to_string(),
            image_url: None,
        };
        repo.upsert(&provider).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 3);

        repo.delete("pr9").await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
