//! # User Repository
//!
//! Account storage. Besides CRUD, this is where the session gate resolves
//! usernames - lookup only ever returns active accounts, so inactive
//! users are invisible to authentication.

use sqlx::SqlitePool;
use tracing::debug;

use crate::collections::{self, keys};
use crate::error::StoreResult;
use crate::seed;
use nexus_core::User;

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Lists all users, seeding the fixture accounts on first access.
    pub async fn list(&self) -> StoreResult<Vec<User>> {
        collections::load_or_seed(&self.pool, keys::USERS, seed::users).await
    }

    /// Inserts or replaces a user by id.
    pub async fn upsert(&self, user: &User) -> StoreResult<()> {
        debug!(id = %user.id, username = %user.username, "Upserting user");

        let mut users = self.list().await?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        collections::save(&self.pool, keys::USERS, &users).await
    }

    /// Deletes a user by id. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(%id, "Deleting user");

        let mut users = self.list().await?;
        users.retain(|u| u.id != id);
        collections::save(&self.pool, keys::USERS, &users).await
    }

    /// Finds an **active** user by username.
    ///
    /// Inactive accounts resolve to `None` - they cannot authenticate.
    pub async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .find(|u| u.username == username && u.is_active))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use nexus_core::Role;

    fn new_user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {id}"),
            email: format!("{username}@nexus.com"),
            username: username.to_string(),
            password_hash: None,
            role: Role::Seller,
            is_active: true,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_first_list_seeds_accounts() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();

        let users = store.users().list().await.unwrap();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.username == "admin"));
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent_by_id() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.users();

        let user = new_user("u9", "ana");
        repo.upsert(&user).await.unwrap();
        repo.upsert(&user).await.unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.iter().filter(|u| u.id == "u9").count(), 1);
        assert_eq!(users.len(), 4); // 3 seeds + 1
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.users();

        let mut user = new_user("u9", "ana");
        repo.upsert(&user).await.unwrap();

        user.name = "Ana María".to_string();
        repo.upsert(&user).await.unwrap();

        let users = repo.list().await.unwrap();
        let stored = users.iter().find(|u| u.id == "u9").unwrap();
        assert_eq!(stored.name, "Ana María");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.users();

        let before = repo.list().await.unwrap().len();
        repo.delete("no-such-id").await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn test_find_by_username_skips_inactive() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.users();

        let mut user = new_user("u9", "ana");
        user.is_active = false;
        repo.upsert(&user).await.unwrap();

        assert!(repo.find_by_username("ana").await.unwrap().is_none());
        assert!(repo.find_by_username("admin").await.unwrap().is_some());
    }
}
