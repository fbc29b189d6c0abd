//! # Session Gate
//!
//! Authenticates principals against the user collection and owns the
//! current-session record.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(username, password)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find ACTIVE user by username ── none ──► InvalidCredentials           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  verify password against Argon2 hash (constant-time)                   │
//! │       │                                                                 │
//! │       ├── no hash on the account ──► InvalidCredentials                │
//! │       ├── mismatch ──────────────► InvalidCredentials                  │
//! │       ▼                                                                 │
//! │  persist sanitized session record, return user (hash cleared)          │
//! │                                                                         │
//! │  All failure paths collapse into ONE variant: the caller cannot        │
//! │  distinguish "unknown user" from "wrong password".                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No lockout and no rate limiting: this runs embedded in a single-user
//! desktop app, not on a network boundary.

use tracing::{debug, info};

use nexus_core::User;
use nexus_store::{credentials, Store};

use crate::error::{EngineError, EngineResult};

/// Authentication and session accessor.
#[derive(Debug, Clone)]
pub struct SessionGate {
    store: Store,
}

impl SessionGate {
    /// Creates a new SessionGate.
    pub fn new(store: Store) -> Self {
        SessionGate { store }
    }

    /// Authenticates a principal and opens a session.
    ///
    /// ## Errors
    /// [`EngineError::InvalidCredentials`] on unknown username, inactive
    /// account, passwordless account, or wrong password.
    pub async fn login(&self, username: &str, password: &str) -> EngineResult<User> {
        let Some(user) = self.store.users().find_by_username(username).await? else {
            debug!(%username, "Login rejected: unknown or inactive account");
            return Err(EngineError::InvalidCredentials);
        };

        let verified = user
            .password_hash
            .as_deref()
            .map(|hash| credentials::verify_password(hash, password))
            .unwrap_or(false); // accounts without a hash cannot authenticate

        if !verified {
            debug!(%username, "Login rejected: bad credentials");
            return Err(EngineError::InvalidCredentials);
        }

        self.store.session().save(&user).await?;

        info!(user_id = %user.id, %username, "Session opened");

        Ok(user.sanitized())
    }

    /// Closes the current session. A no-op when none is open.
    pub async fn logout(&self) -> EngineResult<()> {
        self.store.session().clear().await?;
        Ok(())
    }

    /// Returns the signed-in user, or `None` when no session is open (or
    /// the stored session record is unreadable).
    pub async fn current_user(&self) -> EngineResult<Option<User>> {
        Ok(self.store.session().load().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_store::StoreConfig;

    async fn gate() -> (Store, SessionGate) {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let gate = SessionGate::new(store.clone());
        (store, gate)
    }

    #[tokio::test]
    async fn test_login_with_seeded_account() {
        let (_store, gate) = gate().await;

        let user = gate.login("admin", "password").await.unwrap();
        assert_eq!(user.username, "admin");
        // The returned record never carries the hash
        assert!(user.password_hash.is_none());

        let current = gate.current_user().await.unwrap().unwrap();
        assert_eq!(current.id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let (_store, gate) = gate().await;

        let result = gate.login("admin", "wrong").await;
        assert!(matches!(result, Err(EngineError::InvalidCredentials)));
        assert!(gate.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_username_is_the_same_error() {
        let (_store, gate) = gate().await;

        let result = gate.login("nobody", "password").await;
        assert!(matches!(result, Err(EngineError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_login() {
        let (store, gate) = gate().await;

        let mut users = store.users().list().await.unwrap();
        let admin = users.iter_mut().find(|u| u.username == "admin").unwrap();
        admin.is_active = false;
        let admin = admin.clone();
        store.users().upsert(&admin).await.unwrap();

        let result = gate.login("admin", "password").await;
        assert!(matches!(result, Err(EngineError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_passwordless_account_cannot_login() {
        let (store, gate) = gate().await;

        let mut users = store.users().list().await.unwrap();
        let admin = users.iter_mut().find(|u| u.username == "admin").unwrap();
        admin.password_hash = None;
        let admin = admin.clone();
        store.users().upsert(&admin).await.unwrap();

        let result = gate.login("admin", "anything").await;
        assert!(matches!(result, Err(EngineError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (_store, gate) = gate().await;

        gate.login("juan", "password").await.unwrap();
        assert!(gate.current_user().await.unwrap().is_some());

        gate.logout().await.unwrap();
        assert!(gate.current_user().await.unwrap().is_none());

        // Logging out twice is a no-op
        gate.logout().await.unwrap();
    }
}
