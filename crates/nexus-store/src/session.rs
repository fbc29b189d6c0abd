//! # Session Record
//!
//! Persistence for the singleton current-session record.
//!
//! ## What Gets Stored
//! The signed-in user, **without** the password hash - the session record
//! is read by every screen of the UI and must never carry credential
//! material. [`SessionRepository::save`] sanitizes unconditionally.
//!
//! ## Corrupt Session Handling
//! An unreadable session record is treated as "not signed in" (the user
//! just logs in again) rather than as a hard error - unlike the data
//! collections, where corruption must never be papered over.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::collections::{self, keys};
use crate::error::{StoreError, StoreResult};
use nexus_core::User;

/// Repository for the singleton session record.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SessionRepository { pool }
    }

    /// Persists the given user as the current session.
    ///
    /// The stored record is sanitized: the password hash is dropped.
    pub async fn save(&self, user: &User) -> StoreResult<()> {
        debug!(user_id = %user.id, username = %user.username, "Saving session");

        collections::save_singleton(&self.pool, keys::CURRENT_USER, &user.sanitized()).await
    }

    /// Reads the current session, if any.
    ///
    /// Returns `None` when no session is stored or when the stored record
    /// is corrupt.
    pub async fn load(&self) -> StoreResult<Option<User>> {
        match collections::load_singleton(&self.pool, keys::CURRENT_USER).await {
            Ok(user) => Ok(user),
            Err(StoreError::CorruptState { reason, .. }) => {
                warn!(%reason, "Session record is corrupt, treating as signed out");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Clears the current session. A no-op when none is stored.
    pub async fn clear(&self) -> StoreResult<()> {
        debug!("Clearing session");

        collections::clear_singleton(&self.pool, keys::CURRENT_USER).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
