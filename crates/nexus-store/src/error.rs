//! # Store Error Types
//!
//! Error types for record store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) / serde_json::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EngineError (nexus-engine) ← What service callers see                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays user-friendly message                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Record store errors.
///
/// These wrap sqlx and serde_json errors and add context for debugging
/// and user feedback.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A persisted collection failed to deserialize.
    ///
    /// ## When This Occurs
    /// - Hand-edited database contents
    /// - A payload truncated by an interrupted external write
    ///
    /// This is surfaced as a hard error instead of silently reseeding:
    /// reseeding would discard the ledgers.
    #[error("stored state for collection '{collection}' is corrupt: {reason}")]
    CorruptState { collection: String, reason: String },

    /// A protected record was targeted for deletion.
    ///
    /// ## When This Occurs
    /// - Attempting to delete the walk-in sentinel client ("cf")
    #[error("{entity} '{id}' is protected and cannot be deleted")]
    ProtectedRecord { entity: String, id: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A record failed to serialize for persistence.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a CorruptState error for a collection key.
    pub fn corrupt(collection: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::CorruptState {
            collection: collection.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a ProtectedRecord error.
    pub fn protected(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::ProtectedRecord {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// sqlx::Error::Database       → StoreError::QueryFailed
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::Io(io_err) => StoreError::ConnectionFailed(io_err.to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
