//! # Engine Error Types
//!
//! The error surface callers of the services see.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvalidCredentials      expected, frequent → typed outcome, one       │
//! │                          generic variant (no username enumeration)     │
//! │                                                                         │
//! │  MalformedImportRow      recovered locally: the row is counted and     │
//! │                          the batch continues                            │
//! │                                                                         │
//! │  DuplicateTransaction,   hard errors: the operation aborts before      │
//! │  UnknownProduct/Client,  its first write, collections untouched        │
//! │  InsufficientStock                                                      │
//! │                                                                         │
//! │  CorruptState (store)    hard error: never silently reseed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use nexus_core::{CoreError, ValidationError};
use nexus_store::StoreError;

/// Errors surfaced by the engine services.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Login failed: unknown username, inactive account, or wrong
    /// password. Deliberately a single variant - the caller cannot tell
    /// which, so usernames cannot be enumerated.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A sale/purchase id is already present in its ledger.
    ///
    /// ## When This Occurs
    /// - A retry after a reported failure that actually committed
    /// - A UI bug re-submitting the same record
    ///
    /// Without this guard a replay would double-apply stock and spend.
    #[error("transaction '{id}' has already been applied")]
    DuplicateTransaction { id: String },

    /// A sale/purchase line references a product id that doesn't resolve.
    /// The whole operation is rejected - no partial application.
    #[error("unknown product: '{id}'")]
    UnknownProduct { id: String },

    /// A sale references a client id that doesn't resolve.
    #[error("unknown client: '{id}'")]
    UnknownClient { id: String },

    /// Bulk import input has fewer than two non-blank lines.
    #[error("import file appears empty or malformed")]
    EmptyImport,

    /// A single import row failed column-count or numeric validation.
    /// Never propagated out of the importer - rows are skipped and
    /// counted - but carried here so rejects are typed and loggable.
    #[error("malformed import row: {reason}")]
    MalformedImportRow { reason: String },

    /// Business rule violation (insufficient stock, invalid record shape).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation failures arrive wrapped as core errors.
impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(CoreError::Validation(err))
    }
}

/// Raw sqlx errors (from the processor's own transactions) are store
/// failures from the caller's point of view.
impl From<sqlx::Error> for EngineError {
    fn from(err: sqlx::Error) -> Self {
        EngineError::Store(StoreError::from(err))
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::DuplicateTransaction {
            id: "s-1001".to_string(),
        };
        assert_eq!(err.to_string(), "transaction 's-1001' has already been applied");

        assert_eq!(
            EngineError::InvalidCredentials.to_string(),
            "invalid credentials"
        );
    }

    #[test]
    fn test_validation_wraps_as_core() {
        let err: EngineError = ValidationError::EmptyItems.into();
        assert!(matches!(err, EngineError::Core(CoreError::Validation(_))));
    }
}
