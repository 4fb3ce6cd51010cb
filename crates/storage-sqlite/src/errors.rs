//! Storage error mapping into the core error type.

use thiserror::Error;

use ledgerlink_core::errors::{DatabaseError, Error};

/// Low-level storage failures, folded into [`ledgerlink_core::Error`] at the
/// repository boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<StorageError> for Error {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Query(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Pool(e) => Error::Database(DatabaseError::Pool(e.to_string())),
        }
    }
}
