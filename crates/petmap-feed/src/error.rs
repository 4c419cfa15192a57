//! Persistence-capability error type.
//!
//! The label and index modules are total functions over their inputs and
//! need no error handling; only the [`KeyValueStore`][crate::KeyValueStore]
//! capability can fail, and then only in backends that touch real storage.

use thiserror::Error;

/// Errors produced by `KeyValueStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Shorthand result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
