//! # Durable Key-Value Storage
//!
//! The cart persists itself through the [`Storage`] trait rather than a global API, so the
//! core runs the same way in tests, in a CLI host and behind any other backend.
//!
//! - [`MemoryStorage`] - process-local map; the fallback when no data directory is configured.
//! - [`FileStorage`] - one JSON file per key in a directory.
//!
//! Access is synchronous: the cart writes inside the same actor turn as the mutation.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable string key-value store.
pub trait Storage: Send + Sync {
    /// Returns the value for `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
