//! Key-value storage port
//!
//! The platform store the key store persists the credential in.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage data is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage unavailable")]
    Unavailable,
}

/// Asynchronous string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Whether the backend can be used at all.
    fn is_available(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
