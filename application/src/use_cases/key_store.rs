//! Key store use case.
//!
//! Persists the API credential in a [`KeyValueStore`] and falls back to the
//! [`BundledCredential`] when nothing usable is stored.
//!
//! | Backing store | `get` | `set` / `clear` | `exists` |
//! |---------------|-------|-----------------|----------|
//! | none / unavailable | bundled (decoded, else plaintext) | no-op, `Ok` | `true` |
//! | available, key present | stored value | write / remove | `true` |
//! | available, key absent | bundled (decoded, else plaintext) | write / remove | `false` |
//! | read error | bundled plaintext | propagate | `false` |

use crate::config::BundledCredential;
use crate::ports::key_value_store::{KeyValueStore, StoreError};
use std::sync::Arc;
use thinker_domain::Credential;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key the credential is kept under.
pub const CREDENTIAL_STORAGE_KEY: &str = "deepseek_api_key";

/// Errors from credential mutations
#[derive(Error, Debug)]
pub enum KeyStoreError {
    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Credential access with bundled fallback.
pub struct KeyStore {
    store: Option<Arc<dyn KeyValueStore>>,
    bundled: BundledCredential,
}

impl KeyStore {
    pub fn new(store: Arc<dyn KeyValueStore>, bundled: BundledCredential) -> Self {
        Self {
            store: Some(store),
            bundled,
        }
    }

    /// A key store with no backing storage; always serves the bundled default.
    pub fn without_store(bundled: BundledCredential) -> Self {
        Self {
            store: None,
            bundled,
        }
    }

    /// True when a usable backing store is configured.
    pub fn is_persistent(&self) -> bool {
        self.available_store().is_some()
    }

    fn available_store(&self) -> Option<&Arc<dyn KeyValueStore>> {
        self.store.as_ref().filter(|store| store.is_available())
    }

    /// The current credential, or the bundled default.
    pub async fn get(&self) -> Option<Credential> {
        let Some(store) = self.available_store() else {
            debug!("Key store unavailable, using bundled credential");
            return self.bundled.resolve();
        };

        match store.get(CREDENTIAL_STORAGE_KEY).await {
            Ok(Some(value)) => match Credential::new(value) {
                Ok(credential) => Some(credential),
                Err(_) => {
                    debug!("Stored credential is blank, using bundled credential");
                    self.bundled.resolve()
                }
            },
            Ok(None) => {
                debug!("No stored credential, using bundled credential");
                self.bundled.resolve()
            }
            Err(e) => {
                warn!("Failed to read stored credential: {}", e);
                self.bundled.plaintext()
            }
        }
    }

    /// Store a credential. Blank values are rejected.
    pub async fn set(&self, value: &str) -> Result<(), KeyStoreError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(KeyStoreError::EmptyCredential);
        }
        let Some(store) = self.available_store() else {
            debug!("Key store unavailable, ignoring set");
            return Ok(());
        };
        store.set(CREDENTIAL_STORAGE_KEY, value).await?;
        info!("API key saved ({} chars)", value.chars().count());
        Ok(())
    }

    /// Remove the stored credential.
    pub async fn clear(&self) -> Result<(), KeyStoreError> {
        let Some(store) = self.available_store() else {
            debug!("Key store unavailable, ignoring clear");
            return Ok(());
        };
        store.remove(CREDENTIAL_STORAGE_KEY).await?;
        info!("API key cleared");
        Ok(())
    }

    /// Whether a credential is stored.
    pub async fn exists(&self) -> bool {
        let Some(store) = self.available_store() else {
            return true;
        };
        matches!(
            store.get(CREDENTIAL_STORAGE_KEY).await,
            Ok(Some(value)) if !value.trim().is_empty()
        )
    }

    /// The bundled plaintext default, used to restore a working key.
    pub fn bundled_plaintext(&self) -> Option<Credential> {
        self.bundled.plaintext()
    }
}
