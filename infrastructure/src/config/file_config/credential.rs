//! Credential configuration from TOML (`[credential]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thinker_application::BundledCredential;

/// Raw `[credential]` configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialConfig {
    /// Override for the key storage file
    pub storage_file: Option<PathBuf>,
    /// Base64 default credential
    pub obfuscated_default: String,
    /// Plaintext default credential
    pub plaintext_default: String,
}

impl Default for FileCredentialConfig {
    fn default() -> Self {
        let bundled = BundledCredential::default();
        Self {
            storage_file: None,
            obfuscated_default: bundled.obfuscated,
            plaintext_default: bundled.plaintext,
        }
    }
}

impl std::fmt::Debug for FileCredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialConfig")
            .field("storage_file", &self.storage_file)
            .field("obfuscated_default", &"<redacted>")
            .field("plaintext_default", &"<redacted>")
            .finish()
    }
}

impl FileCredentialConfig {
    pub fn to_bundled_credential(&self) -> BundledCredential {
        BundledCredential::new(&self.obfuscated_default, &self.plaintext_default)
    }
}
