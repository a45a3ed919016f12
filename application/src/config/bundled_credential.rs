//! Credential shipped with the build.
//!
//! Used by the [`KeyStore`](crate::use_cases::key_store::KeyStore) when no
//! credential has been stored. The obfuscated form is base64 only; it keeps
//! the key out of casual greps, it is not protection.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thinker_domain::Credential;
use tracing::{debug, warn};

/// Bundled default credential, obfuscated and plaintext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledCredential {
    /// Base64-encoded default credential.
    pub obfuscated: String,
    /// Plaintext credential used when the obfuscated form can't be decoded.
    pub plaintext: String,
}

impl Default for BundledCredential {
    fn default() -> Self {
        Self {
            obfuscated: "c2steW91ci1kZWVwc2Vlay1hcGkta2V5LWhlcmU=".to_string(),
            plaintext: "sk-your-deepseek-api-key-here".to_string(),
        }
    }
}

impl std::fmt::Debug for BundledCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundledCredential")
            .field("obfuscated", &"<redacted>")
            .field("plaintext", &"<redacted>")
            .finish()
    }
}

impl BundledCredential {
    pub fn new(obfuscated: impl Into<String>, plaintext: impl Into<String>) -> Self {
        Self {
            obfuscated: obfuscated.into(),
            plaintext: plaintext.into(),
        }
    }

    /// Decode the obfuscated default, falling back to the plaintext constant.
    pub fn resolve(&self) -> Option<Credential> {
        match self.decode() {
            Some(credential) => {
                debug!("Decoded bundled credential ({} chars)", credential.len());
                Some(credential)
            }
            None => {
                warn!("Bundled credential could not be decoded, using plaintext default");
                self.plaintext()
            }
        }
    }

    /// The plaintext constant, if non-empty.
    pub fn plaintext(&self) -> Option<Credential> {
        Credential::new(self.plaintext.clone()).ok()
    }

    fn decode(&self) -> Option<Credential> {
        let bytes = STANDARD.decode(self.obfuscated.trim()).ok()?;
        let value = String::from_utf8(bytes).ok()?;
        Credential::new(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decodes_to_template_key() {
        let credential = BundledCredential::default().resolve().unwrap();
        assert_eq!(credential.expose(), "sk-your-deepseek-api-key-here");
        assert!(!credential.is_placeholder());
    }

    #[test]
    fn test_invalid_base64_falls_back_to_plaintext() {
        let bundled = BundledCredential::new("not base64 !!!", "sk-plain");
        assert_eq!(bundled.resolve().unwrap().expose(), "sk-plain");
    }

    #[test]
    fn test_non_utf8_falls_back_to_plaintext() {
        // 0xff 0xfe is not valid UTF-8
        let bundled = BundledCredential::new("//4=", "sk-plain");
        assert_eq!(bundled.resolve().unwrap().expose(), "sk-plain");
    }

    #[test]
    fn test_nothing_usable() {
        let bundled = BundledCredential::new("", "");
        assert!(bundled.resolve().is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug = format!("{:?}", BundledCredential::default());
        assert!(!debug.contains("c2st"));
        assert!(!debug.contains("sk-your"));
    }
}
