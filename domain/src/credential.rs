//! Credential value object.

use crate::core::error::DomainError;

/// Placeholder value shipped in unconfigured builds; never usable.
pub const PLACEHOLDER_CREDENTIAL: &str = "replace-with-your-api-key";

/// An API credential (Value Object)
///
/// `Debug` and `Display` are redacted so a credential can't leak through
/// logs or rendered output. Use [`expose`](Self::expose) only when building
/// the outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential, rejecting empty or whitespace-only values.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidCredential(
                "credential cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// The raw secret.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True for the shipped placeholder value.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_CREDENTIAL
    }

    /// Length in characters, safe to log.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_rejected() {
        assert!(Credential::new("").is_err());
        assert!(Credential::new("   ").is_err());
    }

    #[test]
    fn test_credential_is_redacted() {
        let credential = Credential::new("sk-secret-value").unwrap();
        assert!(!format!("{:?}", credential).contains("secret"));
        assert!(!credential.to_string().contains("secret"));
        assert_eq!(credential.expose(), "sk-secret-value");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(Credential::new(PLACEHOLDER_CREDENTIAL).unwrap().is_placeholder());
        assert!(!Credential::new("sk-real").unwrap().is_placeholder());
    }
}
