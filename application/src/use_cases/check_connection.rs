//! Check Connection use case.
//!
//! Sends a minimal completion request with the current credential to
//! confirm the provider accepts it, and restores the bundled key when the
//! stored one is broken.

use crate::ports::diagnostics::{DiagnosticEvent, DiagnosticsSink, NoDiagnostics};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::key_store::KeyStore;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thinker_domain::{CompletionRequest, QuestionPrompt};
use tracing::{info, warn};

const CHECK_MAX_TOKENS: u32 = 50;
const CHECK_TEMPERATURE: f32 = 0.7;

/// Outcome of a connection check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionReport {
    pub success: bool,
    pub message: String,
    /// The model's reply, when the request succeeded.
    pub reply: Option<String>,
}

impl ConnectionReport {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            reply: None,
        }
    }
}

/// Use case for verifying the API credential against the provider.
pub struct CheckConnectionUseCase {
    gateway: Arc<dyn LlmGateway>,
    key_store: Arc<KeyStore>,
    model: String,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl CheckConnectionUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        key_store: Arc<KeyStore>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            key_store,
            model: model.into(),
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Send a short request with the current credential. Never fails.
    pub async fn execute(&self) -> ConnectionReport {
        let report = self.run().await;
        self.diagnostics.record(DiagnosticEvent::new(
            "connection_check",
            json!({
                "success": report.success,
                "message": report.message,
                "model": self.model,
            }),
        ));
        report
    }

    async fn run(&self) -> ConnectionReport {
        let Some(credential) = self.key_store.get().await else {
            return ConnectionReport::failure("No API key found");
        };
        // Treated like a missing key: the placeholder can never authenticate.
        if credential.is_placeholder() {
            return ConnectionReport::failure("API key is still the placeholder value");
        }

        let request = CompletionRequest::new(
            &self.model,
            QuestionPrompt::connection_check_system(),
            QuestionPrompt::connection_check(),
        )
        .with_max_tokens(CHECK_MAX_TOKENS)
        .with_temperature(CHECK_TEMPERATURE);

        info!("Testing API connection ({} char key)", credential.len());
        match self.gateway.complete(&request, &credential).await {
            Ok(reply) if !reply.trim().is_empty() => ConnectionReport {
                success: true,
                message: "API connection successful".to_string(),
                reply: Some(reply.trim().to_string()),
            },
            Ok(_) => ConnectionReport::failure("API responded without content"),
            Err(e) => {
                warn!("API connection test failed: {}", e);
                ConnectionReport::failure(format!("API connection failed: {}", e))
            }
        }
    }

    /// Store the bundled plaintext key, then check the connection.
    pub async fn restore_bundled_key(&self) -> ConnectionReport {
        let Some(bundled) = self.key_store.bundled_plaintext() else {
            return ConnectionReport::failure("No bundled API key available");
        };
        if let Err(e) = self.key_store.set(bundled.expose()).await {
            warn!("Failed to restore bundled API key: {}", e);
            return ConnectionReport::failure(format!("Failed to save API key: {}", e));
        }
        info!("Bundled API key restored");
        self.execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BundledCredential;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::key_store::CREDENTIAL_STORAGE_KEY;
    use crate::use_cases::test_support::{MemoryStore, MockGateway, rejected};
    use thinker_domain::PLACEHOLDER_CREDENTIAL;

    fn keys_with(store: Arc<MemoryStore>) -> Arc<KeyStore> {
        Arc::new(KeyStore::new(store, BundledCredential::default()))
    }

    #[tokio::test]
    async fn test_successful_check() {
        let gateway = Arc::new(MockGateway::replying(&[" Hello, API connection successful! "]));
        let store = Arc::new(MemoryStore::with(CREDENTIAL_STORAGE_KEY, "sk-good"));
        let uc = CheckConnectionUseCase::new(gateway.clone(), keys_with(store), "deepseek-chat");

        let report = uc.execute().await;

        assert!(report.success);
        assert_eq!(report.reply.as_deref(), Some("Hello, API connection successful!"));
        let request = &gateway.requests()[0];
        assert_eq!(request.max_tokens, 50);
        assert_eq!(request.temperature, 0.7);
        assert_eq!(
            request.messages[0].content,
            "You are a helpful assistant who responds very briefly."
        );
    }

    #[tokio::test]
    async fn test_rejected_key_reports_failure() {
        let gateway = Arc::new(MockGateway::new(vec![rejected(401)]));
        let store = Arc::new(MemoryStore::with(CREDENTIAL_STORAGE_KEY, "sk-bad"));
        let uc = CheckConnectionUseCase::new(gateway, keys_with(store), "deepseek-chat");

        let report = uc.execute().await;

        assert!(!report.success);
        assert!(report.message.contains("401"));
        assert!(report.reply.is_none());
    }

    #[tokio::test]
    async fn test_no_credential_skips_request() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let keys = Arc::new(KeyStore::without_store(BundledCredential::new("", "")));
        let uc = CheckConnectionUseCase::new(gateway.clone(), keys, "deepseek-chat");

        let report = uc.execute().await;

        assert!(!report.success);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_key_counts_as_missing() {
        let gateway = Arc::new(MockGateway::replying(&["Hello!"]));
        let store = Arc::new(MemoryStore::with(CREDENTIAL_STORAGE_KEY, PLACEHOLDER_CREDENTIAL));
        let uc = CheckConnectionUseCase::new(gateway.clone(), keys_with(store), "deepseek-chat");

        let report = uc.execute().await;

        assert!(!report.success);
        assert!(report.message.contains("placeholder"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_restore_saves_plaintext_then_checks() {
        let gateway = Arc::new(MockGateway::replying(&["Hello!"]));
        let store = Arc::new(MemoryStore::with(CREDENTIAL_STORAGE_KEY, "sk-broken"));
        let uc = CheckConnectionUseCase::new(gateway.clone(), keys_with(store.clone()), "m");

        let report = uc.restore_bundled_key().await;

        assert!(report.success);
        assert_eq!(
            store.value(CREDENTIAL_STORAGE_KEY).as_deref(),
            Some("sk-your-deepseek-api-key-here")
        );
        assert_eq!(gateway.credentials(), vec!["sk-your-deepseek-api-key-here"]);
    }
}
