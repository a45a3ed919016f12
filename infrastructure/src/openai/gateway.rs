//! OpenAI-compatible LLM Gateway implementation

use super::error::{OpenAiError, Result};
use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use std::time::Duration;
use thinker_application::{GatewayError, LlmGateway};
use thinker_domain::{CompletionRequest, Credential};
use tracing::{debug, info};

const COMPLETIONS_PATH: &str = "/chat/completions";

/// LLM Gateway for an OpenAI-compatible chat completion API
pub struct OpenAiGateway {
    client: reqwest::Client,
    url: String,
}

impl OpenAiGateway {
    /// Create a gateway for `endpoint` (e.g. `https://api.deepseek.com/v1`).
    ///
    /// Without a timeout a request waits as long as the server does.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let url = format!("{}{}", endpoint.trim_end_matches('/'), COMPLETIONS_PATH);
        info!("OpenAiGateway initialized for {}", url);

        Ok(Self { client, url })
    }

    /// Full URL requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, request: &CompletionRequest, credential: &Credential) -> Result<String> {
        debug!(
            "POST {} (model {}, max_tokens {}, temperature {})",
            self.url, request.model, request.max_tokens, request.temperature
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(credential.expose())
            .json(&ChatRequest::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::ParseError(e.to_string()))?;
        Ok(body.first_content())
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &Credential,
    ) -> std::result::Result<String, GatewayError> {
        Ok(self.post(request, credential).await?)
    }
}
