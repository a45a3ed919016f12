//! Fetch Questions use case.
//!
//! Turns an article document into a [`QuestionSet`]:
//!
//! 1. Extract the visible article text (windowed to `max_input_chars`)
//! 2. Look up the credential in the [`KeyStore`]
//! 3. Send the question prompt (initial or regeneration) to the gateway
//! 4. Parse the reply into at most three questions
//!
//! [`FetchQuestionsUseCase::execute`] never fails: every error is recorded
//! through the [`DiagnosticsSink`] and `tracing`, then replaced by
//! [`QuestionSet::fallback`].

use crate::config::GenerationConfig;
use crate::ports::diagnostics::{DiagnosticEvent, DiagnosticsSink, NoDiagnostics};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{GenerationStep, NoProgress, ProgressNotifier};
use crate::use_cases::key_store::KeyStore;
use crate::use_cases::question_panel::{PanelError, QuestionSource};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use thinker_domain::{
    ArticleDocument, CompletionRequest, ContentExtractor, Credential, QuestionPrompt,
    QuestionSet, parse_answer_with_strategy, truncate,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating questions.
#[derive(Error, Debug)]
pub enum FetchQuestionsError {
    #[error("Not enough article content ({chars} chars, need {min})")]
    InsufficientContent { chars: usize, min: usize },

    #[error("No API key configured")]
    UnconfiguredCredential,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Model returned no content")]
    EmptyCompletion,

    #[error("No questions could be parsed from the reply")]
    NoQuestions,
}

impl FetchQuestionsError {
    /// Short machine-readable kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchQuestionsError::InsufficientContent { .. } => "insufficient_content",
            FetchQuestionsError::UnconfiguredCredential => "unconfigured_credential",
            FetchQuestionsError::Gateway(_) => "gateway",
            FetchQuestionsError::EmptyCompletion => "empty_completion",
            FetchQuestionsError::NoQuestions => "no_questions",
        }
    }

    /// Step the error was raised in.
    pub fn step(&self) -> GenerationStep {
        match self {
            FetchQuestionsError::InsufficientContent { .. } => GenerationStep::Extract,
            FetchQuestionsError::UnconfiguredCredential => GenerationStep::Credential,
            FetchQuestionsError::Gateway(_) | FetchQuestionsError::EmptyCompletion => {
                GenerationStep::Request
            }
            FetchQuestionsError::NoQuestions => GenerationStep::Parse,
        }
    }

    /// True when the provider answered with an error status.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchQuestionsError::Gateway(e) if e.is_rejection())
    }
}

/// Use case for generating critical-thinking questions about an article.
pub struct FetchQuestionsUseCase {
    gateway: Arc<dyn LlmGateway>,
    key_store: Arc<KeyStore>,
    config: GenerationConfig,
    extractor: ContentExtractor,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl FetchQuestionsUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        key_store: Arc<KeyStore>,
        config: GenerationConfig,
    ) -> Self {
        let extractor = ContentExtractor::new(config.max_input_chars);
        Self {
            gateway,
            key_store,
            config,
            extractor,
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    /// Create with a diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate questions, falling back to the fixed set on any failure.
    pub async fn execute(
        &self,
        document: &dyn ArticleDocument,
        previous: Option<&QuestionSet>,
    ) -> QuestionSet {
        self.execute_with_progress(document, previous, &NoProgress)
            .await
    }

    /// Like [`execute`](Self::execute), reporting each step.
    pub async fn execute_with_progress(
        &self,
        document: &dyn ArticleDocument,
        previous: Option<&QuestionSet>,
        progress: &dyn ProgressNotifier,
    ) -> QuestionSet {
        let questions = match self.try_execute(document, previous, progress).await {
            Ok(questions) => questions,
            Err(e) => self.fallback_for(&e, previous.is_some()),
        };
        progress.on_finished(questions.is_fallback());
        questions
    }

    /// Generate questions, surfacing the failure cause.
    pub async fn try_execute(
        &self,
        document: &dyn ArticleDocument,
        previous: Option<&QuestionSet>,
        progress: &dyn ProgressNotifier,
    ) -> Result<QuestionSet, FetchQuestionsError> {
        let regeneration = previous.is_some_and(|p| !p.is_empty());

        // Step 1: extract
        progress.on_step_start(GenerationStep::Extract);
        let (article, source) = self.extractor.extract_with_source(document);
        let min = self.config.min_content_chars;
        let enough = article.len() >= min;
        progress.on_step_complete(GenerationStep::Extract, enough);
        if !enough {
            return Err(FetchQuestionsError::InsufficientContent {
                chars: article.len(),
                min,
            });
        }
        debug!(
            "Extracted {} chars via {}",
            article.len(),
            source.map(|s| s.label()).unwrap_or("nothing")
        );

        // Step 2: credential
        progress.on_step_start(GenerationStep::Credential);
        let credential = self.usable_credential().await;
        progress.on_step_complete(GenerationStep::Credential, credential.is_some());
        let credential = credential.ok_or(FetchQuestionsError::UnconfiguredCredential)?;

        // Step 3: request
        let request = CompletionRequest::new(
            &self.config.model,
            QuestionPrompt::system(),
            QuestionPrompt::for_request(article.as_str(), previous),
        )
        .with_max_tokens(self.config.max_tokens)
        .with_temperature(self.config.temperature_for(regeneration));

        info!(
            "Requesting {} questions from {} (temperature {})",
            if regeneration { "new" } else { "initial" },
            request.model,
            request.temperature
        );
        progress.on_step_start(GenerationStep::Request);
        let reply = self.gateway.complete(&request, &credential).await;
        progress.on_step_complete(
            GenerationStep::Request,
            matches!(&reply, Ok(text) if !text.trim().is_empty()),
        );
        let reply = reply?;
        if reply.trim().is_empty() {
            return Err(FetchQuestionsError::EmptyCompletion);
        }
        debug!("Model reply: {}", truncate(&reply, 200));

        // Step 4: parse
        progress.on_step_start(GenerationStep::Parse);
        let parsed = parse_answer_with_strategy(&reply)
            .and_then(|(entries, strategy)| QuestionSet::new(entries).ok().map(|q| (q, strategy)));
        progress.on_step_complete(GenerationStep::Parse, parsed.is_some());
        let (questions, strategy) = parsed.ok_or(FetchQuestionsError::NoQuestions)?;

        debug!(
            "Parsed {} question(s) with {}",
            questions.len(),
            strategy.as_str()
        );
        Ok(questions)
    }

    /// Stored or bundled credential, unless it is missing or the placeholder.
    async fn usable_credential(&self) -> Option<Credential> {
        self.key_store
            .get()
            .await
            .filter(|credential| !credential.is_placeholder())
    }

    /// Record why generation failed and return the fixed fallback set.
    fn fallback_for(&self, error: &FetchQuestionsError, regeneration: bool) -> QuestionSet {
        warn!("Question generation failed, using fallback: {}", error);
        self.diagnostics.record(DiagnosticEvent::new(
            "generation_failed",
            json!({
                "kind": error.kind(),
                "step": error.step().as_str(),
                "rejected": error.is_rejection(),
                "message": error.to_string(),
                "regeneration": regeneration,
                "model": self.config.model,
            }),
        ));
        QuestionSet::fallback()
    }

    /// Bind this use case to a document for use as a [`QuestionSource`].
    pub fn for_document<'a>(
        &'a self,
        document: &'a dyn ArticleDocument,
        progress: &'a dyn ProgressNotifier,
    ) -> DocumentQuestions<'a> {
        DocumentQuestions {
            use_case: self,
            document,
            progress,
        }
    }
}

/// A [`FetchQuestionsUseCase`] bound to one document.
///
/// Never rejects: every failure, provider errors included, resolves to the
/// fallback set.
pub struct DocumentQuestions<'a> {
    use_case: &'a FetchQuestionsUseCase,
    document: &'a dyn ArticleDocument,
    progress: &'a dyn ProgressNotifier,
}

#[async_trait(?Send)]
impl QuestionSource for DocumentQuestions<'_> {
    async fn fetch(&self, previous: Option<&QuestionSet>) -> Result<QuestionSet, PanelError> {
        Ok(self
            .use_case
            .execute_with_progress(self.document, previous, self.progress)
            .await)
    }
}
