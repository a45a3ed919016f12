//! Question panel state.
//!
//! [`QuestionPanel`] holds what the UI shell shows for one article: the
//! current [`QuestionSet`], how many regenerations were used, whether a
//! request is in flight and the last error from its source. Each presentation (terminal
//! panel, HTML panel) renders from this state.
//!
//! Requests go through a [`QuestionSource`], so the panel never touches the
//! document or the gateway directly.

use async_trait::async_trait;
use thinker_domain::QuestionSet;
use thiserror::Error;
use tracing::{debug, info};

/// A source that refused to produce questions.
///
/// The panel shows it with a retry affordance. Sources backed by the
/// question service never return it; they degrade to the fallback set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("No questions available: {0}")]
    Rejected(String),
}

/// Where the panel gets its questions from.
///
/// `?Send`: sources borrow a parsed document, which stays on one thread.
#[async_trait(?Send)]
pub trait QuestionSource {
    /// Fetch a question set; `previous` is set for regenerations.
    async fn fetch(&self, previous: Option<&QuestionSet>) -> Result<QuestionSet, PanelError>;
}

/// Result of a panel action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    /// A new question set is shown.
    Updated,
    /// The regeneration budget is spent; no request was made.
    LimitReached,
    /// The request was rejected; previous questions are kept.
    Failed,
    /// `open` was already called.
    AlreadyOpen,
    /// `retry` with no failed request.
    NothingToRetry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Open,
    Regenerate,
}

/// Panel state for one article session.
#[derive(Debug)]
pub struct QuestionPanel {
    questions: Option<QuestionSet>,
    regeneration_count: u32,
    max_regenerations: u32,
    opened: bool,
    loading: bool,
    error: Option<PanelError>,
    failed_request: Option<RequestKind>,
}

impl QuestionPanel {
    pub fn new(max_regenerations: u32) -> Self {
        Self {
            questions: None,
            regeneration_count: 0,
            max_regenerations,
            opened: false,
            loading: false,
            error: None,
            failed_request: None,
        }
    }

    // ==================== Actions ====================

    /// First generation. Runs once; does not count as a regeneration.
    pub async fn open(&mut self, source: &dyn QuestionSource) -> PanelOutcome {
        if self.opened {
            return PanelOutcome::AlreadyOpen;
        }
        self.opened = true;
        self.request(source, RequestKind::Open).await
    }

    /// Ask for a different set, unless the budget is spent.
    pub async fn regenerate(&mut self, source: &dyn QuestionSource) -> PanelOutcome {
        if !self.can_regenerate() {
            debug!(
                "Regeneration limit reached ({}/{})",
                self.regeneration_count, self.max_regenerations
            );
            return PanelOutcome::LimitReached;
        }
        self.request(source, RequestKind::Regenerate).await
    }

    /// Re-run the request that was last rejected.
    pub async fn retry(&mut self, source: &dyn QuestionSource) -> PanelOutcome {
        match self.failed_request {
            None => PanelOutcome::NothingToRetry,
            Some(RequestKind::Regenerate) if !self.can_regenerate() => PanelOutcome::LimitReached,
            Some(kind) => self.request(source, kind).await,
        }
    }

    async fn request(&mut self, source: &dyn QuestionSource, kind: RequestKind) -> PanelOutcome {
        let previous = match kind {
            RequestKind::Open => None,
            RequestKind::Regenerate => self.questions.clone(),
        };

        self.loading = true;
        let result = source.fetch(previous.as_ref()).await;
        self.loading = false;

        match result {
            Ok(questions) => {
                self.questions = Some(questions);
                self.error = None;
                self.failed_request = None;
                if kind == RequestKind::Regenerate {
                    self.regeneration_count += 1;
                    info!(
                        "Questions regenerated ({}/{})",
                        self.regeneration_count, self.max_regenerations
                    );
                }
                PanelOutcome::Updated
            }
            Err(e) => {
                self.error = Some(e);
                self.failed_request = Some(kind);
                PanelOutcome::Failed
            }
        }
    }

    // ==================== State ====================

    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    pub fn regeneration_count(&self) -> u32 {
        self.regeneration_count
    }

    pub fn max_regenerations(&self) -> u32 {
        self.max_regenerations
    }

    pub fn remaining_regenerations(&self) -> u32 {
        self.max_regenerations.saturating_sub(self.regeneration_count)
    }

    pub fn can_regenerate(&self) -> bool {
        self.remaining_regenerations() > 0
    }

    /// True only while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last rejection, cleared by the next successful request.
    pub fn error(&self) -> Option<&PanelError> {
        self.error.as_ref()
    }

    /// Whether `retry` has something to re-run.
    pub fn can_retry(&self) -> bool {
        self.failed_request.is_some()
    }

    /// "You have N regeneration(s) remaining." or the limit notice.
    pub fn remaining_message(&self) -> String {
        match self.remaining_regenerations() {
            0 => "You have reached the maximum number of regenerations.".to_string(),
            1 => "You have 1 regeneration remaining.".to_string(),
            n => format!("You have {} regenerations remaining.", n),
        }
    }
}
