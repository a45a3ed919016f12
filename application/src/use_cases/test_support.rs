//! Hand-written port mocks shared by use case tests.

use crate::ports::key_value_store::{KeyValueStore, StoreError};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use thinker_domain::{ArticleDocument, CompletionRequest, Credential};

// ==================== Gateway ====================

/// Gateway returning scripted results in order, recording every request.
pub(crate) struct MockGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<(CompletionRequest, String)>>,
}

impl MockGateway {
    pub(crate) fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|a| Ok(a.to_string())).collect())
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub(crate) fn credentials(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, credential)| credential.clone())
            .collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &Credential,
    ) -> Result<String, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), credential.expose().to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

pub(crate) fn rejected(status: u16) -> Result<String, GatewayError> {
    Err(GatewayError::RequestFailed {
        status,
        body: "rejected".to_string(),
    })
}

// ==================== Key-value store ====================

/// In-memory store.
#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    unavailable: bool,
    failing: bool,
}

impl MemoryStore {
    pub(crate) fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        !self.unavailable
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing {
            return Err(StoreError::Io("disk on fire".into()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Io("disk on fire".into()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

// ==================== Document ====================

/// Document answering every selector from a fixed table.
#[derive(Default)]
pub(crate) struct FakeDocument {
    entries: Vec<(&'static str, String)>,
}

impl FakeDocument {
    pub(crate) fn with(mut self, selector: &'static str, text: impl Into<String>) -> Self {
        self.entries.push((selector, text.into()));
        self
    }

    /// An `<article>` with `words` distinct words.
    pub(crate) fn article_with_words(words: usize) -> Self {
        let text = (0..words)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        Self::default().with("article", text)
    }
}

impl ArticleDocument for FakeDocument {
    fn select_texts(&self, selector: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == selector)
            .map(|(_, t)| t.clone())
            .collect()
    }
}
