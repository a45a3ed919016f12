//! Read-only document access used by the extractor.

/// Query access to a rendered article page.
///
/// Implementations live in the infrastructure layer (HTML parsing). The
/// extractor only needs the text content of every element matching a CSS
/// selector, in document order.
pub trait ArticleDocument {
    /// Text content of each element matching `selector`, in document order.
    ///
    /// An invalid selector matches nothing.
    fn select_texts(&self, selector: &str) -> Vec<String>;

    /// Text content of the first element matching `selector`.
    fn first_text(&self, selector: &str) -> Option<String> {
        self.select_texts(selector).into_iter().next()
    }
}

/// In-memory document keyed by selector, for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct FakeDocument {
    entries: Vec<(&'static str, String)>,
}

#[cfg(test)]
impl FakeDocument {
    pub(crate) fn with(mut self, selector: &'static str, text: impl Into<String>) -> Self {
        self.entries.push((selector, text.into()));
        self
    }
}

#[cfg(test)]
impl ArticleDocument for FakeDocument {
    fn select_texts(&self, selector: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == selector)
            .map(|(_, t)| t.clone())
            .collect()
    }
}
