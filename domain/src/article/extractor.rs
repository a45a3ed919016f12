//! Article content extraction.
//!
//! The extractor walks an ordered list of [`ExtractionStrategy`] values and
//! uses the first one that yields text:
//!
//! | Order | Strategy | Succeeds when |
//! |-------|----------|---------------|
//! | 1..n  | [`ExtractionStrategy::Selector`] | matched texts joined exceed [`MIN_SELECTOR_CHARS`] |
//! | n+1   | [`ExtractionStrategy::MainRegion`] | a `main` element exists |
//! | n+2   | [`ExtractionStrategy::Paragraphs`] | always (possibly empty) |
//!
//! The winning text is normalized and windowed by [`ExtractedText::new`].

use super::document::ArticleDocument;
use super::text::ExtractedText;

/// Matched selector text must be longer than this to be used.
pub const MIN_SELECTOR_CHARS: usize = 100;

/// Selectors for likely article containers, most specific site layouts last.
pub const ARTICLE_SELECTORS: &[&str] = &[
    "article",
    ".article",
    ".article-content",
    ".article-body",
    ".story-body",
    ".story-content",
    "[data-testid=\"storyBodySection\"]",
    ".section-content",
    ".pw-post-body-paragraph",
    ".meteredContent",
];

const JOIN: &str = "\n\n";

/// One way of pulling article text out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// All elements matching a CSS selector, joined by blank lines.
    Selector(&'static str),
    /// Text of the first `main` element.
    MainRegion,
    /// Every non-empty `p` element, joined by blank lines.
    Paragraphs,
}

impl ExtractionStrategy {
    /// Run this strategy against `document`.
    pub fn apply(&self, document: &dyn ArticleDocument) -> Option<String> {
        match self {
            ExtractionStrategy::Selector(selector) => {
                let texts = document.select_texts(selector);
                if texts.is_empty() {
                    return None;
                }
                let joined = texts.join(JOIN);
                (joined.chars().count() > MIN_SELECTOR_CHARS).then_some(joined)
            }
            ExtractionStrategy::MainRegion => document.first_text("main"),
            ExtractionStrategy::Paragraphs => {
                let paragraphs: Vec<String> = document
                    .select_texts("p")
                    .into_iter()
                    .filter(|p| !p.trim().is_empty())
                    .collect();
                Some(paragraphs.join(JOIN))
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ExtractionStrategy::Selector(selector) => selector,
            ExtractionStrategy::MainRegion => "main",
            ExtractionStrategy::Paragraphs => "p",
        }
    }
}

/// Extracts bounded article text from a document.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    strategies: Vec<ExtractionStrategy>,
    max_chars: usize,
}

impl ContentExtractor {
    /// Extractor with the default selector chain.
    pub fn new(max_chars: usize) -> Self {
        let mut strategies: Vec<ExtractionStrategy> = ARTICLE_SELECTORS
            .iter()
            .map(|s| ExtractionStrategy::Selector(*s))
            .collect();
        strategies.push(ExtractionStrategy::MainRegion);
        strategies.push(ExtractionStrategy::Paragraphs);
        Self {
            strategies,
            max_chars,
        }
    }

    /// Extractor with a custom strategy chain.
    pub fn with_strategies(strategies: Vec<ExtractionStrategy>, max_chars: usize) -> Self {
        Self {
            strategies,
            max_chars,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn strategies(&self) -> &[ExtractionStrategy] {
        &self.strategies
    }

    /// Extract article text. Never fails; the worst case is an empty text.
    pub fn extract(&self, document: &dyn ArticleDocument) -> ExtractedText {
        self.extract_with_source(document).0
    }

    /// Like [`extract`](Self::extract), also returning the winning strategy.
    pub fn extract_with_source(
        &self,
        document: &dyn ArticleDocument,
    ) -> (ExtractedText, Option<&ExtractionStrategy>) {
        for strategy in &self.strategies {
            if let Some(raw) = strategy.apply(document) {
                return (ExtractedText::new(&raw, self.max_chars), Some(strategy));
            }
        }
        (ExtractedText::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::document::FakeDocument;

    fn lorem(words: usize) -> String {
        "lorem ipsum dolor sit amet "
            .split_whitespace()
            .cycle()
            .take(words)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_article_selector_wins() {
        let doc = FakeDocument::default()
            .with("article", lorem(120))
            .with("main", "navigation and other chrome");
        let extractor = ContentExtractor::new(4000);
        let (text, source) = extractor.extract_with_source(&doc);
        assert_eq!(source, Some(&ExtractionStrategy::Selector("article")));
        assert!(text.as_str().starts_with("lorem ipsum"));
    }

    #[test]
    fn test_short_selector_match_is_skipped() {
        let doc = FakeDocument::default()
            .with("article", "too short")
            .with(".story-body", lorem(40));
        let extractor = ContentExtractor::new(4000);
        let (_, source) = extractor.extract_with_source(&doc);
        assert_eq!(source, Some(&ExtractionStrategy::Selector(".story-body")));
    }

    #[test]
    fn test_multiple_matches_are_joined() {
        let doc = FakeDocument::default()
            .with(".article-body", lorem(12))
            .with(".article-body", lorem(12));
        let text = ContentExtractor::new(4000).extract(&doc);
        // Each part alone is under the threshold; together they pass
        assert_eq!(text.as_str(), format!("{} {}", lorem(12), lorem(12)));
    }

    #[test]
    fn test_main_fallback() {
        let doc = FakeDocument::default()
            .with("main", "  Main   region text ")
            .with("p", "paragraph");
        let extractor = ContentExtractor::new(4000);
        let (text, source) = extractor.extract_with_source(&doc);
        assert_eq!(source, Some(&ExtractionStrategy::MainRegion));
        assert_eq!(text.as_str(), "Main region text");
    }

    #[test]
    fn test_paragraph_fallback() {
        let doc = FakeDocument::default()
            .with("p", "First paragraph.")
            .with("p", "")
            .with("p", "Second paragraph.");
        let extractor = ContentExtractor::new(4000);
        let (text, source) = extractor.extract_with_source(&doc);
        assert_eq!(source, Some(&ExtractionStrategy::Paragraphs));
        assert_eq!(text.as_str(), "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_empty_document_yields_empty_text() {
        let text = ContentExtractor::new(4000).extract(&FakeDocument::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_no_strategies_yields_empty_text() {
        let doc = FakeDocument::default().with("article", lorem(200));
        let extractor = ContentExtractor::with_strategies(Vec::new(), 4000);
        let (text, source) = extractor.extract_with_source(&doc);
        assert!(text.is_empty());
        assert!(source.is_none());
    }

    #[test]
    fn test_result_respects_max_chars() {
        let doc = FakeDocument::default().with("article", lorem(5000));
        let text = ContentExtractor::new(500).extract(&doc);
        assert!(text.len() <= 500);
        assert!(text.len() > 400);
    }

    #[test]
    fn test_default_chain_order() {
        let extractor = ContentExtractor::new(10);
        let labels: Vec<&str> = extractor.strategies().iter().map(|s| s.label()).collect();
        assert_eq!(labels.first(), Some(&"article"));
        assert_eq!(labels[labels.len() - 2], "main");
        assert_eq!(labels.last(), Some(&"p"));
        assert_eq!(labels.len(), ARTICLE_SELECTORS.len() + 2);
    }
}
