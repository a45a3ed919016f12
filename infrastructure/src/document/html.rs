//! Article document over parsed HTML

use scraper::{ElementRef, Html, Node, Selector};
use thinker_domain::ArticleDocument;

/// Tags whose entire subtree is never visible text
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// A parsed HTML page.
///
/// `scraper::Html` is neither `Send` nor `Sync`; a document stays on the
/// thread that parsed it.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Page title, if any.
    pub fn title(&self) -> Option<String> {
        self.first_text("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl ArticleDocument for HtmlDocument {
    fn select_texts(&self, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(|element| {
                let mut text = String::new();
                collect_element_text(element, &mut text);
                text
            })
            .collect()
    }
}

/// Concatenate the text nodes under an element, skipping invisible subtrees.
///
/// Text is kept as-is so inline markup never splits a word; whitespace is
/// collapsed later by the extractor.
fn collect_element_text(element: ElementRef<'_>, out: &mut String) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_element_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}
