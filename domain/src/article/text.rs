//! Text normalization for extracted article content.

use serde::{Deserialize, Serialize};

/// Whitespace-normalized article text bounded by the configured budget.
///
/// Produced fresh for each request and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    content: String,
}

impl ExtractedText {
    /// Normalize `raw` and window it to at most `max_chars` characters.
    pub fn new(raw: &str, max_chars: usize) -> Self {
        let normalized = normalize_whitespace(raw);
        let content = if normalized.chars().count() > max_chars {
            window_around_middle(&normalized, max_chars)
        } else {
            normalized
        };
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Take a `max_chars` window centered on the middle of `text`, then trim it
/// to word boundaries on both ends.
///
/// `text` must already be whitespace-normalized. The window starts
/// `(len - max_chars) / 2` characters into the text. A word cut by either
/// edge of the window is dropped, so no returned word is a fragment.
pub fn window_around_middle(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    let mut lo = (chars.len() - max_chars) / 2;
    let mut hi = lo + max_chars;

    // Leading fragment: the character before the window continues the word
    if lo > 0 && chars[lo - 1] != ' ' {
        while lo < hi && chars[lo] != ' ' {
            lo += 1;
        }
    }
    // Trailing fragment: the character after the window continues the word
    if hi < chars.len() && chars[hi] != ' ' {
        while hi > lo && chars[hi - 1] != ' ' {
            hi -= 1;
        }
    }

    chars[lo..hi].iter().collect::<String>().trim().to_string()
}
