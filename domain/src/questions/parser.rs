//! Answer parsing for generated questions.
//!
//! Models are asked for plain bullet points but answer in many shapes:
//! fenced blocks, numbered lists, prose. [`parse_answer`] normalizes the
//! reply and tries each [`ParseStrategy`] in order; the first one that
//! succeeds wins. There is no guarantee of exactly three entries, callers
//! decide how to degrade.
//!
//! | Order | Strategy | Succeeds when |
//! |-------|----------|---------------|
//! | 1 | [`ParseStrategy::BulletLines`] | 3+ lines start with `-` or `*` |
//! | 2 | [`ParseStrategy::PassThrough`] | every non-blank line is a bullet |
//! | 3 | [`ParseStrategy::ListItems`] | Markdown rendering has list items |
//! | 4 | [`ParseStrategy::Paragraphs`] | any non-empty blank-line paragraph |

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

const FENCE: &str = "```";
const MIN_BULLET_LINES: usize = 3;
const MAX_PARAGRAPHS: usize = 3;

/// One way of turning a model reply into question entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Lines starting with `-` or `*`, marker stripped.
    BulletLines,
    /// Already-bulleted text returned whole as a single entry.
    PassThrough,
    /// Inner HTML of every Markdown list item.
    ListItems,
    /// First three blank-line separated paragraphs.
    Paragraphs,
}

impl ParseStrategy {
    /// Evaluation order used by [`parse_answer`].
    pub const CHAIN: [ParseStrategy; 4] = [
        ParseStrategy::BulletLines,
        ParseStrategy::PassThrough,
        ParseStrategy::ListItems,
        ParseStrategy::Paragraphs,
    ];

    /// Run this strategy over fence-stripped text.
    pub fn apply(&self, text: &str) -> Option<Vec<String>> {
        match self {
            ParseStrategy::BulletLines => bullet_lines(text),
            ParseStrategy::PassThrough => pass_through(text),
            ParseStrategy::ListItems => list_items(text),
            ParseStrategy::Paragraphs => paragraphs(text),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStrategy::BulletLines => "bullet_lines",
            ParseStrategy::PassThrough => "pass_through",
            ParseStrategy::ListItems => "list_items",
            ParseStrategy::Paragraphs => "paragraphs",
        }
    }
}

/// Parse a model reply into question entries (possibly empty).
pub fn parse_answer(raw: &str) -> Vec<String> {
    parse_answer_with_strategy(raw)
        .map(|(entries, _)| entries)
        .unwrap_or_default()
}

/// Like [`parse_answer`], also reporting which strategy matched.
pub fn parse_answer_with_strategy(raw: &str) -> Option<(Vec<String>, ParseStrategy)> {
    let text = strip_fence(raw);
    ParseStrategy::CHAIN
        .iter()
        .find_map(|strategy| strategy.apply(text).map(|entries| (entries, *strategy)))
}

/// Remove a leading fence line (with optional language tag) and a trailing fence.
pub fn strip_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => "",
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }
    text.trim()
}

fn is_bullet(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('*')
}

fn bullet_lines(text: &str) -> Option<Vec<String>> {
    let entries: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| is_bullet(line))
        .map(|line| line[1..].trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect();
    (entries.len() >= MIN_BULLET_LINES).then_some(entries)
}

fn pass_through(text: &str) -> Option<Vec<String>> {
    let mut non_blank = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
    non_blank.peek()?;
    non_blank
        .all(is_bullet)
        .then(|| vec![text.to_string()])
}

fn list_items(text: &str) -> Option<Vec<String>> {
    let events: Vec<Event<'_>> = Parser::new_ext(text, Options::empty()).collect();

    let mut items = Vec::new();
    for (start, event) in events.iter().enumerate() {
        if !matches!(event, Event::Start(Tag::Item)) {
            continue;
        }
        // Find the matching end, skipping nested items
        let mut depth = 0usize;
        let mut end = events.len();
        for (offset, inner) in events[start + 1..].iter().enumerate() {
            match inner {
                Event::Start(Tag::Item) => depth += 1,
                Event::End(TagEnd::Item) if depth == 0 => {
                    end = start + 1 + offset;
                    break;
                }
                Event::End(TagEnd::Item) => depth -= 1,
                _ => {}
            }
        }

        let mut inner_html = String::new();
        html::push_html(&mut inner_html, events[start + 1..end].iter().cloned());
        let inner_html = inner_html.trim().to_string();
        if !inner_html.is_empty() {
            items.push(inner_html);
        }
    }

    (!items.is_empty()).then_some(items)
}

fn paragraphs(text: &str) -> Option<Vec<String>> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                entries.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        entries.push(current.join("\n").trim().to_string());
    }

    let entries: Vec<String> = entries
        .into_iter()
        .filter(|e| !e.is_empty())
        .take(MAX_PARAGRAPHS)
        .collect();
    (!entries.is_empty()).then_some(entries)
}
