//! String utilities for the domain layer.

/// Shorten `s` to at most `max_chars` characters, appending `...` when cut.
///
/// Used for log and diagnostics previews of model output. Counts characters,
/// not bytes, so multibyte text is never split.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
