/// Pure utility functions for content manipulation
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching databases, making API calls, or performing I/O.

/// Shorten text for previews.
///
/// If the text is longer than `max_chars` characters, it keeps the first
/// `max_chars - 3` characters and appends "..." for a total of `max_chars`.
/// Shorter text is returned unchanged. Counts characters, not bytes.
pub fn generate_snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        format!("{}...", truncate_chars(text, keep))
    } else {
        text.to_string()
    }
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
