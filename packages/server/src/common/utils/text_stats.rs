//! Word accounting and the key-point storage codec.

/// Separator used when key points are stored in a single column.
pub const KEY_POINT_DELIMITER: &str = "|";

/// Stand-in for a delimiter that appears inside a key point.
const DELIMITER_REPLACEMENT: &str = "/";

/// Number of non-empty whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage of words removed by summarization, truncated toward zero.
///
/// Zero when the original is empty. Negative when the summary is longer
/// than the original.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> i32 {
    if original_words == 0 {
        return 0;
    }
    let removed = original_words as f64 - summary_words as f64;
    (removed / original_words as f64 * 100.0) as i32
}

/// Join key points for storage. Points are trimmed; a delimiter inside a
/// point is replaced so the stored list keeps its length.
pub fn join_key_points(points: &[String]) -> String {
    points
        .iter()
        .map(|p| p.trim().replace(KEY_POINT_DELIMITER, DELIMITER_REPLACEMENT))
        .collect::<Vec<_>>()
        .join(KEY_POINT_DELIMITER)
}

/// Inverse of [`join_key_points`]: split, trim, and drop empty entries.
pub fn split_key_points(stored: &str) -> Vec<String> {
    stored
        .split(KEY_POINT_DELIMITER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Saturating conversion for integer columns.
pub fn to_db_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
