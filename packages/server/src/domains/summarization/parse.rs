//! Parsing of the model's `{"summary": ..., "keyPoints": [...]}` reply.

use lazy_static::lazy_static;
use openai_client::strip_code_blocks;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref SUMMARY_RE: Regex =
        Regex::new(r#"(?s)"summary":\s*"(.*?)""#).expect("summary regex is valid");
    static ref KEY_POINTS_RE: Regex =
        Regex::new(r#"(?s)"keyPoints":\s*\[(.*?)\]"#).expect("key points regex is valid");
}

/// Summary text and key points pulled out of a model reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReply {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// Parse a model reply. Never fails: unparseable replies degrade to the
/// regex fallback, which may yield an empty summary.
pub fn parse_summary_reply(reply: &str) -> ParsedReply {
    let cleaned = strip_code_blocks(reply);

    // Only the first JSON value counts; trailing chatter is ignored.
    let mut values = serde_json::Deserializer::from_str(cleaned).into_iter::<Value>();
    match values.next() {
        Some(Ok(value)) => from_json(&value),
        None => ParsedReply::default(),
        Some(Err(_)) => from_regex(cleaned),
    }
}

fn from_json(value: &Value) -> ParsedReply {
    let summary = value.get("summary").map(value_text).unwrap_or_default();
    let key_points = match value.get("keyPoints") {
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        _ => Vec::new(),
    };
    ParsedReply {
        summary,
        key_points,
    }
}

/// Scalars render as text; arrays and objects render as empty.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn from_regex(text: &str) -> ParsedReply {
    let summary = SUMMARY_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let key_points = KEY_POINTS_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| split_raw_key_points(m.as_str()))
        .unwrap_or_default();

    ParsedReply {
        summary,
        key_points,
    }
}

fn split_raw_key_points(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| {
            let item = item.trim();
            let item = item.strip_prefix('"').unwrap_or(item);
            item.strip_suffix('"').unwrap_or(item).to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_json() {
        let reply = r#"{"summary": "Rust is fast.", "keyPoints": ["Speed", "Safety", "Tooling"]}"#;
        let parsed = parse_summary_reply(reply);
        assert_eq!(parsed.summary, "Rust is fast.");
        assert_eq!(parsed.key_points, vec!["Speed", "Safety", "Tooling"]);
    }

    #[test]
    fn test_parses_fenced_json() {
        let reply = "```json\n{\"summary\": \"Fenced.\", \"keyPoints\": [\"One\"]}\n```";
        let parsed = parse_summary_reply(reply);
        assert_eq!(parsed.summary, "Fenced.");
        assert_eq!(parsed.key_points, vec!["One"]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let parsed = parse_summary_reply(r#"{"other": 1}"#);
        assert_eq!(parsed, ParsedReply::default());

        let parsed = parse_summary_reply(r#"{"summary": "Only summary", "keyPoints": "not a list"}"#);
        assert_eq!(parsed.summary, "Only summary");
        assert!(parsed.key_points.is_empty());
    }

    #[test]
    fn test_scalar_values_render_as_text() {
        let parsed = parse_summary_reply(r#"{"summary": 42, "keyPoints": [true, 1.5, "x"]}"#);
        assert_eq!(parsed.summary, "42");
        assert_eq!(parsed.key_points, vec!["true", "1.5", "x"]);
    }

    #[test]
    fn test_trailing_text_after_json_is_ignored() {
        let parsed = parse_summary_reply(
            "{\"summary\": \"First value wins.\", \"keyPoints\": []}\nHope this helps!",
        );
        assert_eq!(parsed.summary, "First value wins.");
        assert!(parsed.key_points.is_empty());
    }

    #[test]
    fn test_regex_fallback_on_malformed_json() {
        let reply = r#"Here you go: "summary": "Partial summary", "keyPoints": ["A", "B",  , "C"] oops"#;
        let parsed = parse_summary_reply(reply);
        assert_eq!(parsed.summary, "Partial summary");
        assert_eq!(parsed.key_points, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_regex_fallback_spans_lines() {
        let reply = "{\"summary\": \"line one\nline two\", \"keyPoints\": [\n\"a\",\n\"b\"\n], }";
        let parsed = parse_summary_reply(reply);
        assert_eq!(parsed.summary, "line one\nline two");
        assert_eq!(parsed.key_points, vec!["a", "b"]);
    }

    #[test]
    fn test_unrecognizable_reply() {
        let parsed = parse_summary_reply("I cannot summarize this article.");
        assert_eq!(parsed, ParsedReply::default());
        assert_eq!(parse_summary_reply(""), ParsedReply::default());
    }
}
