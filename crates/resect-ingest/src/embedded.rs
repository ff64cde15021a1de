//! Decoder for single-quoted pseudo-JSON cells.
//!
//! Export tools write nested findings as `{'status': 'A1', 'ref': '...'}`.
//! The decoder rewrites single-quote string delimiters to double quotes and
//! then parses strictly. It does not accept anything else beyond JSON: no
//! comments, no trailing commas, no bare keys.

use resect_model::redact_value;
use serde_json::{Map, Value};
use tracing::warn;

/// Decode a pseudo-JSON object cell.
///
/// Returns `None` for absent or blank input. Text that still fails to parse
/// after the quote rewrite, or that parses to something other than an object,
/// is logged and also yields `None`.
pub fn decode_embedded_object(raw: Option<&str>) -> Option<Map<String, Value>> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let rewritten = rewrite_quotes(raw);
    match serde_json::from_str::<Value>(&rewritten) {
        Ok(Value::Object(object)) => Some(object),
        Ok(other) => {
            warn!(
                raw = %redact_value(raw),
                kind = value_kind(&other),
                "embedded value is not an object"
            );
            None
        }
        Err(error) => {
            warn!(
                raw = %redact_value(raw),
                error = %error,
                "failed to decode embedded object"
            );
            None
        }
    }
}

/// Turn single-quoted strings into double-quoted ones.
///
/// Text inside a double-quoted string is copied as is, so apostrophes there
/// survive. A bare `"` inside a single-quoted string is escaped, and `\'`
/// becomes a plain apostrophe since JSON has no such escape.
fn rewrite_quotes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut open: Option<char> = None;
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        let Some(delimiter) = open else {
            if ch == '\'' || ch == '"' {
                open = Some(ch);
                out.push('"');
            } else {
                out.push(ch);
            }
            continue;
        };
        match ch {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            _ if ch == delimiter => {
                open = None;
                out.push('"');
            }
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(raw: &str) -> Option<Value> {
        decode_embedded_object(Some(raw)).map(Value::Object)
    }

    #[test]
    fn decodes_single_quoted_object() {
        assert_eq!(
            decode("{'status': 'A1', 'ref': 'narrowing at origin'}"),
            Some(json!({ "status": "A1", "ref": "narrowing at origin" }))
        );
    }

    #[test]
    fn keeps_apostrophe_inside_double_quoted_value() {
        assert_eq!(
            decode("{'status': 'A1', 'ref': \"it's narrow\"}"),
            Some(json!({ "status": "A1", "ref": "it's narrow" }))
        );
    }

    #[test]
    fn escapes_double_quote_inside_single_quoted_value() {
        assert_eq!(
            decode("{'ref': 'the \"string sign\" is seen'}"),
            Some(json!({ "ref": "the \"string sign\" is seen" }))
        );
        assert_eq!(
            decode("{'ref': 'patient\\'s SMV'}"),
            Some(json!({ "ref": "patient's SMV" }))
        );
    }

    #[test]
    fn decodes_nested_objects() {
        assert_eq!(
            decode("{'celiac_axis': {'status': 'A0', 'ref': ''}, 'common_hepatic_artery': {'status': 'A2', 'ref': 'encased'}}"),
            Some(json!({
                "celiac_axis": { "status": "A0", "ref": "" },
                "common_hepatic_artery": { "status": "A2", "ref": "encased" }
            }))
        );
    }

    #[test]
    fn strict_json_passes_through() {
        assert_eq!(
            decode(r#"{"status": "LN1", "ref": "10 mm node"}"#),
            Some(json!({ "status": "LN1", "ref": "10 mm node" }))
        );
    }

    #[test]
    fn empty_and_absent_input_is_none() {
        assert_eq!(decode_embedded_object(None), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("   "), None);
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(decode("not json at all"), None);
        assert_eq!(decode("{'status': 'A1',}"), None);
        assert_eq!(decode("{status: 'A1'}"), None);
        assert_eq!(decode("{'status': 'A1'"), None);
        assert_eq!(decode("['A1']"), None);
        assert_eq!(decode("'A1'"), None);
    }
}
