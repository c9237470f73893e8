// Console rendering for response bodies.

use std::io::{self, Write};

use serde_json::Value;

use crate::api::ResponseBody;

/// Render `value` with 2-space indentation. Non-ASCII characters are kept
/// as-is (`Catégorie`, not `Cat\u00e9gorie`).
pub fn pretty_json(value: &Value) -> String {
    // Serializing a `Value` cannot fail: its map keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Write a response body followed by a newline. Bodies that are not JSON
/// are flagged and written verbatim.
pub fn write_body<W: Write>(out: &mut W, body: &ResponseBody) -> io::Result<()> {
    match body {
        ResponseBody::Json(value) => writeln!(out, "{}", pretty_json(value)),
        ResponseBody::Raw(text) => {
            writeln!(out, "⚠️ Response body is not valid JSON:")?;
            writeln!(out, "{}", text)
        }
    }
}

/// Whether a category list contains an entry whose `id` is `id`.
/// Returns `None` when the list is not a JSON array.
pub fn lists_category(list: &Value, id: &str) -> Option<bool> {
    let entries = list.as_array()?;
    Some(
        entries
            .iter()
            .any(|entry| entry.get("id").and_then(Value::as_str) == Some(id)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_json_keeps_unicode_and_two_space_indent() {
        let rendered = pretty_json(&json!({ "label": "Test Catégorie" }));
        assert_eq!(rendered, "{\n  \"label\": \"Test Catégorie\"\n}");
        assert!(!rendered.contains("\\u00e9"));
    }

    #[test]
    fn raw_body_is_flagged() {
        let mut out = Vec::new();
        write_body(&mut out, &ResponseBody::Raw("Bad Gateway".into())).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "⚠️ Response body is not valid JSON:\nBad Gateway\n");
    }

    #[test]
    fn category_lookup() {
        let list = json!([
            { "id": "sport", "label": "Sport" },
            { "id": "test", "label": "Test Catégorie" }
        ]);
        assert_eq!(lists_category(&list, "test"), Some(true));
        assert_eq!(lists_category(&list, "yoga"), Some(false));
        assert_eq!(lists_category(&json!({ "error": "nope" }), "test"), None);
    }
}
