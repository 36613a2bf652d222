//! Three-way reads over untrusted JSON.
//!
//! Every field access yields `Absent`, `WrongKind`, or `Present`. A parent
//! that is not an object reads as if all of its fields were absent, and a
//! `null` value counts as absent.

use serde_json::{Number, Value as Json};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a, T> {
    Absent,
    WrongKind(&'a Json),
    Present(T),
}

/// Look up `key` on `parent`, treating non-objects and `null` as absent.
pub fn lookup<'a>(parent: &'a Json, key: &str) -> Option<&'a Json> {
    match parent.as_object()?.get(key)? {
        Json::Null => None,
        v => Some(v),
    }
}

/// Non-empty string field. The empty string reads as absent.
pub fn text<'a>(parent: &'a Json, key: &str) -> Field<'a, &'a str> {
    match lookup(parent, key) {
        None => Field::Absent,
        Some(Json::String(s)) if s.is_empty() => Field::Absent,
        Some(Json::String(s)) => Field::Present(s.as_str()),
        Some(other) => Field::WrongKind(other),
    }
}

pub fn array<'a>(parent: &'a Json, key: &str) -> Field<'a, &'a [Json]> {
    match lookup(parent, key) {
        None => Field::Absent,
        Some(Json::Array(items)) => Field::Present(items.as_slice()),
        Some(other) => Field::WrongKind(other),
    }
}

/// Numeric field. Booleans are not numbers.
pub fn number<'a>(parent: &'a Json, key: &str) -> Field<'a, &'a Number> {
    match lookup(parent, key) {
        None => Field::Absent,
        Some(Json::Number(n)) => Field::Present(n),
        Some(other) => Field::WrongKind(other),
    }
}

/// JSON kind name used in type-mismatch messages.
pub fn kind_name(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_three_way() {
        let doc = json!({"a": "x", "b": "", "c": 3, "d": null});
        assert_eq!(text(&doc, "a"), Field::Present("x"));
        assert_eq!(text(&doc, "b"), Field::Absent);
        assert_eq!(text(&doc, "d"), Field::Absent);
        assert_eq!(text(&doc, "missing"), Field::Absent);
        assert!(matches!(text(&doc, "c"), Field::WrongKind(v) if kind_name(v) == "number"));
    }

    #[test]
    fn test_non_object_parent_reads_absent() {
        for parent in [json!("str"), json!(7), json!([1, 2]), json!(null)] {
            assert_eq!(text(&parent, "path"), Field::Absent);
            assert_eq!(number(&parent, "line"), Field::Absent);
            assert_eq!(array(&parent, "comments"), Field::Absent);
        }
    }

    #[test]
    fn test_number_rejects_bool_and_string() {
        let doc = json!({"t": true, "s": "3", "n": 2.5});
        assert!(matches!(number(&doc, "t"), Field::WrongKind(v) if kind_name(v) == "boolean"));
        assert!(matches!(number(&doc, "s"), Field::WrongKind(v) if kind_name(v) == "string"));
        assert!(matches!(number(&doc, "n"), Field::Present(n) if n.as_f64() == Some(2.5)));
    }

    #[test]
    fn test_array_empty_is_present() {
        let doc = json!({"comments": [], "other": {}});
        assert!(matches!(array(&doc, "comments"), Field::Present(items) if items.is_empty()));
        assert!(matches!(array(&doc, "other"), Field::WrongKind(v) if kind_name(v) == "object"));
    }
}
