/*
 * args.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Building template arguments from text.
//!
//! These helpers back command-line style input: `KEY=VALUE` assignments,
//! bare positional values, and JSON documents.

use serde_json::{Map, Value};

use crate::error::{SqurlyError, SqurlyResult};

/// Parse a textual value.
///
/// Valid JSON is taken as JSON (`5`, `true`, `null`, `[1, 2]`); anything else is
/// kept as a plain string, so `Mark` does not need quoting.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse a `KEY=VALUE` assignment.
///
/// The key must be usable as a placeholder key (ASCII letters and digits).
/// The value is parsed with [`parse_value`].
pub fn parse_assignment(text: &str) -> SqurlyResult<(String, Value)> {
    let invalid = || SqurlyError::InvalidAssignment {
        text: text.to_string(),
    };

    let (key, raw) = text.split_once('=').ok_or_else(invalid)?;
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(invalid());
    }
    Ok((key.to_string(), parse_value(raw)))
}

/// Collect `KEY=VALUE` assignments into a single map argument.
///
/// Later assignments to the same key win.
pub fn parse_assignments<I, S>(assignments: I) -> SqurlyResult<Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = Map::new();
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment.as_ref())?;
        map.insert(key, value);
    }
    Ok(Value::Object(map))
}

/// Parse a JSON document into a single argument.
pub fn parse_data(text: &str) -> SqurlyResult<Value> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("5"), json!(5));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value("\"quoted\""), json!("quoted"));
        assert_eq!(parse_value("Mark"), json!("Mark"));
        assert_eq!(parse_value(""), json!(""));
        assert_eq!(parse_value("01/01/2015"), json!("01/01/2015"));
    }

    #[test]
    fn test_parse_assignment() {
        let (key, value) = parse_assignment("name=Mark").unwrap();
        assert_eq!(key, "name");
        assert_eq!(value, json!("Mark"));

        let (key, value) = parse_assignment("expr=a=b").unwrap();
        assert_eq!(key, "expr");
        assert_eq!(value, json!("a=b"));

        let (_, value) = parse_assignment("emails=5").unwrap();
        assert_eq!(value, json!(5));
    }

    #[test]
    fn test_parse_assignment_errors() {
        for text in ["name", "=Mark", "first name=Mark", "a.b=1"] {
            let err = parse_assignment(text).unwrap_err();
            assert!(matches!(err, SqurlyError::InvalidAssignment { .. }), "{text}");
        }
    }

    #[test]
    fn test_parse_assignments() {
        let value = parse_assignments(["name=Anna", "emails=5", "name=Mark"]).unwrap();
        assert_eq!(value, json!({"name": "Mark", "emails": 5}));

        assert!(parse_assignments(["ok=1", "broken"]).is_err());
    }

    #[test]
    fn test_parse_data() {
        assert_eq!(parse_data(r#"{"a": [1]}"#).unwrap(), json!({"a": [1]}));

        let err = parse_data("{not json").unwrap_err();
        assert!(matches!(err, SqurlyError::InvalidData(_)));
        assert!(err.to_string().starts_with("Invalid JSON data: "));
    }
}
