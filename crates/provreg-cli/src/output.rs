//! Output rendering for search results.

use serde_json::Value;
use serde_json_path::JsonPath;
use thiserror::Error;

/// Errors that can occur while rendering results.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The JSONPath expression could not be parsed.
    #[error("invalid jsonpath expression: {0}")]
    Path(#[from] serde_json_path::ParseError),
    /// Result serialization failed.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Renders `events` as JSON.
///
/// The result sequence serializes as a JSON array. A non-empty `jsonpath`
/// is applied to that document first; the density choice then formats
/// whatever the projection produced. A projection locating exactly one node
/// renders the node alone; zero or several matches render as an array, so a
/// no-match projection prints `[]` rather than failing.
pub fn render(events: &[Value], jsonpath: &str, compact: bool) -> Result<String, OutputError> {
    let document = Value::Array(events.to_vec());
    let projected = if jsonpath.is_empty() {
        document
    } else {
        project(&document, jsonpath)?
    };

    let rendered = if compact {
        serde_json::to_string(&projected)?
    } else {
        serde_json::to_string_pretty(&projected)?
    };
    Ok(rendered)
}

fn project(document: &Value, expression: &str) -> Result<Value, OutputError> {
    let path = JsonPath::parse(expression)?;
    let nodes = path.query(document).all();
    if nodes.len() == 1 {
        Ok(nodes[0].clone())
    } else {
        Ok(Value::Array(nodes.into_iter().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn events() -> Vec<Value> {
        vec![
            json!({ "id": "e1", "name": "build" }),
            json!({ "id": "e2", "name": "test" }),
        ]
    }

    #[test]
    fn compact_and_indented_decode_identically() {
        let compact = render(&events(), "", true).unwrap();
        let indented = render(&events(), "", false).unwrap();

        let a: Value = serde_json::from_str(&compact).unwrap();
        let b: Value = serde_json::from_str(&indented).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Value::Array(events()));
    }

    #[test]
    fn compact_output_is_single_line() {
        let compact = render(&events(), "", true).unwrap();
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn indented_output_uses_two_space_indent() {
        let indented = render(&events(), "", false).unwrap();
        assert!(indented.starts_with("[\n  {"));
    }

    #[test]
    fn single_match_projection_emits_the_value() {
        let rendered = render(&events(), "$[0].name", true).unwrap();
        assert_eq!(rendered, r#""build""#);
    }

    #[test]
    fn multi_match_projection_emits_an_array() {
        let rendered = render(&events(), "$[*].id", true).unwrap();
        assert_eq!(rendered, r#"["e1","e2"]"#);
    }

    #[test]
    fn no_match_projection_emits_an_empty_array() {
        let rendered = render(&events(), "$[*].missing", true).unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn malformed_expression_is_rejected() {
        let err = render(&events(), "$[", true).unwrap_err();
        assert!(matches!(err, OutputError::Path(_)));
    }

    #[test]
    fn empty_result_set_renders_as_empty_array() {
        assert_eq!(render(&[], "", true).unwrap(), "[]");
    }
}
