use thiserror::Error;

use crate::types::Rule;

/// Errors produced when loading a JSON rule document.
///
/// This is the one place malformed input is an error rather than a silent
/// non-match: a document whose top level is not an array of rule objects
/// is a configuration mistake and is reported before any evaluation runs.
/// Malformed conditions inside a rule are not errors -- they deserialize
/// to [`Condition::Unsupported`](crate::Condition::Unsupported) and simply
/// never match.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid rule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level rule document must be an array, got {found}")]
    NotAnArray { found: &'static str },
}

/// Parse a JSON rule document into an ordered list of [`Rule`]s.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid JSON, its top level is
/// not an array, or an element is not a rule object.
pub fn parse(input: &str) -> Result<Vec<Rule>, ParseError> {
    let document: serde_json::Value = serde_json::from_str(input)?;
    let serde_json::Value::Array(items) = document else {
        return Err(ParseError::NotAnArray {
            found: json_type_name(&document),
        });
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ParseError::Json))
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
