use serde_json::Value;
use thiserror::Error;

use crate::path::JsonPath;

/// Errors produced while comparing two json documents.
///
/// Malformed input surfaces the `serde_json` decode error unchanged, with no
/// added context: decoding happens before any path exists. Every mismatch
/// variant carries the [`JsonPath`] at which it was detected and renders as
/// a single line of the form `<path>: <message>`.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Haystack or needle was not valid json.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A key present in needle does not exist in haystack.
    #[error("{path}: key {key:?} does not exist in haystack")]
    KeyMissing { path: JsonPath, key: String },

    /// Map or array lengths differ in a way the match mode does not allow.
    #[error("{path}: length mismatch, expected {needle_len}, got {haystack_len}")]
    LengthMismatch {
        path: JsonPath,
        haystack_len: usize,
        needle_len: usize,
    },

    /// Needle and haystack hold different json types at the same location.
    ///
    /// Type descriptors are `null`, `boolean`, `number`, `string`, `array`
    /// and `object`. Tests asserting on error messages may rely on these
    /// names.
    #[error("{path}: type mismatch, expected {needle_type}, got {haystack_type}")]
    TypeMismatch {
        path: JsonPath,
        haystack_type: &'static str,
        needle_type: &'static str,
    },

    /// Two scalars of the same type hold different values. Values render in
    /// their json representation, so strings appear quoted.
    #[error("{path}: value mismatch, expected {needle}, got {haystack}")]
    ValueMismatch {
        path: JsonPath,
        haystack: Value,
        needle: Value,
    },
}

impl CompareError {
    pub(crate) fn key_missing(path: JsonPath, key: &str) -> Self {
        CompareError::KeyMissing {
            path,
            key: key.to_owned(),
        }
    }

    pub(crate) fn length_mismatch(path: JsonPath, haystack_len: usize, needle_len: usize) -> Self {
        CompareError::LengthMismatch {
            path,
            haystack_len,
            needle_len,
        }
    }

    pub(crate) fn type_mismatch(path: JsonPath, haystack: &Value, needle: &Value) -> Self {
        CompareError::TypeMismatch {
            path,
            haystack_type: type_name(haystack),
            needle_type: type_name(needle),
        }
    }

    pub(crate) fn value_mismatch(path: JsonPath, haystack: &Value, needle: &Value) -> Self {
        CompareError::ValueMismatch {
            path,
            haystack: haystack.clone(),
            needle: needle.clone(),
        }
    }
}

/// Canonical descriptor for a json value variant, used in type mismatch
/// messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
