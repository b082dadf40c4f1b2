//! Rule document access
//!
//! Helpers for reading untrusted, decoded rule documents. Rule documents are
//! JSON objects that are expected to carry a single key; that key is called
//! the document's primary key.

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use serde_json::{Map, Value};

/// A decoded JSON object
pub type Object = Map<String, Value>;

/// Rule document utilities
pub struct RuleDocument;

impl RuleDocument {
    /// Decode rule text into a JSON value
    pub fn decode(json_str: &str) -> Result<Value> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Borrow a value as an object
    pub fn as_object(value: &Value) -> Result<&Object> {
        value.as_object().ok_or(ParseError::NotAnObject {
            found: Self::kind(value),
        })
    }

    /// First entry of an object, subject to the configured key policy
    pub fn primary_entry<'a>(
        object: &'a Object,
        config: &ParserConfig,
    ) -> Result<(&'a str, &'a Value)> {
        if config.reject_extra_keys && object.len() > 1 {
            return Err(ParseError::ExtraKeys {
                count: object.len(),
            });
        }

        object
            .iter()
            .next()
            .map(|(key, value)| (key.as_str(), value))
            .ok_or(ParseError::EmptyDocument)
    }

    /// Short name of a JSON value's kind, for error messages
    pub fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "list",
            Value::Object(_) => "object",
        }
    }
}
