//! Parser error types

use advrule_core::{CoreError, Operator};
use thiserror::Error;

/// Reason a rule document was rejected
#[derive(Error, Debug)]
pub enum ParseError {
    /// Rule text is not valid JSON
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration text is not valid YAML
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document has no keys
    #[error("Rule document is empty")]
    EmptyDocument,

    /// Document is not a keyed object
    #[error("Rule document must be an object, got {found}")]
    NotAnObject { found: &'static str },

    /// Document has more than one key and extra keys are rejected
    #[error("Rule document must have exactly one key, got {count}")]
    ExtraKeys { count: usize },

    /// Field is not bound to an `{operator: value}` object
    #[error("Field '{field}' has no condition object")]
    MissingCondition { field: String },

    /// Condition operator is unknown or not a leaf operator
    #[error("Invalid operator '{token}' for field '{field}'")]
    InvalidOperator { field: String, token: String },

    /// Condition value has the wrong kind for its operator
    #[error("Type mismatch for field '{field}': '{operator}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        operator: Operator,
        expected: &'static str,
        actual: &'static str,
    },

    /// Set operator with no values
    #[error("Empty value set for field '{field}' with operator '{operator}'")]
    EmptyValueSet { field: String, operator: Operator },

    /// Combinator with no sub-rules
    #[error("Combinator '{0}' has no rules")]
    EmptyRuleList(Operator),

    /// A sub-rule of a combinator was rejected
    #[error("Rule {index} of '{operator}' is invalid: {source}")]
    InvalidSubrule {
        operator: Operator,
        index: usize,
        #[source]
        source: Box<ParseError>,
    },

    /// Rule nesting exceeds the configured limit
    #[error("Rule nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// Rule tree construction error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
