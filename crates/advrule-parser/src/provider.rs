//! Rule provider seam
//!
//! Callers that fetch or cache advertiser rules depend on [`RuleProvider`]
//! rather than on [`RuleParser`] directly, so they can be handed a stub in
//! tests.

use crate::rule_parser::RuleParser;
use advrule_core::RuleNode;
use serde_json::Value;

/// Source of parsed advertiser rules
pub trait RuleProvider: Send + Sync {
    /// Create a rule from JSON text; `None` if the text is not a valid rule
    fn create_rule(&self, json_str: &str) -> Option<RuleNode>;

    /// Create a rule from an already decoded document
    fn create_rule_from_document(&self, document: &Value) -> Option<RuleNode>;
}

impl RuleProvider for RuleParser {
    fn create_rule(&self, json_str: &str) -> Option<RuleNode> {
        self.parse_text(json_str)
    }

    fn create_rule_from_document(&self, document: &Value) -> Option<RuleNode> {
        self.parse(document)
    }
}
