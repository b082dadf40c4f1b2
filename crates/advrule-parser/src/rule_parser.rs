//! Rule parser
//!
//! Entry point for turning rule documents into [`RuleNode`] trees. The first
//! key of a document decides its shape: a combinator token (`and`, `or`,
//! `not`) selects the multi-entry builder, anything else is read as the field
//! key of a single-entry rule.

use crate::config::ParserConfig;
use crate::document::{Object, RuleDocument};
use crate::error::{ParseError, Result};
use crate::multi_entry::MultiEntryBuilder;
use crate::single_entry::SingleEntryBuilder;
use advrule_core::{Operator, RuleNode};
use serde_json::Value;

/// Advertiser rule parser
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    config: ParserConfig,
}

impl RuleParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse rule text, returning `None` for any malformed rule.
    ///
    /// Decoding failures are logged at `warn` level, rejected rules at `debug`.
    pub fn parse_text(&self, json_str: &str) -> Option<RuleNode> {
        let document = match RuleDocument::decode(json_str) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Failed to decode advertiser rule: {}", e);
                return None;
            }
        };
        self.parse(&document)
    }

    /// Parse a decoded rule document, returning `None` for any malformed rule
    pub fn parse(&self, document: &Value) -> Option<RuleNode> {
        match self.try_parse(document) {
            Ok(rule) => Some(rule),
            Err(e) => {
                log::debug!("Rejected advertiser rule: {}", e);
                None
            }
        }
    }

    /// Parse rule text, reporting why a rule was rejected
    pub fn try_parse_text(&self, json_str: &str) -> Result<RuleNode> {
        let document = RuleDocument::decode(json_str)?;
        self.try_parse(&document)
    }

    /// Parse a decoded rule document, reporting why a rule was rejected
    pub fn try_parse(&self, document: &Value) -> Result<RuleNode> {
        let object = RuleDocument::as_object(document)?;
        self.parse_at(object, 1)
    }

    /// Parse a document found at nesting level `depth`
    pub(crate) fn parse_at(&self, document: &Object, depth: usize) -> Result<RuleNode> {
        if depth > self.config.max_depth {
            return Err(ParseError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }

        let (token, _) = RuleDocument::primary_entry(document, &self.config)?;
        let operator = Operator::resolve(token);

        if operator.is_combinator() {
            log::trace!("Parsing '{}' combinator at depth {}", operator, depth);
            MultiEntryBuilder::build(self, document, depth).map(RuleNode::Combinator)
        } else {
            log::trace!("Parsing condition on '{}' at depth {}", token, depth);
            SingleEntryBuilder::build(document, &self.config).map(RuleNode::Leaf)
        }
    }
}
