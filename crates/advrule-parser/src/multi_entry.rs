//! Combinator rule builder
//!
//! Builds a [`Combinator`] from an `{operator: [rule, ...]}` document by
//! parsing each sub-rule in order. Construction is all-or-nothing: the first
//! rejected sub-rule rejects the whole combinator.

use crate::document::{Object, RuleDocument};
use crate::error::{ParseError, Result};
use crate::rule_parser::RuleParser;
use advrule_core::{Combinator, Operator};

/// Builder for multi-entry (combinator) rules
pub struct MultiEntryBuilder;

impl MultiEntryBuilder {
    /// Build a combinator from a multi-entry rule document found at `depth`
    pub fn build(parser: &RuleParser, document: &Object, depth: usize) -> Result<Combinator> {
        let (token, body) = RuleDocument::primary_entry(document, parser.config())?;
        let operator = Operator::resolve(token);

        // Anything other than a list reads as no rules
        let subrules = body.as_array().map(Vec::as_slice).unwrap_or_default();

        let mut children = Vec::with_capacity(subrules.len());
        for (index, subrule) in subrules.iter().enumerate() {
            let child = RuleDocument::as_object(subrule)
                .and_then(|object| parser.parse_at(object, depth + 1))
                .map_err(|e| ParseError::InvalidSubrule {
                    operator,
                    index,
                    source: Box::new(e),
                })?;
            children.push(child);
        }

        if children.is_empty() {
            return Err(ParseError::EmptyRuleList(operator));
        }

        Ok(Combinator::new(operator, children)?)
    }
}
