//! Leaf rule builder
//!
//! Builds a [`Leaf`] from a `{field_key: {operator: value}}` document. The
//! operator's category picks the one extraction path that runs, so a leaf
//! only ever carries the value kind its operator expects.

use crate::config::ParserConfig;
use crate::document::{Object, RuleDocument};
use crate::error::{ParseError, Result};
use advrule_core::{Leaf, LeafValue, Operator, OperatorCategory};
use serde_json::Value;

/// Builder for single-entry (leaf) rules
pub struct SingleEntryBuilder;

impl SingleEntryBuilder {
    /// Build a leaf from a single-entry rule document
    pub fn build(document: &Object, config: &ParserConfig) -> Result<Leaf> {
        let (field_key, body) = RuleDocument::primary_entry(document, config)?;

        let condition = body.as_object().ok_or_else(|| ParseError::MissingCondition {
            field: field_key.to_string(),
        })?;
        let (token, raw_value) = match RuleDocument::primary_entry(condition, config) {
            Ok(entry) => entry,
            Err(ParseError::EmptyDocument) => {
                return Err(ParseError::MissingCondition {
                    field: field_key.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        let operator = Operator::resolve(token);
        let value = match operator.category() {
            OperatorCategory::LeafText => Self::text(field_key, operator, raw_value)?,
            OperatorCategory::LeafNumeric => Self::number(field_key, operator, raw_value)?,
            OperatorCategory::LeafTextSet => Self::text_set(field_key, operator, raw_value)?,
            OperatorCategory::Combinator | OperatorCategory::Invalid => {
                return Err(ParseError::InvalidOperator {
                    field: field_key.to_string(),
                    token: token.to_string(),
                });
            }
        };

        Ok(Leaf::new(operator, field_key, value)?)
    }

    fn text(field: &str, operator: Operator, value: &Value) -> Result<LeafValue> {
        match value {
            Value::String(s) => Ok(LeafValue::Text(s.clone())),
            other => Err(Self::mismatch(field, operator, other)),
        }
    }

    fn number(field: &str, operator: Operator, value: &Value) -> Result<LeafValue> {
        value
            .as_f64()
            .map(LeafValue::Number)
            .ok_or_else(|| Self::mismatch(field, operator, value))
    }

    fn text_set(field: &str, operator: Operator, value: &Value) -> Result<LeafValue> {
        let items = value
            .as_array()
            .ok_or_else(|| Self::mismatch(field, operator, value))?;

        if items.is_empty() {
            return Err(ParseError::EmptyValueSet {
                field: field.to_string(),
                operator,
            });
        }

        let mut set = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => set.push(s.clone()),
                other => return Err(Self::mismatch(field, operator, other)),
            }
        }

        Ok(LeafValue::TextSet(set))
    }

    fn mismatch(field: &str, operator: Operator, actual: &Value) -> ParseError {
        ParseError::TypeMismatch {
            field: field.to_string(),
            operator,
            expected: operator.category().describe(),
            actual: RuleDocument::kind(actual),
        }
    }
}
