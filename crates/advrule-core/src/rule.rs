//! Rule tree
//!
//! A [`RuleNode`] is either a [`Combinator`] joining child rules with `and`,
//! `or` or `not`, or a [`Leaf`] comparing one event field against a
//! condition value. Both are only constructible through checked constructors,
//! so a tree that exists always satisfies:
//! - combinators have at least one child
//! - a leaf's value kind agrees with its operator's category
//! - text sets are non-empty
//! - numbers are finite

use crate::error::{CoreError, Result};
use crate::operator::{Operator, OperatorCategory};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A node of a parsed advertiser rule
#[derive(Debug, Clone, PartialEq)]
pub enum RuleNode {
    /// Boolean connective over child rules
    Combinator(Combinator),
    /// Terminal predicate on one event field
    Leaf(Leaf),
}

/// `and` / `or` / `not` over an ordered, non-empty list of rules
#[derive(Debug, Clone, PartialEq)]
pub struct Combinator {
    operator: Operator,
    children: Vec<RuleNode>,
}

/// Condition on a single event field
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    operator: Operator,
    field_key: String,
    value: LeafValue,
}

/// Condition operand of a leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeafValue {
    /// Operand of text operators
    Text(String),
    /// Operand of numeric comparisons
    Number(f64),
    /// Operand of set membership operators
    TextSet(Vec<String>),
}

impl Combinator {
    /// Create a combinator, rejecting non-combinator operators and empty child lists
    pub fn new(operator: Operator, children: Vec<RuleNode>) -> Result<Self> {
        if !operator.is_combinator() {
            return Err(CoreError::NotACombinator(operator));
        }
        if children.is_empty() {
            return Err(CoreError::EmptyCombinator(operator));
        }
        Ok(Self { operator, children })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Child rules in document order
    pub fn children(&self) -> &[RuleNode] {
        &self.children
    }
}

impl Leaf {
    /// Create a leaf, checking that `value` has the kind `operator` expects
    pub fn new(operator: Operator, field_key: impl Into<String>, value: LeafValue) -> Result<Self> {
        let expected = operator.category();
        match expected {
            OperatorCategory::Combinator | OperatorCategory::Invalid => {
                return Err(CoreError::NotALeaf(operator));
            }
            _ if expected != value.category() => {
                return Err(CoreError::category_mismatch(
                    operator,
                    expected,
                    value.category(),
                ));
            }
            _ => {}
        }

        match &value {
            LeafValue::TextSet(items) if items.is_empty() => {
                return Err(CoreError::EmptyValueSet(operator));
            }
            LeafValue::Number(n) if !n.is_finite() => {
                return Err(CoreError::NonFiniteNumber(operator));
            }
            _ => {}
        }

        Ok(Self {
            operator,
            field_key: field_key.into(),
            value,
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Name of the event field the condition applies to
    pub fn field_key(&self) -> &str {
        &self.field_key
    }

    pub fn value(&self) -> &LeafValue {
        &self.value
    }
}

impl LeafValue {
    /// The operator category this value kind belongs to
    pub fn category(&self) -> OperatorCategory {
        match self {
            LeafValue::Text(_) => OperatorCategory::LeafText,
            LeafValue::Number(_) => OperatorCategory::LeafNumeric,
            LeafValue::TextSet(_) => OperatorCategory::LeafTextSet,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            LeafValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            LeafValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text_set(&self) -> Option<&[String]> {
        match self {
            LeafValue::TextSet(items) => Some(items),
            _ => None,
        }
    }
}

impl RuleNode {
    /// Build a combinator node
    pub fn combinator(operator: Operator, children: Vec<RuleNode>) -> Result<Self> {
        Combinator::new(operator, children).map(RuleNode::Combinator)
    }

    /// Build a leaf node
    pub fn leaf(operator: Operator, field_key: impl Into<String>, value: LeafValue) -> Result<Self> {
        Leaf::new(operator, field_key, value).map(RuleNode::Leaf)
    }

    pub fn operator(&self) -> Operator {
        match self {
            RuleNode::Combinator(c) => c.operator(),
            RuleNode::Leaf(l) => l.operator(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, RuleNode::Leaf(_))
    }

    /// Child rules; empty for leaves
    pub fn children(&self) -> &[RuleNode] {
        match self {
            RuleNode::Combinator(c) => c.children(),
            RuleNode::Leaf(_) => &[],
        }
    }

    /// Field key of a leaf
    pub fn field_key(&self) -> Option<&str> {
        match self {
            RuleNode::Leaf(l) => Some(l.field_key()),
            RuleNode::Combinator(_) => None,
        }
    }

    /// Condition value of a leaf
    pub fn value(&self) -> Option<&LeafValue> {
        match self {
            RuleNode::Leaf(l) => Some(l.value()),
            RuleNode::Combinator(_) => None,
        }
    }

    /// Number of document levels in this tree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(RuleNode::depth).max().unwrap_or(0)
    }

    /// Number of leaf conditions in this tree
    pub fn leaf_count(&self) -> usize {
        match self {
            RuleNode::Leaf(_) => 1,
            RuleNode::Combinator(c) => c.children.iter().map(RuleNode::leaf_count).sum(),
        }
    }

    /// Field keys referenced by the tree, in depth-first order, without duplicates
    pub fn field_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_field_keys(&mut keys);
        keys
    }

    fn collect_field_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            RuleNode::Leaf(l) => {
                if !keys.contains(&l.field_key.as_str()) {
                    keys.push(&l.field_key);
                }
            }
            RuleNode::Combinator(c) => {
                for child in &c.children {
                    child.collect_field_keys(keys);
                }
            }
        }
    }

    /// Render the tree back into its rule document shape
    pub fn to_json(&self) -> serde_json::Value {
        // Keys are strings and numbers are finite, so conversion cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for RuleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RuleNode::Combinator(c) => c.serialize(serializer),
            RuleNode::Leaf(l) => l.serialize(serializer),
        }
    }
}

impl Serialize for Combinator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.operator.as_str(), &self.children)?;
        map.end()
    }
}

/// `{operator: value}` body of a leaf document
struct Condition<'a>(&'a Leaf);

impl Serialize for Condition<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.operator.as_str(), &self.0.value)?;
        map.end()
    }
}

impl Serialize for Leaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field_key, &Condition(self))?;
        map.end()
    }
}
