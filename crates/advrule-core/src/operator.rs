//! Operator catalog for advertiser rules
//!
//! Every rule document names its operators with a short token (`"and"`,
//! `"i_contains"`, `"gte"`, ...). Tokens are resolved case-insensitively to an
//! [`Operator`], and each operator is classified into the [`OperatorCategory`]
//! that decides how the rule parser reads its operand.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Rule operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Token did not resolve to any known operator
    Unknown,

    // Combinators
    /// All children must match
    And,
    /// At least one child must match
    Or,
    /// Negation of the children
    Not,

    // Text operators
    /// Substring test
    Contains,
    /// Negated substring test
    NotContains,
    /// Prefix test
    StartsWith,
    /// Case-folded substring test
    CaseInsensitiveContains,
    /// Case-folded negated substring test
    CaseInsensitiveNotContains,
    /// Case-folded prefix test
    CaseInsensitiveStartsWith,
    /// Full-pattern regular expression match
    RegexMatch,
    /// Exact equality
    Equal,
    /// Exact inequality
    NotEqual,

    // Numeric operators
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,

    // Set operators
    /// Case-folded set membership
    CaseInsensitiveIsAny,
    /// Case-folded set non-membership
    CaseInsensitiveIsNotAny,
    /// Set membership
    IsAny,
    /// Set non-membership
    IsNotAny,
}

/// The kind of operand an operator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// Operand is a list of sub-rules
    Combinator,
    /// Operand is a single string
    LeafText,
    /// Operand is a number
    LeafNumeric,
    /// Operand is a non-empty list of strings
    LeafTextSet,
    /// Operator cannot appear in a rule
    Invalid,
}

impl Operator {
    /// Every operator, in catalog order
    pub const ALL: [Operator; 21] = [
        Operator::Unknown,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Contains,
        Operator::NotContains,
        Operator::StartsWith,
        Operator::CaseInsensitiveContains,
        Operator::CaseInsensitiveNotContains,
        Operator::CaseInsensitiveStartsWith,
        Operator::RegexMatch,
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::CaseInsensitiveIsAny,
        Operator::CaseInsensitiveIsNotAny,
        Operator::IsAny,
        Operator::IsNotAny,
    ];

    /// Resolve a rule token to an operator.
    ///
    /// Matching ignores ASCII case. Anything outside the catalog resolves to
    /// [`Operator::Unknown`].
    pub fn resolve(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "and" => Operator::And,
            "or" => Operator::Or,
            "not" => Operator::Not,
            "contains" => Operator::Contains,
            "not_contains" => Operator::NotContains,
            "starts_with" => Operator::StartsWith,
            "i_contains" => Operator::CaseInsensitiveContains,
            "i_not_contains" => Operator::CaseInsensitiveNotContains,
            "i_starts_with" => Operator::CaseInsensitiveStartsWith,
            "regex_match" => Operator::RegexMatch,
            "eq" => Operator::Equal,
            "neq" => Operator::NotEqual,
            "lt" => Operator::LessThan,
            "lte" => Operator::LessThanOrEqual,
            "gt" => Operator::GreaterThan,
            "gte" => Operator::GreaterThanOrEqual,
            "i_is_any" => Operator::CaseInsensitiveIsAny,
            "i_is_not_any" => Operator::CaseInsensitiveIsNotAny,
            "is_any" => Operator::IsAny,
            "is_not_any" => Operator::IsNotAny,
            _ => Operator::Unknown,
        }
    }

    /// Canonical token for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Unknown => "unknown",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "starts_with",
            Operator::CaseInsensitiveContains => "i_contains",
            Operator::CaseInsensitiveNotContains => "i_not_contains",
            Operator::CaseInsensitiveStartsWith => "i_starts_with",
            Operator::RegexMatch => "regex_match",
            Operator::Equal => "eq",
            Operator::NotEqual => "neq",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqual => "lte",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqual => "gte",
            Operator::CaseInsensitiveIsAny => "i_is_any",
            Operator::CaseInsensitiveIsNotAny => "i_is_not_any",
            Operator::IsAny => "is_any",
            Operator::IsNotAny => "is_not_any",
        }
    }

    /// Classify the operand kind this operator expects
    pub fn category(&self) -> OperatorCategory {
        match self {
            Operator::And | Operator::Or | Operator::Not => OperatorCategory::Combinator,
            Operator::Contains
            | Operator::NotContains
            | Operator::StartsWith
            | Operator::CaseInsensitiveContains
            | Operator::CaseInsensitiveNotContains
            | Operator::CaseInsensitiveStartsWith
            | Operator::RegexMatch
            | Operator::Equal
            | Operator::NotEqual => OperatorCategory::LeafText,
            Operator::LessThan
            | Operator::LessThanOrEqual
            | Operator::GreaterThan
            | Operator::GreaterThanOrEqual => OperatorCategory::LeafNumeric,
            Operator::CaseInsensitiveIsAny
            | Operator::CaseInsensitiveIsNotAny
            | Operator::IsAny
            | Operator::IsNotAny => OperatorCategory::LeafTextSet,
            Operator::Unknown => OperatorCategory::Invalid,
        }
    }

    /// Returns true for `and`, `or` and `not`
    pub fn is_combinator(&self) -> bool {
        self.category() == OperatorCategory::Combinator
    }

    /// Returns true for the `i_`-prefixed operators
    pub fn is_case_insensitive(&self) -> bool {
        matches!(
            self,
            Operator::CaseInsensitiveContains
                | Operator::CaseInsensitiveNotContains
                | Operator::CaseInsensitiveStartsWith
                | Operator::CaseInsensitiveIsAny
                | Operator::CaseInsensitiveIsNotAny
        )
    }

    /// Returns true for operators that match when their positive form does not
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            Operator::Not
                | Operator::NotContains
                | Operator::CaseInsensitiveNotContains
                | Operator::NotEqual
                | Operator::CaseInsensitiveIsNotAny
                | Operator::IsNotAny
        )
    }
}

impl OperatorCategory {
    /// Human readable name of the operand kind
    pub fn describe(&self) -> &'static str {
        match self {
            OperatorCategory::Combinator => "list of rules",
            OperatorCategory::LeafText => "string",
            OperatorCategory::LeafNumeric => "number",
            OperatorCategory::LeafTextSet => "non-empty list of strings",
            OperatorCategory::Invalid => "nothing",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Operator::resolve(s))
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Operator::resolve(&token))
    }
}
