//! Error types for advrule core

use crate::operator::{Operator, OperatorCategory};
use thiserror::Error;

/// Rule tree construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Combinator '{0}' has no children")]
    EmptyCombinator(Operator),

    #[error("Operator '{0}' cannot combine rules")]
    NotACombinator(Operator),

    #[error("Operator '{0}' cannot be used in a leaf condition")]
    NotALeaf(Operator),

    #[error("Operator '{operator}' expects a {expected} value, got a {actual} value")]
    CategoryMismatch {
        operator: Operator,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Operator '{0}' has an empty value set")]
    EmptyValueSet(Operator),

    #[error("Operator '{0}' has a non-finite number value")]
    NonFiniteNumber(Operator),
}

impl CoreError {
    pub(crate) fn category_mismatch(
        operator: Operator,
        expected: OperatorCategory,
        actual: OperatorCategory,
    ) -> Self {
        CoreError::CategoryMismatch {
            operator,
            expected: expected.describe(),
            actual: actual.describe(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
