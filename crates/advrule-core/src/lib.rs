//! advrule core - rule tree types for advertiser event-matching rules
//!
//! This crate provides the strongly-typed side of a rule:
//! - The operator catalog and its classification into operand categories
//! - The immutable `RuleNode` tree handed to the matching engine
//! - Error types for tree construction

pub mod error;
pub mod operator;
pub mod rule;

// Re-export commonly used types
pub use error::CoreError;
pub use operator::{Operator, OperatorCategory};
pub use rule::{Combinator, Leaf, LeafValue, RuleNode};
