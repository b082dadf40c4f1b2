//! advrule parser - JSON rule documents to advertiser rule trees
//!
//! This crate validates untrusted rule documents such as
//! `{"and": [{"title": {"contains": "sale"}}, {"price": {"gt": 10}}]}` and
//! builds the strongly-typed `RuleNode` trees defined in `advrule-core`.

pub mod config;
pub mod document;
pub mod error;
pub mod multi_entry;
pub mod provider;
pub mod rule_parser;
pub mod single_entry;

// Re-export main parser types
pub use config::ParserConfig;
pub use document::RuleDocument;
pub use error::{ParseError, Result};
pub use multi_entry::MultiEntryBuilder;
pub use provider::RuleProvider;
pub use rule_parser::RuleParser;
pub use single_entry::SingleEntryBuilder;
