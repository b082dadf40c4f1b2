//! Unit tests for the advertiser rule parser
//!
//! Tests rule documents end to end: text decoding, dispatch between
//! combinators and leaves, value type checking and atomic failure.

use advrule_core::{LeafValue, Operator, RuleNode};
use advrule_parser::*;
use serde_json::json;

fn parse(json_str: &str) -> Option<RuleNode> {
    RuleParser::new().parse_text(json_str)
}

fn text(op: Operator, field: &str, value: &str) -> RuleNode {
    RuleNode::leaf(op, field, LeafValue::Text(value.to_string())).unwrap()
}

fn number(op: Operator, field: &str, value: f64) -> RuleNode {
    RuleNode::leaf(op, field, LeafValue::Number(value)).unwrap()
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_empty_and_non_object_input() {
    for input in ["{}", "[]", "null", "\"and\"", "true", "12", "", "   "] {
        assert!(parse(input).is_none(), "accepted {:?}", input);
    }
}

#[test]
fn test_missing_condition_keys() {
    assert!(parse(r#"{"title": {}}"#).is_none());
    assert!(parse(r#"{"title": null}"#).is_none());
    assert!(parse(r#"{"title": ["contains", "sale"]}"#).is_none());
}

// =============================================================================
// Leaf Rule Tests
// =============================================================================

#[test]
fn test_numeric_leaf() {
    assert_eq!(
        parse(r#"{"age":{"gte":18}}"#),
        Some(number(Operator::GreaterThanOrEqual, "age", 18.0))
    );
}

#[test]
fn test_text_set_leaf() {
    assert_eq!(
        parse(r#"{"country":{"is_any":["US","CA"]}}"#),
        Some(
            RuleNode::leaf(
                Operator::IsAny,
                "country",
                LeafValue::TextSet(vec!["US".to_string(), "CA".to_string()])
            )
            .unwrap()
        )
    );
    assert!(parse(r#"{"country":{"is_any":[]}}"#).is_none());
}

#[test]
fn test_every_text_operator() {
    let tokens = [
        ("contains", Operator::Contains),
        ("not_contains", Operator::NotContains),
        ("starts_with", Operator::StartsWith),
        ("i_contains", Operator::CaseInsensitiveContains),
        ("i_not_contains", Operator::CaseInsensitiveNotContains),
        ("i_starts_with", Operator::CaseInsensitiveStartsWith),
        ("regex_match", Operator::RegexMatch),
        ("eq", Operator::Equal),
        ("neq", Operator::NotEqual),
    ];

    for (token, op) in tokens {
        let rule = RuleParser::new().parse(&json!({"content_name": {token: "shoe"}}));
        assert_eq!(rule, Some(text(op, "content_name", "shoe")), "token {}", token);
    }
}

#[test]
fn test_operator_tokens_are_case_insensitive() {
    let lower = parse(r#"{"currency":{"eq":"USD"}}"#);
    let upper = parse(r#"{"currency":{"EQ":"USD"}}"#);
    assert!(lower.is_some());
    assert_eq!(lower, upper);
}

#[test]
fn test_field_key_keeps_its_case() {
    let rule = parse(r#"{"Content_Type":{"eq":"product"}}"#).unwrap();
    assert_eq!(rule.field_key(), Some("Content_Type"));
}

#[test]
fn test_wrong_value_kind_is_rejected() {
    assert!(parse(r#"{"title":{"contains":5}}"#).is_none());
    assert!(parse(r#"{"price":{"lt":"5"}}"#).is_none());
    assert!(parse(r#"{"price":{"lt":null}}"#).is_none());
    assert!(parse(r#"{"country":{"is_any":"US"}}"#).is_none());
    assert!(parse(r#"{"country":{"is_any":["US",null]}}"#).is_none());
}

// =============================================================================
// Combinator Rule Tests
// =============================================================================

#[test]
fn test_and_combinator() {
    assert_eq!(
        parse(r#"{"and":[{"title":{"contains":"sale"}},{"price":{"gt":10}}]}"#),
        Some(
            RuleNode::combinator(
                Operator::And,
                vec![
                    text(Operator::Contains, "title", "sale"),
                    number(Operator::GreaterThan, "price", 10.0),
                ]
            )
            .unwrap()
        )
    );
}

#[test]
fn test_n_valid_subrules_give_n_children() {
    for n in 1..6 {
        let subrules: Vec<_> = (0..n)
            .map(|i| json!({ format!("field_{}", i): {"eq": i.to_string()} }))
            .collect();
        let rule = RuleParser::new().parse(&json!({"or": subrules})).unwrap();

        assert_eq!(rule.children().len(), n);
        for (i, child) in rule.children().iter().enumerate() {
            assert_eq!(child.field_key(), Some(format!("field_{}", i).as_str()));
        }
    }
}

#[test]
fn test_one_invalid_subrule_rejects_all() {
    let valid = json!({"title": {"contains": "sale"}});
    let invalid = json!({"title": {"contains": 1}});

    for position in 0..4 {
        let mut subrules = vec![valid.clone(); 3];
        subrules.insert(position, invalid.clone());
        let rule = RuleParser::new().parse(&json!({"and": subrules}));
        assert!(rule.is_none(), "invalid subrule at {} was accepted", position);
    }
}

#[test]
fn test_unknown_operator_nested_deep() {
    let document = json!({"and": [
        {"title": {"contains": "sale"}},
        {"or": [
            {"price": {"gt": 10}},
            {"not": [{"country": {"is_one_of": ["US"]}}]}
        ]}
    ]});

    let err = RuleParser::new().try_parse(&document).unwrap_err();
    assert!(err.to_string().contains("is_one_of"), "{}", err);
    assert!(RuleParser::new().parse(&document).is_none());
}

#[test]
fn test_empty_combinator_is_rejected() {
    assert!(parse(r#"{"and":[]}"#).is_none());
    assert!(parse(r#"{"or":{}}"#).is_none());
    assert!(parse(r#"{"not":"x"}"#).is_none());
}

#[test]
fn test_not_keeps_every_child() {
    let rule = parse(r#"{"not":[{"a":{"eq":"1"}},{"b":{"eq":"2"}}]}"#).unwrap();
    assert_eq!(rule.operator(), Operator::Not);
    assert_eq!(rule.children().len(), 2);
}

#[test]
fn test_parse_is_deterministic() {
    let input = r#"{"or":[{"value":{"lte":99.5}},{"tags":{"i_is_not_any":["a","b"]}}]}"#;
    let first = parse(input);
    assert!(first.is_some());
    for _ in 0..3 {
        assert_eq!(parse(input), first);
    }
}

// =============================================================================
// Multi-Key Document Tests
// =============================================================================

#[test]
fn test_first_key_wins_by_default() {
    let rule = parse(r#"{"title":{"eq":"a"},"price":{"gt":1}}"#).unwrap();
    assert_eq!(rule, text(Operator::Equal, "title", "a"));

    let rule = parse(r#"{"title":{"eq":"a","gt":1}}"#).unwrap();
    assert_eq!(rule.operator(), Operator::Equal);
}

#[test]
fn test_extra_keys_rejected_when_configured() {
    let parser = RuleParser::with_config(ParserConfig::new().reject_extra_keys(true));
    assert!(parser
        .parse_text(r#"{"title":{"eq":"a"},"price":{"gt":1}}"#)
        .is_none());
    assert!(parser.parse_text(r#"{"title":{"eq":"a","gt":1}}"#).is_none());
    assert!(parser.parse_text(r#"{"title":{"eq":"a"}}"#).is_some());
}

// =============================================================================
// Depth Limit Tests
// =============================================================================

fn nested(levels: usize) -> serde_json::Value {
    let mut document = json!({"title": {"eq": "x"}});
    for _ in 1..levels {
        document = json!({"and": [document]});
    }
    document
}

#[test]
fn test_depth_at_limit_is_accepted() {
    let parser = RuleParser::new();
    let rule = parser.parse(&nested(parser.config().max_depth)).unwrap();
    assert_eq!(rule.depth(), parser.config().max_depth);
}

#[test]
fn test_adversarial_nesting_is_rejected() {
    let parser = RuleParser::new();
    assert!(parser.parse(&nested(parser.config().max_depth + 1)).is_none());

    let deep = "{\"or\":[".repeat(40) + r#"{"a":{"eq":"b"}}"# + &"]}".repeat(40);
    assert!(parser.parse_text(&deep).is_none());

    // Follow the sub-rule chain down to the depth check
    let mut err = parser.try_parse_text(&deep).unwrap_err();
    while let ParseError::InvalidSubrule { source, .. } = err {
        err = *source;
    }
    assert!(
        matches!(err, ParseError::DepthExceeded { max_depth } if max_depth == parser.config().max_depth),
        "{:?}",
        err
    );
}

// =============================================================================
// Round Trip and Error Reporting Tests
// =============================================================================

#[test]
fn test_rendered_rule_parses_back() -> anyhow::Result<()> {
    let input = r#"{"and":[{"title":{"i_contains":"Sale"}},{"or":[{"value":{"gte":18.5}},{"country":{"is_any":["US","CA"]}}]}]}"#;
    let rule = RuleParser::new().try_parse_text(input)?;
    let reparsed = RuleParser::new().try_parse(&rule.to_json())?;
    assert_eq!(rule, reparsed);
    Ok(())
}

#[test]
fn test_error_messages() {
    let parser = RuleParser::new();

    let err = parser.try_parse_text(r#"{"price":{"gt":"10"}}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch for field 'price': 'gt' expects number, got string"
    );

    let err = parser.try_parse_text(r#"{"or":[]}"#).unwrap_err();
    assert_eq!(err.to_string(), "Combinator 'or' has no rules");

    let err = parser
        .try_parse_text(r#"{"and":[{"a":{"eq":"1"}},{"b":{"eq":2}}]}"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("Rule 1 of 'and' is invalid"));
}
