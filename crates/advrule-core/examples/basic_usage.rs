//! Basic usage example for advrule-core
//!
//! Run with: cargo run --example basic_usage

use advrule_core::{LeafValue, Operator, RuleNode};

fn main() -> Result<(), advrule_core::CoreError> {
    println!("=== advrule Core Basic Usage Example ===\n");

    // Example 1: Resolving operator tokens
    println!("1. Resolving Tokens:");
    for token in ["gte", "I_CONTAINS", "is_any", "between"] {
        let op = Operator::resolve(token);
        println!("   {:<12} -> {:?} ({:?})", token, op, op.category());
    }
    println!();

    // Example 2: Building a leaf (age >= 18)
    println!("2. Building Leaf (age >= 18):");
    let adult = RuleNode::leaf(Operator::GreaterThanOrEqual, "age", LeafValue::Number(18.0))?;
    println!("   {:#?}\n", adult);

    // Example 3: Building a combinator
    println!("3. Building Combinator (adult AND country in [US, CA]):");
    let rule = RuleNode::combinator(
        Operator::And,
        vec![
            adult,
            RuleNode::leaf(
                Operator::IsAny,
                "country",
                LeafValue::TextSet(vec!["US".to_string(), "CA".to_string()]),
            )?,
        ],
    )?;
    println!("   depth = {}, leaves = {}", rule.depth(), rule.leaf_count());
    println!("   document = {}\n", rule.to_json());

    // Example 4: Invariants are enforced at construction
    println!("4. Rejected Constructions:");
    if let Err(e) = RuleNode::combinator(Operator::Or, vec![]) {
        println!("   {}", e);
    }
    if let Err(e) = RuleNode::leaf(Operator::LessThan, "price", LeafValue::Text("10".to_string())) {
        println!("   {}", e);
    }

    Ok(())
}
