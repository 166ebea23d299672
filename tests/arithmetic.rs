//! Integration tests for the arithmetic grammar
//!
//! The expected renderings below are the reference output for the sample expression; they are
//! compared byte for byte, so any change to the trace labels or the tree drawing shows here.

use rd_parse::rd::grammars::arithmetic::{self, expr};
use rd_parse::rd::testing::{assert_trace, assert_tree};
use rd_parse::rd::{parse, Builder, ParseError};

const EXPECTED_TRACE: &str = "\
Expr(true)
├─ Term(true)
│  ├─ Factor(true)
│  │  ├─ 2.8 ≠ (
│  │  ├─ 2.8 ≠ -
│  │  └─ Number(true)
│  └─ Term'(true)
│     ├─ + ≠ *
│     └─ + ≠ /
└─ Expr'(true)
   ├─ + = +
   └─ Expr(true)
      ├─ Term(true)
      │  ├─ Factor(true)
      │  │  ├─ ( = (
      │  │  ├─ Expr(true)
      │  │  │  ├─ Term(true)
      │  │  │  │  ├─ Factor(true)
      │  │  │  │  │  ├─ 3 ≠ (
      │  │  │  │  │  ├─ 3 ≠ -
      │  │  │  │  │  └─ Number(true)
      │  │  │  │  └─ Term'(true)
      │  │  │  │     ├─ - ≠ *
      │  │  │  │     └─ - ≠ /
      │  │  │  └─ Expr'(true)
      │  │  │     ├─ - ≠ +
      │  │  │     ├─ - = -
      │  │  │     └─ Expr(true)
      │  │  │        ├─ Term(true)
      │  │  │        │  ├─ Factor(true)
      │  │  │        │  │  ├─ .733 ≠ (
      │  │  │        │  │  ├─ .733 ≠ -
      │  │  │        │  │  └─ Number(true)
      │  │  │        │  └─ Term'(true)
      │  │  │        │     ├─ ) ≠ *
      │  │  │        │     └─ ) ≠ /
      │  │  │        └─ Expr'(true)
      │  │  │           ├─ ) ≠ +
      │  │  │           └─ ) ≠ -
      │  │  └─ ) = )
      │  └─ Term'(true)
      │     ├─ / ≠ *
      │     ├─ / = /
      │     └─ Term(true)
      │        ├─ Factor(true)
      │        │  ├─ 23 ≠ (
      │        │  ├─ 23 ≠ -
      │        │  └─ Number(true)
      │        └─ Term'(true)
      │           ├─ <no tokens left> ≠ *
      │           └─ <no tokens left> ≠ /
      └─ Expr'(true)
         ├─ <no tokens left> ≠ +
         └─ <no tokens left> ≠ -
";

const EXPECTED_TREE: &str = "\
Expr
├─ Term
│  └─ Factor
│     └─ Number
│        └─ 2.8
└─ Expr'
   ├─ +
   └─ Expr
      └─ Term
         ├─ Factor
         │  ├─ (
         │  ├─ Expr
         │  │  ├─ Term
         │  │  │  └─ Factor
         │  │  │     └─ Number
         │  │  │        └─ 3
         │  │  └─ Expr'
         │  │     ├─ -
         │  │     └─ Expr
         │  │        └─ Term
         │  │           └─ Factor
         │  │              └─ Number
         │  │                 └─ .733
         │  └─ )
         └─ Term'
            ├─ /
            └─ Term
               └─ Factor
                  └─ Number
                     └─ 23
";

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

fn sample_tokens() -> Vec<String> {
    tokens(&["2.8", "+", "(", "3", "-", ".733", ")", "/", "23"])
}

#[test]
fn test_sample_expression_trace_tree() {
    let output = arithmetic::parse(sample_tokens());
    assert_eq!(output.error, None);
    assert_eq!(output.trace.unwrap().to_string(), EXPECTED_TRACE);
}

#[test]
fn test_sample_expression_parse_tree() {
    let output = arithmetic::parse(sample_tokens());
    assert_eq!(output.tree.unwrap().to_string(), EXPECTED_TREE);
}

#[test]
fn test_sample_expression_from_source() {
    let lexed = arithmetic::lex("2.8 + (3 - .733) / 23").unwrap();
    assert_eq!(lexed, sample_tokens());
    let tree = arithmetic::parse(lexed).into_result().unwrap();
    assert_eq!(tree.to_string(), EXPECTED_TREE);
}

#[test]
fn test_parenthesized_group_structure() {
    let tree = arithmetic::parse(sample_tokens()).into_result().unwrap();

    assert_tree(&tree)
        .name("Expr")
        .leaves(&["2.8", "+", "(", "3", "-", ".733", ")", "/", "23"])
        .child(1, |expr_prime| {
            expr_prime.name("Expr'").child(0, |plus| {
                plus.token("+");
            });
        });

    // Expr > Expr' > Expr > Term > Factor > Expr: the group "3 - .733"
    let group = &tree.children[1].children[1].children[0].children[0].children[1];
    assert_tree(group)
        .name("Expr")
        .leaves(&["3", "-", ".733"])
        .child(1, |rest| {
            rest.name("Expr'").child(0, |minus| {
                minus.token("-");
            });
        });
}

#[test]
fn test_builder_is_consumed_completely() {
    let mut b = Builder::new(sample_tokens());
    assert!(expr(&mut b));
    assert_eq!(b.remaining(), 0);
    assert_eq!(b.position(), 9);
    assert_eq!(b.depth(), 0);
    assert!(b.err().is_none());
}

#[test]
fn test_empty_input_fails_at_root() {
    let output = arithmetic::parse(Vec::new());
    assert_eq!(output.error, Some(ParseError::ParsingFailed));
    assert!(output.tree.is_none());

    let trace = output.trace.unwrap();
    assert!(trace.label.ends_with("(false)"));
    assert_trace(&trace)
        .label("Expr(false)")
        .contains("<no tokens left> ≠ (")
        .all_closed();
}

#[test]
fn test_trailing_tokens_are_reported_separately() {
    let output = arithmetic::parse(tokens(&["(", "1", "+", "2", ")", ")"]));
    assert_eq!(output.error, Some(ParseError::TokensLeft));
    assert!(output.tree.is_none());
    assert_eq!(output.trace.unwrap().label, "Expr(true)");

    let output = arithmetic::parse(tokens(&["1", "+"]));
    assert_eq!(output.error, Some(ParseError::ParsingFailed));
}

#[test]
fn test_parsing_is_deterministic() {
    let first = arithmetic::parse(sample_tokens());
    let second = arithmetic::parse(sample_tokens());
    assert_eq!(first, second);
    assert_eq!(
        first.trace.unwrap().to_string(),
        second.trace.unwrap().to_string()
    );
}

#[test]
fn test_parse_entry_point_matches_builder() {
    let output = parse(sample_tokens(), expr);
    assert_eq!(output, arithmetic::parse(sample_tokens()));
}
