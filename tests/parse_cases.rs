//! Table-driven parsing cases, checked against the JSON interchange form.

use logic_expr::{parse, ParseError, Parser};
use rstest::rstest;
use serde_json::{json, Value};

fn parse_json(text: &str) -> Value {
    serde_json::to_value(parse(text).unwrap()).unwrap()
}

#[rstest]
#[case("1", json!("1"))]
#[case("HC:1", json!({"healthcheck_id": "1"}))]
#[case("Rule:42", json!({"rule_id": "42"}))]
#[case("NOT 1", json!({"operator": "NOT", "operands": ["1"]}))]
#[case("1 OR 2", json!({"operator": "OR", "operands": ["1", "2"]}))]
#[case("1 AND 2", json!({"operator": "AND", "operands": ["1", "2"]}))]
#[case("1 XOR 2", json!({"operator": "XOR", "operands": ["1", "2"]}))]
#[case(
    "1 OR 2 AND NOT 3 XOR 4",
    json!({"operator": "OR", "operands": [
        "1",
        {"operator": "AND", "operands": [
            "2",
            {"operator": "XOR", "operands": [{"operator": "NOT", "operands": ["3"]}, "4"]}
        ]}
    ]})
)]
#[case(
    "(1 OR 2) AND NOT 3 XOR 4",
    json!({"operator": "AND", "operands": [
        {"operator": "OR", "operands": ["1", "2"]},
        {"operator": "XOR", "operands": [{"operator": "NOT", "operands": ["3"]}, "4"]}
    ]})
)]
#[case(
    "1 AND 2 XOR 3 AND 4",
    json!({"operator": "AND", "operands": [
        "1",
        {"operator": "XOR", "operands": ["2", "3"]},
        "4"
    ]})
)]
#[case(
    "NOT (HC:a OR Rule:b)",
    json!({"operator": "NOT", "operands": [
        {"operator": "OR", "operands": [{"healthcheck_id": "a"}, {"rule_id": "b"}]}
    ]})
)]
#[case("two words", json!("two words"))]
#[case("HC:", json!({"healthcheck_id": ""}))]
fn parses_to(#[case] text: &str, #[case] expected: Value) {
    assert_eq!(parse_json(text), expected);
}

#[rstest]
#[case("1 NOT 2", ParseError::MisplacedNot { text: "1 NOT 2".to_string() })]
#[case("CANNOT 2", ParseError::MisplacedNot { text: "CANNOT 2".to_string() })]
#[case("1 NOT 2 NOT 3", ParseError::MalformedNot { text: "1 NOT 2 NOT 3".to_string() })]
#[case("a OR (b", ParseError::UnbalancedParentheses { text: "a OR (b".to_string() })]
#[case("a OR b)", ParseError::UnbalancedParentheses { text: "a OR b)".to_string() })]
#[case("a AND ()", ParseError::EmptyGroup { text: "()".to_string() })]
#[case("(a)b", ParseError::DetachedGroup { text: "(a)b".to_string() })]
#[case("a\u{1A}", ParseError::ReservedCharacter { text: "a\u{1A}".to_string() })]
fn fails_with(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(parse(text), Err(expected));
}

#[test]
fn shared_parser_across_threads() {
    let parser = Parser::new();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = &parser;
                s.spawn(move || parser.parse(&format!("(HC:{} OR x) AND (y)", i)))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let node = handle.join().unwrap().unwrap();
            assert_eq!(
                serde_json::to_value(&node).unwrap(),
                json!({"operator": "AND", "operands": [
                    {"operator": "OR", "operands": [{"healthcheck_id": i.to_string()}, "x"]},
                    "y"
                ]})
            );
        }
    });
}
