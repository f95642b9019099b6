//! Property-based tests for the logic expression parser.

use logic_expr::{parse, Node, Operator, Parser};
use proptest::prelude::*;

/// Operand text free of keywords, brackets and prefixes.
fn plain_operand() -> impl Strategy<Value = String> {
    "[a-z0-9_.]{1,8}"
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_operand(),
        plain_operand().prop_map(|id| format!("HC:{}", id)),
        plain_operand().prop_map(|id| format!("Rule:{}", id)),
    ]
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::Or), Just(Operator::And), Just(Operator::Xor)]
}

fn tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        plain_operand().prop_map(Node::Literal),
        plain_operand().prop_map(Node::healthcheck),
        plain_operand().prop_map(Node::rule),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Node::not),
            (operator(), prop::collection::vec(inner, 2..4))
                .prop_map(|(operator, operands)| Node::op(operator, operands)),
        ]
    })
}

proptest! {
    #[test]
    fn lone_operand_passes_through(text in operand(), pad in " {0,3}") {
        let node = parse(&format!("{}{}{}", pad, text, pad)).unwrap();
        prop_assert!(node.is_leaf());

        let expected = if let Some(id) = text.strip_prefix("HC:") {
            Node::healthcheck(id)
        } else if let Some(id) = text.strip_prefix("Rule:") {
            Node::rule(id)
        } else {
            Node::literal(&text)
        };
        prop_assert_eq!(node, expected);
    }

    #[test]
    fn chains_are_flat(op in operator(), operands in prop::collection::vec(operand(), 2..8)) {
        let text = operands.join(op.separator());
        let node = parse(&text).unwrap();

        prop_assert_eq!(node.operator(), Some(op));
        prop_assert_eq!(node.operands().len(), operands.len());
        prop_assert!(node.operands().iter().all(Node::is_leaf));
    }

    #[test]
    fn identical_groups_resolve_equal(group in tree(), other in operand()) {
        let text = format!("({}) AND {} AND ({})", group, other, group);
        let node = parse(&text).unwrap();

        prop_assert_eq!(node.operator(), Some(Operator::And));
        prop_assert_eq!(&node.operands()[0], &node.operands()[2]);
    }

    #[test]
    fn sequential_calls_do_not_share_state(first in tree(), second in tree()) {
        let parser = Parser::new();
        let fresh = parser.parse(&second.to_string()).unwrap();

        parser.parse(&first.to_string()).unwrap();
        prop_assert_eq!(parser.parse(&second.to_string()).unwrap(), fresh);
    }

    #[test]
    fn display_reparses(node in tree()) {
        prop_assert_eq!(parse(&node.to_string()).unwrap(), node);
    }
}
