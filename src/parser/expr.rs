use super::ast::{Node, Operator, ParseError, ParseResult, HC_PREFIX, RULE_PREFIX};
use super::extract::{extract, GroupArena, GROUP_MARKER};

type Layer = fn(&Parser, &str, &GroupArena) -> ParseResult<Node>;

/// Parses logic expressions such as `HC:1 OR (Rule:2 AND NOT 3)`.
///
/// Binding from loosest to tightest is `OR`, `AND`, `XOR`, `NOT`. Chains of one
/// operator produce a single n-ary node. The parser only holds configuration;
/// every call works on its own group arena, so one instance can be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Parser {
    healthcheck_prefix: String,
    rule_prefix: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            healthcheck_prefix: HC_PREFIX.to_string(),
            rule_prefix: RULE_PREFIX.to_string(),
        }
    }

    pub fn with_healthcheck_prefix<S: ToString>(mut self, prefix: S) -> Self {
        self.healthcheck_prefix = prefix.to_string();
        self
    }

    pub fn with_rule_prefix<S: ToString>(mut self, prefix: S) -> Self {
        self.rule_prefix = prefix.to_string();
        self
    }

    pub fn parse(&self, text: &str) -> ParseResult<Node> {
        if text.contains(GROUP_MARKER) {
            return Err(ParseError::ReservedCharacter {
                text: text.to_string(),
            });
        }

        let mut arena = GroupArena::new();
        let flat = extract(text, &mut arena, |inner, arena| self.parse_or(inner, arena))?;
        debug!("flattened {:?} with {} group(s)", text, arena.len());

        self.parse_or(&flat, &arena)
    }

    fn parse_or(&self, text: &str, arena: &GroupArena) -> ParseResult<Node> {
        self.parse_layer(text, Operator::Or, arena, Self::parse_and)
    }

    fn parse_and(&self, text: &str, arena: &GroupArena) -> ParseResult<Node> {
        self.parse_layer(text, Operator::And, arena, Self::parse_xor)
    }

    // XOR parts go straight to the leaf, so XOR binds tighter than AND
    fn parse_xor(&self, text: &str, arena: &GroupArena) -> ParseResult<Node> {
        self.parse_layer(text, Operator::Xor, arena, Self::parse_leaf)
    }

    fn parse_layer(
        &self,
        text: &str,
        operator: Operator,
        arena: &GroupArena,
        next: Layer,
    ) -> ParseResult<Node> {
        let parts = split(text, operator.separator());
        if parts.len() == 1 {
            return next(self, parts[0], arena);
        }

        trace!("{} splits {:?} into {} parts", operator, text, parts.len());
        let operands = parts
            .into_iter()
            .map(|part| next(self, part, arena))
            .collect::<ParseResult<Vec<Node>>>()?;

        Ok(Node::op(operator, operands))
    }

    fn parse_leaf(&self, text: &str, arena: &GroupArena) -> ParseResult<Node> {
        match split(text, Operator::Not.separator()).as_slice() {
            [operand] => self.resolve_operand(operand, arena),
            ["", operand] => Ok(Node::not(self.resolve_operand(operand, arena)?)),
            [_, _] => Err(ParseError::MisplacedNot {
                text: arena.restore(text),
            }),
            _ => Err(ParseError::MalformedNot {
                text: arena.restore(text),
            }),
        }
    }

    fn resolve_operand(&self, text: &str, arena: &GroupArena) -> ParseResult<Node> {
        if let Some(node) = arena.get(text) {
            return Ok(node.clone());
        }

        if text.contains(GROUP_MARKER) {
            return Err(ParseError::DetachedGroup {
                text: arena.restore(text),
            });
        }

        if let Some(id) = text.strip_prefix(self.healthcheck_prefix.as_str()) {
            Ok(Node::healthcheck(id))
        } else if let Some(id) = text.strip_prefix(self.rule_prefix.as_str()) {
            Ok(Node::rule(id))
        } else {
            Ok(Node::literal(text))
        }
    }
}

fn split<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    text.split(separator).map(|part| part.trim()).collect()
}

/// Parses `text` with the default `HC:` and `Rule:` prefixes.
pub fn parse(text: &str) -> ParseResult<Node> {
    Parser::new().parse(text)
}
