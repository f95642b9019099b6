use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const HC_PREFIX: &str = "HC:";
pub const RULE_PREFIX: &str = "Rule:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    Not,
    Xor,
    And,
    Or,
}

impl Operator {
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::Xor => "XOR",
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }

    /// Substring the expression text is split on for this operator.
    /// Binary operators need a space on both sides, `NOT` only a trailing one.
    pub fn separator(&self) -> &'static str {
        match self {
            Operator::Not => "NOT ",
            Operator::Xor => " XOR ",
            Operator::And => " AND ",
            Operator::Or => " OR ",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Identifier of an externally defined entity. Never resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    HealthCheck { healthcheck_id: String },
    Rule { rule_id: String },
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::HealthCheck { healthcheck_id } => healthcheck_id,
            Reference::Rule { rule_id } => rule_id,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::HealthCheck { healthcheck_id } => write!(f, "{}{}", HC_PREFIX, healthcheck_id),
            Reference::Rule { rule_id } => write!(f, "{}{}", RULE_PREFIX, rule_id),
        }
    }
}

/// Parsed logic expression.
///
/// Serializes to the interchange form: operators as
/// `{"operator": "AND", "operands": [...]}`, references as
/// `{"healthcheck_id": ".."}` / `{"rule_id": ".."}` and literals as bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Operator {
        operator: Operator,
        operands: Vec<Node>,
    },
    Reference(Reference),
    Literal(String),
}

impl Node {
    pub fn op(operator: Operator, operands: Vec<Node>) -> Self {
        Node::Operator { operator, operands }
    }

    pub fn not(operand: Node) -> Self {
        Node::op(Operator::Not, vec![operand])
    }

    pub fn literal<S: ToString>(value: S) -> Self {
        Node::Literal(value.to_string())
    }

    pub fn healthcheck<S: ToString>(id: S) -> Self {
        Node::Reference(Reference::HealthCheck {
            healthcheck_id: id.to_string(),
        })
    }

    pub fn rule<S: ToString>(id: S) -> Self {
        Node::Reference(Reference::Rule {
            rule_id: id.to_string(),
        })
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Operator { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    pub fn operands(&self) -> &[Node] {
        match self {
            Node::Operator { operands, .. } => operands,
            _ => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Operator { .. })
    }

    /// All reference leaves, depth-first and left to right.
    pub fn references(&self) -> Vec<&Reference> {
        let mut found = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Reference(reference) => found.push(reference),
                Node::Operator { operands, .. } => stack.extend(operands.iter().rev()),
                Node::Literal(_) => {}
            }
        }

        found
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{}", value),
            Node::Reference(reference) => write!(f, "{}", reference),
            Node::Operator { operator, operands } => {
                if *operator == Operator::Not {
                    write!(f, "{} ", operator)?;
                }

                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", operator)?;
                    }

                    if operand.is_leaf() {
                        write!(f, "{}", operand)?;
                    } else {
                        write!(f, "({})", operand)?;
                    }
                }

                Ok(())
            }
        }
    }
}

/// Errors abort the whole parse; no partial tree is returned.
/// The reported text always shows groups in their original parenthesized form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("more than one NOT in operand `{text}`")]
    MalformedNot { text: String },

    #[error("NOT must prefix its operand, found it inside `{text}`")]
    MisplacedNot { text: String },

    #[error("unbalanced parentheses in `{text}`")]
    UnbalancedParentheses { text: String },

    #[error("empty parenthesized group `{text}`")]
    EmptyGroup { text: String },

    #[error("parenthesized group must stand alone as an operand, found `{text}`")]
    DetachedGroup { text: String },

    #[error("expression contains the reserved character U+001A: `{text}`")]
    ReservedCharacter { text: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
