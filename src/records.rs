use crate::parser::Node;
use std::fmt::Display;

/// A successfully parsed expression together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionRecord {
    pub line: usize,
    pub expression: String,
    pub node: Node,
}

impl ExpressionRecord {
    pub fn new<S: ToString>(line: usize, expression: S, node: Node) -> Self {
        Self {
            line,
            expression: expression.to_string(),
            node,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.node)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.node)
    }

    pub fn to_tsv_line(&self) -> serde_json::Result<String> {
        // line expression ir
        Ok(format!("{}\t{}\t{}", self.line, self.expression, self.to_json()?))
    }
}

impl Display for ExpressionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node)
    }
}
