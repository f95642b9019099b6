/*
Parenthesized groups are parsed first, innermost outwards, and replaced by arena
placeholders. The remaining flat text is split on OR, AND, XOR and NOT in turn.
*/

pub mod ast;
pub mod expr;
pub mod extract;

pub use ast::{Node, Operator, ParseError, ParseResult, Reference, HC_PREFIX, RULE_PREFIX};
pub use expr::{parse, Parser};
