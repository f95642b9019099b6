#[macro_use]
extern crate log;

pub mod parser;
pub mod reader;
pub mod records;

pub use parser::{parse, Node, Operator, ParseError, ParseResult, Parser, Reference};
