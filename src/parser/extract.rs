use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

use super::ast::{Node, ParseError, ParseResult};

/// Delimits group placeholders in rewritten text. Rejected in user input,
/// so a placeholder can never be mistaken for an operand.
pub const GROUP_MARKER: char = '\u{1A}';

/// Innermost group: an opening bracket whose content holds no other opening bracket.
static GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^(]+?\)").unwrap());

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x{1A}(\d+)\x{1A}").unwrap());

/// Parsed parenthesized groups of a single parse call.
///
/// Groups are keyed by their raw inner text, so identical groups share one slot
/// and are parsed once.
#[derive(Debug, Default)]
pub struct GroupArena {
    nodes: Vec<Node>,
    raw: Vec<String>,
    by_text: HashMap<String, usize>,
}

impl GroupArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn placeholder(index: usize) -> String {
        format!("{}{}{}", GROUP_MARKER, index, GROUP_MARKER)
    }

    fn lookup(&self, inner: &str) -> Option<usize> {
        self.by_text.get(inner).copied()
    }

    fn insert(&mut self, inner: &str, node: Node) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        self.raw.push(inner.to_string());
        self.by_text.insert(inner.to_string(), index);
        index
    }

    /// Node stored for `key`, which must be exactly one placeholder.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let index = key
            .strip_prefix(GROUP_MARKER)?
            .strip_suffix(GROUP_MARKER)?
            .parse::<usize>()
            .ok()?;

        self.nodes.get(index)
    }

    /// Expands every placeholder in `text` back into its parenthesized source.
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();

        while restored.contains(GROUP_MARKER) {
            let next = PLACEHOLDER_REGEX
                .replace_all(&restored, |caps: &Captures| {
                    match caps[1].parse::<usize>().ok().and_then(|i| self.raw.get(i)) {
                        Some(raw) => format!("({})", raw),
                        None => caps[0].to_string(),
                    }
                })
                .into_owned();

            if next == restored {
                break;
            }
            restored = next;
        }

        restored
    }
}

/// Replaces parenthesized groups, innermost first, with arena placeholders until
/// no brackets remain. `parse_group` turns the bracket-free inner text of one
/// group into a node; it may resolve placeholders already stored in the arena.
pub fn extract<F>(text: &str, arena: &mut GroupArena, mut parse_group: F) -> ParseResult<String>
where
    F: FnMut(&str, &GroupArena) -> ParseResult<Node>,
{
    let mut text = text.to_string();

    while text.contains('(') {
        let group = match GROUP_REGEX.find(&text) {
            Some(m) => m.as_str().to_string(),
            None if text.contains("()") => {
                return Err(ParseError::EmptyGroup {
                    text: "()".to_string(),
                })
            }
            None => {
                return Err(ParseError::UnbalancedParentheses {
                    text: arena.restore(&text),
                })
            }
        };

        // the lazy match only swallows a `)` when it directly follows the `(`
        let inner = &group[1..group.len() - 1];
        if inner.starts_with(')') {
            return Err(ParseError::EmptyGroup {
                text: "()".to_string(),
            });
        }
        if inner.trim().is_empty() {
            return Err(ParseError::EmptyGroup {
                text: arena.restore(&group),
            });
        }

        let index = match arena.lookup(inner) {
            Some(index) => {
                trace!("reusing group {} for {:?}", index, inner);
                index
            }
            None => {
                let node = parse_group(inner, arena)?;
                let index = arena.insert(inner, node);
                debug!("extracted group {}: {:?}", index, arena.restore(inner));
                index
            }
        };

        text = text.replacen(&group, &GroupArena::placeholder(index), 1);
    }

    if text.contains(')') {
        return Err(ParseError::UnbalancedParentheses {
            text: arena.restore(&text),
        });
    }

    Ok(text)
}
