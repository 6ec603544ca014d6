//! Block parser.
//!
//! Consumes the lexer output with an explicit stack of open blocks and
//! produces a generic [`Document`]: nested key/value blocks plus the
//! decoded directives, in source order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry as MapEntry;

use super::directive::{Directive, parse_directive};
use super::error::SyntaxError;
use super::lexer::{TokenKind, lex};

/// A raw assigned value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub value: String,
    pub line: usize,
}

/// One `name { ... }` block.
///
/// Keys are unique: a repeated key keeps its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Line of the opening brace.
    pub line: usize,
    pub values: BTreeMap<String, Entry>,
    pub children: BTreeMap<String, Block>,
}

impl Block {
    #[must_use]
    pub fn new(line: usize) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    /// Returns the raw value of `key`, if assigned.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|e| e.value.as_str())
    }

    /// Merges `other` into `self`; `other` wins on conflicting keys.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
        for (name, child) in other.children {
            attach(&mut self.children, name, child);
        }
    }
}

/// An assignment found outside any block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelAssignment {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// A line that is neither comment, assignment, block nor directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayLine {
    pub text: String,
    pub line: usize,
}

/// Parser output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Root blocks by name.
    pub sections: BTreeMap<String, Block>,
    /// Directives in source order, regardless of nesting depth.
    pub directives: Vec<Directive>,
    /// Assignments outside any block (lenient mode only).
    pub top_level: Vec<TopLevelAssignment>,
    /// Unclassifiable lines.
    pub stray: Vec<StrayLine>,
}

/// Parser behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject top-level assignments instead of collecting them.
    pub strict: bool,
}

/// Parses `text` leniently.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for unbalanced braces or malformed directives.
pub fn parse(text: &str) -> Result<Document, SyntaxError> {
    parse_with(text, ParseOptions::default())
}

/// Parses `text` with explicit options.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for unbalanced braces, malformed directives,
/// or (in strict mode) an assignment outside any block.
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Document, SyntaxError> {
    let mut doc = Document::default();
    let mut stack: Vec<(String, Block)> = Vec::new();

    for token in lex(text) {
        match token.kind {
            TokenKind::Comment | TokenKind::Blank => {}
            TokenKind::Directive => {
                let (keyword, value) = token.key_value().unwrap_or((token.content, ""));
                let directive = parse_directive(keyword, value, token.line)?;
                tracing::trace!(line = token.line, keyword, "directive");
                doc.directives.push(directive);
            }
            TokenKind::BlockOpen => {
                if token.content.is_empty() {
                    return Err(SyntaxError::MissingBlockName { line: token.line });
                }
                stack.push((token.content.to_string(), Block::new(token.line)));
            }
            TokenKind::BlockClose => {
                let (name, block) = stack
                    .pop()
                    .ok_or(SyntaxError::UnmatchedClose { line: token.line })?;
                match stack.last_mut() {
                    Some((_, parent)) => attach(&mut parent.children, name, block),
                    None => attach(&mut doc.sections, name, block),
                }
            }
            TokenKind::Assignment => {
                let (key, value) = token.key_value().unwrap_or((token.content, ""));
                if let Some((_, block)) = stack.last_mut() {
                    block.values.insert(
                        key.to_string(),
                        Entry {
                            value: value.to_string(),
                            line: token.line,
                        },
                    );
                } else if options.strict {
                    return Err(SyntaxError::TopLevelAssignment {
                        key: key.to_string(),
                        line: token.line,
                    });
                } else {
                    doc.top_level.push(TopLevelAssignment {
                        key: key.to_string(),
                        value: value.to_string(),
                        line: token.line,
                    });
                }
            }
            TokenKind::Other => doc.stray.push(StrayLine {
                text: token.content.to_string(),
                line: token.line,
            }),
        }
    }

    if let Some((name, block)) = stack.pop() {
        return Err(SyntaxError::UnclosedBlock {
            name,
            line: block.line,
        });
    }

    Ok(doc)
}

fn attach(parent: &mut BTreeMap<String, Block>, name: String, block: Block) {
    match parent.entry(name) {
        MapEntry::Occupied(mut existing) => {
            tracing::debug!(
                section = existing.key().as_str(),
                line = block.line,
                "merging repeated block"
            );
            existing.get_mut().merge(block);
        }
        MapEntry::Vacant(slot) => {
            slot.insert(block);
        }
    }
}
