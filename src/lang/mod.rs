//! The configuration language.
//!
//! This module provides:
//! - Line classification ([`lex`], [`Token`], [`TokenKind`])
//! - Block parsing into a generic tree ([`parse`], [`Document`], [`Block`])
//! - Directive decoding ([`Directive`])
//! - Fatal syntax errors ([`SyntaxError`])
//!
//! # Grammar
//!
//! Line oriented. `#` starts a comment line, `name {` opens a block, a lone
//! `}` closes one, `key = value` assigns inside a block, and
//! `keyword = a, b, c` declares a directive (`monitor`, `bind`, ...).
//! There are no expressions, includes or variables.

mod directive;
mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod parser_tests;

pub use directive::{Directive, parse_directive};
pub use error::{Arity, SyntaxError};
pub use lexer::{BIND_FLAGS, DIRECTIVE_KEYWORDS, Lexer, Token, TokenKind, is_directive_keyword, lex};
pub use parser::{
    Block, Document, Entry, ParseOptions, StrayLine, TopLevelAssignment, parse, parse_with,
};
