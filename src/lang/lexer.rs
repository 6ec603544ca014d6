//! Line classification.
//!
//! Turns raw text into a lazy sequence of [`Token`]s. The lexer is a pure
//! function of its input and never fails; deciding what is fatal is the
//! parser's job.

use std::collections::VecDeque;
use std::str::Lines;

/// Keywords that introduce single-line directives.
///
/// `bind` also matches its flag variants (`binde`, `bindl`, `bindel`, ...).
pub const DIRECTIVE_KEYWORDS: &[&str] = &[
    "monitor",
    "workspace",
    "windowrule",
    "layerrule",
    "bezier",
    "animation",
];

/// Letters allowed after `bind` in a bind keyword.
pub const BIND_FLAGS: &str = "lrenmtid";

/// The classification of one lexed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `# ...`
    Comment,
    /// Nothing but whitespace.
    Blank,
    /// `key = value`
    Assignment,
    /// `keyword = a, b, c`
    Directive,
    /// `name {` (content is the name)
    BlockOpen,
    /// `}`
    BlockClose,
    /// Anything else.
    Other,
}

/// One classified record.
///
/// `content` is trimmed. For [`TokenKind::BlockOpen`] it is the section
/// name only; for every other kind it is the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub content: &'a str,
    /// 1-based line number in the source text.
    pub line: usize,
}

impl<'a> Token<'a> {
    const fn new(kind: TokenKind, content: &'a str, line: usize) -> Self {
        Self {
            kind,
            content,
            line,
        }
    }

    /// Splits an assignment or directive at its first `=`.
    ///
    /// Both halves are trimmed. Returns `None` if there is no `=`.
    #[must_use]
    pub fn key_value(&self) -> Option<(&'a str, &'a str)> {
        let (key, value) = self.content.split_once('=')?;
        Some((key.trim(), value.trim()))
    }
}

/// Returns true if `keyword` names a directive.
#[must_use]
pub fn is_directive_keyword(keyword: &str) -> bool {
    if DIRECTIVE_KEYWORDS.contains(&keyword) {
        return true;
    }
    keyword
        .strip_prefix("bind")
        .is_some_and(|flags| flags.chars().all(|c| BIND_FLAGS.contains(c)))
}

/// Lazily lexes `text`.
#[must_use]
pub fn lex(text: &str) -> Lexer<'_> {
    Lexer {
        lines: text.lines(),
        line_no: 0,
        pending: VecDeque::new(),
    }
}

/// Iterator returned by [`lex`].
///
/// Most lines produce one token. A line holding braces alongside other
/// text (`blur { enabled = true }`) produces one token per piece, all
/// carrying the same line number.
#[derive(Debug)]
pub struct Lexer<'a> {
    lines: Lines<'a>,
    line_no: usize,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let raw = self.lines.next()?;
        self.line_no += 1;
        classify_line(raw.trim(), self.line_no, &mut self.pending);
        self.pending.pop_front()
    }
}

fn classify_line<'a>(line: &'a str, line_no: usize, out: &mut VecDeque<Token<'a>>) {
    if line.is_empty() {
        out.push_back(Token::new(TokenKind::Blank, line, line_no));
        return;
    }
    if line.starts_with('#') {
        out.push_back(Token::new(TokenKind::Comment, line, line_no));
        return;
    }
    let directive = line
        .split_once('=')
        .is_some_and(|(key, _)| is_directive_keyword(key.trim()));
    if directive {
        split_trailing_closes(line, line_no, out);
        return;
    }
    if line.contains(['{', '}']) {
        split_braces(line, line_no, out);
        return;
    }
    out.push_back(simple(line, line_no));
}

/// Emits a directive followed by one close token per `}` ending the line.
///
/// Braces inside the directive's text are kept as part of it.
fn split_trailing_closes<'a>(line: &'a str, line_no: usize, out: &mut VecDeque<Token<'a>>) {
    let body = line.trim_end_matches(|c: char| c == '}' || c.is_whitespace());
    out.push_back(simple(body, line_no));
    for _ in line[body.len()..].matches('}') {
        out.push_back(Token::new(TokenKind::BlockClose, "}", line_no));
    }
}

/// Splits a line containing braces into open/close tokens and the text
/// between them.
fn split_braces<'a>(line: &'a str, line_no: usize, out: &mut VecDeque<Token<'a>>) {
    let mut rest = line;
    while let Some(idx) = rest.find(['{', '}']) {
        let before = rest[..idx].trim();
        if rest.as_bytes()[idx] == b'{' {
            out.push_back(Token::new(TokenKind::BlockOpen, before, line_no));
        } else {
            if !before.is_empty() {
                out.push_back(simple(before, line_no));
            }
            out.push_back(Token::new(TokenKind::BlockClose, "}", line_no));
        }
        rest = &rest[idx + 1..];
    }
    let tail = rest.trim();
    if !tail.is_empty() {
        out.push_back(simple(tail, line_no));
    }
}

fn simple(text: &str, line_no: usize) -> Token<'_> {
    let kind = match text.split_once('=') {
        Some((key, _)) if is_directive_keyword(key.trim()) => TokenKind::Directive,
        Some(_) => TokenKind::Assignment,
        None => TokenKind::Other,
    };
    Token::new(kind, text, line_no)
}
