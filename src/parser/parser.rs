//! Recursive descent parser for a single GAMS source line
//!
//! Builds a nested [`LineTree`] from tokens, then flattens it. Runs on every
//! keystroke, so it is a single linear pass with no backtracking.

use smol_str::SmolStr;

use super::ast::{Argument, Call, Expr, Group, Leaf, LeafKind, LineAstEntry, LineTree};
use super::errors::{ParseError, ParseErrorKind};
use super::flatten::flatten;
use super::lexer::{Lexer, Token, TokenKind};
use crate::base::ColumnSpan;

/// Attribute suffixes that can follow a symbol name (`x.l`, `eq.m`, `m.modelstat`).
const SYMBOL_ATTRIBUTES: &[&str] = &[
    "l", "lo", "up", "fx", "m", "scale", "prior", "stage", "range", "slack", "slacklo",
    "slackup", "infeas", "modelstat", "solvestat", "objval", "numequ", "numvar", "resusd",
    "optfile", "holdfixed", "iterlim", "reslim", "solprint", "limrow", "limcol", "ts", "tl",
    "te", "tf", "val", "pos", "off", "len", "ord", "uel", "first", "last",
];

/// A parsed source line: the nested tree and its flattened entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineAst {
    tree: LineTree,
    entries: Vec<LineAstEntry>,
}

impl LineAst {
    pub fn new(tree: LineTree) -> Self {
        let entries = flatten(&tree);
        Self { tree, entries }
    }

    pub fn tree(&self) -> &LineTree {
        &self.tree
    }

    pub fn entries(&self) -> &[LineAstEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LineAstEntry> {
        self.entries
    }

    /// The entry under a 1-based cursor column.
    ///
    /// An occurrence that strictly contains the column wins over one that
    /// merely ends at it, so `a(i|` picks `i` rather than nothing.
    pub fn entry_at(&self, column: usize) -> Option<&LineAstEntry> {
        self.entries
            .iter()
            .find(|e| !e.is_empty() && e.span().contains(column))
            .or_else(|| self.entries.iter().find(|e| e.span().touches(column)))
    }

    /// The call whose name is under a 1-based cursor column.
    pub fn call_at(&self, column: usize) -> Option<&Call> {
        self.tree
            .calls()
            .into_iter()
            .find(|call| call.name_span.touches(column))
    }
}

/// Parse a line into its flattened occurrences.
pub fn parse_line(text: &str) -> Result<Vec<LineAstEntry>, ParseError> {
    parse_line_ast(text).map(LineAst::into_entries)
}

/// Parse a line, keeping both the nested tree and the flattened entries.
pub fn parse_line_ast(text: &str) -> Result<LineAst, ParseError> {
    parse_line_tree(text).map(LineAst::new)
}

/// Parse a line into occurrences, treating a malformed line as having none.
pub fn line_entries(text: &str) -> Vec<LineAstEntry> {
    match parse_line(text) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::trace!("line not parsed, reporting no occurrences: {}", err);
            Vec::new()
        }
    }
}

/// Parse a line into its nested tree.
pub fn parse_line_tree(text: &str) -> Result<LineTree, ParseError> {
    if is_comment_line(text) || is_dollar_control_line(text) {
        return Ok(LineTree::default());
    }
    let tokens: Vec<_> = Lexer::new(text).filter(|t| !t.kind.is_trivia()).collect();
    Parser::new(&tokens).parse_line()
}

/// A `*` in the first column comments out the whole line.
pub fn is_comment_line(text: &str) -> bool {
    text.starts_with('*')
}

/// A `$` in the first column starts a dollar control option.
pub fn is_dollar_control_line(text: &str) -> bool {
    text.starts_with('$')
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn nth(&self, n: usize) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos + n)
    }

    fn previous(&self) -> Option<&'a Token<'a>> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn bump(&mut self) -> Option<&'a Token<'a>> {
        let token = self.current();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_line(mut self) -> Result<LineTree, ParseError> {
        let mut items = Vec::new();
        while let Some(token) = self.current() {
            if token.kind == TokenKind::RParen {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedClosingParen,
                    token.column,
                ));
            }
            if let Some(expr) = self.parse_item(false)? {
                items.push(expr);
            }
        }
        Ok(LineTree { items })
    }

    /// Parse whatever starts at the current token.
    ///
    /// Always consumes at least one token. Returns `None` for tokens that
    /// carry no symbol information.
    fn parse_item(&mut self, in_arguments: bool) -> Result<Option<Expr>, ParseError> {
        let Some(token) = self.current() else {
            return Ok(None);
        };
        if token.kind == TokenKind::Error && token.text.starts_with(['\'', '"']) {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedString,
                token.column,
            ));
        }
        let wildcard = token.kind == TokenKind::Star && in_arguments && self.at_wildcard_position();
        self.bump();

        let expr = match token.kind {
            TokenKind::Ident => self.parse_identifier(token)?,
            TokenKind::LParen => self.parse_group(token)?,
            TokenKind::SingleQuoted | TokenKind::DoubleQuoted => {
                let inner = &token.text[1..token.text.len() - 1];
                Expr::Leaf(make_leaf(LeafKind::Quoted, inner, token))
            }
            TokenKind::Number => Expr::Leaf(make_leaf(LeafKind::Number, token.text, token)),
            TokenKind::Star if wildcard => {
                Expr::Leaf(make_leaf(LeafKind::Wildcard, token.text, token))
            }
            _ => return Ok(None),
        };
        Ok(Some(expr))
    }

    /// A `*` alone in an argument slot is the universe wildcard; anywhere
    /// else it is multiplication.
    fn at_wildcard_position(&self) -> bool {
        let opens_slot = self
            .previous()
            .is_some_and(|t| matches!(t.kind, TokenKind::LParen | TokenKind::Comma));
        let closes_slot = self
            .nth(1)
            .is_some_and(|t| matches!(t.kind, TokenKind::RParen | TokenKind::Comma));
        opens_slot && closes_slot
    }

    /// Continue after an identifier: an optional attribute suffix, then
    /// either a call or a plain leaf.
    fn parse_identifier(&mut self, name: &'a Token<'a>) -> Result<Expr, ParseError> {
        let mut last = name;
        let mut attribute = None;

        if let (Some(dot), Some(suffix)) = (self.nth(0), self.nth(1)) {
            if is_glued(dot, TokenKind::Dot, name)
                && is_glued(suffix, TokenKind::Ident, dot)
                && is_symbol_attribute(suffix.text)
            {
                attribute = Some(SmolStr::new(suffix.text));
                self.pos += 2;
                last = suffix;
            }
        }

        if let Some(open) = self.current().filter(|t| is_glued(t, TokenKind::LParen, last)) {
            self.bump();
            return self.parse_call(name, attribute, open);
        }

        let mut leaf = make_leaf(LeafKind::Identifier, name.text, name);
        leaf.attribute = attribute;
        Ok(Expr::Leaf(leaf))
    }

    fn parse_call(
        &mut self,
        name: &'a Token<'a>,
        attribute: Option<SmolStr>,
        open: &'a Token<'a>,
    ) -> Result<Expr, ParseError> {
        let (arguments, close) = self.parse_argument_list(open, ParseErrorKind::UnclosedCall)?;
        Ok(Expr::Call(Call {
            name: SmolStr::new(name.text),
            attribute,
            name_span: ColumnSpan::new(name.column, name.end_column()),
            arguments,
            span: ColumnSpan::new(name.column, close.end_column()),
        }))
    }

    fn parse_group(&mut self, open: &'a Token<'a>) -> Result<Expr, ParseError> {
        let (arguments, close) = self.parse_argument_list(open, ParseErrorKind::UnclosedGroup)?;
        Ok(Expr::Group(Group {
            arguments,
            span: ColumnSpan::new(open.column, close.end_column()),
        }))
    }

    /// Parse comma-separated arguments up to and including the closing
    /// parenthesis. An empty slot still produces an [`Argument`].
    fn parse_argument_list(
        &mut self,
        open: &'a Token<'a>,
        unclosed: ParseErrorKind,
    ) -> Result<(Vec<Argument>, &'a Token<'a>), ParseError> {
        let mut arguments = Vec::new();
        let mut items = Vec::new();
        let mut start = open.end_column();

        loop {
            let Some(token) = self.current() else {
                return Err(ParseError::new(unclosed, open.column));
            };
            match token.kind {
                TokenKind::Comma | TokenKind::RParen => {
                    arguments.push(Argument {
                        items: std::mem::take(&mut items),
                        span: ColumnSpan::new(start, token.column),
                    });
                    self.bump();
                    if token.kind == TokenKind::RParen {
                        return Ok((arguments, token));
                    }
                    start = token.end_column();
                }
                _ => {
                    if let Some(expr) = self.parse_item(true)? {
                        items.push(expr);
                    }
                }
            }
        }
    }
}

fn make_leaf(kind: LeafKind, name: &str, token: &Token<'_>) -> Leaf {
    Leaf {
        kind,
        name: SmolStr::new(name),
        attribute: None,
        span: ColumnSpan::new(token.column, token.end_column()),
    }
}

/// Is `token` of `kind` and glued to the end of `after`?
fn is_glued(token: &Token<'_>, kind: TokenKind, after: &Token<'_>) -> bool {
    token.kind == kind && token.range.start() == after.range.end()
}

fn is_symbol_attribute(text: &str) -> bool {
    SYMBOL_ATTRIBUTES
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(text))
}
