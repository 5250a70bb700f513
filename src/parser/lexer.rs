//! Logos-based lexer for a single GAMS source line
//!
//! Fast tokenization using the logos crate. Every byte of the input ends up
//! in exactly one token, so column positions can be accumulated token by
//! token.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Ident,
    Number,
    SingleQuoted,
    DoubleQuoted,
    Star,
    StarStar,
    LParen,
    RParen,
    Comma,
    Dot,
    /// Operators and separators that carry no symbol information.
    Other,
    /// Input the lexer could not match (for example an unterminated quote).
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace
    }

    pub fn is_quoted(self) -> bool {
        matches!(self, TokenKind::SingleQuoted | TokenKind::DoubleQuoted)
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte range in the line.
    pub range: TextRange,
    /// 1-based character column of the first character.
    pub column: usize,
}

impl Token<'_> {
    /// Column directly after the last character of this token.
    pub fn end_column(&self) -> usize {
        self.column + self.text.chars().count()
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
            column: 1,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let start = TextSize::new(self.offset);
        self.offset += text.len() as u32;
        let column = self.column;
        self.column += text.chars().count();

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token {
            kind,
            text,
            range: TextRange::new(start, TextSize::new(self.offset)),
            column,
        })
    }
}

/// Tokenize an entire line into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    // `1`, `2.5`, `1e-6`, `1.e5`, `.25`. A bare `1.` stays `1` then `.`
    // so a following attribute suffix keeps its dot.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+\.[eE][+-]?[0-9]+")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,

    /// Relational operators of equation definitions (`=e=`, `=l=`, ...).
    #[regex(r"=[eEgGlLnNxXcCbB]=")]
    Relational,

    #[regex(r"'[^'\n]*'")]
    SingleQuoted,

    #[regex(r#""[^"\n]*""#)]
    DoubleQuoted,

    #[token("**")]
    StarStar,
    #[token("*")]
    Star,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    // Any other single character: operators, `$`, `;`, `/`, `_`, non-ASCII...
    #[regex(r#"[^ \t\r\n\fA-Za-z0-9'"(),.*]"#)]
    Other,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Number => TokenKind::Number,
            LogosToken::SingleQuoted => TokenKind::SingleQuoted,
            LogosToken::DoubleQuoted => TokenKind::DoubleQuoted,
            LogosToken::StarStar => TokenKind::StarStar,
            LogosToken::Star => TokenKind::Star,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Relational | LogosToken::Other => TokenKind::Other,
        }
    }
}
