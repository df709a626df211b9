//! Tokens produced by the scanner.

use crate::token_kind::TokenKind;
use bitflags::bitflags;
use serde::Serialize;
use std::fmt;
use tiny_core::text::TextSpan;

bitflags! {
    /// Extra facts about how a token was scanned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct TokenFlags: u8 {
        const NONE         = 0;
        /// A string literal that ran into end-of-input before its closing quote.
        const UNTERMINATED = 1 << 0;
    }
}

/// The parsed value carried by a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// A scanned token.
///
/// Tokens are immutable once built; all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    literal: Option<Literal>,
    line: u32,
    span: TextSpan,
    #[serde(skip_serializing_if = "TokenFlags::is_empty")]
    flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
            flags: TokenFlags::NONE,
        }
    }

    /// The end-of-file marker that terminates every token sequence.
    pub fn end_of_file(line: u32, pos: u32) -> Self {
        Self::new(TokenKind::EndOfFileToken, String::new(), line, TextSpan::empty(pos))
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token text. String literals exclude their quotes and comments
    /// exclude the leading `//`.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// The 1-based line counter at the moment the token was built.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The full byte range the token consumed, delimiters included.
    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }

    /// The exact source text this token was scanned from.
    ///
    /// Returns `None` if `source` is not the text the token came from.
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.to_range())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)?;
        if let Some(ref literal) = self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}
