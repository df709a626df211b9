//! The tinyscript scanner/lexer.
//!
//! Converts source text into the full token stream, trivia included, in a
//! single pass. A scanner owns the cursor state for exactly one scan:
//! [`Scanner::scan_tokens`] consumes it.

use crate::char_codes::*;
use crate::error::ScanError;
use crate::token::{Literal, Token, TokenFlags};
use crate::token_kind::TokenKind;
use tiny_core::text::{TextPos, TextSpan};
use tiny_diagnostics::{messages, Diagnostic, DiagnosticSink};

/// The scanner converts tinyscript source text into tokens.
pub struct Scanner<'a> {
    /// The source text being scanned.
    source: &'a str,
    /// Byte offset where the current lexeme starts.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    /// 1-based line counter; bumped once per consumed `\n`.
    line: u32,
    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source and return its tokens, terminated by a single
    /// `EndOfFileToken`.
    ///
    /// Unterminated strings are reported to `sink` and scanning carries on.
    /// An unrecognized character aborts the scan and nothing but the error is
    /// returned, as does a source too long for `TextPos` offsets.
    pub fn scan_tokens(mut self, sink: &mut dyn DiagnosticSink) -> Result<Vec<Token>, ScanError> {
        check_source_len(self.source.len())?;
        while !self.is_eof() {
            self.start = self.current;
            self.scan_token(sink)?;
        }
        let end = Token::end_of_file(self.line, self.current as TextPos);
        self.tokens.push(end);
        Ok(self.tokens)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Look one character past the current one.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next()?;
        chars.next()
    }

    /// Consume and return the current character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Consume the current character only if it is `expected`.
    #[inline]
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline]
    fn span_of(&self, start: usize, end: usize) -> TextSpan {
        TextSpan::from_bounds(start as TextPos, end as TextPos)
    }

    /// The `[start, current)` window of the lexeme being built.
    #[inline]
    fn current_span(&self) -> TextSpan {
        self.span_of(self.start, self.current)
    }

    fn scan_token(&mut self, sink: &mut dyn DiagnosticSink) -> Result<(), ScanError> {
        let Some(ch) = self.advance() else {
            return Ok(());
        };

        let kind = match ch {
            '(' => TokenKind::OpenParenToken,
            ')' => TokenKind::CloseParenToken,
            '{' => TokenKind::OpenBraceToken,
            '}' => TokenKind::CloseBraceToken,
            ',' => TokenKind::CommaToken,
            '.' => TokenKind::DotToken,
            '-' => TokenKind::MinusToken,
            '+' => TokenKind::PlusToken,
            ';' => TokenKind::SemicolonToken,
            '*' => TokenKind::AsteriskToken,

            '!' => self.scan_with_equals(TokenKind::ExclamationEqualsToken, TokenKind::ExclamationToken),
            '=' => self.scan_with_equals(TokenKind::EqualsEqualsToken, TokenKind::EqualsToken),
            '<' => self.scan_with_equals(TokenKind::LessThanEqualsToken, TokenKind::LessThanToken),
            '>' => self.scan_with_equals(TokenKind::GreaterThanEqualsToken, TokenKind::GreaterThanToken),

            SLASH => {
                if self.eat(SLASH) {
                    self.scan_line_comment();
                    return Ok(());
                }
                TokenKind::SlashToken
            }

            c if is_white_space_single_line(c) => TokenKind::WhitespaceTrivia,
            LINE_FEED => {
                self.line += 1;
                TokenKind::NewLineTrivia
            }

            DOUBLE_QUOTE => {
                self.scan_string(sink);
                return Ok(());
            }
            c if is_digit(c) => return self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),

            c => {
                return Err(ScanError::invalid_character(c, self.line, self.current_span()));
            }
        };

        self.add_token(kind);
        Ok(())
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// `!`, `=`, `<` and `>` each pair with a following `=`.
    fn scan_with_equals(&mut self, with_equals: TokenKind, bare: TokenKind) -> TokenKind {
        if self.eat(EQUALS) {
            with_equals
        } else {
            bare
        }
    }

    /// Called after `//`. The comment runs to the next line feed, which is
    /// left for the next token.
    fn scan_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        self.current += memchr::memchr(b'\n', rest).unwrap_or(rest.len());

        let body_start = self.start + 2;
        let body = &self.source[body_start..self.current];
        let token = Token::new(TokenKind::CommentTrivia, body, self.line, self.current_span());
        self.tokens.push(token);
    }

    /// Called after the opening quote. There are no escape sequences; the
    /// literal is everything up to the next `"`, line feeds included.
    fn scan_string(&mut self, sink: &mut dyn DiagnosticSink) {
        let start_line = self.line;
        while let Some(ch) = self.peek() {
            if ch == DOUBLE_QUOTE {
                break;
            }
            if ch == LINE_FEED {
                self.line += 1;
            }
            self.advance();
        }

        let content_start = self.start + DOUBLE_QUOTE.len_utf8();
        let (content_end, flags) = if self.eat(DOUBLE_QUOTE) {
            (self.current - DOUBLE_QUOTE.len_utf8(), TokenFlags::NONE)
        } else {
            sink.report_diagnostic(
                Diagnostic::new(&messages::UNTERMINATED_STRING_QUOTE, &[], start_line)
                    .with_span(self.current_span()),
            );
            (self.current, TokenFlags::UNTERMINATED)
        };

        let text = &self.source[content_start..content_end];
        let token = Token::new(TokenKind::StringLiteral, text, self.line, self.current_span())
            .with_literal(Literal::String(text.to_string()))
            .with_flags(flags);
        self.tokens.push(token);
    }

    /// Called after the first digit. A `.` only belongs to the number when a
    /// digit follows it; there is no exponent syntax.
    fn scan_number(&mut self) -> Result<(), ScanError> {
        self.scan_digits();
        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.advance();
            self.scan_digits();
        }

        let text = &self.source[self.start..self.current];
        let value: f64 = text
            .parse()
            .map_err(|_| ScanError::malformed_number(text, self.line, self.current_span()))?;
        let token = Token::new(TokenKind::NumericLiteral, text, self.line, self.current_span())
            .with_literal(Literal::Number(value));
        self.tokens.push(token);
        Ok(())
    }

    fn scan_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.advance();
        }
    }

    /// Called after the first identifier character. Maximal munch: the whole
    /// run is read before the keyword table is consulted.
    fn scan_identifier(&mut self) -> TokenKind {
        while self.peek().map_or(false, is_identifier_part) {
            self.advance();
        }
        let text = &self.source[self.start..self.current];
        TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// Push a token whose lexeme is exactly the `[start, current)` window.
    fn add_token(&mut self, kind: TokenKind) {
        let text = &self.source[self.start..self.current];
        let token = Token::new(kind, text, self.line, self.current_span());
        self.tokens.push(token);
    }
}

/// Every offset handed out as a `TextPos` must fit in one.
fn check_source_len(length: usize) -> Result<(), ScanError> {
    match TextPos::try_from(length) {
        Ok(_) => Ok(()),
        Err(_) => Err(ScanError::SourceTooLarge { length }),
    }
}
