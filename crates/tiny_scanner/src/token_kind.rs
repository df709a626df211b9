//! TokenKind enum - every lexical category the scanner can produce.

use crate::keywords;
use serde::Serialize;

/// The kind of a scanned token.
///
/// Trivia (whitespace, newlines, comments) is tokenized rather than skipped,
/// so the token stream covers every byte of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    EndOfFileToken = 0,

    // Trivia
    CommentTrivia = 1,
    NewLineTrivia = 2,
    WhitespaceTrivia = 3,

    // Literals
    NumericLiteral = 4,
    StringLiteral = 5,
    Identifier = 6,

    // Punctuation
    OpenParenToken = 7,
    CloseParenToken = 8,
    OpenBraceToken = 9,
    CloseBraceToken = 10,
    CommaToken = 11,
    DotToken = 12,
    MinusToken = 13,
    PlusToken = 14,
    SemicolonToken = 15,
    SlashToken = 16,
    AsteriskToken = 17,

    // One or two character operators
    ExclamationToken = 18,
    ExclamationEqualsToken = 19,
    EqualsToken = 20,
    EqualsEqualsToken = 21,
    GreaterThanToken = 22,
    GreaterThanEqualsToken = 23,
    LessThanToken = 24,
    LessThanEqualsToken = 25,

    // Keywords
    AndKeyword = 26,
    OrKeyword = 27,
    NotKeyword = 28,
    IfKeyword = 29,
    ElseKeyword = 30,
    ForKeyword = 31,
    WhileKeyword = 32,
    FunKeyword = 33,
    PrintKeyword = 34,
    ReturnKeyword = 35,
    ClassKeyword = 36,
    SuperKeyword = 37,
    ThisKeyword = 38,
    VarKeyword = 39,
    NilKeyword = 40,
    TrueKeyword = 41,
    FalseKeyword = 42,
}

impl TokenKind {
    pub const FIRST_KEYWORD: TokenKind = TokenKind::AndKeyword;
    pub const LAST_KEYWORD: TokenKind = TokenKind::FalseKeyword;
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::OpenParenToken;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::LessThanEqualsToken;

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    /// Punctuation and operators.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION && self <= Self::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::CommentTrivia | TokenKind::NewLineTrivia | TokenKind::WhitespaceTrivia
        )
    }

    /// Look up a keyword kind from text.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        keywords::lookup(text)
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::AndKeyword => Some("and"),
            TokenKind::OrKeyword => Some("or"),
            TokenKind::NotKeyword => Some("not"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::WhileKeyword => Some("while"),
            TokenKind::FunKeyword => Some("fun"),
            TokenKind::PrintKeyword => Some("print"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::ClassKeyword => Some("class"),
            TokenKind::SuperKeyword => Some("super"),
            TokenKind::ThisKeyword => Some("this"),
            TokenKind::VarKeyword => Some("var"),
            TokenKind::NilKeyword => Some("nil"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::FalseKeyword => Some("false"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::CommaToken => Some(","),
            TokenKind::DotToken => Some("."),
            TokenKind::MinusToken => Some("-"),
            TokenKind::PlusToken => Some("+"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::EqualsToken => Some("="),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::LessThanEqualsToken => Some("<="),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_range() {
        assert!(TokenKind::AndKeyword.is_keyword());
        assert!(TokenKind::FalseKeyword.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::LessThanEqualsToken.is_keyword());
    }

    #[test]
    fn test_every_punctuation_kind_has_text() {
        for raw in TokenKind::FIRST_PUNCTUATION as u8..=TokenKind::LAST_PUNCTUATION as u8 {
            let kind = ALL.iter().copied().find(|k| *k as u8 == raw).expect("kind");
            assert!(kind.is_punctuation());
            assert!(kind.punctuation_text().is_some(), "{kind} has no text");
        }
        assert_eq!(TokenKind::EndOfFileToken.punctuation_text(), None);
    }

    #[test]
    fn test_categories_are_disjoint() {
        for kind in ALL {
            let categories = [
                kind.is_keyword(),
                kind.is_punctuation(),
                kind.is_trivia(),
                matches!(kind, TokenKind::NumericLiteral | TokenKind::StringLiteral | TokenKind::Identifier),
                *kind == TokenKind::EndOfFileToken,
            ];
            assert_eq!(categories.iter().filter(|c| **c).count(), 1, "{kind}");
        }
    }

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(TokenKind::LessThanEqualsToken.to_string(), "LessThanEqualsToken");
    }

    const ALL: &[TokenKind] = &[
        TokenKind::EndOfFileToken,
        TokenKind::CommentTrivia,
        TokenKind::NewLineTrivia,
        TokenKind::WhitespaceTrivia,
        TokenKind::NumericLiteral,
        TokenKind::StringLiteral,
        TokenKind::Identifier,
        TokenKind::OpenParenToken,
        TokenKind::CloseParenToken,
        TokenKind::OpenBraceToken,
        TokenKind::CloseBraceToken,
        TokenKind::CommaToken,
        TokenKind::DotToken,
        TokenKind::MinusToken,
        TokenKind::PlusToken,
        TokenKind::SemicolonToken,
        TokenKind::SlashToken,
        TokenKind::AsteriskToken,
        TokenKind::ExclamationToken,
        TokenKind::ExclamationEqualsToken,
        TokenKind::EqualsToken,
        TokenKind::EqualsEqualsToken,
        TokenKind::GreaterThanToken,
        TokenKind::GreaterThanEqualsToken,
        TokenKind::LessThanToken,
        TokenKind::LessThanEqualsToken,
        TokenKind::AndKeyword,
        TokenKind::OrKeyword,
        TokenKind::NotKeyword,
        TokenKind::IfKeyword,
        TokenKind::ElseKeyword,
        TokenKind::ForKeyword,
        TokenKind::WhileKeyword,
        TokenKind::FunKeyword,
        TokenKind::PrintKeyword,
        TokenKind::ReturnKeyword,
        TokenKind::ClassKeyword,
        TokenKind::SuperKeyword,
        TokenKind::ThisKeyword,
        TokenKind::VarKeyword,
        TokenKind::NilKeyword,
        TokenKind::TrueKeyword,
        TokenKind::FalseKeyword,
    ];
}
