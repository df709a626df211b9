//! Reserved words.
//!
//! The table is built on first use and never mutated afterwards, so it can be
//! read from any number of threads.

use crate::token_kind::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Every reserved lexeme and the kind it scans to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::AndKeyword),
    ("or", TokenKind::OrKeyword),
    ("not", TokenKind::NotKeyword),
    ("if", TokenKind::IfKeyword),
    ("else", TokenKind::ElseKeyword),
    ("false", TokenKind::FalseKeyword),
    ("true", TokenKind::TrueKeyword),
    ("for", TokenKind::ForKeyword),
    ("fun", TokenKind::FunKeyword),
    ("nil", TokenKind::NilKeyword),
    ("print", TokenKind::PrintKeyword),
    ("return", TokenKind::ReturnKeyword),
    ("super", TokenKind::SuperKeyword),
    ("this", TokenKind::ThisKeyword),
    ("var", TokenKind::VarKeyword),
    ("while", TokenKind::WhileKeyword),
    ("class", TokenKind::ClassKeyword),
];

/// The process-wide keyword map.
pub fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Resolve an identifier-shaped lexeme to its keyword kind, if reserved.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    keyword_table().get(text).copied()
}
