//! tiny_scanner: Lexer/tokenizer for tinyscript source code.
//!
//! Produces the complete token stream for a source string:
//! - Punctuation and one/two-character operators
//! - String, number and identifier literals, with keyword resolution
//! - Whitespace, newline and comment trivia, so the input can be rebuilt
//!   exactly from the tokens' spans
//! - 1-based line numbers on every token
//!
//! ```
//! use tiny_diagnostics::DiagnosticCollection;
//! use tiny_scanner::{Scanner, TokenKind};
//!
//! let mut diagnostics = DiagnosticCollection::new();
//! let tokens = Scanner::new("1+2").scan_tokens(&mut diagnostics).unwrap();
//! assert_eq!(tokens[1].kind(), TokenKind::PlusToken);
//! assert!(diagnostics.is_empty());
//! ```

mod char_codes;
mod error;
pub mod keywords;
mod scanner;
mod token;
mod token_kind;

pub use error::ScanError;
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenFlags};
pub use token_kind::TokenKind;

use tiny_diagnostics::{DiagnosticCollection, DiagnosticSink};

/// Scan `source` with a fresh scanner, reporting recoverable problems to `sink`.
pub fn scan(source: &str, sink: &mut dyn DiagnosticSink) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan_tokens(sink)
}

/// Scan `source` and hand back whatever diagnostics were reported alongside
/// the result.
pub fn scan_collecting(source: &str) -> (Result<Vec<Token>, ScanError>, DiagnosticCollection) {
    let mut diagnostics = DiagnosticCollection::new();
    let result = scan(source, &mut diagnostics);
    (result, diagnostics)
}
