//! Fatal scan errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use tiny_core::text::TextSpan;
use tiny_diagnostics::{messages, Diagnostic as TinyDiagnostic};

/// An error that aborts a scan. No partial token list accompanies it.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ScanError {
    /// A character that starts no token.
    #[error("Invalid character encountered: '{character}' at line {line}")]
    #[diagnostic(
        code(tiny::scanner::invalid_character),
        help("outside of strings and comments only ASCII letters, digits, `_`, quotes and operators are allowed")
    )]
    InvalidCharacter {
        character: char,
        line: u32,
        #[label("not recognized")]
        span: SourceSpan,
    },

    /// A numeric lexeme that does not parse as a 64-bit float.
    #[error("Malformed number literal '{lexeme}' at line {line}")]
    #[diagnostic(code(tiny::scanner::malformed_number))]
    MalformedNumber {
        lexeme: String,
        line: u32,
        #[label("here")]
        span: SourceSpan,
    },

    /// Byte offsets are `u32`; anything longer cannot be addressed.
    #[error("Source of {length} bytes exceeds the 4 GiB limit")]
    #[diagnostic(code(tiny::scanner::source_too_large))]
    SourceTooLarge { length: usize },
}

impl ScanError {
    pub(crate) fn invalid_character(character: char, line: u32, span: TextSpan) -> Self {
        ScanError::InvalidCharacter {
            character,
            line,
            span: to_source_span(span),
        }
    }

    pub(crate) fn malformed_number(lexeme: &str, line: u32, span: TextSpan) -> Self {
        ScanError::MalformedNumber {
            lexeme: lexeme.to_string(),
            line,
            span: to_source_span(span),
        }
    }

    /// The line the scanner was on when it gave up.
    pub fn line(&self) -> u32 {
        match self {
            ScanError::InvalidCharacter { line, .. } | ScanError::MalformedNumber { line, .. } => *line,
            ScanError::SourceTooLarge { .. } => 1,
        }
    }

    /// The byte range of the offending text.
    pub fn text_span(&self) -> TextSpan {
        let span = match self {
            ScanError::InvalidCharacter { span, .. } | ScanError::MalformedNumber { span, .. } => span,
            ScanError::SourceTooLarge { .. } => return TextSpan::empty(0),
        };
        TextSpan::from_range(span.offset()..span.offset() + span.len())
    }

    /// Render this error as a catalogued diagnostic.
    pub fn to_diagnostic(&self) -> TinyDiagnostic {
        let diagnostic = match self {
            ScanError::InvalidCharacter { character, line, .. } => {
                let text = character.to_string();
                TinyDiagnostic::new(&messages::INVALID_CHARACTER, &[text.as_str()], *line)
            }
            ScanError::MalformedNumber { lexeme, line, .. } => {
                TinyDiagnostic::new(&messages::MALFORMED_NUMBER, &[lexeme.as_str()], *line)
            }
            ScanError::SourceTooLarge { length } => {
                let text = length.to_string();
                TinyDiagnostic::new(&messages::SOURCE_TOO_LARGE, &[text.as_str()], 1)
            }
        };
        diagnostic.with_span(self.text_span())
    }
}

fn to_source_span(span: TextSpan) -> SourceSpan {
    (span.start as usize, span.length as usize).into()
}
