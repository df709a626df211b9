//! tiny_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! The scanner never prints anything itself. Recoverable problems are handed
//! to a [`DiagnosticSink`] as `(message, line)` pairs; the usual sink is a
//! [`DiagnosticCollection`], which the driver drains and prints.

use serde::Serialize;
use std::fmt;
use tiny_core::text::TextSpan;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1002).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// The 1-based source line the diagnostic refers to.
    pub line: u32,
    /// The source text span where this diagnostic occurred, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TextSpan>,
    pub message_text: String,
    /// The diagnostic code, `0` for free-form reports.
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic from a catalogued message.
    pub fn new(message: &DiagnosticMessage, args: &[&str], line: u32) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create an uncatalogued error diagnostic from plain text.
    pub fn from_text(message: &str, line: u32) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: message.to_string(),
            code: 0,
            category: DiagnosticCategory::Error,
        }
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "{}({}): ", file, self.line)?,
            None => write!(f, "line {}: ", self.line)?,
        }
        if self.code == 0 {
            write!(f, "{}: {}", self.category, self.message_text)
        } else {
            write!(f, "{} T{}: {}", self.category, self.code, self.message_text)
        }
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Receiver for recoverable lexical problems.
///
/// `report` is the minimal contract: a message and the line it refers to.
/// Sinks that want the structured form override `report_diagnostic`.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str, line: u32);

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.report(&diagnostic.message_text, diagnostic.line);
    }
}

/// A collection of diagnostics accumulated during a run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn report(&mut self, message: &str, line: u32) {
        self.add(Diagnostic::from_text(message, line));
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
    }

    // Scanner errors (1000-1099)
    pub const UNTERMINATED_STRING_QUOTE: DiagnosticMessage = diag!(1002, Error, "Unterminated string quote");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character encountered: '{0}'");
    pub const MALFORMED_NUMBER: DiagnosticMessage = diag!(1125, Error, "Malformed number literal '{0}'");
    pub const SOURCE_TOO_LARGE: DiagnosticMessage = diag!(1126, Error, "Source of {0} bytes exceeds the 4 GiB limit");
}
