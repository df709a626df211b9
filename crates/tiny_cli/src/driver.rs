//! Runs the scanner over files and prompt lines and reports the results.

use clap::ValueEnum;
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiny_diagnostics::{Diagnostic, DiagnosticCollection};
use tiny_scanner::{ScanError, Scanner, Token};

/// Exit status for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit status for bad command-line usage.
pub const EXIT_USAGE: i32 = 64;
/// Exit status when the script had lexical errors.
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit status when the script could not be read.
pub const EXIT_NO_INPUT: i32 = 66;

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// How tokens are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per token.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to render diagnostic")]
    Render(#[from] fmt::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Read { .. } => EXIT_NO_INPUT,
            CliError::Stdin(_) | CliError::Write(_) | CliError::Render(_) | CliError::Json(_) => 1,
        }
    }
}

/// Feeds source text to the scanner and writes tokens to `out`, diagnostics
/// to `err`.
pub struct Driver<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    use_color: bool,
    had_error: bool,
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat, use_color: bool) -> Self {
        Self {
            out,
            err,
            format,
            use_color,
            had_error: false,
        }
    }

    /// Whether any diagnostic or fatal scan error has been seen since the
    /// last reset.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Scan a whole file and return the process exit status.
    pub fn run_file(&mut self, path: &Path) -> Result<i32, CliError> {
        let source = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&source, Some(&path.display().to_string()))?;
        Ok(if self.had_error() { EXIT_DATA_ERROR } else { EXIT_OK })
    }

    /// Interactive mode: every line is scanned on its own until `input` ends.
    /// Errors on one line never end the session. Bytes that are not UTF-8
    /// become U+FFFD, which the scanner then rejects for that line only.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<(), CliError> {
        let mut buf = Vec::new();
        loop {
            self.prompt()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(CliError::Stdin)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            self.run(&line, None)?;
            self.had_error = false;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Scan one piece of source with a fresh scanner and print the outcome.
    pub fn run(&mut self, source: &str, file: Option<&str>) -> Result<(), CliError> {
        let mut diagnostics = DiagnosticCollection::new();
        let result = Scanner::new(source).scan_tokens(&mut diagnostics);

        if diagnostics.has_errors() {
            self.had_error = true;
        }
        for diagnostic in diagnostics.into_diagnostics() {
            let diagnostic = match file {
                Some(file) => diagnostic.with_file(file),
                None => diagnostic,
            };
            self.print_diagnostic(&diagnostic)?;
        }

        match result {
            Ok(tokens) => self.print_tokens(&tokens),
            Err(error) => {
                self.had_error = true;
                self.print_scan_error(error, source, file)
            }
        }
    }

    fn print_tokens(&mut self, tokens: &[Token]) -> Result<(), CliError> {
        for token in tokens {
            match self.format {
                OutputFormat::Text => writeln!(self.out, "{}", token)?,
                OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(token)?)?,
            }
        }
        Ok(())
    }

    fn print_diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<(), CliError> {
        if self.format == OutputFormat::Json {
            writeln!(self.err, "{}", serde_json::to_string(diagnostic)?)?;
            return Ok(());
        }

        if self.use_color {
            if let Some(ref file) = diagnostic.file {
                write!(self.err, "{}{}{}({}): ", CYAN, file, RESET, diagnostic.line)?;
            } else {
                write!(self.err, "line {}: ", diagnostic.line)?;
            }
            writeln!(
                self.err,
                "{}{}{}{} {}T{}{}: {}",
                BOLD, RED, diagnostic.category, RESET,
                CYAN, diagnostic.code, RESET,
                diagnostic.message_text
            )?;
        } else {
            writeln!(self.err, "{}", diagnostic)?;
        }
        Ok(())
    }

    fn print_scan_error(&mut self, error: ScanError, source: &str, file: Option<&str>) -> Result<(), CliError> {
        if self.format == OutputFormat::Json {
            let diagnostic = match file {
                Some(file) => error.to_diagnostic().with_file(file),
                None => error.to_diagnostic(),
            };
            return self.print_diagnostic(&diagnostic);
        }

        let theme = if self.use_color {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        let name = file.unwrap_or("<prompt>");
        let report = Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
        let mut rendered = String::new();
        GraphicalReportHandler::new_themed(theme)
            .with_links(self.use_color)
            .render_report(&mut rendered, &*report)?;
        write!(self.err, "{}", rendered)?;
        Ok(())
    }
}

/// Drop a trailing `\n` or `\r\n`, as `BufRead::lines` does.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
