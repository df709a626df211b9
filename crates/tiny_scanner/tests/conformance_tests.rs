//! Scanner conformance suite.
//!
//! Runs whole tinyscript snippets through the scanner and checks the
//! stream-level guarantees every scan must keep: exactly one trailing
//! end-of-file token, a line counter that matches the number of line feeds,
//! lossless reconstruction of the input, and the expected error outcome.

use std::collections::BTreeMap;
use tiny_scanner::{scan_collecting, Token, TokenKind};

/// What a snippet is expected to do to the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    /// Tokens and no diagnostics.
    Clean,
    /// Tokens plus this many reported diagnostics.
    Diagnostics(usize),
    /// An aborted scan on the given line.
    Fatal(u32),
}

/// Test result for a single conformance case.
#[derive(Debug, Clone)]
struct TestResult {
    name: String,
    category: String,
    failure: Option<String>,
}

/// Check every stream-level property of a successful scan.
fn check_stream(source: &str, tokens: &[Token]) -> Result<(), String> {
    let ends = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::EndOfFileToken)
        .count();
    if ends != 1 {
        return Err(format!("expected one end-of-file token, found {}", ends));
    }
    let Some((end, body)) = tokens.split_last() else {
        return Err("empty token list".to_string());
    };
    if end.kind() != TokenKind::EndOfFileToken || !end.lexeme().is_empty() {
        return Err(format!("bad terminator: {}", end));
    }

    let expected_line = 1 + source.matches('\n').count() as u32;
    if end.line() != expected_line {
        return Err(format!("end line {} but source has {} lines", end.line(), expected_line));
    }

    let mut rebuilt = String::with_capacity(source.len());
    for token in body {
        match token.source_text(source) {
            Some(text) => rebuilt.push_str(text),
            None => return Err(format!("token {} points outside the source", token)),
        }
    }
    if rebuilt != source {
        return Err(format!("reconstruction mismatch: {:?}", rebuilt));
    }

    let mut last_line = 1;
    for token in tokens {
        if token.line() < last_line {
            return Err(format!("line went backwards at {}", token));
        }
        last_line = token.line();
    }
    Ok(())
}

/// Run a single conformance case.
fn run_test(name: &str, category: &str, source: &str, expected: Outcome) -> TestResult {
    let (result, diagnostics) = scan_collecting(source);
    let failure = match (result, expected) {
        (Ok(tokens), Outcome::Clean) if diagnostics.is_empty() => check_stream(source, &tokens).err(),
        (Ok(tokens), Outcome::Diagnostics(n)) if diagnostics.len() == n => check_stream(source, &tokens).err(),
        (Ok(_), _) => Some(format!(
            "expected {:?}, got {} diagnostic(s)",
            expected,
            diagnostics.len()
        )),
        (Err(err), Outcome::Fatal(line)) if err.line() == line => None,
        (Err(err), _) => Some(format!("expected {:?}, got fatal error: {}", expected, err)),
    };

    TestResult {
        name: name.to_string(),
        category: category.to_string(),
        failure,
    }
}

/// Conformance test suite runner.
struct ConformanceTestSuite {
    tests: Vec<TestResult>,
}

impl ConformanceTestSuite {
    fn new() -> Self {
        Self { tests: Vec::new() }
    }

    fn add_test(&mut self, name: &str, category: &str, source: &str, expected: Outcome) {
        self.tests.push(run_test(name, category, source, expected));
    }

    fn failures(&self) -> Vec<&TestResult> {
        self.tests.iter().filter(|t| t.failure.is_some()).collect()
    }

    fn print_summary(&self) {
        let total = self.tests.len();
        let failed = self.failures().len();

        println!("\n=== tinyscript Scanner Conformance Summary ===");
        println!("Total tests: {}", total);
        println!("Passed: {}", total - failed);
        println!("Failed: {}", failed);

        let mut categories: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for test in &self.tests {
            let entry = categories.entry(test.category.as_str()).or_insert((0, 0));
            if test.failure.is_none() {
                entry.0 += 1;
            }
            entry.1 += 1;
        }

        println!("\n--- Results by Category ---");
        for (category, (passed_count, total_count)) in categories {
            println!("  {}: {}/{}", category, passed_count, total_count);
        }

        for failure in self.failures() {
            println!(
                "  [{}] {}: {}",
                failure.category,
                failure.name,
                failure.failure.as_deref().unwrap_or("unknown failure")
            );
        }
    }
}

// ============================================================================
// Test Cases
// ============================================================================

#[test]
fn test_scanner_conformance() {
    let mut suite = ConformanceTestSuite::new();

    // ========================================================================
    // Category: declarations and statements
    // ========================================================================
    suite.add_test("var_declaration", "statements", "var x = 42;", Outcome::Clean);
    suite.add_test("var_no_initializer", "statements", "var empty;", Outcome::Clean);
    suite.add_test("print_statement", "statements", "print \"hello, world\";", Outcome::Clean);
    suite.add_test(
        "if_else",
        "statements",
        "if (a >= b) {\n    print a;\n} else {\n    print b;\n}\n",
        Outcome::Clean,
    );
    suite.add_test(
        "while_loop",
        "statements",
        "while (i < 10) i = i + 1;",
        Outcome::Clean,
    );
    suite.add_test(
        "for_loop",
        "statements",
        "for (var i = 0; i <= 3; i = i + 1) print i;",
        Outcome::Clean,
    );

    // ========================================================================
    // Category: functions and classes
    // ========================================================================
    suite.add_test(
        "function_declaration",
        "functions",
        "fun add(a, b) {\n  return a + b;\n}\nprint add(1, 2.5);",
        Outcome::Clean,
    );
    suite.add_test(
        "class_with_super",
        "functions",
        "class B < A {\n  init() { super.init(); this.x = nil; }\n}",
        Outcome::Clean,
    );

    // ========================================================================
    // Category: expressions
    // ========================================================================
    suite.add_test(
        "logical_operators",
        "expressions",
        "print not true and false or !x;",
        Outcome::Clean,
    );
    suite.add_test(
        "equality_operators",
        "expressions",
        "a == b != c = d;",
        Outcome::Clean,
    );
    suite.add_test(
        "arithmetic",
        "expressions",
        "-(1.5 * 2) / 3 + 4 - .5;",
        Outcome::Clean,
    );

    // ========================================================================
    // Category: trivia
    // ========================================================================
    suite.add_test("empty_source", "trivia", "", Outcome::Clean);
    suite.add_test("only_newlines", "trivia", "\n\n\n", Outcome::Clean);
    suite.add_test("windows_line_endings", "trivia", "var a;\r\nvar b;\r\n", Outcome::Clean);
    suite.add_test("tabs_and_spaces", "trivia", "\t  \t x", Outcome::Clean);
    suite.add_test(
        "comments",
        "trivia",
        "// leading\nvar x; // trailing\n//\n// unicode ✓ and @#%\n",
        Outcome::Clean,
    );
    suite.add_test("comment_without_newline", "trivia", "x // end", Outcome::Clean);

    // ========================================================================
    // Category: strings
    // ========================================================================
    suite.add_test("multiline_string", "strings", "\"one\ntwo\nthree\"", Outcome::Clean);
    suite.add_test("unicode_string", "strings", "print \"héllo ✓\";", Outcome::Clean);
    suite.add_test("unterminated_string", "strings", "print \"oops;", Outcome::Diagnostics(1));
    suite.add_test(
        "unterminated_multiline_string",
        "strings",
        "var s = \"first\nsecond\n",
        Outcome::Diagnostics(1),
    );
    suite.add_test("lone_quote", "strings", "\"", Outcome::Diagnostics(1));

    // ========================================================================
    // Category: errors
    // ========================================================================
    suite.add_test("invalid_at_sign", "errors", "var @x;", Outcome::Fatal(1));
    suite.add_test("invalid_on_third_line", "errors", "a\nb\nc % d", Outcome::Fatal(3));
    suite.add_test("non_ascii_identifier", "errors", "var naïve = 1;", Outcome::Fatal(1));
    suite.add_test("invalid_after_string", "errors", "\"a\nb\" #", Outcome::Fatal(2));
    suite.add_test("square_brackets", "errors", "list[0]", Outcome::Fatal(1));

    suite.print_summary();

    let failures = suite.failures();
    assert!(
        failures.is_empty(),
        "{} conformance case(s) failed: {:?}",
        failures.len(),
        failures.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    );
}
