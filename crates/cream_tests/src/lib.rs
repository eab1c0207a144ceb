//! cream_tests: golden-output helpers shared by the conformance suite.
//!
//! A golden dump is the token listing a script produces followed by the
//! diagnostics it reported, each section one entry per line.

use cream_diagnostics::{DiagnosticCollection, ErrorReporter};
use cream_scanner::Scanner;

/// Everything observable from scanning one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub tokens: Vec<String>,
    pub errors: Vec<String>,
    pub had_error: bool,
}

impl ScanOutcome {
    /// Render as `tokens`, then a `--` separator and diagnostics if any.
    pub fn golden(&self) -> String {
        let mut out = self.tokens.join("\n");
        if !self.errors.is_empty() {
            out.push_str("\n--\n");
            out.push_str(&self.errors.join("\n"));
        }
        out
    }
}

/// Scan `source` to completion.
pub fn scan_outcome(source: &str) -> ScanOutcome {
    let mut diagnostics = DiagnosticCollection::new();
    let tokens = Scanner::new(source, &mut diagnostics)
        .map(|token| token.to_string())
        .collect();
    ScanOutcome {
        tokens,
        errors: diagnostics.iter().map(ToString::to_string).collect(),
        had_error: diagnostics.had_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_without_errors() {
        assert_eq!(scan_outcome("+").golden(), "PLUS + null\nEOF  null");
    }

    #[test]
    fn test_golden_with_errors() {
        let outcome = scan_outcome("@");
        assert!(outcome.had_error);
        assert_eq!(
            outcome.golden(),
            "EOF  null\n--\n[line 1] Error: Unexpected character."
        );
    }
}
