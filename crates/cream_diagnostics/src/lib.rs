//! cream_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Lexical errors never abort a scan. The scanner hands each one to an
//! [`ErrorReporter`], and whoever owns the reporter decides what a reported
//! error means for the rest of the run.

use cream_core::LineNumber;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The fixed message text.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The 1-based line the diagnostic was reported on.
    pub line: LineNumber,
    /// Extra location context, e.g. ` at 'foo'`. Empty for scanner errors.
    pub location: String,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic from a known message template.
    pub fn new(message: &DiagnosticMessage, line: LineNumber) -> Self {
        Self {
            line,
            location: String::new(),
            message_text: message.message.to_string(),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic from free-form text, attaching the code of a
    /// matching known message when there is one.
    pub fn from_text(line: LineNumber, location: &str, text: &str) -> Self {
        match messages::lookup(text) {
            Some(message) => Self::new(message, line).with_location(location),
            None => Self {
                line,
                location: location.to_string(),
                message_text: text.to_string(),
                code: 0,
                category: DiagnosticCategory::Error,
            },
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.category {
            DiagnosticCategory::Error => "Error",
            DiagnosticCategory::Warning => "Warning",
            DiagnosticCategory::Message => "Message",
        };
        write!(
            f,
            "[line {}] {}{}: {}",
            self.line, label, self.location, self.message_text
        )
    }
}

/// The capability the scanner needs to surface lexical errors.
///
/// Implementations must never panic and may be called any number of times.
/// `had_error` stays set until `reset` is called.
pub trait ErrorReporter {
    /// Record a problem found on `line`. `location` is extra context that
    /// goes between `Error` and the colon; the scanner always passes `""`.
    fn report(&mut self, line: LineNumber, location: &str, message: &str);

    /// Record a problem with no extra location context.
    fn error(&mut self, line: LineNumber, message: &str) {
        self.report(line, "", message);
    }

    /// Whether any error has been reported since the last reset.
    fn had_error(&self) -> bool;

    /// Clear the error flag, e.g. between interactive prompt lines.
    fn reset(&mut self);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, line: LineNumber, location: &str, message: &str) {
        (**self).report(line, location, message);
    }

    fn had_error(&self) -> bool {
        (**self).had_error()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// A collection of diagnostics accumulated during a scan, in the order
/// they were reported.
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

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
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

impl ErrorReporter for DiagnosticCollection {
    fn report(&mut self, line: LineNumber, location: &str, message: &str) {
        tracing::trace!(line, message, "diagnostic recorded");
        self.add(Diagnostic::from_text(line, location, message));
    }

    fn had_error(&self) -> bool {
        self.has_errors()
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
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
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================

    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Unexpected character.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, Error, "Unterminated string.");

    const ALL: &[DiagnosticMessage] = &[UNEXPECTED_CHARACTER, UNTERMINATED_STRING];

    /// Find the known message whose text is exactly `text`.
    pub fn lookup(text: &str) -> Option<&'static DiagnosticMessage> {
        ALL.iter().find(|m| m.message == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(&messages::UNEXPECTED_CHARACTER, 3);
        assert_eq!(diag.to_string(), "[line 3] Error: Unexpected character.");
        assert_eq!(diag.code, 1001);
        assert!(diag.is_error());
    }

    #[test]
    fn test_diagnostic_display_with_location() {
        let diag = Diagnostic::new(&messages::UNTERMINATED_STRING, 1).with_location(" at end");
        assert_eq!(diag.to_string(), "[line 1] Error at end: Unterminated string.");
    }

    #[test]
    fn test_from_text_resolves_known_code() {
        let diag = Diagnostic::from_text(2, "", "Unterminated string.");
        assert_eq!(diag.code, 1002);

        let diag = Diagnostic::from_text(2, "", "Something else.");
        assert_eq!(diag.code, 0);
        assert_eq!(diag.category, DiagnosticCategory::Error);
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        assert!(!collection.had_error());

        collection.error(1, "Unexpected character.");
        collection.error(4, "Unterminated string.");
        assert!(collection.had_error());
        assert_eq!(collection.error_count(), 2);
        assert_eq!(collection.diagnostics()[0].line, 1);
        assert_eq!(collection.diagnostics()[1].line, 4);

        collection.reset();
        assert!(!collection.had_error());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_reporter_through_mutable_reference() {
        fn report_twice(mut reporter: impl ErrorReporter) {
            reporter.error(1, "Unexpected character.");
            reporter.error(1, "Unexpected character.");
        }

        let mut collection = DiagnosticCollection::new();
        report_twice(&mut collection);
        assert_eq!(collection.len(), 2);
        assert!(collection.had_error());
    }

    #[test]
    fn test_warning_does_not_set_error_flag() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic {
            line: 1,
            location: String::new(),
            message_text: "Unused.".to_string(),
            code: 0,
            category: DiagnosticCategory::Warning,
        });
        assert!(!collection.had_error());
        assert_eq!(collection.diagnostics()[0].to_string(), "[line 1] Warning: Unused.");
    }
}
