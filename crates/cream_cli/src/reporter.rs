//! Reporter that prints each lexical error as soon as it is found.

use cream_core::LineNumber;
use cream_diagnostics::{Diagnostic, ErrorReporter};
use std::io::{self, Write};

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Writes `[line N] Error: message` lines to a sink (stderr by default).
pub struct ConsoleReporter<W: Write = io::Stderr> {
    out: W,
    use_color: bool,
    had_error: bool,
}

impl ConsoleReporter {
    pub fn stderr(use_color: bool) -> Self {
        Self::new(io::stderr(), use_color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self {
            out,
            use_color,
            had_error: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        if self.use_color {
            let color = if diag.is_error() { RED } else { YELLOW };
            writeln!(self.out, "{}{}{}{}", BOLD, color, diag, RESET)
        } else {
            writeln!(self.out, "{}", diag)
        }
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, line: LineNumber, location: &str, message: &str) {
        let diag = Diagnostic::from_text(line, location, message);
        if let Err(err) = self.print_diagnostic(&diag) {
            tracing::warn!(%err, "could not write diagnostic");
        }
        self.had_error |= diag.is_error();
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}
