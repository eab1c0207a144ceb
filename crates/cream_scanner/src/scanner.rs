//! The cream-cheese scanner/lexer.
//!
//! Converts source text into a lazy stream of tokens that a parser pulls
//! one at a time. Whitespace and comments produce nothing, malformed
//! lexemes are reported and skipped, and the stream always ends with
//! exactly one `EOF` token.

use crate::char_codes::*;
use crate::syntax_kind::TokenKind;
use crate::token::Token;
use cream_core::{LineNumber, TextPos, TextSpan};
use cream_diagnostics::{messages, DiagnosticMessage, ErrorReporter};
use std::iter::FusedIterator;

/// A lexical error found while scanning a single lexeme.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScanError {
    line: LineNumber,
    message: &'static DiagnosticMessage,
}

/// The scanner converts source text into tokens.
///
/// It owns the cursor over a borrowed, read-only source and a reporter
/// that receives every lexical error. Pass `&mut reporter` to keep access
/// to the reporter once the scan is over.
pub struct Scanner<'src, R> {
    /// The source text being scanned.
    source: &'src str,
    /// Byte offset of the first character of the current lexeme.
    start: usize,
    /// Byte offset of the next unconsumed character.
    current: usize,
    /// Current line, bumped on every consumed newline.
    line: LineNumber,
    /// Line at which the current lexeme started.
    start_line: LineNumber,
    reporter: R,
    /// Set once `EOF` has been produced.
    finished: bool,
}

impl<'src, R: ErrorReporter> Scanner<'src, R> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'src str, reporter: R) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            reporter,
            finished: false,
        }
    }

    /// The line the cursor is currently on.
    #[inline]
    pub fn line(&self) -> LineNumber {
        self.line
    }

    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Give back the reporter, dropping the cursor.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Look at the next unconsumed character without advancing.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Look one character past `peek` without touching the cursor.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one whole character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    #[inline]
    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    #[inline]
    fn span(&self) -> TextSpan {
        TextSpan::from(self.start..self.current)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start_line, self.span())
    }

    fn error(&self, message: &'static DiagnosticMessage) -> ScanError {
        ScanError {
            line: self.line,
            message,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan one lexeme starting at `start`. Returns `Ok(None)` for
    /// whitespace and comments.
    fn scan_token(&mut self) -> Result<Option<Token>, ScanError> {
        let Some(ch) = self.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            '!' => self.one_or_two(TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal),
            '>' => self.one_or_two(TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => self.one_or_two(TokenKind::LessEqual, TokenKind::Less),

            SLASH => {
                if self.match_char(SLASH) {
                    self.skip_line_comment();
                    return Ok(None);
                }
                TokenKind::Slash
            }

            LINE_FEED => {
                self.line += 1;
                return Ok(None);
            }
            c if is_white_space_single_line(c) => return Ok(None),

            DOUBLE_QUOTE => return self.scan_string().map(Some),
            c if is_digit(c) => return Ok(Some(self.scan_number())),
            c if is_identifier_start(c) => return Ok(Some(self.scan_identifier())),

            _ => return Err(self.error(&messages::UNEXPECTED_CHARACTER)),
        };

        Ok(Some(self.make_token(kind)))
    }

    /// Pick the two-character kind when the next character is `=`.
    fn one_or_two(&mut self, with_equals: TokenKind, alone: TokenKind) -> TokenKind {
        if self.match_char(EQUALS) {
            with_equals
        } else {
            alone
        }
    }

    /// Skip to the end of the line, leaving the newline for the main loop.
    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        self.current += memchr::memchr(b'\n', rest).unwrap_or(rest.len());
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_string(&mut self) -> Result<Token, ScanError> {
        while let Some(ch) = self.peek() {
            if ch == DOUBLE_QUOTE {
                break;
            }
            if ch == LINE_FEED {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(self.error(&messages::UNTERMINATED_STRING));
        }

        // Closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        Ok(Token::string(self.lexeme(), value, self.start_line, self.span()))
    }

    fn scan_number(&mut self) -> Token {
        self.scan_digits();

        // A fraction needs at least one digit after the dot.
        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.advance();
            self.scan_digits();
        }

        let text = self.lexeme();
        // digits[.digits] is always valid float syntax
        let value = text.parse::<f64>().unwrap_or_default();
        Token::number(text, value, self.start_line, self.span())
    }

    fn scan_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        while self.peek().map_or(false, is_identifier_part) {
            self.advance();
        }

        let kind = TokenKind::from_keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

impl<'src, R: ErrorReporter> Iterator for Scanner<'src, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            match self.scan_token() {
                Ok(Some(token)) => {
                    tracing::trace!(kind = %token.kind(), line = token.line(), lexeme = token.lexeme(), "token");
                    return Some(token);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(line = err.line, message = err.message.message, "lexical error");
                    self.reporter.error(err.line, err.message.message);
                }
            }
        }

        self.finished = true;
        self.start = self.current;
        Some(Token::eof(self.line, self.current as TextPos))
    }
}

impl<'src, R: ErrorReporter> FusedIterator for Scanner<'src, R> {}

/// Scan all of `source`, returning every token including the final `EOF`.
pub fn scan_tokens<R: ErrorReporter>(source: &str, reporter: R) -> Vec<Token> {
    Scanner::new(source, reporter).collect()
}
