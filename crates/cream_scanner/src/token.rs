//! Tokens produced by the scanner.

use crate::syntax_kind::TokenKind;
use cream_core::{LineNumber, TextPos, TextSpan};
use std::fmt;

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Every kind other than `NUMBER` and `STRING`.
    None,
    Number(f64),
    /// The raw text between the quotes; escapes are not interpreted.
    String(String),
}

impl Literal {
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(value) => f.write_str(value),
        }
    }
}

/// A scanned token. Immutable once created.
///
/// The payload always matches the kind: `NUMBER` tokens carry
/// [`Literal::Number`], `STRING` tokens carry [`Literal::String`], and every
/// other kind carries [`Literal::None`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Literal,
    line: LineNumber,
    span: TextSpan,
}

impl Token {
    /// Create a token of a kind that carries no literal.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: LineNumber, span: TextSpan) -> Self {
        debug_assert!(!kind.is_literal(), "{kind} tokens need a literal payload");
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Literal::None,
            line,
            span,
        }
    }

    pub fn number(lexeme: impl Into<String>, value: f64, line: LineNumber, span: TextSpan) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Literal::Number(value),
            line,
            span,
        }
    }

    pub fn string(lexeme: impl Into<String>, value: impl Into<String>, line: LineNumber, span: TextSpan) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Literal::String(value.into()),
            line,
            span,
        }
    }

    /// The terminal token, with an empty lexeme positioned at `pos`.
    pub fn eof(line: LineNumber, pos: TextPos) -> Self {
        Self::new(TokenKind::Eof, String::new(), line, TextSpan::empty(pos))
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of this token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// The line on which the lexeme starts being scanned.
    #[inline]
    pub fn line(&self) -> LineNumber {
        self.line
    }

    /// Byte span of the lexeme in the source.
    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "answer", 1, TextSpan::new(0, 6));
        assert_eq!(token.to_string(), "IDENTIFIER answer null");

        let token = Token::number("12.5", 12.5, 1, TextSpan::new(0, 4));
        assert_eq!(token.to_string(), "NUMBER 12.5 12.5");

        let token = Token::number("12", 12.0, 1, TextSpan::new(0, 2));
        assert_eq!(token.to_string(), "NUMBER 12 12");

        let token = Token::string("\"hi\"", "hi", 2, TextSpan::new(0, 4));
        assert_eq!(token.to_string(), "STRING \"hi\" hi");
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(3, 10);
        assert!(token.is_eof());
        assert_eq!(token.lexeme(), "");
        assert!(token.literal().is_none());
        assert_eq!(token.line(), 3);
        assert!(token.span().is_empty());
        assert_eq!(token.to_string(), "EOF  null");
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Literal::Number(1.5).as_str(), None);
        assert_eq!(Literal::String("a".into()).as_str(), Some("a"));
        assert_eq!(Literal::None.as_number(), None);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_literal_kind_without_payload_is_rejected() {
        let _ = Token::new(TokenKind::Number, "1", 1, TextSpan::new(0, 1));
    }
}
