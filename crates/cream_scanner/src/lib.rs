//! cream_scanner: Lexer/tokenizer for cream-cheese source code.
//!
//! The scanner walks source text one character at a time and produces a
//! lazy stream of tokens:
//! - Single and double character punctuation and operators
//! - String literals (possibly spanning lines) and number literals
//! - Identifiers and reserved keywords
//! - A single terminal `EOF` token
//!
//! Lexical errors go to an [`ErrorReporter`](cream_diagnostics::ErrorReporter)
//! and never stop the scan.

mod char_codes;
mod scanner;
mod syntax_kind;
mod token;

pub use scanner::{scan_tokens, Scanner};
pub use syntax_kind::TokenKind;
pub use token::{Literal, Token};
