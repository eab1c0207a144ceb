//! Token dump printing.

use cream_options::TokenFormat;
use cream_scanner::{Literal, Token};
use serde_json::json;
use std::io::{self, Write};

fn literal_json(literal: &Literal) -> serde_json::Value {
    match literal {
        Literal::None => serde_json::Value::Null,
        Literal::Number(value) => json!(value),
        Literal::String(value) => json!(value),
    }
}

/// Write one token on its own line.
pub fn write_token(out: &mut impl Write, token: &Token, format: TokenFormat) -> io::Result<()> {
    match format {
        TokenFormat::Text => writeln!(out, "{}", token),
        TokenFormat::Json => {
            let value = json!({
                "type": token.kind().name(),
                "lexeme": token.lexeme(),
                "literal": literal_json(token.literal()),
                "line": token.line(),
            });
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)
        }
    }
}
