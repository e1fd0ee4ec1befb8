//! Line classification and the value grammar
//!
//! Statements are line-delimited and come in two shapes:
//!
//! ```text
//! const <identifier> = <value>;
//! .(<identifier>).
//! ```
//!
//! Classification is done with prefix/suffix tests and character-class scans.
//! Declarations are tried first (any line starting with `const`), then
//! references (lines wrapped in `.(` ... `).`). Everything else is rejected.
//!
//! Values are recognized by structure, in this order:
//! 1. Quoted string: `"..."`, interior taken verbatim (no escapes); a lone `"`
//!    is the empty string
//! 2. Unsigned integer: one or more ASCII digits, must fit in `u64`
//! 3. Array: `( ... )`, interior split on every comma, items parsed recursively
//!
//! The array split does not track nesting or quoting, so `((1, 2), 3)` and
//! `("a,b")` are rejected. Nested arrays only work when inner arrays hold a
//! single element, e.g. `((1), 2)`.

use crate::error::{ParseError, SyntaxReason};
use crate::value::Value;

/// A classified source line. Borrowed from the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `const <name> = <value>;`, value text not yet parsed
    Declaration { name: &'a str, value: &'a str },
    /// `.(<name>).`
    Reference { name: &'a str },
}

/// Check `[a-z][a-z0-9_]*`.
pub fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Determine which statement a line is.
///
/// Surrounding whitespace is ignored for matching, but syntax errors carry the
/// line exactly as given.
pub fn classify_line(raw: &str) -> Result<Statement<'_>, ParseError> {
    let line = raw.trim();

    if line.starts_with("const") {
        return classify_declaration(raw, line);
    }

    if line.starts_with(".(") && line.ends_with(").") {
        return classify_reference(raw, line);
    }

    Err(ParseError::syntax(raw, SyntaxReason::UnrecognizedConstruct))
}

fn classify_declaration<'a>(raw: &str, line: &'a str) -> Result<Statement<'a>, ParseError> {
    let invalid = || ParseError::syntax(raw, SyntaxReason::InvalidDeclaration);

    let rest = line.strip_prefix("const ").ok_or_else(invalid)?;
    let (name, rest) = rest.split_once(" = ").ok_or_else(invalid)?;
    if !is_identifier(name) {
        return Err(invalid());
    }

    let value = rest.strip_suffix(';').ok_or_else(invalid)?;
    if value.is_empty() {
        return Err(invalid());
    }

    Ok(Statement::Declaration { name, value })
}

fn classify_reference<'a>(raw: &str, line: &'a str) -> Result<Statement<'a>, ParseError> {
    let name = line
        .strip_prefix(".(")
        .and_then(|rest| rest.strip_suffix(")."))
        .filter(|name| is_identifier(name))
        .ok_or_else(|| ParseError::syntax(raw, SyntaxReason::InvalidReference))?;

    Ok(Statement::Reference { name })
}

/// Parse a value literal. Surrounding whitespace is ignored.
pub fn parse_value(text: &str) -> Result<Value, ParseError> {
    let text = text.trim();

    if text.starts_with('"') && text.ends_with('"') {
        // A lone quote both opens and closes, leaving an empty interior
        let interior = text.get(1..text.len() - 1).unwrap_or_default();
        return Ok(Value::String(interior.to_string()));
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        // Digit runs past u64::MAX are rejected rather than wrapped
        return text
            .parse::<u64>()
            .map(Value::Integer)
            .map_err(|_| ParseError::value(text));
    }

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return parse_array(inner);
    }

    Err(ParseError::value(text))
}

fn parse_array(inner: &str) -> Result<Value, ParseError> {
    inner
        .split(',')
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}
