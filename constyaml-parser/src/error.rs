//! Parse errors
//!
//! All three kinds are terminal for the `parse` call that raised them. The parser
//! never logs or recovers; the caller decides what to do with the error.

use std::fmt;

/// Errors raised while parsing constyaml source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line matches no statement shape, or is a malformed declaration/reference.
    /// `line` is the input line as given, surrounding whitespace included.
    Syntax { line: String, reason: SyntaxReason },
    /// A reference expression names a constant that was never declared.
    UndeclaredName { name: String },
    /// A value literal is neither a quoted string, an unsigned integer, nor an array.
    Value { text: String },
}

/// What made a line syntactically invalid. Only affects the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxReason {
    UnrecognizedConstruct,
    InvalidDeclaration,
    InvalidReference,
}

/// Fieldless view of [`ParseError`] for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Syntax,
    UndeclaredName,
    Value,
}

impl ParseError {
    pub(crate) fn syntax(line: &str, reason: SyntaxReason) -> Self {
        ParseError::Syntax {
            line: line.to_string(),
            reason,
        }
    }

    pub(crate) fn undeclared(name: &str) -> Self {
        ParseError::UndeclaredName {
            name: name.to_string(),
        }
    }

    pub(crate) fn value(text: &str) -> Self {
        ParseError::Value {
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::Syntax { .. } => ParseErrorKind::Syntax,
            ParseError::UndeclaredName { .. } => ParseErrorKind::UndeclaredName,
            ParseError::Value { .. } => ParseErrorKind::Value,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { line, reason } => match reason {
                SyntaxReason::UnrecognizedConstruct => {
                    write!(f, "unrecognized construct: {}", line)
                }
                SyntaxReason::InvalidDeclaration => {
                    write!(f, "syntax error in declaration: {}", line)
                }
                SyntaxReason::InvalidReference => {
                    write!(f, "syntax error in reference: {}", line)
                }
            },
            ParseError::UndeclaredName { name } => {
                write!(f, "constant '{}' is not declared", name)
            }
            ParseError::Value { text } => write!(f, "unknown value: {}", text),
        }
    }
}

impl std::error::Error for ParseError {}
