//! The constyaml parser
//!
//! A [`Parser`] owns one symbol table and feeds it line by line. Declarations
//! insert (or overwrite) a binding; reference expressions are read-only
//! lookups whose result is handed back to the caller but never stored.
//!
//! The first failing line aborts the call. Bindings made by earlier lines are
//! kept, nothing is rolled back, and a later call continues from that state.

use crate::error::{ParseError, SyntaxReason};
use crate::grammar::{classify_line, parse_value, Statement};
use crate::value::Value;
use indexmap::IndexMap;

/// Declared constants in declaration order.
///
/// Re-declaring a name replaces its value but keeps its original position.
pub type SymbolTable = IndexMap<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct Parser {
    constants: SymbolTable,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process lines strictly in order, stopping at the first error.
    pub fn parse<I, S>(&mut self, lines: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Parse a whole source text, one statement per line.
    pub fn parse_source(&mut self, source: &str) -> Result<(), ParseError> {
        self.parse(source.lines())
    }

    /// Process a single line.
    ///
    /// Returns `None` for a declaration and the resolved value for a reference.
    pub fn parse_line(&mut self, line: &str) -> Result<Option<Value>, ParseError> {
        match classify_line(line)? {
            Statement::Declaration { name, value } => {
                let value = parse_value(value)?;
                self.constants.insert(name.to_string(), value);
                Ok(None)
            }
            Statement::Reference { name } => self.lookup(name).cloned().map(Some),
        }
    }

    /// Evaluate a reference-expression line without touching the table.
    ///
    /// Declarations are rejected here since they would mutate the table.
    pub fn resolve(&self, line: &str) -> Result<&Value, ParseError> {
        match classify_line(line)? {
            Statement::Reference { name } => self.lookup(name),
            Statement::Declaration { .. } => {
                Err(ParseError::syntax(line, SyntaxReason::InvalidReference))
            }
        }
    }

    fn lookup(&self, name: &str) -> Result<&Value, ParseError> {
        self.constants
            .get(name)
            .ok_or_else(|| ParseError::undeclared(name))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    pub fn constants(&self) -> &SymbolTable {
        &self.constants
    }

    pub fn into_constants(self) -> SymbolTable {
        self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
