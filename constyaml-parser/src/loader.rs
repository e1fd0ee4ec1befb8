//! Source loading and conversion API
//!
//! String-based methods are the core; file-based methods read the file and
//! delegate. [`Loader::convert`] is what the command-line tool runs: parse,
//! serialize, and only then write the output file, so a failed conversion
//! never leaves a partial document behind.
//!
//! ```rust,ignore
//! use constyaml_parser::{Loader, OutputFormat};
//!
//! let constants = Loader::new().parse_str("const port = 8080;")?;
//! Loader::new().convert("app.conf", "app.yaml", OutputFormat::Yaml)?;
//! ```

use crate::error::ParseError;
use crate::format::{serialize, OutputFormat, SerializeError};
use crate::parser::{Parser, SymbolTable};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from loading, parsing, or writing a document.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse(ParseError),
    Serialize(SerializeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            LoadError::Parse(e) => write!(f, "{}", e),
            LoadError::Serialize(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            LoadError::Serialize(e) => Some(e),
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<SerializeError> for LoadError {
    fn from(e: SerializeError) -> Self {
        LoadError::Serialize(e)
    }
}

/// Entry point for parsing sources and converting files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Loader
    }

    // ===== STRING-BASED PROCESSING =====

    /// Parse source text with a fresh parser.
    pub fn parse_str(&self, source: &str) -> Result<SymbolTable, LoadError> {
        let mut parser = Parser::new();
        parser.parse_source(source)?;
        tracing::debug!(constants = parser.len(), "parsed source");
        for (name, value) in parser.constants() {
            tracing::trace!(name = %name, kind = value.kind_name(), "declared");
        }
        Ok(parser.into_constants())
    }

    /// Parse source text and render it in `format`.
    pub fn render_str(&self, source: &str, format: OutputFormat) -> Result<String, LoadError> {
        let constants = self.parse_str(source)?;
        Ok(serialize(&constants, format)?)
    }

    // ===== FILE-BASED PROCESSING =====

    /// Read a UTF-8 file and parse it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SymbolTable, LoadError> {
        let source = read_source(path.as_ref())?;
        self.parse_str(&source)
    }

    /// Convert `input` into `output`. The output file is untouched on failure.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), LoadError> {
        let (input, output) = (input.as_ref(), output.as_ref());

        let source = read_source(input)?;
        let rendered = self.render_str(&source, format)?;

        fs::write(output, rendered).map_err(|source| LoadError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!(output = %output.display(), %format, "wrote document");
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    tracing::debug!(path = %path.display(), "reading source");
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
