//! Output formats
//!
//! The symbol table is written as a single top-level mapping from constant
//! name to value, in declaration order. Strings are emitted as-is, so non-ASCII
//! content round-trips without escaping.

use crate::parser::SymbolTable;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension. Anything but `.json` is YAML.
    pub fn from_extension(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Errors raised while rendering the symbol table.
#[derive(Debug)]
pub enum SerializeError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Yaml(e) => write!(f, "YAML serialization failed: {}", e),
            SerializeError::Json(e) => write!(f, "JSON serialization failed: {}", e),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::Yaml(e) => Some(e),
            SerializeError::Json(e) => Some(e),
        }
    }
}

/// Render the symbol table in the given format. Output ends with a newline.
pub fn serialize(constants: &SymbolTable, format: OutputFormat) -> Result<String, SerializeError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(constants).map_err(SerializeError::Yaml),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(constants).map_err(SerializeError::Json)?;
            out.push('\n');
            Ok(out)
        }
    }
}
