//! # constyaml-parser
//!
//! Parser for the constyaml constant declaration language.
//!
//! A source file is a sequence of single-line statements:
//!
//! ```text
//! const server_name = "my_server";
//! const port = 8080;
//! const allowed_ips = ("192.168.1.1", "192.168.1.2");
//! .(port).
//! ```
//!
//! Declarations bind a name to a string, unsigned integer, or array value.
//! Reference expressions (`.(name).`) look up an earlier declaration without
//! changing anything. The resulting [`SymbolTable`] is serialized to YAML or
//! JSON by [`format::serialize`].
//!
//! Modules:
//! - [`grammar`]: line classification and the recursive value grammar
//! - [`parser`]: the stateful [`Parser`] and its symbol table
//! - [`value`]: the [`Value`] model
//! - [`error`]: [`ParseError`] and its three kinds
//! - [`format`]: YAML/JSON output
//! - [`loader`]: file reading and whole-file conversion

pub mod error;
pub mod format;
pub mod grammar;
pub mod loader;
pub mod parser;
pub mod value;

pub use error::{ParseError, ParseErrorKind, SyntaxReason};
pub use format::{serialize, OutputFormat, SerializeError};
pub use loader::{LoadError, Loader};
pub use parser::{Parser, SymbolTable};
pub use value::Value;
