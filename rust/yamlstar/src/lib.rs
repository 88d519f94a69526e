// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! A YAML 1.2 loader producing typed native values.
//!
//! Text goes through three stages:
//! - the scanner turns characters into tokens, tracking indentation and
//!   simple keys,
//! - the parser builds one node tree per document, expanding aliases,
//! - the resolver applies the core schema and produces [`Value`]s.
//!
//! Loading stops at the first error, which carries a category, a position
//! and the offending source line.
//!
//! # Example
//!
//! ```
//! use yamlstar::{Value, load};
//!
//! let value = load("name: yamlstar\nports: [80, 443]\nratio: .5").unwrap();
//! assert_eq!(value["name"], Value::from("yamlstar"));
//! assert_eq!(value["ports"][1], Value::Int(443));
//! assert_eq!(value["ratio"].as_f64(), Some(0.5));
//!
//! let err = load("key: \"unclosed").unwrap_err();
//! assert_eq!((err.line(), err.column()), (1, 6));
//! ```

mod de;
mod error;
mod loader;
mod node;
mod options;
mod parser;
mod resolver;
mod scanner;
mod span;
mod token;
mod value;

pub use de::{DeserializeError, from_value};
pub use error::{Error, ErrorCategory, ErrorKind, ParseError};
pub use loader::{Document, Documents, Loader};
pub use node::{Node, NodeKind};
pub use options::{DuplicateKeys, IntegerOverflow, LoadOptions};
pub use parser::{CORE_TAG_PREFIX, Parser, parse_stream};
pub use resolver::Resolver;
pub use scanner::{Scanner, scan};
pub use span::{Position, Span, Spanned};
pub use token::{Chomping, RichToken, ScalarStyle, Token};
pub use value::{Mapping, Value};

/// The YAML revision this crate implements.
pub const YAML_VERSION: &str = "1.2";

/// The schema used to resolve plain scalars.
pub const SCHEMA: &str = "core";

/// Load the first document of `input` with default options.
///
/// Returns [`Value::Null`] when the stream holds no document. Later
/// documents are parsed and validated but discarded.
pub fn load(input: &str) -> Result<Value, ParseError> {
    Loader::new().load(input)
}

/// Load every document of `input` with default options.
pub fn load_all(input: &str) -> Result<Vec<Value>, ParseError> {
    Loader::new().load_all(input)
}

/// Load the documents of `input` one at a time with default options,
/// yielding every document before the first error.
#[must_use]
pub fn documents(input: &str) -> Documents<'_> {
    Loader::new().documents(input)
}

/// The version of this crate.
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
