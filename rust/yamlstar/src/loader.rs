// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Loader façade: scanner, parser and resolver per document.

use log::debug;
use serde::de::DeserializeOwned;

use crate::de::from_value;
use crate::error::{Error, ParseError};
use crate::options::LoadOptions;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::scan;
use crate::span::{Position, Span};
use crate::value::Value;

/// One loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub value: Value,
    /// Byte span of the document's root node
    pub span: Span,
    /// Where the root node starts
    pub position: Position,
}

/// A configured YAML loader.
///
/// ```
/// use yamlstar::{DuplicateKeys, LoadOptions, Loader};
///
/// let loader = Loader::with_options(LoadOptions {
///     duplicate_keys: DuplicateKeys::Error,
///     ..LoadOptions::default()
/// });
/// assert!(loader.load("a: 1\na: 2").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    options: LoadOptions,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Lazily load the documents of `input`.
    ///
    /// Yields each document until the first error, then the error, then
    /// nothing.
    #[must_use]
    pub fn documents<'a>(&self, input: &'a str) -> Documents<'a> {
        Documents {
            parser: Parser::new(scan(input), input).with_options(&self.options),
            resolver: Resolver::new(&self.options, input),
            input,
            done: false,
        }
    }

    /// Load the first document of `input`, or `Null` when there is none.
    ///
    /// The whole stream is validated, so an error in a later document fails
    /// the call.
    pub fn load(&self, input: &str) -> Result<Value, ParseError> {
        let mut documents = self.load_all(input)?;
        if documents.len() > 1 {
            debug!("Ignoring {} documents after the first", documents.len() - 1);
        }
        Ok(if documents.is_empty() {
            Value::Null
        } else {
            documents.swap_remove(0)
        })
    }

    /// Load every document of `input`, in stream order.
    pub fn load_all(&self, input: &str) -> Result<Vec<Value>, ParseError> {
        let values = self
            .documents(input)
            .map(|document| document.map(|document| document.value))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} documents", values.len());
        Ok(values)
    }

    /// Load the first document of `input` into `T`.
    pub fn load_as<T: DeserializeOwned>(&self, input: &str) -> Result<T, Error> {
        Ok(from_value(self.load(input)?)?)
    }

    /// Load every document of `input` into `T`.
    pub fn load_all_as<T: DeserializeOwned>(&self, input: &str) -> Result<Vec<T>, Error> {
        self.load_all(input)?
            .into_iter()
            .map(|value| from_value(value).map_err(Error::from))
            .collect()
    }
}

/// Iterator over the documents of a stream. See [`Loader::documents`].
#[derive(Debug)]
pub struct Documents<'a> {
    parser: Parser<'a>,
    resolver: Resolver<'a>,
    input: &'a str,
    done: bool,
}

impl Iterator for Documents<'_> {
    type Item = Result<Document, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.parser.next_document().and_then(|root| {
            root.map(|root| {
                let value = self.resolver.resolve(&root)?;
                Ok(Document {
                    value,
                    span: root.span,
                    position: Position::from_offset(self.input, root.span.start),
                })
            })
            .transpose()
        });
        match result {
            Ok(Some(document)) => Some(Ok(document)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                debug!("Loading stopped: {err}");
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Documents<'_> {}
