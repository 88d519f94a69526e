// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Error types for YAML loading.

use crate::de::DeserializeError;
use crate::span::{Position, Span, line_at};

/// Top level error returned by the typed loading functions.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum Error {
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{_0}")]
    Deserialize(DeserializeError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Deserialize(err) => Some(err),
        }
    }
}

/// The stage-level classification of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// Malformed tokens: bad indentation, unterminated quotes, bad block scalar headers.
    #[display("LexError")]
    Lex,
    /// Grammar violations: unexpected tokens, unbalanced flow collections, misplaced markers.
    #[display("SyntaxError")]
    Syntax,
    /// A numeric literal does not fit the configured integer representation.
    #[display("RangeError")]
    Range,
    /// A configured resource limit was exceeded.
    #[display("LimitError")]
    Limit,
}

/// An error encountered while scanning, parsing or resolving a document.
///
/// Errors carry their source span plus the 1-based line and column of the
/// span start and the text of that source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// The kind of error
    pub kind: ErrorKind,
    /// The span in the source where the error occurred
    pub span: Span,
    /// Expected tokens/patterns (for diagnostic messages)
    pub expected: Vec<String>,
    /// What was actually found (for diagnostic messages)
    pub found: Option<String>,
    /// Line and column of `span.start`
    pub position: Position,
    /// The source line containing `span.start`
    pub snippet: String,
}

/// The kind of error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    // Lexical errors
    /// Unterminated quoted scalar
    UnterminatedQuotedString { double_quoted: bool },
    /// Invalid escape sequence in a double-quoted scalar
    InvalidEscape(char),
    /// Content dedented to a column that matches no open block
    InvalidIndentation { expected: usize, found: usize },
    /// Tab character used as indentation
    TabInIndentation,
    /// Invalid block scalar header with detail message
    InvalidBlockScalar(String),
    /// A character that cannot start any token
    UnexpectedCharacter(char),
    /// `---` or `...` inside a quoted scalar
    DocumentMarkerInScalar,
    /// Anchor or alias without a name
    InvalidAnchor,
    /// Malformed tag
    InvalidTag,
    /// Malformed directive with detail message
    InvalidDirective(String),

    // Syntax errors
    /// Unexpected token; see `ParseError::expected` and `ParseError::found`
    UnexpectedToken,
    /// `:` where a mapping value cannot start
    MappingValueNotAllowed,
    /// `?` where a mapping key cannot start
    MappingKeyNotAllowed,
    /// `-` where a block sequence entry cannot start
    BlockEntryNotAllowed,
    /// An implicit key that is never followed by `:`
    MissingMappingValue,
    /// Flow collection not closed before the end of the document
    UnterminatedFlowCollection { closing: char },
    /// Two `...` markers without a document in between
    DuplicateDocumentEnd,
    /// Directives not followed by `---`
    MissingDocumentStart,
    /// Directive given twice in the same document prolog
    DuplicateDirective(String),
    /// `%YAML` version this loader cannot read
    UnsupportedVersion { major: u32, minor: u32 },
    /// Tag handle used but not declared in document prolog
    UndefinedTagHandle(String),
    /// Alias to an anchor that is not (yet) defined
    UndefinedAlias(String),
    /// Two anchors on the same node
    DuplicateAnchor { first: String, second: String },
    /// Two tags on the same node
    DuplicateTag { first: String, second: String },
    /// Anchor or tag applied to an alias
    PropertiesOnAlias,
    /// Duplicate key in a mapping (only with `DuplicateKeys::Error`)
    DuplicateKey(String),
    /// Node content does not match its explicit core tag
    InvalidTaggedValue { tag: String, value: String },

    // Range errors
    /// Integer literal outside of the `i64` range (only with `IntegerOverflow::Error`)
    IntegerOverflow(String),

    // Limit errors
    /// Nesting deeper than `LoadOptions::max_depth`
    DepthLimitExceeded(usize),
    /// More nodes materialized through aliases than `LoadOptions::max_alias_nodes`
    AliasLimitExceeded(usize),
}

impl ErrorKind {
    /// The category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnterminatedQuotedString { .. }
            | Self::InvalidEscape(_)
            | Self::InvalidIndentation { .. }
            | Self::TabInIndentation
            | Self::InvalidBlockScalar(_)
            | Self::UnexpectedCharacter(_)
            | Self::DocumentMarkerInScalar
            | Self::InvalidAnchor
            | Self::InvalidTag
            | Self::InvalidDirective(_) => ErrorCategory::Lex,
            Self::UnexpectedToken
            | Self::MappingValueNotAllowed
            | Self::MappingKeyNotAllowed
            | Self::BlockEntryNotAllowed
            | Self::MissingMappingValue
            | Self::UnterminatedFlowCollection { .. }
            | Self::DuplicateDocumentEnd
            | Self::MissingDocumentStart
            | Self::DuplicateDirective(_)
            | Self::UnsupportedVersion { .. }
            | Self::UndefinedTagHandle(_)
            | Self::UndefinedAlias(_)
            | Self::DuplicateAnchor { .. }
            | Self::DuplicateTag { .. }
            | Self::PropertiesOnAlias
            | Self::DuplicateKey(_)
            | Self::InvalidTaggedValue { .. } => ErrorCategory::Syntax,
            Self::IntegerOverflow(_) => ErrorCategory::Range,
            Self::DepthLimitExceeded(_) | Self::AliasLimitExceeded(_) => ErrorCategory::Limit,
        }
    }

    /// Get a suggestion for how to fix this error.
    ///
    /// Returns `Some(suggestion)` if a helpful fix suggestion is available,
    /// or `None` if no specific suggestion applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidIndentation { .. } => {
                Some("YAML uses spaces for indentation; ensure consistent indentation levels")
            }
            Self::TabInIndentation => {
                Some("Replace tabs with spaces; YAML requires space-based indentation")
            }
            Self::UnterminatedQuotedString { .. } => {
                Some("Add the matching closing quote character")
            }
            Self::InvalidEscape(_) => {
                Some("Valid escape sequences: \\n, \\r, \\t, \\\\, \\\", \\0, \\x##, \\u####")
            }
            Self::MappingValueNotAllowed => {
                Some("Start nested mappings on a new, more indented line")
            }
            Self::UnterminatedFlowCollection { .. } => {
                Some("Add the matching closing bracket or brace")
            }
            Self::DuplicateKey(_) => Some("Remove or rename one of the duplicate keys"),
            Self::UndefinedAlias(_) => {
                Some("Define the anchor with &name before referencing it with *name")
            }
            Self::DuplicateAnchor { .. } => {
                Some("A node can only have one anchor; remove the extra &anchor")
            }
            Self::DuplicateTag { .. } => Some("A node can only have one tag; remove the extra !tag"),
            Self::PropertiesOnAlias => Some(
                "Aliases (*name) cannot have anchors or tags; apply them to the original value",
            ),
            Self::UndefinedTagHandle(_) => Some(
                "Add a %TAG directive to define the handle, e.g., %TAG !e! tag:example.com,2000:",
            ),
            Self::InvalidBlockScalar(_) => Some(
                "Block scalar header format: | or > followed by optional [1-9] indent and [-+] chomping",
            ),
            Self::MissingDocumentStart => Some("Add '---' after the directives"),
            Self::IntegerOverflow(_) => {
                Some("Quote the value to load it as a string, or allow big integers")
            }
            // No specific suggestion for these
            Self::UnexpectedCharacter(_)
            | Self::DocumentMarkerInScalar
            | Self::InvalidAnchor
            | Self::InvalidTag
            | Self::InvalidDirective(_)
            | Self::UnexpectedToken
            | Self::MappingKeyNotAllowed
            | Self::BlockEntryNotAllowed
            | Self::MissingMappingValue
            | Self::DuplicateDocumentEnd
            | Self::DuplicateDirective(_)
            | Self::UnsupportedVersion { .. }
            | Self::InvalidTaggedValue { .. }
            | Self::DepthLimitExceeded(_)
            | Self::AliasLimitExceeded(_) => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedQuotedString { double_quoted } => {
                let quote = if *double_quoted { '"' } else { '\'' };
                write!(f, "unterminated string literal, missing closing {quote}")
            }
            Self::InvalidEscape(ch) => write!(f, "invalid escape sequence '\\{ch}'"),
            Self::InvalidIndentation { expected, found } => {
                write!(
                    f,
                    "invalid indentation: expected {expected} spaces, found {found}"
                )
            }
            Self::TabInIndentation => write!(f, "tab character in indentation (use spaces)"),
            Self::InvalidBlockScalar(detail) => {
                write!(f, "invalid block scalar header: {detail}")
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "found character '{ch}' that cannot start any token")
            }
            Self::DocumentMarkerInScalar => {
                write!(f, "document marker inside a quoted scalar")
            }
            Self::InvalidAnchor => write!(f, "invalid anchor name"),
            Self::InvalidTag => write!(f, "invalid tag"),
            Self::InvalidDirective(detail) => write!(f, "invalid directive: {detail}"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::MappingValueNotAllowed => {
                write!(f, "mapping values are not allowed in this context")
            }
            Self::MappingKeyNotAllowed => {
                write!(f, "mapping keys are not allowed in this context")
            }
            Self::BlockEntryNotAllowed => {
                write!(f, "block sequence entries are not allowed in this context")
            }
            Self::MissingMappingValue => write!(f, "could not find expected ':'"),
            Self::UnterminatedFlowCollection { closing } => {
                write!(f, "unterminated flow collection, missing closing '{closing}'")
            }
            Self::DuplicateDocumentEnd => {
                write!(f, "duplicate document end marker '...'")
            }
            Self::MissingDocumentStart => {
                write!(f, "directives must be followed by a document start '---'")
            }
            Self::DuplicateDirective(name) => write!(f, "duplicate {name} directive"),
            Self::UnsupportedVersion { major, minor } => {
                write!(f, "unsupported YAML version {major}.{minor}")
            }
            Self::UndefinedTagHandle(handle) => {
                write!(f, "tag handle '{handle}' not declared in document")
            }
            Self::UndefinedAlias(name) => {
                write!(f, "undefined alias '*{name}': anchor '&{name}' not defined")
            }
            Self::DuplicateAnchor { first, second } => {
                write!(
                    f,
                    "duplicate anchor: node already has anchor '&{first}', cannot add '&{second}'"
                )
            }
            Self::DuplicateTag { first, second } => {
                write!(
                    f,
                    "duplicate tag: node already has tag '{first}', cannot add '{second}'"
                )
            }
            Self::PropertiesOnAlias => write!(f, "anchor/tag cannot be applied to alias"),
            Self::DuplicateKey(key) => write!(f, "duplicate key '{key}' in mapping"),
            Self::InvalidTaggedValue { tag, value } => {
                write!(f, "value '{value}' is not valid for tag '{tag}'")
            }
            Self::IntegerOverflow(literal) => {
                write!(f, "integer '{literal}' does not fit in 64 bits")
            }
            Self::DepthLimitExceeded(limit) => {
                write!(f, "nesting depth exceeds the limit of {limit}")
            }
            Self::AliasLimitExceeded(limit) => {
                write!(f, "alias expansion exceeds the limit of {limit} nodes")
            }
        }
    }
}

impl ParseError {
    /// Create a new error with just a kind and span.
    ///
    /// The position is unknown until [`ParseError::located`] is called.
    #[must_use]
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            expected: Vec::new(),
            found: None,
            position: Position::default(),
            snippet: String::new(),
        }
    }

    /// Add expected tokens to the error.
    #[must_use]
    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = expected;
        self
    }

    /// Add the found token to the error.
    #[must_use]
    pub fn with_found(mut self, found: String) -> Self {
        self.found = Some(found);
        self
    }

    /// Fill in line, column and snippet from the source the span points into.
    #[must_use]
    pub fn located(mut self, input: &str) -> Self {
        self.position = Position::from_offset(input, self.span.start);
        self.snippet = line_at(input, self.span.start).to_owned();
        self
    }

    /// The category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// 1-based line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position.column
    }

    /// Get a suggestion for how to fix this error.
    ///
    /// Delegates to [`ErrorKind::suggestion()`].
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        self.kind.suggestion()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind)?;
        if let Some(found) = &self.found {
            write!(f, ", found {found}")?;
        }
        if !self.expected.is_empty() {
            write!(f, ", expected one of: {}", self.expected.join(", "))?;
        }
        write!(f, " at {}", self.position)
    }
}

impl std::error::Error for ParseError {}
