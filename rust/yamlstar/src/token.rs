// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Token types produced by the scanner.
//!
//! Token content uses `Cow<'input, str>` for zero-copy scanning:
//! - `Borrowed`: token content is a slice of the input (no allocation)
//! - `Owned`: token content was transformed (escapes, line folding)

use std::borrow::Cow;

use crate::span::{Position, Span};

/// Presentation style of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarStyle {
    /// Unquoted scalar, subject to core schema resolution.
    Plain,
    /// `'single quoted'`
    SingleQuoted,
    /// `"double quoted"`
    DoubleQuoted,
    /// `|` block scalar
    Literal,
    /// `>` block scalar
    Folded,
}

impl ScalarStyle {
    #[must_use]
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Block scalar chomping indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chomping {
    /// `-` strip all trailing newlines
    Strip,
    /// (default) clip to single trailing newline
    #[default]
    Clip,
    /// `+` keep all trailing newlines
    Keep,
}

/// A YAML token.
///
/// The block collection tokens (`BlockSequenceStart`, `BlockMappingStart`,
/// `BlockEnd`) do not correspond to characters in the input; the scanner
/// derives them from its indentation stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'input> {
    StreamStart,
    StreamEnd,

    /// `%YAML major.minor`
    VersionDirective { major: u32, minor: u32 },
    /// `%TAG handle prefix`
    TagDirective {
        handle: Cow<'input, str>,
        prefix: Cow<'input, str>,
    },
    /// Any other `%NAME ...` directive. Only the name is kept.
    ReservedDirective(Cow<'input, str>),

    /// `---`
    DocumentStart,
    /// `...`
    DocumentEnd,

    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,

    /// `[`
    FlowSequenceStart,
    /// `]`
    FlowSequenceEnd,
    /// `{`
    FlowMappingStart,
    /// `}`
    FlowMappingEnd,

    /// `-` block sequence entry indicator
    BlockEntry,
    /// `,`
    FlowEntry,
    /// `?` or the start of an implicit key
    Key,
    /// `:`
    Value,

    /// `*name`
    Alias(Cow<'input, str>),
    /// `&name`
    Anchor(Cow<'input, str>),
    /// `!handle!suffix`, `!suffix`, `!!suffix` or `!<verbatim>` (empty handle).
    Tag {
        handle: Cow<'input, str>,
        suffix: Cow<'input, str>,
    },

    Scalar {
        value: Cow<'input, str>,
        style: ScalarStyle,
    },

    /// `# comment`, without the leading `#`.
    Comment(Cow<'input, str>),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StreamStart => write!(f, "start of stream"),
            Self::StreamEnd => write!(f, "end of stream"),
            Self::VersionDirective { major, minor } => write!(f, "%YAML {major}.{minor}"),
            Self::TagDirective { handle, prefix } => write!(f, "%TAG {handle} {prefix}"),
            Self::ReservedDirective(name) => write!(f, "%{name}"),
            Self::DocumentStart => write!(f, "'---'"),
            Self::DocumentEnd => write!(f, "'...'"),
            Self::BlockSequenceStart => write!(f, "block sequence"),
            Self::BlockMappingStart => write!(f, "block mapping"),
            Self::BlockEnd => write!(f, "end of block"),
            Self::FlowSequenceStart => write!(f, "'['"),
            Self::FlowSequenceEnd => write!(f, "']'"),
            Self::FlowMappingStart => write!(f, "'{{'"),
            Self::FlowMappingEnd => write!(f, "'}}'"),
            Self::BlockEntry => write!(f, "'-'"),
            Self::FlowEntry => write!(f, "','"),
            Self::Key => write!(f, "mapping key"),
            Self::Value => write!(f, "':'"),
            Self::Alias(name) => write!(f, "alias '*{name}'"),
            Self::Anchor(name) => write!(f, "anchor '&{name}'"),
            Self::Tag { handle, suffix } => {
                if handle.is_empty() {
                    write!(f, "tag '!<{suffix}>'")
                } else {
                    write!(f, "tag '{handle}{suffix}'")
                }
            }
            Self::Scalar { value, .. } => write!(f, "scalar '{value}'"),
            Self::Comment(_) => write!(f, "comment"),
        }
    }
}

/// A token with its source location.
///
/// The lifetime `'input` refers to the input string being scanned.
#[derive(Debug, Clone, PartialEq)]
pub struct RichToken<'input> {
    /// The actual token.
    pub token: Token<'input>,
    /// The byte range of the token.
    pub span: Span,
    /// Line and column where the token starts.
    pub position: Position,
}

impl<'input> RichToken<'input> {
    /// Create a new rich token.
    #[must_use]
    pub const fn new(token: Token<'input>, span: Span, position: Position) -> Self {
        Self {
            token,
            span,
            position,
        }
    }
}

impl std::fmt::Display for RichToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.token.fmt(f)
    }
}
