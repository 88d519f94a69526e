// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Span and position types for tracking source locations.

use chumsky::span::SimpleSpan;

/// A span representing a range in the source code.
///
/// This is an alias for chumsky's `SimpleSpan`, which tracks byte offsets.
/// The span is a half-open range `[start, end)`.
pub type Span = SimpleSpan<usize>;

/// A value with an associated source span.
pub type Spanned<T> = (T, Span);

/// A human readable location in the source. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("line {line}, column {column}")]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Position {
    /// Compute the position of a byte offset within `input`.
    ///
    /// Offsets past the end of the input are clamped to the end. Columns
    /// count characters, not bytes.
    #[must_use]
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let offset = floor_char_boundary(input, offset);
        let before = input.get(..offset).unwrap_or(input);
        let line_start = line_start(before);
        let line = before.matches('\n').count() + 1;
        let column = before.get(line_start..).map_or(0, |text| text.chars().count()) + 1;
        Self { line, column }
    }
}

/// Returns the full source line containing `offset`, without its line break.
#[must_use]
pub fn line_at(input: &str, offset: usize) -> &str {
    let offset = floor_char_boundary(input, offset);
    let start = input.get(..offset).map_or(0, line_start);
    let rest = input.get(start..).unwrap_or_default();
    let end = rest.find('\n').unwrap_or(rest.len());
    rest.get(..end)
        .unwrap_or_default()
        .trim_end_matches('\r')
}

fn line_start(before: &str) -> usize {
    before.rfind('\n').map_or(0, |idx| idx + 1)
}

fn floor_char_boundary(input: &str, offset: usize) -> usize {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
