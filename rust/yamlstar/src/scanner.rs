// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Indentation-aware YAML scanner.
//!
//! The scanner turns input text into a lazy stream of [`RichToken`]s. Block
//! structure is derived from an indentation stack: whenever an entry or a key
//! starts at a column deeper than the current block, a
//! [`Token::BlockSequenceStart`] or [`Token::BlockMappingStart`] is emitted,
//! and dedenting closes blocks with [`Token::BlockEnd`].
//!
//! Implicit keys (`key: value`) are only recognized when the `:` is seen, so
//! the scanner remembers one candidate key position per flow level and
//! inserts the [`Token::Key`] token retroactively. Tokens are held back in
//! the queue while such a candidate is pending.

use std::borrow::Cow;
use std::collections::VecDeque;

use chumsky::span::Span as _;

use crate::error::{ErrorKind, ParseError};
use crate::span::{Position, Span, Spanned};
use crate::token::{Chomping, RichToken, ScalarStyle, Token};

/// An implicit key and its `:` must be within this many bytes.
const MAX_SIMPLE_KEY_LENGTH: usize = 1024;

/// Scan `input` into tokens.
#[must_use]
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Zero-based cursor into the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Mark {
    index: usize,
    line: usize,
    column: usize,
}

impl Mark {
    const fn position(self) -> Position {
        Position {
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}

/// A position where an implicit key may start.
#[derive(Debug, Clone, Copy, Default)]
struct SimpleKey {
    possible: bool,
    /// The key sits exactly at the current block indentation, so anything
    /// other than `: ` after it is an error.
    required: bool,
    token_number: usize,
    mark: Mark,
}

fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// Blank, line break or end of input.
fn is_blankz(ch: Option<char>) -> bool {
    ch.is_none_or(|ch| is_blank(ch) || is_newline(ch))
}

fn is_flow_indicator(ch: char) -> bool {
    matches!(ch, ',' | '[' | ']' | '{' | '}')
}

fn is_anchor_char(ch: char) -> bool {
    !ch.is_whitespace() && !is_flow_indicator(ch) && ch != '\u{feff}'
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_')
}

fn is_tag_char(ch: char) -> bool {
    ch.is_alphanumeric()
        || matches!(
            ch,
            '-' | ';'
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
                | '+'
                | '$'
                | '_'
                | '.'
                | '~'
                | '*'
                | '\''
                | '('
                | ')'
                | '%'
                | '#'
        )
}

fn is_uri_char(ch: char) -> bool {
    is_tag_char(ch) || matches!(ch, '!' | ',' | '[' | ']')
}

/// Lazy, single-pass YAML scanner.
///
/// Yields `StreamStart` first and `StreamEnd` last. After an error the
/// scanner is fused and yields nothing more.
#[derive(Debug)]
pub struct Scanner<'input> {
    input: &'input str,
    mark: Mark,
    tokens: VecDeque<RichToken<'input>>,
    /// Number of tokens already handed out.
    tokens_parsed: usize,
    stream_start_produced: bool,
    stream_end_produced: bool,
    failed: bool,
    /// Current block indentation, -1 at the top level.
    indent: isize,
    indents: Vec<isize>,
    /// Number of unclosed `[` and `{`.
    flow_level: usize,
    simple_key_allowed: bool,
    /// One candidate key per flow level, plus one for block context.
    simple_keys: Vec<SimpleKey>,
    /// After a quoted scalar, alias or flow end, `:` is a value indicator
    /// in flow context even without a following space.
    prev_was_json_like: bool,
}

impl<'input> Scanner<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            mark: Mark::default(),
            tokens: VecDeque::new(),
            tokens_parsed: 0,
            stream_start_produced: false,
            stream_end_produced: false,
            failed: false,
            indent: -1,
            indents: Vec::new(),
            flow_level: 0,
            simple_key_allowed: false,
            simple_keys: Vec::new(),
            prev_was_json_like: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.mark.index..)?.chars().next()
    }

    /// Peek `n` characters ahead (0 = current character).
    fn peek_n(&self, n: usize) -> Option<char> {
        self.input.get(self.mark.index..)?.chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.mark.index += ch.len_utf8();
        if ch == '\n' || (ch == '\r' && self.peek() != Some('\n')) {
            self.mark.line += 1;
            self.mark.column = 0;
        } else {
            self.mark.column += 1;
        }
        Some(ch)
    }

    /// Consume one line break, treating `\r\n` as a single break.
    fn read_break(&mut self) {
        if self.peek() == Some('\r') && self.peek_n(1) == Some('\n') {
            self.advance();
        }
        self.advance();
    }

    fn skip_blanks(&mut self) -> bool {
        let mut skipped = false;
        while self.peek().is_some_and(is_blank) {
            self.advance();
            skipped = true;
        }
        skipped
    }

    fn slice(&self, start: usize) -> &'input str {
        self.input.get(start..self.mark.index).unwrap_or_default()
    }

    fn column(&self) -> isize {
        isize::try_from(self.mark.column).unwrap_or(isize::MAX)
    }

    fn span_from(&self, start: Mark) -> Span {
        Span::new((), start.index..self.mark.index)
    }

    fn error(&self, kind: ErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span).located(self.input)
    }

    /// An error pointing at the current character.
    fn error_here(&self, kind: ErrorKind) -> ParseError {
        let width = self.peek().map_or(0, char::len_utf8);
        self.error(
            kind,
            Span::new((), self.mark.index..self.mark.index + width),
        )
    }

    fn push_token(&mut self, (token, span): Spanned<Token<'input>>, start: Mark) {
        self.tokens
            .push_back(RichToken::new(token, span, start.position()));
    }

    /// `---` or `...` at column 0 followed by a blank or the end of input.
    fn is_document_indicator(&self) -> bool {
        let rest = self.input.get(self.mark.index..).unwrap_or_default();
        self.mark.column == 0
            && (rest.starts_with("---") || rest.starts_with("..."))
            && is_blankz(self.peek_n(3))
    }

    /// Only blanks precede the cursor on the current line.
    fn in_indentation(&self) -> bool {
        let before = self.input.get(..self.mark.index).unwrap_or_default();
        let line_start = before.rfind(is_newline).map_or(0, |idx| idx + 1);
        before
            .get(line_start..)
            .unwrap_or_default()
            .chars()
            .all(is_blank)
    }

    /// Only blanks and maybe a comment follow the cursor on the current line.
    fn rest_of_line_is_blank(&self) -> bool {
        let rest = self.input.get(self.mark.index..).unwrap_or_default();
        rest.chars()
            .find(|ch| !is_blank(*ch))
            .is_none_or(|ch| is_newline(ch) || ch == '#')
    }

    fn fetch_more_tokens(&mut self) -> Result<(), ParseError> {
        loop {
            if self.stream_end_produced {
                return Ok(());
            }
            let need_more = if self.tokens.is_empty() {
                true
            } else {
                self.stale_simple_keys()?;
                self.simple_keys
                    .iter()
                    .any(|key| key.possible && key.token_number == self.tokens_parsed)
            };
            if !need_more {
                return Ok(());
            }
            self.fetch_next_token()?;
        }
    }

    fn fetch_next_token(&mut self) -> Result<(), ParseError> {
        if !self.stream_start_produced {
            self.fetch_stream_start();
            return Ok(());
        }

        self.scan_to_next_token()?;
        self.stale_simple_keys()?;
        let after_json_like = std::mem::replace(&mut self.prev_was_json_like, false);

        let Some(ch) = self.peek() else {
            return self.fetch_stream_end();
        };

        if self.mark.column == 0 {
            if ch == '%' {
                return self.fetch_directive();
            }
            if self.is_document_indicator() {
                let token = if ch == '-' {
                    Token::DocumentStart
                } else {
                    Token::DocumentEnd
                };
                return self.fetch_document_indicator(token);
            }
        }

        let column = self.column();
        if self.unroll_indent(column) && column > self.indent {
            return Err(self.error_here(ErrorKind::InvalidIndentation {
                expected: usize::try_from(self.indent).unwrap_or(0),
                found: self.mark.column,
            }));
        }

        let next = self.peek_n(1);
        match ch {
            '[' => self.fetch_flow_collection_start(Token::FlowSequenceStart),
            '{' => self.fetch_flow_collection_start(Token::FlowMappingStart),
            ']' => self.fetch_flow_collection_end(Token::FlowSequenceEnd),
            '}' => self.fetch_flow_collection_end(Token::FlowMappingEnd),
            ',' => self.fetch_flow_entry(),
            '-' if is_blankz(next) => self.fetch_block_entry(),
            '?' if is_blankz(next) => self.fetch_key(),
            ':' if is_blankz(next)
                || (self.flow_level > 0
                    && (after_json_like || next.is_some_and(is_flow_indicator))) =>
            {
                self.fetch_value()
            }
            '*' => self.fetch_anchor(true),
            '&' => self.fetch_anchor(false),
            '!' => self.fetch_tag(),
            '|' | '>' if self.flow_level == 0 => self.fetch_block_scalar(ch == '|'),
            '\'' | '"' => self.fetch_flow_scalar(ch == '"'),
            _ if self.can_start_plain(ch, next) => self.fetch_plain_scalar(),
            _ => Err(self.error_here(ErrorKind::UnexpectedCharacter(ch))),
        }
    }

    fn can_start_plain(&self, ch: char, next: Option<char>) -> bool {
        match ch {
            '-' | '?' | ':' => {
                !is_blankz(next) && !(self.flow_level > 0 && next.is_some_and(is_flow_indicator))
            }
            ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%'
            | '@' | '`' => false,
            _ => !is_blank(ch) && !is_newline(ch) && ch != '\u{feff}',
        }
    }

    /// Skip blanks, comments and line breaks up to the next token.
    fn scan_to_next_token(&mut self) -> Result<(), ParseError> {
        loop {
            while let Some(ch) = self.peek() {
                if ch == ' ' {
                    self.advance();
                } else if ch == '\t' {
                    if self.flow_level == 0 && self.in_indentation() && !self.rest_of_line_is_blank()
                    {
                        return Err(self.error_here(ErrorKind::TabInIndentation));
                    }
                    self.advance();
                } else {
                    break;
                }
            }

            if self.peek() == Some('#') {
                self.scan_comment();
            }

            match self.peek() {
                Some(ch) if is_newline(ch) => {
                    self.read_break();
                    if self.flow_level == 0 {
                        self.simple_key_allowed = true;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_comment(&mut self) {
        let start = self.mark;
        self.advance(); // consume #
        while self.peek().is_some_and(|ch| !is_newline(ch)) {
            self.advance();
        }
        let text = self.slice(start.index + 1);
        let span = self.span_from(start);
        self.push_token((Token::Comment(Cow::Borrowed(text)), span), start);
    }

    /// Invalidate candidate keys that can no longer be followed by `:`.
    fn stale_simple_keys(&mut self) -> Result<(), ParseError> {
        let mark = self.mark;
        let mut stale_required = None;
        for key in &mut self.simple_keys {
            if key.possible
                && (key.mark.line < mark.line || key.mark.index + MAX_SIMPLE_KEY_LENGTH < mark.index)
            {
                if key.required {
                    stale_required = Some(key.mark);
                }
                key.possible = false;
            }
        }
        match stale_required {
            Some(key_mark) => Err(self.error(
                ErrorKind::MissingMappingValue,
                Span::new((), key_mark.index..mark.index),
            )),
            None => Ok(()),
        }
    }

    fn save_simple_key(&mut self) -> Result<(), ParseError> {
        if !self.simple_key_allowed {
            return Ok(());
        }
        let key = SimpleKey {
            possible: true,
            required: self.flow_level == 0 && self.indent == self.column(),
            token_number: self.tokens_parsed + self.tokens.len(),
            mark: self.mark,
        };
        self.remove_simple_key()?;
        if let Some(last) = self.simple_keys.last_mut() {
            *last = key;
        }
        Ok(())
    }

    fn remove_simple_key(&mut self) -> Result<(), ParseError> {
        if let Some(last) = self.simple_keys.last_mut() {
            if last.possible && last.required {
                let key_mark = last.mark;
                return Err(self.error(
                    ErrorKind::MissingMappingValue,
                    Span::new((), key_mark.index..self.mark.index),
                ));
            }
            last.possible = false;
        }
        Ok(())
    }

    fn increase_flow_level(&mut self) {
        self.simple_keys.push(SimpleKey::default());
        self.flow_level += 1;
    }

    fn decrease_flow_level(&mut self) {
        if self.flow_level > 0 {
            self.flow_level -= 1;
            self.simple_keys.pop();
        }
    }

    /// Open a block collection at `column` if it is deeper than the current one.
    ///
    /// With `number`, the start token is inserted before the queued token with
    /// that number instead of being appended.
    fn roll_indent(&mut self, column: isize, number: Option<usize>, token: Token<'input>, mark: Mark) {
        if self.flow_level > 0 || self.indent >= column {
            return;
        }
        self.indents.push(self.indent);
        self.indent = column;
        let token = RichToken::new(
            token,
            Span::new((), mark.index..mark.index),
            mark.position(),
        );
        match number {
            Some(number) => {
                let index = number.saturating_sub(self.tokens_parsed).min(self.tokens.len());
                self.tokens.insert(index, token);
            }
            None => self.tokens.push_back(token),
        }
    }

    /// Close every block deeper than `column`. Returns whether any was closed.
    fn unroll_indent(&mut self, column: isize) -> bool {
        if self.flow_level > 0 {
            return false;
        }
        let mut closed = false;
        while self.indent > column {
            let span = Span::new((), self.mark.index..self.mark.index);
            self.push_token((Token::BlockEnd, span), self.mark);
            self.indent = self.indents.pop().unwrap_or(-1);
            closed = true;
        }
        closed
    }

    fn fetch_stream_start(&mut self) {
        if self.peek() == Some('\u{feff}') {
            self.mark.index += '\u{feff}'.len_utf8();
        }
        self.indent = -1;
        self.simple_key_allowed = true;
        self.simple_keys.push(SimpleKey::default());
        self.stream_start_produced = true;
        let span = Span::new((), self.mark.index..self.mark.index);
        self.push_token((Token::StreamStart, span), self.mark);
    }

    fn fetch_stream_end(&mut self) -> Result<(), ParseError> {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;
        self.stream_end_produced = true;
        let span = Span::new((), self.mark.index..self.mark.index);
        self.push_token((Token::StreamEnd, span), self.mark);
        Ok(())
    }

    fn fetch_directive(&mut self) -> Result<(), ParseError> {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let start = self.mark;
        self.advance(); // consume %
        let name_start = self.mark.index;
        while self.peek().is_some_and(is_word_char) {
            self.advance();
        }
        let name = self.slice(name_start);

        let token = match name {
            "" => {
                return Err(self.error(
                    ErrorKind::InvalidDirective("expected a directive name".to_owned()),
                    self.span_from(start),
                ));
            }
            "YAML" => {
                self.skip_blanks();
                let major = self.scan_version_number(start)?;
                if self.peek() != Some('.') {
                    return Err(self.error(
                        ErrorKind::InvalidDirective("expected '.' in the version".to_owned()),
                        self.span_from(start),
                    ));
                }
                self.advance();
                let minor = self.scan_version_number(start)?;
                Token::VersionDirective { major, minor }
            }
            "TAG" => {
                self.skip_blanks();
                let handle = self.scan_directive_handle(start)?;
                if !self.skip_blanks() {
                    return Err(self.error(
                        ErrorKind::InvalidDirective("expected a blank after the tag handle".to_owned()),
                        self.span_from(start),
                    ));
                }
                let prefix_start = self.mark.index;
                while self.peek().is_some_and(is_uri_char) {
                    self.advance();
                }
                let prefix = self.slice(prefix_start);
                if prefix.is_empty() {
                    return Err(self.error(
                        ErrorKind::InvalidDirective("expected a tag prefix".to_owned()),
                        self.span_from(start),
                    ));
                }
                Token::TagDirective {
                    handle: Cow::Borrowed(handle),
                    prefix: Cow::Borrowed(prefix),
                }
            }
            _ => {
                let mut after_blank = false;
                while let Some(ch) = self.peek()
                    && !is_newline(ch)
                    && !(ch == '#' && after_blank)
                {
                    after_blank = is_blank(ch);
                    self.advance();
                }
                Token::ReservedDirective(Cow::Borrowed(name))
            }
        };
        let span = self.span_from(start);
        self.push_token((token, span), start);

        self.skip_blanks();
        if self.peek() == Some('#') {
            self.scan_comment();
        }
        if !is_blankz(self.peek()) {
            return Err(self.error_here(ErrorKind::InvalidDirective(
                "expected a comment or a line break".to_owned(),
            )));
        }
        Ok(())
    }

    fn scan_version_number(&mut self, start: Mark) -> Result<u32, ParseError> {
        let digits_start = self.mark.index;
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
        self.slice(digits_start).parse().map_err(|_| {
            self.error(
                ErrorKind::InvalidDirective("expected a version number".to_owned()),
                self.span_from(start),
            )
        })
    }

    /// `!`, `!!` or `!word!`.
    fn scan_directive_handle(&mut self, start: Mark) -> Result<&'input str, ParseError> {
        let handle_start = self.mark.index;
        if self.peek() == Some('!') {
            self.advance();
            while self.peek().is_some_and(is_word_char) {
                self.advance();
            }
            if self.peek() == Some('!') {
                self.advance();
            }
        }
        let handle = self.slice(handle_start);
        let valid = handle == "!" || (handle.len() > 1 && handle.ends_with('!'));
        if valid {
            Ok(handle)
        } else {
            Err(self.error(
                ErrorKind::InvalidDirective("invalid tag handle".to_owned()),
                self.span_from(start),
            ))
        }
    }

    fn fetch_document_indicator(&mut self, token: Token<'input>) -> Result<(), ParseError> {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;
        let start = self.mark;
        for _ in 0..3 {
            self.advance();
        }
        let span = self.span_from(start);
        self.push_token((token, span), start);
        Ok(())
    }

    fn fetch_flow_collection_start(&mut self, token: Token<'input>) -> Result<(), ParseError> {
        self.save_simple_key()?;
        self.increase_flow_level();
        self.simple_key_allowed = true;
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((token, span), start);
        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, token: Token<'input>) -> Result<(), ParseError> {
        self.remove_simple_key()?;
        self.decrease_flow_level();
        self.simple_key_allowed = false;
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((token, span), start);
        self.prev_was_json_like = true;
        Ok(())
    }

    fn fetch_flow_entry(&mut self) -> Result<(), ParseError> {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((Token::FlowEntry, span), start);
        Ok(())
    }

    fn fetch_block_entry(&mut self) -> Result<(), ParseError> {
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(self.error_here(ErrorKind::BlockEntryNotAllowed));
            }
            self.roll_indent(self.column(), None, Token::BlockSequenceStart, self.mark);
        }
        self.remove_simple_key()?;
        self.simple_key_allowed = true;
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((Token::BlockEntry, span), start);
        Ok(())
    }

    fn fetch_key(&mut self) -> Result<(), ParseError> {
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(self.error_here(ErrorKind::MappingKeyNotAllowed));
            }
            self.roll_indent(self.column(), None, Token::BlockMappingStart, self.mark);
        }
        self.remove_simple_key()?;
        self.simple_key_allowed = self.flow_level == 0;
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((Token::Key, span), start);
        Ok(())
    }

    fn fetch_value(&mut self) -> Result<(), ParseError> {
        let key = self.simple_keys.last().copied().unwrap_or_default();
        if key.possible {
            let index = key
                .token_number
                .saturating_sub(self.tokens_parsed)
                .min(self.tokens.len());
            self.tokens.insert(
                index,
                RichToken::new(
                    Token::Key,
                    Span::new((), key.mark.index..key.mark.index),
                    key.mark.position(),
                ),
            );
            let column = isize::try_from(key.mark.column).unwrap_or(isize::MAX);
            self.roll_indent(
                column,
                Some(key.token_number),
                Token::BlockMappingStart,
                key.mark,
            );
            if let Some(last) = self.simple_keys.last_mut() {
                last.possible = false;
            }
            self.simple_key_allowed = false;
        } else {
            if self.flow_level == 0 {
                if !self.simple_key_allowed {
                    return Err(self.error_here(ErrorKind::MappingValueNotAllowed));
                }
                self.roll_indent(self.column(), None, Token::BlockMappingStart, self.mark);
            }
            self.simple_key_allowed = self.flow_level == 0;
        }
        let start = self.mark;
        self.advance();
        let span = self.span_from(start);
        self.push_token((Token::Value, span), start);
        Ok(())
    }

    fn fetch_anchor(&mut self, alias: bool) -> Result<(), ParseError> {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let start = self.mark;
        self.advance(); // consume & or *
        let name_start = self.mark.index;
        while let Some(ch) = self.peek()
            && is_anchor_char(ch)
        {
            // `*name: value` keeps the colon out of the name
            if ch == ':' && is_blankz(self.peek_n(1)) {
                break;
            }
            self.advance();
        }
        let name = self.slice(name_start);
        if name.is_empty() {
            return Err(self.error(ErrorKind::InvalidAnchor, self.span_from(start)));
        }
        let token = if alias {
            self.prev_was_json_like = true;
            Token::Alias(Cow::Borrowed(name))
        } else {
            Token::Anchor(Cow::Borrowed(name))
        };
        let span = self.span_from(start);
        self.push_token((token, span), start);
        Ok(())
    }

    fn fetch_tag(&mut self) -> Result<(), ParseError> {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let start = self.mark;
        self.advance(); // consume !

        let (handle, suffix) = if self.peek() == Some('<') {
            self.advance();
            let suffix_start = self.mark.index;
            while self.peek().is_some_and(|ch| ch != '>' && !is_blank(ch) && !is_newline(ch)) {
                self.advance();
            }
            let suffix = self.slice(suffix_start);
            if self.peek() != Some('>') || suffix.is_empty() {
                return Err(self.error(ErrorKind::InvalidTag, self.span_from(start)));
            }
            self.advance();
            ("", suffix)
        } else {
            let word_start = self.mark.index;
            while self.peek().is_some_and(is_word_char) {
                self.advance();
            }
            if self.peek() == Some('!') {
                self.advance();
                let handle = self.slice(start.index);
                let suffix_start = self.mark.index;
                while self.peek().is_some_and(is_tag_char) {
                    self.advance();
                }
                let suffix = self.slice(suffix_start);
                if suffix.is_empty() {
                    return Err(self.error(ErrorKind::InvalidTag, self.span_from(start)));
                }
                (handle, suffix)
            } else {
                while self.peek().is_some_and(is_tag_char) {
                    self.advance();
                }
                ("!", self.slice(word_start))
            }
        };

        let next = self.peek();
        if !is_blankz(next) && !(self.flow_level > 0 && next.is_some_and(is_flow_indicator)) {
            return Err(self.error(ErrorKind::InvalidTag, self.span_from(start)));
        }

        let token = Token::Tag {
            handle: Cow::Borrowed(handle),
            suffix: Cow::Borrowed(suffix),
        };
        let span = self.span_from(start);
        self.push_token((token, span), start);
        Ok(())
    }

    fn fetch_block_scalar(&mut self, literal: bool) -> Result<(), ParseError> {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;
        let start = self.mark;
        let token = self.scan_block_scalar(literal)?;
        self.push_token(token, start);
        Ok(())
    }

    fn scan_block_scalar(&mut self, literal: bool) -> Result<Spanned<Token<'input>>, ParseError> {
        let start = self.mark;
        self.advance(); // consume | or >

        // Indentation and chomping indicators, in either order
        let mut chomping = None;
        let mut increment = None;
        loop {
            match self.peek() {
                Some(ch @ ('+' | '-')) => {
                    if chomping.is_some() {
                        return Err(self.error_here(ErrorKind::InvalidBlockScalar(
                            "repeated chomping indicator".to_owned(),
                        )));
                    }
                    chomping = Some(if ch == '+' {
                        Chomping::Keep
                    } else {
                        Chomping::Strip
                    });
                }
                Some('0') => {
                    return Err(self.error_here(ErrorKind::InvalidBlockScalar(
                        "indentation indicator must be between 1 and 9".to_owned(),
                    )));
                }
                Some(ch @ '1'..='9') => {
                    if increment.is_some() {
                        return Err(self.error_here(ErrorKind::InvalidBlockScalar(
                            "repeated indentation indicator".to_owned(),
                        )));
                    }
                    increment = ch.to_digit(10).and_then(|digit| usize::try_from(digit).ok());
                }
                _ => break,
            }
            self.advance();
        }
        let chomping = chomping.unwrap_or_default();

        // Only a comment may follow the header on the same line
        let saw_blank = self.skip_blanks();
        if self.peek() == Some('#') {
            if !saw_blank {
                return Err(self.error_here(ErrorKind::InvalidBlockScalar(
                    "comment must be separated from the header by a space".to_owned(),
                )));
            }
            while self.peek().is_some_and(|ch| !is_newline(ch)) {
                self.advance();
            }
        }
        match self.peek() {
            None => {}
            Some(ch) if is_newline(ch) => self.read_break(),
            Some(_) => {
                return Err(self.error_here(ErrorKind::InvalidBlockScalar(
                    "expected a comment or a line break after the header".to_owned(),
                )));
            }
        }

        let mut indent = increment.map(|increment| {
            usize::try_from(self.indent).map_or(increment, |indent| indent + increment)
        });

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut leading_blank = false;

        self.scan_block_scalar_breaks(&mut indent, &mut trailing_breaks)?;
        let indent = indent.unwrap_or(0);

        while self.mark.column == indent && self.peek().is_some() {
            if self.is_document_indicator() {
                break;
            }
            let trailing_blank = self.peek().is_some_and(is_blank);
            if !literal && leading_break.starts_with('\n') && !leading_blank && !trailing_blank {
                if trailing_breaks.is_empty() {
                    string.push(' ');
                }
            } else {
                string.push_str(&leading_break);
            }
            leading_break.clear();
            string.push_str(&trailing_breaks);
            trailing_breaks.clear();

            leading_blank = self.peek().is_some_and(is_blank);
            while let Some(ch) = self.peek()
                && !is_newline(ch)
            {
                string.push(ch);
                self.advance();
            }
            if self.peek().is_none() {
                break;
            }
            self.read_break();
            leading_break.push('\n');
            self.scan_block_scalar_breaks(&mut Some(indent), &mut trailing_breaks)?;
        }

        if chomping != Chomping::Strip {
            string.push_str(&leading_break);
        }
        if chomping == Chomping::Keep {
            string.push_str(&trailing_breaks);
        }

        let style = if literal {
            ScalarStyle::Literal
        } else {
            ScalarStyle::Folded
        };
        Ok((
            Token::Scalar {
                value: Cow::Owned(string),
                style,
            },
            self.span_from(start),
        ))
    }

    /// Consume empty lines and indentation before block scalar content.
    ///
    /// Determines the content indentation from the first non-empty line when
    /// `indent` is `None`.
    fn scan_block_scalar_breaks(
        &mut self,
        indent: &mut Option<usize>,
        breaks: &mut String,
    ) -> Result<(), ParseError> {
        let mut max_indent = 0;
        loop {
            let below_indent = |column: usize| indent.is_none_or(|indent| column < indent);
            while below_indent(self.mark.column) && self.peek() == Some(' ') {
                self.advance();
            }
            max_indent = max_indent.max(self.mark.column);
            if below_indent(self.mark.column) && self.peek() == Some('\t') {
                return Err(self.error_here(ErrorKind::TabInIndentation));
            }
            match self.peek() {
                Some(ch) if is_newline(ch) => {
                    self.read_break();
                    breaks.push('\n');
                }
                _ => break,
            }
        }
        if indent.is_none() {
            let minimum = usize::try_from(self.indent + 1).unwrap_or(0);
            *indent = Some(max_indent.max(minimum));
        }
        Ok(())
    }

    fn fetch_flow_scalar(&mut self, double: bool) -> Result<(), ParseError> {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let start = self.mark;
        let token = self.scan_flow_scalar(double)?;
        self.push_token(token, start);
        self.prev_was_json_like = true;
        Ok(())
    }

    fn scan_flow_scalar(&mut self, double: bool) -> Result<Spanned<Token<'input>>, ParseError> {
        let start = self.mark;
        let quote = if double { '"' } else { '\'' };
        self.advance(); // consume opening quote

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();

        loop {
            if self.is_document_indicator() {
                return Err(self.error_here(ErrorKind::DocumentMarkerInScalar));
            }
            if self.peek().is_none() {
                return Err(self.error(
                    ErrorKind::UnterminatedQuotedString {
                        double_quoted: double,
                    },
                    Span::new((), start.index..start.index + 1),
                ));
            }

            let mut leading_blanks = false;
            while let Some(ch) = self.peek()
                && !is_blank(ch)
                && !is_newline(ch)
            {
                if !double && ch == '\'' && self.peek_n(1) == Some('\'') {
                    string.push('\'');
                    self.advance();
                    self.advance();
                } else if ch == quote {
                    break;
                } else if double && ch == '\\' && self.peek_n(1).is_some_and(is_newline) {
                    // Escaped line break joins lines without a space
                    self.advance();
                    self.read_break();
                    leading_blanks = true;
                    break;
                } else if double && ch == '\\' {
                    let escape_start = self.mark;
                    self.advance();
                    string.push(self.scan_escape(escape_start, start)?);
                } else {
                    string.push(ch);
                    self.advance();
                }
            }

            if self.peek() == Some(quote) {
                break;
            }

            while let Some(ch) = self.peek()
                && (is_blank(ch) || is_newline(ch))
            {
                if is_blank(ch) {
                    if !leading_blanks {
                        whitespaces.push(ch);
                    }
                    self.advance();
                } else {
                    self.read_break();
                    if leading_blanks {
                        trailing_breaks.push('\n');
                    } else {
                        whitespaces.clear();
                        leading_break.push('\n');
                        leading_blanks = true;
                    }
                }
            }

            if leading_blanks
                && self.flow_level == 0
                && self.peek().is_some_and(|ch| ch != quote)
                && !self.is_document_indicator()
                && self.column() <= self.indent
            {
                return Err(self.error_here(ErrorKind::InvalidIndentation {
                    expected: usize::try_from(self.indent + 1).unwrap_or(0),
                    found: self.mark.column,
                }));
            }

            if leading_blanks {
                if leading_break.starts_with('\n') {
                    if trailing_breaks.is_empty() {
                        string.push(' ');
                    } else {
                        string.push_str(&trailing_breaks);
                    }
                } else {
                    string.push_str(&leading_break);
                    string.push_str(&trailing_breaks);
                }
                leading_break.clear();
                trailing_breaks.clear();
            } else {
                string.push_str(&whitespaces);
                whitespaces.clear();
            }
        }

        self.advance(); // consume closing quote
        let style = if double {
            ScalarStyle::DoubleQuoted
        } else {
            ScalarStyle::SingleQuoted
        };
        Ok((
            Token::Scalar {
                value: Cow::Owned(string),
                style,
            },
            self.span_from(start),
        ))
    }

    /// Decode the escape sequence after a backslash at `escape_start`.
    fn scan_escape(&mut self, escape_start: Mark, scalar_start: Mark) -> Result<char, ParseError> {
        let Some(ch) = self.advance() else {
            return Err(self.error(
                ErrorKind::UnterminatedQuotedString {
                    double_quoted: true,
                },
                Span::new((), scalar_start.index..scalar_start.index + 1),
            ));
        };
        let escaped = match ch {
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            't' | '\t' => '\t',
            'n' => '\n',
            'v' => '\x0B',
            'f' => '\x0C',
            'r' => '\r',
            'e' => '\x1B',
            ' ' => ' ',
            '"' => '"',
            '/' => '/',
            '\\' => '\\',
            'N' => '\u{0085}',
            '_' => '\u{00A0}',
            'L' => '\u{2028}',
            'P' => '\u{2029}',
            'x' | 'u' | 'U' => {
                let digits = match ch {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let hex_start = self.mark.index;
                for _ in 0..digits {
                    if !self.peek().is_some_and(|ch| ch.is_ascii_hexdigit()) {
                        break;
                    }
                    self.advance();
                }
                let hex = self.slice(hex_start);
                let decoded = (hex.len() == digits)
                    .then(|| u32::from_str_radix(hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => decoded,
                    None => {
                        return Err(
                            self.error(ErrorKind::InvalidEscape(ch), self.span_from(escape_start))
                        );
                    }
                }
            }
            _ => {
                return Err(self.error(ErrorKind::InvalidEscape(ch), self.span_from(escape_start)));
            }
        };
        Ok(escaped)
    }

    fn fetch_plain_scalar(&mut self) -> Result<(), ParseError> {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let start = self.mark;
        let token = self.scan_plain_scalar();
        self.push_token(token, start);
        Ok(())
    }

    fn scan_plain_scalar(&mut self) -> Spanned<Token<'input>> {
        let start = self.mark;
        let mut end = self.mark;
        let indent = self.indent + 1;

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();
        let mut leading_blanks = false;
        let mut folded = false;

        loop {
            if self.is_document_indicator() || self.peek() == Some('#') {
                break;
            }

            while let Some(ch) = self.peek()
                && !is_blank(ch)
                && !is_newline(ch)
            {
                let next = self.peek_n(1);
                if ch == ':'
                    && (is_blankz(next)
                        || (self.flow_level > 0 && next.is_some_and(is_flow_indicator)))
                {
                    break;
                }
                if self.flow_level > 0 && is_flow_indicator(ch) {
                    break;
                }

                if leading_blanks {
                    if leading_break.starts_with('\n') && trailing_breaks.is_empty() {
                        string.push(' ');
                    } else if leading_break.starts_with('\n') {
                        string.push_str(&trailing_breaks);
                    } else {
                        string.push_str(&leading_break);
                        string.push_str(&trailing_breaks);
                    }
                    leading_break.clear();
                    trailing_breaks.clear();
                    leading_blanks = false;
                    folded = true;
                } else {
                    string.push_str(&whitespaces);
                    whitespaces.clear();
                }

                string.push(ch);
                self.advance();
                end = self.mark;
            }

            if !self.peek().is_some_and(|ch| is_blank(ch) || is_newline(ch)) {
                break;
            }

            while let Some(ch) = self.peek()
                && (is_blank(ch) || is_newline(ch))
            {
                if is_blank(ch) {
                    // Tabs may not indent block continuation lines; in flow
                    // context they are plain separation
                    if self.flow_level == 0 && leading_blanks && self.column() < indent && ch == '\t'
                    {
                        break;
                    }
                    if !leading_blanks {
                        whitespaces.push(ch);
                    }
                    self.advance();
                } else {
                    self.read_break();
                    if leading_blanks {
                        trailing_breaks.push('\n');
                    } else {
                        whitespaces.clear();
                        leading_break.push('\n');
                        leading_blanks = true;
                    }
                }
            }

            if self.flow_level == 0 && self.column() < indent {
                break;
            }
        }

        if leading_blanks {
            self.simple_key_allowed = true;
        }

        let value = if folded {
            Cow::Owned(string)
        } else {
            Cow::Borrowed(self.input.get(start.index..end.index).unwrap_or_default())
        };
        (
            Token::Scalar {
                value,
                style: ScalarStyle::Plain,
            },
            Span::new((), start.index..end.index),
        )
    }
}

impl<'input> Iterator for Scanner<'input> {
    type Item = Result<RichToken<'input>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Err(err) = self.fetch_more_tokens() {
            self.failed = true;
            return Some(Err(err));
        }
        let token = self.tokens.pop_front()?;
        self.tokens_parsed += 1;
        Some(Ok(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    /// Scan `input` and return the tokens without comments.
    fn tokens(input: &str) -> Vec<Token<'_>> {
        scan(input)
            .map(|token| token.unwrap().token)
            .filter(|token| !matches!(token, Token::Comment(_)))
            .collect()
    }

    /// Scan `input` and return the scalar values in order.
    fn scalars(input: &str) -> Vec<String> {
        tokens(input)
            .into_iter()
            .filter_map(|token| match token {
                Token::Scalar { value, .. } => Some(value.into_owned()),
                _ => None,
            })
            .collect()
    }

    fn scan_error(input: &str) -> ParseError {
        scan(input).find_map(Result::err).unwrap()
    }

    fn plain(value: &str) -> Token<'_> {
        Token::Scalar {
            value: Cow::Borrowed(value),
            style: ScalarStyle::Plain,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens(""), vec![Token::StreamStart, Token::StreamEnd]);
    }

    #[test]
    fn test_simple_mapping_tokens() {
        assert_eq!(
            tokens("key: value"),
            vec![
                Token::StreamStart,
                Token::BlockMappingStart,
                Token::Key,
                plain("key"),
                Token::Value,
                plain("value"),
                Token::BlockEnd,
                Token::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_nested_mapping_tokens() {
        assert_eq!(
            tokens("outer:\n  inner: value"),
            vec![
                Token::StreamStart,
                Token::BlockMappingStart,
                Token::Key,
                plain("outer"),
                Token::Value,
                Token::BlockMappingStart,
                Token::Key,
                plain("inner"),
                Token::Value,
                plain("value"),
                Token::BlockEnd,
                Token::BlockEnd,
                Token::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_block_sequence_tokens() {
        assert_eq!(
            tokens("- a\n- b"),
            vec![
                Token::StreamStart,
                Token::BlockSequenceStart,
                Token::BlockEntry,
                plain("a"),
                Token::BlockEntry,
                plain("b"),
                Token::BlockEnd,
                Token::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_indentless_sequence_has_no_block_start() {
        assert_eq!(
            tokens("key:\n- a"),
            vec![
                Token::StreamStart,
                Token::BlockMappingStart,
                Token::Key,
                plain("key"),
                Token::Value,
                Token::BlockEntry,
                plain("a"),
                Token::BlockEnd,
                Token::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_flow_collection_tokens() {
        assert_eq!(
            tokens("{a: [1, 2]}"),
            vec![
                Token::StreamStart,
                Token::FlowMappingStart,
                Token::Key,
                plain("a"),
                Token::Value,
                Token::FlowSequenceStart,
                plain("1"),
                Token::FlowEntry,
                plain("2"),
                Token::FlowSequenceEnd,
                Token::FlowMappingEnd,
                Token::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_flow_indicators_inside_block_plain_scalar() {
        assert_eq!(scalars("a[b], c{d}"), vec!["a[b], c{d}"]);
    }

    #[test]
    fn test_colon_without_space_is_scalar_content() {
        assert_eq!(scalars("url: http://example.com:8080"), vec![
            "url",
            "http://example.com:8080"
        ]);
    }

    #[test]
    fn test_adjacent_colon_after_quoted_key_in_flow() {
        let toks = tokens(r#"{"a":b}"#);
        assert!(toks.contains(&Token::Value));
        assert_eq!(scalars(r#"{"a":b}"#), vec!["a", "b"]);
    }

    #[test]
    fn test_document_markers_only_at_column_zero() {
        assert_eq!(
            tokens("--- a\n..."),
            vec![
                Token::StreamStart,
                Token::DocumentStart,
                plain("a"),
                Token::DocumentEnd,
                Token::StreamEnd,
            ]
        );
        // Not a marker: no blank after it, or not at column 0
        assert_eq!(scalars("---a"), vec!["---a"]);
        assert_eq!(scalars("a ---"), vec!["a ---"]);
    }

    #[test]
    fn test_plain_scalar_folding() {
        assert_eq!(scalars("a\n b\n\n c"), vec!["a b\nc"]);
    }

    #[test]
    fn test_plain_scalar_comment_ends_scalar() {
        let toks: Vec<Token<'_>> = scan("a # note").map(|token| token.unwrap().token).collect();
        assert!(toks.contains(&plain("a")));
        assert!(toks.contains(&Token::Comment(Cow::Borrowed(" note"))));
        assert_eq!(scalars("a#b"), vec!["a#b"]);
    }

    #[test]
    fn test_single_line_plain_scalar_is_borrowed() {
        let token = scan("hello world")
            .map(|token| token.unwrap().token)
            .find(|token| matches!(token, Token::Scalar { .. }))
            .unwrap();
        assert!(matches!(
            token,
            Token::Scalar {
                value: Cow::Borrowed("hello world"),
                ..
            }
        ));
    }

    #[test]
    fn test_single_quoted_scalar() {
        assert_eq!(scalars("'it''s # not a comment'"), vec![
            "it's # not a comment"
        ]);
        assert_eq!(scalars("'a\n  b\n\n  c'"), vec!["a b\nc"]);
    }

    #[test]
    fn test_double_quoted_escapes() {
        let test_cases = [
            (r#""a\tb""#, "a\tb"),
            (r#""line\nbreak""#, "line\nbreak"),
            (r#""\u00e9\x41\U0001F600""#, "éA😀"),
            (r#""quote \" slash \\ \/""#, "quote \" slash \\ /"),
            (r#""\0\a\e\N\_""#, "\0\x07\x1b\u{85}\u{a0}"),
            ("\"fold\\\n   ed\"", "folded"),
            ("\"a  \n  b\"", "a b"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(scalars(input), vec![expected], "{input}");
        }
    }

    #[test]
    fn test_literal_block_scalar() {
        assert_eq!(scalars("|\n  a\n  b\n"), vec!["a\nb\n"]);
        assert_eq!(scalars("|\n  a\n\n    indented\n"), vec!["a\n\n  indented\n"]);
    }

    #[test]
    fn test_folded_block_scalar() {
        assert_eq!(scalars(">\n  a\n  b\n\n  c\n"), vec!["a b\nc\n"]);
        assert_eq!(scalars(">\n  a\n    more\n  b\n"), vec!["a\n  more\nb\n"]);
    }

    #[test]
    fn test_block_scalar_chomping() {
        let test_cases = [
            ("|\n  text\n\n", "text\n"),
            ("|-\n  text\n\n", "text"),
            ("|+\n  text\n\n", "text\n\n"),
            ("|2-\n    text\n", "  text"),
            ("|-2\n    text\n", "  text"),
            ("|\n  text", "text"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(scalars(input), vec![expected], "{input:?}");
        }
    }

    #[test]
    fn test_block_scalar_in_mapping_ends_at_dedent() {
        assert_eq!(scalars("a: |\n  x\n  y\nb: z"), vec!["a", "x\ny\n", "b", "z"]);
    }

    #[test]
    fn test_block_scalar_at_root_ends_at_document_marker() {
        assert_eq!(scalars("--- |\nfoo\n--- bar"), vec!["foo\n", "bar"]);
    }

    #[test]
    fn test_anchor_alias_and_tag_tokens() {
        let toks = tokens("a: &x !!str v\nb: *x");
        assert!(toks.contains(&Token::Anchor(Cow::Borrowed("x"))));
        assert!(toks.contains(&Token::Alias(Cow::Borrowed("x"))));
        assert!(toks.contains(&Token::Tag {
            handle: Cow::Borrowed("!!"),
            suffix: Cow::Borrowed("str"),
        }));
    }

    #[test]
    fn test_tag_forms() {
        let test_cases = [
            ("!local x", "!", "local"),
            ("! x", "!", ""),
            ("!e!thing x", "!e!", "thing"),
            ("!<tag:yaml.org,2002:str> x", "", "tag:yaml.org,2002:str"),
        ];
        for (input, handle, suffix) in test_cases {
            let toks = tokens(input);
            assert!(
                toks.contains(&Token::Tag {
                    handle: Cow::Borrowed(handle),
                    suffix: Cow::Borrowed(suffix),
                }),
                "{input}: {toks:?}"
            );
        }
    }

    #[test]
    fn test_directives() {
        let toks = tokens("%YAML 1.2\n%TAG !e! tag:example.com,2000:\n---\na");
        assert!(toks.contains(&Token::VersionDirective { major: 1, minor: 2 }));
        assert!(toks.contains(&Token::TagDirective {
            handle: Cow::Borrowed("!e!"),
            prefix: Cow::Borrowed("tag:example.com,2000:"),
        }));
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        assert_eq!(scalars("\u{feff}a"), vec!["a"]);
    }

    #[test]
    fn test_token_positions() {
        let toks: Vec<RichToken<'_>> = scan("a:\n  b: c").map(Result::unwrap).collect();
        let inner_key = toks
            .iter()
            .find(|token| token.token == plain("b"))
            .unwrap();
        assert_eq!(inner_key.position, Position { line: 2, column: 3 });
        assert_eq!(inner_key.span.start, 5);
    }

    #[test]
    fn test_unterminated_quote_points_at_opening_quote() {
        let err = scan_error("key: \"unclosed");
        assert_eq!(
            err.kind,
            ErrorKind::UnterminatedQuotedString {
                double_quoted: true
            }
        );
        assert_eq!(err.category(), ErrorCategory::Lex);
        assert_eq!((err.line(), err.column()), (1, 6));
        assert_eq!(err.span.start, 5);
    }

    #[test]
    fn test_unterminated_single_quote() {
        let err = scan_error("- 'abc\n  - d");
        assert_eq!(
            err.kind,
            ErrorKind::UnterminatedQuotedString {
                double_quoted: false
            }
        );
    }

    #[test]
    fn test_invalid_escape() {
        let err = scan_error(r#""\q""#);
        assert_eq!(err.kind, ErrorKind::InvalidEscape('q'));
        let err = scan_error(r#""\x4""#);
        assert_eq!(err.kind, ErrorKind::InvalidEscape('x'));
    }

    #[test]
    fn test_tab_indentation_is_an_error() {
        let err = scan_error("a:\n\tb: c");
        assert_eq!(err.kind, ErrorKind::TabInIndentation);
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_tabs_allowed_as_separators_and_on_blank_lines() {
        assert_eq!(scalars("a:\tb"), vec!["a", "b"]);
        assert_eq!(scalars("a: b\n\t\nc: d"), vec!["a", "b", "c", "d"]);
        assert_eq!(scalars("[\ta,\n\tb]"), vec!["a", "b"]);
    }

    #[test]
    fn test_tab_indented_flow_continuation_inside_block() {
        let test_cases = [
            ("k: [a\n\tb]", vec!["k", "a b"]),
            ("- [a\n\tb]", vec!["a b"]),
            ("k:\n  - {x: a\n\t\tb}", vec!["k", "x", "a b"]),
            ("[a\n\tb]", vec!["a b"]),
        ];
        for (input, expected) in test_cases {
            assert_eq!(scalars(input), expected, "{input:?}");
        }
    }

    #[test]
    fn test_inconsistent_dedent_is_an_error() {
        let err = scan_error("a:\n    b: 1\n  c: 2");
        assert_eq!(
            err.kind,
            ErrorKind::InvalidIndentation {
                expected: 0,
                found: 2
            }
        );
        assert_eq!(err.category(), ErrorCategory::Lex);
        assert_eq!((err.line(), err.column()), (3, 3));
    }

    #[test]
    fn test_malformed_block_scalar_headers() {
        for input in ["|0\n a", "|++\n a", "|12\n a", "| text\n", "|#c\n a"] {
            let err = scan_error(input);
            assert!(
                matches!(err.kind, ErrorKind::InvalidBlockScalar(_)),
                "{input:?}: {err:?}"
            );
            assert_eq!(err.category(), ErrorCategory::Lex);
        }
    }

    #[test]
    fn test_characters_that_cannot_start_a_token() {
        assert_eq!(scan_error("@foo").kind, ErrorKind::UnexpectedCharacter('@'));
        assert_eq!(scan_error("a: `b`").kind, ErrorKind::UnexpectedCharacter('`'));
    }

    #[test]
    fn test_mapping_value_on_same_line_as_key_value() {
        let err = scan_error("a: b: c");
        assert_eq!(err.kind, ErrorKind::MappingValueNotAllowed);
        assert_eq!(err.category(), ErrorCategory::Syntax);
    }

    #[test]
    fn test_required_key_without_value() {
        let err = scan_error("a: 1\nb\nc: 2");
        assert_eq!(err.kind, ErrorKind::MissingMappingValue);
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_document_marker_inside_quoted_scalar() {
        let err = scan_error("\"a\n---\nb\"");
        assert_eq!(err.kind, ErrorKind::DocumentMarkerInScalar);
    }

    #[test]
    fn test_scanner_is_fused_after_error() {
        let mut scanner = scan("\"open");
        assert!(scanner.by_ref().any(|token| token.is_err()));
        assert!(scanner.next().is_none());
    }
}
