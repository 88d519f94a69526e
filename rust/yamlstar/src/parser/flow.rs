// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Flow collection parsing: `[a, b]` and `{a: b}`.

use chumsky::span::Span as _;

use crate::error::{ErrorKind, ParseError};
use crate::node::{Node, NodeKind};
use crate::span::Span;
use crate::token::Token;

use super::Parser;

/// Tokens after which a flow key or value has no content.
fn ends_flow_content(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::Value | Token::FlowEntry | Token::FlowSequenceEnd | Token::FlowMappingEnd
    )
}

/// Tokens that can never appear inside a flow collection.
fn ends_flow_collection(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::StreamEnd | Token::DocumentStart | Token::DocumentEnd
    )
}

impl<'input> Parser<'input> {
    pub(super) fn parse_flow_sequence(&mut self) -> Result<Node<'input>, ParseError> {
        let open = self.next_token()?.span; // [
        let mut items = Vec::new();
        let mut first = true;
        loop {
            self.check_flow_terminated(open, ']')?;
            if self.check(|token| matches!(token, Token::FlowSequenceEnd))? {
                let close = self.next_token()?.span;
                return Ok(Node::new(
                    NodeKind::Sequence(items),
                    Span::new((), open.start..close.end),
                ));
            }
            if !first {
                self.expect_flow_entry(']')?;
                self.check_flow_terminated(open, ']')?;
                if self.check(|token| matches!(token, Token::FlowSequenceEnd))? {
                    continue;
                }
            }
            first = false;

            if self.check(|token| matches!(token, Token::Key | Token::Value))? {
                // `[key: value]` is a single-pair mapping
                let start = self.peek()?.span.start;
                let pair = self.parse_flow_pair(open, ']')?;
                items.push(Node::new(
                    NodeKind::Mapping(vec![pair]),
                    Span::new((), start..self.last_end.max(start)),
                ));
            } else {
                items.push(self.parse_node(false, false)?);
            }
        }
    }

    pub(super) fn parse_flow_mapping(&mut self) -> Result<Node<'input>, ParseError> {
        let open = self.next_token()?.span; // {
        let mut pairs = Vec::new();
        let mut first = true;
        loop {
            self.check_flow_terminated(open, '}')?;
            if self.check(|token| matches!(token, Token::FlowMappingEnd))? {
                let close = self.next_token()?.span;
                return Ok(Node::new(
                    NodeKind::Mapping(pairs),
                    Span::new((), open.start..close.end),
                ));
            }
            if !first {
                self.expect_flow_entry('}')?;
                self.check_flow_terminated(open, '}')?;
                if self.check(|token| matches!(token, Token::FlowMappingEnd))? {
                    continue;
                }
            }
            first = false;
            pairs.push(self.parse_flow_pair(open, '}')?);
        }
    }

    /// Parse `key: value`, `? key : value`, `key` or `: value` inside a flow collection.
    fn parse_flow_pair(
        &mut self,
        open: Span,
        closing: char,
    ) -> Result<(Node<'input>, Node<'input>), ParseError> {
        if self.check(|token| matches!(token, Token::Key))? {
            self.next_token()?;
        }
        self.check_flow_terminated(open, closing)?;
        let key = if self.check(ends_flow_content)? {
            self.empty_node()
        } else {
            self.parse_node(false, false)?
        };

        self.check_flow_terminated(open, closing)?;
        let value = if self.check(|token| matches!(token, Token::Value))? {
            self.next_token()?;
            self.check_flow_terminated(open, closing)?;
            if self.check(ends_flow_content)? {
                self.empty_node()
            } else {
                self.parse_node(false, false)?
            }
        } else {
            self.empty_node()
        };
        Ok((key, value))
    }

    /// Consume the `,` between entries.
    fn expect_flow_entry(&mut self, closing: char) -> Result<(), ParseError> {
        let token = self.next_token()?;
        if token.token == Token::FlowEntry {
            return Ok(());
        }
        let closing = format!("'{closing}'");
        Err(self.unexpected(&token, &["','", closing.as_str()]))
    }

    /// Fail with an unterminated collection error when the document ends
    /// inside the flow collection opened at `open`.
    fn check_flow_terminated(&mut self, open: Span, closing: char) -> Result<(), ParseError> {
        if self.check(ends_flow_collection)? {
            return Err(self.error(ErrorKind::UnterminatedFlowCollection { closing }, open));
        }
        Ok(())
    }
}
