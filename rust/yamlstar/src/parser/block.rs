// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Block structure parsing (block sequences and mappings).

use chumsky::span::Span as _;

use crate::error::ParseError;
use crate::node::{Node, NodeKind};
use crate::span::Span;
use crate::token::Token;

use super::Parser;

/// Tokens after which a block entry, key or value has no content.
fn ends_block_content(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::BlockEntry | Token::Key | Token::Value | Token::BlockEnd
    )
}

impl<'input> Parser<'input> {
    /// Parse a block sequence: `- item` lines at one indentation.
    pub(super) fn parse_block_sequence(&mut self) -> Result<Node<'input>, ParseError> {
        let start = self.next_token()?.span.start; // BlockSequenceStart
        let mut items = Vec::new();
        loop {
            if self.check(|token| matches!(token, Token::BlockEntry))? {
                self.next_token()?;
                let item = if self.check(|token| matches!(token, Token::BlockEntry | Token::BlockEnd))? {
                    self.empty_node()
                } else {
                    self.parse_node(true, false)?
                };
                items.push(item);
            } else if self.check(|token| matches!(token, Token::BlockEnd))? {
                self.next_token()?;
                return Ok(Node::new(
                    NodeKind::Sequence(items),
                    Span::new((), start..self.last_end.max(start)),
                ));
            } else {
                let token = self.next_token()?;
                return Err(self.unexpected(&token, &["'-'", "end of block"]));
            }
        }
    }

    /// Parse a sequence whose `-` entries sit at the indentation of the
    /// enclosing mapping key:
    ///
    /// ```yaml
    /// key:
    /// - item
    /// ```
    pub(super) fn parse_indentless_sequence(&mut self) -> Result<Node<'input>, ParseError> {
        let start = self.peek()?.span.start;
        let mut items = Vec::new();
        while self.check(|token| matches!(token, Token::BlockEntry))? {
            self.next_token()?;
            let item = if self.check(ends_block_content)? {
                self.empty_node()
            } else {
                self.parse_node(true, false)?
            };
            items.push(item);
        }
        Ok(Node::new(
            NodeKind::Sequence(items),
            Span::new((), start..self.last_end.max(start)),
        ))
    }

    /// Parse a block mapping of implicit (`key: value`) and explicit
    /// (`? key` / `: value`) entries.
    pub(super) fn parse_block_mapping(&mut self) -> Result<Node<'input>, ParseError> {
        let start = self.next_token()?.span.start; // BlockMappingStart
        let mut pairs = Vec::new();
        loop {
            let key = if self.check(|token| matches!(token, Token::Key))? {
                self.next_token()?;
                if self.check(ends_block_content)? {
                    self.empty_node()
                } else {
                    self.parse_node(true, true)?
                }
            } else if self.check(|token| matches!(token, Token::Value))? {
                // `: value` with an empty key
                self.empty_node()
            } else if self.check(|token| matches!(token, Token::BlockEnd))? {
                self.next_token()?;
                return Ok(Node::new(
                    NodeKind::Mapping(pairs),
                    Span::new((), start..self.last_end.max(start)),
                ));
            } else {
                let token = self.next_token()?;
                return Err(self.unexpected(&token, &["mapping key", "end of block"]));
            };

            let value = if self.check(|token| matches!(token, Token::Value))? {
                self.next_token()?;
                if self.check(ends_block_content)? {
                    self.empty_node()
                } else {
                    self.parse_node(true, true)?
                }
            } else {
                self.empty_node()
            };
            pairs.push((key, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::node::NodeKind;
    use crate::parser::parse_stream;

    #[test]
    fn test_nested_block_sequences() {
        let docs = parse_stream("- - a\n  - b\n- c\n").unwrap();
        let NodeKind::Sequence(items) = &docs[0].kind else {
            panic!("expected sequence");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0].kind, NodeKind::Sequence(inner) if inner.len() == 2));
    }

    #[test]
    fn test_sequence_of_mappings() {
        let docs = parse_stream("- name: a\n  value: 1\n- name: b\n").unwrap();
        let NodeKind::Sequence(items) = &docs[0].kind else {
            panic!("expected sequence");
        };
        assert!(matches!(&items[0].kind, NodeKind::Mapping(pairs) if pairs.len() == 2));
        assert!(matches!(&items[1].kind, NodeKind::Mapping(pairs) if pairs.len() == 1));
    }

    #[test]
    fn test_indentless_sequence_in_mapping() {
        let docs = parse_stream("a:\n- 1\n- 2\nb: 3\n").unwrap();
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(pairs.len(), 2);
        assert!(matches!(&pairs[0].1.kind, NodeKind::Sequence(items) if items.len() == 2));
    }

    #[test]
    fn test_mapping_span_covers_entries() {
        let input = "a: 1\nb: 2\n";
        let docs = parse_stream(input).unwrap();
        assert_eq!(docs[0].span.start, 0);
        assert_eq!(docs[0].span.end, 9);
    }

    #[test]
    fn test_sibling_at_wrong_indentation() {
        let err = parse_stream("a:\n  - 1\n  b: 2\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.line(), 3);
    }
}
