// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! YAML parser.
//!
//! This module implements the second phase of loading: converting the token
//! stream into one node tree per document. The grammar is predictive
//! recursive descent over the scanner's tokens; block structure arrives
//! already resolved into `BlockSequenceStart`/`BlockMappingStart`/`BlockEnd`
//! tokens, so no indentation bookkeeping is needed here.
//!
//! Anchors and tags are node properties. `&anchor key: value` attaches the
//! anchor to the key scalar, not to the mapping.

mod block;
mod flow;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use chumsky::span::Span as _;
use log::{debug, warn};

use crate::error::{ErrorKind, ParseError};
use crate::node::{Node, NodeKind};
use crate::options::LoadOptions;
use crate::scanner::{Scanner, scan};
use crate::span::Span;
use crate::token::{RichToken, Token};

/// Tag prefix of the `!!` handle.
pub const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Parse every document of `input` with default limits.
pub fn parse_stream(input: &str) -> Result<Vec<Node<'_>>, ParseError> {
    let mut parser = Parser::new(scan(input), input);
    let mut documents = Vec::new();
    while let Some(document) = parser.next_document()? {
        documents.push(document);
    }
    Ok(documents)
}

/// Pending node properties (anchor, tag) collected before the node content.
#[derive(Debug, Default)]
struct NodeProperties<'input> {
    anchor: Option<(Cow<'input, str>, Span)>,
    tag: Option<(String, Span)>,
}

impl<'input> NodeProperties<'input> {
    const fn is_empty(&self) -> bool {
        self.anchor.is_none() && self.tag.is_none()
    }

    /// End offset of the last property.
    fn end(&self) -> Option<usize> {
        let anchor_end = self.anchor.as_ref().map(|(_, span)| span.end);
        let tag_end = self.tag.as_ref().map(|(_, span)| span.end);
        anchor_end.max(tag_end)
    }

    /// Apply these properties to a node, extending its span to include them.
    fn apply_to(self, mut node: Node<'input>) -> Node<'input> {
        if let Some((anchor, anchor_span)) = self.anchor {
            node = node.with_anchor(anchor);
            if anchor_span.start < node.span.start {
                node.span = Span::new((), anchor_span.start..node.span.end);
            }
        }
        if let Some((tag, tag_span)) = self.tag {
            node = node.with_tag(tag);
            if tag_span.start < node.span.start {
                node.span = Span::new((), tag_span.start..node.span.end);
            }
        }
        node
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StreamStart,
    Documents,
    StreamEnd,
}

/// Streaming document parser.
#[derive(Debug)]
pub struct Parser<'input> {
    scanner: Scanner<'input>,
    input: &'input str,
    peeked: Option<RichToken<'input>>,
    state: State,
    /// The last consumed marker was `...`.
    after_document_end: bool,
    /// End offset of the last consumed token with source text.
    last_end: usize,
    max_depth: usize,
    max_alias_nodes: usize,
    depth: usize,
    /// Nodes copied through aliases in the current document.
    alias_nodes: usize,
    /// Map of anchor names to their nodes (for alias resolution)
    anchors: HashMap<String, Node<'input>>,
    /// Tag handles of the current document, `%TAG` declarations included.
    tag_handles: HashMap<String, String>,
}

impl<'input> Parser<'input> {
    #[must_use]
    pub fn new(scanner: Scanner<'input>, input: &'input str) -> Self {
        let defaults = LoadOptions::default();
        Self {
            scanner,
            input,
            peeked: None,
            state: State::StreamStart,
            after_document_end: false,
            last_end: 0,
            max_depth: defaults.max_depth,
            max_alias_nodes: defaults.max_alias_nodes,
            depth: 0,
            alias_nodes: 0,
            anchors: HashMap::new(),
            tag_handles: default_tag_handles(),
        }
    }

    /// Take the nesting and alias limits from `options`.
    #[must_use]
    pub const fn with_options(mut self, options: &LoadOptions) -> Self {
        self.max_depth = options.max_depth;
        self.max_alias_nodes = options.max_alias_nodes;
        self
    }

    /// Parse the next document's root node. Returns `None` at the end of the stream.
    pub fn next_document(&mut self) -> Result<Option<Node<'input>>, ParseError> {
        match self.state {
            State::StreamEnd => return Ok(None),
            State::StreamStart => {
                let token = self.next_token()?;
                if token.token != Token::StreamStart {
                    return Err(self.unexpected(&token, &["start of stream"]));
                }
                self.state = State::Documents;
            }
            State::Documents => {}
        }

        while self.check(|token| matches!(token, Token::DocumentEnd))? {
            let token = self.next_token()?;
            if self.after_document_end {
                return Err(self.error(ErrorKind::DuplicateDocumentEnd, token.span));
            }
            self.after_document_end = true;
        }

        if self.check(|token| matches!(token, Token::StreamEnd))? {
            self.next_token()?;
            self.state = State::StreamEnd;
            return Ok(None);
        }

        self.anchors.clear();
        self.alias_nodes = 0;
        self.parse_directives()?;

        let root = if self.check(|token| matches!(token, Token::DocumentStart))? {
            let marker = self.next_token()?;
            debug!("Explicit document at {}", marker.position);
            if self.check(is_document_boundary)? {
                Node::null(Span::new((), marker.span.end..marker.span.end))
            } else {
                self.parse_node(true, false)?
            }
        } else {
            let position = self.peek()?.position;
            debug!("Implicit document at {position}");
            self.parse_node(true, false)?
        };

        self.after_document_end = false;
        if self.check(|token| matches!(token, Token::DocumentEnd))? {
            self.next_token()?;
            self.after_document_end = true;
        } else if !self.check(|token| matches!(token, Token::DocumentStart | Token::StreamEnd))? {
            let token = self.next_token()?;
            return Err(self.unexpected(&token, &["'...'", "'---'", "end of stream"]));
        }

        Ok(Some(root))
    }

    /// Process the directives of a document prolog. Directives must be
    /// followed by `---`.
    fn parse_directives(&mut self) -> Result<(), ParseError> {
        self.tag_handles = default_tag_handles();
        let mut version_seen = false;
        let mut declared = HashSet::new();
        let mut first_directive = None;

        while self.check(|token| {
            matches!(
                token,
                Token::VersionDirective { .. }
                    | Token::TagDirective { .. }
                    | Token::ReservedDirective(_)
            )
        })? {
            let token = self.next_token()?;
            first_directive.get_or_insert(token.span);
            match token.token {
                Token::VersionDirective { major, minor } => {
                    if version_seen {
                        return Err(
                            self.error(ErrorKind::DuplicateDirective("YAML".to_owned()), token.span)
                        );
                    }
                    version_seen = true;
                    if major != 1 {
                        return Err(
                            self.error(ErrorKind::UnsupportedVersion { major, minor }, token.span)
                        );
                    }
                    if minor > 2 {
                        warn!("Unsupported YAML version {major}.{minor}, loading as 1.2");
                    }
                }
                Token::TagDirective { handle, prefix } => {
                    if !declared.insert(handle.to_string()) {
                        return Err(self.error(
                            ErrorKind::DuplicateDirective(format!("TAG {handle}")),
                            token.span,
                        ));
                    }
                    self.tag_handles
                        .insert(handle.into_owned(), prefix.into_owned());
                }
                Token::ReservedDirective(name) => {
                    debug!("Ignoring reserved directive %{name}");
                }
                _ => {}
            }
        }

        if let Some(span) = first_directive
            && !self.check(|token| matches!(token, Token::DocumentStart))?
        {
            return Err(self.error(ErrorKind::MissingDocumentStart, span));
        }
        Ok(())
    }

    /// Parse a node.
    ///
    /// `block` allows block collections; `indentless` additionally allows a
    /// block sequence at the indentation of its parent mapping key.
    fn parse_node(&mut self, block: bool, indentless: bool) -> Result<Node<'input>, ParseError> {
        if self.check(|token| matches!(token, Token::Alias(_)))? {
            let token = self.next_token()?;
            let Token::Alias(name) = token.token else {
                return Err(self.error(ErrorKind::UnexpectedToken, token.span));
            };
            return self.resolve_alias(&name, token.span);
        }

        let properties = self.parse_properties()?;
        if self.check(|token| matches!(token, Token::Alias(_)))? {
            let token = self.next_token()?;
            return Err(self.error(ErrorKind::PropertiesOnAlias, token.span));
        }

        self.depth += 1;
        if self.depth > self.max_depth {
            let span = self.peek()?.span;
            return Err(self.error(ErrorKind::DepthLimitExceeded(self.max_depth), span));
        }
        let content = self.parse_node_content(block, indentless, &properties);
        self.depth -= 1;

        let node = properties.apply_to(content?);
        if let Some(anchor) = &node.anchor {
            self.anchors.insert(anchor.to_string(), node.clone());
        }
        Ok(node)
    }

    fn parse_node_content(
        &mut self,
        block: bool,
        indentless: bool,
        properties: &NodeProperties<'input>,
    ) -> Result<Node<'input>, ParseError> {
        let token = self.peek()?;
        match &token.token {
            Token::BlockEntry if indentless => self.parse_indentless_sequence(),
            Token::Scalar { .. } => {
                let token = self.next_token()?;
                let Token::Scalar { value, style } = token.token else {
                    return Err(self.error(ErrorKind::UnexpectedToken, token.span));
                };
                Ok(Node::new(NodeKind::Scalar { value, style }, token.span))
            }
            Token::FlowSequenceStart => self.parse_flow_sequence(),
            Token::FlowMappingStart => self.parse_flow_mapping(),
            Token::BlockSequenceStart if block => self.parse_block_sequence(),
            Token::BlockMappingStart if block => self.parse_block_mapping(),
            _ if !properties.is_empty() => {
                // Properties without content tag an empty scalar
                let end = properties.end().unwrap_or(self.last_end);
                Ok(Node::null(Span::new((), end..end)))
            }
            _ => {
                let token = self.next_token()?;
                Err(self.unexpected(&token, &["node content"]))
            }
        }
    }

    fn parse_properties(&mut self) -> Result<NodeProperties<'input>, ParseError> {
        let mut properties = NodeProperties::default();
        loop {
            if self.check(|token| matches!(token, Token::Anchor(_)))? {
                let token = self.next_token()?;
                let Token::Anchor(name) = token.token else {
                    return Err(self.error(ErrorKind::UnexpectedToken, token.span));
                };
                if let Some((first, _)) = &properties.anchor {
                    return Err(self.error(
                        ErrorKind::DuplicateAnchor {
                            first: first.to_string(),
                            second: name.into_owned(),
                        },
                        token.span,
                    ));
                }
                properties.anchor = Some((name, token.span));
            } else if self.check(|token| matches!(token, Token::Tag { .. }))? {
                let token = self.next_token()?;
                let Token::Tag { handle, suffix } = &token.token else {
                    return Err(self.error(ErrorKind::UnexpectedToken, token.span));
                };
                let tag = self.expand_tag(handle, suffix, token.span)?;
                if let Some((first, _)) = &properties.tag {
                    return Err(self.error(
                        ErrorKind::DuplicateTag {
                            first: first.clone(),
                            second: tag,
                        },
                        token.span,
                    ));
                }
                properties.tag = Some((tag, token.span));
            } else {
                return Ok(properties);
            }
        }
    }

    /// Expand a tag handle with the prefixes known to the current document.
    fn expand_tag(&self, handle: &str, suffix: &str, span: Span) -> Result<String, ParseError> {
        // Verbatim `!<...>` and the non-specific `!` are taken as is
        if handle.is_empty() {
            return Ok(suffix.to_owned());
        }
        if handle == "!" && suffix.is_empty() {
            return Ok("!".to_owned());
        }
        match self.tag_handles.get(handle) {
            Some(prefix) => Ok(format!("{prefix}{suffix}")),
            None => Err(self.error(ErrorKind::UndefinedTagHandle(handle.to_owned()), span)),
        }
    }

    /// Replace an alias with a copy of its anchored node.
    fn resolve_alias(&mut self, name: &str, span: Span) -> Result<Node<'input>, ParseError> {
        let Some(anchored) = self.anchors.get(name) else {
            return Err(self.error(ErrorKind::UndefinedAlias(name.to_owned()), span));
        };
        self.alias_nodes = self.alias_nodes.saturating_add(anchored.node_count());
        if self.alias_nodes > self.max_alias_nodes {
            return Err(self.error(ErrorKind::AliasLimitExceeded(self.max_alias_nodes), span));
        }
        let mut node = anchored.clone();
        node.span = span;
        Ok(node)
    }

    /// Peek at the next token that is not a comment.
    fn peek(&mut self) -> Result<&RichToken<'input>, ParseError> {
        if self.peeked.is_none() {
            let token = loop {
                match self.scanner.next() {
                    Some(Ok(RichToken {
                        token: Token::Comment(_),
                        ..
                    })) => {}
                    Some(Ok(token)) => break token,
                    Some(Err(err)) => return Err(err),
                    None => {
                        let end = self.input.len();
                        break RichToken::new(
                            Token::StreamEnd,
                            Span::new((), end..end),
                            crate::span::Position::from_offset(self.input, end),
                        );
                    }
                }
            };
            self.peeked = Some(token);
        }
        self.peeked
            .as_ref()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedToken, Span::new((), 0..0)))
    }

    /// Consume the next token that is not a comment.
    fn next_token(&mut self) -> Result<RichToken<'input>, ParseError> {
        self.peek()?;
        let token = self
            .peeked
            .take()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedToken, Span::new((), 0..0)))?;
        if token.token != Token::BlockEnd {
            self.last_end = self.last_end.max(token.span.end);
        }
        Ok(token)
    }

    /// Check whether the next token matches `predicate` without consuming it.
    fn check(&mut self, predicate: impl Fn(&Token<'input>) -> bool) -> Result<bool, ParseError> {
        Ok(predicate(&self.peek()?.token))
    }

    /// An empty node at the end of the last consumed token.
    fn empty_node(&self) -> Node<'input> {
        Node::null(Span::new((), self.last_end..self.last_end))
    }

    fn error(&self, kind: ErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span).located(self.input)
    }

    fn unexpected(&self, token: &RichToken<'input>, expected: &[&str]) -> ParseError {
        ParseError::new(ErrorKind::UnexpectedToken, token.span)
            .with_found(token.to_string())
            .with_expected(expected.iter().map(ToString::to_string).collect())
            .located(self.input)
    }
}

fn default_tag_handles() -> HashMap<String, String> {
    HashMap::from([
        ("!".to_owned(), "!".to_owned()),
        ("!!".to_owned(), CORE_TAG_PREFIX.to_owned()),
    ])
}

/// Tokens that end a document's content.
fn is_document_boundary(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::DocumentStart
            | Token::DocumentEnd
            | Token::StreamEnd
            | Token::VersionDirective { .. }
            | Token::TagDirective { .. }
            | Token::ReservedDirective(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::token::ScalarStyle;

    fn parse(input: &str) -> Vec<Node<'_>> {
        parse_stream(input).unwrap()
    }

    fn parse_err(input: &str) -> ParseError {
        parse_stream(input).unwrap_err()
    }

    fn scalar_text<'a>(node: &'a Node<'_>) -> &'a str {
        node.as_scalar().map(|(value, _)| value).unwrap()
    }

    #[test]
    fn test_empty_stream_has_no_documents() {
        for input in ["", "   \n  ", "# only a comment\n"] {
            assert!(parse(input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn test_implicit_document() {
        let docs = parse("hello");
        assert_eq!(docs.len(), 1);
        assert_eq!(scalar_text(&docs[0]), "hello");
    }

    #[test]
    fn test_multiple_documents() {
        let docs = parse("---\nA\n---\nB\n---\nC");
        let texts: Vec<&str> = docs.iter().map(scalar_text).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_explicit_document_is_null_scalar() {
        let docs = parse("---\n---\na");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].as_scalar(), Some(("", ScalarStyle::Plain)));
    }

    #[test]
    fn test_document_end_markers() {
        let docs = parse("a\n...\nb\n...\n");
        assert_eq!(docs.len(), 2);
        // A single leading marker is ignored
        assert_eq!(parse("...\na").len(), 1);
    }

    #[test]
    fn test_duplicate_document_end() {
        let err = parse_err("a\n...\n...\n");
        assert_eq!(err.kind, ErrorKind::DuplicateDocumentEnd);
        assert_eq!(err.category(), ErrorCategory::Syntax);
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_block_mapping_structure() {
        let docs = parse("a: 1\nb:\n  c: 2\n  d: [x, y]\n");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(pairs.len(), 2);
        assert_eq!(scalar_text(&pairs[0].0), "a");
        let NodeKind::Mapping(inner) = &pairs[1].1.kind else {
            panic!("expected nested mapping");
        };
        assert!(matches!(&inner[1].1.kind, NodeKind::Sequence(items) if items.len() == 2));
    }

    #[test]
    fn test_missing_values_are_empty_nodes() {
        let docs = parse("a:\nb:\n- \n");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(scalar_text(&pairs[0].1), "");
        assert!(matches!(&pairs[1].1.kind, NodeKind::Sequence(items) if scalar_text(&items[0]).is_empty()));
    }

    #[test]
    fn test_explicit_keys() {
        let docs = parse("? a\n: 1\n? b\n");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(scalar_text(&pairs[0].1), "1");
        assert_eq!(scalar_text(&pairs[1].0), "b");
        assert_eq!(scalar_text(&pairs[1].1), "");
    }

    #[test]
    fn test_flow_sequence_pair_becomes_single_pair_mapping() {
        let docs = parse("[a: 1, b]");
        let NodeKind::Sequence(items) = &docs[0].kind else {
            panic!("expected sequence");
        };
        assert!(matches!(&items[0].kind, NodeKind::Mapping(pairs) if pairs.len() == 1));
        assert_eq!(scalar_text(&items[1]), "b");
    }

    #[test]
    fn test_flow_mapping_entries() {
        let docs = parse("{a: 1, b, c: , }");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(pairs.len(), 3);
        assert_eq!(scalar_text(&pairs[1].1), "");
        assert_eq!(scalar_text(&pairs[2].1), "");
    }

    #[test]
    fn test_anchor_and_alias() {
        let docs = parse("a: &x [1, 2]\nb: *x\n");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(pairs[0].1.anchor.as_deref(), Some("x"));
        assert_eq!(pairs[0].1.kind, pairs[1].1.kind);
    }

    #[test]
    fn test_anchor_on_key_attaches_to_key() {
        let docs = parse("&k key: value");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert!(docs[0].anchor.is_none());
        assert_eq!(pairs[0].0.anchor.as_deref(), Some("k"));
    }

    #[test]
    fn test_anchors_do_not_cross_documents() {
        let err = parse_err("--- &a 1\n--- *a\n");
        assert_eq!(err.kind, ErrorKind::UndefinedAlias("a".to_owned()));
        assert_eq!(err.category(), ErrorCategory::Syntax);
    }

    #[test]
    fn test_tag_expansion() {
        let docs = parse("%TAG !e! tag:example.com,2000:\n---\n- !!str 1\n- !e!thing x\n- !local y\n- ! z\n- !<tag:v> w\n");
        let NodeKind::Sequence(items) = &docs[0].kind else {
            panic!("expected sequence");
        };
        let tags: Vec<Option<&str>> = items.iter().map(|item| item.tag.as_deref()).collect();
        assert_eq!(
            tags,
            vec![
                Some("tag:yaml.org,2002:str"),
                Some("tag:example.com,2000:thing"),
                Some("!local"),
                Some("!"),
                Some("tag:v"),
            ]
        );
    }

    #[test]
    fn test_tag_handles_reset_per_document() {
        let err = parse_err("%TAG !e! tag:e:\n--- !e!a x\n--- !e!b y\n");
        assert_eq!(err.kind, ErrorKind::UndefinedTagHandle("!e!".to_owned()));
    }

    #[test]
    fn test_properties_without_content() {
        let docs = parse("a: !!str\nb: &x\n");
        let NodeKind::Mapping(pairs) = &docs[0].kind else {
            panic!("expected mapping");
        };
        assert_eq!(pairs[0].1.tag.as_deref(), Some("tag:yaml.org,2002:str"));
        assert_eq!(scalar_text(&pairs[0].1), "");
        assert_eq!(pairs[1].1.anchor.as_deref(), Some("x"));
    }

    #[test]
    fn test_directive_errors() {
        let test_cases = [
            ("%YAML 1.2\n%YAML 1.2\n---\na", ErrorKind::DuplicateDirective("YAML".to_owned())),
            ("%YAML 2.0\n---\na", ErrorKind::UnsupportedVersion { major: 2, minor: 0 }),
            ("%YAML 1.2\na", ErrorKind::MissingDocumentStart),
            (
                "%TAG !e! a:\n%TAG !e! b:\n---\nx",
                ErrorKind::DuplicateDirective("TAG !e!".to_owned()),
            ),
        ];
        for (input, expected) in test_cases {
            assert_eq!(parse_err(input).kind, expected, "{input:?}");
        }
    }

    #[test]
    fn test_newer_minor_version_is_accepted() {
        assert_eq!(parse("%YAML 1.3\n--- a").len(), 1);
    }

    #[test]
    fn test_unterminated_flow_collection_points_at_opening_bracket() {
        let test_cases = [("key: [1, 2", ']', 6), ("{a: 1", '}', 1), ("[a, ", ']', 1)];
        for (input, closing, column) in test_cases {
            let err = parse_err(input);
            assert_eq!(err.kind, ErrorKind::UnterminatedFlowCollection { closing }, "{input:?}");
            assert_eq!(err.column(), column, "{input:?}");
        }
    }

    #[test]
    fn test_unexpected_token_describes_found_and_expected() {
        let err = parse_err("{a: 1]");
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.found.as_deref(), Some("']'"));
        assert_eq!(err.expected, vec!["','", "'}'"]);
    }

    #[test]
    fn test_duplicate_properties() {
        assert!(matches!(
            parse_err("&a &b x").kind,
            ErrorKind::DuplicateAnchor { .. }
        ));
        assert!(matches!(
            parse_err("!!str !!int x").kind,
            ErrorKind::DuplicateTag { .. }
        ));
        assert_eq!(parse_err("a: &x 1\nb: &y *x").kind, ErrorKind::PropertiesOnAlias);
    }

    #[test]
    fn test_depth_limit() {
        let input = "[".repeat(20) + &"]".repeat(20);
        let mut parser = Parser::new(scan(&input), &input).with_options(&LoadOptions {
            max_depth: 10,
            ..LoadOptions::default()
        });
        let err = parser.next_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthLimitExceeded(10));
        assert_eq!(err.category(), ErrorCategory::Limit);
    }

    #[test]
    fn test_alias_expansion_limit() {
        let input = "a: &a [x, x, x, x]\nb: &b [*a, *a, *a, *a]\nc: [*b, *b, *b, *b]\n";
        let mut parser = Parser::new(scan(input), input).with_options(&LoadOptions {
            max_alias_nodes: 50,
            ..LoadOptions::default()
        });
        let err = parser.next_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::AliasLimitExceeded(50));
    }

    #[test]
    fn test_content_after_document_is_rejected() {
        let err = parse_err("--- {a: 1}\n%YAML 1.2\n---\nb");
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        // After `...` the directive starts the next document
        assert_eq!(parse("--- {a: 1}\n...\n%YAML 1.2\n---\nb").len(), 2);
    }
}
