// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Representation graph produced by the parser.
//!
//! A [`Node`] carries its properties (anchor, tag) separately from its
//! content. Aliases never appear here: the parser replaces every `*name`
//! with a copy of the anchored node, so the resolver only sees a tree.
//!
//! Scalar content uses `Cow<'input, str>` so plain scalars can borrow from
//! the input.

use std::borrow::Cow;

use crate::span::Span;
use crate::token::ScalarStyle;

/// A YAML node with optional properties and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'input> {
    /// Anchor name (from `&name`)
    pub anchor: Option<Cow<'input, str>>,
    /// Fully expanded tag, e.g. `tag:yaml.org,2002:str` for `!!str`
    pub tag: Option<String>,
    /// The node's content
    pub kind: NodeKind<'input>,
    /// Source span covering the node including its properties
    pub span: Span,
}

/// Node content.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'input> {
    Scalar {
        value: Cow<'input, str>,
        style: ScalarStyle,
    },
    Sequence(Vec<Node<'input>>),
    /// Key/value pairs in source order. Duplicate keys are kept here and
    /// handled during resolution.
    Mapping(Vec<(Node<'input>, Node<'input>)>),
}

impl<'input> Node<'input> {
    /// Create a new node without properties.
    #[must_use]
    pub const fn new(kind: NodeKind<'input>, span: Span) -> Self {
        Self {
            anchor: None,
            tag: None,
            kind,
            span,
        }
    }

    /// An empty plain scalar, which resolves to null.
    #[must_use]
    pub const fn null(span: Span) -> Self {
        Self::new(
            NodeKind::Scalar {
                value: Cow::Borrowed(""),
                style: ScalarStyle::Plain,
            },
            span,
        )
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Cow<'input, str>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: String) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + match &self.kind {
            NodeKind::Scalar { .. } => 0,
            NodeKind::Sequence(items) => items.iter().map(Node::node_count).sum(),
            NodeKind::Mapping(pairs) => pairs
                .iter()
                .map(|(key, value)| key.node_count() + value.node_count())
                .sum(),
        }
    }

    /// Returns the scalar content if this is a scalar node.
    #[must_use]
    pub fn as_scalar(&self) -> Option<(&str, ScalarStyle)> {
        match &self.kind {
            NodeKind::Scalar { value, style } => Some((value, *style)),
            _ => None,
        }
    }

    /// Convert this node to an owned version with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> Node<'static> {
        let kind = match self.kind {
            NodeKind::Scalar { value, style } => NodeKind::Scalar {
                value: Cow::Owned(value.into_owned()),
                style,
            },
            NodeKind::Sequence(items) => {
                NodeKind::Sequence(items.into_iter().map(Node::into_owned).collect())
            }
            NodeKind::Mapping(pairs) => NodeKind::Mapping(
                pairs
                    .into_iter()
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect(),
            ),
        };
        Node {
            anchor: self.anchor.map(|cow| Cow::Owned(cow.into_owned())),
            tag: self.tag,
            kind,
            span: self.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::span::Span as _;

    fn scalar(value: &str) -> Node<'_> {
        Node::new(
            NodeKind::Scalar {
                value: Cow::Borrowed(value),
                style: ScalarStyle::Plain,
            },
            Span::new((), 0..value.len()),
        )
    }

    #[test]
    fn test_null_node_is_empty_plain_scalar() {
        let node = Node::null(Span::new((), 3..3));
        assert_eq!(node.as_scalar(), Some(("", ScalarStyle::Plain)));
        assert!(node.anchor.is_none());
        assert!(node.tag.is_none());
    }

    #[test]
    fn test_node_count() {
        let mapping = Node::new(
            NodeKind::Mapping(vec![
                (scalar("a"), scalar("1")),
                (
                    scalar("b"),
                    Node::new(
                        NodeKind::Sequence(vec![scalar("x"), scalar("y")]),
                        Span::new((), 0..0),
                    ),
                ),
            ]),
            Span::new((), 0..0),
        );
        assert_eq!(mapping.node_count(), 7);
    }

    #[test]
    fn test_properties() {
        let node = scalar("v")
            .with_anchor(Cow::Borrowed("a"))
            .with_tag("tag:yaml.org,2002:str".to_owned());
        assert_eq!(node.anchor.as_deref(), Some("a"));
        assert_eq!(node.tag.as_deref(), Some("tag:yaml.org,2002:str"));
        let owned: Node<'static> = node.clone().into_owned();
        assert_eq!(owned, node);
    }
}
