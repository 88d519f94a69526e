// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! YAML 1.2 core schema resolution.
//!
//! Converts a node tree into a [`Value`] tree. Only untagged plain scalars
//! are coerced; quoted and block scalars always resolve to strings.

use log::debug;
use num_bigint::BigInt;

use crate::error::{ErrorKind, ParseError};
use crate::node::{Node, NodeKind};
use crate::options::{DuplicateKeys, IntegerOverflow, LoadOptions};
use crate::parser::CORE_TAG_PREFIX;
use crate::span::Span;
use crate::token::ScalarStyle;
use crate::value::{Mapping, Value};

/// The core schema tags the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoreTag {
    Str,
    Null,
    Bool,
    Int,
    Float,
    Seq,
    Map,
}

impl CoreTag {
    fn from_tag(tag: &str) -> Option<Self> {
        if tag == "!" {
            return Some(Self::Str);
        }
        match tag.strip_prefix(CORE_TAG_PREFIX)? {
            "str" => Some(Self::Str),
            "null" => Some(Self::Null),
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "seq" => Some(Self::Seq),
            "map" => Some(Self::Map),
            _ => None,
        }
    }
}

/// Resolves node trees into values.
#[derive(Debug)]
pub struct Resolver<'a> {
    options: LoadOptions,
    input: &'a str,
}

impl<'a> Resolver<'a> {
    /// `input` is the source text the nodes were parsed from; it is used to
    /// locate errors.
    #[must_use]
    pub const fn new(options: &LoadOptions, input: &'a str) -> Self {
        Self {
            options: *options,
            input,
        }
    }

    pub fn resolve(&self, node: &Node<'_>) -> Result<Value, ParseError> {
        let tag = match node.tag.as_deref() {
            None => None,
            Some(tag) => {
                let core = CoreTag::from_tag(tag);
                if core.is_none() {
                    debug!("Ignoring unknown tag {tag}");
                }
                core
            }
        };

        match &node.kind {
            NodeKind::Scalar { value, style } => self.resolve_scalar(value, *style, tag, node.span),
            NodeKind::Sequence(items) => {
                self.check_collection_tag(tag, CoreTag::Seq, node)?;
                items
                    .iter()
                    .map(|item| self.resolve(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Sequence)
            }
            NodeKind::Mapping(pairs) => {
                self.check_collection_tag(tag, CoreTag::Map, node)?;
                self.resolve_mapping(pairs)
            }
        }
    }

    fn resolve_mapping(&self, pairs: &[(Node<'_>, Node<'_>)]) -> Result<Value, ParseError> {
        let mut mapping = Mapping::with_capacity(pairs.len());
        for (key_node, value_node) in pairs {
            // A scalar key keeps its text; the resolved value is still checked
            // against the key's tag
            let resolved = self.resolve(key_node)?;
            let key = match key_node.as_scalar() {
                Some((text, _)) => text.to_owned(),
                None => resolved.to_string(),
            };
            let value = self.resolve(value_node)?;
            if mapping.contains_key(&key) {
                match self.options.duplicate_keys {
                    DuplicateKeys::Error => {
                        return Err(self.error(ErrorKind::DuplicateKey(key), key_node.span));
                    }
                    DuplicateKeys::LastWins => {
                        debug!("Duplicate key '{key}' overwrites the earlier value");
                    }
                }
            }
            // Replacing keeps the position of the first occurrence
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn check_collection_tag(
        &self,
        tag: Option<CoreTag>,
        expected: CoreTag,
        node: &Node<'_>,
    ) -> Result<(), ParseError> {
        match tag {
            Some(tag) if tag != expected => {
                let found = if expected == CoreTag::Seq { "sequence" } else { "mapping" };
                Err(self.invalid_tagged_value(node, found))
            }
            _ => Ok(()),
        }
    }

    fn resolve_scalar(
        &self,
        text: &str,
        style: ScalarStyle,
        tag: Option<CoreTag>,
        span: Span,
    ) -> Result<Value, ParseError> {
        let invalid = |tag: CoreTag| {
            let name = format!("{tag:?}").to_lowercase();
            self.error(
                ErrorKind::InvalidTaggedValue {
                    tag: format!("!!{name}"),
                    value: text.to_owned(),
                },
                span,
            )
        };

        match tag {
            None if style.is_plain() => self.resolve_plain(text, span),
            None | Some(CoreTag::Str) => Ok(Value::String(text.to_owned())),
            Some(CoreTag::Null) => parse_null(text).ok_or_else(|| invalid(CoreTag::Null)),
            Some(CoreTag::Bool) => parse_bool(text)
                .map(Value::Bool)
                .ok_or_else(|| invalid(CoreTag::Bool)),
            Some(CoreTag::Int) => match self.parse_int(text, span)? {
                Some(value) => Ok(value),
                None => Err(invalid(CoreTag::Int)),
            },
            Some(CoreTag::Float) => {
                if let Some(value) = parse_float(text) {
                    return Ok(Value::Float(value));
                }
                // `!!float 1` is the float 1.0
                match self.parse_int(text, span)? {
                    Some(Value::Int(value)) => Ok(Value::Float(int_to_float(value))),
                    _ => Err(invalid(CoreTag::Float)),
                }
            }
            Some(tag @ (CoreTag::Seq | CoreTag::Map)) => Err(invalid(tag)),
        }
    }

    /// Core schema resolution of an untagged plain scalar.
    fn resolve_plain(&self, text: &str, span: Span) -> Result<Value, ParseError> {
        if let Some(null) = parse_null(text) {
            return Ok(null);
        }
        if let Some(value) = parse_bool(text) {
            return Ok(Value::Bool(value));
        }
        if let Some(value) = self.parse_int(text, span)? {
            return Ok(value);
        }
        if let Some(value) = parse_float(text) {
            return Ok(Value::Float(value));
        }
        Ok(Value::String(text.to_owned()))
    }

    /// Parse a core schema integer. Returns `None` when `text` is not an
    /// integer literal, and an error when it overflows in strict mode.
    fn parse_int(&self, text: &str, span: Span) -> Result<Option<Value>, ParseError> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, text.get(1..).unwrap_or_default()),
            Some(b'+') => (false, text.get(1..).unwrap_or_default()),
            _ => (false, text),
        };
        let (radix, digits) = if let Some(digits) = unsigned.strip_prefix("0o") {
            (8, digits)
        } else if let Some(digits) = unsigned.strip_prefix("0x") {
            (16, digits)
        } else {
            (10, unsigned)
        };
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
            return Ok(None);
        }

        let magnitude = u64::from_str_radix(digits, radix).ok();
        let value = magnitude.and_then(|magnitude| {
            if negative {
                0_i64.checked_sub_unsigned(magnitude)
            } else {
                i64::try_from(magnitude).ok()
            }
        });
        if let Some(value) = value {
            return Ok(Some(Value::Int(value)));
        }

        match self.options.integer_overflow {
            IntegerOverflow::Error => Err(self.error(ErrorKind::IntegerOverflow(text.to_owned()), span)),
            IntegerOverflow::Promote => {
                let big = BigInt::parse_bytes(digits.as_bytes(), radix)
                    .map(|big| if negative { -big } else { big });
                Ok(big.map(Value::BigInt))
            }
        }
    }

    fn invalid_tagged_value(&self, node: &Node<'_>, value: &str) -> ParseError {
        self.error(
            ErrorKind::InvalidTaggedValue {
                tag: node.tag.clone().unwrap_or_default(),
                value: value.to_owned(),
            },
            node.span,
        )
    }

    fn error(&self, kind: ErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span).located(self.input)
    }
}

fn parse_null(text: &str) -> Option<Value> {
    matches!(text, "" | "~" | "null" | "Null" | "NULL").then_some(Value::Null)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// `[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?`, `[-+]?.inf` and `.nan`.
fn parse_float(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => return Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => return Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Some(f64::NAN),
        _ => {}
    }

    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (unsigned.get(..idx)?, unsigned.get(idx + 1..)),
        None => (unsigned, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };
    let all_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    let mantissa_valid = match fraction {
        // `.5`, `1.`, `1.5`
        Some(fraction) => {
            all_digits(integer)
                && all_digits(fraction)
                && !(integer.is_empty() && fraction.is_empty())
        }
        None => !integer.is_empty() && all_digits(integer),
    };
    let exponent_valid = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['-', '+']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });
    if !mantissa_valid || !exponent_valid {
        return None;
    }
    // Rust's float parser rejects a bare trailing dot before an exponent
    let normalized = if integer.is_empty() || fraction == Some("") {
        let sign = if text.starts_with('-') { "-" } else { "" };
        let exponent = exponent.map(|exponent| format!("e{exponent}")).unwrap_or_default();
        format!(
            "{sign}{}.{}{exponent}",
            if integer.is_empty() { "0" } else { integer },
            fraction.filter(|fraction| !fraction.is_empty()).unwrap_or("0")
        )
    } else {
        text.to_owned()
    };
    normalized.parse().ok()
}

/// Integers beyond 2^53 lose precision.
#[allow(clippy::cast_precision_loss, reason = "Integers beyond 2^53 round to the nearest float")]
fn int_to_float(value: i64) -> f64 {
    value as f64
}
