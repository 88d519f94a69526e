// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Typed values produced by the resolver.
//!
//! [`Value`] is the externally observable result of loading a document. It
//! owns all of its data, so it outlives the input text. Mappings keep their
//! keys in first-occurrence order.

use std::fmt;
use std::ops::Index;

use num_bigint::BigInt;
use ordermap::OrderMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered mapping of stringified keys to values.
pub type Mapping = OrderMap<String, Value>;

static NULL: Value = Value::Null;

/// A resolved YAML value.
#[derive(Debug, Clone, Default, PartialEq, derive_more::From)]
pub enum Value {
    /// `null`, `~` or empty
    #[default]
    #[from(skip)]
    Null,
    Bool(bool),
    Int(i64),
    /// An integer outside of the `i64` range
    BigInt(BigInt),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is a scalar value (anything but a collection).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !self.is_collection()
    }

    /// Returns `true` if this is a collection (sequence or mapping).
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Self::BigInt(value) => Some(value),
            _ => None,
        }
    }

    /// The value as a float. Integers are converted.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Integers beyond 2^53 round to the nearest float")]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Look up a key if this is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?.get(key)
    }
}

/// Missing keys and non-mappings index to `Null`.
impl Index<&str> for Value {
    type Output = Self;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Out of range positions and non-sequences index to `Null`.
impl Index<usize> for Value {
    type Output = Self;

    fn index(&self, index: usize) -> &Self::Output {
        self.as_sequence()
            .and_then(|items| items.get(index))
            .unwrap_or(&NULL)
    }
}

/// Flow style rendering: `null`, `1.0`, `.inf`, `[a, b]`, `{k: v}`.
///
/// Also used to stringify mapping keys.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::BigInt(value) => write!(f, "{value}"),
            Self::Float(value) => {
                if value.is_nan() {
                    write!(f, ".nan")
                } else if value.is_infinite() {
                    write!(f, "{}.inf", if *value < 0.0 { "-" } else { "" })
                } else {
                    write!(f, "{value:?}")
                }
            }
            Self::String(value) => write!(f, "{value}"),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Mapping(mapping) => {
                write!(f, "{{")?;
                for (index, (key, value)) in mapping.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::BigInt(value) => {
                if let Ok(value) = i128::try_from(value) {
                    serializer.serialize_i128(value)
                } else if let Ok(value) = u128::try_from(value) {
                    serializer.serialize_u128(value)
                } else {
                    serializer.serialize_str(&value.to_string())
                }
            }
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(mapping) => serializer.collect_map(mapping),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| Value::BigInt(value.into()), Value::Int))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| Value::BigInt(value.into()), Value::Int))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| Value::BigInt(value.into()), Value::Int))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((key, value)) = map.next_entry::<Value, Value>()? {
            mapping.insert(key.to_string(), value);
        }
        Ok(Value::Mapping(mapping))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, Value)]) -> Value {
        Value::Mapping(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_value_types() {
        assert!(Value::Null.is_null());
        assert!(Value::Null.is_scalar());
        assert!(!Value::Null.is_collection());
        assert!(Value::Bool(true).is_scalar());
        assert!(Value::from(42_i64).is_scalar());
        assert!(Value::Sequence(vec![]).is_collection());
        assert!(Value::Mapping(Mapping::new()).is_collection());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7_i64), Value::Int(7));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("x"), Value::String("x".to_owned()));
        assert_eq!(
            Value::from(BigInt::from(5)),
            Value::BigInt(BigInt::from(5))
        );
    }

    #[test]
    fn test_accessors() {
        let value = mapping(&[("a", Value::Int(1)), ("b", Value::Sequence(vec!["x".into()]))]);
        assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(value["b"][0].as_str(), Some("x"));
        assert!(value["missing"].is_null());
        assert!(value["b"][5].is_null());
        assert!(Value::Int(1)["a"].is_null());
        assert_eq!(Value::Int(2).as_f64(), Some(2.0));
        assert_eq!(Value::Int((1 << 53) + 1).as_f64(), Some(9_007_199_254_740_992.0));
        assert_eq!(Value::Float(2.5).as_i64(), None);
    }

    #[test]
    fn test_display() {
        let test_cases = [
            (Value::Null, "null"),
            (Value::Bool(false), "false"),
            (Value::Int(-3), "-3"),
            (Value::Float(1.0), "1.0"),
            (Value::Float(0.5), "0.5"),
            (Value::Float(f64::INFINITY), ".inf"),
            (Value::Float(f64::NEG_INFINITY), "-.inf"),
            (Value::Float(f64::NAN), ".nan"),
            (Value::from("text"), "text"),
            (Value::Sequence(vec![Value::Int(1), Value::from("a")]), "[1, a]"),
            (
                mapping(&[("k", Value::Null), ("l", Value::Sequence(vec![]))]),
                "{k: null, l: []}",
            ),
        ];
        for (value, expected) in test_cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn test_serialize_to_json() {
        let value = mapping(&[
            ("null", Value::Null),
            ("int", Value::Int(1)),
            ("big", Value::BigInt("170141183460469231731687303715884105728".parse().unwrap())),
            ("huge", Value::BigInt("1".repeat(50).parse().unwrap())),
            ("list", Value::Sequence(vec![Value::Bool(true), Value::Float(0.5)])),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{"null":null,"int":1,"big":170141183460469231731687303715884105728,"huge":"{}","list":[true,0.5]}}"#,
                "1".repeat(50)
            )
        );
    }

    #[test]
    fn test_deserialize_from_json_keeps_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": [null, "s"], "m": 1.5}"#).unwrap();
        let keys: Vec<&String> = value.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(value["a"][1], Value::from("s"));
        assert_eq!(value["m"], Value::Float(1.5));
    }
}
