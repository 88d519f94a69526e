// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Integration tests driving the public loading API.

use serde::Deserialize;
use serde_json::json;
use yamlstar::{
    DuplicateKeys, Error, ErrorCategory, ErrorKind, IntegerOverflow, LoadOptions, Loader, Value,
    documents, from_value, load, load_all, version,
};

/// Re-encode a loaded value as JSON, the way host adapters consume it.
fn to_json(input: &str) -> serde_json::Value {
    serde_json::to_value(load(input).unwrap()).unwrap()
}

#[test]
fn test_scalars() {
    let test_cases = [
        ("hello", json!("hello")),
        ("42", json!(42)),
        ("-3.5", json!(-3.5)),
        ("true", json!(true)),
        ("false", json!(false)),
        ("~", json!(null)),
        ("null", json!(null)),
        ("'quoted 42'", json!("quoted 42")),
        ("\"line\\nbreak\"", json!("line\nbreak")),
    ];
    for (input, expected) in test_cases {
        assert_eq!(to_json(input), expected, "{input:?}");
    }
}

#[test]
fn test_type_coercion() {
    assert_eq!(
        to_json("int: 10\nfloat: 1.0\nstr: '10'\nbool: True\nnull: ~\nhex: 0xff\noctal: 0o10"),
        json!({
            "int": 10,
            "float": 1.0,
            "str": "10",
            "bool": true,
            "null": null,
            "hex": 255,
            "octal": 8,
        })
    );
}

#[test]
fn test_mapping() {
    assert_eq!(
        to_json("name: Alice\nage: 30"),
        json!({"name": "Alice", "age": 30})
    );
}

#[test]
fn test_nested_mapping() {
    assert_eq!(
        to_json("outer:\n  inner: value"),
        json!({"outer": {"inner": "value"}})
    );
}

#[test]
fn test_sequence() {
    assert_eq!(to_json("- a\n- b\n- c"), json!(["a", "b", "c"]));
    assert_eq!(to_json("[1, two, 3.0]"), json!([1, "two", 3.0]));
    assert_eq!(to_json("{a: 1, b: [x, y]}"), json!({"a": 1, "b": ["x", "y"]}));
}

#[test]
fn test_deeply_nested() {
    let input = "
services:
  web:
    ports:
      - 80
      - 443
    env:
      - {name: MODE, value: prod}
  db:
    image: postgres
";
    assert_eq!(
        to_json(input),
        json!({
            "services": {
                "web": {
                    "ports": [80, 443],
                    "env": [{"name": "MODE", "value": "prod"}],
                },
                "db": {"image": "postgres"},
            }
        })
    );
}

#[test]
fn test_load_all() {
    assert_eq!(
        load_all("---\nA\n---\nB\n---\nC").unwrap(),
        vec![Value::from("A"), Value::from("B"), Value::from("C")]
    );
    assert_eq!(load_all("a: 1\n...\n---\nb: 2\n").unwrap().len(), 2);
    assert!(load_all("").unwrap().is_empty());
    assert!(load_all("   \n  ").unwrap().is_empty());
}

#[test]
fn test_empty_explicit_documents() {
    assert_eq!(
        load_all("---\n---\n...\n").unwrap(),
        vec![Value::Null, Value::Null]
    );
}

#[test]
fn test_version() {
    assert!(version().contains('.'));
    assert_eq!(yamlstar::YAML_VERSION, "1.2");
    assert_eq!(yamlstar::SCHEMA, "core");
}

#[test]
fn test_unclosed_quote_location() {
    let err = load("key: \"unclosed").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Lex);
    assert!(matches!(
        err.kind,
        ErrorKind::UnterminatedQuotedString { double_quoted: true }
    ));
    assert_eq!((err.line(), err.column()), (1, 6));
    assert_eq!(err.snippet, "key: \"unclosed");
    assert!(err.suggestion().is_some());
}

#[test]
fn test_multiple_loads_are_independent() {
    let err = load("*a").unwrap_err();
    assert!(matches!(&err.kind, ErrorKind::UndefinedAlias(name) if name == "a"));
    assert_eq!(to_json("&a x: *a"), json!({"x": "x"}));
    for _ in 0..3 {
        assert_eq!(to_json("a: 1"), json!({"a": 1}));
    }
    // Anchors do not leak between calls
    assert!(load("*a").is_err());
}

#[test]
fn test_duplicate_keys() {
    let value = load("a: 1\nb: 0\na: 2").unwrap();
    assert_eq!(value["a"], Value::Int(2));
    let keys: Vec<&String> = value.as_mapping().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);

    let loader = Loader::with_options(LoadOptions {
        duplicate_keys: DuplicateKeys::Error,
        ..LoadOptions::default()
    });
    let err = loader.load("a: 1\na: 2").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!((err.line(), err.column()), (2, 1));
}

#[test]
fn test_integer_overflow() {
    let value = load("n: 18446744073709551616").unwrap();
    assert!(matches!(value["n"], Value::BigInt(_)));

    let loader = Loader::with_options(LoadOptions {
        integer_overflow: IntegerOverflow::Error,
        ..LoadOptions::default()
    });
    let err = loader.load("n: 18446744073709551616").unwrap_err();
    assert!(matches!(&err.kind, ErrorKind::IntegerOverflow(literal) if literal == "18446744073709551616"));
    assert_eq!(err.category(), ErrorCategory::Range);
}

#[test]
fn test_documents_partial_results() {
    let results: Vec<_> = documents("--- ok\n--- [broken\n--- never").collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().value, Value::from("ok"));
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(err.line(), 2);

    assert!(load_all("--- ok\n--- [broken\n--- never").is_err());
}

#[derive(Debug, Deserialize, PartialEq)]
struct Interface {
    name: String,
    mtu: Option<u32>,
    #[serde(default)]
    shutdown: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Device {
    hostname: String,
    asn: u32,
    interfaces: Vec<Interface>,
}

#[test]
fn test_typed_loading() {
    let input = "
hostname: leaf1
asn: 65001
interfaces:
  - name: Ethernet1
    mtu: 9214
  - name: Ethernet2
    shutdown: true
";
    let device: Device = Loader::new().load_as(input).unwrap();
    assert_eq!(
        device,
        Device {
            hostname: "leaf1".to_owned(),
            asn: 65001,
            interfaces: vec![
                Interface {
                    name: "Ethernet1".to_owned(),
                    mtu: Some(9214),
                    shutdown: false,
                },
                Interface {
                    name: "Ethernet2".to_owned(),
                    mtu: None,
                    shutdown: true,
                },
            ],
        }
    );

    let names: Vec<String> = Loader::new().load_all_as("--- a\n--- b").unwrap();
    assert_eq!(names, ["a", "b"]);

    let err = Loader::new().load_as::<Device>("hostname: x").unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)));
    assert!(err.to_string().contains("asn"), "{err}");

    let value = load("[1, 2, 3]").unwrap();
    assert_eq!(from_value::<Vec<u8>>(value).unwrap(), [1, 2, 3]);
}

#[test]
fn test_aliases_expand_to_copies() {
    assert_eq!(
        to_json("defaults: &d {mtu: 1500}\neth1: *d\neth2: *d"),
        json!({
            "defaults": {"mtu": 1500},
            "eth1": {"mtu": 1500},
            "eth2": {"mtu": 1500},
        })
    );
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(
        to_json("# header\na: 1 # trailing\n# between\nb: [x, # inside\n  y]\n"),
        json!({"a": 1, "b": ["x", "y"]})
    );
}
