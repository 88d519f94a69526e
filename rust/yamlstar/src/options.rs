// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Options that control loading.

/// How repeated keys in one mapping are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// The last value wins. The key keeps the position of its first occurrence.
    #[default]
    LastWins,
    /// A repeated key is a syntax error.
    Error,
}

/// How integer literals outside of the `i64` range are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegerOverflow {
    /// Promote to `Value::BigInt`.
    #[default]
    Promote,
    /// Fail with a range error.
    Error,
}

/// Configuration to use during loading.
#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    pub duplicate_keys: DuplicateKeys,
    pub integer_overflow: IntegerOverflow,
    /// Maximum nesting of collections (and node properties) in one document.
    /// Parsing recurses once per level, so the default fits a 2 MiB thread
    /// stack in unoptimized builds.
    pub max_depth: usize,
    /// Maximum number of nodes copied into a document through aliases.
    /// Guards against exponential alias expansion.
    pub max_alias_nodes: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::default(),
            integer_overflow: IntegerOverflow::default(),
            max_depth: 64,
            max_alias_nodes: 100_000,
        }
    }
}

impl LoadOptions {
    /// Options that reject duplicate keys and out of range integers.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::Error,
            integer_overflow: IntegerOverflow::Error,
            ..Self::default()
        }
    }
}
