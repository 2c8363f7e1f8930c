/*
 * lookup.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Argument normalization.
//!
//! A template can be fed one aggregate (a map or a list) or any number of
//! discrete values. [`LookupSource::from_args`] collapses every one of those
//! call shapes into a single source that placeholder keys resolve against.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use tracing::debug;

static EMPTY_MAP: Lazy<Map<String, Value>> = Lazy::new(Map::new);

/// The values placeholder keys resolve against.
///
/// Only entries the caller actually supplied are visible: a list answers to
/// its in-bounds indices and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupSource<'a> {
    /// Keys resolve against map entries.
    Keyed(&'a Map<String, Value>),

    /// Keys resolve against positions, written as canonical decimal ("0", "1", ...).
    Indexed(&'a [Value]),
}

impl<'a> LookupSource<'a> {
    /// Normalize the caller's arguments into a lookup source.
    ///
    /// - A single map or list is used directly.
    /// - A single null normalizes to an empty map. The null marker is grouped
    ///   with the aggregates, and an empty map is what that aggregate becomes.
    /// - Anything else (no values, several values, one scalar) is addressed
    ///   positionally.
    pub fn from_args(args: &'a [Value]) -> Self {
        match args {
            [Value::Object(map)] => LookupSource::Keyed(map),
            [Value::Array(items)] => LookupSource::Indexed(items),
            [Value::Null] => {
                debug!("single null argument, resolving against an empty map");
                LookupSource::empty()
            }
            _ => LookupSource::Indexed(args),
        }
    }

    /// A source with no entries.
    pub fn empty() -> LookupSource<'static> {
        LookupSource::Keyed(&EMPTY_MAP)
    }

    /// Get the value for `key`, treating null entries as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let value = match *self {
            LookupSource::Keyed(map) => map.get(key),
            LookupSource::Indexed(items) => parse_index(key).and_then(|i| items.get(i)),
        }?;
        (!value.is_null()).then_some(value)
    }
}

/// Parse a canonical list index: ASCII digits, no sign, no leading zeros.
fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}
