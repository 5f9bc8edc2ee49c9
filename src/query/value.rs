//! Parsed query values.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A single query argument.
///
/// `List` only ever holds `Flag` and `Text` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Parameter given without `=`, e.g. `?verbose`.
    Flag,
    /// Percent-decoded value.
    Text(String),
    /// The same key appeared more than once.
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Returns the text of a single-valued argument.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, QueryValue::Flag)
    }

    /// Fold another occurrence of the same key into this slot.
    fn push(&mut self, next: QueryValue) {
        match self {
            QueryValue::List(items) => items.push(next),
            single => {
                let first = std::mem::replace(single, QueryValue::Flag);
                *single = QueryValue::List(vec![first, next]);
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Flag => serializer.serialize_bool(true),
            QueryValue::Text(s) => serializer.serialize_str(s),
            QueryValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Named arguments produced from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct QueryArgs {
    values: BTreeMap<String, QueryValue>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        self.values.insert(key.into(), value);
    }

    /// Record one more occurrence of `key`.
    pub fn append(&mut self, key: &str, value: QueryValue) {
        match self.values.get_mut(key) {
            Some(existing) => existing.push(value),
            None => {
                self.values.insert(key.to_string(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
