//! Parameter collections for placeholder substitution.

use crate::error::{PeekError, PeekResult};
use crate::value::Value;
use std::collections::HashMap;

/// Key of a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Positional key (0- or 1-based, depending on the collection).
    Index(usize),
    /// Named key, without the leading `:`.
    Name(String),
}

impl ParamKey {
    /// Key for a placeholder or document name.
    ///
    /// Canonical decimal names (`"1"`, not `"01"`) are positional keys.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<usize>() {
            Ok(index) if index.to_string() == name => ParamKey::Index(index),
            _ => ParamKey::Name(name.to_string()),
        }
    }
}

impl From<usize> for ParamKey {
    fn from(index: usize) -> Self {
        ParamKey::Index(index)
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::from_name(name)
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::from_name(&name)
    }
}

/// Bound parameter values, keyed by position and/or name.
///
/// # Example
/// ```
/// use sqlpeek::{Params, Value};
///
/// let positional = Params::positional([1, 2]);
/// let one_based = Params::one_based(["a", "b"]);
/// let named = Params::new().bind("id", 7).bind("name", "x");
///
/// assert_eq!(positional.get_index(1), Some(&Value::Int(2)));
/// assert_eq!(one_based.get_index(1), Some(&Value::from("a")));
/// assert_eq!(named.get_name("id"), Some(&Value::Int(7)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: HashMap<ParamKey, Value>,
}

impl Params {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// 0-based positional collection.
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::indexed_from(0, values)
    }

    /// 1-based positional collection.
    pub fn one_based<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::indexed_from(1, values)
    }

    fn indexed_from<I, T>(start: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (ParamKey::Index(start + i), v.into()))
            .collect();
        Self { values }
    }

    /// Named collection.
    pub fn named<I, K, T>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<ParamKey>,
        T: Into<Value>,
    {
        values.into_iter().collect()
    }

    /// Chainable insert.
    pub fn bind(mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &ParamKey) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(&ParamKey::Index(index))
    }

    pub fn get_name(&self, name: &str) -> Option<&Value> {
        self.values.get(&ParamKey::from_name(name))
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.values.contains_key(&ParamKey::Index(index))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cursor position for the first positional placeholder.
    ///
    /// `1` when the collection has key `1` but no key `0`, else `0`.
    pub fn first_index(&self) -> usize {
        if !self.contains_index(0) && self.contains_index(1) {
            1
        } else {
            0
        }
    }

    /// Build a collection from a JSON document.
    ///
    /// An array becomes a 0-based collection. An object's keys become
    /// positional when they are canonical decimals and named otherwise, so
    /// `{"1": "a", "2": "b"}` is 1-based.
    pub fn from_json(doc: serde_json::Value) -> PeekResult<Self> {
        match doc {
            serde_json::Value::Array(items) => Ok(Self::positional(items)),
            serde_json::Value::Object(map) => Ok(Self::named(map)),
            other => Err(PeekError::serialization(format!(
                "parameters must be a JSON array or object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a JSON parameter document. See [`Params::from_json`].
    pub fn from_json_str(s: &str) -> PeekResult<Self> {
        Self::from_json(serde_json::from_str(s)?)
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<K: Into<ParamKey>, T: Into<Value>> FromIterator<(K, T)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self::positional(values)
    }
}
