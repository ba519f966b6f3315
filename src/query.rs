//! Query component.

use std::fmt;

use crate::constants::{QUERY_PARAM_DELIMITER, QUERY_VALUE_DELIMITER};
use crate::percent;

/// A single query parameter.
///
/// A *flag* is a bare key without `=`. It is distinct from a key with an
/// explicitly empty value (`key=`).
///
/// # Examples
///
/// ```
/// use omw_uri::QueryParameter;
///
/// let flag = QueryParameter::flag("debug");
/// let empty = QueryParameter::new("debug", "");
/// assert_ne!(flag, empty);
/// assert_eq!(flag.to_string(), "debug");
/// assert_eq!(empty.to_string(), "debug=");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParameter {
    key: String,
    value: String,
    is_flag: bool,
}

impl QueryParameter {
    /// Creates a `key=value` parameter from decoded text.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            is_flag: false,
        }
    }

    /// Creates a bare `key` parameter.
    #[must_use]
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            is_flag: true,
        }
    }

    /// Parses one percent-encoded parameter. A literal `+` decodes to a
    /// space.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.split_once(QUERY_VALUE_DELIMITER) {
            Some((key, value)) => Self::new(percent::decode_form(key), percent::decode_form(value)),
            None => Self::flag(percent::decode_form(input)),
        }
    }

    /// Returns the decoded key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the decoded value; empty for flags.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the parameter had no `=`.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Serialises the parameter; `&`, `=` and `+` in the key or value are
    /// escaped.
    #[must_use]
    pub fn serialise(&self) -> String {
        let key = percent::encode_query_field(&self.key);
        if self.is_flag {
            key
        } else {
            format!("{key}={}", percent::encode_query_field(&self.value))
        }
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialise())
    }
}

/// The query of a URI: parameters in their original order.
///
/// `==` compares parameters in order. [`Query::equivalent`] ignores order.
///
/// # Examples
///
/// ```
/// use omw_uri::Query;
///
/// let query = Query::parse("x=1&y&z=");
/// assert_eq!(query.len(), 3);
/// assert_eq!(query.get("x"), Some("1"));
/// assert!(query.params()[1].is_flag());
/// assert_eq!(query.serialise(), "x=1&y&z=");
///
/// let reordered = Query::parse("z=&x=1&y");
/// assert!(query.equivalent(&reordered));
/// assert_ne!(query, reordered);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    params: Vec<QueryParameter>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a percent-encoded query string (without the leading `?`).
    ///
    /// Every piece between `&` delimiters is a parameter, so an empty piece
    /// is a flag with an empty key. Only the empty string has no parameters.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }
        let params = input
            .split(QUERY_PARAM_DELIMITER)
            .map(QueryParameter::parse)
            .collect();
        Self { params }
    }

    /// Returns the parameters in order.
    #[must_use]
    pub fn params(&self) -> &[QueryParameter] {
        &self.params
    }

    /// Returns an iterator over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|p| (p.key(), p.value()))
    }

    /// Returns true if the query has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns the value of the first parameter with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(QueryParameter::value)
    }

    /// Returns the values of all parameters with this key.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.key == key)
            .map(QueryParameter::value)
    }

    /// Returns true if any parameter has this key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|p| p.key == key)
    }

    /// Appends a parameter.
    pub fn push(&mut self, param: QueryParameter) {
        self.params.push(param);
    }

    /// Appends a `key=value` parameter.
    pub fn push_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push(QueryParameter::new(key, value));
    }

    /// Appends a bare `key` parameter.
    pub fn push_flag(&mut self, key: impl Into<String>) {
        self.params.push(QueryParameter::flag(key));
    }

    /// Removes every parameter with this key and returns how many were
    /// removed.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.params.len();
        self.params.retain(|p| p.key != key);
        before - self.params.len()
    }

    /// Compares parameters in order.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Compares parameters as a multiset, ignoring order.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.params.len() != other.params.len() {
            return false;
        }
        let mut lhs: Vec<&QueryParameter> = self.params.iter().collect();
        let mut rhs: Vec<&QueryParameter> = other.params.iter().collect();
        lhs.sort();
        rhs.sort();
        lhs == rhs
    }

    /// Serialises the query (without the leading `?`).
    #[must_use]
    pub fn serialise(&self) -> String {
        let pairs: Vec<String> = self.params.iter().map(QueryParameter::serialise).collect();
        pairs.join("&")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialise())
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl FromIterator<QueryParameter> for Query {
    fn from_iter<T: IntoIterator<Item = QueryParameter>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a QueryParameter;
    type IntoIter = std::slice::Iter<'a, QueryParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
