//! Named parameter and virtual-field storage.
//!
//! Both maps preserve insertion order: re-setting an existing key overwrites
//! its value in place, new keys append. This keeps parameter dumps and
//! rendered field lists stable across re-renders.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{SqlError, SqlResult};
use crate::value::Value;

fn param_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^:\w+$").expect("invalid built-in parameter name regex"))
}

fn word_only_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+$").expect("invalid built-in virtual field name regex"))
}

/// Insertion-ordered map of `:name` placeholders to their bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a parameter by its `:name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Check if a parameter name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bind a value under `name`.
    ///
    /// `name` must be a colon followed by word characters (`:customer_id`).
    /// An existing name keeps its position and gets the new value; a new name
    /// appends.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<()> {
        if name.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "Name argument should not be empty.",
            ));
        }
        if !param_name_re().is_match(name) {
            return Err(SqlError::invalid_argument(format!(
                "Name argument '{name}' should contain ':' followed by word characters \
                 (letter, number, underscore) only.",
            )));
        }
        self.upsert(name, value.into());
        Ok(())
    }

    /// Upsert every entry of `other` into this map, in `other`'s order.
    ///
    /// Shared keys take the incoming value; key positions never move.
    pub fn merge(&mut self, other: &Params) {
        for (name, value) in &other.entries {
            self.upsert(name, value.clone());
        }
    }

    /// Next free auto-generated name for a bucket: `:{bucket}_{n}` where `n`
    /// is one more than the number of existing names containing the bucket
    /// tag.
    pub fn unique_name(&self, bucket: &str) -> String {
        let tag = format!(":{bucket}");
        let n = self
            .entries
            .iter()
            .filter(|(name, _)| name.contains(&tag))
            .count()
            + 1;
        format!(":{bucket}_{n}")
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn upsert(&mut self, name: &str, value: Value) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }
}

/// Insertion-ordered map of virtual field names to expression text.
///
/// A virtual field aliases an arbitrary expression under a bare name; the
/// resolver substitutes the expression verbatim wherever the bare name is
/// referenced unqualified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFields {
    entries: Vec<(String, String)>,
}

impl VirtualFields {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no virtual fields are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Define or redefine a virtual field.
    ///
    /// `name` must be word characters only; `expression` must be non-empty.
    pub fn set(&mut self, name: &str, expression: &str) -> SqlResult<()> {
        if name.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "Name argument should not be empty.",
            ));
        }
        if !word_only_re().is_match(name) {
            return Err(SqlError::invalid_argument(format!(
                "Name argument '{name}' should only contain word characters \
                 (letter, number, underscore).",
            )));
        }
        if expression.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "Expression argument should not be empty.",
            ));
        }
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = expression.to_string(),
            None => self.entries.push((name.to_string(), expression.to_string())),
        }
        Ok(())
    }

    /// Look up a virtual field's expression.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, expr)| expr.as_str())
    }

    /// Check if a virtual field is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
