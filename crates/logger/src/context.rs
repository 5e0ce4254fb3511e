//! Validated context fields
//!
//! Every key passes through [`FieldName`], which rejects the reserved keys at
//! construction. No reserved key can enter a context by any path, so neither
//! the logger nor the serializer needs runtime guards.

use crate::{ContextValue, Error, Result};
use serde_json::Value;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Context keys the logger reserves for itself.
pub const RESERVED_KEYS: [&str; 3] = ["_timestamp", "_message", "_severity"];

/// A validated context field name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Validate `name`, rejecting reserved keys.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) {
            return Err(Error::ReservedKey { key: name });
        }
        Ok(Self(name))
    }

    /// The field name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for FieldName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for FieldName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Named fields attached to emitted records.
///
/// Keys are unique; setting an existing key overwrites it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: BTreeMap<FieldName, ContextValue>,
}

impl Context {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style validated insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Insert or overwrite a field. Last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Result<()> {
        let key = FieldName::new(key)?;
        self.fields.insert(key, value.into());
        Ok(())
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.fields.get(key)
    }

    /// Merge `overrides` on top of `self`.
    ///
    /// Overriding keys win on collision. Neither input is mutated.
    pub fn merge(&self, overrides: &Context) -> Context {
        let mut merged = self.clone();
        for (key, value) in &overrides.fields {
            merged.fields.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Substitute every self-describing value with its log representation.
    pub fn resolve(&self) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str().to_owned(), value.resolve()))
            .collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the context has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &ContextValue)> {
        self.fields.iter()
    }

    /// Fold `updates` into `self`; incoming keys win.
    pub(crate) fn extend(&mut self, updates: Context) {
        self.fields.extend(updates.fields);
    }
}
