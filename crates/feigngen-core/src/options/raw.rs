//! Raw, loosely-typed option input as it arrives from the command line or a
//! configuration document.

// Internal imports (std, crate)
use std::collections::BTreeMap;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;

/// Option name to raw value, before validation.
///
/// Values are kept in their string form. Documents may carry booleans or
/// numbers (`useBeanValidation: true`); those are normalized to strings on the
/// way in so that every value goes through the same parsing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawOptions(BTreeMap<String, String>);

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `overrides` on top of `self`; keys present in both take the
    /// override's value.
    pub fn merged_with(&self, overrides: &RawOptions) -> RawOptions {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value);
        }
        merged
    }

    /// Parse a `KEY=VALUE` pair as given on the command line.
    ///
    /// A bare `KEY` is treated as a flag and stored as `"true"`.
    pub fn parse_pair(pair: &str) -> Result<(String, String), String> {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key.trim(), value),
            None => (pair.trim(), "true"),
        };
        if key.is_empty() {
            return Err(format!("Missing option name in '{}'", pair));
        }
        Ok((key.to_string(), value.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for RawOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, SerdeValue>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
            .collect())
    }
}

/// Render a scalar document value the way it would have been typed on the
/// command line. Nested maps and sequences carry no option meaning and are
/// dropped.
pub(crate) fn scalar_to_string(value: SerdeValue) -> Option<String> {
    match value {
        SerdeValue::Bool(b) => Some(b.to_string()),
        SerdeValue::U8(n) => Some(n.to_string()),
        SerdeValue::U16(n) => Some(n.to_string()),
        SerdeValue::U32(n) => Some(n.to_string()),
        SerdeValue::U64(n) => Some(n.to_string()),
        SerdeValue::I8(n) => Some(n.to_string()),
        SerdeValue::I16(n) => Some(n.to_string()),
        SerdeValue::I32(n) => Some(n.to_string()),
        SerdeValue::I64(n) => Some(n.to_string()),
        SerdeValue::F32(n) => Some(n.to_string()),
        SerdeValue::F64(n) => Some(n.to_string()),
        SerdeValue::Char(c) => Some(c.to_string()),
        SerdeValue::String(s) => Some(s),
        SerdeValue::Option(Some(inner)) | SerdeValue::Newtype(inner) => scalar_to_string(*inner),
        _ => None,
    }
}

/// Standard boolean parsing: `"true"` in any letter case is `true`, every other
/// string is `false`.
pub fn parse_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
