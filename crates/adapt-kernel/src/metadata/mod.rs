//! Canonical metadata records.
//!
//! A [`MetadataRecord`] is the flat key/value form of a declaration that is
//! handed to a service registry.  The key vocabulary is fixed:
//!
//! | key | value |
//! |-----|-------|
//! | [`ADAPTABLE_CLASSES`] | array of type identifiers |
//! | [`ADAPTER_CLASSES`] | array of type identifiers |
//! | [`ADAPTER_CONDITION`] | string |
//! | [`ADAPTER_DEPRECATED`] | `true` (absent otherwise) |
//! | [`SERVICE_RANKING`] | integer, [`DEFAULT_RANKING`] when not declared |
//! | [`SERVICE_SCOPE`] | `"bundle"`, `"singleton"` or `"prototype"` |
//!
//! Properties are kept in a sorted map so two records built from the same
//! declaration compare and serialize identically.

use crate::declaration::{INVALID_CONFIGURATION_MESSAGE, ServiceScope};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod error;
pub mod mapper;

pub use error::RecordError;
pub use mapper::to_record;

pub const ADAPTABLE_CLASSES: &str = "adaptable.classes";
pub const ADAPTER_CLASSES: &str = "adapter.classes";
pub const ADAPTER_CONDITION: &str = "adapter.condition";
pub const ADAPTER_DEPRECATED: &str = "adapter.deprecated";
pub const SERVICE_RANKING: &str = "service.ranking";
pub const SERVICE_SCOPE: &str = "service.scope";

/// Ranking published when a declaration does not set one.
pub const DEFAULT_RANKING: i32 = 0;

/// Flat, immutable property map published for one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    properties: BTreeMap<String, Value>,
}

impl MetadataRecord {
    /// Wrap an existing property map, e.g. one received from a registry.
    pub fn from_properties(properties: BTreeMap<String, Value>) -> Self {
        Self { properties }
    }

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn into_properties(self) -> BTreeMap<String, Value> {
        self.properties
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed read-back
    // ─────────────────────────────────────────────────────────────────────────

    /// Types under `adaptable.classes`, or `None` when the key is absent.
    pub fn adaptable_classes(&self) -> Result<Option<Vec<String>>, RecordError> {
        self.string_list(ADAPTABLE_CLASSES)
    }

    /// Types under `adapter.classes`, or `None` when the key is absent.
    pub fn adapter_classes(&self) -> Result<Option<Vec<String>>, RecordError> {
        self.string_list(ADAPTER_CLASSES)
    }

    pub fn condition(&self) -> Result<Option<&str>, RecordError> {
        match self.properties.get(ADAPTER_CONDITION) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| RecordError::malformed(ADAPTER_CONDITION, "string")),
        }
    }

    /// `adapter.deprecated`; an absent key reads as `false`.
    pub fn is_deprecated(&self) -> Result<bool, RecordError> {
        match self.properties.get(ADAPTER_DEPRECATED) {
            None => Ok(false),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| RecordError::malformed(ADAPTER_DEPRECATED, "boolean")),
        }
    }

    /// `service.ranking`; an absent key reads as [`DEFAULT_RANKING`].
    pub fn ranking(&self) -> Result<i32, RecordError> {
        match self.properties.get(SERVICE_RANKING) {
            None => Ok(DEFAULT_RANKING),
            Some(value) => value
                .as_i64()
                .and_then(|ranking| i32::try_from(ranking).ok())
                .ok_or_else(|| RecordError::malformed(SERVICE_RANKING, "32-bit integer")),
        }
    }

    pub fn scope(&self) -> Result<Option<ServiceScope>, RecordError> {
        match self.properties.get(SERVICE_SCOPE) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .and_then(ServiceScope::parse)
                .map(Some)
                .ok_or_else(|| {
                    RecordError::malformed(SERVICE_SCOPE, "one of bundle, singleton, prototype")
                }),
        }
    }

    /// Whether this record was published for an invalid declaration.
    pub fn is_invalid(&self) -> bool {
        self.properties.get(ADAPTER_CONDITION).and_then(Value::as_str)
            == Some(INVALID_CONFIGURATION_MESSAGE)
    }

    // A bare string is accepted as a one-element list.
    fn string_list(&self, key: &'static str) -> Result<Option<Vec<String>>, RecordError> {
        let Some(value) = self.properties.get(key) else {
            return Ok(None);
        };
        if let Some(single) = value.as_str() {
            return Ok(Some(vec![single.to_string()]));
        }
        value
            .as_array()
            .ok_or_else(|| RecordError::malformed(key, "array of strings"))?
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| RecordError::malformed(key, "array of strings"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
