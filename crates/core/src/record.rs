use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record key holding the unmodified input line.
pub const ORIGINAL_LINE_KEY: &str = "originalLine";

/// A parsed log line: field name → extracted value, plus the original line
/// under [`ORIGINAL_LINE_KEY`].
///
/// Field names are not guaranteed unique across a format's descriptors
/// (parameterized fields with identical parameters collide); when they
/// collide, the last extracted value wins.
///
/// Serializes as a plain JSON object. A `BTreeMap` backs the record so the
/// serialized key order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRecord {
    fields: BTreeMap<String, String>,
}

impl ParsedRecord {
    /// Create a record seeded with the original line.
    pub(crate) fn new(line: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(ORIGINAL_LINE_KEY.to_string(), line.to_string());
        Self { fields }
    }

    /// Store an extracted value. Overwrites any earlier value for `name`.
    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.fields.insert(name, value);
    }

    /// The extracted value for a field name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The unmodified input line.
    pub fn original_line(&self) -> &str {
        self.fields
            .get(ORIGINAL_LINE_KEY)
            .map_or("", String::as_str)
    }

    /// Iterate over `(name, value)` pairs in key order, original line
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries, original line included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True only for a default-constructed record.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
