//! Ordered key/value status records.

use serde::Serialize;

use super::error::StatusError;

/// An ordered list of `KEY=VALUE` pairs.
///
/// Insertion order is the order lines are written. Setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    entries: Vec<(String, String)>,
}

impl StatusRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Set `key` to `1` or `0`.
    pub fn set_flag(&mut self, key: impl Into<String>, flag: bool) {
        self.set(key, if flag { "1" } else { "0" });
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a required value.
    pub fn require(&self, key: &str) -> Result<&str, StatusError> {
        self.get(key)
            .ok_or_else(|| StatusError::MissingKey(key.to_string()))
    }

    /// Look up a required `0`/`1` flag.
    pub fn flag(&self, key: &str) -> Result<bool, StatusError> {
        match self.require(key)? {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(StatusError::InvalidFlag {
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in write order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A typed status record with a fixed key set.
///
/// The typed struct is the source of truth; [`StatusRecord`] is the flat
/// compatibility form written for shell consumers.
pub trait StatusReport: Serialize + Sized {
    /// Short name of the concern (`cuda`, `rust`, `packages`).
    const KIND: &'static str;

    /// Flatten into key/value pairs.
    fn to_record(&self) -> StatusRecord;

    /// Rebuild from key/value pairs.
    fn from_record(record: &StatusRecord) -> Result<Self, StatusError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_order_and_replaces() {
        let mut record = StatusRecord::new();
        record.set("B", "1");
        record.set("A", "2");
        record.set("B", "3");

        assert_eq!(record.keys(), vec!["B", "A"]);
        assert_eq!(record.get("B"), Some("3"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_flags() {
        let mut record = StatusRecord::new();
        record.set_flag("ON", true);
        record.set_flag("OFF", false);
        record.set("BAD", "yes");

        assert!(record.flag("ON").unwrap());
        assert!(!record.flag("OFF").unwrap());
        assert!(matches!(
            record.flag("BAD"),
            Err(StatusError::InvalidFlag { .. })
        ));
        assert!(matches!(
            record.flag("ABSENT"),
            Err(StatusError::MissingKey(_))
        ));
    }
}
