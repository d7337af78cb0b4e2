//! Attribute record storage.
//!
//! One `AttributeStore` holds every attribute record for one game object.
//! Records are created lazily: the first *mutating* reference to a key
//! materializes its record at the store's default value. Reads never create
//! records - an unreferenced key simply reads as the default.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::key::AttributeKey;
use super::record::AttributeRecord;

/// Lazily populated storage of attribute records, keyed by `AttributeKey`.
///
/// ```
/// use layered_attributes::{AttributeKey, AttributeStore};
///
/// let store = AttributeStore::new(0);
///
/// // Unreferenced keys read as the default without creating anything.
/// assert_eq!(store.current(AttributeKey::Power), 0);
/// assert!(store.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStore {
    records: FxHashMap<AttributeKey, AttributeRecord>,
    default_value: i32,
}

impl AttributeStore {
    /// Create an empty store whose records start at `default_value`.
    #[must_use]
    pub fn new(default_value: i32) -> Self {
        Self {
            records: FxHashMap::default(),
            default_value,
        }
    }

    /// Get the value unreferenced keys read as.
    #[must_use]
    pub fn default_value(&self) -> i32 {
        self.default_value
    }

    /// Get the current value for `key`, or the default if the key was never
    /// referenced. Pure read: never creates a record.
    #[must_use]
    pub fn current(&self, key: AttributeKey) -> i32 {
        self.records
            .get(&key)
            .map_or(self.default_value, |record| record.current())
    }

    /// Get the base value for `key`, or the default if the key was never
    /// referenced.
    #[must_use]
    pub fn base(&self, key: AttributeKey) -> i32 {
        self.records
            .get(&key)
            .map_or(self.default_value, |record| record.base())
    }

    /// Look up the record for `key` without creating it.
    #[must_use]
    pub fn record(&self, key: AttributeKey) -> Option<&AttributeRecord> {
        self.records.get(&key)
    }

    /// Check if `key` has been referenced by any mutation.
    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.records.contains_key(&key)
    }

    /// Get the number of referenced keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no key has been referenced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over referenced keys and their records.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeRecord)> {
        self.records.iter().map(|(key, record)| (*key, record))
    }

    /// Iterate over the referenced keys.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.records.keys().copied()
    }

    /// Get the record for `key`, creating it at the default value first if
    /// absent. All mutations go through here, so first use materializes the
    /// record.
    pub(crate) fn record_mut(&mut self, key: AttributeKey) -> &mut AttributeRecord {
        let default_value = self.default_value;
        self.records
            .entry(key)
            .or_insert_with(|| AttributeRecord::new(default_value))
    }

    /// Reset every record's current value back to its base value.
    pub(crate) fn reset_current_to_base(&mut self) {
        for record in self.records.values_mut() {
            record.reset_current_to_base();
        }
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new(0)
    }
}
