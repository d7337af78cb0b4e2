//! Per-attribute value state.

use serde::{Deserialize, Serialize};

/// The value pair tracked for one attribute: base and current.
///
/// `base` is the attribute's unmodified value. `current` is derived from it
/// by the engine's recomputation and is only ever written there - with no
/// effects in play the two are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRecord {
    base: i32,
    current: i32,
}

impl AttributeRecord {
    /// Create a record with `base` and `current` both set to `value`.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self {
            base: value,
            current: value,
        }
    }

    /// Get the base (unmodified) value.
    #[must_use]
    pub const fn base(self) -> i32 {
        self.base
    }

    /// Get the current value: the base with all layered effects folded in.
    #[must_use]
    pub const fn current(self) -> i32 {
        self.current
    }

    /// Overwrite the base value. Does not touch `current`; the caller
    /// recomputes afterwards.
    pub(crate) fn set_base(&mut self, value: i32) {
        self.base = value;
    }

    /// Store a freshly recomputed current value.
    pub(crate) fn set_current(&mut self, value: i32) {
        self.current = value;
    }

    /// Drop the derived state: `current` becomes `base` again.
    pub(crate) fn reset_current_to_base(&mut self) {
        self.current = self.base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_consistent() {
        let record = AttributeRecord::new(7);
        assert_eq!(record.base(), 7);
        assert_eq!(record.current(), 7);
    }

    #[test]
    fn test_set_base_leaves_current_alone() {
        let mut record = AttributeRecord::new(0);
        record.set_current(12);
        record.set_base(5);

        assert_eq!(record.base(), 5);
        assert_eq!(record.current(), 12);
    }

    #[test]
    fn test_reset_current_to_base() {
        let mut record = AttributeRecord::new(3);
        record.set_current(99);
        record.reset_current_to_base();

        assert_eq!(record.base(), 3);
        assert_eq!(record.current(), 3);
    }

    #[test]
    fn test_serialization() {
        let mut record = AttributeRecord::new(10);
        record.set_current(26);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttributeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
