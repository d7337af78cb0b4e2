//! Mutation history.
//!
//! Every mutating call on a `LayeredAttributes` instance appends one record
//! here, so an object's attribute state can be audited or replayed after
//! the fact. The log lives in a persistent vector: engines that fork
//! objects during search clone the instance, and the clones share the
//! history structurally instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;
use crate::effects::LayeredEffect;

/// One mutation applied to a `LayeredAttributes` instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// A base value was written.
    BaseSet {
        attribute: AttributeKey,
        value: i32,
    },
    /// A layered effect was attached.
    EffectAdded { effect: LayeredEffect },
    /// Every layered effect was removed.
    EffectsCleared,
}

/// A recorded change with its position in the mutation sequence.
///
/// Used for:
/// - Replay/debugging
/// - Auditing how an object reached its current values
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Zero-based position in the instance's mutation sequence.
    pub sequence: u64,

    /// The mutation.
    pub change: Change,
}

/// Append-only history of every mutation on one instance.
///
/// ```
/// use layered_attributes::{AttributeKey, Change, LayeredAttributes};
///
/// let mut object = LayeredAttributes::new();
/// object.set_base(AttributeKey::Power, 10);
///
/// let last = object.history().last().unwrap();
/// assert_eq!(last.sequence, 0);
/// assert_eq!(
///     last.change,
///     Change::BaseSet { attribute: AttributeKey::Power, value: 10 }
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLog {
    entries: Vector<ChangeRecord>,
    next_sequence: u64,
}

impl ChangeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change, stamping it with the next sequence number.
    pub(crate) fn record(&mut self, change: Change) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push_back(ChangeRecord { sequence, change });
    }

    /// Get the number of recorded changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the most recent change, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ChangeRecord> {
        self.entries.back()
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = ChangeLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_record_stamps_sequence_numbers() {
        let mut log = ChangeLog::new();
        log.record(Change::EffectsCleared);
        log.record(Change::BaseSet {
            attribute: AttributeKey::Power,
            value: 10,
        });
        log.record(Change::EffectsCleared);

        let sequences: Vec<u64> = log.iter().map(|record| record.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
        assert_eq!(log.last().unwrap().sequence, 2);
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut log = ChangeLog::new();
        log.record(Change::BaseSet {
            attribute: AttributeKey::Power,
            value: 1,
        });
        log.record(Change::BaseSet {
            attribute: AttributeKey::Power,
            value: 2,
        });

        let values: Vec<i32> = log
            .iter()
            .map(|record| match record.change {
                Change::BaseSet { value, .. } => value,
                _ => panic!("Expected BaseSet"),
            })
            .collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_clones_share_then_diverge() {
        let mut log = ChangeLog::new();
        log.record(Change::EffectsCleared);

        let mut fork = log.clone();
        fork.record(Change::BaseSet {
            attribute: AttributeKey::Loyalty,
            value: 3,
        });

        assert_eq!(log.len(), 1);
        assert_eq!(fork.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut log = ChangeLog::new();
        log.record(Change::EffectAdded {
            effect: LayeredEffect::add(AttributeKey::Power, 3).with_layer(1),
        });

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: ChangeLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
