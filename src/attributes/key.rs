//! Attribute identification.
//!
//! Every attribute a game object can carry has a key in one closed enum.
//! Numeric attributes (power, toughness, loyalty) and flag-set attributes
//! (colors, types) share the same `i32` value space - flag sets pack their
//! bits into the value and are modified with the bitwise effect operations.
//!
//! `Invalid` is the sentinel for uninitialized or erroneous values. The
//! engine tolerates it everywhere: an `Invalid` key indexes its own record
//! like any other key, it just never corresponds to a real attribute.

use serde::{Deserialize, Serialize};

/// Key identifying one attribute on a game object.
///
/// The set is closed - games don't define their own keys. `Invalid` is the
/// default, standing in for uninitialized values.
///
/// ```
/// use layered_attributes::AttributeKey;
///
/// assert_eq!(AttributeKey::default(), AttributeKey::Invalid);
/// assert!(AttributeKey::Power.is_valid());
/// assert!(!AttributeKey::Invalid.is_valid());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Sentinel for uninitialized or erroneous values.
    #[default]
    Invalid,
    Power,
    Toughness,
    Loyalty,
    /// Color flags, packed into the value as a bit set.
    Color,
    /// Card type flags, packed into the value as a bit set.
    Types,
    Subtypes,
    Supertypes,
    ConvertedManaCost,
    Controller,
}

impl AttributeKey {
    /// Every real key, in declaration order. Excludes `Invalid`.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::Power,
        AttributeKey::Toughness,
        AttributeKey::Loyalty,
        AttributeKey::Color,
        AttributeKey::Types,
        AttributeKey::Subtypes,
        AttributeKey::Supertypes,
        AttributeKey::ConvertedManaCost,
        AttributeKey::Controller,
    ];

    /// Iterate over every real key (excludes the `Invalid` sentinel).
    pub fn all() -> impl Iterator<Item = AttributeKey> {
        Self::ALL.into_iter()
    }

    /// Check if this is a real key rather than the sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, AttributeKey::Invalid)
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(AttributeKey::default(), AttributeKey::Invalid);
    }

    #[test]
    fn test_all_excludes_invalid() {
        assert_eq!(AttributeKey::ALL.len(), 9);
        assert!(!AttributeKey::ALL.contains(&AttributeKey::Invalid));
        assert!(AttributeKey::all().all(AttributeKey::is_valid));
    }

    #[test]
    fn test_is_valid() {
        assert!(AttributeKey::Power.is_valid());
        assert!(AttributeKey::Controller.is_valid());
        assert!(!AttributeKey::Invalid.is_valid());
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map: FxHashMap<AttributeKey, i32> = FxHashMap::default();
        map.insert(AttributeKey::Power, 3);
        map.insert(AttributeKey::Invalid, -1);

        assert_eq!(map.get(&AttributeKey::Power), Some(&3));
        assert_eq!(map.get(&AttributeKey::Invalid), Some(&-1));
        assert_eq!(map.get(&AttributeKey::Toughness), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AttributeKey::Power), "Power");
        assert_eq!(format!("{}", AttributeKey::ConvertedManaCost), "ConvertedManaCost");
    }

    #[test]
    fn test_serialization() {
        for key in AttributeKey::all() {
            let json = serde_json::to_string(&key).unwrap();
            let deserialized: AttributeKey = serde_json::from_str(&json).unwrap();
            assert_eq!(key, deserialized);
        }
    }
}
