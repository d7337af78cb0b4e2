//! Layered effect definitions.
//!
//! A `LayeredEffect` is plain data: which attribute to touch, what to do to
//! it, the operand, and the layer that orders it against other effects.
//! Effects have no identity beyond their fields and no individual removal -
//! the only way to take one off an object is the global clear.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;

use super::operation::EffectOperation;

/// One modification to an attribute's current value.
///
/// ## Layers
///
/// Effects apply in ascending layer order, lowest first. Effects sharing a
/// layer apply in the order they were added. Layers may be negative and
/// need not be contiguous.
///
/// ## Example
///
/// ```
/// use layered_attributes::{AttributeKey, EffectOperation, LayeredEffect};
///
/// let pump = LayeredEffect::add(AttributeKey::Power, 3).with_layer(1);
/// assert_eq!(pump.operation, EffectOperation::Add);
/// assert_eq!(pump.modification, 3);
/// assert_eq!(pump.layer, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayeredEffect {
    /// Which attribute this effect applies to.
    pub attribute: AttributeKey,
    /// What this effect does to the running value.
    pub operation: EffectOperation,
    /// The operand for `operation`: the amount added, the factor, the bit
    /// mask, or the value set.
    pub modification: i32,
    /// Which layer to apply this effect in. Lower layers apply first;
    /// same-layer effects apply in insertion order.
    pub layer: i32,
}

impl LayeredEffect {
    /// Create an effect at layer 0.
    #[must_use]
    pub const fn new(attribute: AttributeKey, operation: EffectOperation, modification: i32) -> Self {
        Self {
            attribute,
            operation,
            modification,
            layer: 0,
        }
    }

    /// Set the layer (builder pattern).
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    // === Convenience constructors, one per operation ===

    /// Set `attribute` to `value`, discarding whatever it was.
    pub const fn set(attribute: AttributeKey, value: i32) -> Self {
        Self::new(attribute, EffectOperation::Set, value)
    }

    /// Add `amount` to `attribute`.
    pub const fn add(attribute: AttributeKey, amount: i32) -> Self {
        Self::new(attribute, EffectOperation::Add, amount)
    }

    /// Subtract `amount` from `attribute`.
    pub const fn subtract(attribute: AttributeKey, amount: i32) -> Self {
        Self::new(attribute, EffectOperation::Subtract, amount)
    }

    /// Multiply `attribute` by `factor`.
    pub const fn multiply(attribute: AttributeKey, factor: i32) -> Self {
        Self::new(attribute, EffectOperation::Multiply, factor)
    }

    /// Bitwise-or `mask` into `attribute`.
    pub const fn bitwise_or(attribute: AttributeKey, mask: i32) -> Self {
        Self::new(attribute, EffectOperation::BitwiseOr, mask)
    }

    /// Bitwise-and `attribute` with `mask`.
    pub const fn bitwise_and(attribute: AttributeKey, mask: i32) -> Self {
        Self::new(attribute, EffectOperation::BitwiseAnd, mask)
    }

    /// Bitwise-xor `attribute` with `mask`.
    pub const fn bitwise_xor(attribute: AttributeKey, mask: i32) -> Self {
        Self::new(attribute, EffectOperation::BitwiseXor, mask)
    }
}

impl std::fmt::Display for LayeredEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}({}) on {:?} at layer {}",
            self.operation, self.modification, self.attribute, self.layer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_layer_zero() {
        let effect = LayeredEffect::new(AttributeKey::Power, EffectOperation::Add, 3);
        assert_eq!(effect.layer, 0);
    }

    #[test]
    fn test_with_layer() {
        let effect = LayeredEffect::add(AttributeKey::Power, 3).with_layer(-2);
        assert_eq!(effect.layer, -2);
        assert_eq!(effect.attribute, AttributeKey::Power);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(
            LayeredEffect::set(AttributeKey::Loyalty, 4).operation,
            EffectOperation::Set
        );
        assert_eq!(
            LayeredEffect::subtract(AttributeKey::Toughness, 1).operation,
            EffectOperation::Subtract
        );
        assert_eq!(
            LayeredEffect::multiply(AttributeKey::Power, 2).operation,
            EffectOperation::Multiply
        );
        assert_eq!(
            LayeredEffect::bitwise_or(AttributeKey::Color, 0b01).operation,
            EffectOperation::BitwiseOr
        );
        assert_eq!(
            LayeredEffect::bitwise_and(AttributeKey::Types, 0b11).operation,
            EffectOperation::BitwiseAnd
        );
        assert_eq!(
            LayeredEffect::bitwise_xor(AttributeKey::Subtypes, 0b10).operation,
            EffectOperation::BitwiseXor
        );
    }

    #[test]
    fn test_default_is_the_invalid_effect() {
        let effect = LayeredEffect::default();
        assert_eq!(effect.attribute, AttributeKey::Invalid);
        assert_eq!(effect.operation, EffectOperation::Invalid);
        assert_eq!(effect.modification, 0);
        assert_eq!(effect.layer, 0);
    }

    #[test]
    fn test_effects_compare_by_value() {
        let a = LayeredEffect::add(AttributeKey::Power, 3).with_layer(1);
        let b = LayeredEffect::add(AttributeKey::Power, 3).with_layer(1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let effect = LayeredEffect::add(AttributeKey::Power, 3).with_layer(1);
        assert_eq!(format!("{}", effect), "Add(3) on Power at layer 1");
    }

    #[test]
    fn test_serialization() {
        let effect = LayeredEffect::multiply(AttributeKey::Toughness, -2).with_layer(7);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: LayeredEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
