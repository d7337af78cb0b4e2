//! Ordered per-attribute effect stacks.
//!
//! Every attribute with at least one effect carries an `EffectStack`. The
//! stack keeps its effects in application order at all times - ascending
//! layer, same-layer effects in insertion order - so recomputation is a
//! plain left-to-right fold with no sorting on the hot path.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::LayeredEffect;
use super::operation::ArithmeticMode;

/// The layered effects targeting one attribute, in application order.
///
/// ## Ordering invariant
///
/// `push` inserts the new effect after every stored effect whose layer is
/// less than or equal to its own. The stored sequence is therefore exactly
/// the fold sequence: ascending layer, ties in insertion order. A push at a
/// lower layer lands in front of earlier pushes at higher layers.
///
/// ## Example
///
/// ```
/// use layered_attributes::{ArithmeticMode, AttributeKey, EffectStack, LayeredEffect};
///
/// let mut stack = EffectStack::new();
/// stack.push(LayeredEffect::add(AttributeKey::Power, 3).with_layer(1));
/// stack.push(LayeredEffect::multiply(AttributeKey::Power, 2).with_layer(1));
///
/// // Same layer, so insertion order: (0 + 3) * 2
/// assert_eq!(stack.fold(0, ArithmeticMode::Wrapping), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectStack {
    // Inline capacity of 4: most attributes carry a handful of effects.
    effects: SmallVec<[LayeredEffect; 4]>,
}

impl EffectStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an effect at its application position.
    ///
    /// The effect lands after every stored effect whose layer is `<=` its
    /// own, which keeps ascending layer order and preserves insertion order
    /// within a layer.
    pub fn push(&mut self, effect: LayeredEffect) {
        let at = self.effects.partition_point(|other| other.layer <= effect.layer);
        self.effects.insert(at, effect);
    }

    /// Fold the stack over `base`, one operation per effect, in stored
    /// order. An empty stack returns `base` unchanged.
    #[must_use]
    pub fn fold(&self, base: i32, mode: ArithmeticMode) -> i32 {
        self.effects.iter().fold(base, |value, effect| {
            effect.operation.apply(value, effect.modification, mode)
        })
    }

    /// Get the effects in application order.
    #[must_use]
    pub fn effects(&self) -> &[LayeredEffect] {
        &self.effects
    }

    /// Get the number of effects on this stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the stack holds no effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &LayeredEffect> {
        self.effects.iter()
    }
}

impl IntoIterator for EffectStack {
    type Item = LayeredEffect;
    type IntoIter = smallvec::IntoIter<[LayeredEffect; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl FromIterator<LayeredEffect> for EffectStack {
    fn from_iter<I: IntoIterator<Item = LayeredEffect>>(iter: I) -> Self {
        let mut stack = Self::new();
        for effect in iter {
            stack.push(effect);
        }
        stack
    }
}
