//! The layered attribute engine.
//!
//! `LayeredAttributes` composes the attribute store with one effect stack
//! per targeted key and keeps the two consistent: every mutation folds the
//! affected key's stack over its base value before returning, so reads are
//! O(1) lookups of precomputed state no matter how many effects are active.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeKey, AttributeRecord, AttributeStore};
use crate::effects::{EffectStack, LayeredEffect};

use super::config::AttributeConfig;
use super::history::{Change, ChangeLog};

/// Layered attribute state for one game object.
///
/// An object carries base attributes representing its default state. The
/// game applies any number of layered effects on top; the current
/// attributes always equal the base attributes with every effect applied
/// in the proper order. Changing a base value or the effects re-derives
/// the current value before the mutating call returns.
///
/// Each object owns one independent instance - there is no shared or
/// global attribute state, and instances clone cheaply for engines that
/// fork objects during search.
///
/// ## Effect ordering
///
/// Effects apply in ascending layer order. Effects sharing a layer apply
/// in the order they were added. The order is maintained structurally in
/// the per-key stacks, not re-derived per read.
///
/// ## Error tolerance
///
/// Nothing validates inputs: `Invalid` keys index their own (useless)
/// record, and `Invalid` operations are stored and fold as no-ops. No
/// mutation panics or fails.
///
/// ## Example
///
/// ```
/// use layered_attributes::{AttributeKey, LayeredAttributes, LayeredEffect};
///
/// let mut monster = LayeredAttributes::new();
/// monster.add_effect(LayeredEffect::add(AttributeKey::Power, 3).with_layer(1));
/// monster.add_effect(LayeredEffect::multiply(AttributeKey::Power, 2).with_layer(1));
/// monster.set_base(AttributeKey::Power, 10);
///
/// // (10 + 3) * 2
/// assert_eq!(monster.current(AttributeKey::Power), 26);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayeredAttributes {
    /// Base/current records for every referenced key.
    store: AttributeStore,

    /// Ordered effect stacks, one per key with at least one effect.
    effects: FxHashMap<AttributeKey, EffectStack>,

    /// Instance configuration, fixed at construction.
    config: AttributeConfig,

    /// Every mutation applied to this instance, oldest first.
    log: ChangeLog,
}

impl LayeredAttributes {
    /// Create an instance with the default configuration (default value 0,
    /// wrapping arithmetic).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AttributeConfig::default())
    }

    /// Create an instance with the given configuration.
    #[must_use]
    pub fn with_config(config: AttributeConfig) -> Self {
        Self {
            store: AttributeStore::new(config.default_value),
            effects: FxHashMap::default(),
            config,
            log: ChangeLog::new(),
        }
    }

    /// Get this instance's configuration.
    #[must_use]
    pub fn config(&self) -> &AttributeConfig {
        &self.config
    }

    // === Mutations ===

    /// Set the base value for an attribute.
    ///
    /// Base values default to the configured value until set. Existing
    /// layered effects are untouched: the current value becomes the new
    /// base with the same effects applied on top.
    pub fn set_base(&mut self, key: AttributeKey, value: i32) {
        self.store.record_mut(key).set_base(value);
        self.recompute(key);
        self.log.record(Change::BaseSet {
            attribute: key,
            value,
        });
    }

    /// Apply a new layered effect.
    ///
    /// Any number of effects may be active at once. Effects are not
    /// necessarily applied in the order added: lower layers apply first,
    /// and only same-layer effects keep their insertion order. The effect
    /// is not validated - an `Invalid` operation is stored and folds as a
    /// no-op.
    pub fn add_effect(&mut self, effect: LayeredEffect) {
        self.effects
            .entry(effect.attribute)
            .or_default()
            .push(effect);
        self.recompute(effect.attribute);
        self.log.record(Change::EffectAdded { effect });
    }

    /// Remove every layered effect from this object.
    ///
    /// Afterwards all current attributes equal their base attributes.
    /// Base values are preserved.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
        self.store.reset_current_to_base();
        self.log.record(Change::EffectsCleared);
    }

    // === Reads ===

    /// Get the current value of an attribute: the base value with every
    /// applicable layered effect folded in.
    ///
    /// Pure read. A key no mutation has referenced reads as the configured
    /// default, and no record is created.
    #[must_use]
    pub fn current(&self, key: AttributeKey) -> i32 {
        self.store.current(key)
    }

    /// Get the base value of an attribute (the configured default if it
    /// was never set).
    #[must_use]
    pub fn base(&self, key: AttributeKey) -> i32 {
        self.store.base(key)
    }

    /// Get the effects targeting `key`, in application order.
    #[must_use]
    pub fn effects(&self, key: AttributeKey) -> &[LayeredEffect] {
        match self.effects.get(&key) {
            Some(stack) => stack.effects(),
            None => &[],
        }
    }

    /// Get the number of effects targeting `key`.
    #[must_use]
    pub fn effect_count(&self, key: AttributeKey) -> usize {
        self.effects.get(&key).map_or(0, EffectStack::len)
    }

    /// Check if any effect targets `key`.
    #[must_use]
    pub fn has_effects(&self, key: AttributeKey) -> bool {
        self.effect_count(key) > 0
    }

    /// Get the total number of active effects across all keys.
    #[must_use]
    pub fn total_effect_count(&self) -> usize {
        self.effects.values().map(EffectStack::len).sum()
    }

    /// Get the number of keys referenced by any mutation so far.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.store.len()
    }

    /// Look up the value record for `key`, if any mutation has referenced
    /// it.
    #[must_use]
    pub fn record(&self, key: AttributeKey) -> Option<&AttributeRecord> {
        self.store.record(key)
    }

    /// Iterate over referenced keys and their value records.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeRecord)> {
        self.store.iter()
    }

    /// Get the history of every mutation on this instance.
    #[must_use]
    pub fn history(&self) -> &ChangeLog {
        &self.log
    }

    // === Recomputation ===

    /// Re-derive the current value for one key: fold the key's effect
    /// stack, already in application order, over the base value.
    ///
    /// Only `key` is touched. Every other key's current value stays valid
    /// because each mutation recomputes exactly the key it affects.
    fn recompute(&mut self, key: AttributeKey) {
        let record = self.store.record_mut(key);
        let current = match self.effects.get(&key) {
            Some(stack) => stack.fold(record.base(), self.config.arithmetic),
            None => record.base(),
        };
        record.set_current(current);
    }
}

impl Default for LayeredAttributes {
    fn default() -> Self {
        Self::new()
    }
}
