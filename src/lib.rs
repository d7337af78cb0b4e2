//! # layered-attributes
//!
//! A layered attribute engine for game objects.
//!
//! Game objects carry "base" attributes representing their default state.
//! The game applies any number of "layered effects" on top of them; an
//! object's "current" attributes always equal the base attributes with
//! every effect applied in the proper order. Any change to a base value or
//! to the effects is reflected in the current values before the mutating
//! call returns.
//!
//! ## Design Principles
//!
//! 1. **Recompute on write, O(1) read**: every mutation re-derives the
//!    affected attribute, so `current` is always a precomputed lookup.
//!    Reads never allocate and never create records.
//!
//! 2. **Deterministic ordering**: effects apply in ascending layer order,
//!    and effects sharing a layer apply in the order they were added. The
//!    order is maintained structurally in the per-key stacks, not
//!    re-derived per read.
//!
//! 3. **One instance per object**: no shared or global state. Engines that
//!    fork objects during search clone the instance; the mutation history
//!    shares structure via persistent data structures.
//!
//! 4. **Tolerate garbage, never fail**: `Invalid` keys and operations are
//!    accepted and behave as inert values. No operation panics or returns
//!    an error.
//!
//! ## Example
//!
//! ```
//! use layered_attributes::{AttributeKey, LayeredAttributes, LayeredEffect};
//!
//! let mut monster = LayeredAttributes::new();
//!
//! monster.add_effect(LayeredEffect::add(AttributeKey::Power, 3).with_layer(1));
//! assert_eq!(monster.current(AttributeKey::Power), 3);
//!
//! monster.add_effect(LayeredEffect::multiply(AttributeKey::Power, 2).with_layer(1));
//! assert_eq!(monster.current(AttributeKey::Power), 6);
//!
//! monster.set_base(AttributeKey::Power, 10);
//! assert_eq!(monster.current(AttributeKey::Power), 26); // (10 + 3) * 2
//!
//! // Unreferenced attributes read as the default.
//! assert_eq!(monster.current(AttributeKey::Supertypes), 0);
//! ```
//!
//! ## Modules
//!
//! - `attributes`: attribute keys, value records, the per-object store
//! - `effects`: effect operations, definitions, and ordered stacks
//! - `engine`: configuration, mutation history, and `LayeredAttributes`

pub mod attributes;
pub mod effects;
pub mod engine;

// Re-export commonly used types
pub use crate::attributes::{AttributeKey, AttributeRecord, AttributeStore};

pub use crate::effects::{ArithmeticMode, EffectOperation, EffectStack, LayeredEffect};

pub use crate::engine::{AttributeConfig, Change, ChangeLog, ChangeRecord, LayeredAttributes};
