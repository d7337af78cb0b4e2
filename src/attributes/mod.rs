//! Attribute storage: keys, value records, and the per-object store.
//!
//! The store owns base values. Current values are derived state - only the
//! engine's recomputation writes them, so a record can never drift out of
//! sync with its effects except between a mutation and the recompute that
//! the same call performs.

pub mod key;
pub mod record;
pub mod store;

pub use key::AttributeKey;
pub use record::AttributeRecord;
pub use store::AttributeStore;
