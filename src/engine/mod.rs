//! The attribute engine: configuration, mutation history, and the
//! composition root.
//!
//! `LayeredAttributes` is the type callers hold, one instance per game
//! object. It owns an `AttributeStore` and the per-key effect stacks, and
//! keeps current values consistent by recomputing on every mutation.

pub mod config;
pub mod history;
pub mod layered;

pub use config::AttributeConfig;
pub use history::{Change, ChangeLog, ChangeRecord};
pub use layered::LayeredAttributes;
