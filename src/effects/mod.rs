//! Layered effects: operations, definitions, and ordered stacks.
//!
//! Effects are plain data. Nothing in this module touches attribute
//! records - the engine composes a stack's `fold` with the store's base
//! values and writes the result back as the current value.

pub mod definition;
pub mod operation;
pub mod stack;

pub use definition::LayeredEffect;
pub use operation::{ArithmeticMode, EffectOperation};
pub use stack::EffectStack;
