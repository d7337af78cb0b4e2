//! Effect operations and integer semantics.
//!
//! Each layered effect names one operation. Recomputation folds a key's
//! effects over its base value, one `apply` step per effect. `Invalid`
//! folds as a no-op: the engine performs no validation when effects are
//! added, so unrecognized operations are tolerated rather than rejected.

use serde::{Deserialize, Serialize};

/// Integer behavior for the arithmetic fold steps.
///
/// The default is wrapping two's-complement arithmetic. `Saturating` clamps
/// at the `i32` bounds instead. The mode is fixed per engine instance and
/// applies to every arithmetic step; bitwise steps cannot overflow and are
/// unaffected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticMode {
    /// Wrap around on overflow (two's complement).
    #[default]
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX` on overflow.
    Saturating,
}

/// What one layered effect does to the running value.
///
/// ```
/// use layered_attributes::{ArithmeticMode, EffectOperation};
///
/// let mode = ArithmeticMode::Wrapping;
/// assert_eq!(EffectOperation::Add.apply(3, 4, mode), 7);
/// assert_eq!(EffectOperation::Set.apply(3, 4, mode), 4);
/// assert_eq!(EffectOperation::Invalid.apply(3, 4, mode), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectOperation {
    /// Sentinel for uninitialized or erroneous values. Folds as a no-op.
    #[default]
    Invalid,
    /// Set the value, discarding whatever it was.
    Set,
    /// Add the modification to the value.
    Add,
    /// Subtract the modification from the value.
    Subtract,
    /// Multiply the value by the modification.
    Multiply,
    /// Bitwise "or" the value with the modification.
    BitwiseOr,
    /// Bitwise "and" the value with the modification.
    BitwiseAnd,
    /// Bitwise "exclusive or" the value with the modification.
    BitwiseXor,
}

impl EffectOperation {
    /// Apply one fold step: combine `value` with `modification`.
    #[must_use]
    pub const fn apply(self, value: i32, modification: i32, mode: ArithmeticMode) -> i32 {
        match self {
            EffectOperation::Invalid => value,
            EffectOperation::Set => modification,
            EffectOperation::Add => match mode {
                ArithmeticMode::Wrapping => value.wrapping_add(modification),
                ArithmeticMode::Saturating => value.saturating_add(modification),
            },
            EffectOperation::Subtract => match mode {
                ArithmeticMode::Wrapping => value.wrapping_sub(modification),
                ArithmeticMode::Saturating => value.saturating_sub(modification),
            },
            EffectOperation::Multiply => match mode {
                ArithmeticMode::Wrapping => value.wrapping_mul(modification),
                ArithmeticMode::Saturating => value.saturating_mul(modification),
            },
            EffectOperation::BitwiseOr => value | modification,
            EffectOperation::BitwiseAnd => value & modification,
            EffectOperation::BitwiseXor => value ^ modification,
        }
    }

    /// Check if this is a real operation rather than the sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, EffectOperation::Invalid)
    }
}

impl std::fmt::Display for EffectOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
