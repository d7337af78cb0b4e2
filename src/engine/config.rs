//! Engine configuration.
//!
//! Instances are configured at construction. The knobs are deliberately
//! few: the default attribute value and the integer overflow behavior.
//! Both default to the standard rules - unreferenced attributes read 0
//! and arithmetic wraps.

use serde::{Deserialize, Serialize};

use crate::effects::ArithmeticMode;

/// Configuration for one `LayeredAttributes` instance.
///
/// ## Example
///
/// ```
/// use layered_attributes::{ArithmeticMode, AttributeConfig};
///
/// let config = AttributeConfig::new().with_arithmetic(ArithmeticMode::Saturating);
/// assert_eq!(config.default_value, 0);
/// assert_eq!(config.arithmetic, ArithmeticMode::Saturating);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    /// The value every attribute reads as until something sets it: the
    /// starting base and current of newly created records, and the result
    /// of reading a key no mutation has referenced.
    pub default_value: i32,

    /// Integer behavior for the arithmetic effect operations.
    pub arithmetic: ArithmeticMode,
}

impl AttributeConfig {
    /// Create the default configuration: default value 0, wrapping
    /// arithmetic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default attribute value (builder pattern).
    #[must_use]
    pub fn with_default_value(mut self, value: i32) -> Self {
        self.default_value = value;
        self
    }

    /// Set the arithmetic mode (builder pattern).
    #[must_use]
    pub fn with_arithmetic(mut self, mode: ArithmeticMode) -> Self {
        self.arithmetic = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AttributeConfig::default();
        assert_eq!(config.default_value, 0);
        assert_eq!(config.arithmetic, ArithmeticMode::Wrapping);
        assert_eq!(config, AttributeConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = AttributeConfig::new()
            .with_default_value(-1)
            .with_arithmetic(ArithmeticMode::Saturating);

        assert_eq!(config.default_value, -1);
        assert_eq!(config.arithmetic, ArithmeticMode::Saturating);
    }

    #[test]
    fn test_serialization() {
        let config = AttributeConfig::new().with_default_value(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AttributeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
