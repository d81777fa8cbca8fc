//! Walker configuration
//!
//! Configuration is fixed when a walker is built. It holds no per-walk state,
//! so one configured walker can serve any number of walks.

use alloc::string::String;

use crate::geometry::Position;

/// Separator placed between rendered cells unless configured otherwise
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Text substituted for cells that cannot be read unless configured otherwise
pub const DEFAULT_NULL_VALUE_REPLACEMENT: &str = "-";

/// Configuration for a [`SpiralWalker`](crate::SpiralWalker)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkerConfig {
    /// Text placed between rendered cells
    pub separator: String,
    /// Placeholder for absent rows and columns past a row's length
    pub null_value_replacement: String,
    /// Where the walk starts
    pub origin: Position,
}

impl WalkerConfig {
    /// Set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the placeholder text
    pub fn with_null_value_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.null_value_replacement = replacement.into();
        self
    }

    /// Set the traversal origin
    ///
    /// Only `(0, 0)` is supported; anything else is rejected when the walker
    /// is built.
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            separator: String::from(DEFAULT_SEPARATOR),
            null_value_replacement: String::from(DEFAULT_NULL_VALUE_REPLACEMENT),
            origin: Position::ORIGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = WalkerConfig::default()
            .with_separator("; ")
            .with_null_value_replacement("null");
        assert_eq!(config.separator, "; ");
        assert_eq!(config.null_value_replacement, "null");
        assert_eq!(config.origin, Position::ORIGIN);
    }
}
