//! Error types for spiral walk configuration and parsing

use crate::geometry::Position;

/// Errors that can occur while configuring a walker or parsing its inputs
///
/// Walking itself never fails: absent matrices, absent rows and short rows
/// are valid sparse input and are handled by placeholder substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralError {
    /// Origin has a negative coordinate
    NegativeOrigin(Position),
    /// Origin is valid but traversal from it is not supported
    UnsupportedOrigin(Position),
    /// Position string could not be parsed
    InvalidPosition,
    /// Numeric component overflowed while parsing
    NumericOverflow,
    /// Element type name not recognised
    UnknownDataType,
}

/// Broad grouping of [`SpiralError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller violated a walker precondition
    Precondition,
    /// Textual input was malformed
    Parse,
}

impl SpiralError {
    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpiralError::NegativeOrigin(_) | SpiralError::UnsupportedOrigin(_) => {
                ErrorCategory::Precondition
            }
            SpiralError::InvalidPosition
            | SpiralError::NumericOverflow
            | SpiralError::UnknownDataType => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for SpiralError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpiralError::NegativeOrigin(origin) => {
                write!(f, "Origin {origin} has a negative coordinate")
            }
            SpiralError::UnsupportedOrigin(origin) => {
                write!(f, "Walking from origin {origin} is not supported, only (0, 0)")
            }
            SpiralError::InvalidPosition => write!(f, "Invalid position, expected \"x,y\""),
            SpiralError::NumericOverflow => write!(f, "Numeric value out of range"),
            SpiralError::UnknownDataType => write!(f, "Unknown element data type"),
        }
    }
}

impl core::error::Error for SpiralError {}

/// Result type for spiral walk operations
pub type Result<T> = core::result::Result<T, SpiralError>;
