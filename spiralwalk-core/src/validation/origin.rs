//! Origin validation for walker construction
//!
//! Pure precondition checks on a configured traversal origin.

use crate::geometry::Position;
use crate::SpiralError;

/// Validate a traversal origin
///
/// Negative coordinates are rejected outright. Non-negative origins other
/// than the top-left corner are well-formed but no traversal is defined for
/// them, so they are rejected as unsupported.
pub const fn validate_origin(origin: Position) -> Result<(), SpiralError> {
    if origin.is_negative() {
        return Err(SpiralError::NegativeOrigin(origin));
    }

    if origin.x != 0 || origin.y != 0 {
        return Err(SpiralError::UnsupportedOrigin(origin));
    }

    Ok(())
}
