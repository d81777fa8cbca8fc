//! Parsing utilities for walker arguments
//!
//! This module provides pure parsing functions for the textual forms of
//! walker settings with no I/O dependencies.

use crate::geometry::Position;
use crate::traits::DataType;
use crate::SpiralError;

/// Parse a position string in the format "x,y" or "x:y"
///
/// Whitespace around either component is ignored. Components may be
/// negative; rejecting negative origins is left to
/// [`validate_origin`](super::validate_origin).
pub fn parse_position(position_str: &str) -> Result<Position, SpiralError> {
    let separator = position_str
        .find([',', ':'])
        .ok_or(SpiralError::InvalidPosition)?;

    let x = parse_isize(position_str[..separator].trim())?;
    let y = parse_isize(position_str[separator + 1..].trim())?;

    Ok(Position::new(x, y))
}

/// Parse an element type name such as "i32" or "u64"
///
/// Matching is case-insensitive.
pub fn parse_data_type(name: &str) -> Result<DataType, SpiralError> {
    DataType::ALL
        .into_iter()
        .find(|data_type| data_type.name().eq_ignore_ascii_case(name.trim()))
        .ok_or(SpiralError::UnknownDataType)
}

/// Parse a signed integer with an optional leading '-'
///
/// Parses manually to stay free of `std` and to tell overflow apart from
/// malformed input.
fn parse_isize(s: &str) -> Result<isize, SpiralError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if digits.is_empty() {
        return Err(SpiralError::InvalidPosition);
    }

    let mut result: isize = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SpiralError::InvalidPosition);
        }

        let digit = (byte - b'0') as isize;

        // Accumulate towards the sign so isize::MIN stays reachable
        result = result
            .checked_mul(10)
            .and_then(|value| {
                if negative {
                    value.checked_sub(digit)
                } else {
                    value.checked_add(digit)
                }
            })
            .ok_or(SpiralError::NumericOverflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        // Valid comma format
        assert_eq!(parse_position("0,0"), Ok(Position::ORIGIN));
        assert_eq!(parse_position("3, 4"), Ok(Position::new(3, 4)));

        // Valid colon format
        assert_eq!(parse_position("5:15"), Ok(Position::new(5, 15)));

        // Negative components parse, validation happens later
        assert_eq!(parse_position("-1,2"), Ok(Position::new(-1, 2)));

        // Invalid cases
        assert_eq!(parse_position(""), Err(SpiralError::InvalidPosition));
        assert_eq!(parse_position("10"), Err(SpiralError::InvalidPosition)); // no separator
        assert_eq!(parse_position("1,"), Err(SpiralError::InvalidPosition)); // empty y
        assert_eq!(parse_position("a,b"), Err(SpiralError::InvalidPosition));
        assert_eq!(parse_position("1,-"), Err(SpiralError::InvalidPosition));
    }

    #[test]
    fn test_parse_isize() {
        assert_eq!(parse_isize("0"), Ok(0));
        assert_eq!(parse_isize("123"), Ok(123));
        assert_eq!(parse_isize("-42"), Ok(-42));
        assert_eq!(parse_isize(&alloc::format!("{}", isize::MIN)), Ok(isize::MIN));
        assert_eq!(parse_isize(&alloc::format!("{}", isize::MAX)), Ok(isize::MAX));

        // Invalid cases
        assert_eq!(parse_isize(""), Err(SpiralError::InvalidPosition));
        assert_eq!(parse_isize("12a"), Err(SpiralError::InvalidPosition));
        assert_eq!(parse_isize("+1"), Err(SpiralError::InvalidPosition));
        assert_eq!(
            parse_isize("99999999999999999999999"),
            Err(SpiralError::NumericOverflow)
        );
    }

    #[test]
    fn test_parse_data_type() {
        assert_eq!(parse_data_type("i32"), Ok(DataType::I32));
        assert_eq!(parse_data_type("U64"), Ok(DataType::U64));
        assert_eq!(parse_data_type(" isize "), Ok(DataType::Isize));
        assert_eq!(parse_data_type("f64"), Err(SpiralError::UnknownDataType));
        assert_eq!(parse_data_type(""), Err(SpiralError::UnknownDataType));
    }
}
