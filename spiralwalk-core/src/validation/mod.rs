//! Validation and parsing utilities
//!
//! This module contains pure functions with no I/O dependencies for checking
//! walker preconditions and parsing walker settings from text.

pub mod origin;
pub mod parsing;

pub use origin::validate_origin;
pub use parsing::{parse_data_type, parse_position};
