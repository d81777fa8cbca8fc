#![no_std]

//! Spiralwalk Core - Clockwise Spiral Traversal Definitions
//!
//! This crate provides the traversal algorithm, value types and traits for
//! walking ragged integer matrices in clockwise, outer-ring-first order.
//!
//! ```rust
//! use spiralwalk_core::SpiralWalker;
//!
//! let matrix = vec![Some(vec![2, 3, 4, 8]), None, Some(vec![1, 0, 6, 10])];
//! let walk = SpiralWalker::default().walk(&matrix);
//!
//! assert_eq!(walk.text(), "2, 3, 4, 8, -, 10, 6, 0, 1, -, -, -");
//! assert_eq!(walk.elements_walked(), 12);
//! ```

extern crate alloc;

pub mod config;
pub mod error;
pub mod geometry;
pub mod joiner;
pub mod traits;
pub mod validation;
pub mod walker;

pub use config::{WalkerConfig, DEFAULT_NULL_VALUE_REPLACEMENT, DEFAULT_SEPARATOR};
pub use error::*;
pub use geometry::{BoundingShape, Direction, Position};
pub use joiner::SeparatorJoiner;
pub use traits::*;
pub use validation::{parse_data_type, parse_position, validate_origin};
pub use walker::{SpiralWalker, Walk};
