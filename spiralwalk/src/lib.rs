//! Spiralwalk - Clockwise Spiral Traversal of Ragged Matrices
//!
//! This library renders two-dimensional integer arrays as text by visiting
//! every cell clockwise, outer ring first, starting at the top-left corner.
//! Absent rows and short rows are filled with a placeholder so the output
//! always covers the full bounding rectangle.
//!
//! ## Architecture
//!
//! Spiralwalk follows a core/implementation separation:
//!
//! - **spiralwalk-core**: `no_std` traversal algorithm, value types, traits and validation
//! - **spiralwalk**: JSON input, settings files, runtime element types, parallel batches and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use spiralwalk::{SpiralWalker, WalkerConfig};
//!
//! let walker = SpiralWalker::new(WalkerConfig::default().with_null_value_replacement("?"))?;
//! let matrix = spiralwalk::input::parse_matrix::<i32>("[[1, 2], null]")?;
//!
//! let walk = walker.walk(&matrix);
//! assert_eq!(walk.text(), "1, 2, ?, ?");
//! assert_eq!(walk.elements_walked(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - **serde**: JSON matrix documents and settings files
//! - **cli**: the `spiralwalk` command line tool

// Re-export core abstractions
pub use spiralwalk_core::{
    // Traversal
    SpiralWalker, Walk, SeparatorJoiner,
    // Configuration
    WalkerConfig, DEFAULT_NULL_VALUE_REPLACEMENT, DEFAULT_SEPARATOR,
    // Value types and traits
    BoundingShape, Direction, Position, DataType, MatrixElement, MatrixRow, RaggedMatrix,
    // Error handling
    SpiralError, Result, ErrorCategory,
    // Parsing and validation
    parse_data_type, parse_position, validate_origin,
};

// Implementation modules
pub mod batch;
#[cfg(feature = "serde")]
pub mod dynamic;
#[cfg(feature = "serde")]
pub mod input;
#[cfg(feature = "serde")]
pub mod settings;

pub use batch::{walk_batch, BatchSummary};
#[cfg(feature = "serde")]
pub use batch::walk_dynamic_batch;

#[cfg(feature = "serde")]
pub use dynamic::DynamicMatrix;
#[cfg(feature = "serde")]
pub use input::{InputError, JsonMatrix};
#[cfg(feature = "serde")]
pub use settings::load_config;
