//! Abstract interfaces for walked matrices
//!
//! This module defines the trait abstractions the walker reads through.
//! Traits are pure interfaces; implementations cover the standard containers.

pub mod element;
pub mod matrix;

pub use element::{DataType, MatrixElement};
pub use matrix::{MatrixRow, RaggedMatrix};
