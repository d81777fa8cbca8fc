//! Separator-aware text accumulation

use alloc::string::{String, ToString};

/// Joins text fragments with a separator
///
/// Fragment joining skips empty fragments. Cell pushing does not look at the
/// buffer: the caller says whether a cell is the first, so cells that render
/// to nothing still get their separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorJoiner<'a> {
    separator: &'a str,
}

impl<'a> SeparatorJoiner<'a> {
    /// Create a joiner for the given separator
    pub const fn new(separator: &'a str) -> Self {
        Self { separator }
    }

    /// The separator placed between fragments
    pub const fn separator(&self) -> &'a str {
        self.separator
    }

    /// Combine `existing` with `fragment`
    ///
    /// An empty fragment returns `existing` unchanged, otherwise the result is
    /// `existing + separator + fragment`.
    pub fn join(&self, existing: &str, fragment: &str) -> String {
        let mut combined = String::with_capacity(
            existing.len() + self.separator.len() + fragment.len(),
        );
        combined.push_str(existing);
        self.append(&mut combined, fragment);
        combined
    }

    /// In-place form of [`SeparatorJoiner::join`]
    pub fn append(&self, buffer: &mut String, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        buffer.push_str(self.separator);
        buffer.push_str(fragment);
    }

    /// Push one rendered cell, preceded by the separator unless it is the `first`
    pub fn push_cell<D: core::fmt::Display + ?Sized>(
        &self,
        buffer: &mut String,
        cell: &D,
        first: bool,
    ) {
        if !first {
            buffer.push_str(self.separator);
        }
        buffer.push_str(&cell.to_string());
    }
}

impl Default for SeparatorJoiner<'static> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEPARATOR)
    }
}
