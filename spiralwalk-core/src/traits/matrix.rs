//! Ragged matrix abstraction traits
//!
//! A walked matrix is an ordered sequence of rows where any row may be
//! absent and rows may differ in length. These traits let the walker read
//! such data from the usual container shapes without copying it.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// One row of a ragged matrix
///
/// Returning `None` from [`MatrixRow::cells`] marks the row as absent. An
/// absent row and an empty row are both rendered as placeholders, but only a
/// present row contributes to the matrix width.
pub trait MatrixRow {
    /// The element type stored in this row
    type Element: MatrixElement;

    /// Cells of this row, or `None` if the row is absent
    fn cells(&self) -> Option<&[Self::Element]>;
}

/// Read-only access to a ragged matrix
///
/// Implemented for slices, vectors and arrays of any [`MatrixRow`], and for
/// `Option<M>` where `None` is an absent matrix with no rows.
pub trait RaggedMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Number of rows, absent rows included
    fn row_count(&self) -> usize;

    /// Get a row by index
    ///
    /// Returns `None` if the row is absent or the index is out of bounds.
    fn row(&self, index: usize) -> Option<&[Self::Element]>;

    /// Get a cell by position
    ///
    /// Returns `None` for absent rows and for columns past the row's length.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element> {
        self.row(row).and_then(|cells| cells.get(col)).copied()
    }
}

impl<T: MatrixElement> MatrixRow for Vec<T> {
    type Element = T;

    fn cells(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: MatrixElement> MatrixRow for Option<Vec<T>> {
    type Element = T;

    fn cells(&self) -> Option<&[T]> {
        self.as_deref()
    }
}

impl<T: MatrixElement> MatrixRow for &[T] {
    type Element = T;

    fn cells(&self) -> Option<&[T]> {
        Some(*self)
    }
}

impl<T: MatrixElement> MatrixRow for Option<&[T]> {
    type Element = T;

    fn cells(&self) -> Option<&[T]> {
        *self
    }
}

impl<T: MatrixElement, const N: usize> MatrixRow for [T; N] {
    type Element = T;

    fn cells(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<R: MatrixRow> RaggedMatrix for [R] {
    type Element = R::Element;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[Self::Element]> {
        self.get(index).and_then(|row| row.cells())
    }
}

impl<R: MatrixRow> RaggedMatrix for Vec<R> {
    type Element = R::Element;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[Self::Element]> {
        self.as_slice().row(index)
    }
}

impl<R: MatrixRow, const N: usize> RaggedMatrix for [R; N] {
    type Element = R::Element;

    fn row_count(&self) -> usize {
        N
    }

    fn row(&self, index: usize) -> Option<&[Self::Element]> {
        self.as_slice().row(index)
    }
}

impl<M: RaggedMatrix> RaggedMatrix for Option<M> {
    type Element = M::Element;

    fn row_count(&self) -> usize {
        self.as_ref().map_or(0, |matrix| matrix.row_count())
    }

    fn row(&self, index: usize) -> Option<&[Self::Element]> {
        self.as_ref().and_then(|matrix| matrix.row(index))
    }
}

impl<M: RaggedMatrix + ?Sized> RaggedMatrix for &M {
    type Element = M::Element;

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn row(&self, index: usize) -> Option<&[Self::Element]> {
        (**self).row(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_rows_of_nested_vectors() {
        let matrix = vec![vec![1, 2, 3], vec![4]];
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.row(1), Some(&[4][..]));
        assert_eq!(matrix.row(2), None);
        assert_eq!(matrix.get_element(0, 2), Some(3));
        assert_eq!(matrix.get_element(1, 1), None);
    }

    #[test]
    fn test_absent_rows() {
        let matrix: Vec<Option<Vec<i64>>> = vec![None, Some(vec![]), Some(vec![7])];
        assert_eq!(matrix.row(0), None);
        assert_eq!(matrix.row(1), Some(&[][..]));
        assert_eq!(matrix.get_element(2, 0), Some(7));
    }

    #[test]
    fn test_absent_matrix_has_no_rows() {
        let absent: Option<Vec<Vec<i32>>> = None;
        assert_eq!(absent.row_count(), 0);
        assert_eq!(absent.row(0), None);

        let present = Some([[1u8, 2], [3, 4]]);
        assert_eq!(present.row_count(), 2);
        assert_eq!(present.get_element(1, 0), Some(3));
    }

    #[test]
    fn test_borrowed_slices() {
        let top = [5i32, 6];
        let rows: [Option<&[i32]>; 2] = [Some(&top[..]), None];
        assert_eq!(rows.row(0), Some(&top[..]));
        assert_eq!(rows.row(1), None);
    }
}
