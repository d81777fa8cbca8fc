//! Value types shared by the walk state machine
//!
//! [`Position`] and [`Direction`] describe where a walk is and where it is
//! heading next; [`BoundingShape`] is the rectangle a ragged matrix is treated
//! as.

use crate::traits::RaggedMatrix;

/// A column/row coordinate pair
///
/// Coordinates are signed: when a ring is narrower than one column the state
/// machine transiently steps to the column before `0`, and that position must
/// be representable even though no cell is read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column index
    pub x: isize,
    /// Row index
    pub y: isize,
}

impl Position {
    /// The top-left corner
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Create a position from column and row
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// True if either coordinate is negative
    pub const fn is_negative(&self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel along one edge of a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the ring's top row, towards higher columns
    Right,
    /// Along the ring's right column, towards higher rows
    Down,
    /// Along the ring's bottom row, back towards column zero
    Left,
    /// Along the ring's left column, back towards row zero
    Up,
    /// Every cell of the bounding shape has been visited
    Terminal,
}

impl Direction {
    /// Next direction in clockwise order
    ///
    /// `Terminal` is absorbing.
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
            Direction::Terminal => Direction::Terminal,
        }
    }

    /// True once the walk has finished
    pub const fn is_terminal(self) -> bool {
        matches!(self, Direction::Terminal)
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::Terminal => write!(f, "terminal"),
        }
    }
}

/// Rectangle a ragged matrix is walked as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingShape {
    /// Number of rows, absent rows included
    pub row_count: usize,
    /// Length of the longest present row
    pub width: usize,
    /// `width * row_count`, the number of cells a walk emits
    pub theoretical_total: usize,
}

impl BoundingShape {
    /// Measure a matrix
    ///
    /// A matrix with no present rows has width 0 since no dimension can be
    /// inferred from it.
    pub fn of<M: RaggedMatrix + ?Sized>(matrix: &M) -> Self {
        let row_count = matrix.row_count();
        let width = (0..row_count)
            .filter_map(|index| matrix.row(index))
            .map(<[_]>::len)
            .max()
            .unwrap_or(0);

        Self {
            row_count,
            width,
            theoretical_total: width.saturating_mul(row_count),
        }
    }

    /// True if a walk over this shape emits nothing
    pub const fn is_empty(&self) -> bool {
        self.theoretical_total == 0
    }
}

impl core::fmt::Display for BoundingShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} x {} ({} cells)",
            self.row_count, self.width, self.theoretical_total
        )
    }
}
