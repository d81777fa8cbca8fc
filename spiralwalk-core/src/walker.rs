//! Clockwise spiral traversal
//!
//! The walk visits the outer ring of a matrix clockwise starting at the
//! top-left corner heading right, then each inner ring in turn, until every
//! cell of the [`BoundingShape`] has been emitted. Cells that cannot be read
//! (absent rows, columns past a short row) are emitted as a placeholder.
//!
//! The traversal is a loop over [`Direction`] states. Each iteration walks one
//! edge of the current ring, renders it to a fragment and hands the loop the
//! step to continue from. All counters live in state local to the call, so a
//! configured [`SpiralWalker`] can be shared freely between threads.

use alloc::string::String;

use crate::config::WalkerConfig;
use crate::geometry::{BoundingShape, Direction, Position};
use crate::joiner::SeparatorJoiner;
use crate::traits::RaggedMatrix;
use crate::validation::validate_origin;

/// Number of consecutive empty edges that make up a full idle rotation
const EDGES_PER_RING: usize = 4;

/// Walks ragged matrices in clockwise inward spiral order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpiralWalker {
    config: WalkerConfig,
}

/// Output of one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    text: String,
    elements_walked: usize,
    placeholders: usize,
    shape: BoundingShape,
}

/// Where the loop continues from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    direction: Direction,
    position: Position,
    /// Rings already consumed from each side
    offset: isize,
}

/// Rendered cells and how many there are
///
/// The count decides separator placement; an empty placeholder renders to
/// nothing but is still a cell.
#[derive(Debug, Default)]
struct Fragment {
    text: String,
    cells: usize,
}

/// Result of walking one edge
struct Edge {
    fragment: Fragment,
    next: Step,
}

/// Counters scoped to a single walk
struct WalkState<'w, M: ?Sized> {
    matrix: &'w M,
    shape: BoundingShape,
    joiner: SeparatorJoiner<'w>,
    placeholder: &'w str,
    visited: usize,
    placeholders: usize,
}

impl SpiralWalker {
    /// Create a walker from configuration
    ///
    /// Fails if the configured origin is not `(0, 0)`.
    pub fn new(config: WalkerConfig) -> crate::Result<Self> {
        validate_origin(config.origin)?;
        Ok(Self { config })
    }

    /// The configuration this walker was built with
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk a matrix and render every cell in spiral order
    ///
    /// An absent matrix, a matrix with no rows and a matrix whose present rows
    /// are all empty produce empty output. Otherwise the output holds exactly
    /// `width * row_count` separator-joined cells.
    pub fn walk<M: RaggedMatrix + ?Sized>(&self, matrix: &M) -> Walk {
        let shape = BoundingShape::of(matrix);
        if shape.is_empty() {
            return Walk::empty(shape);
        }

        let mut state = WalkState {
            matrix,
            shape,
            joiner: SeparatorJoiner::new(&self.config.separator),
            placeholder: &self.config.null_value_replacement,
            visited: 0,
            placeholders: 0,
        };
        let mut output = Fragment::default();
        let mut step = Step::start(self.config.origin);
        let mut idle_edges = 0;

        while !step.direction.is_terminal() {
            let edge = match step.direction {
                Direction::Right => state.walk_right(step),
                Direction::Down => state.walk_down(step),
                Direction::Left => state.walk_left(step),
                Direction::Up => state.walk_up(step),
                Direction::Terminal => break,
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(
                direction = %step.direction,
                start = %step.position,
                offset = step.offset,
                cells = edge.fragment.cells,
                visited = state.visited,
                "walked edge"
            );

            if edge.fragment.cells == 0 {
                idle_edges += 1;
            } else {
                idle_edges = 0;
            }
            state.accumulate(&mut output, edge.fragment);
            step = edge.next;

            if state.remaining() == 0 {
                step.direction = Direction::Terminal;
            } else if idle_edges == EDGES_PER_RING {
                debug_assert!(
                    idle_edges < EDGES_PER_RING,
                    "spiral stalled with {} of {} cells remaining",
                    state.remaining(),
                    state.shape.theoretical_total
                );
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    remaining = state.remaining(),
                    shape = %state.shape,
                    "spiral stalled"
                );
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            shape = %state.shape,
            elements_walked = state.visited,
            placeholders = state.placeholders,
            "spiral walk finished"
        );

        Walk {
            text: output.text,
            elements_walked: state.visited,
            placeholders: state.placeholders,
            shape,
        }
    }
}

impl Step {
    const fn start(origin: Position) -> Self {
        Self {
            direction: Direction::Right,
            position: origin,
            offset: 0,
        }
    }

    /// Continue clockwise from `position`
    const fn turn(self, position: Position, offset: isize) -> Self {
        Self {
            direction: self.direction.clockwise(),
            position,
            offset,
        }
    }
}

impl<'w, M: RaggedMatrix + ?Sized> WalkState<'w, M> {
    /// Row `start.y`, columns `start.x` up to the ring's right edge
    fn walk_right(&mut self, step: Step) -> Edge {
        let Step {
            position, offset, ..
        } = step;
        let x_end = self.width() - offset;
        let mut fragment = Fragment::default();

        for x in position.x..x_end {
            if self.remaining() == 0 {
                break;
            }
            self.emit(&mut fragment, x, position.y);
        }

        Edge {
            fragment,
            next: step.turn(Position::new(x_end - 1, position.y + 1), offset),
        }
    }

    /// Column `start.x`, rows `start.y` down to the ring's bottom edge
    fn walk_down(&mut self, step: Step) -> Edge {
        let Step {
            position, offset, ..
        } = step;
        let y_end = self.row_count() - 1 - offset;
        let mut fragment = Fragment::default();

        for y in position.y..=y_end {
            if self.remaining() == 0 {
                break;
            }
            self.emit(&mut fragment, position.x, y);
        }

        Edge {
            fragment,
            next: step.turn(Position::new(position.x - 1, y_end), offset),
        }
    }

    /// Row `start.y`, columns `start.x` back to the ring's left edge
    ///
    /// The ring offset advances only when the row is present; an absent row
    /// leaves it unchanged so the following up edge reaches the ring's top row.
    fn walk_left(&mut self, step: Step) -> Edge {
        let Step {
            position, offset, ..
        } = step;
        let row_present = self.row_present(position.y);
        let mut fragment = Fragment::default();

        for x in (offset..=position.x).rev() {
            if self.remaining() == 0 {
                break;
            }
            self.emit(&mut fragment, x, position.y);
        }

        let offset_after = if row_present { offset + 1 } else { offset };
        Edge {
            fragment,
            next: step.turn(Position::new(offset, position.y - 1), offset_after),
        }
    }

    /// Column `start.x`, rows `start.y` back up to the ring's top edge
    fn walk_up(&mut self, step: Step) -> Edge {
        let Step {
            position, offset, ..
        } = step;
        let mut last_y = 0;
        let mut fragment = Fragment::default();

        for y in (offset..=position.y).rev() {
            if self.remaining() == 0 {
                break;
            }
            self.emit(&mut fragment, position.x, y);
            last_y = y;
        }

        Edge {
            fragment,
            next: step.turn(Position::new(position.x + 1, last_y), offset),
        }
    }

    /// Render the cell at `(x, y)` into `fragment` and count it
    fn emit(&mut self, fragment: &mut Fragment, x: isize, y: isize) {
        let first = fragment.cells == 0;
        match self.cell(x, y) {
            Some(value) => self.joiner.push_cell(&mut fragment.text, &value, first),
            None => {
                self.joiner
                    .push_cell(&mut fragment.text, self.placeholder, first);
                self.placeholders += 1;
            }
        }
        fragment.cells += 1;
        self.visited += 1;
    }

    /// Append an edge to the walk output without a leading separator
    fn accumulate(&self, output: &mut Fragment, fragment: Fragment) {
        if fragment.cells == 0 {
            return;
        }
        if output.cells == 0 {
            *output = fragment;
        } else {
            output.text.push_str(self.joiner.separator());
            output.text.push_str(&fragment.text);
            output.cells += fragment.cells;
        }
    }

    fn remaining(&self) -> usize {
        self.shape.theoretical_total - self.visited
    }

    fn width(&self) -> isize {
        self.shape.width as isize
    }

    fn row_count(&self) -> isize {
        self.shape.row_count as isize
    }

    fn row_present(&self, y: isize) -> bool {
        usize::try_from(y).is_ok_and(|y| self.matrix.row(y).is_some())
    }

    /// Read a cell; negative coordinates read as absent
    fn cell(&self, x: isize, y: isize) -> Option<M::Element> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.matrix.get_element(y, x)
    }
}

impl Walk {
    fn empty(shape: BoundingShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// The rendered cells, separator-joined
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the rendered text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of cells emitted, real and interpolated
    pub fn elements_walked(&self) -> usize {
        self.elements_walked
    }

    /// Number of cells emitted as the placeholder
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Shape the matrix was walked as
    pub fn shape(&self) -> BoundingShape {
        self.shape
    }

    /// True if no cell was emitted
    pub fn is_empty(&self) -> bool {
        self.elements_walked == 0
    }
}

impl core::fmt::Display for Walk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Walk> for String {
    fn from(walk: Walk) -> Self {
        walk.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpiralError;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn walk(matrix: &[Option<Vec<i32>>]) -> Walk {
        SpiralWalker::default().walk(matrix)
    }

    #[test]
    fn test_walk_rectangular_matrix() {
        let result = walk(&[
            Some(vec![2, 3, 4, 8]),
            Some(vec![5, 7, 9, 12]),
            Some(vec![1, 0, 6, 10]),
        ]);
        assert_eq!(result.text(), "2, 3, 4, 8, 12, 10, 6, 0, 1, 5, 7, 9");
        assert_eq!(result.elements_walked(), 12);
        assert_eq!(result.placeholders(), 0);
    }

    #[test]
    fn test_walk_interpolates_absent_row() {
        let result = walk(&[Some(vec![2, 3, 4, 8]), None, Some(vec![1, 0, 6, 10])]);
        assert_eq!(result.text(), "2, 3, 4, 8, -, 10, 6, 0, 1, -, -, -");
        assert_eq!(result.elements_walked(), 12);
        assert_eq!(result.placeholders(), 4);
    }

    #[test]
    fn test_walk_interpolates_short_rows() {
        let result = walk(&[Some(vec![1, 2]), Some(vec![]), Some(vec![3])]);
        assert_eq!(result.text(), "1, 2, -, -, 3, -");
        assert_eq!(result.elements_walked(), 6);
    }

    #[test]
    fn test_walk_small_matrices() {
        assert_eq!(walk(&[Some(vec![1])]).text(), "1");
        assert_eq!(walk(&[Some(vec![1]), Some(vec![2])]).text(), "1, 2");
        assert_eq!(walk(&[Some(vec![]), Some(vec![2])]).text(), "-, 2");
        assert_eq!(walk(&[None, Some(vec![2])]).text(), "-, 2");
        assert_eq!(walk(&[Some(vec![1]), Some(vec![])]).text(), "1, -");
    }

    #[test]
    fn test_empty_placeholder_keeps_every_cell() {
        let walker =
            SpiralWalker::new(WalkerConfig::default().with_null_value_replacement("")).unwrap();

        let result = walker.walk(&[None, Some(vec![2])]);
        assert_eq!(result.text(), ", 2");
        assert_eq!(result.elements_walked(), 2);

        let result = walker.walk(&[
            Some(vec![1, 2, 3]),
            None,
            None,
            None,
            Some(vec![4, 5, 6]),
        ]);
        assert_eq!(result.text(), "1, 2, 3, , , , 6, 5, 4, , , , , , ");
        assert_eq!(result.elements_walked(), 15);
        assert_eq!(result.text().split(", ").count(), 15);
        assert_eq!(result.placeholders(), 9);
    }

    #[test]
    fn test_short_rows_are_padded_to_full_width() {
        let result = walk(&[Some(vec![1]), Some(vec![2, 3]), Some(vec![4, 5])]);
        assert_eq!(result.text(), "1, -, 3, 5, 4, 2");

        let result = walk(&[Some(vec![1, 2, 3]), Some(vec![4]), Some(vec![7, 8, 9])]);
        assert_eq!(result.text(), "1, 2, 3, -, 9, 8, 7, 4, -");

        let result = walk(&[
            Some(vec![1, 2, 3, 4]),
            Some(vec![5, 6, 7]),
            Some(vec![9, 10, 11, 12]),
            Some(vec![13, 14, 15, 16]),
        ]);
        assert_eq!(
            result.text(),
            "1, 2, 3, 4, -, 12, 16, 15, 14, 13, 9, 5, 6, 7, 11, 10"
        );
        assert_eq!(result.placeholders(), 1);
    }

    #[test]
    fn test_every_small_ragged_matrix_walks_its_full_shape() {
        // Each row is absent or holds 0..=3 cells; every combination up to 4 rows.
        const ROW_KINDS: usize = 5;
        let row = |kind: usize| (kind > 0).then(|| (0..kind as i32 - 1).collect::<Vec<_>>());

        let walkers = [
            SpiralWalker::default(),
            SpiralWalker::new(WalkerConfig::default().with_null_value_replacement("")).unwrap(),
        ];

        for rows in 0..=4u32 {
            for mut code in 0..ROW_KINDS.pow(rows) {
                let matrix: Vec<Option<Vec<i32>>> = (0..rows)
                    .map(|_| {
                        let kind = code % ROW_KINDS;
                        code /= ROW_KINDS;
                        row(kind)
                    })
                    .collect();
                let shape = BoundingShape::of(&matrix);

                for walker in &walkers {
                    let result = walker.walk(&matrix);
                    assert_eq!(
                        result.elements_walked(),
                        shape.theoretical_total,
                        "{matrix:?}"
                    );
                    if !result.is_empty() {
                        assert_eq!(
                            result.text().split(", ").count(),
                            shape.theoretical_total,
                            "{matrix:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_walk_empty_inputs() {
        let walker = SpiralWalker::default();

        let absent: Option<Vec<Vec<i32>>> = None;
        let result = walker.walk(&absent);
        assert_eq!(result.text(), "");
        assert_eq!(result.elements_walked(), 0);

        for matrix in [
            vec![],
            vec![None],
            vec![None, None],
            vec![Some(vec![])],
            vec![None, Some(vec![])],
            vec![Some(vec![]), None],
        ] {
            let result = walk(&matrix);
            assert!(result.is_empty(), "expected empty walk for {matrix:?}");
            assert_eq!(result.text(), "");
        }
    }

    #[test]
    fn test_walk_renders_extremal_values() {
        let result = walk(&[None, Some(vec![-2, i32::MAX, 4, 8])]);
        assert_eq!(result.text(), "-, -, -, -, 8, 4, 2147483647, -2");

        let result = walk(&[Some(vec![-2, i32::MIN, 4, 8])]);
        assert_eq!(result.text(), "-2, -2147483648, 4, 8");
        assert_eq!(result.elements_walked(), 4);
    }

    #[test]
    fn test_walk_two_rows() {
        let result = walk(&[Some(vec![1, 1, 1, 1]), Some(vec![-2, 0, 4, 8])]);
        assert_eq!(result.text(), "1, 1, 1, 1, 8, 4, 0, -2");

        let result = walk(&[Some(vec![1, 1, 1, 1]), None]);
        assert_eq!(result.text(), "1, 1, 1, 1, -, -, -, -");
    }

    #[test]
    fn test_walk_inner_rings() {
        let matrix = vec![
            vec![1, 2, 3, 4],
            vec![12, 13, 14, 5],
            vec![11, 16, 15, 6],
            vec![10, 9, 8, 7],
        ];
        let result = SpiralWalker::default().walk(&matrix);
        assert_eq!(
            result.text(),
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16"
        );

        let tall = [[1, 2, 3], [10, 11, 4], [9, 12, 5], [8, 7, 6]];
        let result = SpiralWalker::default().walk(&tall);
        assert_eq!(result.text(), "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12");
    }

    #[test]
    fn test_absent_bottom_row_keeps_ring_offset() {
        // The left edge over an absent row does not consume the ring, so the
        // up edge climbs back to the top row until the total is reached.
        let result = walk(&[Some(vec![1, 2]), Some(vec![3, 4]), None]);
        assert_eq!(result.text(), "1, 2, 4, -, -, 3");
        assert_eq!(result.elements_walked(), 6);
    }

    #[test]
    fn test_walk_with_custom_separator_and_placeholder() {
        let config = WalkerConfig::default()
            .with_separator("|")
            .with_null_value_replacement("null");
        let walker = SpiralWalker::new(config).unwrap();
        let result = walker.walk(&[Some(vec![7, 8]), None]);
        assert_eq!(result.text(), "7|8|null|null");
        assert_eq!(result.to_string(), "7|8|null|null");
    }

    #[test]
    fn test_walker_is_reusable() {
        let walker = SpiralWalker::default();
        let matrix = vec![Some(vec![2, 3, 4, 8]), None, Some(vec![1, 0, 6, 10])];
        let first = walker.walk(&matrix);
        let second = walker.walk(&matrix);
        assert_eq!(first, second);
    }

    #[test]
    fn test_walker_rejects_other_origins() {
        let origin = Position::new(1, 1);
        let result = SpiralWalker::new(WalkerConfig::default().with_origin(origin));
        assert_eq!(result, Err(SpiralError::UnsupportedOrigin(origin)));

        let origin = Position::new(-1, 0);
        let result = SpiralWalker::new(WalkerConfig::default().with_origin(origin));
        assert_eq!(result, Err(SpiralError::NegativeOrigin(origin)));
    }
}
