//! Cursor arithmetic over a flat roster laid out as a row-major grid.
//!
//! Only the last row of a grid may be short. The resolver never produces an
//! index outside `0..len`, and every move wraps around instead of stopping at
//! an edge.
//!
//! Vertical moves that would land on a column the short last row lacks do not
//! behave symmetrically: moving up skips the short row entirely, moving down
//! lands back on row 0 in the same column. Both behaviours are kept as-is and
//! pinned by tests.

use crate::direction::{Direction, Step};

/// Errors produced when describing a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must contain at least one item")]
    Empty,

    #[error("grid must have at least one column")]
    ZeroColumns,
}

/// Validated dimensions of a grid: item count and column count, both non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    len: usize,
    columns: usize,
}

impl GridShape {
    pub const fn new(len: usize, columns: usize) -> Result<Self, GridError> {
        if len == 0 {
            return Err(GridError::Empty);
        }
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        Ok(Self { len, columns })
    }

    /// Number of items in the grid.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with collections.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows, counting a partially filled last row.
    pub const fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    pub const fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Returns `(row, column)` of an index.
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Number of items present in `row` (zero past the last row).
    pub fn row_len(&self, row: usize) -> usize {
        let start = row.saturating_mul(self.columns);
        self.len.saturating_sub(start).min(self.columns)
    }

    /// Computes the cursor index after moving one cell in `direction`.
    ///
    /// `current` is expected to be inside the grid; an out-of-range value is
    /// treated as the last item so the result stays in range.
    pub fn resolve(&self, current: usize, direction: Direction) -> usize {
        let current = current.min(self.len - 1);
        let (row, col) = self.coords(current);
        let rows = self.rows();
        let columns = self.columns;

        match direction {
            Direction::Up => {
                let candidate = (row + rows - 1) % rows * columns + col;
                if candidate < self.len {
                    candidate
                } else {
                    // Row above is the short last row; jump one more row up.
                    (row + 2 * rows - 2) % rows * columns + col
                }
            }
            Direction::Down => {
                let candidate = (row + 1) % rows * columns + col;
                if candidate < self.len { candidate } else { col }
            }
            Direction::Left => {
                let candidate = row * columns + (col + columns - 1) % columns;
                if candidate < self.len {
                    candidate
                } else {
                    (row * columns + columns - 1).min(self.len - 1)
                }
            }
            Direction::Right => {
                let candidate = row * columns + (col + 1) % columns;
                if candidate < self.len {
                    candidate
                } else {
                    row * columns
                }
            }
        }
    }

    /// Walks the grid in roster order, wrapping at both ends.
    pub fn cycle(&self, current: usize, step: Step) -> usize {
        let current = current.min(self.len - 1);
        match step {
            Step::Next => (current + 1) % self.len,
            Step::Previous => (current + self.len - 1) % self.len,
        }
    }
}

/// Resolves a directional move without a prebuilt [`GridShape`].
///
/// Returns `None` when `item_count` or `columns` is zero, or when `current`
/// is not a valid index.
pub fn resolve(
    current: usize,
    direction: Direction,
    item_count: usize,
    columns: usize,
) -> Option<usize> {
    let grid = GridShape::new(item_count, columns).ok()?;
    grid.contains(current).then(|| grid.resolve(current, direction))
}
