//! Grid geometry
//!
//! Positions and sizes are expressed in character cells. Positions order
//! row-major (row first, then column) so sorted collections of positions
//! iterate the grid top-to-bottom, left-to-right.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column (0-indexed)
    pub column: usize,
    /// Row (0-indexed)
    pub row: usize,
}

impl Position {
    /// The top-left cell
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub const fn with_column(self, column: usize) -> Self {
        Self { column, ..self }
    }

    /// Shift the column by `delta`, stopping at 0
    pub fn with_relative_column(self, delta: isize) -> Self {
        Self {
            column: self.column.saturating_add_signed(delta),
            ..self
        }
    }

    /// Shift the row by `delta`, stopping at 0
    pub fn with_relative_row(self, delta: isize) -> Self {
        Self {
            row: self.row.saturating_add_signed(delta),
            ..self
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub columns: usize,
    pub rows: usize,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
        }
    }
}

impl Size {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Whether `position` addresses a cell inside this size
    pub fn contains(&self, position: Position) -> bool {
        position.column < self.columns && position.row < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
