//! Grid coordinates and lateral directions.

use std::fmt;

/// A `(column, row)` position on the grid.  Row 0 is the top row; the
/// dispatch band sits at the bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub column: usize,
    pub row:    usize,
}

impl Coord {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Manhattan distance between two coordinates.
    #[inline]
    pub fn manhattan(self, other: Coord) -> usize {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// `true` if `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Lateral direction from a storage column toward the aisle serving it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Toward {
    Left,
    Right,
    /// The column already is the aisle.
    Here,
}

impl Toward {
    /// Direction that leads from column `from` to column `to`.
    pub fn between(from: usize, to: usize) -> Self {
        match from.cmp(&to) {
            std::cmp::Ordering::Less    => Toward::Right,
            std::cmp::Ordering::Greater => Toward::Left,
            std::cmp::Ordering::Equal   => Toward::Here,
        }
    }

    /// Column delta of one step in this direction.
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Toward::Left  => -1,
            Toward::Right => 1,
            Toward::Here  => 0,
        }
    }
}

impl fmt::Display for Toward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Toward::Left  => "left",
            Toward::Right => "right",
            Toward::Here  => "here",
        };
        f.write_str(s)
    }
}
