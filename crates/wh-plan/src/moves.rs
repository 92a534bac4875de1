//! Moves and plans.

use std::fmt;

use wh_core::{Coord, UnitId};

/// An exchange of the contents of two adjacent cells.
///
/// A `Move` is an intention only; whether it succeeds is decided when it is
/// applied (`Grid::apply_swap`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to:   Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// One step along `row`.
    #[inline]
    pub const fn lateral(row: usize, from_column: usize, to_column: usize) -> Self {
        Self::new(Coord::new(from_column, row), Coord::new(to_column, row))
    }

    /// One step along `column`.
    #[inline]
    pub const fn vertical(column: usize, from_row: usize, to_row: usize) -> Self {
        Self::new(Coord::new(column, from_row), Coord::new(column, to_row))
    }

    #[inline]
    pub fn is_lateral(self) -> bool {
        self.from.row == self.to.row && self.from.column != self.to.column
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        self.from.column == self.to.column && self.from.row != self.to.row
    }

    /// `true` if either end of the move is `at`.
    #[inline]
    pub fn touches(self, at: Coord) -> bool {
        self.from == at || self.to == at
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Destination class of a plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlanKind {
    /// Storage slot → delivery row.
    Dispatch,
    /// Delivery row → storage slot.
    Return,
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanKind::Dispatch => f.write_str("dispatch"),
            PlanKind::Return   => f.write_str("return"),
        }
    }
}

/// The ordered moves produced for one selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub kind:        PlanKind,
    pub unit:        UnitId,
    pub origin:      Coord,
    pub destination: Coord,
    pub moves:       Vec<Move>,
}

impl Plan {
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
