//! The currently selected cell.

use std::fmt;

use wh_core::Coord;

/// Transient selection state: `active` plus the cell it points at.  The
/// coordinate is kept when the selection is cleared, matching what a
/// renderer last highlighted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub active: bool,
    pub column: usize,
    pub row:    usize,
}

impl Selection {
    /// The selected cell, if any.
    #[inline]
    pub fn current(&self) -> Option<Coord> {
        self.active.then(|| Coord::new(self.column, self.row))
    }

    /// `true` if `at` is the active selection.
    #[inline]
    pub fn is(&self, at: Coord) -> bool {
        self.current() == Some(at)
    }

    pub fn select(&mut self, at: Coord) {
        self.active = true;
        self.column = at.column;
        self.row = at.row;
    }

    pub fn clear(&mut self) {
        self.active = false;
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some(at) => write!(f, "selected {at}"),
            None     => f.write_str("nothing selected"),
        }
    }
}
