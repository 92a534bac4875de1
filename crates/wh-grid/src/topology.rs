//! Static floor topology and the aisle resolver.
//!
//! # Aisle resolution
//!
//! Aisles sit at every column `c > 1` with `c % aisle_freq == 0`.  A storage
//! column is served by the aisle closest to it:
//!
//! ```text
//! column <= first aisle          → first aisle
//! column >= last aisle           → last aisle
//! otherwise, r = column % freq:
//!     2r <= freq                 → column - r          (ties go left)
//!     2r >  freq                 → column - r + freq
//! ```
//!
//! The last aisle is the last one that fits inside the grid,
//! `((columns - 1) / freq) * freq`.  Left- and right-bound routing share this
//! one resolver.

use rustc_hash::FxHashSet;

use wh_core::{Coord, LayoutConfig, Toward, WhResult};

/// The aisle serving a column, the way to get there, and how far it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Approach {
    pub aisle:    usize,
    pub toward:   Toward,
    pub distance: usize,
}

/// Immutable layout facts derived once from a validated [`LayoutConfig`].
#[derive(Clone, Debug)]
pub struct Topology {
    layout:  LayoutConfig,
    blocked: FxHashSet<Coord>,
}

impl Topology {
    /// Validate `layout` and index its blocked cells.
    pub fn new(layout: LayoutConfig) -> WhResult<Self> {
        layout.validate()?;
        let blocked = layout.blocked.iter().copied().collect();
        Ok(Self { layout, blocked })
    }

    #[inline]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    #[inline]
    pub fn aisle_freq(&self) -> usize {
        self.layout.aisle_freq
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.column < self.layout.columns && at.row < self.layout.rows
    }

    // ── Static predicates ─────────────────────────────────────────────────

    #[inline]
    pub fn is_aisle_column(&self, column: usize) -> bool {
        self.layout.is_aisle_column(column)
    }

    #[inline]
    pub fn is_dispatch_row(&self, row: usize) -> bool {
        self.layout.is_dispatch_row(row)
    }

    #[inline]
    pub fn is_blocked(&self, at: Coord) -> bool {
        self.blocked.contains(&at)
    }

    /// A cell where units are stored at rest: inside the grid, not on an
    /// aisle, not in the dispatch band, not blocked.
    pub fn is_storage_cell(&self, at: Coord) -> bool {
        self.contains(at)
            && !self.is_aisle_column(at.column)
            && !self.is_dispatch_row(at.row)
            && !self.is_blocked(at)
    }

    /// Number of storage rows above the dispatch band.
    #[inline]
    pub fn storage_rows(&self) -> usize {
        self.layout.storage_rows()
    }

    /// First row of the dispatch band; units cross it laterally.
    #[inline]
    pub fn lane_row(&self) -> usize {
        self.layout.storage_rows()
    }

    /// Last row of the grid; delivered units park here.
    #[inline]
    pub fn delivery_row(&self) -> usize {
        self.layout.rows - 1
    }

    /// Iterate over blocked cells in no particular order.
    pub fn blocked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocked.iter().copied()
    }

    // ── Aisle resolver ────────────────────────────────────────────────────

    #[inline]
    pub fn first_aisle(&self) -> usize {
        self.layout.aisle_freq
    }

    #[inline]
    pub fn last_aisle(&self) -> usize {
        let freq = self.layout.aisle_freq;
        (self.layout.columns - 1) / freq * freq
    }

    /// Aisle columns, left to right.
    pub fn aisles(&self) -> impl Iterator<Item = usize> {
        (self.first_aisle()..=self.last_aisle()).step_by(self.layout.aisle_freq)
    }

    /// The aisle closest to `column`.  See the module docs for the rule.
    pub fn nearest_aisle(&self, column: usize) -> usize {
        let first = self.first_aisle();
        let last = self.last_aisle();
        if column <= first {
            return first;
        }
        if column >= last {
            return last;
        }
        let freq = self.layout.aisle_freq;
        let rem = column % freq;
        if 2 * rem <= freq {
            column - rem
        } else {
            column - rem + freq
        }
    }

    /// Where a unit standing in `column` should head to reach its aisle.
    pub fn approach(&self, column: usize) -> Approach {
        let aisle = self.nearest_aisle(column);
        Approach {
            aisle,
            toward:   Toward::between(column, aisle),
            distance: column.abs_diff(aisle),
        }
    }

    /// Storage columns on one `side` of `aisle` that resolve to it, as
    /// `(nearest, farthest)`.  `None` if no column on that side does.
    pub fn reach(&self, aisle: usize, side: Toward) -> Option<(usize, usize)> {
        let step = side.step();
        if step == 0 {
            return None;
        }
        let mut far = None;
        let mut column = aisle;
        while let Some(next) = column.checked_add_signed(step) {
            if next >= self.layout.columns
                || self.is_aisle_column(next)
                || self.nearest_aisle(next) != aisle
            {
                break;
            }
            far = Some(next);
            column = next;
        }
        let near = aisle.checked_add_signed(step)?;
        far.map(|far| (near, far))
    }
}
