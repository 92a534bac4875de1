//! Static configuration: grid layout and playback cadence.
//!
//! Both structs are fixed at construction.  Applications typically build
//! them in code or, with the `serde` feature, load them from JSON.

use crate::{Coord, WhError, WhResult};

// ── LayoutConfig ──────────────────────────────────────────────────────────────

/// Shape of the warehouse floor.
///
/// ```text
///   column:  0 1 2 3 4 5 6 7 ...
///   row 0    U U U U U U . U      U = storage unit, . = aisle (empty)
///   ...                           # = blocked
///   row r-2  . . . . . . . .      dispatch lane
///   row r-1  . . . . . . . .      delivery row
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub columns: usize,
    pub rows:    usize,

    /// Period between aisle columns.  Column `c` is an aisle when
    /// `c > 1 && c % aisle_freq == 0`.
    pub aisle_freq: usize,

    /// Number of trailing rows reserved for dispatch.  The first of them is
    /// the lane units travel along; the last is where they are delivered.
    pub dispatch_zone_size: usize,

    /// Permanently impassable cells.
    ///
    /// Blocked cells are expected to sit at least two rows apart vertically
    /// within any lane segment: the rotation maneuver borrows the two rows
    /// next to a blocked row.  Layouts that break this still build; plans
    /// that cannot find a detour are rejected at selection time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: Vec<Coord>,
}

impl Default for LayoutConfig {
    /// 18 × 10 floor, an aisle every 6 columns, two dispatch rows, nothing
    /// blocked.
    fn default() -> Self {
        Self {
            columns:            18,
            rows:               10,
            aisle_freq:         6,
            dispatch_zone_size: 2,
            blocked:            Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Replace the blocked-cell set.
    pub fn with_blocked(mut self, blocked: impl IntoIterator<Item = Coord>) -> Self {
        self.blocked = blocked.into_iter().collect();
        self
    }

    #[inline]
    pub fn is_aisle_column(&self, column: usize) -> bool {
        column > 1 && column < self.columns && column % self.aisle_freq == 0
    }

    #[inline]
    pub fn is_dispatch_row(&self, row: usize) -> bool {
        row < self.rows && row + self.dispatch_zone_size >= self.rows
    }

    /// Rows `0..storage_rows()` hold storage; the rest is the dispatch band.
    #[inline]
    pub fn storage_rows(&self) -> usize {
        self.rows.saturating_sub(self.dispatch_zone_size)
    }

    /// Check every static rule.  The first violation found is returned.
    pub fn validate(&self) -> WhResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(WhError::EmptyGrid { columns: self.columns, rows: self.rows });
        }
        if self.aisle_freq < 2 {
            return Err(WhError::AisleFrequency(self.aisle_freq));
        }
        if self.aisle_freq >= self.columns {
            return Err(WhError::NoAisle { columns: self.columns, aisle_freq: self.aisle_freq });
        }
        if self.dispatch_zone_size < 2 {
            return Err(WhError::DispatchZone(self.dispatch_zone_size));
        }
        if self.rows <= self.dispatch_zone_size {
            return Err(WhError::NoStorageRows {
                rows:               self.rows,
                dispatch_zone_size: self.dispatch_zone_size,
            });
        }

        for &cell in &self.blocked {
            if cell.column >= self.columns || cell.row >= self.rows {
                return Err(WhError::BlockedOutOfBounds(cell));
            }
            if self.is_aisle_column(cell.column) {
                return Err(WhError::BlockedOnAisle(cell));
            }
            if self.is_dispatch_row(cell.row) {
                return Err(WhError::BlockedInDispatchZone(cell));
            }
        }

        let mut sorted = self.blocked.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(WhError::DuplicateBlocked(pair[0]));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Playback parameters for the move scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Minimum number of ticks between two applied moves.  0 applies one
    /// move on every tick.  Default: 30 (half a second at 60 frames/s).
    pub move_delay_ticks: u64,

    /// A new selection is refused while more than this many moves are still
    /// queued.  Default: 1.
    pub max_pending_moves: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_delay_ticks:  30,
            max_pending_moves: 1,
        }
    }
}
