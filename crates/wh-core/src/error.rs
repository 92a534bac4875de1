//! Configuration error type.
//!
//! Every variant describes a static layout that would leave the topology
//! resolver or the planner in an inconsistent state.  These are fatal at
//! start-up; nothing in the running simulation produces a `WhError`.

use thiserror::Error;

use crate::Coord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WhError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("aisle_freq must be at least 2 (got {0})")]
    AisleFrequency(usize),

    #[error("no aisle column fits in {columns} columns with aisle_freq {aisle_freq}")]
    NoAisle { columns: usize, aisle_freq: usize },

    #[error("dispatch_zone_size must be at least 2 (got {0})")]
    DispatchZone(usize),

    #[error("{rows} rows leave no storage rows above a dispatch zone of {dispatch_zone_size}")]
    NoStorageRows { rows: usize, dispatch_zone_size: usize },

    #[error("blocked cell {0} is outside the grid")]
    BlockedOutOfBounds(Coord),

    #[error("blocked cell {0} lies on an aisle column")]
    BlockedOnAisle(Coord),

    #[error("blocked cell {0} lies inside the dispatch zone")]
    BlockedInDispatchZone(Coord),

    #[error("blocked cell {0} is listed more than once")]
    DuplicateBlocked(Coord),
}

/// Shorthand result type for layout validation.
pub type WhResult<T> = Result<T, WhError>;
