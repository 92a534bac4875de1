//! Per-cell state.

use std::fmt;

use wh_core::UnitId;

/// Contents of one grid cell.
///
/// `InTransit` is a `StorageUnit` that is on its way to the delivery row.  It
/// is drawn differently but occupies its cell exactly like a parked unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Blocked,
    StorageUnit(UnitId),
    InTransit(UnitId),
}

impl Cell {
    /// The unit occupying this cell, whether parked or moving.
    #[inline]
    pub fn unit(self) -> Option<UnitId> {
        match self {
            Cell::StorageUnit(id) | Cell::InTransit(id) => Some(id),
            Cell::Empty | Cell::Blocked => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        self.unit().is_some()
    }

    /// The same unit relabelled as moving.  Other cells are returned as-is.
    pub fn in_transit(self) -> Cell {
        match self {
            Cell::StorageUnit(id) => Cell::InTransit(id),
            other => other,
        }
    }

    /// The same unit relabelled as parked.  Other cells are returned as-is.
    pub fn settled(self) -> Cell {
        match self {
            Cell::InTransit(id) => Cell::StorageUnit(id),
            other => other,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty           => f.write_str("empty"),
            Cell::Blocked         => f.write_str("blocked"),
            Cell::StorageUnit(id) => write!(f, "unit {}", id.0),
            Cell::InTransit(id)   => write!(f, "unit {} (in transit)", id.0),
        }
    }
}
