use thiserror::Error;

use wh_core::Coord;
use wh_grid::{Cell, SwapConflict};

use crate::Move;

/// Why no plan was produced.  Planning never mutates the grid, so every
/// variant leaves the simulation exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("{at} holds no unit ({cell})")]
    NotAUnit { at: Coord, cell: Cell },

    #[error("{0} is not a storage slot")]
    NotInStorage(Coord),

    #[error("{0} is not in the delivery row")]
    NotInDeliveryRow(Coord),

    #[error("no empty delivery slots")]
    NoEmptyDeliverySlot,

    #[error("no empty slot found")]
    NoEmptySlot,

    #[error("no free rows to rotate around the lane of {0}")]
    NoDetour(Coord),

    #[error("move #{index} {mv} would fail: {conflict}")]
    Obstructed {
        index:    usize,
        mv:       Move,
        conflict: SwapConflict,
    },
}

pub type PlanResult<T> = Result<T, PlanError>;
