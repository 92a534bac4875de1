use thiserror::Error;

use wh_core::{Coord, WhError};

use crate::Cell;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid layout: {0}")]
    Config(#[from] WhError),
}

pub type GridResult<T> = Result<T, GridError>;

/// Why a swap was refused.  The grid is left untouched in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwapConflict {
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Coord, to: Coord },

    #[error("{0} is blocked")]
    Blocked(Coord),

    #[error("trying to move to not empty position {at} (holds {occupant})")]
    Occupied { at: Coord, occupant: Cell },
}
