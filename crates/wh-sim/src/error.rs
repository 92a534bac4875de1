use thiserror::Error;

use wh_core::Coord;
use wh_grid::GridError;
use wh_plan::PlanError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("grid construction failed: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Why a selection did not lead to a queued plan.
///
/// A rejection never changes the grid or the queue.
/// [`Rejection::OutOfBounds`] clears the selection; a rejected plan leaves
/// the clicked cell selected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("a plan is still playing back ({pending} moves queued)")]
    PlanInFlight { pending: usize },

    #[error(transparent)]
    Plan(#[from] PlanError),
}
