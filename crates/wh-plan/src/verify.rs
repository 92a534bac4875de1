//! Dry runs of move lists against a scratch copy of the grid.

use tracing::debug;

use wh_grid::Grid;

use crate::{Move, PlanError, PlanResult};

/// Apply `moves` in order to a copy of `grid` and return the resulting grid.
///
/// Fails on the first move whose swap would be refused, so a plan that
/// passes is guaranteed to play back without conflicts on `grid`.
pub fn verify(grid: &Grid, moves: &[Move]) -> PlanResult<Grid> {
    let mut scratch = grid.clone();
    for (index, &mv) in moves.iter().enumerate() {
        scratch
            .apply_swap(mv.from, mv.to)
            .map_err(|conflict| PlanError::Obstructed { index, mv, conflict })?;
    }
    Ok(scratch)
}

/// The grid as it will look once `moves` have been played back.
///
/// Refused moves are skipped, exactly as the scheduler skips them.
pub fn project<'a>(grid: &Grid, moves: impl IntoIterator<Item = &'a Move>) -> Grid {
    let mut scratch = grid.clone();
    for mv in moves {
        if let Err(conflict) = scratch.apply_swap(mv.from, mv.to) {
            debug!(%mv, %conflict, "projection skipped a refused move");
        }
    }
    scratch
}
